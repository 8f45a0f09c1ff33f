// ==========================================
// AirVonment 空气质量决策支持 - 延迟加载
// ==========================================
// 职责: 按配置的模拟延迟异步交付视图数据
// 约定: 结果仅在凭据仍为该视图最新请求时生效,过期结果丢弃并记录日志
// 约定: 不保证取消,过期任务照常运行至结束
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::app::session::{DashboardSession, DashboardView, RequestTicket, SessionSnapshot};
use crate::config::{DashboardConfigReader, LoadKind};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// 延迟加载结果
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// 凭据仍有效,结果已交付
    Applied { ticket: RequestTicket, value: T },
    /// 同视图已有更新请求,结果被丢弃
    Stale { ticket: RequestTicket },
}

impl<T> LoadOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied { .. })
    }

    pub fn ticket(&self) -> &RequestTicket {
        match self {
            LoadOutcome::Applied { ticket, .. } | LoadOutcome::Stale { ticket } => ticket,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            LoadOutcome::Applied { value, .. } => Some(value),
            LoadOutcome::Stale { .. } => None,
        }
    }
}

// ==========================================
// DeferredLoader
// ==========================================
#[derive(Clone)]
pub struct DeferredLoader {
    session: Arc<Mutex<DashboardSession>>,
    config: Arc<dyn DashboardConfigReader>,
}

impl DeferredLoader {
    pub fn new(session: Arc<Mutex<DashboardSession>>, config: Arc<dyn DashboardConfigReader>) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> Arc<Mutex<DashboardSession>> {
        Arc::clone(&self.session)
    }

    /// 发起请求并返回凭据与当前快照
    fn begin(&self, view: DashboardView) -> ApiResult<(RequestTicket, SessionSnapshot)> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| ApiError::StateLock(e.to_string()))?;
        let ticket = session.begin_request(view);
        Ok((ticket, session.snapshot()))
    }

    fn still_current(&self, ticket: &RequestTicket) -> ApiResult<bool> {
        let session = self
            .session
            .lock()
            .map_err(|e| ApiError::StateLock(e.to_string()))?;
        Ok(session.is_current(ticket))
    }

    /// 启动延迟加载
    ///
    /// # 参数
    /// - view: 目标视图（同视图的旧请求立即过期）
    /// - kind: 加载类型（决定模拟延迟）
    /// - produce: 基于发起时快照计算结果
    ///
    /// # 返回
    /// - JoinHandle: 完成后得到 Applied 或 Stale
    pub fn spawn<T, F>(
        &self,
        view: DashboardView,
        kind: LoadKind,
        produce: F,
    ) -> ApiResult<JoinHandle<ApiResult<LoadOutcome<T>>>>
    where
        T: Send + 'static,
        F: FnOnce(&SessionSnapshot) -> ApiResult<T> + Send + 'static,
    {
        // 凭据在调用方线程内同步取得,保证请求顺序
        let (ticket, snapshot) = self.begin(view)?;
        debug!(request_id = %ticket.request_id, ?view, ?kind, generation = ticket.generation, "延迟加载已发起");

        let loader = self.clone();
        Ok(tokio::spawn(async move {
            let latency = loader.config.get_simulated_latency(kind).await?;
            tokio::time::sleep(latency).await;

            let value = produce(&snapshot)?;

            if loader.still_current(&ticket)? {
                debug!(request_id = %ticket.request_id, ?view, "延迟加载结果已交付");
                Ok(LoadOutcome::Applied { ticket, value })
            } else {
                info!(request_id = %ticket.request_id, ?view, generation = ticket.generation, "过期的延迟加载结果已丢弃");
                Ok(LoadOutcome::Stale { ticket })
            }
        }))
    }

    /// 启动并等待延迟加载完成
    pub async fn load<T, F>(
        &self,
        view: DashboardView,
        kind: LoadKind,
        produce: F,
    ) -> ApiResult<LoadOutcome<T>>
    where
        T: Send + 'static,
        F: FnOnce(&SessionSnapshot) -> ApiResult<T> + Send + 'static,
    {
        let handle = self.spawn(view, kind, produce)?;
        handle
            .await
            .map_err(|e| ApiError::Other(anyhow::anyhow!("延迟加载任务异常退出: {}", e)))?
    }
}
