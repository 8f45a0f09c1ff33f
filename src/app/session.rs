// ==========================================
// AirVonment 空气质量决策支持 - 驾驶舱会话状态
// ==========================================
// 职责: 持有当前模式、筛选状态、预报范围、热点开关
// 红线: 每次更新整体替换快照（后写者胜）,不做增量合并
// 约定: 每个视图维护独立的请求代数,用于识别过期的延迟加载结果
// ==========================================

use crate::config::DashboardConfig;
use crate::domain::filter_state::{HotspotToggles, RecommendationFilterState};
use crate::domain::types::{DashboardMode, ForecastRange};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// 驾驶舱视图（每个视图独立追踪请求代数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Recommendations,
    Forecast,
    Hotspots,
}

// ==========================================
// SessionSnapshot - 会话快照（不可变）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub mode: DashboardMode,
    pub forecast_range: ForecastRange,
    pub filter_state: RecommendationFilterState,
    pub hotspot_toggles: HotspotToggles,
    pub revision: u64, // 每次更新 +1
}

// ==========================================
// RequestTicket - 延迟加载请求凭据
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestTicket {
    pub request_id: Uuid,
    pub view: DashboardView,
    pub generation: u64,
    pub issued_at: DateTime<Utc>,
}

// ==========================================
// DashboardSession
// ==========================================
#[derive(Debug, Clone)]
pub struct DashboardSession {
    snapshot: SessionSnapshot,
    generations: HashMap<DashboardView, u64>,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new(DashboardMode::default(), ForecastRange::default())
    }
}

impl DashboardSession {
    pub fn new(mode: DashboardMode, forecast_range: ForecastRange) -> Self {
        Self {
            snapshot: SessionSnapshot {
                mode,
                forecast_range,
                filter_state: RecommendationFilterState::default(),
                hotspot_toggles: HotspotToggles::default(),
                revision: 0,
            },
            generations: HashMap::new(),
        }
    }

    /// 按配置初始化（默认模式与预报范围）
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.default_mode, config.default_forecast_range)
    }

    /// 当前快照（克隆,调用方持有的快照不受后续更新影响）
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot.clone()
    }

    pub fn mode(&self) -> DashboardMode {
        self.snapshot.mode
    }

    pub fn forecast_range(&self) -> ForecastRange {
        self.snapshot.forecast_range
    }

    pub fn filter_state(&self) -> &RecommendationFilterState {
        &self.snapshot.filter_state
    }

    pub fn hotspot_toggles(&self) -> &HotspotToggles {
        &self.snapshot.hotspot_toggles
    }

    pub fn revision(&self) -> u64 {
        self.snapshot.revision
    }

    fn replace(&mut self, next: SessionSnapshot) {
        let revision = self.snapshot.revision + 1;
        self.snapshot = SessionSnapshot { revision, ..next };
        debug!(revision, "会话快照已替换");
    }

    pub fn set_mode(&mut self, mode: DashboardMode) {
        let next = SessionSnapshot {
            mode,
            ..self.snapshot.clone()
        };
        self.replace(next);
    }

    pub fn set_forecast_range(&mut self, forecast_range: ForecastRange) {
        let next = SessionSnapshot {
            forecast_range,
            ..self.snapshot.clone()
        };
        self.replace(next);
    }

    /// 设置单个筛选准则
    pub fn set_filter(&mut self, key: &str, value: &str) {
        let next = SessionSnapshot {
            filter_state: self.snapshot.filter_state.with(key, value),
            ..self.snapshot.clone()
        };
        self.replace(next);
    }

    /// 整体替换筛选状态
    pub fn replace_filter_state(&mut self, filter_state: RecommendationFilterState) {
        let next = SessionSnapshot {
            filter_state,
            ..self.snapshot.clone()
        };
        self.replace(next);
    }

    /// 所有准则恢复为 "all"
    pub fn reset_filters(&mut self) {
        let next = SessionSnapshot {
            filter_state: self.snapshot.filter_state.reset(),
            ..self.snapshot.clone()
        };
        self.replace(next);
    }

    pub fn set_hotspot_toggle(&mut self, key: &str, enabled: bool) {
        let next = SessionSnapshot {
            hotspot_toggles: self.snapshot.hotspot_toggles.with(key, enabled),
            ..self.snapshot.clone()
        };
        self.replace(next);
    }

    /// 翻转热点开关
    pub fn toggle_hotspot(&mut self, key: &str) {
        let enabled = !self.snapshot.hotspot_toggles.is_on(key);
        self.set_hotspot_toggle(key, enabled);
    }

    // ==========================================
    // 请求代数
    // ==========================================

    /// 为视图发起新请求; 同一视图之前发出的请求随即过期
    pub fn begin_request(&mut self, view: DashboardView) -> RequestTicket {
        let generation = self.generations.entry(view).or_insert(0);
        *generation += 1;
        RequestTicket {
            request_id: Uuid::new_v4(),
            view,
            generation: *generation,
            issued_at: Utc::now(),
        }
    }

    /// 凭据是否仍是该视图的最新请求
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.generations.get(&ticket.view).copied() == Some(ticket.generation)
    }
}
