// ==========================================
// AirVonment 空气质量决策支持 - 配置读取 Trait
// ==========================================
// 职责: 定义会话/延迟加载所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::config_manager::ConfigError;
use crate::domain::types::{DashboardMode, ForecastRange};
use async_trait::async_trait;
use std::time::Duration;

/// 延迟加载类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadKind {
    Recommendations, // 推荐列表生成
    ForecastRange,   // 切换预报时间范围
    ForecastRefresh, // 刷新预报
}

// ==========================================
// DashboardConfigReader Trait
// ==========================================
// 实现者: ConfigManager（JSON 文件）、测试中的 Mock
#[async_trait]
pub trait DashboardConfigReader: Send + Sync {
    /// 获取默认驾驶舱模式
    ///
    /// # 默认值
    /// - citizen
    async fn get_default_mode(&self) -> Result<DashboardMode, ConfigError>;

    /// 获取默认预报时间范围
    ///
    /// # 默认值
    /// - 24h
    async fn get_default_forecast_range(&self) -> Result<ForecastRange, ConfigError>;

    /// 获取界面语言
    ///
    /// # 默认值
    /// - en
    async fn get_locale(&self) -> Result<String, ConfigError>;

    /// 获取某类加载的模拟延迟
    ///
    /// # 用途
    /// - DeferredLoader 在延迟后交付结果,模拟 I/O 等待
    async fn get_simulated_latency(&self, kind: LoadKind) -> Result<Duration, ConfigError>;
}
