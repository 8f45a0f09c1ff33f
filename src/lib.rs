// ==========================================
// AirVonment 空气质量决策支持 - 核心库
// ==========================================
// 职责: 驾驶舱筛选与统计引擎
// 技术栈: Rust + tokio + serde
// 系统定位: 决策支持 (推荐/预报/热点的筛选、分桶、聚合)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 筛选、分桶、统计
pub mod engine;

// 配置层 - 驾驶舱配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 会话状态与延迟加载
pub mod app;

// ==========================================
// 重导出常用类型
// ==========================================

pub use domain::{
    AqiCategory, ConfidenceBucket, DashboardMode, ForecastRange, ForecastSample, ForecastSeries,
    Hotspot, HotspotToggles, PolicyCategory, Priority, Recommendation, RecommendationFilterState,
    TimelineBucket,
};

pub use engine::{
    bucket_confidence, bucket_timeline, compute_stats, filter_hotspots, filter_records, AqiStats,
    EngineError,
};

pub use api::{ApiError, ApiResult, DashboardApi};

pub use app::{DashboardSession, DeferredLoader, RequestTicket};

pub use config::{ConfigManager, DashboardConfig};

// ==========================================
// 系统常量
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "AirVonment";
