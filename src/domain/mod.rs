// ==========================================
// AirVonment 空气质量决策支持 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、筛选状态
// 红线: 不含筛选/统计逻辑,不含 I/O
// ==========================================

pub mod error;
pub mod filter_state;
pub mod forecast;
pub mod hotspot;
pub mod recommendation;
pub mod types;

// 重导出核心类型
pub use error::DomainError;
pub use filter_state::{HotspotToggles, RecommendationFilterState};
pub use forecast::{derive_pollutants, ForecastSample, ForecastSeries};
pub use hotspot::{GeoPoint, Hotspot};
pub use recommendation::{ImplementationStep, Recommendation, ResourceEstimate, SimilarIntervention};
pub use types::{
    AqiCategory, ConfidenceBucket, DashboardMode, ForecastRange, HotspotStatus, HotspotType,
    PolicyCategory, Pollutant, Priority, TimelineBucket,
};
