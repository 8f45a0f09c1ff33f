// ==========================================
// AirVonment 空气质量决策支持 - 引擎层
// ==========================================
// 职责: 分桶、多准则筛选、聚合统计、热点纳入筛选
// 红线: 纯函数,不做 I/O; 所有输入视为不可变快照
// ==========================================
// 依赖顺序: bucketing → filter → stats → forecast_summary
//          hotspot_filter 与 filter 同级,独立路径
// ==========================================

pub mod bucketing;
pub mod error;
pub mod filter;
pub mod forecast_summary;
pub mod hotspot_filter;
pub mod stats;

// 重导出核心引擎
pub use bucketing::{bucket_confidence, bucket_timeline, timeline_in_bucket, TIMELINE_PHRASES};
pub use error::{EngineError, EngineResult};
pub use filter::{filter_records, matches, CompiledFilter, CriteriaRecord, Criterion};
pub use forecast_summary::{
    best_time_slots, hourly_breakdown, summarize_forecast, worst_time_slots, ForecastOutlook,
    ForecastSummary, HourlyOutlook,
};
pub use hotspot_filter::{filter_hotspots, HotspotInclusionFilter, HotspotToggle};
pub use stats::{
    compute_stats, count_by_priority, recommendation_overview, AqiBand, AqiStats,
    RecommendationOverview,
};
