// ==========================================
// AirVonment 空气质量决策支持 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供命令行与会话层调用
// ==========================================

pub mod dashboard_api;
pub mod dataset;
pub mod error;
pub mod export;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, FilteredRecommendations};
pub use dataset::{load_forecast, load_hotspots, load_recommendations, DashboardDataset};
pub use error::{ApiError, ApiResult};
pub use export::{
    default_forecast_filename, export_forecast_csv, export_hotspots_json,
    export_recommendations_json,
};
