// ==========================================
// AirVonment 空气质量决策支持 - 应用层
// ==========================================
// 职责: 会话状态与延迟加载,连接交互层与引擎
// ==========================================

pub mod deferred;
pub mod session;

// 重导出
pub use deferred::{DeferredLoader, LoadOutcome};
pub use session::{DashboardSession, DashboardView, RequestTicket, SessionSnapshot};
