// ==========================================
// AirVonment 空气质量决策支持 - 领域校验错误
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use chrono::{DateTime, Utc};
use thiserror::Error;

/// 领域记录不变量违反
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("置信度超出范围 (记录 {id}): {value}，应在 [0, 100]")]
    ConfidenceOutOfRange { id: String, value: i32 },

    #[error("检测时间晚于当前时间 (记录 {id}): detected_at={detected_at}")]
    DetectedInFuture { id: String, detected_at: DateTime<Utc> },

    #[error("坐标非法 (记录 {id}): lat={lat}, lng={lng}")]
    InvalidCoordinates { id: String, lat: f64, lng: f64 },
}
