// ==========================================
// AirVonment 空气质量决策支持 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/领域/配置错误为可读的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::domain::error::DomainError;
use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据验证失败: {0}")]
    ValidationError(#[from] DomainError),

    // ==========================================
    // 引擎错误
    // ==========================================
    #[error("引擎错误: {0}")]
    Engine(#[from] EngineError),

    // ==========================================
    // 导出 / 读取错误
    // ==========================================
    #[error("导出失败: {0}")]
    Export(String),

    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    // ==========================================
    // 配置 / 状态错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("会话状态锁获取失败: {0}")]
    StateLock(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 csv::Error 转换
// 目的: CSV 写出失败统一归入导出错误
// ==========================================
impl From<csv::Error> for ApiError {
    fn from(err: csv::Error) -> Self {
        ApiError::Export(format!("CSV 写出失败: {}", err))
    }
}

/// API层结果类型
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_conversion() {
        let err: ApiError = EngineError::EmptyInput { metric: "aqi" }.into();
        assert!(matches!(err, ApiError::Engine(EngineError::EmptyInput { .. })));
    }

    #[test]
    fn test_domain_error_conversion() {
        let err: ApiError = DomainError::ConfidenceOutOfRange {
            id: "hs-1".to_string(),
            value: 120,
        }
        .into();
        assert!(matches!(err, ApiError::ValidationError(_)));
        assert!(err.to_string().contains("hs-1"));
    }
}
