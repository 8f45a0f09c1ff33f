// ==========================================
// AirVonment 空气质量决策支持 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 所有错误均为本地可恢复错误,不得中断展示层
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// 聚合统计在空序列上调用（平均/最大/最小无定义）
    #[error("空输入: 无法在空序列上计算 {metric}")]
    EmptyInput { metric: &'static str },

    /// 筛选状态中的取值无法识别（忽略该准则,不致命）
    #[error("无法识别的准则取值: {key}={value}")]
    InvalidCriterionValue { key: String, value: String },

    /// 筛选状态中的键无法识别（忽略,不致命）
    #[error("未知准则: {0}")]
    UnknownCriterion(String),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
