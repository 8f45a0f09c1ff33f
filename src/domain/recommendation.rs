// ==========================================
// AirVonment 空气质量决策支持 - 政策推荐领域模型
// ==========================================
// 职责: 定义 AI 政策推荐记录
// 红线: 加载后不可变; 参与筛选的字段缺失时视为"不匹配"
// ==========================================

use crate::domain::types::{PolicyCategory, Priority};
use serde::{Deserialize, Serialize};

// ==========================================
// Recommendation - 政策推荐
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation_id: String, // 推荐ID (唯一)
    pub title: String,             // 标题
    #[serde(default)]
    pub description: String,       // 描述

    // ===== 筛选字段 (可缺失) =====
    #[serde(default)]
    pub priority: Option<Priority>,       // 优先级
    #[serde(default)]
    pub category: Option<PolicyCategory>, // 类别
    #[serde(default)]
    pub timeline: Option<String>,         // 实施周期 (自由文本, 如 "2-3 days")
    #[serde(default)]
    pub confidence: Option<i32>,          // 置信度 (百分比 0-100)

    // ===== 描述性载荷 (不参与筛选) =====
    #[serde(default)]
    pub expected_impact: Option<String>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub similar_interventions: Vec<SimilarIntervention>,
    #[serde(default)]
    pub implementation_steps: Vec<ImplementationStep>,
    #[serde(default)]
    pub resources: Option<ResourceEstimate>,
}

/// 类似干预案例
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarIntervention {
    pub location: String,
    pub year: String,
    pub result: String,
}

/// 实施步骤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationStep {
    pub action: String,
    pub timeline: String,
}

/// 资源估算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEstimate {
    pub budget: String,
    pub personnel: String,
    pub duration: String,
}

impl Recommendation {
    /// 创建只含筛选字段的推荐（其余载荷为空）
    pub fn new(
        recommendation_id: impl Into<String>,
        title: impl Into<String>,
        priority: Priority,
        category: PolicyCategory,
        timeline: impl Into<String>,
        confidence: i32,
    ) -> Self {
        Self {
            recommendation_id: recommendation_id.into(),
            title: title.into(),
            description: String::new(),
            priority: Some(priority),
            category: Some(category),
            timeline: Some(timeline.into()),
            confidence: Some(confidence),
            expected_impact: None,
            rationale: None,
            data_sources: Vec::new(),
            similar_interventions: Vec::new(),
            implementation_steps: Vec::new(),
            resources: None,
        }
    }

    /// 是否为紧急推荐
    pub fn is_critical(&self) -> bool {
        self.priority == Some(Priority::Critical)
    }
}
