// ==========================================
// AirVonment 空气质量决策支持 - 聚合统计引擎
// ==========================================
// 职责: AQI 序列的平均/最大/最小与分段计数; 推荐集合概览
// 红线: 空序列必须返回 EmptyInput,不得产生 NaN
// ==========================================

use crate::domain::recommendation::Recommendation;
use crate::domain::types::Priority;
use crate::engine::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// AQI 分段上限 (与 AQI 等级表一致)
pub const GOOD_MAX: i32 = 50;
pub const MODERATE_MAX: i32 = 100;

// ==========================================
// AqiBand - 小时分段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AqiBand {
    Good,      // <= 50
    Moderate,  // (50, 100]
    Unhealthy, // > 100
}

impl AqiBand {
    pub const ALL: [AqiBand; 3] = [AqiBand::Good, AqiBand::Moderate, AqiBand::Unhealthy];

    pub fn from_aqi(aqi: i32) -> Self {
        if aqi <= GOOD_MAX {
            AqiBand::Good
        } else if aqi <= MODERATE_MAX {
            AqiBand::Moderate
        } else {
            AqiBand::Unhealthy
        }
    }
}

// ==========================================
// AqiStats - 统计结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AqiStats {
    pub average: i32,
    pub max: i32,
    pub min: i32,
    pub counts: BTreeMap<AqiBand, usize>, // 三个分段均存在
}

impl AqiStats {
    pub fn count(&self, band: AqiBand) -> usize {
        self.counts.get(&band).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// 整数平均,四舍五入（.5 向正无穷方向）
///
/// # 参数
/// - sum: 总和
/// - count: 数量 (> 0)
pub fn rounded_mean(sum: i64, count: i64) -> i64 {
    // floor(sum / count + 0.5)
    (2 * sum + count).div_euclid(2 * count)
}

/// 计算 AQI 序列统计
///
/// # 返回
/// - Ok(AqiStats)
/// - Err(EngineError::EmptyInput): 空序列
#[instrument(skip(values), fields(count = values.len()))]
pub fn compute_stats(values: &[i32]) -> EngineResult<AqiStats> {
    let (first, rest) = values
        .split_first()
        .ok_or(EngineError::EmptyInput { metric: "aqi_stats" })?;

    let mut sum = *first as i64;
    let mut max = *first;
    let mut min = *first;
    let mut counts: BTreeMap<AqiBand, usize> = AqiBand::ALL.iter().map(|b| (*b, 0)).collect();
    *counts.entry(AqiBand::from_aqi(*first)).or_insert(0) += 1;

    for &v in rest {
        sum += v as i64;
        max = max.max(v);
        min = min.min(v);
        *counts.entry(AqiBand::from_aqi(v)).or_insert(0) += 1;
    }

    let average = rounded_mean(sum, values.len() as i64) as i32;

    Ok(AqiStats {
        average,
        max,
        min,
        counts,
    })
}

/// 按优先级计数（四个优先级均存在; 缺少优先级的记录不计入）
pub fn count_by_priority(records: &[Recommendation]) -> BTreeMap<Priority, usize> {
    let mut counts: BTreeMap<Priority, usize> = Priority::ALL.iter().map(|p| (*p, 0)).collect();
    for priority in records.iter().filter_map(|r| r.priority) {
        *counts.entry(priority).or_insert(0) += 1;
    }
    counts
}

// ==========================================
// RecommendationOverview - 推荐概览
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationOverview {
    pub total: usize,
    pub critical: usize,
    pub quick_actions: usize,      // 周期文本含 "1" 或 "2"
    pub average_confidence: i32,   // 百分比,四舍五入
}

/// 快速行动判定（周期文本含 "1" 或 "2"）
pub fn is_quick_action(record: &Recommendation) -> bool {
    record
        .timeline
        .as_deref()
        .map(|t| t.contains('1') || t.contains('2'))
        .unwrap_or(false)
}

/// 计算推荐集合概览
///
/// # 返回
/// - Err(EngineError::EmptyInput): 空集合,或没有任何记录带置信度
#[instrument(skip(records), fields(count = records.len()))]
pub fn recommendation_overview(records: &[Recommendation]) -> EngineResult<RecommendationOverview> {
    if records.is_empty() {
        return Err(EngineError::EmptyInput {
            metric: "recommendation_overview",
        });
    }

    let confidences: Vec<i64> = records
        .iter()
        .filter_map(|r| r.confidence.map(i64::from))
        .collect();
    if confidences.is_empty() {
        return Err(EngineError::EmptyInput {
            metric: "average_confidence",
        });
    }

    let sum: i64 = confidences.iter().sum();
    let average_confidence = rounded_mean(sum, confidences.len() as i64) as i32;

    Ok(RecommendationOverview {
        total: records.len(),
        critical: records.iter().filter(|r| r.is_critical()).count(),
        quick_actions: records.iter().filter(|r| is_quick_action(r)).count(),
        average_confidence,
    })
}
