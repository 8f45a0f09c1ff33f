// ==========================================
// AirVonment 空气质量决策支持 - 预报摘要
// ==========================================
// 职责: 预报窗口的统计、最佳/最差时段与总体研判
// 输入: ForecastSeries
// 输出: ForecastSummary
// ==========================================

use crate::domain::forecast::{ForecastSample, ForecastSeries};
use crate::domain::types::{AqiCategory, ForecastRange};
use crate::engine::error::EngineResult;
use crate::engine::stats::{compute_stats, AqiStats, MODERATE_MAX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 最佳/最差时段默认数量
pub const DEFAULT_SLOT_COUNT: usize = 3;

// ==========================================
// ForecastOutlook - 窗口总体研判
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastOutlook {
    Excellent, // 平均 <= 50
    Moderate,  // 平均 <= 100
    Sensitive, // 平均 <= 150
    Unhealthy, // 平均 > 150
}

impl ForecastOutlook {
    pub fn from_average(average: i32) -> Self {
        match average {
            a if a <= 50 => ForecastOutlook::Excellent,
            a if a <= 100 => ForecastOutlook::Moderate,
            a if a <= 150 => ForecastOutlook::Sensitive,
            _ => ForecastOutlook::Unhealthy,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            ForecastOutlook::Excellent => "excellent",
            ForecastOutlook::Moderate => "moderate",
            ForecastOutlook::Sensitive => "sensitive",
            ForecastOutlook::Unhealthy => "unhealthy",
        }
    }

    pub fn message(&self) -> String {
        crate::i18n::t(&format!("outlook.{}", self.as_key()))
    }
}

impl fmt::Display for ForecastOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// 最佳时段: AQI <= 100,按 AQI 升序（稳定排序）,取前 n 个
pub fn best_time_slots(samples: &[ForecastSample], n: usize) -> Vec<&ForecastSample> {
    let mut slots: Vec<&ForecastSample> =
        samples.iter().filter(|s| s.aqi <= MODERATE_MAX).collect();
    slots.sort_by_key(|s| s.aqi);
    slots.truncate(n);
    slots
}

/// 最差时段: AQI > 100,按 AQI 降序（稳定排序）,取前 n 个
pub fn worst_time_slots(samples: &[ForecastSample], n: usize) -> Vec<&ForecastSample> {
    let mut slots: Vec<&ForecastSample> =
        samples.iter().filter(|s| s.aqi > MODERATE_MAX).collect();
    slots.sort_by(|a, b| b.aqi.cmp(&a.aqi));
    slots.truncate(n);
    slots
}

// ==========================================
// HourlyOutlook - 逐小时分级与建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyOutlook {
    pub hour_offset: u32,
    pub timestamp: DateTime<Utc>,
    pub aqi: i32,
    pub category: AqiCategory,
    pub label: String,    // 当前语言的分级名称
    pub advisory: String, // 当前语言的户外活动建议
}

impl HourlyOutlook {
    pub fn from_sample(sample: &ForecastSample) -> Self {
        let category = sample.category();
        Self {
            hour_offset: sample.hour_offset,
            timestamp: sample.timestamp,
            aqi: sample.aqi,
            category,
            label: category.label(),
            advisory: category.advisory(),
        }
    }
}

/// 逐小时分级,按样本顺序输出; 文案取当前语言
pub fn hourly_breakdown(series: &ForecastSeries) -> Vec<HourlyOutlook> {
    series.samples.iter().map(HourlyOutlook::from_sample).collect()
}

// ==========================================
// ForecastSummary - 预报摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub range: ForecastRange,
    pub stats: AqiStats,
    pub outlook: ForecastOutlook,
    pub best_slots: Vec<ForecastSample>,
    pub worst_slots: Vec<ForecastSample>,
    pub hourly: Vec<HourlyOutlook>,
}

/// 汇总预报序列
///
/// # 返回
/// - Err(EngineError::EmptyInput): 序列无样本
pub fn summarize_forecast(series: &ForecastSeries) -> EngineResult<ForecastSummary> {
    let stats = compute_stats(&series.aqi_values())?;
    let outlook = ForecastOutlook::from_average(stats.average);

    Ok(ForecastSummary {
        range: series.range,
        outlook,
        best_slots: best_time_slots(&series.samples, DEFAULT_SLOT_COUNT)
            .into_iter()
            .cloned()
            .collect(),
        worst_slots: worst_time_slots(&series.samples, DEFAULT_SLOT_COUNT)
            .into_iter()
            .cloned()
            .collect(),
        hourly: hourly_breakdown(series),
        stats,
    })
}
