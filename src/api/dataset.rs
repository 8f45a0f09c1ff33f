// ==========================================
// AirVonment 空气质量决策支持 - 驾驶舱数据集
// ==========================================
// 职责: 从 JSON 文件加载推荐/热点/预报,并在加载时校验记录不变量
// 红线: 加载后数据集不可变; 刷新即整体替换
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::forecast::ForecastSeries;
use crate::domain::hotspot::Hotspot;
use crate::domain::recommendation::Recommendation;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// 驾驶舱数据集（只读快照）
#[derive(Debug, Clone, Default)]
pub struct DashboardDataset {
    pub recommendations: Vec<Recommendation>,
    pub hotspots: Vec<Hotspot>,
    pub forecast: Option<ForecastSeries>,
}

impl DashboardDataset {
    /// 构造数据集并校验
    ///
    /// # 校验
    /// - 推荐ID唯一、置信度 ∈ [0, 100]
    /// - 热点置信度 ∈ [0, 100]、坐标合法、检测时间不晚于 now
    pub fn new(
        recommendations: Vec<Recommendation>,
        hotspots: Vec<Hotspot>,
        forecast: Option<ForecastSeries>,
        now: DateTime<Utc>,
    ) -> ApiResult<Self> {
        validate_recommendations(&recommendations)?;
        for hotspot in &hotspots {
            hotspot.validate(now)?;
        }
        Ok(Self {
            recommendations,
            hotspots,
            forecast,
        })
    }
}

fn validate_recommendations(records: &[Recommendation]) -> ApiResult<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.recommendation_id.as_str()) {
            return Err(ApiError::InvalidInput(format!(
                "推荐ID重复: {}",
                record.recommendation_id
            )));
        }
        if let Some(confidence) = record.confidence {
            if !(0..=100).contains(&confidence) {
                return Err(ApiError::InvalidInput(format!(
                    "推荐置信度超出范围 ({}): {}",
                    record.recommendation_id, confidence
                )));
            }
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> ApiResult<T> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// 读取推荐 JSON 数组
pub fn load_recommendations(path: impl AsRef<Path>) -> ApiResult<Vec<Recommendation>> {
    let path = path.as_ref();
    let records: Vec<Recommendation> = read_json(path)?;
    validate_recommendations(&records)?;
    info!(path = %path.display(), count = records.len(), "推荐数据已加载");
    Ok(records)
}

/// 读取热点 JSON 数组
pub fn load_hotspots(path: impl AsRef<Path>, now: DateTime<Utc>) -> ApiResult<Vec<Hotspot>> {
    let path = path.as_ref();
    let hotspots: Vec<Hotspot> = read_json(path)?;
    for hotspot in &hotspots {
        hotspot.validate(now)?;
    }
    info!(path = %path.display(), count = hotspots.len(), "热点数据已加载");
    Ok(hotspots)
}

/// 读取预报序列 JSON
pub fn load_forecast(path: impl AsRef<Path>) -> ApiResult<ForecastSeries> {
    let path = path.as_ref();
    let series: ForecastSeries = read_json(path)?;
    let series = ForecastSeries::new(series.range, series.generated_at, series.samples);
    if !series.covers_range() {
        tracing::warn!(
            range = %series.range.as_key(),
            samples = series.len(),
            "预报样本数不足所选时间范围"
        );
    }
    info!(path = %path.display(), samples = series.len(), "预报数据已加载");
    Ok(series)
}
