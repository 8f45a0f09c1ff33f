// ==========================================
// AirVonment 空气质量决策支持 - 驾驶舱 API
// ==========================================
// 职责: 封装引擎层,提供推荐筛选、分桶、统计、热点筛选、预报摘要、导出
// 架构: API 层 → Engine 层（纯函数） → Domain 层
// ==========================================

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::api::dataset::DashboardDataset;
use crate::api::error::{ApiError, ApiResult};
use crate::api::export;
use crate::domain::filter_state::{HotspotToggles, RecommendationFilterState};
use crate::domain::hotspot::Hotspot;
use crate::domain::recommendation::Recommendation;
use crate::domain::types::{ConfidenceBucket, Priority, TimelineBucket};
use crate::engine::{
    self, AqiStats, CompiledFilter, ForecastSummary, HourlyOutlook, RecommendationOverview,
};

/// 推荐筛选结果
#[derive(Debug, Clone, Serialize)]
pub struct FilteredRecommendations<'a> {
    pub records: Vec<&'a Recommendation>,
    pub total: usize,            // 筛选前总数
    pub ignored: Vec<String>,    // 被忽略的准则说明
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    dataset: Arc<DashboardDataset>,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    ///
    /// # 参数
    /// - dataset: 已校验的只读数据集
    pub fn new(dataset: Arc<DashboardDataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &DashboardDataset {
        &self.dataset
    }

    // ==========================================
    // 推荐
    // ==========================================

    /// 按筛选状态筛选推荐（与组合）
    #[instrument(skip(self, state))]
    pub fn filter_recommendations(
        &self,
        state: &RecommendationFilterState,
    ) -> FilteredRecommendations<'_> {
        let compiled = CompiledFilter::compile(state);
        let records = compiled.apply(&self.dataset.recommendations);
        FilteredRecommendations {
            total: self.dataset.recommendations.len(),
            ignored: compiled.ignored().iter().map(|e| e.to_string()).collect(),
            records,
        }
    }

    /// 筛选后推荐的概览（总数/紧急/快速行动/平均置信度）
    pub fn recommendation_overview(
        &self,
        state: &RecommendationFilterState,
    ) -> ApiResult<RecommendationOverview> {
        let filtered: Vec<Recommendation> = self
            .filter_recommendations(state)
            .records
            .into_iter()
            .cloned()
            .collect();
        Ok(engine::recommendation_overview(&filtered)?)
    }

    /// 按优先级计数（全部推荐）
    pub fn count_by_priority(&self) -> BTreeMap<Priority, usize> {
        engine::count_by_priority(&self.dataset.recommendations)
    }

    /// 实施周期分桶
    pub fn bucket_timeline(&self, text: &str) -> Option<TimelineBucket> {
        engine::bucket_timeline(text)
    }

    /// 置信度分桶
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 置信度不在 [0, 100]
    pub fn bucket_confidence(&self, value: i32) -> ApiResult<ConfidenceBucket> {
        if !(0..=100).contains(&value) {
            return Err(ApiError::InvalidInput(format!(
                "置信度应在 [0, 100]: {}",
                value
            )));
        }
        Ok(engine::bucket_confidence(value))
    }

    // ==========================================
    // 统计 / 预报
    // ==========================================

    pub fn compute_stats(&self, values: &[i32]) -> ApiResult<AqiStats> {
        Ok(engine::compute_stats(values)?)
    }

    /// 当前预报序列的摘要
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 数据集未包含预报
    /// - Err(ApiError::Engine): 预报无样本
    pub fn forecast_summary(&self) -> ApiResult<ForecastSummary> {
        let series = self
            .dataset
            .forecast
            .as_ref()
            .ok_or_else(|| ApiError::InvalidInput("数据集未包含预报序列".to_string()))?;
        Ok(engine::summarize_forecast(series)?)
    }

    /// 逐小时分级与户外活动建议（当前语言）
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 数据集未包含预报
    pub fn hourly_outlook(&self) -> ApiResult<Vec<HourlyOutlook>> {
        let series = self
            .dataset
            .forecast
            .as_ref()
            .ok_or_else(|| ApiError::InvalidInput("数据集未包含预报序列".to_string()))?;
        Ok(engine::hourly_breakdown(series))
    }

    // ==========================================
    // 热点
    // ==========================================

    /// 按开关筛选热点（或组合）
    pub fn filter_hotspots(&self, toggles: &HotspotToggles, now: DateTime<Utc>) -> Vec<&Hotspot> {
        engine::filter_hotspots(&self.dataset.hotspots, toggles, now)
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 导出预报 CSV 到目录,文件名按默认规则生成
    ///
    /// # 返回
    /// - 写出文件的完整路径
    #[instrument(skip(self, dir))]
    pub fn export_forecast_csv(&self, dir: &Path, at: DateTime<Utc>) -> ApiResult<std::path::PathBuf> {
        let series = self
            .dataset
            .forecast
            .as_ref()
            .ok_or_else(|| ApiError::Export("数据集未包含预报序列".to_string()))?;
        let path = dir.join(export::default_forecast_filename(series.range, at));
        let file = std::fs::File::create(&path)?;
        let rows = export::export_forecast_csv(series, file)?;
        info!(
            "{}",
            crate::i18n::t_with_args(
                "export.saved",
                &[("count", &rows.to_string()), ("path", &path.display().to_string())]
            )
        );
        Ok(path)
    }

    /// 导出筛选后的推荐 JSON
    pub fn export_recommendations_json<W: std::io::Write>(
        &self,
        state: &RecommendationFilterState,
        writer: W,
    ) -> ApiResult<usize> {
        let filtered = self.filter_recommendations(state);
        export::export_recommendations_json(&filtered.records, writer)
    }

    /// 导出筛选后的热点 JSON
    pub fn export_hotspots_json<W: std::io::Write>(
        &self,
        toggles: &HotspotToggles,
        now: DateTime<Utc>,
        writer: W,
    ) -> ApiResult<usize> {
        let hotspots = self.filter_hotspots(toggles, now);
        export::export_hotspots_json(&hotspots, writer)
    }
}
