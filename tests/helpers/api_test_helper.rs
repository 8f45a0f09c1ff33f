// ==========================================
// API 测试辅助 - 构建带样例数据的 DashboardApi
// ==========================================

use super::test_data_builder::{
    fixed_now, forecast_series, HotspotBuilder, RecommendationBuilder,
};
use airvonment::api::{DashboardApi, DashboardDataset};
use airvonment::domain::recommendation::Recommendation;
use airvonment::domain::hotspot::Hotspot;
use airvonment::domain::types::{ForecastRange, HotspotType, PolicyCategory, Priority};
use std::sync::Arc;

/// 样例推荐（覆盖四种优先级与各周期桶）
pub fn sample_recommendations() -> Vec<Recommendation> {
    vec![
        RecommendationBuilder::new("rec-001")
            .title("Implement Odd-Even Vehicle Scheme")
            .priority(Priority::Critical)
            .category(PolicyCategory::Traffic)
            .timeline("2-3 days")
            .confidence(85)
            .step("Issue emergency notification to all stakeholders", "Day 1")
            .build(),
        RecommendationBuilder::new("rec-002")
            .title("Construction Activity Restrictions")
            .priority(Priority::High)
            .category(PolicyCategory::Construction)
            .timeline("1-2 days")
            .confidence(78)
            .build(),
        RecommendationBuilder::new("rec-003")
            .title("Enhanced Road Dust Control")
            .priority(Priority::High)
            .category(PolicyCategory::Infrastructure)
            .timeline("1 day")
            .confidence(72)
            .build(),
        RecommendationBuilder::new("rec-004")
            .title("Industrial Emission Compliance Drive")
            .priority(Priority::Medium)
            .category(PolicyCategory::Industrial)
            .timeline("3-5 days")
            .confidence(68)
            .build(),
        RecommendationBuilder::new("rec-005")
            .title("Crop Residue Management Subsidy")
            .priority(Priority::Low)
            .category(PolicyCategory::Agricultural)
            .timeline("6+ months")
            .confidence(40)
            .build(),
    ]
}

/// 样例热点
pub fn sample_hotspots() -> Vec<Hotspot> {
    vec![
        HotspotBuilder::new("hs-001")
            .confidence(92)
            .hours_ago(2)
            .hotspot_type(HotspotType::Stubble)
            .build(),
        HotspotBuilder::new("hs-002")
            .confidence(65)
            .hours_ago(30)
            .hotspot_type(HotspotType::Industrial)
            .build(),
        HotspotBuilder::new("hs-003")
            .confidence(45)
            .hours_ago(100)
            .hotspot_type(HotspotType::Waste)
            .build(),
    ]
}

/// API 测试环境
pub struct ApiTestEnv {
    pub api: DashboardApi,
}

impl ApiTestEnv {
    pub fn new() -> Self {
        let dataset = DashboardDataset::new(
            sample_recommendations(),
            sample_hotspots(),
            Some(forecast_series(
                ForecastRange::H24,
                &[45, 60, 80, 120, 150, 95, 40, 30],
            )),
            fixed_now(),
        )
        .expect("样例数据集应合法");
        Self {
            api: DashboardApi::new(Arc::new(dataset)),
        }
    }
}
