// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use airvonment::domain::forecast::{ForecastSample, ForecastSeries};
use airvonment::domain::hotspot::{GeoPoint, Hotspot};
use airvonment::domain::recommendation::{ImplementationStep, Recommendation};
use airvonment::domain::types::{
    ForecastRange, HotspotStatus, HotspotType, PolicyCategory, Priority,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// 测试统一使用的"现在"
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 3, 12, 0, 0).unwrap()
}

// ==========================================
// Recommendation 构建器
// ==========================================

pub struct RecommendationBuilder {
    recommendation_id: String,
    title: String,
    priority: Option<Priority>,
    category: Option<PolicyCategory>,
    timeline: Option<String>,
    confidence: Option<i32>,
    steps: Vec<ImplementationStep>,
}

impl RecommendationBuilder {
    pub fn new(recommendation_id: &str) -> Self {
        Self {
            recommendation_id: recommendation_id.to_string(),
            title: format!("Recommendation {}", recommendation_id),
            priority: None,
            category: None,
            timeline: None,
            confidence: None,
            steps: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn category(mut self, category: PolicyCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn timeline(mut self, timeline: &str) -> Self {
        self.timeline = Some(timeline.to_string());
        self
    }

    pub fn confidence(mut self, confidence: i32) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn step(mut self, action: &str, timeline: &str) -> Self {
        self.steps.push(ImplementationStep {
            action: action.to_string(),
            timeline: timeline.to_string(),
        });
        self
    }

    pub fn build(self) -> Recommendation {
        Recommendation {
            recommendation_id: self.recommendation_id,
            title: self.title,
            description: String::new(),
            priority: self.priority,
            category: self.category,
            timeline: self.timeline,
            confidence: self.confidence,
            expected_impact: None,
            rationale: None,
            data_sources: Vec::new(),
            similar_interventions: Vec::new(),
            implementation_steps: self.steps,
            resources: None,
        }
    }
}

// ==========================================
// Hotspot 构建器
// ==========================================

pub struct HotspotBuilder {
    hotspot_id: String,
    confidence: i32,
    hours_ago: i64,
    hotspot_type: HotspotType,
    status: HotspotStatus,
    coordinates: GeoPoint,
}

impl HotspotBuilder {
    pub fn new(hotspot_id: &str) -> Self {
        Self {
            hotspot_id: hotspot_id.to_string(),
            confidence: 50,
            hours_ago: 72,
            hotspot_type: HotspotType::Other,
            status: HotspotStatus::Active,
            coordinates: GeoPoint::new(30.73, 76.78),
        }
    }

    pub fn confidence(mut self, confidence: i32) -> Self {
        self.confidence = confidence;
        self
    }

    /// 检测时间 = fixed_now() - hours
    pub fn hours_ago(mut self, hours: i64) -> Self {
        self.hours_ago = hours;
        self
    }

    pub fn hotspot_type(mut self, hotspot_type: HotspotType) -> Self {
        self.hotspot_type = hotspot_type;
        self
    }

    pub fn status(mut self, status: HotspotStatus) -> Self {
        self.status = status;
        self
    }

    pub fn coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.coordinates = GeoPoint::new(lat, lng);
        self
    }

    pub fn build(self) -> Hotspot {
        Hotspot {
            hotspot_id: self.hotspot_id,
            coordinates: self.coordinates,
            location: "Punjab".to_string(),
            confidence: self.confidence,
            detected_at: fixed_now() - Duration::hours(self.hours_ago),
            status: self.status,
            hotspot_type: self.hotspot_type,
            affected_area_km2: 2.5,
            intensity: 40.0,
        }
    }
}

// ==========================================
// 预报序列
// ==========================================

/// 由 AQI 序列构造预报（其余气象字段取固定值）
pub fn forecast_series(range: ForecastRange, aqis: &[i32]) -> ForecastSeries {
    let base = Utc.with_ymd_and_hms(2025, 11, 3, 0, 0, 0).unwrap();
    let samples = aqis
        .iter()
        .enumerate()
        .map(|(i, aqi)| ForecastSample::new(base, i as u32, *aqi, 22, 60, 10, 8))
        .collect();
    ForecastSeries::new(range, base, samples)
}
