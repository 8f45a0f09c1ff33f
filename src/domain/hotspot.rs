// ==========================================
// AirVonment 空气质量决策支持 - 火点/污染热点领域模型
// ==========================================
// 职责: 定义地理热点记录及其不变量校验
// 不变量: confidence ∈ [0, 100]; detected_at ≤ now
// ==========================================

use crate::domain::error::DomainError;
use crate::domain::types::{HotspotStatus, HotspotType};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 地理坐标（WGS84 度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

// ==========================================
// Hotspot - 热点
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub hotspot_id: String,        // 热点ID
    pub coordinates: GeoPoint,     // 坐标
    #[serde(default)]
    pub location: String,          // 地名
    pub confidence: i32,           // 检测置信度 (百分比)
    pub detected_at: DateTime<Utc>, // 检测时间
    pub status: HotspotStatus,     // 状态
    pub hotspot_type: HotspotType, // 类型
    #[serde(default)]
    pub affected_area_km2: f64,    // 影响面积 (平方公里)
    #[serde(default)]
    pub intensity: f64,            // 强度
}

impl Hotspot {
    /// 校验记录不变量
    ///
    /// # 返回
    /// - Ok(()): 记录合法
    /// - Err(DomainError): 第一个违反的不变量
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if !(0..=100).contains(&self.confidence) {
            return Err(DomainError::ConfidenceOutOfRange {
                id: self.hotspot_id.clone(),
                value: self.confidence,
            });
        }

        if self.detected_at > now {
            return Err(DomainError::DetectedInFuture {
                id: self.hotspot_id.clone(),
                detected_at: self.detected_at,
            });
        }

        if !self.coordinates.is_valid() {
            return Err(DomainError::InvalidCoordinates {
                id: self.hotspot_id.clone(),
                lat: self.coordinates.lat,
                lng: self.coordinates.lng,
            });
        }

        Ok(())
    }

    /// 距离检测时间的时长
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.detected_at
    }

    /// 是否在给定窗口内检测到（严格小于窗口）
    pub fn detected_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.age(now) < window
    }
}
