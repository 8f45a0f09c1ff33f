// ==========================================
// AirVonment 空气质量决策支持 - 领域类型定义
// ==========================================
// 职责: 推荐优先级/类别、分桶、AQI 等级、热点类型等枚举
// 红线: 分桶阈值与类别键为固定常量,不可配置
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 推荐优先级 (Priority)
// ==========================================
// 顺序: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,      // 低
    Medium,   // 中
    High,     // 高
    Critical, // 紧急
}

impl Priority {
    /// 展示顺序（紧急在前）
    pub const ALL: [Priority; 4] = [
        Priority::Critical,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// 从筛选键解析（大小写敏感,与筛选状态取值逐字比较）
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "critical" => Some(Priority::Critical),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// 筛选键（与筛选状态中的取值一致）
    pub fn as_key(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// 政策类别 (Policy Category)
// ==========================================
// 类别集合开放: 未列出的类别原样保留在 Other 中
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyCategory {
    Traffic,        // 交通管理
    Industrial,     // 工业管控
    Construction,   // 施工监管
    Agricultural,   // 秸秆焚烧
    Infrastructure, // 基础设施
    Emergency,      // 应急措施
    #[serde(untagged)]
    Other(String),  // 未列出的类别
}

impl PolicyCategory {
    /// 筛选键（未列出的类别返回原始取值）
    pub fn as_key(&self) -> &str {
        match self {
            PolicyCategory::Traffic => "traffic",
            PolicyCategory::Industrial => "industrial",
            PolicyCategory::Construction => "construction",
            PolicyCategory::Agricultural => "agricultural",
            PolicyCategory::Infrastructure => "infrastructure",
            PolicyCategory::Emergency => "emergency",
            PolicyCategory::Other(key) => key.as_str(),
        }
    }
}

impl fmt::Display for PolicyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// 实施周期桶 (Timeline Bucket)
// ==========================================
// immediate: 0-7 天 / short: 1-4 周 / medium: 1-6 月 / long: 6 月以上
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineBucket {
    Immediate,
    Short,
    Medium,
    Long,
}

impl TimelineBucket {
    pub const ALL: [TimelineBucket; 4] = [
        TimelineBucket::Immediate,
        TimelineBucket::Short,
        TimelineBucket::Medium,
        TimelineBucket::Long,
    ];

    /// 从筛选键解析（大小写敏感）
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "immediate" => Some(TimelineBucket::Immediate),
            "short" => Some(TimelineBucket::Short),
            "medium" => Some(TimelineBucket::Medium),
            "long" => Some(TimelineBucket::Long),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            TimelineBucket::Immediate => "immediate",
            TimelineBucket::Short => "short",
            TimelineBucket::Medium => "medium",
            TimelineBucket::Long => "long",
        }
    }

    /// 本地化标签
    pub fn label(&self) -> String {
        crate::i18n::t(&format!("timeline.{}", self.as_key()))
    }
}

impl fmt::Display for TimelineBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// 置信度桶 (Confidence Bucket)
// ==========================================
// 顺序: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBucket {
    Low,    // < 60
    Medium, // 60-79
    High,   // >= 80
}

impl ConfidenceBucket {
    /// 从筛选键解析（大小写敏感）
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "high" => Some(ConfidenceBucket::High),
            "medium" => Some(ConfidenceBucket::Medium),
            "low" => Some(ConfidenceBucket::Low),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            ConfidenceBucket::High => "high",
            ConfidenceBucket::Medium => "medium",
            ConfidenceBucket::Low => "low",
        }
    }

    pub fn label(&self) -> String {
        crate::i18n::t(&format!("confidence.{}", self.as_key()))
    }
}

impl fmt::Display for ConfidenceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// AQI 等级 (AQI Category)
// ==========================================
// Good 0-50 / Moderate 51-100 / USG 101-150 / Unhealthy 151-200
// Very Unhealthy 201-300 / Hazardous >300
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// 按 AQI 数值分级（不做截断，负值归入 Good）
    pub fn from_aqi(aqi: i32) -> Self {
        match aqi {
            a if a <= 50 => AqiCategory::Good,
            a if a <= 100 => AqiCategory::Moderate,
            a if a <= 150 => AqiCategory::UnhealthyForSensitive,
            a if a <= 200 => AqiCategory::Unhealthy,
            a if a <= 300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            AqiCategory::Good => "good",
            AqiCategory::Moderate => "moderate",
            AqiCategory::UnhealthyForSensitive => "unhealthy_for_sensitive",
            AqiCategory::Unhealthy => "unhealthy",
            AqiCategory::VeryUnhealthy => "very_unhealthy",
            AqiCategory::Hazardous => "hazardous",
        }
    }

    pub fn label(&self) -> String {
        crate::i18n::t(&format!("aqi.{}", self.as_key()))
    }

    /// 户外活动建议
    pub fn advisory(&self) -> String {
        crate::i18n::t(&format!("advisory.{}", self.as_key()))
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// 热点状态 (Hotspot Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotStatus {
    Active,       // 燃烧中
    Contained,    // 已控制
    Extinguished, // 已扑灭
}

impl fmt::Display for HotspotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotspotStatus::Active => write!(f, "active"),
            HotspotStatus::Contained => write!(f, "contained"),
            HotspotStatus::Extinguished => write!(f, "extinguished"),
        }
    }
}

// ==========================================
// 热点类型 (Hotspot Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotType {
    Stubble,    // 秸秆焚烧
    Industrial, // 工业火点
    Waste,      // 垃圾焚烧
    #[serde(other)]
    Other,      // 其余类型（含未列出的取值）
}

impl HotspotType {
    pub fn as_key(&self) -> &'static str {
        match self {
            HotspotType::Stubble => "stubble",
            HotspotType::Industrial => "industrial",
            HotspotType::Waste => "waste",
            HotspotType::Other => "other",
        }
    }
}

impl fmt::Display for HotspotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// 驾驶舱模式 (Dashboard Mode)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardMode {
    #[default]
    Citizen, // 市民
    Policy,  // 决策者
}

impl fmt::Display for DashboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardMode::Citizen => write!(f, "citizen"),
            DashboardMode::Policy => write!(f, "policy"),
        }
    }
}

// ==========================================
// 预报时间范围 (Forecast Range)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ForecastRange {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "48h")]
    H48,
    #[serde(rename = "72h")]
    H72,
}

impl ForecastRange {
    pub fn as_key(&self) -> &'static str {
        match self {
            ForecastRange::H24 => "24h",
            ForecastRange::H48 => "48h",
            ForecastRange::H72 => "72h",
        }
    }

    /// 覆盖的小时数
    pub fn hours(&self) -> usize {
        match self {
            ForecastRange::H24 => 24,
            ForecastRange::H48 => 48,
            ForecastRange::H72 => 72,
        }
    }
}

impl fmt::Display for ForecastRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// 污染物 (Pollutant)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "NO2")]
    No2,
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pollutant::Pm25 => write!(f, "PM2.5"),
            Pollutant::Pm10 => write!(f, "PM10"),
            Pollutant::No2 => write!(f, "NO2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aqi_category_boundaries() {
        assert_eq!(AqiCategory::from_aqi(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(51), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(100), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(150), AqiCategory::UnhealthyForSensitive);
        assert_eq!(AqiCategory::from_aqi(200), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(300), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_aqi(301), AqiCategory::Hazardous);
        // 未截断的值
        assert_eq!(AqiCategory::from_aqi(720), AqiCategory::Hazardous);
    }

    #[test]
    fn test_priority_keys() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_key(p.as_key()), Some(p));
        }
        assert_eq!(Priority::from_key("CRITICAL"), None);
        assert_eq!(Priority::from_key("urgent"), None);
        assert!(Priority::Critical > Priority::Low);
    }

    #[test]
    fn test_policy_category_keeps_unlisted_value() {
        let known: PolicyCategory = serde_json::from_str("\"traffic\"").unwrap();
        assert_eq!(known, PolicyCategory::Traffic);

        let unlisted: PolicyCategory = serde_json::from_str("\"energy\"").unwrap();
        assert_eq!(unlisted, PolicyCategory::Other("energy".to_string()));
        assert_eq!(unlisted.as_key(), "energy");
        assert_eq!(serde_json::to_string(&unlisted).unwrap(), "\"energy\"");
    }

    #[test]
    fn test_hotspot_type_unlisted_is_other() {
        let t: HotspotType = serde_json::from_str("\"volcanic\"").unwrap();
        assert_eq!(t, HotspotType::Other);
        let t: HotspotType = serde_json::from_str("\"stubble\"").unwrap();
        assert_eq!(t, HotspotType::Stubble);
    }

    #[test]
    fn test_bucket_keys_are_case_sensitive() {
        assert_eq!(TimelineBucket::from_key("immediate"), Some(TimelineBucket::Immediate));
        assert_eq!(TimelineBucket::from_key("IMMEDIATE"), None);
        assert_eq!(ConfidenceBucket::from_key("High"), None);
    }

    #[test]
    fn test_forecast_range_serde() {
        let json = serde_json::to_string(&ForecastRange::H48).unwrap();
        assert_eq!(json, "\"48h\"");
        let back: ForecastRange = serde_json::from_str("\"72h\"").unwrap();
        assert_eq!(back, ForecastRange::H72);
        assert_eq!(back.hours(), 72);
    }

    #[test]
    fn test_pollutant_display() {
        assert_eq!(Pollutant::Pm25.to_string(), "PM2.5");
        let json = serde_json::to_string(&vec![Pollutant::Pm25, Pollutant::No2]).unwrap();
        assert_eq!(json, "[\"PM2.5\",\"NO2\"]");
    }
}
