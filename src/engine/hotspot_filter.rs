// ==========================================
// AirVonment 空气质量决策支持 - 热点纳入筛选
// ==========================================
// 职责: 按图层开关对热点做"或"筛选
// 红线: 与推荐筛选(与组合)保持结构分离,组合语义不同
// ==========================================
// 开关谓词:
// - high-confidence: confidence >= 80
// - medium-confidence: 60 <= confidence < 80
// - today: 检测距今 < 24h
// - week: 检测距今 < 7 天
// - stubble / industrial: 类型相等
// 无任何开关打开时结果为空
// ==========================================

use crate::domain::filter_state::{toggles, HotspotToggles};
use crate::domain::hotspot::Hotspot;
use crate::domain::types::HotspotType;
use crate::engine::bucketing::{HIGH_CONFIDENCE_MIN, MEDIUM_CONFIDENCE_MIN};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument, warn};

/// "今日"窗口
pub fn today_window() -> Duration {
    Duration::hours(24)
}

/// "本周"窗口
pub fn week_window() -> Duration {
    Duration::days(7)
}

// ==========================================
// HotspotToggle - 单个开关谓词
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotToggle {
    HighConfidence,
    MediumConfidence,
    Today,
    Week,
    Stubble,
    Industrial,
}

impl HotspotToggle {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            toggles::HIGH_CONFIDENCE => Some(HotspotToggle::HighConfidence),
            toggles::MEDIUM_CONFIDENCE => Some(HotspotToggle::MediumConfidence),
            toggles::TODAY => Some(HotspotToggle::Today),
            toggles::WEEK => Some(HotspotToggle::Week),
            toggles::STUBBLE => Some(HotspotToggle::Stubble),
            toggles::INDUSTRIAL => Some(HotspotToggle::Industrial),
            _ => None,
        }
    }

    /// 热点是否满足该开关的谓词
    pub fn admits(&self, hotspot: &Hotspot, now: DateTime<Utc>) -> bool {
        match self {
            HotspotToggle::HighConfidence => hotspot.confidence >= HIGH_CONFIDENCE_MIN,
            HotspotToggle::MediumConfidence => {
                hotspot.confidence >= MEDIUM_CONFIDENCE_MIN
                    && hotspot.confidence < HIGH_CONFIDENCE_MIN
            }
            HotspotToggle::Today => hotspot.detected_within(now, today_window()),
            HotspotToggle::Week => hotspot.detected_within(now, week_window()),
            HotspotToggle::Stubble => hotspot.hotspot_type == HotspotType::Stubble,
            HotspotToggle::Industrial => hotspot.hotspot_type == HotspotType::Industrial,
        }
    }
}

// ==========================================
// HotspotInclusionFilter - 已解析的开关集合
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct HotspotInclusionFilter {
    active: Vec<HotspotToggle>,
    ignored: Vec<String>,
}

impl HotspotInclusionFilter {
    /// 解析开关（未知键忽略并告警）
    pub fn compile(state: &HotspotToggles) -> Self {
        let mut filter = Self::default();
        for key in state.enabled_keys() {
            match HotspotToggle::from_key(key) {
                Some(toggle) => filter.active.push(toggle),
                None => {
                    warn!(toggle = key, "未知热点开关,已忽略");
                    filter.ignored.push(key.to_string());
                }
            }
        }
        filter
    }

    /// 任一打开的开关满足即纳入
    pub fn includes(&self, hotspot: &Hotspot, now: DateTime<Utc>) -> bool {
        self.active.iter().any(|t| t.admits(hotspot, now))
    }

    pub fn active(&self) -> &[HotspotToggle] {
        &self.active
    }

    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }
}

/// 按开关筛选热点（保持输入顺序）
#[instrument(skip(hotspots, state), fields(count = hotspots.len()))]
pub fn filter_hotspots<'a>(
    hotspots: &'a [Hotspot],
    state: &HotspotToggles,
    now: DateTime<Utc>,
) -> Vec<&'a Hotspot> {
    let filter = HotspotInclusionFilter::compile(state);
    let included: Vec<&Hotspot> = hotspots
        .iter()
        .filter(|h| filter.includes(h, now))
        .collect();
    debug!(
        toggles = filter.active().len(),
        included = included.len(),
        "热点筛选完成"
    );
    included
}
