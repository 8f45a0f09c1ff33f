// ==========================================
// AirVonment 空气质量决策支持 - 筛选状态
// ==========================================
// 职责: 推荐筛选状态 (单值准则, "all" 为不生效) 与热点开关 (布尔)
// 红线: 每次更新生成新状态对象,不在原对象上修改
// 约定: 缺失的键与 "all" 等价
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 不生效哨兵值
pub const ALL: &str = "all";

/// 推荐筛选准则键
pub mod criteria {
    pub const PRIORITY: &str = "priority";
    pub const CATEGORY: &str = "category";
    pub const TIMELINE: &str = "timeline";
    pub const CONFIDENCE: &str = "confidence";

    /// 默认状态包含的全部准则
    pub const DEFAULT_KEYS: [&str; 4] = [PRIORITY, CATEGORY, TIMELINE, CONFIDENCE];
}

/// 热点开关键
pub mod toggles {
    pub const HIGH_CONFIDENCE: &str = "high-confidence";
    pub const MEDIUM_CONFIDENCE: &str = "medium-confidence";
    pub const TODAY: &str = "today";
    pub const WEEK: &str = "week";
    pub const STUBBLE: &str = "stubble";
    pub const INDUSTRIAL: &str = "industrial";
}

// ==========================================
// RecommendationFilterState - 推荐筛选状态
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationFilterState {
    entries: BTreeMap<String, String>,
}

impl Default for RecommendationFilterState {
    /// 默认状态: 四个准则均为 "all"
    fn default() -> Self {
        Self {
            entries: criteria::DEFAULT_KEYS
                .iter()
                .map(|k| (k.to_string(), ALL.to_string()))
                .collect(),
        }
    }
}

impl RecommendationFilterState {
    /// 从任意键值对构造（未知键保留,由引擎决定如何处理）
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 返回设置了 `key = value` 的新状态
    pub fn with(&self, key: &str, value: &str) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }

    /// 返回全部准则重置为 "all" 的新状态
    pub fn reset(&self) -> Self {
        Self::default()
    }

    /// 读取准则取值; "all" 或缺失均返回 None
    pub fn active_value(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !is_all(v))
    }

    /// 生效中的准则 (键, 值)
    pub fn active_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(_, v)| !is_all(v))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 生效中的准则数量（筛选面板角标）
    pub fn active_count(&self) -> usize {
        self.active_entries().count()
    }

    /// 是否所有准则都不生效
    pub fn is_identity(&self) -> bool {
        self.active_count() == 0
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

fn is_all(value: &str) -> bool {
    value == ALL
}

// ==========================================
// HotspotToggles - 热点图层开关
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotspotToggles {
    entries: BTreeMap<String, bool>,
}

impl Default for HotspotToggles {
    /// 与地图视图初始状态一致
    fn default() -> Self {
        Self::from_pairs([
            (toggles::HIGH_CONFIDENCE, true),
            (toggles::MEDIUM_CONFIDENCE, true),
            (toggles::TODAY, true),
            (toggles::WEEK, false),
            (toggles::STUBBLE, true),
            (toggles::INDUSTRIAL, false),
        ])
    }
}

impl HotspotToggles {
    /// 全部关闭
    pub fn none() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// 返回切换了单个开关的新状态
    pub fn with(&self, key: &str, enabled: bool) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), enabled);
        Self { entries }
    }

    /// 开关是否打开（缺失视为关闭）
    pub fn is_on(&self, key: &str) -> bool {
        self.entries.get(key).copied().unwrap_or(false)
    }

    /// 已打开的开关
    pub fn enabled_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, on)| **on)
            .map(|(k, _)| k.as_str())
    }

    pub fn entries(&self) -> &BTreeMap<String, bool> {
        &self.entries
    }
}
