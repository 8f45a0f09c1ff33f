// ==========================================
// AirVonment 空气质量决策支持 - 推荐筛选引擎
// ==========================================
// 职责: 按筛选状态对记录做多准则"与"筛选
// 输入: 记录切片 + RecommendationFilterState
// 输出: 满足全部生效准则的记录（保持输入顺序）
// ==========================================
// 准则语义:
// - priority / category: 规范键精确相等
// - timeline: 周期桶成员关系（见 bucketing）
// - confidence: 置信度桶相等
// - 记录缺少被引用字段: 该准则不匹配
// - 未知键 / 无法识别的 timeline、confidence 取值: 记录告警并忽略
// ==========================================

use crate::domain::filter_state::{criteria, RecommendationFilterState};
use crate::domain::recommendation::Recommendation;
use crate::domain::types::{ConfidenceBucket, TimelineBucket};
use crate::engine::bucketing::{bucket_confidence, timeline_in_bucket};
use crate::engine::error::EngineError;
use tracing::{debug, instrument, warn};

// ==========================================
// Trait: CriteriaRecord
// ==========================================
// 用途: 暴露所有准则可能引用的字段
pub trait CriteriaRecord {
    fn priority_key(&self) -> Option<&str>;
    fn category_key(&self) -> Option<&str>;
    fn timeline_text(&self) -> Option<&str>;
    fn confidence_value(&self) -> Option<i32>;
}

impl CriteriaRecord for Recommendation {
    fn priority_key(&self) -> Option<&str> {
        self.priority.as_ref().map(|p| p.as_key())
    }

    fn category_key(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.as_key())
    }

    fn timeline_text(&self) -> Option<&str> {
        self.timeline.as_deref()
    }

    fn confidence_value(&self) -> Option<i32> {
        self.confidence
    }
}

// ==========================================
// Criterion - 单个生效准则
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Priority(String),
    Category(String),
    Timeline(TimelineBucket),
    Confidence(ConfidenceBucket),
}

impl Criterion {
    /// 判断记录是否满足该准则
    pub fn matches<R: CriteriaRecord + ?Sized>(&self, record: &R) -> bool {
        match self {
            Criterion::Priority(value) => record.priority_key() == Some(value.as_str()),
            Criterion::Category(value) => record.category_key() == Some(value.as_str()),
            Criterion::Timeline(bucket) => record
                .timeline_text()
                .map(|text| timeline_in_bucket(text, *bucket))
                .unwrap_or(false),
            Criterion::Confidence(bucket) => record
                .confidence_value()
                .map(|c| bucket_confidence(c) == *bucket)
                .unwrap_or(false),
        }
    }
}

// ==========================================
// CompiledFilter - 已解析的筛选器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct CompiledFilter {
    criteria: Vec<Criterion>,
    ignored: Vec<EngineError>,
}

impl CompiledFilter {
    /// 解析筛选状态
    ///
    /// # 规则
    /// - "all" / 缺失: 准则不生效
    /// - 未知键: 忽略,记入 ignored
    /// - timeline / confidence 取值无法识别: 忽略,记入 ignored
    /// - priority / category 取值原样保留（未知取值不会匹配任何记录）
    pub fn compile(state: &RecommendationFilterState) -> Self {
        let mut compiled = Self::default();

        for (key, value) in state.active_entries() {
            match key {
                criteria::PRIORITY => compiled
                    .criteria
                    .push(Criterion::Priority(value.to_string())),
                criteria::CATEGORY => compiled
                    .criteria
                    .push(Criterion::Category(value.to_string())),
                criteria::TIMELINE => match TimelineBucket::from_key(value) {
                    Some(bucket) => compiled.criteria.push(Criterion::Timeline(bucket)),
                    None => compiled.ignore(EngineError::InvalidCriterionValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    }),
                },
                criteria::CONFIDENCE => match ConfidenceBucket::from_key(value) {
                    Some(bucket) => compiled.criteria.push(Criterion::Confidence(bucket)),
                    None => compiled.ignore(EngineError::InvalidCriterionValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    }),
                },
                _ => compiled.ignore(EngineError::UnknownCriterion(key.to_string())),
            }
        }

        compiled
    }

    fn ignore(&mut self, err: EngineError) {
        warn!(error = %err, "筛选准则已忽略");
        self.ignored.push(err);
    }

    /// 记录是否满足全部生效准则
    pub fn matches<R: CriteriaRecord + ?Sized>(&self, record: &R) -> bool {
        self.criteria.iter().all(|c| c.matches(record))
    }

    /// 应用筛选（保持输入顺序）
    pub fn apply<'a, R: CriteriaRecord>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// 被忽略的准则（非致命）
    pub fn ignored(&self) -> &[EngineError] {
        &self.ignored
    }

    pub fn is_identity(&self) -> bool {
        self.criteria.is_empty()
    }
}

/// 按筛选状态筛选记录
#[instrument(skip(records, state), fields(count = records.len()))]
pub fn filter_records<'a, R: CriteriaRecord>(
    records: &'a [R],
    state: &RecommendationFilterState,
) -> Vec<&'a R> {
    let compiled = CompiledFilter::compile(state);
    let filtered = compiled.apply(records);
    debug!(
        criteria = compiled.criteria().len(),
        matched = filtered.len(),
        "推荐筛选完成"
    );
    filtered
}

/// 单条记录是否满足筛选状态
pub fn matches<R: CriteriaRecord + ?Sized>(record: &R, state: &RecommendationFilterState) -> bool {
    CompiledFilter::compile(state).matches(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{PolicyCategory, Priority};

    fn rec(id: &str, priority: Priority, timeline: &str, confidence: i32) -> Recommendation {
        Recommendation::new(id, id, priority, PolicyCategory::Traffic, timeline, confidence)
    }

    #[test]
    fn test_compile_default_state_is_identity() {
        let compiled = CompiledFilter::compile(&RecommendationFilterState::default());
        assert!(compiled.is_identity());
        assert!(compiled.ignored().is_empty());
    }

    #[test]
    fn test_compile_collects_ignored_criteria() {
        let state = RecommendationFilterState::from_pairs([
            ("timeline", "someday"),
            ("confidence", "very-high"),
            ("region", "north"),
            ("priority", "high"),
        ]);
        let compiled = CompiledFilter::compile(&state);
        assert_eq!(compiled.criteria(), &[Criterion::Priority("high".to_string())]);
        assert_eq!(compiled.ignored().len(), 3);
        assert!(compiled
            .ignored()
            .contains(&EngineError::UnknownCriterion("region".to_string())));
    }

    #[test]
    fn test_missing_field_fails_criterion() {
        let mut r = rec("rec-1", Priority::High, "1 day", 90);
        r.confidence = None;
        r.timeline = None;
        assert!(!Criterion::Confidence(ConfidenceBucket::High).matches(&r));
        assert!(!Criterion::Timeline(TimelineBucket::Immediate).matches(&r));
        assert!(Criterion::Priority("high".to_string()).matches(&r));
    }

    #[test]
    fn test_matches_requires_all_criteria() {
        let r = rec("rec-1", Priority::Critical, "2-3 days", 85);
        let state = RecommendationFilterState::default()
            .with("priority", "critical")
            .with("confidence", "medium");
        assert!(!matches(&r, &state));
        assert!(matches(&r, &state.with("confidence", "high")));
    }
}
