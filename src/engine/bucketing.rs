// ==========================================
// AirVonment 空气质量决策支持 - 分桶规则
// ==========================================
// 职责: 实施周期文本 → 周期桶; 置信度 → 置信度桶
// 红线: 周期短语表为权威数据,不得"修正"启发式
// ==========================================
// 已知局限: 不含任何短语前导数字的文本（如 "Ongoing"、"Daily"）
// 不属于任何桶,周期准则对其永远不匹配。
// ==========================================

use crate::domain::types::{ConfidenceBucket, TimelineBucket};

/// 周期桶短语表（按 immediate → long 顺序）
pub const TIMELINE_PHRASES: [(TimelineBucket, [&str; 3]); 4] = [
    (TimelineBucket::Immediate, ["1 day", "1-2 days", "2-3 days"]),
    (TimelineBucket::Short, ["3-5 days", "1 week", "1-2 weeks"]),
    (TimelineBucket::Medium, ["2-4 weeks", "1 month", "1-3 months"]),
    (TimelineBucket::Long, ["3-6 months", "6+ months", "1 year+"]),
];

/// 置信度阈值
pub const HIGH_CONFIDENCE_MIN: i32 = 80;
pub const MEDIUM_CONFIDENCE_MIN: i32 = 60;

/// 短语的前导记号（第一个空格之前的部分）
fn leading_token(phrase: &str) -> &str {
    phrase.split(' ').next().unwrap_or(phrase)
}

fn phrases_of(bucket: TimelineBucket) -> &'static [&'static str; 3] {
    TIMELINE_PHRASES
        .iter()
        .find(|(b, _)| *b == bucket)
        .map(|(_, phrases)| phrases)
        .unwrap_or(&TIMELINE_PHRASES[0].1)
}

/// 判断周期文本是否属于指定桶
///
/// # 规则
/// 文本包含该桶任一短语的前导记号（子串匹配）即属于该桶。
/// 一个文本可能同时属于多个桶,筛选使用的是成员关系。
pub fn timeline_in_bucket(text: &str, bucket: TimelineBucket) -> bool {
    phrases_of(bucket)
        .iter()
        .any(|phrase| text.contains(leading_token(phrase)))
}

/// 将周期文本映射到第一个匹配的桶
///
/// # 返回
/// - Some(bucket): 按 immediate → short → medium → long 顺序的第一个匹配
/// - None: 无匹配（未分桶,不是错误）
pub fn bucket_timeline(text: &str) -> Option<TimelineBucket> {
    TimelineBucket::ALL
        .into_iter()
        .find(|bucket| timeline_in_bucket(text, *bucket))
}

/// 置信度分桶
///
/// - High: >= 80
/// - Medium: 60 <= c < 80
/// - Low: < 60
pub fn bucket_confidence(value: i32) -> ConfidenceBucket {
    if value >= HIGH_CONFIDENCE_MIN {
        ConfidenceBucket::High
    } else if value >= MEDIUM_CONFIDENCE_MIN {
        ConfidenceBucket::Medium
    } else {
        ConfidenceBucket::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_boundaries() {
        assert_eq!(bucket_confidence(59), ConfidenceBucket::Low);
        assert_eq!(bucket_confidence(60), ConfidenceBucket::Medium);
        assert_eq!(bucket_confidence(79), ConfidenceBucket::Medium);
        assert_eq!(bucket_confidence(80), ConfidenceBucket::High);
        assert_eq!(bucket_confidence(100), ConfidenceBucket::High);
        assert_eq!(bucket_confidence(i32::MIN), ConfidenceBucket::Low);
    }

    #[test]
    fn test_phrase_table_members_bucket_to_themselves() {
        assert_eq!(bucket_timeline("1 day"), Some(TimelineBucket::Immediate));
        assert_eq!(bucket_timeline("1-2 days"), Some(TimelineBucket::Immediate));
        assert_eq!(bucket_timeline("2-3 days"), Some(TimelineBucket::Immediate));
        assert_eq!(bucket_timeline("3-5 days"), Some(TimelineBucket::Short));
        assert_eq!(bucket_timeline("2-4 weeks"), Some(TimelineBucket::Medium));
        assert_eq!(bucket_timeline("3-6 months"), Some(TimelineBucket::Long));
        assert_eq!(bucket_timeline("6+ months"), Some(TimelineBucket::Long));
    }

    #[test]
    fn test_membership_is_not_exclusive() {
        // "1 week" 含 "1"，同时属于 immediate 与 short
        assert!(timeline_in_bucket("1 week", TimelineBucket::Immediate));
        assert!(timeline_in_bucket("1 week", TimelineBucket::Short));
        assert_eq!(bucket_timeline("1 week"), Some(TimelineBucket::Immediate));
    }

    #[test]
    fn test_unmatched_text_has_no_bucket() {
        assert_eq!(bucket_timeline("Ongoing"), None);
        assert_eq!(bucket_timeline("Daily"), None);
        assert_eq!(bucket_timeline(""), None);
        for bucket in TimelineBucket::ALL {
            assert!(!timeline_in_bucket("Continuous", bucket));
        }
    }

    #[test]
    fn test_long_term_text_not_immediate() {
        assert!(!timeline_in_bucket("6+ months", TimelineBucket::Immediate));
        assert!(!timeline_in_bucket("6+ months", TimelineBucket::Short));
    }
}
