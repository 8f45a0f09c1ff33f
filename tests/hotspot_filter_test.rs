// ==========================================
// 热点纳入筛选集成测试
// ==========================================
// 测试范围:
// 1. 单开关子集
// 2. 或组合语义
// 3. 默认开关 / 全关
// ==========================================

mod helpers;

use airvonment::domain::filter_state::HotspotToggles;
use airvonment::domain::hotspot::Hotspot;
use airvonment::domain::types::HotspotType;
use airvonment::engine::filter_hotspots;
use helpers::api_test_helper::sample_hotspots;
use helpers::test_data_builder::{fixed_now, HotspotBuilder};

fn ids(hotspots: &[&Hotspot]) -> Vec<String> {
    hotspots.iter().map(|h| h.hotspot_id.clone()).collect()
}

fn only(key: &str) -> HotspotToggles {
    HotspotToggles::from_pairs([(key, true)])
}

#[test]
fn test_single_toggle_subsets() {
    let hotspots = sample_hotspots();
    let now = fixed_now();

    assert_eq!(ids(&filter_hotspots(&hotspots, &only("high-confidence"), now)), vec!["hs-001"]);
    assert_eq!(ids(&filter_hotspots(&hotspots, &only("medium-confidence"), now)), vec!["hs-002"]);
    assert_eq!(ids(&filter_hotspots(&hotspots, &only("today"), now)), vec!["hs-001"]);
    assert_eq!(
        ids(&filter_hotspots(&hotspots, &only("week"), now)),
        vec!["hs-001", "hs-002", "hs-003"]
    );
    assert_eq!(ids(&filter_hotspots(&hotspots, &only("stubble"), now)), vec!["hs-001"]);
    assert_eq!(ids(&filter_hotspots(&hotspots, &only("industrial"), now)), vec!["hs-002"]);
}

#[test]
fn test_or_semantics_single_predicate_suffices() {
    // 仅满足 high-confidence,其余开关谓词全部不满足
    let hotspots = vec![HotspotBuilder::new("lonely")
        .confidence(85)
        .hours_ago(500)
        .hotspot_type(HotspotType::Waste)
        .build()];
    let now = fixed_now();

    assert_eq!(ids(&filter_hotspots(&hotspots, &only("high-confidence"), now)), vec!["lonely"]);
    for key in ["medium-confidence", "today", "week", "stubble", "industrial"] {
        assert!(filter_hotspots(&hotspots, &only(key), now).is_empty(), "{}", key);
    }
}

#[test]
fn test_default_toggles() {
    let hotspots = sample_hotspots();
    let result = filter_hotspots(&hotspots, &HotspotToggles::default(), fixed_now());
    assert_eq!(ids(&result), vec!["hs-001", "hs-002"]);
}

#[test]
fn test_all_toggles_off_excludes_everything() {
    let hotspots = sample_hotspots();
    let off = HotspotToggles::default()
        .with("high-confidence", false)
        .with("medium-confidence", false)
        .with("today", false)
        .with("stubble", false);
    assert!(filter_hotspots(&hotspots, &off, fixed_now()).is_empty());
    assert!(filter_hotspots(&hotspots, &HotspotToggles::none(), fixed_now()).is_empty());
}

#[test]
fn test_today_window_is_strict() {
    let hotspots = vec![
        HotspotBuilder::new("edge").hours_ago(24).build(),
        HotspotBuilder::new("inside").hours_ago(23).build(),
    ];
    assert_eq!(ids(&filter_hotspots(&hotspots, &only("today"), fixed_now())), vec!["inside"]);
}
