// ==========================================
// 延迟加载集成测试
// ==========================================
// 测试范围:
// 1. 最新请求的结果交付
// 2. 同视图过期请求的结果丢弃
// 3. 视图之间互不影响
// 4. 结果基于发起时的会话快照
// ==========================================

mod helpers;

use airvonment::api::ApiError;
use airvonment::app::{DashboardSession, DashboardView, DeferredLoader, LoadOutcome};
use airvonment::config::LoadKind;
use airvonment::domain::filter_state::RecommendationFilterState;
use airvonment::engine::filter_records;
use helpers::api_test_helper::sample_recommendations;
use helpers::mock_config::MockConfig;
use std::sync::{Arc, Mutex};

fn loader(config: MockConfig) -> DeferredLoader {
    airvonment::logging::init_test();
    DeferredLoader::new(
        Arc::new(Mutex::new(DashboardSession::default())),
        Arc::new(config),
    )
}

#[tokio::test]
async fn test_single_request_is_applied() {
    let loader = loader(MockConfig::instant());
    let outcome = loader
        .load(DashboardView::Forecast, LoadKind::ForecastRefresh, |_| Ok(42))
        .await
        .unwrap();
    assert!(outcome.is_applied());
    assert_eq!(outcome.into_value(), Some(42));
}

#[tokio::test]
async fn test_superseded_request_is_dropped() {
    let loader = loader(MockConfig::instant().with_latency(LoadKind::ForecastRange, 50));

    let first = loader
        .spawn(DashboardView::Forecast, LoadKind::ForecastRange, |_| Ok("24h"))
        .unwrap();
    let second = loader
        .spawn(DashboardView::Forecast, LoadKind::ForecastRange, |_| Ok("72h"))
        .unwrap();

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();

    assert!(matches!(first, LoadOutcome::Stale { .. }));
    assert_eq!(first.ticket().generation, 1);
    assert_eq!(second.into_value(), Some("72h"));
}

#[tokio::test]
async fn test_views_are_independent() {
    let loader = loader(MockConfig::instant().with_latency(LoadKind::Recommendations, 20));

    let recs = loader
        .spawn(DashboardView::Recommendations, LoadKind::Recommendations, |_| Ok(1))
        .unwrap();
    let hotspots = loader
        .spawn(DashboardView::Hotspots, LoadKind::ForecastRefresh, |_| Ok(2))
        .unwrap();

    assert!(recs.await.unwrap().unwrap().is_applied());
    assert!(hotspots.await.unwrap().unwrap().is_applied());
}

#[tokio::test]
async fn test_result_uses_snapshot_at_request_time() {
    let loader = loader(MockConfig::instant().with_latency(LoadKind::Recommendations, 30));
    let session = loader.session();
    session.lock().unwrap().set_filter("priority", "critical");

    let handle = loader
        .spawn(DashboardView::Recommendations, LoadKind::Recommendations, |snapshot| {
            let records = sample_recommendations();
            Ok(filter_records(&records, &snapshot.filter_state).len())
        })
        .unwrap();

    // 请求发出后修改筛选状态,不影响本次结果
    session
        .lock()
        .unwrap()
        .replace_filter_state(RecommendationFilterState::default());

    let outcome = handle.await.unwrap().unwrap();
    assert_eq!(outcome.into_value(), Some(1));
}

#[tokio::test]
async fn test_producer_error_propagates() {
    let loader = loader(MockConfig::instant());
    let result: Result<LoadOutcome<()>, ApiError> = loader
        .load(DashboardView::Forecast, LoadKind::ForecastRefresh, |_| {
            Err(ApiError::InvalidInput("no data".to_string()))
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}
