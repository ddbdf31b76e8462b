use docket_record::RequestStatus;
use docket_sync::{poller, Dashboard, SyncConfig};
use docket_test_utils::{record, sample_profile, FakeRecordsService, RecordingAlertSink, StaticProfileSource};
use std::sync::Arc;
use std::time::Duration;

fn dashboard_with(service: &Arc<FakeRecordsService>) -> Arc<Dashboard> {
    Arc::new(Dashboard::new(
        SyncConfig::new().with_poll_interval(Duration::from_millis(20)),
        Arc::clone(service) as Arc<dyn docket_sync::RecordsService>,
        StaticProfileSource::serving(sample_profile()),
        RecordingAlertSink::new(),
    ))
}

#[tokio::test]
async fn test_poller_polls_repeatedly() {
    let service =
        FakeRecordsService::with_records(vec![record(1, "Diploma", RequestStatus::Pending)]);
    let dashboard = dashboard_with(&service);

    let poller = Arc::clone(&dashboard).start_polling();
    tokio::time::sleep(Duration::from_millis(110)).await;
    poller.stop().await;

    // Immediate first tick plus several periodic ones.
    assert!(service.fetch_count() >= 3, "only {} polls", service.fetch_count());
    assert_eq!(dashboard.counts().pending, 1);
}

#[tokio::test]
async fn test_poller_picks_up_background_transition() {
    let service =
        FakeRecordsService::with_records(vec![record(1, "Diploma", RequestStatus::Pending)]);
    let dashboard = dashboard_with(&service);

    let poller = Arc::clone(&dashboard).start_polling();
    tokio::time::sleep(Duration::from_millis(50)).await;
    service.push_frame(vec![record(1, "Diploma", RequestStatus::ToPay)]);
    tokio::time::sleep(Duration::from_millis(80)).await;
    poller.stop().await;

    assert_eq!(dashboard.unread_count(), 1);
    assert_eq!(
        dashboard.notifications()[0].message,
        "Diploma is now To Pay"
    );
}

#[tokio::test]
async fn test_poller_survives_fetch_failures() {
    let service =
        FakeRecordsService::with_records(vec![record(1, "Diploma", RequestStatus::Pending)]);
    let dashboard = dashboard_with(&service);

    let poller = Arc::clone(&dashboard).start_polling();
    tokio::time::sleep(Duration::from_millis(30)).await;
    service.fail_next_fetch("502 bad gateway");
    tokio::time::sleep(Duration::from_millis(80)).await;
    poller.stop().await;

    // The failed tick kept the last snapshot; later ticks recovered.
    assert_eq!(dashboard.counts().pending, 1);
}

#[tokio::test]
async fn test_stop_halts_all_polling() {
    let service =
        FakeRecordsService::with_records(vec![record(1, "Diploma", RequestStatus::Pending)]);
    let dashboard = dashboard_with(&service);

    let poller = Arc::clone(&dashboard).start_polling();
    tokio::time::sleep(Duration::from_millis(50)).await;
    poller.stop().await;

    let fetches_at_stop = service.fetch_count();
    let snapshot_at_stop = dashboard.snapshot();
    tokio::time::sleep(Duration::from_millis(100)).await;

    // No fetches and no state mutation after teardown.
    assert_eq!(service.fetch_count(), fetches_at_stop);
    assert_eq!(dashboard.snapshot(), snapshot_at_stop);
}

#[tokio::test]
async fn test_dropping_the_handle_stops_the_loop() {
    let service =
        FakeRecordsService::with_records(vec![record(1, "Diploma", RequestStatus::Pending)]);
    let dashboard = dashboard_with(&service);

    let poller = poller::spawn(Arc::clone(&dashboard), Duration::from_millis(20));
    tokio::time::sleep(Duration::from_millis(30)).await;
    drop(poller);
    tokio::time::sleep(Duration::from_millis(40)).await;

    let fetches_after_drop = service.fetch_count();
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(service.fetch_count(), fetches_after_drop);
}
