use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use docket_sync::{Dashboard, SyncConfig, SyncError};
use docket_test_utils::{sample_profile, FakeRecordsService, RecordingAlertSink, StaticProfileSource};
use std::sync::Arc;

fn dashboard_with(profile_source: Arc<StaticProfileSource>) -> Arc<Dashboard> {
    Arc::new(Dashboard::new(
        SyncConfig::new(),
        FakeRecordsService::new(),
        profile_source,
        RecordingAlertSink::new(),
    ))
}

fn token_for(username: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"username":"{username}"}}"#).as_bytes());
    format!("{header}.{payload}.signature")
}

#[tokio::test]
async fn test_profile_fetch_success() {
    let dashboard = dashboard_with(StaticProfileSource::serving(sample_profile()));

    assert!(dashboard.profile().loading);
    dashboard.load_profile().await.unwrap();

    let state = dashboard.profile();
    assert!(!state.loading);
    assert_eq!(state.profile, sample_profile());
}

#[tokio::test]
async fn test_profile_falls_back_to_token_claims() {
    let token = token_for("jdoe");
    let dashboard = dashboard_with(StaticProfileSource::failing(Some(token.as_str())));

    dashboard.load_profile().await.unwrap();

    let state = dashboard.profile();
    assert!(!state.loading);
    assert_eq!(state.profile.full_name, "jdoe");
    assert_eq!(state.profile.student_id, "jdoe");
    // Program is not in the claims; the placeholder value stays.
    assert_eq!(state.profile.program, "");
}

#[tokio::test]
async fn test_profile_keeps_placeholder_when_token_is_garbage() {
    let dashboard = dashboard_with(StaticProfileSource::failing(Some("not-a-jwt")));

    let result = dashboard.load_profile().await;
    assert!(matches!(result, Err(SyncError::DecodeFailed(_))));

    let state = dashboard.profile();
    assert!(!state.loading);
    assert_eq!(state.profile.full_name, "Loading...");
}

#[tokio::test]
async fn test_profile_keeps_placeholder_without_a_token() {
    let dashboard = dashboard_with(StaticProfileSource::failing(None));

    let result = dashboard.load_profile().await;
    assert!(matches!(result, Err(SyncError::DecodeFailed(_))));
    assert_eq!(dashboard.profile().profile.full_name, "Loading...");
}
