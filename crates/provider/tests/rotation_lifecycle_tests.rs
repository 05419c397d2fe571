//! Lifecycle tests for the rotation resource against a mock API.

use firehydrant_client::{ApiClient, RotationStrategyType, shared};
use firehydrant_core::{ApiConfig, Error, ResourceLifecycle};
use firehydrant_provider::schema::{
    MemberConfig, RestrictionBlock, RotationConfig, RotationState, StrategyBlock,
};
use firehydrant_provider::OnCallRotationResource;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resource_for(server: &MockServer) -> OnCallRotationResource {
    let client = ApiClient::new(ApiConfig::new("test-key", server.uri())).unwrap();
    OnCallRotationResource::new(Arc::new(client))
}

fn weekly_config() -> RotationConfig {
    RotationConfig {
        team_id: "team-1".to_string(),
        schedule_id: "sched-1".to_string(),
        name: "primary".to_string(),
        time_zone: "America/New_York".to_string(),
        description: Some("weekday coverage".to_string()),
        color: None,
        slack_user_group_id: None,
        enable_slack_channel_notifications: Some(true),
        prevent_shift_deletion: None,
        coverage_gap_notification_interval: None,
        start_time: None,
        effective_at: None,
        members: vec![
            MemberConfig {
                user_id: Some("user-1".to_string()),
            },
            MemberConfig { user_id: None },
        ],
        strategy: StrategyBlock {
            strategy_type: RotationStrategyType::Weekly,
            handoff_time: Some("10:00".to_string()),
            handoff_day: Some("tuesday".to_string()),
            shift_duration: None,
        },
        restrictions: vec![RestrictionBlock {
            start_day: "monday".to_string(),
            start_time: "09:00".to_string(),
            end_day: "friday".to_string(),
            end_time: "17:00".to_string(),
        }],
    }
}

fn state_for(rotation_id: &str) -> RotationState {
    RotationState {
        id: rotation_id.to_string(),
        team_id: "team-1".to_string(),
        schedule_id: "sched-1".to_string(),
        name: "primary".to_string(),
        time_zone: "America/New_York".to_string(),
        description: None,
        color: None,
        slack_user_group_id: None,
        enable_slack_channel_notifications: false,
        prevent_shift_deletion: false,
        coverage_gap_notification_interval: None,
        start_time: None,
        members: Vec::new(),
        strategy: None,
        restrictions: Vec::new(),
    }
}

#[tokio::test]
async fn create_translates_config_and_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/teams/team-1/on_call_schedules/sched-1/rotations"))
        .and(body_partial_json(json!({
            "name": "primary",
            "members": [{ "user_id": "user-1" }, { "user_id": null }],
            "strategy": { "type": "weekly", "handoff_time": "10:00", "handoff_day": "tuesday" },
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "rot-1",
            "name": "primary",
            "description": "weekday coverage",
            "time_zone": "America/New_York",
            "enable_slack_channel_notifications": true,
            "prevent_shift_deletion": null,
            "members": [
                { "id": "user-1", "name": "Alex" },
                { "id": null },
            ],
            "strategy": { "type": "weekly", "handoff_time": "10:00", "handoff_day": "tuesday" },
            "restrictions": [
                { "start_day": "monday", "start_time": "09:00", "end_day": "friday", "end_time": "17:00" },
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource_for(&server);
    let state = resource.create(&weekly_config()).await.unwrap();

    assert_eq!(state.id, "rot-1");
    assert_eq!(state.team_id, "team-1");
    assert_eq!(state.schedule_id, "sched-1");
    assert!(state.enable_slack_channel_notifications);
    assert!(!state.prevent_shift_deletion);

    let user_ids: Vec<&str> = state
        .members
        .iter()
        .map(|member| member.user_id.as_str())
        .collect();
    assert_eq!(user_ids, vec!["user-1", ""]);

    let strategy = state.strategy.unwrap();
    assert_eq!(strategy.handoff_day.as_deref(), Some("tuesday"));
    assert_eq!(state.restrictions.len(), 1);
}

#[tokio::test]
async fn create_with_invalid_strategy_never_reaches_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = weekly_config();
    config.strategy.handoff_day = None;

    let resource = resource_for(&server);
    let err = resource.create(&config).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }), "got: {err}");
}

#[tokio::test]
async fn read_clears_state_when_rotation_is_gone() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/team-1/on_call_schedules/sched-1/rotations/rot-1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resource = resource_for(&server);
    let refreshed = resource.read(&state_for("rot-1")).await.unwrap();
    assert!(refreshed.is_none());
}

#[tokio::test]
async fn read_propagates_other_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/team-1/on_call_schedules/sched-1/rotations/rot-1"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let resource = resource_for(&server);
    let err = resource.read(&state_for("rot-1")).await.unwrap_err();
    match err {
        Error::Api {
            status, message, ..
        } => {
            assert_eq!(status, Some(403));
            assert_eq!(message, "forbidden");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn update_sends_lists_and_a_future_effective_at_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/teams/team-1/on_call_schedules/sched-1/rotations/rot-1"))
        .and(body_partial_json(json!({
            "name": "primary",
            "members": [{ "user_id": "user-1" }, { "user_id": null }],
            "restrictions": [
                { "start_day": "monday", "start_time": "09:00", "end_day": "friday", "end_time": "17:00" },
            ],
            "effective_at": "2091-01-01T00:00:00Z",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rot-1",
            "name": "primary",
            "time_zone": "America/New_York",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = weekly_config();
    config.effective_at = Some("2091-01-01T00:00:00Z".to_string());

    let resource = resource_for(&server);
    let state = resource
        .update(&state_for("rot-1"), &config)
        .await
        .unwrap();
    assert_eq!(state.id, "rot-1");
}

#[tokio::test]
async fn delete_treats_404_as_success() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/teams/team-1/on_call_schedules/sched-1/rotations/rot-1"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resource = resource_for(&server);
    resource.delete(&state_for("rot-1")).await.unwrap();
}

#[tokio::test]
async fn import_round_trips_the_composite_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/team-1/on_call_schedules/sched-1/rotations/rot-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rot-1",
            "name": "primary",
            "time_zone": "UTC",
            "members": [{ "id": "member-1", "name": "Alex" }],
        })))
        .mount(&server)
        .await;

    let resource = resource_for(&server);
    let state = resource
        .import_resource("team-1:sched-1:rot-1")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(state.team_id, "team-1");
    assert_eq!(state.schedule_id, "sched-1");
    assert_eq!(state.id, "rot-1");
    assert_eq!(state.members[0].user_id, "member-1");
}

#[tokio::test]
async fn import_rejects_malformed_ids_before_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let resource = resource_for(&server);
    for id in ["team-1:sched-1", "team-1::rot-1"] {
        let err = resource.import_resource(id).await.unwrap_err();
        assert!(matches!(err, Error::Validation { .. }), "id {id:?} gave: {err}");
    }
}

#[tokio::test]
async fn import_of_a_missing_rotation_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/team-1/on_call_schedules/sched-1/rotations/rot-9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resource = resource_for(&server);
    let state = resource
        .import_resource("team-1:sched-1:rot-9")
        .await
        .unwrap();
    assert!(state.is_none());
}

#[tokio::test]
async fn shared_client_is_reused_across_resources() {
    shared::reset();

    let config = ApiConfig::new("test-key", "https://api.example.com/v1");
    let first = shared::get_or_init(&config).unwrap();
    let second = shared::get_or_init(&config).unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let _resource = OnCallRotationResource::new(second);
    shared::reset();
}
