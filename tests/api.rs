//! Endpoint-client tests against a wiremock server.
//!
//! Covers the token exchange, the workflow lifecycle round trip, and the
//! exact request shapes (bearer header, ordered task payload).

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use up42_qa::api::{TaskRequest, Up42Client, Up42Error};

fn client_for(server: &MockServer) -> Up42Client {
    Up42Client::with_base_url(server.uri())
}

#[tokio::test]
async fn authenticate_returns_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string("grant_type=client_credentials"))
        .and(header_exists("authorization"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"accessToken": "tok-xyz"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client.authenticate("proj-1", "key-1").await.unwrap();
    assert_eq!(token, "tok-xyz");
}

#[tokio::test]
async fn authenticate_embeds_credentials_as_basic_auth() {
    let server = MockServer::start().await;
    // base64("proj-1:key-1")
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("authorization", "Basic cHJvai0xOmtleS0x"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"accessToken": "tok-abc"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = client.authenticate("proj-1", "key-1").await.unwrap();
    assert_eq!(token, "tok-abc");
}

#[tokio::test]
async fn authenticate_non_200_is_auth_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("<html>unauthorized</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.authenticate("proj-1", "bad-key").await.unwrap_err();
    assert!(matches!(err, Up42Error::AuthFailed { status: 401 }));
}

#[tokio::test]
async fn authenticate_500_with_empty_body_is_auth_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.authenticate("proj-1", "key-1").await.unwrap_err();
    assert!(matches!(err, Up42Error::AuthFailed { status: 500 }));
}

#[tokio::test]
async fn authenticate_200_with_unexpected_body_is_an_error_not_a_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.authenticate("proj-1", "key-1").await;
    assert!(result.is_err());
    assert!(!matches!(result, Err(Up42Error::AuthFailed { .. })));
}

#[tokio::test]
async fn workflow_create_get_delete_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/proj-1/workflows"))
        .and(body_json(json!({"name": "abc12", "description": "xyz12"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": "wf-1", "name": "abc12"}})),
        )
        .mount(&server)
        .await;

    // First GET finds the workflow; after the delete the fallback 404 applies.
    Mock::given(method("GET"))
        .and(path("/projects/proj-1/workflows/wf-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": "wf-1", "name": "abc12"}})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/proj-1/workflows/wf-1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "workflow not found"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/projects/proj-1/workflows/wf-1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let created = client
        .create_workflow("tok", "proj-1", "abc12", "xyz12")
        .await
        .unwrap();
    assert_eq!(created.status, 200);
    let workflow_id = created.data_str("id").unwrap();
    assert_eq!(workflow_id, "wf-1");

    let fetched = client
        .get_workflow("tok", "proj-1", &workflow_id)
        .await
        .unwrap();
    assert_eq!(fetched.status, 200);
    assert_eq!(fetched.data_str("id").as_deref(), Some("wf-1"));

    let deleted = client
        .delete_workflow("tok", "proj-1", &workflow_id)
        .await
        .unwrap();
    assert_eq!(deleted.status, 204);

    let gone = client
        .get_workflow("tok", "proj-1", &workflow_id)
        .await
        .unwrap();
    assert_eq!(gone.status, 404);
}

#[tokio::test]
async fn delete_nonexistent_workflow_returns_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/projects/proj-1/workflows/no-such-wf"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .delete_workflow("tok", "proj-1", "no-such-wf")
        .await
        .unwrap();
    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn add_tasks_sends_ordered_payload_with_null_root_parent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects/proj-1/workflows/wf-1/tasks"))
        .and(body_json(json!([
            {"name": "nasa-modis:1", "parentName": null, "blockId": "block-a"},
            {"name": "sharpening:1", "parentName": "nasa-modis:1", "blockId": "block-b"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let tasks = vec![
        TaskRequest::root("nasa-modis:1", "block-a"),
        TaskRequest::child("sharpening:1", "nasa-modis:1", "block-b"),
    ];

    let client = client_for(&server);
    let response = client
        .add_tasks("tok", "proj-1", "wf-1", &tasks)
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn authorized_calls_carry_bearer_token() {
    let server = MockServer::start().await;
    // Only a request with the exact bearer header matches; anything else
    // falls through to wiremock's default 404.
    Mock::given(method("GET"))
        .and(path("/projects/proj-1/workflows/wf-1"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "wf-1"}})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .get_workflow("tok-123", "proj-1", "wf-1")
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn create_and_run_job_passes_config_through() {
    let server = MockServer::start().await;
    let job_config = json!({
        "nasa-modis:1": {"zoom_level": 9},
        "sharpening:1": {"strength": "medium"}
    });

    Mock::given(method("POST"))
        .and(path("/projects/proj-1/workflows/wf-1/jobs"))
        .and(body_json(job_config.clone()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": "job-1", "status": "PENDING"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .create_and_run_job("tok", "proj-1", "wf-1", &job_config)
        .await
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.data_str("id").as_deref(), Some("job-1"));
}

#[tokio::test]
async fn check_job_status_returns_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/proj-1/jobs/job-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": "job-1", "status": "RUNNING"}})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .check_job_status("tok", "proj-1", "job-1")
        .await
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.data_str("status").as_deref(), Some("RUNNING"));
    assert!(response.body.contains("\"RUNNING\""));
}

#[tokio::test]
async fn remote_rejection_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects/proj-1/workflows"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "name too long"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .create_workflow("tok", "proj-1", "way-too-long", "desc")
        .await
        .unwrap();
    assert_eq!(response.status, 400);
    assert!(response.body.contains("name too long"));
}
