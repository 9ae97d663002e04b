//! HTTP-level behaviour of the SiliconFlow probe against a mock server

use serde_json::json;
use sf_key_checker::{
    CandidateKey, ClientConfig, ProbeError, SiliconFlowClient, Validator,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(raw: &str) -> CandidateKey {
    CandidateKey::new(raw).unwrap()
}

fn client_for(server: &MockServer) -> SiliconFlowClient {
    SiliconFlowClient::new(ClientConfig::default().with_base_url(server.uri())).unwrap()
}

async fn mount(server: &MockServer, bearer: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/user/info"))
        .and(header("Authorization", format!("Bearer {}", bearer).as_str()))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_success_with_id_is_valid() {
    let server = MockServer::start().await;
    mount(
        &server,
        "sk-AAA",
        ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "u1"}})),
    )
    .await;

    let validator = Validator::new(client_for(&server));
    let results = validator.check_all(&[key("sk-AAA")]).await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key.expose(), "sk-AAA");
    assert!(results[0].is_valid);
}

#[tokio::test]
async fn test_unauthorized_is_invalid() {
    let server = MockServer::start().await;
    mount(
        &server,
        "sk-BBB",
        ResponseTemplate::new(401)
            .set_body_json(json!({"code": 401, "message": "Invalid token"})),
    )
    .await;

    let client = client_for(&server);
    assert_eq!(
        client.check_key(&key("sk-BBB")).await,
        Err(ProbeError::Status(401))
    );

    let results = Validator::new(client).check_all(&[key("sk-BBB")]).await;
    assert!(!results[0].is_valid);
}

#[tokio::test]
async fn test_success_without_id_is_invalid() {
    let server = MockServer::start().await;
    mount(
        &server,
        "sk-CCC",
        ResponseTemplate::new(200).set_body_json(json!({"data": {}})),
    )
    .await;

    let client = client_for(&server);
    assert_eq!(
        client.check_key(&key("sk-CCC")).await,
        Err(ProbeError::MissingId)
    );
}

#[tokio::test]
async fn test_success_with_empty_or_missing_data_is_invalid() {
    let server = MockServer::start().await;
    mount(
        &server,
        "sk-empty-id",
        ResponseTemplate::new(200).set_body_json(json!({"data": {"id": ""}})),
    )
    .await;
    mount(
        &server,
        "sk-no-data",
        ResponseTemplate::new(200).set_body_json(json!({"status": true})),
    )
    .await;

    let client = client_for(&server);
    assert_eq!(
        client.check_key(&key("sk-empty-id")).await,
        Err(ProbeError::MissingId)
    );
    assert_eq!(
        client.check_key(&key("sk-no-data")).await,
        Err(ProbeError::MissingId)
    );
}

#[tokio::test]
async fn test_malformed_body_is_invalid() {
    let server = MockServer::start().await;
    mount(
        &server,
        "sk-html",
        ResponseTemplate::new(200).set_body_string("<html>gateway</html>"),
    )
    .await;

    let client = client_for(&server);
    assert!(matches!(
        client.check_key(&key("sk-html")).await,
        Err(ProbeError::Parse(_))
    ));
}

#[tokio::test]
async fn test_network_failure_is_invalid() {
    let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
    let client = SiliconFlowClient::new(config).unwrap();

    assert!(matches!(
        client.check_key(&key("sk-DDD")).await,
        Err(ProbeError::Network(_))
    ));

    let results = Validator::new(client).check_all(&[key("sk-DDD")]).await;
    assert_eq!(results.len(), 1);
    assert!(!results[0].is_valid);
}

#[tokio::test]
async fn test_one_request_per_key_with_bearer_header() {
    let server = MockServer::start().await;
    for bearer in ["sk-1", "sk-2", "sk-3"] {
        Mock::given(method("GET"))
            .and(path("/v1/user/info"))
            .and(header("Authorization", format!("Bearer {}", bearer).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": bearer}})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let validator = Validator::new(client_for(&server));
    let results = validator
        .check_all(&[key("sk-1"), key("sk-2"), key("sk-3")])
        .await;
    assert!(results.iter().all(|r| r.is_valid));
    server.verify().await;
}
