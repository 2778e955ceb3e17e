//! Transport tests against a mock management API.
//!
//! These tests use wiremock to simulate the server and check the exact
//! requests the transport issues and how it maps responses and failures.

use std::time::Duration;

use infinity_core::error::TransportError;
use infinity_core::{
    BaseUrl, BearerToken, Context, Credentials, Discard, Error, ListOptions, Transport,
};
use infinity_http::HttpClient;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DNS: &str = "configuration/v1/dns_server/";

/// Base URL under the mock server, shaped like a real deployment.
fn base_url(server: &MockServer) -> BaseUrl {
    BaseUrl::new(format!("{}/api/admin/", server.uri())).unwrap()
}

fn basic_client(server: &MockServer) -> HttpClient {
    HttpClient::builder(base_url(server))
        .basic_auth(Credentials::new("admin", "secret"))
        .build()
        .unwrap()
}

fn bearer_client(server: &MockServer, token: &str) -> HttpClient {
    HttpClient::builder(base_url(server))
        .bearer_token(BearerToken::new(token))
        .build()
        .unwrap()
}

// ============================================================================
// Request construction
// ============================================================================

#[tokio::test]
async fn test_get_sends_accept_and_basic_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/dns_server/1/"))
        .and(header("accept", "application/json"))
        .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "address": "8.8.8.8"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let value: Value = client
        .get_json(&Context::background(), "configuration/v1/dns_server/1/", "")
        .await
        .unwrap();

    assert_eq!(value["address"], "8.8.8.8");
}

#[tokio::test]
async fn test_get_appends_encoded_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/dns_server/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"limit": 5, "next": "", "offset": 0, "previous": "", "total_count": 0},
            "objects": []
        })))
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let query = ListOptions::new().with_limit(5).with_search("google").encode();
    let _: Discard = client
        .get_json(&Context::background(), DNS, &query)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("limit=5&name__icontains=google"));
}

#[tokio::test]
async fn test_get_without_query_has_no_question_mark() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let _: Discard = client
        .get_json(&Context::background(), DNS, "")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert!(!requests[0].url.as_str().ends_with('?'));
}

#[tokio::test]
async fn test_post_sends_json_body_with_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/configuration/v1/ntp_server/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"address": "pool.ntp.org"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 4,
            "address": "pool.ntp.org",
            "resource_uri": "/api/admin/configuration/v1/ntp_server/4/"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let created: Value = client
        .post_json(
            &Context::background(),
            "configuration/v1/ntp_server/",
            &json!({"address": "pool.ntp.org"}),
        )
        .await
        .unwrap();

    assert_eq!(created["id"], 4);
}

#[tokio::test]
async fn test_bearer_token_is_sent_and_replaceable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer first-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"n": 1})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(header("authorization", "Bearer second-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"n": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = bearer_client(&server, "first-token");
    let ctx = Context::background();

    let first: Value = client.get_json(&ctx, DNS, "").await.unwrap();
    client
        .set_bearer_token(BearerToken::new("second-token"))
        .await
        .unwrap();
    let second: Value = client.get_json(&ctx, DNS, "").await.unwrap();

    assert_eq!(first["n"], 1);
    assert_eq!(second["n"], 2);
}

// ============================================================================
// Create responses
// ============================================================================

#[tokio::test]
async fn test_post_with_location_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/configuration/v1/dns_server/"))
        .and(body_json(json!({"address": "9.9.9.9", "description": "Quad9 DNS"})))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Location", "/api/admin/configuration/v1/dns_server/123/"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let response = client
        .post_with_location(
            &Context::background(),
            DNS,
            &json!({"address": "9.9.9.9", "description": "Quad9 DNS"}),
        )
        .await
        .unwrap();

    let location = response.location.unwrap();
    assert_eq!(location.as_str(), "/api/admin/configuration/v1/dns_server/123/");
    assert_eq!(location.id::<u64>(), Some(123));
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_post_with_absolute_location_keeps_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).insert_header(
            "Location",
            "https://infinity.example.com/api/admin/configuration/v1/dns_server/77/",
        ))
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let response = client
        .post_with_location(&Context::background(), DNS, &json!({"address": "1.1.1.1"}))
        .await
        .unwrap();

    assert_eq!(
        response.location.unwrap().as_str(),
        "/api/admin/configuration/v1/dns_server/77/"
    );
}

#[tokio::test]
async fn test_post_with_location_falls_back_to_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "address": "1.0.0.1"
        })))
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let response = client
        .post_with_location(&Context::background(), DNS, &json!({"address": "1.0.0.1"}))
        .await
        .unwrap();

    assert!(response.location.is_none());
    let body: Value = response.decode().unwrap().unwrap();
    assert_eq!(body["id"], 5);
}

// ============================================================================
// Update and delete
// ============================================================================

#[tokio::test]
async fn test_put_and_patch_use_their_methods() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/configuration/v1/device/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/api/admin/configuration/v1/tls_certificate/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let ctx = Context::background();

    let _: Discard = client
        .put_json(&ctx, "configuration/v1/device/1/", &json!({"description": "x"}))
        .await
        .unwrap();
    let _: Discard = client
        .patch_json(&ctx, "configuration/v1/tls_certificate/1/", &json!({"nodes": []}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/configuration/v1/dns_server/1/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = basic_client(&server);
    client
        .delete_json(&Context::background(), "configuration/v1/dns_server/1/")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_ignores_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .mount(&server)
        .await;

    let client = basic_client(&server);
    client
        .delete_json(&Context::background(), "configuration/v1/dns_server/1/")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_discard_on_non_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "x"})))
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let result: Result<Discard, _> = client
        .put_json(&Context::background(), "configuration/v1/global/1/", &json!({}))
        .await;
    assert!(result.is_ok());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_server_error_carries_request_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad"})))
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let err = client
        .post_with_location(&Context::background(), DNS, &json!({"address": ""}))
        .await
        .unwrap_err();

    let server_err = err.as_server_error().expect("server error");
    assert_eq!(server_err.status, 400);
    assert_eq!(server_err.method, "POST");
    assert_eq!(server_err.endpoint, DNS);
    assert_eq!(server_err.json().unwrap(), json!({"error": "bad"}));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let err = client
        .get_json::<Value>(&Context::background(), DNS, "")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("500"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_error_body_is_capped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("x".repeat(10_000)))
        .mount(&server)
        .await;

    let client = HttpClient::builder(base_url(&server))
        .basic_auth(Credentials::new("admin", "secret"))
        .max_error_body(16)
        .build()
        .unwrap();

    let err = client
        .get_json::<Value>(&Context::background(), DNS, "")
        .await
        .unwrap_err();

    assert_eq!(err.as_server_error().unwrap().body.len(), 16);
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>maintenance</html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let err = client
        .get_json::<Value>(&Context::background(), DNS, "")
        .await
        .unwrap_err();

    match err {
        Error::Decode(decode) => assert_eq!(decode.body, "<html>maintenance</html>"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = HttpClient::builder(BaseUrl::new(format!("http://127.0.0.1:{port}/api/admin/")).unwrap())
        .basic_auth(Credentials::new("admin", "secret"))
        .build()
        .unwrap();

    let err = client
        .get_json::<Value>(&Context::background(), DNS, "")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Transport(TransportError::Connect { .. })
    ));
}

// ============================================================================
// Cancellation and timeouts
// ============================================================================

#[tokio::test]
async fn test_cancelled_context_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let ctx = Context::background();
    ctx.cancel();

    let err = client.get_json::<Value>(&ctx, DNS, "").await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_cancel_while_in_flight() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let ctx = Context::background();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = client.get_json::<Value>(&ctx, DNS, "").await.unwrap_err();
    assert!(err.is_cancelled(), "expected Cancelled, got {err:?}");
}

#[tokio::test]
async fn test_client_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = HttpClient::builder(base_url(&server))
        .basic_auth(Credentials::new("admin", "secret"))
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client
        .get_json::<Value>(&Context::background(), DNS, "")
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "expected Timeout, got {err:?}");
}

#[tokio::test]
async fn test_context_deadline_tightens_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let ctx = Context::background().with_timeout(Duration::from_millis(100));

    let started = std::time::Instant::now();
    let err = client.get_json::<Value>(&ctx, DNS, "").await.unwrap_err();
    assert!(err.is_timeout());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_expired_deadline_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = basic_client(&server);
    let ctx = Context::background().with_timeout(Duration::ZERO);

    let err = client.get_json::<Value>(&ctx, DNS, "").await.unwrap_err();
    assert!(err.is_timeout());
}
