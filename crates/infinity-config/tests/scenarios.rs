//! End-to-end resource operations against a mock management API.

use std::time::Duration;

use infinity_config::models::*;
use infinity_config::{ConfigService, Created};
use infinity_core::{BaseUrl, Context, Credentials, Error, ListOptions, Nullable};
use infinity_http::HttpClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> ConfigService {
    let base = BaseUrl::new(format!("{}/api/admin/", server.uri())).unwrap();
    let client = HttpClient::builder(base)
        .basic_auth(Credentials::new("admin", "secret"))
        .build()
        .unwrap();
    ConfigService::new(client)
}

fn dns_page() -> serde_json::Value {
    json!({
        "meta": {"limit": 20, "next": null, "offset": 0, "previous": null, "total_count": 1},
        "objects": [{"id": 1, "address": "8.8.8.8", "description": "Google DNS"}]
    })
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn list_without_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/dns_server/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dns_page()))
        .expect(1)
        .mount(&server)
        .await;

    let page = service(&server)
        .dns_servers()
        .list(&Context::background(), None)
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(
        page.objects[0],
        DnsServer {
            id: 1,
            address: "8.8.8.8".to_string(),
            description: "Google DNS".to_string(),
            ..Default::default()
        }
    );
    assert!(!page.meta.has_next());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn list_with_search_and_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/dns_server/"))
        .and(query_param("limit", "5"))
        .and(query_param("name__icontains", "google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dns_page()))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions::new().with_limit(5).with_search("google");
    let page = service(&server)
        .dns_servers()
        .list(&Context::background(), Some(&options))
        .await
        .unwrap();

    assert_eq!(page.objects.len(), 1);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=5&name__icontains=google"));
}

#[tokio::test]
async fn list_preserves_server_order_and_next_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/device/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "limit": 2,
                "next": "/api/admin/configuration/v1/device/?limit=2&offset=2",
                "offset": 0,
                "previous": "",
                "total_count": 3
            },
            "objects": [
                {"id": 9, "alias": "zeta"},
                {"id": 2, "alias": "alpha"}
            ]
        })))
        .mount(&server)
        .await;

    let options = ListOptions::new().with_limit(2);
    let page = service(&server)
        .devices()
        .list(&Context::background(), Some(&options))
        .await
        .unwrap();

    let ids: Vec<u64> = page.objects.iter().map(|device| device.id).collect();
    assert_eq!(ids, vec![9, 2]);

    let next = options.next_page(&page.meta).unwrap();
    assert_eq!(next.encode(), "limit=2&offset=2");
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn create_returning_location() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/configuration/v1/dns_server/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"address": "9.9.9.9", "description": "Quad9 DNS"})))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Location", "/api/admin/configuration/v1/dns_server/123/"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = service(&server)
        .dns_servers()
        .create(
            &Context::background(),
            &DnsServerCreate {
                address: "9.9.9.9".to_string(),
                description: Some("Quad9 DNS".to_string()),
            },
        )
        .await
        .unwrap();

    let location = created.location().unwrap();
    assert_eq!(location.as_str(), "/api/admin/configuration/v1/dns_server/123/");
    assert_eq!(location.id::<u64>(), Some(123));
}

#[tokio::test]
async fn create_returning_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/configuration/v1/ntp_server/"))
        .and(body_json(json!({"address": "pool.ntp.org"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 4,
            "address": "pool.ntp.org",
            "description": "",
            "resource_uri": "/api/admin/configuration/v1/ntp_server/4/"
        })))
        .mount(&server)
        .await;

    let created = service(&server)
        .ntp_servers()
        .create(
            &Context::background(),
            &NtpServerCreate {
                address: "pool.ntp.org".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let server_entry = created.into_entity().unwrap();
    assert_eq!(server_entry.id, 4);
    assert_eq!(server_entry.resource_uri, "/api/admin/configuration/v1/ntp_server/4/");
}

#[tokio::test]
async fn location_create_without_header_uses_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/configuration/v1/event_sink/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "name": "splunk",
            "url": "https://events.example.com/"
        })))
        .mount(&server)
        .await;

    let created = service(&server)
        .event_sinks()
        .create(
            &Context::background(),
            &EventSinkCreate {
                name: "splunk".to_string(),
                url: "https://events.example.com/".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    match created {
        Created::Body(sink) => assert_eq!(sink.id, 3),
        Created::Location(uri) => panic!("unexpected location {uri}"),
    }
}

#[tokio::test]
async fn location_create_without_header_or_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let err = service(&server)
        .dns_servers()
        .create(
            &Context::background(),
            &DnsServerCreate {
                address: "9.9.9.9".to_string(),
                description: None,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn tls_certificate_update_uses_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/admin/configuration/v1/tls_certificate/1/"))
        .and(body_json(json!({
            "private_key_passphrase": "newsecret",
            "nodes": ["management", "conferencing"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "nodes": ["management", "conferencing"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(405))
        .expect(0)
        .mount(&server)
        .await;

    let updated = service(&server)
        .tls_certificates()
        .update(
            &Context::background(),
            1,
            &TlsCertificateUpdate {
                private_key_passphrase: Some("newsecret".to_string()),
                nodes: Some(vec!["management".to_string(), "conferencing".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.nodes.len(), 2);
}

#[tokio::test]
async fn global_configuration_update() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/configuration/v1/global/1/"))
        .and(body_json(json!({
            "enable_webrtc": true,
            "enable_analytics": false,
            "administrator_email": "newemail@example.com",
            "guests_only_timeout": 600,
            "waiting_for_chair_timeout": 900
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "enable_webrtc": true,
            "enable_analytics": false,
            "administrator_email": "newemail@example.com",
            "guests_only_timeout": 600,
            "waiting_for_chair_timeout": 900
        })))
        .expect(1)
        .mount(&server)
        .await;

    let global = service(&server)
        .global()
        .update(
            &Context::background(),
            &GlobalConfigurationUpdate {
                enable_webrtc: true.into(),
                enable_analytics: false.into(),
                administrator_email: Some("newemail@example.com".to_string()),
                guests_only_timeout: Some(600),
                waiting_for_chair_timeout: Some(900),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(global.enable_webrtc, Some(true));
    assert_eq!(global.waiting_for_chair_timeout, 900);
}

#[tokio::test]
async fn global_configuration_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/global/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "enable_sip": true,
            "default_theme": null,
            "resource_uri": "/api/admin/configuration/v1/global/1/"
        })))
        .mount(&server)
        .await;

    let global = service(&server)
        .global()
        .get(&Context::background())
        .await
        .unwrap();

    assert_eq!(global.enable_sip, Some(true));
    assert!(global.default_theme.is_none());
}

#[tokio::test]
async fn device_update_three_state_boolean() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/configuration/v1/device/1/"))
        .and(body_json(json!({"description": "Updated", "enable_sip": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/configuration/v1/device/2/"))
        .and(body_json(json!({"description": "Updated", "enable_sip": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/configuration/v1/device/3/"))
        .and(body_json(json!({"description": "Updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server);
    let devices = service.devices();
    let ctx = Context::background();

    let mut update = DeviceUpdate {
        description: Some("Updated".to_string()),
        enable_sip: Nullable::Value(true),
        ..Default::default()
    };
    devices.update(&ctx, 1, &update).await.unwrap();

    update.enable_sip = Nullable::Null;
    devices.update(&ctx, 2, &update).await.unwrap();

    update.enable_sip = Nullable::Unset;
    devices.update_discard(&ctx, 3, &update).await.unwrap();
}

#[tokio::test]
async fn cleared_fields_read_back_as_none() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin/configuration/v1/device/1/"))
        .and(body_json(json!({"enable_sip": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "alias": "room-1",
            "enable_sip": null,
            "enable_h323": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/global/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "enable_webrtc": null,
            "enable_chat": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server);
    let ctx = Context::background();

    let update = DeviceUpdate {
        enable_sip: Nullable::Null,
        ..Default::default()
    };
    let device = service.devices().update(&ctx, 1, &update).await.unwrap();
    assert_eq!(device.enable_sip, None);
    assert_eq!(device.enable_h323, Some(true));

    let global = service.global().get(&ctx).await.unwrap();
    assert_eq!(global.enable_webrtc, None);
}

// ============================================================================
// Delete and deviations
// ============================================================================

#[tokio::test]
async fn delete_dns_server() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/configuration/v1/dns_server/1/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    service(&server)
        .dns_servers()
        .delete(&Context::background(), 1)
        .await
        .unwrap();
}

#[tokio::test]
async fn licence_is_string_keyed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/licence/FID-7781/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillment_id": "FID-7781",
            "entitlement_id": "ENT-1",
            "concurrent": 25
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin/configuration/v1/licence/FID-7781/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server);
    let ctx = Context::background();

    let licence = service
        .licences()
        .get(&ctx, "FID-7781".to_string())
        .await
        .unwrap();
    assert_eq!(licence.concurrent, 25);

    service
        .licences()
        .delete(&ctx, licence.fulfillment_id)
        .await
        .unwrap();
}

#[tokio::test]
async fn licence_id_stays_inside_its_path_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillment_id": "FID-1?limit=1&x="
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service(&server);
    let ctx = Context::background();

    service
        .licences()
        .get(&ctx, "FID-1?limit=1&x=".to_string())
        .await
        .unwrap();

    let err = service
        .licences()
        .delete(&ctx, "..".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.path(),
        "/api/admin/configuration/v1/licence/FID-1%3Flimit%3D1%26x%3D/"
    );
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn management_vm_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/configuration/v1/management_vm/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "mgr",
            "tls_certificate": "/api/admin/configuration/v1/tls_certificate/1/"
        })))
        .mount(&server)
        .await;

    let vm = service(&server)
        .management_vms()
        .get(&Context::background(), 1)
        .await
        .unwrap();

    assert_eq!(
        vm.tls_certificate.as_deref(),
        Some("/api/admin/configuration/v1/tls_certificate/1/")
    );
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn server_error_propagation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/configuration/v1/dns_server/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = service(&server)
        .dns_servers()
        .create(
            &Context::background(),
            &DnsServerCreate {
                address: String::new(),
                description: None,
            },
        )
        .await
        .unwrap_err();

    let server_err = err.as_server_error().unwrap();
    assert_eq!(server_err.status, 400);
    assert_eq!(server_err.endpoint, "configuration/v1/dns_server/");
    assert_eq!(server_err.json().unwrap(), json!({"error": "bad"}));
}

#[tokio::test]
async fn not_found_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string(""))
        .mount(&server)
        .await;

    let err = service(&server)
        .user_groups()
        .get(&Context::background(), 77)
        .await
        .unwrap_err();

    assert!(err.as_server_error().unwrap().is_not_found());
}

#[tokio::test]
async fn cancellation_beats_slow_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(dns_page())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let ctx = Context::background();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = service(&server)
        .dns_servers()
        .list(&ctx, None)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(!err.is_timeout());
}
