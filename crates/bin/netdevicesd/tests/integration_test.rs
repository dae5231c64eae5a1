//! End-to-end smoke tests for the full netdevicesd stack.
//!
//! Each test spins up the complete application (real in-memory repository,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`: no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use netdevices_adapter_http_axum::router;
use netdevices_adapter_http_axum::state::AppState;
use netdevices_adapter_storage_memory::InMemoryDeviceRepository;
use netdevices_app::services::device_service::DeviceService;
use netdevices_domain::device::Device;
use tower::ServiceExt;

type Service = Arc<DeviceService<InMemoryDeviceRepository>>;

/// Build a fully-wired router plus a handle on its service for seeding.
fn app() -> (axum::Router, Service) {
    let service = Arc::new(DeviceService::new(InMemoryDeviceRepository::new()));
    let state = AppState::from_arc(Arc::clone(&service));
    (router::build(state), service)
}

/// Store `count` devices named `host-{i}.domain.com.` directly.
async fn add_devices(service: &Service, count: usize) -> Vec<Device> {
    let mut devices = Vec::with_capacity(count);
    for i in 0..count.max(1) {
        let device = Device {
            fqdn: format!("host-{i}.domain.com."),
            model: "ios-xe".to_string(),
            version: format!("v1.{i}"),
        };
        service.create_device(device.clone()).await.unwrap();
        devices.push(device);
    }
    devices
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(resp: axum::response::Response) -> Vec<u8> {
    resp.into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _) = app();
    let resp = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_empty_array_when_store_empty() {
    let (app, _) = app();
    let resp = app.oneshot(get("/devices")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, b"[]");
}

#[tokio::test]
async fn should_list_every_stored_device_presented() {
    let (app, service) = app();
    add_devices(&service, 3).await;
    service
        .create_device(Device {
            fqdn: "bare.domain.com.".to_string(),
            model: "nx-os".to_string(),
            version: String::new(),
        })
        .await
        .unwrap();

    let resp = app.oneshot(get("/devices")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<serde_json::Value> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body.len(), 4);
    let bare = body
        .iter()
        .find(|d| d["fqdn"] == "bare.domain.com.")
        .unwrap();
    assert_eq!(bare["version"], "unknown");
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_non_existent_device() {
    let (app, _) = app();
    let resp = app
        .oneshot(get("/devices/non-existent.domain.com."))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "Device not found");
}

#[tokio::test]
async fn should_return_existing_device() {
    let (app, service) = app();
    service
        .create_device(Device {
            fqdn: "host-1234.domain.com.".to_string(),
            model: "ios-xe".to_string(),
            version: "11.2DS".to_string(),
        })
        .await
        .unwrap();

    let resp = app
        .oneshot(get("/devices/host-1234.domain.com."))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"fqdn": "host-1234.domain.com.", "model": "ios-xe", "version": "11.2DS"})
    );
}

#[tokio::test]
async fn should_present_unknown_version_without_persisting_it() {
    let (app, service) = app();
    service
        .create_device(Device {
            fqdn: "host-1234.domain.com.".to_string(),
            model: "ios-xe".to_string(),
            version: String::new(),
        })
        .await
        .unwrap();

    let resp = app
        .oneshot(get("/devices/host-1234.domain.com."))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["version"], "unknown");

    let stored = service.get_device("host-1234.domain.com.").await.unwrap();
    assert!(stored.version.is_empty());
}

#[tokio::test]
async fn should_find_device_regardless_of_case() {
    let (app, service) = app();
    add_devices(&service, 1).await;

    let resp = app
        .oneshot(get("/devices/HOST-0.Domain.COM."))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["fqdn"], "host-0.domain.com.");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_device_and_echo_it() {
    let (app, _) = app();
    let resp = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/devices",
            r#"{"fqdn":"test.domain.com.", "model": "ios-xe", "version": "1.2"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = body_json(resp).await;
    assert_eq!(body["fqdn"], "test.domain.com.");
    assert_eq!(body["model"], "ios-xe");
    assert_eq!(body["version"], "1.2");

    let resp = app.oneshot(get("/devices/test.domain.com.")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn should_store_device_posted_without_content_type() {
    let (app, service) = app();
    let request = Request::builder()
        .method("POST")
        .uri("/devices")
        .body(Body::from(
            r#"{"fqdn":"test.domain.com.","model":"ios-xe","version":"1.2"}"#,
        ))
        .unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let stored = service.get_device("test.domain.com.").await.unwrap();
    assert_eq!(stored.version, "1.2");
}

#[tokio::test]
async fn should_store_device_sent_with_capitalised_keys() {
    let (app, service) = app();
    let resp = app
        .oneshot(with_json(
            "POST",
            "/devices",
            r#"{"FQDN":"edge.domain.com.","Model":"nx-os"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let stored = service.get_device("edge.domain.com.").await.unwrap();
    assert_eq!(stored.model, "nx-os");
}

#[tokio::test]
async fn should_answer_create_requests_with_expected_status() {
    let cases = [
        (
            "correct device",
            r#"{"fqdn":"test.domain.com.", "model": "ios-xe", "version": "1.2"}"#,
            StatusCode::CREATED,
        ),
        (
            "correct device without version",
            r#"{"fqdn":"test.domain.com.", "model": "ios-xe"}"#,
            StatusCode::CREATED,
        ),
        (
            "invalid model",
            r#"{"fqdn":"test.domain.com.", "model": "invalid", "version": "1.2"}"#,
            StatusCode::BAD_REQUEST,
        ),
        (
            "empty fqdn",
            r#"{"fqdn":"", "model": "ios-xe", "version": "1.2"}"#,
            StatusCode::BAD_REQUEST,
        ),
        ("not json", "fqdn=test.domain.com.", StatusCode::BAD_REQUEST),
    ];

    for (name, input, want) in cases {
        let (app, _) = app();
        let resp = app
            .oneshot(with_json("POST", "/devices", input))
            .await
            .unwrap();
        assert_eq!(resp.status(), want, "case: {name}");
    }
}

#[tokio::test]
async fn should_not_store_rejected_device() {
    let (app, service) = app();
    let resp = app
        .oneshot(with_json(
            "POST",
            "/devices",
            r#"{"fqdn":"bad.domain.com.", "model": "invalid"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(service.list_devices().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_update_existing_device() {
    let (app, service) = app();
    add_devices(&service, 1).await;

    let resp = app
        .clone()
        .oneshot(get("/devices/host-0.domain.com."))
        .await
        .unwrap();
    let original = body_json(resp).await;

    let resp = app
        .oneshot(with_json(
            "PUT",
            "/devices",
            r#"{"fqdn":"host-0.domain.com.", "model": "nx-os", "version": "1.2"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["fqdn"], original["fqdn"]);
    assert_ne!(updated["model"], original["model"]);
    assert_eq!(updated["model"], "nx-os");
    assert_ne!(updated["version"], original["version"]);
    assert_eq!(updated["version"], "1.2");
}

#[tokio::test]
async fn should_create_when_updating_unknown_device() {
    let (app, service) = app();
    let resp = app
        .oneshot(with_json(
            "PUT",
            "/devices",
            r#"{"fqdn":"fresh.domain.com.", "model": "ios-xr"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["version"], "unknown");
    assert_eq!(service.list_devices().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_invalid_update() {
    let (app, service) = app();
    add_devices(&service, 1).await;

    let resp = app
        .oneshot(with_json(
            "PUT",
            "/devices",
            r#"{"fqdn":"host-0.domain.com.", "model": "os-nx"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let stored = service.get_device("host-0.domain.com.").await.unwrap();
    assert_eq!(stored.model, "ios-xe");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_delete_device() {
    let (app, service) = app();
    add_devices(&service, 1).await;

    let resp = app
        .clone()
        .oneshot(get("/devices/host-0.domain.com."))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(delete("/devices/host-0.domain.com."))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({"result": "success"}));

    let resp = app
        .oneshot(get("/devices/host-0.domain.com."))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_succeed_when_deleting_absent_device_twice() {
    let (app, _) = app();
    for _ in 0..2 {
        let resp = app
            .clone()
            .oneshot(delete("/devices/ghost.domain.com."))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

// ---------------------------------------------------------------------------
// Full cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_device_crud_cycle() {
    let (app, _) = app();

    let resp = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/devices",
            r#"{"fqdn":"Edge-1.Domain.com.","model":"ios-xr","version":"7.5"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(with_json(
            "PUT",
            "/devices",
            r#"{"fqdn":"edge-1.domain.com.","model":"ios-xr","version":"7.9"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.clone().oneshot(get("/devices")).await.unwrap();
    let body: Vec<serde_json::Value> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["version"], "7.9");

    let resp = app
        .clone()
        .oneshot(delete("/devices/EDGE-1.domain.com."))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/devices")).await.unwrap();
    assert_eq!(body_bytes(resp).await, b"[]");
}
