//! Drives the full router over in-memory stores.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use estate_api::{build_router, AppState};
use estate_core::repositories::RepositorySet;
use estate_shared::config::BillingSettings;

fn app() -> Router {
    let billing = BillingSettings {
        default_daily_penalty_rate: 1_000,
    };
    build_router(AppState::new(RepositorySet::in_memory(), &billing))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn seed_building(app: &Router) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/buildings",
        Some(json!({
            "name": "Harbour View",
            "address": "Jl. Pantai 1",
            "city": "Surabaya",
            "floor_count": 15
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["data"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _) = send(&app, Method::GET, "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_crud_round_trip_with_envelope() {
    let app = app();
    let building_id = seed_building(&app).await;

    let (status, body) = send(&app, Method::GET, &format!("/api/buildings/{}", building_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Building retrieved");
    assert_eq!(body["data"]["city"], "Surabaya");
    assert!(body["data"]["manager_user_id"].is_null());

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/buildings/{}", building_id),
        Some(json!({
            "name": "Harbour View II",
            "address": "Jl. Pantai 1",
            "city": "Surabaya",
            "floor_count": 16
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["floor_count"], 16);

    let (status, body) = send(&app, Method::GET, "/api/buildings?city=Surabaya", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/buildings/{}", building_id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, &format!("/api/buildings/{}", building_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], format!("Building not found: {}", building_id));
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_validation_failures_are_bad_requests() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({
            "full_name": "A",
            "email": "not-an-email",
            "phone": "123",
            "role": "owner"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Validation error: email: Invalid email address; full_name: Full name must be between 2 and 100 characters; phone: Phone must be 8 to 15 digits"
    );

    let (status, _) = send(&app, Method::GET, "/api/apartments?owner=1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/apartments?floor=first", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_apartment_and_tenant_routes() {
    let app = app();
    let building_id = seed_building(&app).await;

    for (number, occupied) in [("101", true), ("102", false)] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/apartments",
            Some(json!({
                "building_id": building_id,
                "number": number,
                "floor": 1,
                "room_count": 2,
                "area_sqm": 48.5,
                "is_occupied": occupied,
                "monthly_dues": 300000
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
    }

    let (_, body) = send(&app, Method::GET, &format!("/api/buildings/{}/apartments", building_id), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, &format!("/api/apartments/vacant?building_id={}", building_id), None).await;
    assert_eq!(body["data"][0]["number"], "102");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/tenants",
        Some(json!({ "user_id": 1, "apartment_id": 1, "moved_in_on": "2024-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let tenant_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/tenants/{}/move-out?date=2024-06-30", tenant_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["moved_out_on"], "2024-06-30");

    let (_, body) = send(&app, Method::GET, "/api/apartments/vacant", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/tenants/{}/move-out?date=2024-07-01", tenant_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_payment_routes() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/payments",
        Some(json!({
            "apartment_id": 1,
            "kind": "dues",
            "amount": 250000,
            "due_date": "2024-03-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["daily_penalty_rate"], 1000);
    let id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = send(&app, Method::GET, "/api/payments/overdue?date=2024-03-15", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, &format!("/api/payments/{}/penalty?date=2024-03-15", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["days_overdue"], 5);
    assert_eq!(body["data"]["penalty"], 5000);
    assert_eq!(body["data"]["total_due"], 255000);

    let (status, body) = send(&app, Method::POST, &format!("/api/payments/{}/pay?date=2024-03-12", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["paid_on"], "2024-03-12");

    let (_, body) = send(&app, Method::GET, "/api/payments/overdue?date=2024-03-15", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::GET, "/api/payments/99/penalty", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contract_complaint_and_notification_routes() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/contracts",
        Some(json!({
            "apartment_id": 1, "owner_id": 1, "tenant_id": 1,
            "start_date": "2024-01-01", "end_date": "2024-12-31",
            "monthly_rent": 5000000, "deposit": 10000000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, Method::GET, "/api/contracts/active?date=2024-05-01", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::POST, "/api/contracts/1/terminate?date=2024-05-31", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["end_date"], "2024-05-31");
    assert_eq!(body["data"]["is_active"], false);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/complaints",
        Some(json!({
            "apartment_id": 1, "user_id": 1,
            "title": "Elevator stuck", "description": "Stops between floors 4 and 5"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/api/complaints/1/resolve", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "resolved");
    let (status, _) = send(&app, Method::POST, "/api/complaints/1/resolve", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _) = send(
        &app,
        Method::POST,
        "/api/notifications",
        Some(json!({ "building_id": 1, "title": "Lift service", "message": "Lift B is off on Monday" })),
    )
    .await;
    let (status, body) = send(&app, Method::POST, "/api/notifications/1/read", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_read"], true);

    let (_, body) = send(&app, Method::GET, "/api/notifications?is_read=false", None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upcoming_meetings_route() {
    let app = app();
    for (title, at) in [("AGM", "2030-05-20T19:00:00Z"), ("Old", "2020-01-01T10:00:00Z")] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/meetings",
            Some(json!({ "building_id": 4, "title": title, "scheduled_at": at, "location": "Hall" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
    }
    let (status, body) = send(&app, Method::GET, "/api/buildings/4/meetings/upcoming", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = body["data"].as_array().unwrap().iter().map(|m| m["title"].clone()).collect();
    assert_eq!(titles, vec![json!("AGM")]);
}

async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).expect("response body is JSON");
    (status, value)
}

fn assert_failure_envelope(body: &Value) {
    assert_eq!(body["success"], false, "{}", body);
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()), "{}", body);
    assert!(body["data"].is_null(), "{}", body);
}

#[tokio::test]
async fn test_undecodable_requests_get_the_envelope() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/buildings/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure_envelope(&body);

    let (status, body) = send(&app, Method::GET, "/api/payments/overdue?date=notadate", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure_envelope(&body);

    let (status, body) = send_raw(&app, Method::POST, "/api/buildings", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_failure_envelope(&body);

    let (status, body) = send_raw(&app, Method::POST, "/api/buildings", r#"{"name":"Only a name"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_failure_envelope(&body);
}

#[tokio::test]
async fn test_duplicate_email_and_repeated_termination_are_rejected() {
    let app = app();
    let user = json!({
        "full_name": "Rina Marlina",
        "email": "rina@example.com",
        "phone": "081234567890",
        "role": "tenant"
    });
    let (status, _) = send(&app, Method::POST, "/api/users", Some(user.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, Method::POST, "/api/users", Some(user)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Conflict: User already exists");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/contracts",
        Some(json!({
            "apartment_id": 1, "owner_id": 1, "tenant_id": 1,
            "start_date": "2024-03-01", "end_date": "2025-02-28",
            "monthly_rent": 5000000, "deposit": 10000000
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::POST, "/api/contracts/1/terminate?date=2024-03-01", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = send(&app, Method::POST, "/api/contracts/1/terminate?date=2024-08-31", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, Method::POST, "/api/contracts/1/terminate?date=2024-09-30", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Validation error: Contract 1 is already terminated");
}
