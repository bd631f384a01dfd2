//! Router-level tests for the people/record resource families:
//! users, employees, documents, attendance, leaves, payroll, performance.
//!
//! Each test drives the fully assembled router through `tower::ServiceExt`,
//! the same way a real client would over HTTP.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hr_server::api::build_router;
use hr_server::core::{Config, ServerState};
use hr_server::db::Store;

fn app() -> Router {
    let config = Config {
        http_port: 0,
        environment: "test".to_string(),
        log_level: "info".to_string(),
        log_dir: None,
        seed_sample_data: false,
    };
    build_router(ServerState::new(config, Store::new()))
}

async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn user_payload(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "password": "secret",
        "email": email,
        "firstName": "Test",
        "lastName": "User",
    })
}

// ── Users ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_user_create_get_round_trip() {
    let app = app();

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/users",
        Some(user_payload("ana", "ana@company.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["username"], "ana");
    // Omitted role falls back to the default
    assert_eq!(created["role"], "employee");
    assert!(created["createdAt"].is_string());

    let (status, fetched) = request(&app, Method::GET, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, list) = request(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_user_free_text_role_is_accepted() {
    // role is plain text, not an enum — unusual values must pass
    let app = app();
    let mut payload = user_payload("bob", "bob@company.com");
    payload["role"] = json!("chief_vibes_officer");

    let (status, created) = request(&app, Method::POST, "/api/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["role"], "chief_vibes_officer");
}

#[tokio::test]
async fn test_user_missing_field_is_rejected() {
    let app = app();
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"username": "ana", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_user_constraint_violations_are_aggregated() {
    let app = app();
    let mut payload = user_payload("", "not-an-email");
    payload["role"] = json!("employee");

    let (status, body) = request(&app, Method::POST, "/api/users", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("username"));
    assert!(message.contains("email"));
}

#[tokio::test]
async fn test_user_partial_update_preserves_fields() {
    let app = app();
    request(
        &app,
        Method::POST,
        "/api/users",
        Some(user_payload("ana", "ana@company.com")),
    )
    .await;

    let (status, updated) = request(
        &app,
        Method::PUT,
        "/api/users/1",
        Some(json!({"email": "ana.new@company.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["email"], "ana.new@company.com");
    assert_eq!(updated["username"], "ana");
    assert_eq!(updated["firstName"], "Test");
}

#[tokio::test]
async fn test_user_not_found_messages() {
    let app = app();

    let (status, body) = request(&app, Method::GET, "/api/users/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, _) = request(
        &app,
        Method::PUT,
        "/api/users/99",
        Some(json!({"role": "hr"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Employees ───────────────────────────────────────────────────────

fn employee_payload() -> Value {
    json!({
        "userId": 1,
        "employeeId": "EMP-100",
        "hireDate": "2024-01-01",
        "department": "hr",
        "position": "Recruiter",
        "employmentType": "full_time",
    })
}

#[tokio::test]
async fn test_employee_create_echoes_department() {
    let app = app();
    let (status, created) = request(
        &app,
        Method::POST,
        "/api/employees",
        Some(employee_payload()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["department"], "hr");
    assert_eq!(created["employmentType"], "full_time");
    assert_eq!(created["manager"], Value::Null);
}

#[tokio::test]
async fn test_employee_invalid_enum_is_rejected() {
    let app = app();
    let mut payload = employee_payload();
    payload["department"] = json!("astronomy");

    let (status, body) = request(&app, Method::POST, "/api/employees", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_employee_update_merges_fields() {
    let app = app();
    request(
        &app,
        Method::POST,
        "/api/employees",
        Some(employee_payload()),
    )
    .await;

    let (status, updated) = request(
        &app,
        Method::PUT,
        "/api/employees/1",
        Some(json!({"department": "finance", "manager": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["department"], "finance");
    assert_eq!(updated["manager"], 3);
    assert_eq!(updated["position"], "Recruiter");

    let (status, body) = request(&app, Method::GET, "/api/employees/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");
}

// ── Documents ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_document_delete_returns_204_then_404() {
    let app = app();
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/documents",
        Some(json!({
            "employeeId": 1,
            "name": "Contract",
            "type": "contract",
            "path": "/files/contract.pdf",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = request(&app, Method::DELETE, "/api/documents/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = request(&app, Method::DELETE, "/api/documents/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Document not found");
}

#[tokio::test]
async fn test_documents_listed_under_owning_employee() {
    let app = app();
    for (employee_id, name) in [(1, "Contract"), (2, "Visa"), (1, "NDA")] {
        request(
            &app,
            Method::POST,
            "/api/documents",
            Some(json!({
                "employeeId": employee_id,
                "name": name,
                "type": "misc",
                "path": "/files/x.pdf",
            })),
        )
        .await;
    }

    let (status, docs) = request(&app, Method::GET, "/api/employees/1/documents", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = docs
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Contract", "NDA"]);
}

// ── Attendance ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_attendance_checkout_added_by_partial_update() {
    let app = app();
    let (status, created) = request(
        &app,
        Method::POST,
        "/api/attendance",
        Some(json!({
            "employeeId": 1,
            "date": "2024-05-02",
            "checkIn": "2024-05-02T09:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    // Omitted status falls back to the default
    assert_eq!(created["status"], "present");
    assert_eq!(created["checkOut"], Value::Null);

    let (status, updated) = request(
        &app,
        Method::PUT,
        "/api/attendance/1",
        Some(json!({"checkOut": "2024-05-02T17:30:00Z"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["checkIn"], "2024-05-02T09:00:00Z");
    assert_eq!(updated["checkOut"], "2024-05-02T17:30:00Z");

    let (status, body) = request(
        &app,
        Method::PUT,
        "/api/attendance/9",
        Some(json!({"status": "late"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Attendance record not found");
}

// ── Leaves ──────────────────────────────────────────────────────────

fn leave_payload() -> Value {
    json!({
        "employeeId": 1,
        "startDate": "2024-06-01",
        "endDate": "2024-06-05",
        "type": "annual",
        "reason": "Summer break",
    })
}

#[tokio::test]
async fn test_leave_created_pending_then_approved() {
    let app = app();
    let (status, created) =
        request(&app, Method::POST, "/api/leaves", Some(leave_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["type"], "annual");
    assert!(created["createdAt"].is_string());
    assert!(created["updatedAt"].is_string());

    let (status, approved) = request(
        &app,
        Method::PUT,
        "/api/leaves/1/status",
        Some(json!({"status": "approved", "approvedBy": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");
    assert_eq!(approved["approvedBy"], 2);
}

#[tokio::test]
async fn test_leave_status_rejects_unknown_value() {
    let app = app();
    request(&app, Method::POST, "/api/leaves", Some(leave_payload())).await;

    let (status, _) = request(
        &app,
        Method::PUT,
        "/api/leaves/1/status",
        Some(json!({"status": "maybe"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_leave_status_on_missing_id_is_404() {
    let app = app();
    let (status, body) = request(
        &app,
        Method::PUT,
        "/api/leaves/99/status",
        Some(json!({"status": "approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Leave request not found");
}

// ── Payroll ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_payroll_defaults_and_update() {
    let app = app();
    let (status, created) = request(
        &app,
        Method::POST,
        "/api/payroll",
        Some(json!({
            "employeeId": 1,
            "period": "2024-05",
            "baseSalary": 5000,
            "netSalary": 5000,
            "paymentDate": "2024-05-31",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    // Money fields serialize as decimal strings; omitted ones default to 0
    assert_eq!(created["bonus"], "0");
    assert_eq!(created["deductions"], "0");
    assert_eq!(created["status"], "pending");

    let (status, updated) = request(
        &app,
        Method::PUT,
        "/api/payroll/1",
        Some(json!({"status": "paid"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "paid");
    assert_eq!(updated["period"], "2024-05");

    let (status, body) = request(
        &app,
        Method::PUT,
        "/api/payroll/7",
        Some(json!({"status": "paid"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Payroll record not found");
}

// ── Performance ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_performance_review_lifecycle() {
    let app = app();
    let (status, created) = request(
        &app,
        Method::POST,
        "/api/performance",
        Some(json!({
            "employeeId": 1,
            "reviewerId": 2,
            "period": "2024-H1",
            "reviewDate": "2024-06-30",
            "goals": "Ship the portal",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["rating"], Value::Null);

    let (status, updated) = request(
        &app,
        Method::PUT,
        "/api/performance/1",
        Some(json!({"rating": 4.5, "comments": "Strong half"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rating"], "4.5");
    assert_eq!(updated["goals"], "Ship the portal");

    let (status, body) = request(&app, Method::GET, "/api/performance/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Performance record not found");
}

// ── Nested listings ─────────────────────────────────────────────────

#[tokio::test]
async fn test_employee_nested_listings_filter_by_owner() {
    let app = app();
    for employee_id in [1, 1, 2] {
        request(
            &app,
            Method::POST,
            "/api/leaves",
            Some(json!({
                "employeeId": employee_id,
                "startDate": "2024-06-01",
                "endDate": "2024-06-02",
                "type": "sick",
            })),
        )
        .await;
    }

    let (status, leaves) = request(&app, Method::GET, "/api/employees/1/leaves", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(leaves.as_array().unwrap().len(), 2);

    // Unknown owner yields an empty list, not an error
    let (status, leaves) = request(&app, Method::GET, "/api/employees/9/leaves", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(leaves.as_array().unwrap().len(), 0);
}
