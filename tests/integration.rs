//! Integration tests for the Attendance Engine.
//!
//! This test suite drives the engine and its HTTP router end to end:
//! - Daily compilation precedence and idempotence
//! - History extraction over the trailing window
//! - Metrics, anomalies and leave abuse
//! - Absenteeism risk and performer lists
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::AnalyticsConfig;
use attendance_engine::engine::AttendanceEngine;
use attendance_engine::models::{
    DailyStatus, Employee, LeaveRequest, LeaveStatus, OfficeHoliday, RawAttendanceFact, RiskLevel,
};
use attendance_engine::store::{AttendanceStore, FixedClock, InMemoryStore};

// =============================================================================
// Test Helpers
// =============================================================================

/// 2026-06-15 is a Monday.
const TODAY: &str = "2026-06-15";

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn today() -> NaiveDate {
    date(TODAY)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn days_ago(n: i64) -> NaiveDate {
    today() - Duration::days(n)
}

fn checked_in(employee_id: &str, day: NaiveDate, hour: u32, hours: &str) -> RawAttendanceFact {
    RawAttendanceFact::present(employee_id, day.and_hms_opt(hour, 0, 0).unwrap(), decimal(hours))
}

fn approved_leave(employee_id: &str, start: NaiveDate, days: i64) -> LeaveRequest {
    LeaveRequest {
        employee_id: employee_id.to_string(),
        start_date: start,
        end_date: start + Duration::days(days - 1),
        status: LeaveStatus::Approved,
    }
}

fn create_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    for employee in [
        Employee::new("EMP001", "Asha Rao", "Engineering"),
        Employee::new("EMP002", "Ben Ode", "Engineering"),
        Employee::new("EMP003", "Cy Lin", "Sales"),
        Employee::new("EMP004", "Dee Park", "Sales"),
        Employee::new("EMP005", "Eve Sun", "Sales").deactivated(),
    ] {
        store.add_employee(employee).unwrap();
    }
    store
}

fn create_engine(store: Arc<InMemoryStore>) -> AttendanceEngine {
    AttendanceEngine::new(store, Arc::new(FixedClock(today())), AnalyticsConfig::default())
}

fn create_router_for_test(store: Arc<InMemoryStore>) -> Router {
    create_router(AppState::new(create_engine(store)))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn post_compile(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/attendance/compile")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

// =============================================================================
// Compilation
// =============================================================================

#[test]
fn test_compile_leave_wins_over_holiday() {
    let store = create_store();
    store
        .add_leave_request(approved_leave("EMP001", today(), 1))
        .unwrap();
    store
        .add_holiday(OfficeHoliday {
            event_date: today(),
            name: Some("Founders Day".to_string()),
        })
        .unwrap();

    create_engine(store.clone()).compile(None).unwrap();

    let leave_row = store.daily_attendance("EMP001", today()).unwrap().unwrap();
    let holiday_row = store.daily_attendance("EMP002", today()).unwrap().unwrap();
    assert_eq!(leave_row.status, DailyStatus::Leave);
    assert_eq!(holiday_row.status, DailyStatus::Holiday);
}

#[tokio::test]
async fn test_compile_endpoint_is_idempotent() {
    let store = create_store();
    store
        .add_attendance(checked_in("EMP001", today(), 9, "8.0"))
        .unwrap();

    let (status, first) = post_compile(create_router_for_test(store.clone()), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["date"], TODAY);
    assert_eq!(first["compiled"], 4);
    assert_eq!(first["skipped"], 0);
    let rows_after_first = store.daily_rows().unwrap();

    let (status, second) =
        post_compile(create_router_for_test(store.clone()), json!({ "date": TODAY })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["compiled"], 0);
    assert_eq!(second["skipped"], 4);
    assert_eq!(store.daily_rows().unwrap(), rows_after_first);

    let present = store.daily_attendance("EMP001", today()).unwrap().unwrap();
    assert_eq!(present.status, DailyStatus::Present);
    assert!(present.check_in_time.is_some());
}

#[tokio::test]
async fn test_compile_weekend_date() {
    let store = create_store();
    let (status, body) =
        post_compile(create_router_for_test(store.clone()), json!({ "date": "2026-06-13" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["compiled"], 4);
    for row in store.daily_rows().unwrap() {
        assert_eq!(row.status, DailyStatus::Weekend);
        assert_eq!(row.check_in_time, None);
    }
}

#[tokio::test]
async fn test_compile_malformed_date_names_field() {
    let (status, body) =
        post_compile(create_router_for_test(create_store()), json!({ "date": "15/06/2026" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["message"].as_str().unwrap().contains("'date'"));
}

// =============================================================================
// History and metrics
// =============================================================================

#[tokio::test]
async fn test_history_excludes_rows_without_check_in() {
    let store = create_store();
    store
        .add_attendance(checked_in("EMP001", days_ago(3), 9, "8.0"))
        .unwrap();
    store
        .add_attendance(RawAttendanceFact::absent("EMP001", days_ago(2)))
        .unwrap();
    store
        .add_attendance(checked_in("EMP001", days_ago(200), 9, "8.0"))
        .unwrap();

    let (status, body) = get_json(
        create_router_for_test(store),
        "/attendance/history?employee_id=EMP001",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["employee_id"], "EMP001");
    assert_eq!(rows[0]["status"], "PRESENT");
}

#[tokio::test]
async fn test_metrics_for_employee_without_history_is_default() {
    let (status, body) = get_json(
        create_router_for_test(create_store()),
        "/analytics/metrics?employee_id=EMP002",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["attendance_score"], 0);
    assert_eq!(body["risk_level"], "high");
    assert_eq!(body["present_days"], 0);
    assert_eq!(body["chart_breakdown"]["labels"], json!([]));
    assert_eq!(body["chart_breakdown"]["values"], json!([]));
}

#[tokio::test]
async fn test_metrics_for_employee_with_late_days_and_leave() {
    let store = create_store();
    for i in 1..=4 {
        store
            .add_attendance(checked_in("EMP001", days_ago(i), 9, "8.0"))
            .unwrap();
    }
    store
        .add_attendance(checked_in("EMP001", days_ago(5), 11, "6.0"))
        .unwrap();
    store
        .add_leave_request(approved_leave("EMP001", days_ago(30), 3))
        .unwrap();

    let (status, body) = get_json(
        create_router_for_test(store),
        "/analytics/metrics?employee_id=EMP001",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["present_days"], 5);
    assert_eq!(body["late_arrival_days"], 1);
    assert_eq!(body["leave_days"], 3);
    // 100 - 2 - 3 = 95
    assert_eq!(body["attendance_score"], 95);
    assert_eq!(body["risk_level"], "low");
    assert_eq!(body["average_work_hours"].as_f64(), Some(7.6));
    assert_eq!(body["average_login_hour"].as_f64(), Some(9.4));
    assert_eq!(body["chart_breakdown"]["values"], json!([5, 0, 3, 1]));
}

#[tokio::test]
async fn test_metrics_unknown_employee_returns_404() {
    let (status, body) = get_json(
        create_router_for_test(create_store()),
        "/analytics/metrics?employee_id=EMP404",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
}

// =============================================================================
// Anomalies and leave abuse
// =============================================================================

#[tokio::test]
async fn test_anomalies_flag_the_outlier_day() {
    let store = create_store();
    for i in 1..=9 {
        store
            .add_attendance(checked_in("EMP003", days_ago(i), 9, "8.0"))
            .unwrap();
    }
    store
        .add_attendance(checked_in("EMP003", days_ago(10), 9, "20.0"))
        .unwrap();

    let (status, body) = get_json(create_router_for_test(store), "/analytics/anomalies").await;

    assert_eq!(status, StatusCode::OK);
    let anomalies = body.as_array().unwrap();
    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0]["employee_id"], "EMP003");
    assert_eq!(anomalies[0]["date"], days_ago(10).to_string());
    assert_eq!(anomalies[0]["reason"], "Unusual work duration (20.00h)");
}

#[tokio::test]
async fn test_leave_abuse_flags_sales() {
    let store = create_store();
    store
        .add_leave_request(approved_leave("EMP003", days_ago(60), 10))
        .unwrap();
    store
        .add_leave_request(approved_leave("EMP004", days_ago(40), 6))
        .unwrap();
    store
        .add_leave_request(approved_leave("EMP001", days_ago(20), 1))
        .unwrap();
    // Inactive employee's leave is ignored.
    store
        .add_leave_request(approved_leave("EMP005", days_ago(20), 50))
        .unwrap();

    let (status, body) = get_json(create_router_for_test(store), "/analytics/leave-abuse").await;

    // org avg = 17 / 4 = 4.25; Sales = 16 / 2 = 8.0 > 6.375
    assert_eq!(status, StatusCode::OK);
    let flagged = body.as_array().unwrap();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0]["department"], "Sales");
    assert_eq!(flagged[0]["avg_leave"].as_f64(), Some(8.0));
    assert_eq!(flagged[0]["org_avg"].as_f64(), Some(4.25));
}

#[tokio::test]
async fn test_leave_abuse_empty_without_leave() {
    let (status, body) =
        get_json(create_router_for_test(create_store()), "/analytics/leave-abuse").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Risk and performers
// =============================================================================

#[test]
fn test_predict_risk_end_to_end_medium() {
    let store = create_store();
    // Ten late check-ins cost 20 points and fifteen leave days 15: score 65.
    for i in 1..=10 {
        store
            .add_attendance(checked_in("EMP002", days_ago(i + 10), 11, "8.0"))
            .unwrap();
    }
    store
        .add_leave_request(approved_leave("EMP002", days_ago(150), 15))
        .unwrap();
    store
        .add_attendance(RawAttendanceFact::absent("EMP002", days_ago(5)))
        .unwrap();
    store
        .add_attendance(RawAttendanceFact::absent("EMP002", days_ago(80)))
        .unwrap();

    let engine = create_engine(store);
    let window = engine.history(Some("EMP002")).unwrap();
    assert_eq!(
        engine.metrics(&window, Some("EMP002")).unwrap().attendance_score,
        65
    );

    let prediction = engine.predict_risk("EMP002").unwrap();
    assert_eq!(prediction.employee_id, "EMP002");
    assert_eq!(prediction.risk_score, 14);
    assert_eq!(prediction.risk, RiskLevel::Medium);
}

#[tokio::test]
async fn test_risk_endpoint_low_for_clean_record() {
    let store = create_store();
    store
        .add_attendance(checked_in("EMP001", days_ago(1), 9, "8.0"))
        .unwrap();

    let (status, body) = get_json(create_router_for_test(store), "/analytics/risk/EMP001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], "EMP001");
    assert_eq!(body["risk"], "low");
    assert_eq!(body["risk_score"], 0);
}

#[tokio::test]
async fn test_performers_endpoint_partitions_active_employees() {
    let store = create_store();
    // EMP001: 100, EMP002: 100 - 2*25 = 50, EMP003: 100 - 2*10 = 80, EMP004: none.
    store
        .add_attendance(checked_in("EMP001", days_ago(1), 9, "8.0"))
        .unwrap();
    for i in 1..=25 {
        store
            .add_attendance(checked_in("EMP002", days_ago(i), 12, "8.0"))
            .unwrap();
    }
    for i in 1..=10 {
        store
            .add_attendance(checked_in("EMP003", days_ago(i), 11, "8.0"))
            .unwrap();
    }
    // Inactive employees never appear.
    store
        .add_attendance(checked_in("EMP005", days_ago(1), 9, "8.0"))
        .unwrap();

    let (status, body) = get_json(create_router_for_test(store), "/analytics/performers").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["top"],
        json!([{ "name": "Asha Rao", "employee_id": "EMP001", "score": 100 }])
    );
    assert_eq!(
        body["low"],
        json!([{ "name": "Ben Ode", "employee_id": "EMP002", "score": 50 }])
    );
}
