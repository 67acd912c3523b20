mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use campus_api::modules::users::model::UserRole;
use common::{create_test_user, generate_unique_email, request, response_json, setup_test_app};

async fn faculty_token(test_app: &common::TestApp) -> String {
    let faculty = create_test_user(
        &test_app.state,
        "Faculty",
        &generate_unique_email(),
        "pass",
        UserRole::Faculty,
    )
    .await;
    common::token_for(&test_app.state, &faculty)
}

#[tokio::test]
async fn faculty_marks_attendance() {
    let test_app = setup_test_app().await;
    let token = faculty_token(&test_app).await;

    let response = test_app
        .app
        .oneshot(request(
            "POST",
            "/api/attendance",
            Some(&token),
            Some(json!({
                "course": "CS101",
                "date": "2024-01-10",
                "records": [
                    {"studentId": "s1", "studentName": "A", "status": "present"},
                    {"studentId": "s2", "studentName": "B", "status": "absent"}
                ]
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["count"], 2);

    let records = test_app.state.store.attendance.read().await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.course == "CS101" && r.date == "2024-01-10"));
}

#[tokio::test]
async fn remarking_replaces_the_previous_set() {
    let test_app = setup_test_app().await;
    let token = faculty_token(&test_app).await;

    let first = test_app
        .app
        .clone()
        .oneshot(request(
            "POST",
            "/api/attendance",
            Some(&token),
            Some(json!({
                "course": "CS101",
                "date": "2024-01-10",
                "records": [{"studentId": "s1", "studentName": "A", "status": "present"}]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    // Mark another date too; it must survive the re-mark below.
    test_app
        .app
        .clone()
        .oneshot(request(
            "POST",
            "/api/attendance",
            Some(&token),
            Some(json!({
                "course": "CS101",
                "date": "2024-01-11",
                "records": [{"studentId": "s1", "studentName": "A", "status": "present"}]
            })),
        ))
        .await
        .unwrap();

    let second = test_app
        .app
        .clone()
        .oneshot(request(
            "POST",
            "/api/attendance",
            Some(&token),
            Some(json!({
                "course": "CS101",
                "date": "2024-01-10",
                "records": [{"studentId": "s1", "studentName": "A", "status": "absent"}]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CREATED);
    assert_eq!(response_json(second).await["count"], 1);

    let records = test_app.state.store.attendance.read().await.unwrap();
    let day_records: Vec<_> = records
        .iter()
        .filter(|r| r.course == "CS101" && r.date == "2024-01-10")
        .collect();
    assert_eq!(day_records.len(), 1);
    assert_eq!(
        day_records[0].status,
        campus_api::modules::attendance::model::AttendanceStatus::Absent
    );
    // The other day is untouched.
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn marking_requires_course_date_and_records() {
    let test_app = setup_test_app().await;
    let token = faculty_token(&test_app).await;

    for body in [
        json!({"date": "2024-01-10", "records": []}),
        json!({"course": "CS101", "records": []}),
        json!({"course": "CS101", "date": "2024-01-10"}),
    ] {
        let response = test_app
            .app
            .clone()
            .oneshot(request("POST", "/api/attendance", Some(&token), Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn students_cannot_mark_attendance() {
    let test_app = setup_test_app().await;
    let student = create_test_user(
        &test_app.state,
        "Student",
        &generate_unique_email(),
        "pass",
        UserRole::Student,
    )
    .await;
    let token = common::token_for(&test_app.state, &student);

    let response = test_app
        .app
        .oneshot(request(
            "POST",
            "/api/attendance",
            Some(&token),
            Some(json!({"course": "CS101", "date": "2024-01-10", "records": []})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn students_see_only_their_own_records() {
    let test_app = setup_test_app().await;
    let token = faculty_token(&test_app).await;
    let student = create_test_user(
        &test_app.state,
        "Student A",
        &generate_unique_email(),
        "pass",
        UserRole::Student,
    )
    .await;

    test_app
        .app
        .clone()
        .oneshot(request(
            "POST",
            "/api/attendance",
            Some(&token),
            Some(json!({
                "course": "CS101",
                "date": "2024-01-10",
                "records": [
                    {"studentId": student.id, "studentName": "Student A", "status": "present"},
                    {"studentId": "someone-else", "studentName": "B", "status": "absent"}
                ]
            })),
        ))
        .await
        .unwrap();

    let student_token = common::token_for(&test_app.state, &student);
    let response = test_app
        .app
        .clone()
        .oneshot(request("GET", "/api/attendance", Some(&student_token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["studentId"], student.id);

    // Faculty sees both rows.
    let response = test_app
        .app
        .oneshot(request("GET", "/api/attendance", Some(&token), None))
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn listing_supports_query_filters() {
    let test_app = setup_test_app().await;
    let token = faculty_token(&test_app).await;

    for (course, date) in [("CS101", "2024-01-10"), ("MA201", "2024-01-10"), ("CS101", "2024-02-01")]
    {
        test_app
            .app
            .clone()
            .oneshot(request(
                "POST",
                "/api/attendance",
                Some(&token),
                Some(json!({
                    "course": course,
                    "date": date,
                    "records": [{"studentId": "s1", "studentName": "A", "status": "present"}]
                })),
            ))
            .await
            .unwrap();
    }

    let response = test_app
        .app
        .clone()
        .oneshot(request("GET", "/api/attendance?course=CS101", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response_json(response).await.as_array().unwrap().len(), 2);

    let response = test_app
        .app
        .clone()
        .oneshot(request(
            "GET",
            "/api/attendance?course=CS101&date=2024-01-10",
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response_json(response).await.as_array().unwrap().len(), 1);

    let response = test_app
        .app
        .oneshot(request("GET", "/api/attendance?studentId=s1", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response_json(response).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn report_computes_rounded_percentages() {
    let test_app = setup_test_app().await;
    let token = faculty_token(&test_app).await;

    // s1: 3 present + 1 absent across four days of CS101.
    for (date, status) in [
        ("2024-01-10", "present"),
        ("2024-01-11", "present"),
        ("2024-01-12", "present"),
        ("2024-01-13", "absent"),
    ] {
        test_app
            .app
            .clone()
            .oneshot(request(
                "POST",
                "/api/attendance",
                Some(&token),
                Some(json!({
                    "course": "CS101",
                    "date": date,
                    "records": [{"studentId": "s1", "studentName": "A", "status": status}]
                })),
            ))
            .await
            .unwrap();
    }

    let response = test_app
        .app
        .clone()
        .oneshot(request("GET", "/api/attendance/report", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["studentId"], "s1");
    assert_eq!(rows[0]["total"], 4);
    assert_eq!(rows[0]["present"], 3);
    assert_eq!(rows[0]["percentage"], 75);
}

#[tokio::test]
async fn report_month_filter_is_a_date_prefix() {
    let test_app = setup_test_app().await;
    let token = faculty_token(&test_app).await;

    for (date, status) in [("2024-01-10", "present"), ("2024-02-10", "absent")] {
        test_app
            .app
            .clone()
            .oneshot(request(
                "POST",
                "/api/attendance",
                Some(&token),
                Some(json!({
                    "course": "CS101",
                    "date": date,
                    "records": [{"studentId": "s1", "studentName": "A", "status": status}]
                })),
            ))
            .await
            .unwrap();
    }

    let response = test_app
        .app
        .oneshot(request(
            "GET",
            "/api/attendance/report?month=2024-01",
            Some(&token),
            None,
        ))
        .await
        .unwrap();

    let body = response_json(response).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["total"], 1);
    assert_eq!(rows[0]["percentage"], 100);
}

#[tokio::test]
async fn students_cannot_read_the_report() {
    let test_app = setup_test_app().await;
    let student = create_test_user(
        &test_app.state,
        "Student",
        &generate_unique_email(),
        "pass",
        UserRole::Student,
    )
    .await;
    let token = common::token_for(&test_app.state, &student);

    let response = test_app
        .app
        .oneshot(request("GET", "/api/attendance/report", Some(&token), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
