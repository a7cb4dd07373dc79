mod common;

use axum::http::{header, StatusCode};
use common::{FakePlanModel, TestClient};
use serde_json::{json, Value};

const TWO_DAY_REPLY: &str = r#"{
    "plan": [
        {
            "focus": "Arrays",
            "objective": "Index arithmetic",
            "concepts": ["Indexing", "Slices"],
            "activities": ["Read", "Practice"],
            "time_allocation": {"concepts_minutes": 50, "practice_minutes": 50, "revision_minutes": 20},
            "outcome_check": "Solve 3 problems",
            "day": "Day 42 (2000-01-01)"
        },
        {"focus": "Linked Lists"}
    ]
}"#;

fn plan_body(exam_date: &str) -> Value {
    json!({
        "subject": "Data Structures",
        "exam_date": exam_date,
        "hours": 2,
        "study_mode": "Exam Revision"
    })
}

#[tokio::test]
async fn health_check_reports_running() {
    let client = TestClient::new(common::test_router(FakePlanModel::replying("{}")));

    let response = client.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"status": "Backend is running"}));
}

#[tokio::test]
async fn generates_sequenced_plan() {
    let model = FakePlanModel::replying(TWO_DAY_REPLY);
    let client = TestClient::new(common::test_router(model.clone()));

    let response = client
        .post_json("/generate-plan", &plan_body("2026-10-24"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body: Value = response.json();
    let plan = body["plan"].as_array().expect("plan array");
    assert_eq!(plan.len(), 5);
    assert_eq!(model.calls(), 1);

    assert_eq!(
        plan[0],
        json!({
            "day": "Day 1 (2026-10-19)",
            "focus": "Arrays",
            "objective": "Index arithmetic",
            "concepts": ["Indexing", "Slices"],
            "activities": ["Read", "Practice"],
            "time_allocation": {"concepts_minutes": 50, "practice_minutes": 50, "revision_minutes": 20},
            "outcome_check": "Solve 3 problems",
            "revision_type": "Study Day"
        })
    );

    // Second entry is reused for the remaining days, with default fields filled in.
    for (idx, day) in plan.iter().enumerate().skip(1) {
        assert_eq!(day["focus"], "Linked Lists");
        assert_eq!(day["concepts"], json!([]));
        assert_eq!(
            day["time_allocation"],
            json!({"concepts_minutes": 60, "practice_minutes": 40, "revision_minutes": 20})
        );
        assert_eq!(
            day["day"],
            format!("Day {} (2026-10-{})", idx + 1, 19 + idx)
        );
    }

    let tags: Vec<&str> = plan
        .iter()
        .map(|d| d["revision_type"].as_str().unwrap())
        .collect();
    assert_eq!(
        tags,
        ["Study Day", "Study Day", "Micro Revision", "Final Revision", "Final Revision"]
    );
}

#[tokio::test]
async fn past_exam_returns_empty_plan_without_model_call() {
    let model = FakePlanModel::replying(TWO_DAY_REPLY);
    let client = TestClient::new(common::test_router(model.clone()));

    for exam_date in ["2026-10-19", "2026-01-01"] {
        let response = client.post_json("/generate-plan", &plan_body(exam_date)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.json::<Value>(), json!({"plan": []}));
    }
    assert_eq!(model.calls(), 0);
}

#[tokio::test]
async fn malformed_model_reply_returns_empty_plan() {
    let client = TestClient::new(common::test_router(FakePlanModel::replying("not json")));

    let response = client
        .post_json("/generate-plan", &plan_body("2026-11-30"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"plan": []}));
}

#[tokio::test]
async fn missing_fields_are_reported_in_order() {
    let client = TestClient::new(common::test_router(FakePlanModel::replying(TWO_DAY_REPLY)));

    let response = client
        .post_json("/generate-plan", &json!({"hours": 2, "study_mode": "Exam Revision"}))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>(), json!({"error": "Missing field: subject"}));

    let response = client
        .post_json(
            "/generate-plan",
            &json!({"subject": "Physics", "exam_date": "2026-11-01", "hours": 2}),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Missing field: study_mode"})
    );
}

#[tokio::test]
async fn invalid_values_are_bad_requests() {
    let client = TestClient::new(common::test_router(FakePlanModel::replying(TWO_DAY_REPLY)));

    let mut bad_date = plan_body("next tuesday");
    let response = client.post_json("/generate-plan", &bad_date).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    bad_date["exam_date"] = json!("2026-11-01");
    bad_date["hours"] = json!(0);
    let response = client.post_json("/generate-plan", &bad_date).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("hours"));

    let response = client.post_json("/generate-plan", &json!(["not", "an", "object"])).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn model_failure_is_a_server_error() {
    let client = TestClient::new(common::test_router(FakePlanModel::failing("invalid api key")));

    let response = client
        .post_json("/generate-plan", &plan_body("2026-10-25"))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("invalid api key"), "unexpected error: {error}");
}

#[tokio::test]
async fn exports_plan_as_text_download() {
    let client = TestClient::new(common::test_router(FakePlanModel::replying("{}")));
    let plan = json!({
        "plan": [
            {"day": "Day 1 (2026-10-19)", "focus": "Arrays", "revision_type": "Study Day"},
            {"day": "Day 2 (2026-10-20)", "focus": "Graphs", "revision_type": "Final Revision"}
        ]
    });

    let response = client.post_json("/export-plan", &plan).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.text(),
        "Day 1 (2026-10-19) - Arrays\nDay 2 (2026-10-20) - Graphs"
    );
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"StudyPilot_Study_Plan.txt\""
    );
}

#[tokio::test]
async fn break_strategy_follows_hours() {
    let client = TestClient::new(common::test_router(FakePlanModel::replying("{}")));

    let response = client.get("/break-strategy?hours=2").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json::<Value>()["strategy"], "light");

    let response = client.get("/break-strategy?hours=5").await;
    assert_eq!(response.json::<Value>()["strategy"], "pomodoro");

    let response = client.get("/break-strategy?hours=8").await;
    assert_eq!(
        response.json::<Value>(),
        json!({
            "strategy": "deep_focus",
            "description": "Deep focus • 50 min study + 10 min break"
        })
    );

    let response = client.get("/break-strategy?hours=0").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn break_strategy_query_errors_are_json() {
    let client = TestClient::new(common::test_router(FakePlanModel::replying("{}")));

    for uri in ["/break-strategy", "/break-strategy?hours=lots"] {
        let response = client.get(uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = response.json();
        assert!(body["error"].is_string(), "{uri} gave {body}");
    }
}
