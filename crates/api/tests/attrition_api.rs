//! Attrition service endpoint tests, covering both drifted surfaces

use api::routes::attrition;
use api::AttritionState;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use data_validator::Validator;
use http_body_util::BodyExt;
use inference_engine::{
    AttritionClassifier, CategoricalColumn, FeatureEncoder, LogisticModel, NumericColumn,
};
use std::sync::Arc;
use tower::ServiceExt;

/// Small fitted classifier: age (scaled) plus overtime one-hot
fn classifier() -> AttritionClassifier {
    let encoder = FeatureEncoder {
        numeric: vec![NumericColumn {
            name: "age".to_string(),
            mean: 35.0,
            std_dev: 5.0,
        }],
        categorical: vec![CategoricalColumn {
            name: "overtime".to_string(),
            categories: vec!["Yes".to_string(), "No".to_string()],
        }],
    };
    let model = LogisticModel {
        coefficients: vec![-0.8, 1.2, -0.4],
        intercept: -0.3,
    };
    AttritionClassifier::new(encoder, model).unwrap()
}

fn legacy_state() -> Arc<AttritionState> {
    Arc::new(AttritionState::new(
        Some(classifier()),
        Validator::default(),
        0.35,
    ))
}

fn pipeline_state() -> Arc<AttritionState> {
    Arc::new(AttritionState::new(
        Some(classifier()),
        Validator::new(attrition::pipeline_schema()),
        0.35,
    ))
}

fn profile_json(department: &str) -> String {
    format!(
        r#"{{"age":30,"gender":"Female","education":"Graduate","department":"{department}","job_role":"Executive","monthly_income":45000.0,"years_at_company":2,"promotions":0,"overtime":"Yes","performance_rating":2}}"#
    )
}

fn post_predict(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn legacy_health_message() {
    let router = attrition::router(legacy_state());

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Attrition Prediction API is running!");
}

#[tokio::test]
async fn legacy_predict_echoes_input_and_labels_risk() {
    let router = attrition::router(legacy_state());

    let response = router
        .oneshot(post_predict(profile_json("HR")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    assert_eq!(body["input_data"]["department"], "HR");
    let proba = body["probability_of_attrition"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&proba));
    // rounded to 4 decimal digits
    assert!(((proba * 10_000.0).round() - proba * 10_000.0).abs() < 1e-9);

    let expected_level = if proba >= 0.35 { "HIGH_RISK" } else { "LOW_RISK" };
    assert_eq!(body["recommended_action_level"], expected_level);
    let binary = body["logreg_prediction_binary"].as_u64().unwrap();
    assert_eq!(binary, u64::from(proba >= 0.5));
}

#[tokio::test]
async fn legacy_rejects_rnd_department() {
    let router = attrition::router(legacy_state());

    let response = router
        .oneshot(post_predict(profile_json("R&D")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["details"][0].as_str().unwrap().contains("department"));
}

#[tokio::test]
async fn pipeline_accepts_rnd_department() {
    let router = attrition::pipeline_router(pipeline_state());

    let response = router
        .oneshot(post_predict(profile_json("R&D")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;

    // trimmed response shape with the drifted labels
    assert!(body.get("input_data").is_none());
    let risk = body["recommended_risk_level"].as_str().unwrap();
    assert!(risk == "HIGH_RISK_ACTION_REQUIRED" || risk == "LOW_RISK_MONITOR");
    assert!(body["binary_prediction"].is_u64());
}

#[tokio::test]
async fn pipeline_rejects_finance_department() {
    let router = attrition::pipeline_router(pipeline_state());

    let response = router
        .oneshot(post_predict(profile_json("Finance")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn pipeline_health_reports_model() {
    let router = attrition::pipeline_router(pipeline_state());

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["model_loaded"], true);
}

#[tokio::test]
async fn predict_degrades_without_classifier() {
    let state = Arc::new(AttritionState::new(None, Validator::default(), 0.35));
    let router = attrition::router(state);

    let response = router
        .oneshot(post_predict(profile_json("HR")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Model is not initialized");
}

#[tokio::test]
async fn predict_collects_all_violations() {
    let router = attrition::router(legacy_state());

    let body = r#"{"age":16,"gender":"Unknown","education":"Graduate","department":"HR","job_role":"Executive","monthly_income":45000.0,"years_at_company":2,"promotions":0,"overtime":"Yes","performance_rating":9}"#;
    let response = router
        .oneshot(post_predict(body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let parsed = json_body(response).await;
    assert_eq!(parsed["details"].as_array().unwrap().len(), 3);
}
