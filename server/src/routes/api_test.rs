use axum::body::to_bytes;
use serde_json::Value;

use super::*;
use crate::state::test_helpers;

fn query(number: &str, group_size: &str) -> Query<VisualizeQuery> {
    Query(VisualizeQuery { number: number.into(), group_size: group_size.into() })
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn json_reports_divisible_twelve() {
    let state = test_helpers::test_app_state();
    let Json(viz) = visualize_json(State(state), query("12", "3")).await.unwrap();
    assert!(viz.summary.divisible);
    assert_eq!(viz.summary.divisors, vec![1, 2, 3, 4, 6, 12]);
    assert_eq!(viz.layout.group_sizes(), vec![3, 3, 3, 3]);
}

#[tokio::test]
async fn json_reports_prime_seventeen() {
    let state = test_helpers::test_app_state();
    let Json(viz) = visualize_json(State(state), query("17", "100")).await.unwrap();
    assert!(!viz.summary.divisible);
    assert_eq!(viz.summary.classification, grouping::Classification::Prime);
    assert_eq!(viz.layout.group_sizes(), vec![17]);
    assert!(!viz.layout.groups[0].complete);
}

#[tokio::test]
async fn json_rejects_out_of_range_with_message() {
    let state = test_helpers::test_app_state();
    let err = visualize_json(State(state), query("101", "3")).await.unwrap_err();
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Please enter a number between 1 and 100 (got 101).");
    assert_eq!(body["field"], "number");
}

#[tokio::test]
async fn json_rejects_missing_group_size() {
    let state = test_helpers::test_app_state();
    let err = visualize_json(State(state), query("12", "")).await.unwrap_err();
    let body = body_json(err.into_response()).await;
    assert_eq!(body["field"], "group_size");
}

#[tokio::test]
async fn svg_has_image_content_type() {
    let state = test_helpers::test_app_state();
    let response = visualize_svg(State(state), query("7", "3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/svg+xml");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let svg = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches(r#"fill="skyblue""#).count(), 7);
}

#[tokio::test]
async fn svg_rejects_zero_group() {
    let state = test_helpers::test_app_state();
    let err = visualize_svg(State(state), query("12", "0")).await.unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[test]
fn core_errors_map_to_unprocessable() {
    let err = VisualizeError::Core(grouping::GroupingError::InvalidArgument("x".into()));
    assert_eq!(visualize_error_to_status(&err), StatusCode::UNPROCESSABLE_ENTITY);
}
