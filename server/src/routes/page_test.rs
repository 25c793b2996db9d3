use axum::body::to_bytes;
use axum::http::header::{LOCATION, SET_COOKIE};

use super::*;
use crate::state::test_helpers;

fn form(number: &str, group_size: &str, summary: bool) -> Form<VisualizeForm> {
    Form(VisualizeForm {
        number: number.into(),
        group_size: group_size.into(),
        summary: summary.then(|| "on".to_owned()),
    })
}

fn jar_with(id: Uuid) -> CookieJar {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(
        axum::http::header::COOKIE,
        format!("{SESSION_COOKIE}={id}").parse().unwrap(),
    );
    CookieJar::from_headers(&headers)
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// GET /
// =============================================================================

#[tokio::test]
async fn first_visit_sets_cookie_and_shows_defaults() {
    let state = test_helpers::test_app_state();
    let response = index(State(state.clone()), CookieJar::new()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_owned();
    assert!(cookie.starts_with("viz_session="));
    assert!(cookie.contains("HttpOnly"));

    let html = body_text(response).await;
    assert!(html.contains(r#"name="number" min="1" max="100" step="1" value="12""#));
    assert!(html.contains(r#"name="group_size" min="1" max="100" step="1" value="3""#));
    assert!(!html.contains("<svg"));
    assert_eq!(state.sessions.read().await.sessions.len(), 1);
}

#[tokio::test]
async fn known_cookie_is_not_reissued() {
    let state = test_helpers::test_app_state();
    let response = index(State(state), jar_with(Uuid::new_v4())).await;
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn garbage_cookie_gets_replaced() {
    let state = test_helpers::test_app_state();
    let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "nope"));
    let response = index(State(state), jar).await;
    assert!(response.headers().get(SET_COOKIE).is_some());
}

// =============================================================================
// POST /visualize
// =============================================================================

#[tokio::test]
async fn valid_submit_redirects_and_persists() {
    let state = test_helpers::test_app_state();
    let id = Uuid::new_v4();

    let response = submit(State(state.clone()), jar_with(id), form("7", "3", false)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/");

    // Reload shows the result for the remembered inputs.
    let html = body_text(index(State(state), jar_with(id)).await).await;
    assert!(html.contains("Not an exact division. 7 is not divisible by 3."));
    assert!(html.contains(r#"value="7""#));
    assert!(html.contains("<svg"));
    assert_eq!(html.matches(r#"stroke-dasharray="4""#).count(), 2);
    // The summary is rendered for the live toggle but the box is unticked.
    assert!(html.contains(r#"class="summary""#));
    assert!(!html.contains(r#"value="on" checked"#));
}

#[tokio::test]
async fn summary_box_shows_primality_and_divisors() {
    let state = test_helpers::test_app_state();
    let id = Uuid::new_v4();
    submit(State(state.clone()), jar_with(id), form("12", "3", true)).await;

    let html = body_text(index(State(state), jar_with(id)).await).await;
    assert!(html.contains("Exact division! 12 is divisible by 3."));
    assert!(html.contains("12 is a COMPOSITE number"));
    assert!(html.contains("Divisors of 12: 1, 2, 3, 4, 6, 12"));
    assert!(html.contains(r#"value="on" checked"#));
}

#[tokio::test]
async fn invalid_submit_shows_error_and_keeps_session() {
    let state = test_helpers::test_app_state();
    let id = Uuid::new_v4();
    submit(State(state.clone()), jar_with(id), form("12", "3", false)).await;

    let response = submit(State(state.clone()), jar_with(id), form("500", "3", false)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Please enter a number between 1 and 100 (got 500)."));
    // Previous visualization is still shown.
    assert!(html.contains("Exact division! 12 is divisible by 3."));

    let store = state.sessions.read().await;
    assert_eq!(store.sessions.get(&id).map(|s| s.number), Some(12));
}

#[tokio::test]
async fn non_integer_input_is_escaped() {
    let state = test_helpers::test_app_state();
    let response = submit(State(state), CookieJar::new(), form("<b>", "3", false)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("&lt;b&gt;"));
    assert!(!html.contains("'<b>'"));
}

// =============================================================================
// Rendering helpers
// =============================================================================

#[test]
fn render_page_before_visualizing_has_no_result() {
    let html = render_page(&ServerConfig::default(), &SessionState::new(), None);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(!html.contains("division"));
}

#[test]
fn render_page_for_one_says_composite() {
    let current = SessionState { number: 1, group_size: 1, visualized: true, show_summary: true, ..SessionState::new() };
    let html = render_page(&ServerConfig::default(), &current, None);
    assert!(html.contains("1 is a COMPOSITE number"));
}

#[tokio::test]
async fn canvas_page_renders_host() {
    let Html(html) = canvas().await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"name="group_size""#));
    assert!(html.contains("<canvas"));
}
