//! The HTML page: input form, divisibility message, inline SVG and summary.
//!
//! The page is server-rendered from the `client` crate's leptos views.
//! Session state (last inputs, whether the user has visualized, whether the
//! summary is ticked) lives in `AppState` under the id stored in the
//! `viz_session` cookie, so a reload shows the same result.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::pages::visualizer::{self, PageModel};
use serde::Deserialize;
use time::Duration;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::services::{session, visualize};
use crate::state::{AppState, SessionState};

pub const SESSION_COOKIE: &str = "viz_session";

/// Submitted form fields. `summary` is present only when the box is ticked.
#[derive(Debug, Default, Deserialize)]
pub struct VisualizeForm {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub group_size: String,
    pub summary: Option<String>,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /`: render the page for the caller's session.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (id, jar) = session_cookie(jar, &state.config);
    let current = session::touch(&state, id).await;
    (jar, Html(render_page(&state.config, &current, None))).into_response()
}

/// `POST /visualize`: validate the form and remember it in the session.
///
/// Valid input redirects back to `/`; invalid input re-renders the page with
/// the message and a 400, leaving the session as it was.
pub async fn submit(State(state): State<AppState>, jar: CookieJar, Form(form): Form<VisualizeForm>) -> Response {
    let (id, jar) = session_cookie(jar, &state.config);
    match visualize::validate(&form.number, &form.group_size) {
        Ok(inputs) => {
            session::record(&state, id, inputs, form.summary.is_some()).await;
            (jar, Redirect::to("/")).into_response()
        }
        Err(err) => {
            let current = session::touch(&state, id).await;
            let page = render_page(&state.config, &current, Some(&err.to_string()));
            (StatusCode::BAD_REQUEST, jar, Html(page)).into_response()
        }
    }
}

/// `GET /canvas`: the browser-side canvas view. It keeps no session state.
pub async fn canvas() -> Html<String> {
    Html(client::pages::canvas::render_document())
}

/// Resolve the caller's session id, issuing a new cookie if needed.
fn session_cookie(jar: CookieJar, config: &ServerConfig) -> (Uuid, CookieJar) {
    if let Some(id) = jar.get(SESSION_COOKIE).and_then(|c| session::parse_session_id(c.value())) {
        return (id, jar);
    }
    let id = Uuid::new_v4();
    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::days(30));
    (id, jar.add(cookie))
}

// =============================================================================
// RENDERING
// =============================================================================

/// Build the page for a session and render it through the leptos view.
pub(crate) fn render_page(config: &ServerConfig, current: &SessionState, error: Option<&str>) -> String {
    let mut model = PageModel {
        number: current.number,
        group_size: current.group_size,
        show_summary: current.show_summary,
        error: error.map(str::to_owned),
        visualization: None,
    };

    if current.visualized {
        match visualize::run(config, current.inputs()) {
            Ok(viz) => model.visualization = Some(viz),
            Err(err) => {
                tracing::warn!(error = %err, number = current.number, "stored inputs failed to lay out");
                if model.error.is_none() {
                    model.error = Some(err.to_string());
                }
            }
        }
    }
    visualizer::render_document(model)
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
