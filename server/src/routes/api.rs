//! JSON and SVG endpoints over the grouping core.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json, Response};
use grouping::svg;
use serde::{Deserialize, Serialize};

use crate::services::visualize::{self, VisualizeError};
use crate::state::AppState;

/// Raw query parameters. Kept as text so validation errors carry the
/// user-facing message instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct VisualizeQuery {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub group_size: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<grouping::input::Field>,
}

pub(crate) fn visualize_error_to_status(err: &VisualizeError) -> StatusCode {
    match err {
        VisualizeError::Input(_) => StatusCode::BAD_REQUEST,
        VisualizeError::Core(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for VisualizeError {
    fn into_response(self) -> Response {
        let status = visualize_error_to_status(&self);
        let field = match &self {
            Self::Input(err) => Some(err.field()),
            Self::Core(_) => None,
        };
        (status, Json(ErrorBody { error: self.to_string(), field })).into_response()
    }
}

/// `GET /api/visualize?number=&group_size=`: summary and layout as JSON.
pub async fn visualize_json(
    State(state): State<AppState>,
    Query(query): Query<VisualizeQuery>,
) -> Result<Json<grouping::Visualization>, VisualizeError> {
    let viz = visualize::from_raw(&state.config, &query.number, &query.group_size)?;
    Ok(Json(viz))
}

/// `GET /api/visualize.svg?number=&group_size=`: the layout as an SVG image.
pub async fn visualize_svg(
    State(state): State<AppState>,
    Query(query): Query<VisualizeQuery>,
) -> Result<Response, VisualizeError> {
    let viz = visualize::from_raw(&state.config, &query.number, &query.group_size)?;
    Ok(([(CONTENT_TYPE, "image/svg+xml")], svg::render(&viz.layout)).into_response())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
