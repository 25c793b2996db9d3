//! Shared numeric constants for the grouping crate.

// ── Layout ──────────────────────────────────────────────────────

/// Token radius in pixels.
pub const TOKEN_RADIUS: f64 = 15.0;

/// Gap between neighbouring tokens and between a group box and its tokens.
pub const TOKEN_PADDING: f64 = 10.0;

/// Tokens placed on one line inside a group before wrapping.
pub const TOKENS_PER_ROW: u32 = 10;

/// Distance of the first token centre from the top-left corner.
pub const CANVAS_MARGIN: f64 = 40.0;

/// Canvas width used by the web page.
pub const WEB_CANVAS_WIDTH: f64 = 800.0;

// ── Input limits ────────────────────────────────────────────────

/// Smallest number accepted at the shell boundary.
pub const MIN_NUMBER: i64 = 1;

/// Largest number accepted at the shell boundary.
pub const MAX_NUMBER: i64 = 100;

/// Group size cap applied by the web page's numeric input.
pub const WEB_MAX_GROUP_SIZE: i64 = 100;
