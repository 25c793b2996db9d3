//! Colours and stroke widths shared by every renderer.
//!
//! Values are CSS colour strings so they drop straight into SVG attributes and
//! `CanvasRenderingContext2d` styles.

pub const TOKEN_FILL: &str = "skyblue";
pub const TOKEN_STROKE: &str = "blue";
pub const TOKEN_STROKE_WIDTH: f64 = 2.0;

pub const COMPLETE_STROKE: &str = "green";
pub const INCOMPLETE_STROKE: &str = "red";
pub const GROUP_STROKE_WIDTH: f64 = 3.0;

pub const PLACEHOLDER_STROKE: &str = "lightgrey";
pub const PLACEHOLDER_DASH: f64 = 4.0;

pub const DIVISIBLE_TEXT: &str = "green";
pub const NOT_DIVISIBLE_TEXT: &str = "red";
pub const PRIME_TEXT: &str = "#00008B";
pub const COMPOSITE_TEXT: &str = "#FF8C00";
pub const NEUTRAL_TEXT: &str = "#333333";

pub const BACKGROUND: &str = "white";

/// Box outline for a group.
#[must_use]
pub fn group_stroke(complete: bool) -> &'static str {
    if complete { COMPLETE_STROKE } else { INCOMPLETE_STROKE }
}
