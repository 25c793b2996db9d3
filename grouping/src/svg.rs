//! SVG rendering of a [`Layout`].
//!
//! Output is a single `<svg>` element suitable for inlining into an HTML page
//! or writing to a `.svg` file. Each group emits its tokens, then its
//! placeholders, then its bounding box.

use crate::geometry::{Point, Rect};
use crate::layout::{Group, Layout};
use crate::palette;

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

/// Render the whole layout as an SVG document.
#[must_use]
pub fn render(layout: &Layout) -> String {
    let mut out = format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        layout.extent.width, layout.extent.height
    );
    for group in &layout.groups {
        push_group(&mut out, group, layout.radius);
    }
    out.push_str("</svg>");
    out
}

fn push_group(out: &mut String, group: &Group, radius: f64) {
    for &center in &group.tokens {
        out.push_str(&token(center, radius));
    }
    for &center in &group.placeholders {
        out.push_str(&placeholder(center, radius));
    }
    out.push_str(&group_box(group.bounds, group.complete));
}

fn token(center: Point, radius: f64) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{radius}" fill="{}" stroke="{}" stroke-width="{}" />"#,
        center.x,
        center.y,
        palette::TOKEN_FILL,
        palette::TOKEN_STROKE,
        palette::TOKEN_STROKE_WIDTH,
    )
}

fn placeholder(center: Point, radius: f64) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{radius}" fill="none" stroke="{}" stroke-width="{}" stroke-dasharray="{}" />"#,
        center.x,
        center.y,
        palette::PLACEHOLDER_STROKE,
        palette::TOKEN_STROKE_WIDTH,
        palette::PLACEHOLDER_DASH,
    )
}

fn group_box(bounds: Rect, complete: bool) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}" />"#,
        bounds.min_x,
        bounds.min_y,
        bounds.width(),
        bounds.height(),
        palette::group_stroke(complete),
        palette::GROUP_STROKE_WIDTH,
    )
}
