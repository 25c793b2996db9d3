//! Rendering: draws a token layout to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`Layout`] and produces pixels; it does not mutate
//! any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use grouping::geometry::{Point, Rect};
use grouping::layout::Group;
use grouping::{Layout, palette};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Draw the full scene: background, then each group's tokens and box.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    layout: Option<&Layout>,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.set_fill_style_str(palette::BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    let Some(layout) = layout else {
        return Ok(());
    };

    for group in &layout.groups {
        draw_group(ctx, group, layout.radius)?;
    }
    Ok(())
}

// =============================================================
// Groups
// =============================================================

fn draw_group(ctx: &CanvasRenderingContext2d, group: &Group, radius: f64) -> Result<(), JsValue> {
    for &center in &group.tokens {
        draw_token(ctx, center, radius)?;
    }
    if !group.placeholders.is_empty() {
        draw_placeholders(ctx, &group.placeholders, radius)?;
    }
    draw_box(ctx, group.bounds, group.complete);
    Ok(())
}

fn draw_token(ctx: &CanvasRenderingContext2d, center: Point, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.set_fill_style_str(palette::TOKEN_FILL);
    ctx.fill();
    ctx.set_stroke_style_str(palette::TOKEN_STROKE);
    ctx.set_line_width(palette::TOKEN_STROKE_WIDTH);
    ctx.stroke();
    Ok(())
}

fn draw_placeholders(ctx: &CanvasRenderingContext2d, slots: &[Point], radius: f64) -> Result<(), JsValue> {
    let dash_array = js_sys::Array::new();
    dash_array.push(&palette::PLACEHOLDER_DASH.into());
    dash_array.push(&palette::PLACEHOLDER_DASH.into());
    ctx.set_line_dash(&dash_array)?;
    ctx.set_stroke_style_str(palette::PLACEHOLDER_STROKE);
    ctx.set_line_width(palette::TOKEN_STROKE_WIDTH);

    for &center in slots {
        ctx.begin_path();
        ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
        ctx.stroke();
    }

    ctx.set_line_dash(&js_sys::Array::new())?;
    Ok(())
}

fn draw_box(ctx: &CanvasRenderingContext2d, bounds: Rect, complete: bool) {
    ctx.set_stroke_style_str(palette::group_stroke(complete));
    ctx.set_line_width(palette::GROUP_STROKE_WIDTH);
    ctx.stroke_rect(bounds.min_x, bounds.min_y, bounds.width(), bounds.height());
}
