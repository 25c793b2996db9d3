//! Canvas viewport synchronization for the canvas host.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use canvas::engine::Engine;

#[cfg(test)]
#[path = "canvas_viewport_test.rs"]
mod canvas_viewport_test;

/// Viewport the engine should use for an element of the given CSS size.
///
/// Collapsed elements (hidden, not yet laid out) still get a 1px viewport so
/// the engine never lays out against a zero width.
pub fn viewport_for(client_width: i32, client_height: i32, device_pixel_ratio: f64) -> (f64, f64, f64) {
    let dpr = if device_pixel_ratio.is_finite() { device_pixel_ratio.max(1.0) } else { 1.0 };
    (f64::from(client_width).max(1.0), f64::from(client_height).max(1.0), dpr)
}

/// Read the canvas element's CSS dimensions and device pixel ratio, then push them to the engine.
///
/// Uses CSS pixel dimensions (`client_width` / `client_height`); the engine
/// multiplies by DPR when sizing the backing store.
#[cfg(feature = "hydrate")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get() else {
        return;
    };
    let (width, height, dpr) = viewport_for(canvas.client_width(), canvas.client_height(), window.device_pixel_ratio());
    if let Err(e) = engine.set_viewport(width, height, dpr) {
        log::warn!("viewport relayout failed: {e:?}");
    }
}
