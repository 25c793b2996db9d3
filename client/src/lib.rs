//! Leptos views for the divisibility visualizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! With the `ssr` feature the server renders [`pages::visualizer`] to a full
//! HTML document for every request. The `hydrate` feature builds the WASM
//! bundle served under `/pkg`, which hydrates [`pages::canvas::CanvasPage`]
//! and hands its `<canvas>` to `canvas::Engine`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pages`] | Whole documents: the form page and the canvas page |
//! | [`components`] | Result view, canvas host, error dialog |
//! | [`util`] | Viewport helpers shared by the canvas host |

pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point, called by the module script on the canvas page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(pages::canvas::CanvasPage);
}
