//! Canvas view for the divisibility visualizer.
//!
//! This crate is compiled to WebAssembly and draws into an
//! `HtmlCanvasElement`. Unlike the server-rendered page, it lays tokens out
//! against the canvas's live width, so resizing the canvas re-wraps the rows.
//! The `client` crate's `CanvasHost` component owns the [`engine::Engine`],
//! wires the entry fields and a resize observer to it, and shows
//! [`engine::ShellError`] messages in a dialog.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`panel`] | Text labels shown beside the canvas |
//! | [`render`] | Draws a layout to a 2D context |

pub mod engine;
pub mod panel;
pub mod render;
