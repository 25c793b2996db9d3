//! Reusable view components.

pub mod canvas_host;
pub mod error_dialog;
pub mod visualization;
