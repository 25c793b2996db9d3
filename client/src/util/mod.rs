//! Helpers shared by components.

pub mod canvas_viewport;
