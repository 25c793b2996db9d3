//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session bookkeeping and calls into the grouping core
//! so route handlers can stay focused on HTTP translation.

pub mod session;
pub mod visualize;
