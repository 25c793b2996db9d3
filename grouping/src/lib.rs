//! Shared core for the divisibility visualizer.
//!
//! Both front ends (the `server` web page and the `canvas` view) call into this
//! crate with a number and a group size and render what comes back. Everything
//! here is pure: no I/O, no logging, no state carried between calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`number`] | Primality test, divisor enumeration, classification |
//! | [`layout`] | Token/group layout and canvas extent |
//! | [`geometry`] | [`geometry::Point`], [`geometry::Rect`], [`geometry::Extent`] |
//! | [`input`] | Shell-boundary parsing and range validation |
//! | [`summary`] | Divisibility/primality report and display text |
//! | [`palette`] | Shared colours and stroke widths |
//! | [`svg`] | SVG rendering of a [`layout::Layout`] |
//! | [`consts`] | Layout defaults and input limits |

pub mod consts;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod number;
pub mod palette;
pub mod summary;
pub mod svg;

pub use input::{InputError, InputPolicy, Inputs, parse_inputs};
pub use layout::{Group, Layout, LayoutParams, layout};
pub use number::{Classification, classify, divisors, is_prime};
pub use summary::{Summary, Visualization, visualize};

/// Error returned by core operations when called outside their domain.
///
/// Shells validate input before calling the core, so in practice this only
/// surfaces for `0` arguments or degenerate [`LayoutParams`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
