//! Layout engine: arranges `n` tokens into bordered groups of `group_size`.
//!
//! Tokens are laid out left to right, wrapping inside a group every
//! `tokens_per_row` tokens. Groups follow each other along a visual row and
//! the row wraps once the cursor passes `canvas_width` minus one full row of
//! tokens. The cursor is an explicit [`Cursor`] value, and the canvas width is
//! a parameter, so the same inputs always give the same layout.

use serde::{Deserialize, Serialize};

use crate::GroupingError;
use crate::consts::{CANVAS_MARGIN, TOKEN_PADDING, TOKEN_RADIUS, TOKENS_PER_ROW, WEB_CANVAS_WIDTH};
use crate::geometry::{Extent, Point, Rect};

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Largest group size for which empty slots are drawn.
pub const MAX_PLACEHOLDER_GROUP_SIZE: u32 = 100;

/// Tunables for [`layout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub radius: f64,
    pub padding: f64,
    pub tokens_per_row: u32,
    /// Width used for row wrapping and reported as the extent width.
    pub canvas_width: f64,
    pub margin: f64,
    /// Emit the empty slots of an incomplete group as placeholders.
    pub placeholders: bool,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            radius: TOKEN_RADIUS,
            padding: TOKEN_PADDING,
            tokens_per_row: TOKENS_PER_ROW,
            canvas_width: WEB_CANVAS_WIDTH,
            margin: CANVAS_MARGIN,
            placeholders: false,
        }
    }
}

impl LayoutParams {
    #[must_use]
    pub fn with_canvas_width(mut self, canvas_width: f64) -> Self {
        self.canvas_width = canvas_width;
        self
    }

    #[must_use]
    pub fn with_placeholders(mut self, placeholders: bool) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Centre-to-centre distance between neighbouring tokens.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.radius * 2.0 + self.padding
    }

    /// x beyond which the next group starts a new visual row.
    #[must_use]
    pub fn wrap_threshold(&self) -> f64 {
        self.canvas_width - f64::from(self.tokens_per_row) * self.step()
    }
}

/// A run of up to `group_size` consecutive tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub tokens: Vec<Point>,
    /// Empty slots of an incomplete group; empty unless placeholders are on.
    pub placeholders: Vec<Point>,
    pub bounds: Rect,
    pub complete: bool,
}

impl Group {
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Output of [`layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub groups: Vec<Group>,
    pub extent: Extent,
    pub radius: f64,
}

impl Layout {
    /// Total tokens across all groups.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    #[must_use]
    pub fn group_sizes(&self) -> Vec<usize> {
        self.groups.iter().map(Group::len).collect()
    }
}

/// Drawing cursor threaded through the layout loop.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cursor {
    x: f64,
    y: f64,
    /// Lowest box edge on the current visual row.
    row_bottom: f64,
}

impl Cursor {
    fn start(params: &LayoutParams) -> Self {
        Self { x: params.margin, y: params.margin, row_bottom: params.margin }
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Step to the next slot inside a group whose first slot is at `origin`.
    fn advance_slot(&mut self, placed: u32, origin: Point, params: &LayoutParams) {
        if placed % params.tokens_per_row == 0 {
            self.x = origin.x;
            self.y += params.step();
        } else {
            self.x += params.step();
        }
    }

    /// Move past a finished group, wrapping to a new visual row if needed.
    fn advance_group(&mut self, origin: Point, bounds: Rect, params: &LayoutParams) {
        self.row_bottom = self.row_bottom.max(bounds.max_y);
        self.x = bounds.max_x + params.padding * 2.0;
        self.y = origin.y;

        if self.x > params.wrap_threshold() {
            self.x = params.margin;
            self.y = self.row_bottom + params.padding * 2.0;
            self.row_bottom = self.y;
        }
    }
}

/// Lay out `n` tokens in groups of `group_size`.
///
/// Every group except possibly the last holds exactly `group_size` tokens; the
/// last is incomplete iff `n % group_size != 0`.
///
/// # Errors
///
/// Returns [`GroupingError::InvalidArgument`] when `n` or `group_size` is zero,
/// when `params.tokens_per_row` is zero, when `params.canvas_width` is not a
/// positive finite number, or when placeholders are requested for
/// a group size above [`MAX_PLACEHOLDER_GROUP_SIZE`].
pub fn layout(n: u32, group_size: u32, params: &LayoutParams) -> Result<Layout, GroupingError> {
    if n == 0 {
        return Err(GroupingError::InvalidArgument("number must be at least 1".into()));
    }
    if group_size == 0 {
        return Err(GroupingError::InvalidArgument("group size must be at least 1".into()));
    }
    if params.tokens_per_row == 0 {
        return Err(GroupingError::InvalidArgument("tokens_per_row must be at least 1".into()));
    }
    if !(params.canvas_width.is_finite() && params.canvas_width > 0.0) {
        return Err(GroupingError::InvalidArgument(format!(
            "canvas width must be positive, got {}",
            params.canvas_width
        )));
    }
    if params.placeholders && group_size > MAX_PLACEHOLDER_GROUP_SIZE {
        return Err(GroupingError::InvalidArgument(format!(
            "placeholders need a group size of at most {MAX_PLACEHOLDER_GROUP_SIZE}"
        )));
    }

    let mut cursor = Cursor::start(params);
    let mut groups = Vec::with_capacity(n.div_ceil(group_size) as usize);
    let mut emitted = 0;

    while emitted < n {
        let count = group_size.min(n - emitted);
        let origin = cursor.position();
        let group = place_group(&mut cursor, count, group_size, params);
        cursor.advance_group(origin, group.bounds, params);
        emitted += count;
        groups.push(group);
    }

    let bottom = groups.iter().map(|g| g.bounds.max_y).fold(params.margin, f64::max);
    let extent = Extent { width: params.canvas_width, height: bottom + params.margin };

    Ok(Layout { groups, extent, radius: params.radius })
}

fn place_group(cursor: &mut Cursor, count: u32, group_size: u32, params: &LayoutParams) -> Group {
    let origin = cursor.position();
    let complete = count == group_size;
    let slots = if params.placeholders { group_size } else { count };

    let mut tokens = Vec::with_capacity(count as usize);
    let mut placeholders = Vec::new();
    let mut bounds = Rect::around(origin, params.radius);

    for i in 0..slots {
        let center = cursor.position();
        if i < count {
            tokens.push(center);
        } else {
            placeholders.push(center);
        }
        bounds = bounds.union(Rect::around(center, params.radius));
        cursor.advance_slot(i + 1, origin, params);
    }

    Group { tokens, placeholders, bounds: bounds.inflate(params.padding), complete }
}
