//! Divisibility and primality report plus the text shells display for it.

use serde::{Deserialize, Serialize};

use crate::GroupingError;
use crate::input::Inputs;
use crate::layout::{Layout, LayoutParams, layout};
use crate::number::{Classification, classify, divisors};
use crate::palette;

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

/// Everything a shell prints about one `(number, group_size)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub number: u32,
    pub group_size: u32,
    pub divisible: bool,
    /// Complete groups.
    pub quotient: u32,
    /// Tokens in the trailing incomplete group (0 when divisible).
    pub remainder: u32,
    pub classification: Classification,
    pub divisors: Vec<u32>,
}

impl Summary {
    /// # Errors
    ///
    /// Returns [`GroupingError::InvalidArgument`] if either input is zero.
    pub fn new(inputs: Inputs) -> Result<Self, GroupingError> {
        let Inputs { number, group_size } = inputs;
        if group_size == 0 {
            return Err(GroupingError::InvalidArgument("group size must be at least 1".into()));
        }
        Ok(Self {
            number,
            group_size,
            divisible: number % group_size == 0,
            quotient: number / group_size,
            remainder: number % group_size,
            classification: classify(number),
            divisors: divisors(number)?,
        })
    }

    #[must_use]
    pub fn divisibility_message(&self) -> String {
        let (n, g) = (self.number, self.group_size);
        if self.divisible {
            format!("Exact division! {n} is divisible by {g}.")
        } else {
            format!("Not an exact division. {n} is not divisible by {g}.")
        }
    }

    #[must_use]
    pub fn divisibility_color(&self) -> &'static str {
        if self.divisible { palette::DIVISIBLE_TEXT } else { palette::NOT_DIVISIBLE_TEXT }
    }

    #[must_use]
    pub fn primality_message(&self) -> String {
        let n = self.number;
        match self.classification {
            Classification::Prime => format!("{n} is a PRIME number"),
            Classification::Composite => format!("{n} is a COMPOSITE number"),
        }
    }

    #[must_use]
    pub fn primality_color(&self) -> &'static str {
        match self.classification {
            Classification::Prime => palette::PRIME_TEXT,
            Classification::Composite => palette::COMPOSITE_TEXT,
        }
    }

    /// Comma-joined divisor list, e.g. `Divisors of 12: 1, 2, 3, 4, 6, 12`.
    #[must_use]
    pub fn divisors_message(&self) -> String {
        let list = self.divisors.iter().map(u32::to_string).collect::<Vec<_>>().join(", ");
        format!("Divisors of {}: {list}", self.number)
    }
}

/// A summary together with the layout to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub summary: Summary,
    pub layout: Layout,
}

/// Run the full core pipeline for validated inputs.
///
/// # Errors
///
/// Propagates [`GroupingError::InvalidArgument`] from [`Summary::new`] or
/// [`layout`].
pub fn visualize(inputs: Inputs, params: &LayoutParams) -> Result<Visualization, GroupingError> {
    let summary = Summary::new(inputs)?;
    let layout = layout(inputs.number, inputs.group_size, params)?;
    Ok(Visualization { summary, layout })
}
