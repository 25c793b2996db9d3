use grouping::Summary;
use grouping::palette;

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Prompt shown before the first visualization.
pub const IDLE_MESSAGE: &str = "Enter a number and a group size to begin.";

/// A line of text and the colour to draw it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub color: &'static str,
}

impl Label {
    fn new(text: impl Into<String>, color: &'static str) -> Self {
        Self { text: text.into(), color }
    }

    fn empty() -> Self {
        Self::new("", palette::NEUTRAL_TEXT)
    }
}

/// The three labels under the canvas: divisibility, primality, divisors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub message: Label,
    pub primality: Label,
    pub divisors: Label,
}

impl Default for Panel {
    fn default() -> Self {
        Self { message: Label::new(IDLE_MESSAGE, palette::NEUTRAL_TEXT), primality: Label::empty(), divisors: Label::empty() }
    }
}

impl Panel {
    /// Labels for a finished visualization. The canvas view always shows the
    /// primality summary.
    #[must_use]
    pub fn from_summary(summary: &Summary) -> Self {
        Self {
            message: Label::new(summary.divisibility_message(), summary.divisibility_color()),
            primality: Label::new(summary.primality_message(), summary.primality_color()),
            divisors: Label::new(summary.divisors_message(), palette::NEUTRAL_TEXT),
        }
    }
}
