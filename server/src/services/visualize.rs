//! Runs the grouping core for the web page and API.

use grouping::{GroupingError, InputError, InputPolicy, Inputs, LayoutParams, Visualization, parse_inputs};
use tracing::{debug, warn};

use crate::config::ServerConfig;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VisualizeError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Core(#[from] GroupingError),
}

/// Layout parameters for the web canvas: fixed width, empty slots drawn.
#[must_use]
pub fn web_params(config: &ServerConfig) -> LayoutParams {
    LayoutParams::default().with_canvas_width(config.canvas_width).with_placeholders(true)
}

/// Validate raw form/query text under the web input policy.
///
/// # Errors
///
/// Returns [`VisualizeError::Input`] with the user-facing reason.
pub fn validate(number: &str, group_size: &str) -> Result<Inputs, VisualizeError> {
    parse_inputs(number, group_size, InputPolicy::web()).map_err(|err| {
        warn!(number, group_size, error = %err, "rejected visualization input");
        VisualizeError::Input(err)
    })
}

/// Build the summary and layout for already-validated inputs.
///
/// # Errors
///
/// Returns [`VisualizeError::Core`] if the core rejects the arguments.
pub fn run(config: &ServerConfig, inputs: Inputs) -> Result<Visualization, VisualizeError> {
    let viz = grouping::visualize(inputs, &web_params(config))?;
    debug!(
        number = inputs.number,
        group_size = inputs.group_size,
        groups = viz.layout.groups.len(),
        divisible = viz.summary.divisible,
        "visualized"
    );
    Ok(viz)
}

/// [`validate`] then [`run`].
///
/// # Errors
///
/// See [`validate`] and [`run`].
pub fn from_raw(config: &ServerConfig, number: &str, group_size: &str) -> Result<Visualization, VisualizeError> {
    let inputs = validate(number, group_size)?;
    run(config, inputs)
}

#[cfg(test)]
#[path = "visualize_test.rs"]
mod tests;
