use grouping::{GroupingError, InputError, InputPolicy, Inputs, LayoutParams, Visualization, parse_inputs};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::panel::Panel;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Errors surfaced to the host, which shows them in a dialog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Core(#[from] GroupingError),
}

/// What is currently drawn: the inputs that produced it and their layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub inputs: Inputs,
    pub visualization: Visualization,
}

/// Core engine state: everything that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCore {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    panel: Panel,
    scene: Option<Scene>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self { viewport_width: 0.0, viewport_height: 0.0, dpr: 1.0, panel: Panel::default(), scene: None }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout parameters for the current viewport. The canvas view never
    /// draws placeholder slots.
    #[must_use]
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams::default().with_canvas_width(self.viewport_width)
    }

    // --- Viewport ---

    /// Update viewport dimensions. An existing scene is laid out again
    /// against the new width.
    ///
    /// # Errors
    ///
    /// Returns the layout error when the scene cannot be laid out at the new
    /// width. The dimensions are stored anyway and the scene keeps its
    /// previous layout.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), ShellError> {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;

        let params = self.layout_params();
        if let Some(scene) = self.scene.as_mut() {
            scene.visualization = grouping::visualize(scene.inputs, &params)?;
        }
        Ok(())
    }

    // --- Data inputs ---

    /// Validate the raw entry text and lay out a new scene.
    ///
    /// # Errors
    ///
    /// Returns the validation or core error. The previous scene and labels
    /// are left untouched so the canvas keeps showing them behind the dialog.
    pub fn visualize(&mut self, number_raw: &str, group_raw: &str) -> Result<&Scene, ShellError> {
        let inputs = parse_inputs(number_raw, group_raw, InputPolicy::unbounded())?;
        let visualization = grouping::visualize(inputs, &self.layout_params())?;

        self.panel = Panel::from_summary(&visualization.summary);
        Ok(&*self.scene.insert(Scene { inputs, visualization }))
    }

    // --- Queries ---

    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Height the canvas needs to show the whole scene, never less than the
    /// viewport.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.scene
            .as_ref()
            .map_or(self.viewport_height, |scene| scene.visualization.layout.extent.height.max(self.viewport_height))
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Update viewport dimensions and resize the backing store to match.
    ///
    /// # Errors
    ///
    /// Returns the relayout error message. The backing store is resized and
    /// the previous scene stays drawable.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        let relaid = self.core.set_viewport(width_css, height_css, dpr);
        self.resize_backing_store();
        relaid.map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Visualize the raw entry text and redraw on success.
    ///
    /// # Errors
    ///
    /// Returns the error message for the host dialog, or the `JsValue` from a
    /// failed draw.
    pub fn visualize(&mut self, number_raw: &str, group_raw: &str) -> Result<(), JsValue> {
        self.core.visualize(number_raw, group_raw).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.resize_backing_store();
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        let layout = self.core.scene().map(|scene| &scene.visualization.layout);
        render::draw(&ctx, layout, self.core.viewport_width, self.core.content_height(), self.core.dpr)
    }

    #[must_use]
    pub fn panel(&self) -> &Panel {
        self.core.panel()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize_backing_store(&self) {
        let dpr = self.core.dpr;
        self.canvas.set_width((self.core.viewport_width * dpr).round().max(0.0) as u32);
        self.canvas.set_height((self.core.content_height() * dpr).round().max(0.0) as u32);
    }
}
