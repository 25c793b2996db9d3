//! The form page: number and group size entry, result and summary.
//!
//! The server builds a [`PageModel`] from the caller's session and renders
//! [`VisualizerPage`] once per request. The page needs no WASM.

use grouping::Visualization;
use grouping::consts::{MAX_NUMBER, MIN_NUMBER, WEB_MAX_GROUP_SIZE};
use leptos::prelude::*;

use crate::components::visualization::VisualizationView;
use crate::pages::Document;

#[cfg(test)]
#[path = "visualizer_test.rs"]
mod visualizer_test;

/// Everything one render of the page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub number: u32,
    pub group_size: u32,
    pub show_summary: bool,
    /// Validation or layout message, shown above the result.
    pub error: Option<String>,
    /// Present once the session has visualized valid inputs.
    pub visualization: Option<Visualization>,
}

#[component]
pub fn VisualizerPage(model: PageModel) -> impl IntoView {
    let PageModel { number, group_size, show_summary, error, visualization } = model;

    view! {
        <Document title="Divisibility Visualizer">
            <main class="viz">
                <h1>"Interactive Divisibility Visualizer"</h1>
                <p>"Explore divisors, primes and composites by grouping tokens."</p>
                <p>
                    <a href="/canvas">"Open the canvas view"</a>
                </p>
                <EntryForm number=number group_size=group_size show_summary=show_summary/>
                {error.map(|message| view! { <p class="error" role="alert">{message}</p> })}
                {visualization.map(|viz| view! { <VisualizationView viz=viz/> })}
            </main>
        </Document>
    }
}

#[component]
fn EntryForm(number: u32, group_size: u32, show_summary: bool) -> impl IntoView {
    view! {
        <form method="post" action="/visualize">
            <label>
                {format!("Enter a number ({MIN_NUMBER}-{MAX_NUMBER}): ")}
                <input
                    type="number"
                    name="number"
                    min=MIN_NUMBER.to_string()
                    max=MAX_NUMBER.to_string()
                    step="1"
                    value=number.to_string()
                />
            </label>
            <label>
                "Group into groups of: "
                <input
                    type="number"
                    name="group_size"
                    min="1"
                    max=WEB_MAX_GROUP_SIZE.to_string()
                    step="1"
                    value=group_size.to_string()
                />
            </label>
            <label>
                <input type="checkbox" id="show-summary" name="summary" value="on" checked=show_summary/>
                " Show summary (prime or composite?)"
            </label>
            <button type="submit">"Visualize grouping"</button>
        </form>
    }
}

/// Render the complete page document.
pub fn render_document(model: PageModel) -> String {
    super::render_to_string(move || view! { <VisualizerPage model=model/> })
}
