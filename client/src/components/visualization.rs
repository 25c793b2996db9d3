//! Divisibility message, inline SVG and the primality summary.

use grouping::{Summary, Visualization, svg};
use leptos::prelude::*;

/// Inline CSS colour for a label.
pub fn color_style(color: &str) -> String {
    format!("color:{color}")
}

/// Result block for one visualization. The summary is always rendered and
/// the page stylesheet hides it while the summary box is unticked.
#[component]
pub fn VisualizationView(viz: Visualization) -> impl IntoView {
    let drawing = svg::render(&viz.layout);
    let summary = viz.summary;

    view! {
        <p class="message" style=color_style(summary.divisibility_color())>{summary.divisibility_message()}</p>
        <div class="canvas" inner_html=drawing></div>
        <hr/>
        <SummaryView summary=summary/>
    }
}

#[component]
fn SummaryView(summary: Summary) -> impl IntoView {
    view! {
        <section class="summary">
            <p class="primality" style=color_style(summary.primality_color())>
                <strong>{summary.primality_message()}</strong>
            </p>
            <p class="divisors">{summary.divisors_message()}</p>
        </section>
    }
}
