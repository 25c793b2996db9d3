//! The canvas page, hydrated in the browser by the `client` WASM bundle.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::pages::Document;

/// Loads the WASM bundle served under `/pkg` and hydrates the body.
pub const HYDRATE_SCRIPT: &str = "import init, { hydrate } from '/pkg/client.js'; init().then(() => hydrate());";

#[component]
pub fn CanvasPage() -> impl IntoView {
    view! {
        <main class="viz viz--canvas">
            <h1>"Interactive Divisibility Visualizer"</h1>
            <p>
                <a href="/">"Back to the form"</a>
            </p>
            <CanvasHost/>
        </main>
    }
}

/// Render the canvas page document with its hydration script.
pub fn render_document() -> String {
    super::render_to_string(|| {
        let head = view! { <script type="module" inner_html=HYDRATE_SCRIPT></script> }.into_any();
        view! {
            <Document title="Divisibility Visualizer: canvas" head=head>
                <CanvasPage/>
            </Document>
        }
    })
}
