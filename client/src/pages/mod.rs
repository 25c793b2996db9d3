//! Full-document pages.

pub mod canvas;
pub mod visualizer;

use leptos::prelude::*;

/// Page stylesheet. The summary block is hidden by CSS while its checkbox is
/// unticked, so toggling it takes effect without a round trip.
pub const PAGE_CSS: &str = concat!(
    "body{font-family:Arial,sans-serif;margin:2rem}",
    ".error{color:red}.message{font-size:1.1rem}",
    ".viz:has(#show-summary:not(:checked)) .summary{display:none}",
    ".canvas-host{display:block;width:100%;min-height:480px;border:1px solid #ccc}",
    ".dialog-backdrop{position:fixed;inset:0;background:rgba(0,0,0,.3);display:flex;align-items:center;justify-content:center}",
    ".dialog{background:white;padding:1rem 1.5rem;border-radius:6px;max-width:28rem}",
);

/// `<html>` shell shared by both pages. `head` carries page-specific tags.
#[component]
pub fn Document(title: &'static str, #[prop(optional)] head: Option<AnyView>, children: Children) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <style inner_html=PAGE_CSS></style>
                {head}
            </head>
            <body>{children()}</body>
        </html>
    }
}

/// Render a view to an HTML string under a fresh reactive owner.
pub fn render_to_string<V: IntoView + 'static>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html())
}
