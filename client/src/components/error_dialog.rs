//! Modal dialog for a rejected visualization.

use leptos::prelude::*;

/// Dialog shown while `message` holds an error. Dismissing it clears the
/// message; the canvas keeps the previous scene.
#[component]
pub fn ErrorDialog(message: RwSignal<Option<String>>) -> impl IntoView {
    let dismiss = move || message.set(None);

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| dismiss()>
                <div class="dialog" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                    <p class="error">{move || message.get().unwrap_or_default()}</p>
                    <button class="btn" on:click=move |_| dismiss()>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
