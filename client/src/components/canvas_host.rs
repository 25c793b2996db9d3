//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The host owns the engine once the `<canvas>` mounts. It feeds the two
//! entry fields to `Engine::visualize`, keeps the viewport in step with the
//! element through a `ResizeObserver`, copies the engine's `Panel` into a
//! signal for the labels, and opens [`ErrorDialog`] when a visualization is
//! rejected.

use canvas::panel::{Label, Panel};
use leptos::prelude::*;

use crate::components::error_dialog::ErrorDialog;
use crate::components::visualization::color_style;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::Engine;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::canvas_viewport::sync_viewport;

/// Entry text prefilled when the page loads.
pub const DEFAULT_NUMBER_TEXT: &str = "12";
pub const DEFAULT_GROUP_TEXT: &str = "3";

#[cfg(feature = "hydrate")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Dialog text for a failed engine call. Validation errors arrive as strings.
#[cfg(feature = "hydrate")]
fn dialog_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| "The canvas could not be drawn.".to_owned())
}

#[cfg(feature = "hydrate")]
fn redraw(engine: &Engine) {
    if let Err(e) = engine.render() {
        log::warn!("canvas redraw failed: {e:?}");
    }
}

/// Re-sync and redraw whenever the canvas element changes size.
#[cfg(feature = "hydrate")]
fn observe_resize(canvas: &web_sys::HtmlCanvasElement, engine: SharedEngine, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let cb = Closure::wrap(Box::new(move |_entries: js_sys::Array, _observer: web_sys::ResizeObserver| {
        if let Some(engine) = engine.borrow_mut().as_mut() {
            sync_viewport(engine, &canvas_ref);
            redraw(engine);
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>);

    match web_sys::ResizeObserver::new(cb.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(canvas);
            cb.forget();
        }
        Err(e) => log::warn!("resize observer unavailable: {e:?}"),
    }
}

#[component]
pub fn CanvasHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let number = RwSignal::new(DEFAULT_NUMBER_TEXT.to_owned());
    let group_size = RwSignal::new(DEFAULT_GROUP_TEXT.to_owned());
    let panel = RwSignal::new(Panel::default());
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas.clone());
            sync_viewport(&mut instance, &canvas_ref);
            redraw(&instance);
            *engine.borrow_mut() = Some(instance);
            observe_resize(&canvas, Rc::clone(&engine), canvas_ref);
        });
    }

    let on_submit = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                let mut engine_ref = engine.borrow_mut();
                let Some(engine) = engine_ref.as_mut() else {
                    return;
                };
                sync_viewport(engine, &canvas_ref);
                match engine.visualize(&number.get_untracked(), &group_size.get_untracked()) {
                    Ok(()) => panel.set(engine.panel().clone()),
                    Err(e) => error.set(Some(dialog_message(&e))),
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::SubmitEvent| {}
        }
    };

    view! {
        <form class="canvas-entry" on:submit=on_submit>
            <label>
                "Number: "
                <input
                    type="text"
                    inputmode="numeric"
                    name="number"
                    prop:value=move || number.get()
                    on:input=move |ev| number.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Group size: "
                <input
                    type="text"
                    inputmode="numeric"
                    name="group_size"
                    prop:value=move || group_size.get()
                    on:input=move |ev| group_size.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Visualize grouping"</button>
        </form>
        <canvas class="canvas-host" node_ref=canvas_ref>
            "Your browser does not support canvas."
        </canvas>
        <div class="panel">
            <LabelLine class="message" label=Signal::derive(move || panel.with(|p| p.message.clone()))/>
            <LabelLine class="primality" label=Signal::derive(move || panel.with(|p| p.primality.clone()))/>
            <LabelLine class="divisors" label=Signal::derive(move || panel.with(|p| p.divisors.clone()))/>
        </div>
        <ErrorDialog message=error/>
    }
}

#[component]
fn LabelLine(class: &'static str, label: Signal<Label>) -> impl IntoView {
    view! {
        <p class=class style=move || label.with(|l| color_style(l.color))>
            {move || label.with(|l| l.text.clone())}
        </p>
    }
}
