// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners on elements are leaked with `forget()`: the whole tree is
// replaced on every render and the browser drops listeners with the nodes.
// Window listeners must be registered once, at startup.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement, MouseEvent};

fn listen<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_click<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", move |e: Event| {
        if let Ok(mouse) = e.dyn_into::<MouseEvent>() {
            handler(mouse);
        }
    })
}

/// Input listener receiving the current value of an `<input>` or `<textarea>`
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    listen(element, "input", move |e: Event| {
        if let Some(value) = e.target().and_then(|t| field_value(&t)) {
            handler(value);
        }
    })
}

pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", handler)
}

/// Form submit with the browser's default navigation suppressed.
/// Fires only once the form's `required` constraints pass.
pub fn on_submit<F>(form: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(form, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// Global listener on `window`
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    listen(&window, event_type, handler)
}

fn field_value(target: &EventTarget) -> Option<String> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}
