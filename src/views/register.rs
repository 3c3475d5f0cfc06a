// ============================================================================
// REGISTER VIEW
// ============================================================================
// Account creation is handled outside this client; the page only points
// back to the login form.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::views::register_viewmodel;

pub fn render_register() -> Result<Element, JsValue> {
    let vm = register_viewmodel();
    let container = ElementBuilder::new("div")?.class("register").build();

    let title = ElementBuilder::new("h2")?.text("Register").build();
    append_child(&container, &title)?;

    let note = ElementBuilder::new("p")?
        .text("Registration is not available here yet.")
        .build();
    append_child(&container, &note)?;

    let back_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("back-button")
        .text("Back to login")
        .build();
    on_click(&back_btn, move |_| vm.back_to_login())?;
    append_child(&container, &back_btn)?;

    Ok(container)
}
