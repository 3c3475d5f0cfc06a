// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, on_input, on_submit, ElementBuilder};
use crate::services::ApiClient;
use crate::state::{AppState, LoginState};
use crate::viewmodels::LoginViewModel;
use crate::views::login_viewmodel;

/// Render the login form
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    let vm = Rc::new(login_viewmodel(state));
    let login = state.login.clone();
    let (username, password) = login.credentials();

    let form = ElementBuilder::new("form")?.class("login").build();

    let title = ElementBuilder::new("h2")?.text("Login").build();
    append_child(&form, &title)?;

    let username_input = text_field("text", "username", "Username", &username)?;
    {
        let login = login.clone();
        on_input(&username_input, move |value| login.set_username(value))?;
    }
    append_child(&form, &username_input)?;

    let password_input = text_field("password", "password", "Password", &password)?;
    {
        let login = login.clone();
        on_input(&password_input, move |value| login.set_password(value))?;
    }
    append_child(&form, &password_input)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .flag("disabled", login.is_loading())?
        .text("Login")
        .build();
    append_child(&form, &submit_btn)?;

    let register_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("register-button")
        .text("Register")
        .build();
    {
        let vm = vm.clone();
        on_click(&register_btn, move |_| vm.go_to_register())?;
    }
    append_child(&form, &register_btn)?;

    on_submit(&form, move || submit(vm.clone(), login.clone()))?;

    Ok(form)
}

fn submit(vm: Rc<LoginViewModel<ApiClient>>, login: LoginState) {
    spawn_local(async move {
        // Failures stay on this view; they are logged and kept in LoginState
        if vm.submit(&login).await.is_ok() {
            log::debug!("[LOGIN] Submit finished");
        }
    });
}

fn text_field(kind: &str, name: &str, placeholder: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .attr("type", kind)?
        .attr("name", name)?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .flag("required", true)?
        .build())
}
