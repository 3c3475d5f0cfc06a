// ============================================================================
// DASHBOARD VIEW
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, on_change, on_click, on_input, on_submit, read_image_file, selected_file,
    ElementBuilder,
};
use crate::models::Blog;
use crate::services::ApiClient;
use crate::state::{AppState, DashboardState, FormDraft, StatusMessage};
use crate::viewmodels::DashboardViewModel;
use crate::views::dashboard_viewmodel;

type Vm = Rc<DashboardViewModel<ApiClient>>;

/// Render the whole dashboard from `state.dashboard`
pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    log::debug!("🎬 [DASHBOARD] render_dashboard()");

    let vm: Vm = Rc::new(dashboard_viewmodel(state));
    let dashboard = state.dashboard.clone();

    // CSS hook: idle / editing / confirming-delete / submitting
    let container = ElementBuilder::new("div")?
        .class("dashboard")
        .attr("data-mode", dashboard.mode().as_str())?
        .build();

    append_child(&container, &render_header(&vm, &dashboard)?)?;

    let welcome = ElementBuilder::new("h1")?
        .text("Welcome to Your Dashboard")
        .build();
    append_child(&container, &welcome)?;

    append_child(&container, &render_form(&vm, &dashboard)?)?;

    let list_title = ElementBuilder::new("h2")?.text("Blog List").build();
    append_child(&container, &list_title)?;
    append_child(&container, &render_blog_table(&vm, &dashboard.blogs())?)?;

    if dashboard.confirmation().visible {
        append_child(&container, &render_delete_confirmation(&vm)?)?;
    }

    Ok(container)
}

fn render_header(vm: &Vm, dashboard: &DashboardState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("dashboard-header").build();

    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("logout-button")
        .text("Logout")
        .build();
    {
        let vm = vm.clone();
        on_click(&logout_btn, move |_| vm.logout())?;
    }
    append_child(&header, &logout_btn)?;

    if let Some(user) = dashboard.user() {
        if let Some(url) = user.avatar_url() {
            let avatar = ElementBuilder::new("img")?
                .class("user-image")
                .attr("src", url)?
                .attr("alt", "User avatar")?
                .build();
            append_child(&header, &avatar)?;
        }
    }

    Ok(header)
}

fn render_form(vm: &Vm, dashboard: &DashboardState) -> Result<Element, JsValue> {
    let draft = dashboard.draft();
    let form = ElementBuilder::new("form")?.class("blog-form").build();

    let title_input = ElementBuilder::new("input")?
        .attr("type", "text")?
        .attr("name", "title")?
        .attr("placeholder", "Title")?
        .attr("value", &draft.title)?
        .flag("required", true)?
        .build();
    {
        let dashboard = dashboard.clone();
        on_input(&title_input, move |value| dashboard.set_title(value))?;
    }
    append_child(&form, &title_input)?;

    let description_input = ElementBuilder::new("textarea")?
        .attr("name", "description")?
        .attr("placeholder", "Description")?
        .flag("required", true)?
        .text(&draft.description)
        .build();
    {
        let dashboard = dashboard.clone();
        on_input(&description_input, move |value| dashboard.set_description(value))?;
    }
    append_child(&form, &description_input)?;

    append_child(&form, &render_image_picker(dashboard, &draft)?)?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .flag("disabled", dashboard.is_submitting())?
        .text(draft.submit_label())
        .build();
    append_child(&form, &submit_btn)?;

    if draft.is_editing() {
        let cancel_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("cancel-button")
            .text("Cancel")
            .build();
        let vm = vm.clone();
        on_click(&cancel_btn, move |_| vm.cancel_edit())?;
        append_child(&form, &cancel_btn)?;
    }

    if let Some(message) = dashboard.message() {
        append_child(&form, &render_message(&message)?)?;
    }

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                if let Err(e) = vm.submit().await {
                    log::warn!("⚠️ [DASHBOARD] Submit not completed: {}", e);
                }
            });
        })?;
    }

    Ok(form)
}

/// File input plus the name of the image already held by the draft; the
/// input itself comes back empty after each render.
fn render_image_picker(dashboard: &DashboardState, draft: &FormDraft) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?.class("image-picker").build();

    let file_input = ElementBuilder::new("input")?
        .attr("type", "file")?
        .attr("name", "image")?
        .attr("accept", "image/*")?
        .build();
    {
        let dashboard = dashboard.clone();
        on_change(&file_input, move |event| {
            let Some(file) = selected_file(&event) else {
                dashboard.set_image(None);
                return;
            };
            let dashboard = dashboard.clone();
            spawn_local(async move {
                match read_image_file(&file).await {
                    Ok(upload) => {
                        log::debug!("[DASHBOARD] Image picked: {} ({} bytes)", upload.name, upload.size());
                        dashboard.set_image(Some(upload));
                    }
                    Err(e) => log::error!("❌ [DASHBOARD] Could not read image: {:?}", e),
                }
            });
        })?;
    }
    append_child(&wrapper, &file_input)?;

    if let Some(image) = &draft.image {
        let caption = ElementBuilder::new("span")?
            .class("selected-image")
            .text(&image.name)
            .build();
        append_child(&wrapper, &caption)?;
    }

    Ok(wrapper)
}

fn render_message(message: &StatusMessage) -> Result<Element, JsValue> {
    let class = if message.is_failure() {
        "message error"
    } else {
        "message success"
    };
    Ok(ElementBuilder::new("p")?
        .class(class)
        .text(message.text())
        .build())
}

fn render_blog_table(vm: &Vm, blogs: &[Blog]) -> Result<Element, JsValue> {
    let table = ElementBuilder::new("table")?.class("blog-list").build();

    let head = ElementBuilder::new("thead")?.build();
    let head_row = ElementBuilder::new("tr")?.build();
    for label in ["Title", "Image", "Description", "Actions"] {
        let th = ElementBuilder::new("th")?.text(label).build();
        append_child(&head_row, &th)?;
    }
    append_child(&head, &head_row)?;
    append_child(&table, &head)?;

    let body = ElementBuilder::new("tbody")?.build();
    for blog in blogs {
        append_child(&body, &render_blog_row(vm, blog)?)?;
    }
    append_child(&table, &body)?;

    Ok(table)
}

fn render_blog_row(vm: &Vm, blog: &Blog) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.build();

    let title = ElementBuilder::new("td")?.text(&blog.title).build();
    append_child(&row, &title)?;

    let image_cell = ElementBuilder::new("td")?.build();
    match blog.image.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => {
            let img = ElementBuilder::new("img")?
                .class("blog-image")
                .attr("src", url)?
                .attr("alt", &blog.title)?
                .build();
            append_child(&image_cell, &img)?;
        }
        None => {
            image_cell.set_text_content(Some("No image"));
        }
    }
    append_child(&row, &image_cell)?;

    let description = ElementBuilder::new("td")?.text(&blog.description).build();
    append_child(&row, &description)?;

    let actions = ElementBuilder::new("td")?.class("actions").build();

    let edit_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("edit-button")
        .text("Edit")
        .build();
    {
        let vm = vm.clone();
        let blog = blog.clone();
        on_click(&edit_btn, move |_| vm.begin_edit(&blog))?;
    }
    append_child(&actions, &edit_btn)?;

    let delete_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("delete-button")
        .text("Delete")
        .build();
    {
        let vm = vm.clone();
        let id = blog.id.clone();
        on_click(&delete_btn, move |_| vm.request_delete(&id))?;
    }
    append_child(&actions, &delete_btn)?;

    append_child(&row, &actions)?;
    Ok(row)
}

fn render_delete_confirmation(vm: &Vm) -> Result<Element, JsValue> {
    let dialog = ElementBuilder::new("div")?
        .class("delete-confirmation")
        .build();

    let prompt = ElementBuilder::new("p")?
        .text("Are you sure you want to delete this blog?")
        .build();
    append_child(&dialog, &prompt)?;

    let yes_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("confirm-button")
        .text("Yes")
        .build();
    {
        let vm = vm.clone();
        on_click(&yes_btn, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                if let Err(e) = vm.confirm_delete().await {
                    log::warn!("⚠️ [DASHBOARD] Delete not completed: {}", e);
                }
            });
        })?;
    }
    append_child(&dialog, &yes_btn)?;

    let no_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("cancel-button")
        .text("No")
        .build();
    {
        let vm = vm.clone();
        on_click(&no_btn, move |_| vm.cancel_delete())?;
    }
    append_child(&dialog, &no_btn)?;

    Ok(dialog)
}
