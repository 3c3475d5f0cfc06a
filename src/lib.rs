// ============================================================================
// BLOG DASHBOARD - FRONTEND MVVM (PURE RUST / WASM)
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: UI flows over the API and state
// - Services: API communication and token storage only
// - State: Rc<RefCell> state with change notification
// - Models: structures shared with the backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod router;
mod dom;
mod views;
pub mod utils;
mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::dom::on_window_event;
use crate::utils::ROUTE_CHANGE_EVENT;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 [APP] Blog dashboard starting, API at {}", CONFIG.api_base_url());

    let app = App::new()?;
    app.render()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // Registered once: in-app navigation and back/forward
    on_window_event(ROUTE_CHANGE_EVENT, |_| on_location_change())?;
    on_window_event("popstate", |_| on_location_change())?;

    Ok(())
}

fn on_location_change() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            app.sync_route();
        }
    });
    rerender_app();
}

/// Full re-render of the mounted app
pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow() {
        Ok(app) => match app.as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [APP] Render failed: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [APP] Render requested before mount"),
        },
        Err(_) => log::warn!("⚠️ [APP] Render requested while app is busy"),
    });
}
