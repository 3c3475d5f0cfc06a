// ============================================================================
// APP - Root component: owns the state and the #app mount point
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::{current_route, Route};
use crate::services::{CookieTokenStore, MemoryTokenStore, TokenStore};
use crate::state::{AppState, AuthContext};
use crate::utils::ROOT_ELEMENT_ID;
use crate::views::{dashboard_viewmodel, render_dashboard, render_login, render_register};

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(ROOT_ELEMENT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let store: Rc<dyn TokenStore> = match CookieTokenStore::new() {
            Some(store) => Rc::new(store),
            None => {
                log::warn!("⚠️ [APP] Cookies unavailable, token kept in memory");
                Rc::new(MemoryTokenStore::new())
            }
        };
        let state = AppState::new(AuthContext::new(store), current_route());

        // Coalesce bursts of updates into one render on the next tick
        state.subscribe_to_changes(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        let app = Self { state, root };
        if app.state.route() == Route::Dashboard {
            app.load_dashboard();
        }
        Ok(app)
    }

    /// Rebuild the view for the current route
    pub fn render(&self) -> Result<(), JsValue> {
        let route = self.state.route();
        log::debug!("🎬 [APP] render {}", route.path());

        let view = match route {
            Route::Login => render_login(&self.state)?,
            Route::Register => render_register()?,
            Route::Dashboard => render_dashboard(&self.state)?,
        };

        set_inner_html(&self.root, "");
        append_child(&self.root, &view)
    }

    /// Follow the browser location after pushState or back/forward
    pub fn sync_route(&self) {
        let route = current_route();
        if self.state.enter_route(route) {
            self.load_dashboard();
        }
    }

    fn load_dashboard(&self) {
        let vm = dashboard_viewmodel(&self.state);
        spawn_local(async move {
            vm.load().await;
        });
    }
}
