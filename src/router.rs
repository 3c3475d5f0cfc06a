// ============================================================================
// ROUTER - Three-route path switch over the History API
// ============================================================================

use wasm_bindgen::JsValue;

use crate::utils::ROUTE_CHANGE_EVENT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    /// Unknown paths fall back to the login view
    pub fn from_path(path: &str) -> Self {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/dashboard" => Route::Dashboard,
            "/register" => Route::Register,
            _ => Route::Login,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Route changes requested by viewmodels
pub trait Navigator {
    /// In-app transition, no page reload
    fn navigate(&self, route: Route);

    /// Full page load of `route`
    fn hard_redirect(&self, route: Route);
}

/// [`Navigator`] backed by `window.history` / `window.location`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        if let Err(e) = push_route(route) {
            log::error!("❌ [ROUTER] Navigation to {} failed: {:?}", route.path(), e);
        }
    }

    fn hard_redirect(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            log::error!("❌ [ROUTER] No window for redirect to {}", route.path());
            return;
        };
        if let Err(e) = window.location().set_href(route.path()) {
            log::error!("❌ [ROUTER] Redirect to {} failed: {:?}", route.path(), e);
        }
    }
}

fn push_route(route: Route) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(route.path()))?;
    log::info!("🧭 [ROUTER] -> {}", route.path());

    // pushState fires no event; the app listens for this one
    let event = web_sys::Event::new(ROUTE_CHANGE_EVENT)?;
    window.dispatch_event(&event)?;
    Ok(())
}

/// Route for the browser's current location
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Login)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("/register?ref=login"), Route::Register);
        assert_eq!(Route::from_path("/login#top"), Route::Login);
    }

    #[test]
    fn unknown_paths_fall_back_to_login() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/dashboards"), Route::Login);
    }

    #[test]
    fn paths_parse_back_to_their_route() {
        for route in [Route::Login, Route::Register, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
