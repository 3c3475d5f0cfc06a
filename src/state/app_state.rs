// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::router::Route;
use crate::state::{AuthContext, ChangeNotifier, DashboardState, LoginState};

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthContext,
    pub login: LoginState,
    pub dashboard: DashboardState,
    pub route: Rc<RefCell<Route>>,
    notifier: ChangeNotifier,
}

impl AppState {
    pub fn new(auth: AuthContext, route: Route) -> Self {
        let notifier = ChangeNotifier::new();
        Self {
            auth,
            login: LoginState::new(notifier.clone()),
            dashboard: DashboardState::new(notifier.clone()),
            route: Rc::new(RefCell::new(route)),
            notifier,
        }
    }

    pub fn route(&self) -> Route {
        *self.route.borrow()
    }

    /// Switch route, tearing down the dashboard lifetime when leaving it.
    /// Returns true when the dashboard was just entered.
    pub fn enter_route(&self, route: Route) -> bool {
        let previous = self.route();
        if previous == route {
            return false;
        }
        if previous == Route::Dashboard {
            self.dashboard.end_lifetime();
        }
        if previous == Route::Login {
            self.login.reset();
        }
        *self.route.borrow_mut() = route;
        route == Route::Dashboard
    }

    /// Subscribe to any state change (used to schedule re-renders)
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryTokenStore;

    fn state(route: Route) -> AppState {
        AppState::new(AuthContext::new(Rc::new(MemoryTokenStore::new())), route)
    }

    #[test]
    fn entering_dashboard_reports_mount() {
        let state = state(Route::Login);
        assert!(state.enter_route(Route::Dashboard));
        assert!(!state.enter_route(Route::Dashboard));
        assert_eq!(state.route(), Route::Dashboard);
    }

    #[test]
    fn leaving_dashboard_ends_its_lifetime() {
        let state = state(Route::Dashboard);
        let epoch = state.dashboard.epoch();
        state.dashboard.request_delete("b1");

        assert!(!state.enter_route(Route::Login));
        assert!(!state.dashboard.is_current(epoch));
        assert_eq!(state.dashboard.confirmation().pending_id, None);
    }

    #[test]
    fn leaving_login_forgets_typed_password() {
        let state = state(Route::Login);
        state.login.set_username("ana".to_string());
        state.login.set_password("secret".to_string());
        state.enter_route(Route::Register);
        assert_eq!(state.login.credentials(), (String::new(), String::new()));
    }
}
