// ============================================================================
// VIEWS - Functions that build DOM from state (no business logic)
// ============================================================================

pub mod login;
pub mod register;
pub mod dashboard;

pub use login::render_login;
pub use register::render_register;
pub use dashboard::render_dashboard;

use std::rc::Rc;

use crate::router::BrowserNavigator;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::{DashboardViewModel, LoginViewModel, RegisterViewModel};

/// Login viewmodel wired to the real backend and browser history
pub(crate) fn login_viewmodel(state: &AppState) -> LoginViewModel<ApiClient> {
    LoginViewModel::new(
        Rc::new(ApiClient::new()),
        state.auth.clone(),
        Rc::new(BrowserNavigator),
    )
}

pub(crate) fn register_viewmodel() -> RegisterViewModel {
    RegisterViewModel::new(Rc::new(BrowserNavigator))
}

pub(crate) fn dashboard_viewmodel(state: &AppState) -> DashboardViewModel<ApiClient> {
    DashboardViewModel::new(
        Rc::new(ApiClient::new()),
        state.auth.clone(),
        Rc::new(BrowserNavigator),
        state.dashboard.clone(),
    )
}
