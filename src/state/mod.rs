// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + notifications
// ============================================================================

pub mod reactivity;
pub mod auth_context;
pub mod login_state;
pub mod dashboard_state;
pub mod app_state;

pub use reactivity::*;
pub use auth_context::*;
pub use login_state::*;
pub use dashboard_state::*;
pub use app_state::*;
