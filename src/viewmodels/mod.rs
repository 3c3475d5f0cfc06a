pub mod login_viewmodel;
pub mod dashboard_viewmodel;
pub mod register_viewmodel;

pub use login_viewmodel::{LoginError, LoginViewModel};
pub use dashboard_viewmodel::{DashboardViewModel, DeleteOutcome, SubmitError, SubmitOutcome};
pub use register_viewmodel::RegisterViewModel;
