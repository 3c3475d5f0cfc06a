// ============================================================================
// LOGIN VIEWMODEL - Credentials -> access token -> dashboard
// ============================================================================
// Failures are logged only; the login view shows no error text.
// ============================================================================

use std::rc::Rc;

use thiserror::Error;

use crate::models::LoginRequest;
use crate::router::{Navigator, Route};
use crate::services::{ApiError, BlogApi};
use crate::state::{AuthContext, LoginState};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Login rejected: {0}")]
    Rejected(String),

    #[error("Login response carried no access token")]
    MissingToken,

    #[error("Could not store access token: {0}")]
    Storage(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct LoginViewModel<A: BlogApi> {
    api: Rc<A>,
    auth: AuthContext,
    navigator: Rc<dyn Navigator>,
}

impl<A: BlogApi> LoginViewModel<A> {
    pub fn new(api: Rc<A>, auth: AuthContext, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            api,
            auth,
            navigator,
        }
    }

    /// Form submit: runs [`Self::login`] with the typed credentials,
    /// tracking the loading flag and remembering the failure
    pub async fn submit(&self, state: &LoginState) -> Result<(), LoginError> {
        if state.is_loading() {
            log::debug!("[LOGIN] Submit ignored, request already in flight");
            return Ok(());
        }

        let (username, password) = state.credentials();
        state.set_last_error(None);
        state.set_loading(true);

        let result = self.login(&username, &password).await;

        state.set_loading(false);
        if let Err(e) = &result {
            log::error!("❌ [LOGIN] Login failed: {}", e);
            state.set_last_error(Some(e.clone()));
        }
        result
    }

    /// Exchange credentials for a token, store it and open the dashboard
    pub async fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        // Same rule as the form's `required`: whitespace is a value
        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await?;
        log::info!("🔐 [LOGIN] Login response: success={}", response.success);

        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| "Login failed".to_string());
            return Err(LoginError::Rejected(message));
        }

        let token = response.access_token().ok_or(LoginError::MissingToken)?;
        self.auth.set_token(token).map_err(LoginError::Storage)?;

        log::info!("✅ [LOGIN] Logged in as {}", username);
        self.navigator.navigate(Route::Dashboard);
        Ok(())
    }

    /// Secondary action; no request
    pub fn go_to_register(&self) {
        self.navigator.navigate(Route::Register);
    }
}
