// ============================================================================
// AUTH CONTEXT - Access token lifecycle
// ============================================================================
// Set on login, read before every authenticated request, cleared on logout.
// ============================================================================

use std::rc::Rc;

use crate::services::{ApiError, TokenStore};

#[derive(Clone)]
pub struct AuthContext {
    store: Rc<dyn TokenStore>,
}

impl AuthContext {
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Current token, read from the store on every call
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    /// Token for an authenticated request
    pub fn require_token(&self) -> Result<String, ApiError> {
        self.token().ok_or(ApiError::MissingToken)
    }

    pub fn set_token(&self, token: &str) -> Result<(), String> {
        self.store.save(token)?;
        log::info!("🔑 [AUTH] Access token stored");
        Ok(())
    }

    pub fn clear(&self) {
        match self.store.clear() {
            Ok(()) => log::info!("🔑 [AUTH] Access token removed"),
            Err(e) => log::error!("❌ [AUTH] Error removing access token: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryTokenStore;

    #[test]
    fn lifecycle() {
        let auth = AuthContext::new(Rc::new(MemoryTokenStore::new()));
        assert_eq!(auth.token(), None);
        assert_eq!(auth.require_token(), Err(ApiError::MissingToken));

        auth.set_token("tok").unwrap();
        assert_eq!(auth.token().as_deref(), Some("tok"));
        assert_eq!(auth.require_token(), Ok("tok".to_string()));

        auth.clear();
        assert_eq!(auth.token(), None);
    }

    #[test]
    fn reads_through_to_the_store() {
        let store = MemoryTokenStore::new();
        let auth = AuthContext::new(Rc::new(store.clone()));
        store.save("from-elsewhere").unwrap();
        assert_eq!(auth.token().as_deref(), Some("from-elsewhere"));
    }
}
