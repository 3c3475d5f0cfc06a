use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::CONFIG;
use crate::utils::cookies::{expire_cookie, format_cookie, parse_cookie};

/// Persistent home of the access token
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

/// Token kept in a site-wide cookie (`accessToken` by default)
pub struct CookieTokenStore {
    name: String,
    document: HtmlDocument,
}

impl CookieTokenStore {
    /// `None` outside a browser document
    pub fn new() -> Option<Self> {
        Self::with_name(&CONFIG.token_cookie_name)
    }

    pub fn with_name(name: &str) -> Option<Self> {
        let document = web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()?;
        Some(Self {
            name: name.to_string(),
            document,
        })
    }

    fn write(&self, assignment: &str) -> Result<(), String> {
        self.document
            .set_cookie(assignment)
            .map_err(|e| format!("Error writing cookie {}: {:?}", self.name, e))
    }
}

impl TokenStore for CookieTokenStore {
    fn load(&self) -> Option<String> {
        let cookies = self.document.cookie().ok()?;
        parse_cookie(&cookies, &self.name)
    }

    fn save(&self, token: &str) -> Result<(), String> {
        let assignment = format_cookie(&self.name, token)?;
        self.write(&assignment)
    }

    fn clear(&self) -> Result<(), String> {
        self.write(&expire_cookie(&self.name))
    }
}

/// In-memory store; used when cookies are unavailable
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);
        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn memory_store_clones_share_the_token() {
        let store = MemoryTokenStore::new();
        store.save("abc").unwrap();
        let other = store.clone();
        other.clear().unwrap();
        assert_eq!(store.load(), None);
    }
}
