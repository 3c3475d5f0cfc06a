// ============================================================================
// LOGIN STATE - Login form fields
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::ChangeNotifier;
use crate::viewmodels::LoginError;

#[derive(Clone)]
pub struct LoginState {
    pub username: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
    pub loading: Rc<RefCell<bool>>,
    /// Last failure. Kept for diagnostics, not rendered.
    pub last_error: Rc<RefCell<Option<LoginError>>>,
    notifier: ChangeNotifier,
}

impl LoginState {
    pub fn new(notifier: ChangeNotifier) -> Self {
        Self {
            username: Rc::new(RefCell::new(String::new())),
            password: Rc::new(RefCell::new(String::new())),
            loading: Rc::new(RefCell::new(false)),
            last_error: Rc::new(RefCell::new(None)),
            notifier,
        }
    }

    // Field setters do not notify: the input already shows the value.

    pub fn set_username(&self, username: String) {
        *self.username.borrow_mut() = username;
    }

    pub fn set_password(&self, password: String) {
        *self.password.borrow_mut() = password;
    }

    pub fn credentials(&self) -> (String, String) {
        (self.username.borrow().clone(), self.password.borrow().clone())
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
        self.notifier.notify();
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_last_error(&self, error: Option<LoginError>) {
        *self.last_error.borrow_mut() = error;
    }

    /// Forget typed credentials, e.g. after a successful login
    pub fn reset(&self) {
        self.username.borrow_mut().clear();
        self.password.borrow_mut().clear();
        *self.last_error.borrow_mut() = None;
        *self.loading.borrow_mut() = false;
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new(ChangeNotifier::new())
    }
}
