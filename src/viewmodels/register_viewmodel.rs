// ============================================================================
// REGISTER VIEWMODEL - Placeholder page, navigation only
// ============================================================================

use std::rc::Rc;

use crate::router::{Navigator, Route};

pub struct RegisterViewModel {
    navigator: Rc<dyn Navigator>,
}

impl RegisterViewModel {
    pub fn new(navigator: Rc<dyn Navigator>) -> Self {
        Self { navigator }
    }

    /// "Back to login"; no request
    pub fn back_to_login(&self) {
        self.navigator.navigate(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Navigation, RecordingNavigator};

    #[test]
    fn back_link_returns_to_login() {
        let navigator = Rc::new(RecordingNavigator::default());
        let vm = RegisterViewModel::new(navigator.clone());

        vm.back_to_login();

        assert_eq!(navigator.history(), vec![Navigation::Push(Route::Login)]);
    }
}
