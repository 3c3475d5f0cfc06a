// ============================================================================
// REACTIVITY - Change notification for re-rendering
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Shared subscriber list. Clones notify the same subscribers.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Call every subscriber. Callbacks may subscribe or notify again.
    pub fn notify(&self) {
        let subscribers: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_subscribers() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            notifier.subscribe(move || hits.set(hits.get() + 1));
        }
        let clone = notifier.clone();
        clone.notify();
        notifier.notify();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn subscriber_may_subscribe_during_notify() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        {
            let inner = notifier.clone();
            let hits = hits.clone();
            notifier.subscribe(move || {
                let hits = hits.clone();
                inner.subscribe(move || hits.set(hits.get() + 1));
            });
        }
        // Added during this pass, so not called yet
        notifier.notify();
        assert_eq!(hits.get(), 0);
        notifier.notify();
        assert_eq!(hits.get(), 1);
    }
}
