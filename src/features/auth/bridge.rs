//! Seam between the auth controller and the identity provider SDK. The
//! controller only sees this trait; the Firebase binding lives in
//! `firebase.rs` and tests use an in-memory fake.

use crate::app_lib::AuthError;
use crate::features::auth::types::{ProviderKind, User};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::fmt;

/// Callback invoked for every session transition the provider reports.
pub type SessionListener = Box<dyn Fn(Option<User>)>;

/// Identity provider operations used by the auth controller.
pub trait IdentityBridge {
    /// Registers for sign-in, sign-out, expiry and cross-tab session changes.
    fn subscribe(&self, on_change: SessionListener) -> Subscription;

    /// Runs an interactive popup exchange for `kind`.
    fn sign_in(&self, kind: ProviderKind) -> LocalBoxFuture<'static, Result<User, AuthError>>;

    /// Clears the provider session. Succeeds when no session is active.
    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>>;
}

/// Active listener registration. `unsubscribe` is idempotent and runs on drop.
pub struct Subscription {
    teardown: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: RefCell::new(Some(Box::new(teardown))),
        }
    }

    pub fn unsubscribe(&self) {
        let teardown = self.teardown.borrow_mut().take();
        if let Some(teardown) = teardown {
            teardown();
        }
    }

    pub fn is_active(&self) -> bool {
        self.teardown.borrow().is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Subscription;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn unsubscribe_runs_teardown_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));

        assert!(subscription.is_active());
        subscription.unsubscribe();
        subscription.unsubscribe();
        drop(subscription);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn drop_unsubscribes() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        {
            let _subscription = Subscription::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }
}
