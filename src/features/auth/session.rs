//! Last-known session register. The store is created once at startup and
//! injected into the auth provider; reads are open to anyone holding a
//! `SessionStore`, writes require the single `SessionWriter` capability handed
//! to the provider.

use crate::features::auth::types::User;
use std::sync::{Arc, PoisonError, RwLock};

/// Read handle over the session register.
#[derive(Clone, Debug)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<User>>>,
}

/// Write capability for the session register.
#[derive(Debug)]
pub struct SessionWriter {
    inner: Arc<RwLock<Option<User>>>,
}

/// Creates an empty register and its writer.
pub fn register() -> (SessionStore, SessionWriter) {
    let inner = Arc::new(RwLock::new(None));
    let writer = SessionWriter {
        inner: Arc::clone(&inner),
    };
    (SessionStore { inner }, writer)
}

impl SessionStore {
    pub fn user(&self) -> Option<User> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionWriter {
    /// Overwrites the held session; no merging.
    pub fn set_user(&self, user: Option<User>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = user;
    }

    pub fn reader(&self) -> SessionStore {
        SessionStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let (store, _writer) = register();
        assert_eq!(store.user(), None);
    }

    #[test]
    fn writer_overwrites_and_every_reader_sees_it() {
        let (store, writer) = register();
        let other = writer.reader();

        writer.set_user(Some(User::new("first")));
        assert_eq!(store.user(), Some(User::new("first")));

        writer.set_user(Some(User::new("second")));
        assert_eq!(other.user(), Some(User::new("second")));

        writer.set_user(None);
        assert_eq!(store.user(), None);
        assert_eq!(other.user(), None);
    }

    #[test]
    fn separate_stores_do_not_share_state() {
        let (first, first_writer) = register();
        let (second, _second_writer) = register();

        first_writer.set_user(Some(User::new("only-first")));

        assert_eq!(first.user(), Some(User::new("only-first")));
        assert_eq!(second.user(), None);
    }
}
