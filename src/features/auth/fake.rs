//! In-memory identity bridge for controller and provider tests. Tests keep a
//! clone to emit session notifications and settle sign-in exchanges by hand.

use crate::app_lib::AuthError;
use crate::features::auth::bridge::{IdentityBridge, SessionListener, Subscription};
use crate::features::auth::session::SessionWriter;
use crate::features::auth::state::{AuthContext, AuthProvider, AuthProviderProps, use_auth};
use crate::features::auth::types::{ProviderKind, User};
use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex, PoisonError};

type PendingExchange = oneshot::Sender<Result<User, AuthError>>;

#[derive(Default)]
struct FakeInner {
    listeners: RefCell<Vec<(u64, Rc<dyn Fn(Option<User>)>)>>,
    next_id: Cell<u64>,
    sign_in_calls: RefCell<Vec<ProviderKind>>,
    sign_in_outcome: RefCell<Option<Result<User, AuthError>>>,
    pending: RefCell<VecDeque<PendingExchange>>,
    sign_out_calls: Cell<usize>,
    sign_out_failure: RefCell<Option<AuthError>>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeBridge {
    inner: Rc<FakeInner>,
}

impl FakeBridge {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Delivers a notification to every live listener, like the SDK would.
    pub(crate) fn emit(&self, user: Option<User>) {
        let listeners: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(user.clone());
        }
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Makes every later `sign_in` settle immediately with `outcome`.
    pub(crate) fn settle_sign_in_with(&self, outcome: Result<User, AuthError>) {
        *self.inner.sign_in_outcome.borrow_mut() = Some(outcome);
    }

    /// Settles the oldest exchange still waiting on its popup.
    pub(crate) fn resolve_pending(&self, outcome: Result<User, AuthError>) {
        let sender = self.inner.pending.borrow_mut().pop_front();
        if let Some(sender) = sender {
            let _ = sender.send(outcome);
        }
    }

    pub(crate) fn sign_in_calls(&self) -> Vec<ProviderKind> {
        self.inner.sign_in_calls.borrow().clone()
    }

    pub(crate) fn sign_out_calls(&self) -> usize {
        self.inner.sign_out_calls.get()
    }

    pub(crate) fn fail_sign_out_with(&self, err: AuthError) {
        *self.inner.sign_out_failure.borrow_mut() = Some(err);
    }
}

impl IdentityBridge for FakeBridge {
    fn subscribe(&self, on_change: SessionListener) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::from(on_change)));

        let inner: Weak<FakeInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner
                    .listeners
                    .borrow_mut()
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    fn sign_in(&self, kind: ProviderKind) -> LocalBoxFuture<'static, Result<User, AuthError>> {
        self.inner.sign_in_calls.borrow_mut().push(kind);

        if let Some(outcome) = self.inner.sign_in_outcome.borrow().clone() {
            return Box::pin(future::ready(outcome));
        }

        let (sender, receiver) = oneshot::channel();
        self.inner.pending.borrow_mut().push_back(sender);
        Box::pin(async move { receiver.await.unwrap_or(Err(AuthError::Cancelled)) })
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        self.inner
            .sign_out_calls
            .set(self.inner.sign_out_calls.get() + 1);
        let outcome = match self.inner.sign_out_failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        };
        Box::pin(future::ready(outcome))
    }
}

/// Runs `AuthProvider` under `owner` and returns the context its children see.
pub(crate) fn mount_provider(
    owner: &Owner,
    bridge: &FakeBridge,
    writer: SessionWriter,
) -> AuthContext {
    let slot = Arc::new(Mutex::new(None));
    let captured = Arc::clone(&slot);
    let bridge: Rc<dyn IdentityBridge> = Rc::new(bridge.clone());
    owner.with(move || {
        let _view = AuthProvider(AuthProviderProps {
            writer,
            bridge,
            children: Box::new(move || {
                *captured.lock().unwrap_or_else(PoisonError::into_inner) = Some(use_auth());
                ().into_any()
            }),
        });
    });
    let context = slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    context.expect("AuthProvider did not render its children")
}
