//! Session synchronization between the identity bridge, the session store and
//! the published view state.
//!
//! The controller owns the only `SessionWriter`. Every change, whether it comes
//! from a bridge notification or from an explicit sign-in/sign-out, is written
//! to the store first and then published as one `AuthViewState`, so observers
//! never see a fresh user paired with a stale loading flag.
//!
//! `is_initial_loading` starts true unless the store already holds a user and
//! flips to false on the first resolution; it never goes back. After `detach`
//! no further store or view writes happen.

use crate::app_lib::AuthError;
use crate::features::auth::bridge::{IdentityBridge, Subscription};
use crate::features::auth::session::SessionWriter;
use crate::features::auth::types::{ProviderKind, User};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Receives every published snapshot.
pub type ViewSink = Box<dyn Fn(&AuthViewState)>;

/// Snapshot republished to views and route guards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthViewState {
    pub user: Option<User>,
    pub is_initial_loading: bool,
}

impl AuthViewState {
    /// First snapshot for a mount: already resolved when the store has a user.
    pub fn seeded(user: Option<User>) -> Self {
        let is_initial_loading = user.is_none();
        Self {
            user,
            is_initial_loading,
        }
    }

    fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            is_initial_loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Sign-in exchange lifecycle. Only one exchange may run at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExchangePhase {
    Idle,
    Exchanging(ProviderKind),
    Settled,
}

pub struct AuthController {
    bridge: Rc<dyn IdentityBridge>,
    writer: SessionWriter,
    view: RefCell<AuthViewState>,
    sink: ViewSink,
    phase: Cell<ExchangePhase>,
    subscription: RefCell<Option<Subscription>>,
    attached: Cell<bool>,
}

impl AuthController {
    pub fn new(bridge: Rc<dyn IdentityBridge>, writer: SessionWriter, sink: ViewSink) -> Rc<Self> {
        let view = AuthViewState::seeded(writer.reader().user());
        debug!(
            is_initial_loading = view.is_initial_loading,
            "auth controller created"
        );
        Rc::new(Self {
            bridge,
            writer,
            view: RefCell::new(view),
            sink,
            phase: Cell::new(ExchangePhase::Idle),
            subscription: RefCell::new(None),
            attached: Cell::new(true),
        })
    }

    pub fn snapshot(&self) -> AuthViewState {
        self.view.borrow().clone()
    }

    pub fn phase(&self) -> ExchangePhase {
        self.phase.get()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    /// Subscribes to bridge notifications. Keeps at most one subscription.
    pub fn attach(self: &Rc<Self>) {
        if !self.attached.get() || self.subscription.borrow().is_some() {
            return;
        }
        let controller = Rc::downgrade(self);
        let subscription = self.bridge.subscribe(Box::new(move |user| {
            if let Some(controller) = controller.upgrade() {
                controller.handle_change(user);
            }
        }));
        *self.subscription.borrow_mut() = Some(subscription);
    }

    /// Stops notifications and freezes state. Safe to call more than once.
    pub fn detach(&self) {
        if self.attached.replace(false) {
            debug!("auth controller detached");
        }
        let subscription = self.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
        }
    }

    fn handle_change(&self, user: Option<User>) {
        if !self.attached.get() {
            debug!("ignoring session change after detach");
            return;
        }
        info!(
            signed_in = user.is_some(),
            uid = user.as_ref().map_or("", |user| user.uid.as_str()),
            "session changed"
        );
        self.commit(user);
    }

    fn commit(&self, user: Option<User>) {
        self.writer.set_user(user.clone());
        let next = AuthViewState::resolved(user);
        *self.view.borrow_mut() = next.clone();
        (self.sink)(&next);
    }

    /// Runs a popup exchange and publishes the resulting identity.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::ExchangeInFlight` while another exchange is running,
    /// or the bridge's error; state is left untouched in both cases.
    pub async fn sign_in(self: Rc<Self>, kind: ProviderKind) -> Result<User, AuthError> {
        if let ExchangePhase::Exchanging(current) = self.phase.get() {
            warn!(provider = %kind, in_flight = %current, "sign-in rejected, exchange in flight");
            return Err(AuthError::ExchangeInFlight);
        }

        let exchange = ExchangeGuard::start(&self.phase, kind);
        info!(provider = %kind, "starting sign-in exchange");
        let outcome = self.bridge.sign_in(kind).await;
        drop(exchange);

        match outcome {
            Ok(user) => {
                info!(provider = %kind, uid = %user.uid, "sign-in exchange completed");
                if self.attached.get() {
                    self.commit(Some(user.clone()));
                } else {
                    debug!("sign-in completed after detach, state not updated");
                }
                Ok(user)
            }
            Err(err) => {
                warn!(provider = %kind, error = %err, "sign-in exchange failed");
                Err(err)
            }
        }
    }

    /// Clears the provider session, then the store and the view state.
    ///
    /// # Errors
    ///
    /// Returns the bridge's error; state is left untouched.
    pub async fn log_out(self: Rc<Self>) -> Result<(), AuthError> {
        info!("signing out");
        if let Err(err) = self.bridge.sign_out().await {
            warn!(error = %err, "sign-out failed");
            return Err(err);
        }
        if self.attached.get() {
            self.commit(None);
        }
        Ok(())
    }
}

/// Holds the phase at `Exchanging` and settles it on drop, including when the
/// sign-in future is dropped before the popup resolves.
struct ExchangeGuard<'a> {
    phase: &'a Cell<ExchangePhase>,
}

impl<'a> ExchangeGuard<'a> {
    fn start(phase: &'a Cell<ExchangePhase>, kind: ProviderKind) -> Self {
        phase.set(ExchangePhase::Exchanging(kind));
        Self { phase }
    }
}

impl Drop for ExchangeGuard<'_> {
    fn drop(&mut self) {
        self.phase.set(ExchangePhase::Settled);
    }
}

impl Drop for AuthController {
    fn drop(&mut self) {
        self.detach();
    }
}
