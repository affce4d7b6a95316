//! Auth session state and context for the frontend. The provider seeds its
//! view state from the session store, subscribes to the identity bridge once
//! on mount and exposes derived auth signals for guards and routes. Only the
//! public profile is kept in memory; tokens stay inside the SDK.

use crate::app_lib::{AuthError, ContextMisuseError};
use crate::features::auth::bridge::IdentityBridge;
use crate::features::auth::controller::{AuthController, AuthViewState};
use crate::features::auth::session::SessionWriter;
use crate::features::auth::types::{ProviderKind, User};
use leptos::prelude::*;
use std::rc::Rc;
use tracing::debug;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub state: Signal<AuthViewState>,
    pub user: Signal<Option<User>>,
    pub is_authenticated: Signal<bool>,
    pub is_initial_loading: Signal<bool>,
    controller: StoredValue<Rc<AuthController>, LocalStorage>,
}

impl AuthContext {
    /// Builds a context around the provider's state signal.
    fn new(
        state: RwSignal<AuthViewState>,
        controller: StoredValue<Rc<AuthController>, LocalStorage>,
    ) -> Self {
        let user = Signal::derive(move || state.with(|state| state.user.clone()));
        let is_authenticated = Signal::derive(move || state.with(AuthViewState::is_authenticated));
        let is_initial_loading = Signal::derive(move || state.with(|state| state.is_initial_loading));
        Self {
            state: state.into(),
            user,
            is_authenticated,
            is_initial_loading,
            controller,
        }
    }

    /// Runs a popup sign-in for `kind`.
    ///
    /// # Errors
    ///
    /// Returns the exchange failure, or `AuthError::Detached` once the provider
    /// has been unmounted.
    pub async fn sign_in(self, kind: ProviderKind) -> Result<User, AuthError> {
        let controller = self
            .controller
            .try_get_value()
            .ok_or(AuthError::Detached)?;
        controller.sign_in(kind).await
    }

    /// Signs out of the provider and clears the in-memory session.
    ///
    /// # Errors
    ///
    /// Returns the provider failure, or `AuthError::Detached` once the
    /// provider has been unmounted.
    pub async fn log_out(self) -> Result<(), AuthError> {
        let controller = self
            .controller
            .try_get_value()
            .ok_or(AuthError::Detached)?;
        controller.log_out().await
    }
}

/// Provides auth context and keeps it in sync with the identity bridge.
#[component]
pub fn AuthProvider(
    writer: SessionWriter,
    bridge: Rc<dyn IdentityBridge>,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(AuthViewState::seeded(writer.reader().user()));
    let controller = AuthController::new(
        bridge,
        writer,
        Box::new(move |next: &AuthViewState| {
            if state.try_set(next.clone()).is_some() {
                debug!("auth state signal already disposed");
            }
        }),
    );
    controller.attach();

    let controller = StoredValue::new_local(controller);
    on_cleanup(move || {
        let _ = controller.try_with_value(|controller| controller.detach());
    });

    provide_context(AuthContext::new(state, controller));

    view! { {children()} }
}

/// Returns the auth context, or an error when called outside `AuthProvider`.
///
/// # Errors
///
/// Returns `ContextMisuseError` when no provider is mounted above the caller.
pub fn try_use_auth() -> Result<AuthContext, ContextMisuseError> {
    use_context::<AuthContext>().ok_or(ContextMisuseError)
}

/// Returns the current auth context.
///
/// # Panics
///
/// Panics when called outside `AuthProvider`; that is a wiring defect and the
/// offending subtree must not render.
pub fn use_auth() -> AuthContext {
    try_use_auth().unwrap_or_else(|err| panic!("{err}"))
}
