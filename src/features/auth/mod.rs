//! Auth feature module: session register, identity bridge, controller, Leptos
//! context and route guards. It keeps authentication logic out of the UI. This
//! module touches security boundaries and must avoid logging token material.
//!
//! Flow Overview: the bridge reports every provider session change; the
//! controller writes it to the session store and publishes one view snapshot;
//! guards and views read that snapshot through `use_auth`. Sign-in and
//! sign-out go the other way, through the context into the bridge, and land in
//! the same store-then-view write.

pub mod bridge;
pub mod controller;
#[cfg(test)]
pub(crate) mod fake;
#[cfg(target_arch = "wasm32")]
pub mod firebase;
pub mod guards;
pub mod session;
pub mod state;
pub mod types;

pub use guards::{RedirectIfAuthenticated, RequireAuth};
pub use state::{AuthContext, AuthProvider, use_auth};
