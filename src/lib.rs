//! # authshell
//!
//! Leptos CSR frontend that mirrors a Firebase Auth session into route guards:
//! a spinner while the session resolves, the signed-in user for every route,
//! and popup-based sign-in/sign-out actions.

mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
mod components;
pub mod features;
pub mod routes;

pub use app::App;

#[cfg(target_arch = "wasm32")]
use anyhow::{Context, Result};

/// Loads config, installs telemetry, initializes Firebase and mounts the app.
///
/// # Errors
///
/// Returns an error if telemetry cannot be installed, the Firebase config is
/// incomplete, or the SDK rejects it.
#[cfg(target_arch = "wasm32")]
pub fn start() -> Result<()> {
    use crate::app_lib::{AppConfig, GIT_COMMIT_HASH, VERSION, telemetry};
    use crate::features::auth::{bridge::IdentityBridge, firebase::FirebaseBridge, session};
    use leptos::prelude::*;
    use std::rc::Rc;

    let config = AppConfig::load();
    telemetry::init(&config.log_level)?;
    tracing::info!(version = VERSION, commit = GIT_COMMIT_HASH, "starting authshell");

    config
        .validate()
        .context("incomplete Firebase configuration")?;
    let bridge = FirebaseBridge::initialize(&config).context("failed to initialize Firebase")?;

    let (_store, writer) = session::register();
    mount_to_body(move || {
        let bridge: Rc<dyn IdentityBridge> = Rc::new(bridge);
        view! { <App writer=writer bridge=bridge /> }
    });
    Ok(())
}
