//! Shared frontend utilities: configuration, error types, telemetry and build
//! metadata.
//!
//! ## Session Flow
//!
//! 1. **Startup:** `main` loads [`config::AppConfig`], installs telemetry and
//!    initializes the Firebase SDK through the identity bridge.
//! 2. **Resolution:** The auth provider seeds its view state from the session
//!    store and waits for the first `onAuthStateChanged` notification.
//! 3. **Actions:** Sign-in opens a provider popup; sign-out clears the SDK
//!    session. Both write the session store and the view state in one step.
//!
//! Configuration values are public Firebase web settings; nothing here handles
//! secrets, but callers must still avoid logging token material.

#[allow(dead_code, clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}
pub mod config;
pub mod errors;
pub mod telemetry;

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const VERSION: &str = built_info::PKG_VERSION;

pub use config::AppConfig;
pub use errors::{AuthError, ContextMisuseError};
