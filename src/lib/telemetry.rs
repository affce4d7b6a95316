//! Tracing setup for the browser. Events are formatted by `tracing-subscriber`
//! without timestamps and handed to `tracing-web`, which forwards each one to
//! the matching `console.*` method. On the host target they go to stderr so
//! unit tests and tooling see the same output.

use anyhow::{Result, anyhow};
use tracing::Level;

/// Map a configured level name to a tracing level, falling back to `INFO`.
pub fn level_from_name(name: &str) -> Level {
    match name.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init(log_level: &str) -> Result<()> {
    let level = level_from_name(log_level);

    #[cfg(target_arch = "wasm32")]
    let subscriber = tracing_subscriber::fmt()
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .without_time()
        .with_max_level(level);

    #[cfg(not(target_arch = "wasm32"))]
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level);

    subscriber
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
