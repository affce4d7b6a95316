#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = authshell::start() {
        tracing::error!("authshell failed to start: {err:#}");
        web_sys::console::error_1(&format!("authshell failed to start: {err:#}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
