//! Build-time configuration for the Firebase web SDK with an optional runtime
//! override. The runtime config is read from `window.AUTHSHELL_CONFIG` (if
//! present) so static deployments can point at another Firebase project
//! without rebuilding. Firebase web settings are public; do not store secrets
//! here.

use super::errors::AuthError;
use serde::Serialize;

/// Log level used when neither the build nor the runtime config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
    pub log_level: String,
}

/// Options object handed to `firebase.initializeApp`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseOptions {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_key = option_env!("AUTHSHELL_FIREBASE_API_KEY").unwrap_or("");
        let auth_domain = option_env!("AUTHSHELL_FIREBASE_AUTH_DOMAIN").unwrap_or("");
        let project_id = option_env!("AUTHSHELL_FIREBASE_PROJECT_ID").unwrap_or("");
        let app_id = option_env!("AUTHSHELL_FIREBASE_APP_ID").unwrap_or("");
        let log_level = option_env!("AUTHSHELL_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);

        let mut config = Self {
            api_key: api_key.to_string(),
            auth_domain: auth_domain.to_string(),
            project_id: project_id.to_string(),
            app_id: app_id.to_string(),
            log_level: log_level.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Rejects configs that would make every sign-in fail inside the SDK.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Misconfigured` naming the first missing field.
    pub fn validate(&self) -> Result<(), AuthError> {
        let required = [
            ("api_key", &self.api_key),
            ("auth_domain", &self.auth_domain),
            ("project_id", &self.project_id),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(AuthError::Misconfigured(format!("missing {name}")));
            }
        }
        Ok(())
    }

    pub fn firebase_options(&self) -> FirebaseOptions {
        FirebaseOptions {
            api_key: self.api_key.clone(),
            auth_domain: self.auth_domain.clone(),
            project_id: self.project_id.clone(),
            app_id: self.app_id.clone(),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_key: Option<String>,
    auth_domain: Option<String>,
    project_id: Option<String>,
    app_id: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_key {
        config.api_key = value;
    }
    if let Some(value) = runtime.auth_domain {
        config.auth_domain = value;
    }
    if let Some(value) = runtime.project_id {
        config.project_id = value;
    }
    if let Some(value) = runtime.app_id {
        config.app_id = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AUTHSHELL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_key: read_runtime_value(&object, "api_key"),
        auth_domain: read_runtime_value(&object, "auth_domain"),
        project_id: read_runtime_value(&object, "project_id"),
        app_id: read_runtime_value(&object, "app_id"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
