//! Identity bridge backed by the Firebase Auth compat SDK (`firebase.auth()`),
//! which `index.html` loads before the wasm bundle.
//!
//! The SDK owns the OAuth exchange, popup lifecycle, token refresh and session
//! persistence; this module only converts between its JS objects and the
//! crate's `User`/`AuthError` types. User objects are read through their
//! `toJSON()` form, which also carries token fields; those are dropped during
//! deserialization and must never be logged.

use crate::app_lib::{AppConfig, AuthError};
use crate::features::auth::bridge::{IdentityBridge, SessionListener, Subscription};
use crate::features::auth::types::{ProviderKind, User};
use futures::future::{self, LocalBoxFuture};
use js_sys::{Array, Function, JSON, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;

/// Handle on the default Firebase app's `Auth` instance.
#[derive(Clone)]
pub struct FirebaseBridge {
    firebase: JsValue,
    auth: JsValue,
}

impl FirebaseBridge {
    /// Initializes the default Firebase app and grabs its `Auth` instance.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Misconfigured` when the SDK is not loaded or rejects
    /// the options.
    pub fn initialize(config: &AppConfig) -> Result<Self, AuthError> {
        let window = web_sys::window()
            .ok_or_else(|| AuthError::Misconfigured("window not available".to_string()))?;
        let firebase = Reflect::get(&window, &"firebase".into())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .ok_or_else(|| AuthError::Misconfigured("Firebase SDK not loaded".to_string()))?;

        let options_json = serde_json::to_string(&config.firebase_options())
            .map_err(|err| AuthError::Misconfigured(format!("invalid options: {err}")))?;
        let options = JSON::parse(&options_json)
            .map_err(|_| AuthError::Misconfigured("invalid options".to_string()))?;

        call_method(&firebase, "initializeApp", &Array::of1(&options)).map_err(error_from_js)?;
        let auth = call_method(&firebase, "auth", &Array::new()).map_err(error_from_js)?;

        Ok(Self { firebase, auth })
    }

    fn provider(&self, kind: ProviderKind) -> Result<JsValue, AuthError> {
        let namespace = Reflect::get(&self.firebase, &"auth".into()).map_err(error_from_js)?;
        let (class, args) = match kind {
            ProviderKind::Google => ("GoogleAuthProvider", Array::new()),
            ProviderKind::Github => ("GithubAuthProvider", Array::new()),
            ProviderKind::Apple => (
                "OAuthProvider",
                Array::of1(&JsValue::from_str(kind.provider_id())),
            ),
        };
        let constructor: Function = Reflect::get(&namespace, &class.into())
            .map_err(error_from_js)?
            .dyn_into()
            .map_err(|_| AuthError::Misconfigured(format!("{class} is not available")))?;
        Reflect::construct(&constructor, &args).map_err(error_from_js)
    }
}

impl IdentityBridge for FirebaseBridge {
    fn subscribe(&self, on_change: SessionListener) -> Subscription {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            match user_from_js(&value) {
                Ok(user) => on_change(user),
                Err(err) => tracing::error!(error = %err, "dropping unreadable session change"),
            }
        });

        let unsubscribe = call_method(
            &self.auth,
            "onAuthStateChanged",
            &Array::of1(callback.as_ref()),
        )
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());

        let Some(unsubscribe) = unsubscribe else {
            // The SDK still holds the listener; it must outlive this subscription.
            tracing::error!("onAuthStateChanged did not return an unsubscribe handle");
            callback.forget();
            return Subscription::new(|| {});
        };

        Subscription::new(move || {
            let _ = unsubscribe.call0(&JsValue::NULL);
            drop(callback);
        })
    }

    fn sign_in(&self, kind: ProviderKind) -> LocalBoxFuture<'static, Result<User, AuthError>> {
        let promise = self
            .provider(kind)
            .and_then(|provider| {
                call_method(&self.auth, "signInWithPopup", &Array::of1(&provider))
                    .map_err(error_from_js)
            })
            .and_then(into_promise);
        let promise = match promise {
            Ok(promise) => promise,
            Err(err) => return Box::pin(future::ready(Err(err))),
        };

        Box::pin(async move {
            let credential = JsFuture::from(promise).await.map_err(error_from_js)?;
            let user = Reflect::get(&credential, &"user".into()).map_err(error_from_js)?;
            user_from_js(&user)?
                .ok_or_else(|| AuthError::InvalidUser("credential without user".to_string()))
        })
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        let promise = match call_method(&self.auth, "signOut", &Array::new())
            .map_err(error_from_js)
            .and_then(into_promise)
        {
            Ok(promise) => promise,
            Err(err) => return Box::pin(future::ready(Err(err))),
        };

        Box::pin(async move {
            JsFuture::from(promise).await.map_err(error_from_js)?;
            Ok(())
        })
    }
}

fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &name.into())?.dyn_into()?;
    method.apply(target, args)
}

fn into_promise(value: JsValue) -> Result<Promise, AuthError> {
    value
        .dyn_into::<Promise>()
        .map_err(|_| AuthError::Misconfigured("SDK call did not return a promise".to_string()))
}

fn user_from_js(value: &JsValue) -> Result<Option<User>, AuthError> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let json = JSON::stringify(value)
        .ok()
        .and_then(|json| json.as_string())
        .ok_or_else(|| AuthError::InvalidUser("user is not serializable".to_string()))?;
    User::from_sdk_json(&json).map(Some)
}

fn error_from_js(value: JsValue) -> AuthError {
    let read = |key: &str| {
        Reflect::get(&value, &key.into())
            .ok()
            .and_then(|field| field.as_string())
    };
    let code = read("code").unwrap_or_else(|| "unknown".to_string());
    let message = read("message")
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "no message".to_string());
    AuthError::from_provider_code(&code, &message)
}
