//! Pre-render route guards. The decisions are plain functions so they can be
//! checked without a router; the components re-run them whenever the auth
//! signal changes, which is how a completed sign-in moves the user off the
//! login view without a reload.

use crate::features::auth::{state::use_auth, types::User};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_location, use_query_map};
use url::{Url, form_urlencoded};

/// Base used to resolve redirect targets; only its origin matters.
const REDIRECT_BASE: &str = "http://authshell.invalid/";

/// Where the login view sends an already signed-in user, if anywhere.
pub fn login_redirect(user: Option<&User>, redirect: Option<&str>) -> Option<String> {
    user?;
    Some(sanitize_redirect(redirect).unwrap_or_else(|| paths::DASHBOARD.to_string()))
}

/// Accepts only app-relative targets; anything leaving the origin is dropped.
pub fn sanitize_redirect(redirect: Option<&str>) -> Option<String> {
    let target = redirect?.trim();
    if !target.starts_with('/') || target.starts_with("//") || target.starts_with("/\\") {
        return None;
    }
    let base = Url::parse(REDIRECT_BASE).ok()?;
    let resolved = base.join(target).ok()?;
    if resolved.origin() != base.origin() {
        return None;
    }

    let mut path = resolved.path().to_string();
    if let Some(query) = resolved.query() {
        path.push('?');
        path.push_str(query);
    }
    if let Some(fragment) = resolved.fragment() {
        path.push('#');
        path.push_str(fragment);
    }
    Some(path)
}

/// Login URL that returns to `current_path` after sign-in.
pub fn login_path_for(current_path: &str) -> String {
    let current_path = current_path.trim();
    if current_path.is_empty() || current_path == paths::ROOT || current_path == paths::LOGIN {
        return paths::LOGIN.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect", current_path)
        .finish();
    format!("{}?{query}", paths::LOGIN)
}

/// Path plus query string of the current location, in the form
/// `login_path_for` expects. `search` may carry its leading `?` or not.
pub fn return_target(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Where a protected route sends an anonymous visitor, if anywhere.
pub fn require_auth_redirect(is_authenticated: bool, current_path: &str) -> Option<String> {
    (!is_authenticated).then(|| login_path_for(current_path))
}

/// Renders the login view only for anonymous visitors.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let query = use_query_map();

    move || {
        let redirect = query.with(|query| query.get("redirect"));
        let target = auth
            .user
            .with(|user| login_redirect(user.as_ref(), redirect.as_deref()));
        match target {
            Some(target) => view! { <Redirect path=target /> }.into_any(),
            None => children().into_any(),
        }
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();

    move || {
        let current_path = return_target(
            &location.pathname.get_untracked(),
            &location.search.get_untracked(),
        );
        match require_auth_redirect(auth.is_authenticated.get(), &current_path) {
            // UX-only guard; real access control belongs to whatever backend trusts the ID token.
            Some(target) => view! { <Redirect path=target /> }.into_any(),
            None => children().into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present() -> User {
        User::new("u-1")
    }

    #[test]
    fn signed_in_user_goes_to_requested_redirect() {
        assert_eq!(
            login_redirect(Some(&present()), Some("/settings")),
            Some("/settings".to_string())
        );
    }

    #[test]
    fn signed_in_user_without_redirect_goes_to_dashboard() {
        assert_eq!(
            login_redirect(Some(&present()), None),
            Some("/dashboard".to_string())
        );
        assert_eq!(
            login_redirect(Some(&present()), Some("")),
            Some("/dashboard".to_string())
        );
    }

    #[test]
    fn anonymous_visitor_stays_on_login() {
        assert_eq!(login_redirect(None, Some("/settings")), None);
        assert_eq!(login_redirect(None, None), None);
    }

    #[test]
    fn offsite_redirects_fall_back_to_dashboard() {
        for target in [
            "https://evil.example/phish",
            "//evil.example/phish",
            "/\\evil.example",
            "javascript:alert(1)",
            "settings",
        ] {
            assert_eq!(
                login_redirect(Some(&present()), Some(target)),
                Some("/dashboard".to_string()),
                "{target}"
            );
        }
    }

    #[test]
    fn sanitize_keeps_query_and_fragment() {
        assert_eq!(
            sanitize_redirect(Some("/reports?range=7d#top")),
            Some("/reports?range=7d#top".to_string())
        );
        assert_eq!(
            sanitize_redirect(Some("  /settings  ")),
            Some("/settings".to_string())
        );
        assert_eq!(sanitize_redirect(Some("   ")), None);
    }

    #[test]
    fn login_path_encodes_the_return_target() {
        assert_eq!(
            login_path_for("/dashboard"),
            "/login?redirect=%2Fdashboard".to_string()
        );
        assert_eq!(login_path_for("/"), "/login".to_string());
        assert_eq!(login_path_for("/login"), "/login".to_string());
    }

    #[test]
    fn return_target_keeps_the_query_string() {
        assert_eq!(return_target("/dashboard", ""), "/dashboard");
        assert_eq!(return_target("/dashboard", "tab=x"), "/dashboard?tab=x");
        assert_eq!(return_target("/dashboard", "?tab=x"), "/dashboard?tab=x");
        assert_eq!(
            require_auth_redirect(false, &return_target("/dashboard", "?tab=x")),
            Some("/login?redirect=%2Fdashboard%3Ftab%3Dx".to_string())
        );
        assert_eq!(
            login_redirect(Some(&present()), Some("/dashboard?tab=x")),
            Some("/dashboard?tab=x".to_string())
        );
    }

    #[test]
    fn protected_routes_redirect_only_anonymous_visitors() {
        assert_eq!(require_auth_redirect(true, "/dashboard"), None);
        assert_eq!(
            require_auth_redirect(false, "/dashboard"),
            Some("/login?redirect=%2Fdashboard".to_string())
        );
    }
}
