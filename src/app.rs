use crate::components::LoadingScreen;
use crate::features::auth::bridge::IdentityBridge;
use crate::features::auth::session::SessionWriter;
use crate::features::auth::state::{AuthContext, AuthProvider, use_auth};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use std::rc::Rc;

#[component]
pub fn App(writer: SessionWriter, bridge: Rc<dyn IdentityBridge>) -> impl IntoView {
    view! {
        <AuthProvider writer=writer bridge=bridge>
            <RootShell />
        </AuthProvider>
    }
}

/// Holds the router back until the first session resolution.
#[component]
fn RootShell() -> impl IntoView {
    let ready = router_ready(use_auth());

    view! {
        <Show
            when=move || ready.get()
            fallback=|| view! { <LoadingScreen /> }
        >
            <Router>
                <AppRoutes />
            </Router>
        </Show>
    }
}

/// True once the first session resolution has landed; never goes back.
fn router_ready(auth: AuthContext) -> Signal<bool> {
    Signal::derive(move || !auth.is_initial_loading.get())
}

#[cfg(test)]
mod tests {
    use super::router_ready;
    use crate::features::auth::fake::{FakeBridge, mount_provider};
    use crate::features::auth::session::register;
    use crate::features::auth::types::User;
    use leptos::prelude::*;

    #[test]
    fn router_waits_for_the_first_resolution() {
        let owner = Owner::new();
        let bridge = FakeBridge::new();
        let (_store, writer) = register();
        let auth = mount_provider(&owner, &bridge, writer);
        let ready = owner.with(|| router_ready(auth));

        assert!(!ready.get_untracked());

        bridge.emit(None);
        assert!(ready.get_untracked());

        bridge.emit(Some(User::new("u-1")));
        bridge.emit(None);
        assert!(ready.get_untracked());
    }

    #[test]
    fn populated_store_skips_the_loading_screen() {
        let owner = Owner::new();
        let bridge = FakeBridge::new();
        let (_store, writer) = register();
        writer.set_user(Some(User::new("u-1")));
        let auth = mount_provider(&owner, &bridge, writer);

        let ready = owner.with(|| router_ready(auth));

        assert!(ready.get_untracked());
    }
}
