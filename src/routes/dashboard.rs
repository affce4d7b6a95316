//! Default landing page for signed-in users. Anonymous visitors are sent to the
//! login view with a redirect back here.

use crate::components::{AppShell, Button};
use crate::features::auth::guards::RequireAuth;
use crate::features::auth::state::use_auth;
use leptos::{prelude::*, task::spawn_local};
use tracing::error;

/// Renders the dashboard page shell.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AppShell>
                <DashboardPanel />
            </AppShell>
        </RequireAuth>
    }
}

#[component]
fn DashboardPanel() -> impl IntoView {
    let auth = use_auth();
    let pending = RwSignal::new(false);

    let label = move || {
        auth.user
            .with(|user| user.as_ref().map(|user| user.label().to_string()))
            .unwrap_or_default()
    };
    let email = move || auth.user.with(|user| user.as_ref().and_then(|user| user.email.clone()));

    let on_sign_out = move |()| {
        pending.set(true);
        spawn_local(async move {
            if let Err(err) = auth.log_out().await {
                error!(error = %err, "sign-out error");
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="max-w-sm mx-auto text-center space-y-6 py-8">
            <div class="space-y-2">
                <h1 class="text-xl font-bold text-gray-900 dark:text-white">"Dashboard"</h1>
                <p class="text-gray-500 dark:text-gray-400">
                    "You are signed in as "
                    <span class="font-medium text-gray-900 dark:text-gray-200">{label}</span>
                    "."
                </p>
                {move || {
                    email()
                        .map(|email| {
                            view! { <p class="text-sm text-gray-500 dark:text-gray-400">{email}</p> }
                        })
                }}
            </div>
            <Button disabled=pending on_click=on_sign_out>
                "Sign Out"
            </Button>
        </div>
    }
}
