//! Login boundary. Signed-in visitors are redirected before the view renders;
//! everyone else gets one popup sign-in button per provider. A failed exchange
//! is logged and the view stays as it is.

use crate::components::{AppShell, ProviderButton, Spinner};
use crate::features::auth::guards::RedirectIfAuthenticated;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::ProviderKind;
use leptos::{prelude::*, task::spawn_local};
use tracing::{error, info};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <RedirectIfAuthenticated>
            <AppShell>
                <LoginPanel />
            </AppShell>
        </RedirectIfAuthenticated>
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let auth = use_auth();
    let pending = RwSignal::new(None::<ProviderKind>);
    let busy = Signal::derive(move || pending.get().is_some());

    let handle_sign_in = move |kind: ProviderKind| {
        info!(provider = %kind, "sign-in requested");
        pending.set(Some(kind));
        spawn_local(async move {
            match auth.sign_in(kind).await {
                Ok(_) => {}
                Err(err) if err.is_cancellation() => {
                    info!(provider = %kind, "sign-in cancelled");
                }
                Err(err) => error!(provider = %kind, error = %err, "sign-in error"),
            }
            // The guard may already have swapped this view out.
            let _ = pending.try_set(None);
        });
    };

    view! {
        <div class="w-full max-w-md mx-auto px-4">
            <div class="w-full p-8 space-y-8 bg-white border border-gray-200 rounded-lg shadow-md dark:bg-gray-800 dark:border-gray-700">
                <h1 class="text-xl font-bold text-gray-900 dark:text-white">"Sign in"</h1>
                <div class="space-y-4">
                    {ProviderKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <ProviderButton kind=kind disabled=busy on_select=handle_sign_in />
                            }
                        })
                        .collect_view()}
                </div>
                <Show when=move || busy.get()>
                    <div class="flex justify-center">
                        <Spinner />
                    </div>
                </Show>
                <p class="text-center text-sm text-gray-500 dark:text-gray-400">
                    "By continuing, you agree to our "
                    <a href="#" class="underline underline-offset-4 hover:text-blue-700">
                        "Terms of Service"
                    </a>
                    " and "
                    <a href="#" class="underline underline-offset-4 hover:text-blue-700">
                        "Privacy Policy"
                    </a>
                    "."
                </p>
            </div>
        </div>
    }
}
