//! Shared layout wrapper with header, content container and build footer.
//! Navigation remains client-side; anything trusting the signed-in identity
//! must verify the provider's ID token on its own side.

use crate::app_lib::{GIT_COMMIT_HASH, VERSION};
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_location};
use tracing::error;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let on_login = move || pathname.get() == paths::LOGIN;
    let user_label = move || {
        auth.user
            .with(|user| user.as_ref().map(|user| user.label().to_string()))
            .unwrap_or_default()
    };

    let sign_out = move |_| {
        spawn_local(async move {
            if let Err(err) = auth.log_out().await {
                error!(error = %err, "sign-out error");
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href={paths::ROOT} {..} class="flex items-center space-x-3 rtl:space-x-reverse">
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Authshell"
                        </span>
                    </A>
                    <Show
                        when=move || auth.is_authenticated.get()
                        fallback=move || {
                            view! {
                                <Show when=move || !on_login()>
                                    <A
                                        href={paths::LOGIN}
                                        {..}
                                        class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:text-blue-700 md:p-0 dark:text-white"
                                    >
                                        "Sign In"
                                    </A>
                                </Show>
                            }
                        }
                    >
                        <div class="flex items-center gap-4">
                            <span class="text-sm text-gray-500 dark:text-gray-400">
                                {user_label}
                            </span>
                            <button
                                type="button"
                                class="block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:text-blue-700 md:p-0 dark:text-white"
                                on:click=sign_out
                            >
                                "Sign Out"
                            </button>
                        </div>
                    </Show>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="p-4 text-center text-xs text-gray-400">
                {format!("v{VERSION} ({GIT_COMMIT_HASH})")}
            </footer>
        </div>
    }
}
