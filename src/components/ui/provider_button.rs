use crate::features::auth::types::ProviderKind;
use leptos::prelude::*;

/// Full-width button starting a popup sign-in for one provider.
#[component]
pub fn ProviderButton(
    kind: ProviderKind,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(into)] on_select: Callback<ProviderKind>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="w-full h-12 inline-flex justify-center items-center px-5 text-sm font-medium text-gray-900 bg-white border-2 border-gray-200 rounded-lg hover:bg-gray-100 transition-all hover:scale-[1.02] dark:bg-gray-800 dark:text-white dark:border-gray-600 dark:hover:bg-gray-700"
            data-provider=kind.as_str()
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |_| on_select.run(kind)
        >
            {kind.button_label()}
        </button>
    }
}
