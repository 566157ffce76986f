use crate::state::theme::use_theme;
use leptos::*;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_state = use_theme();
    let is_dark = theme_state.is_dark();

    let on_click = move |_| {
        theme_state.toggle();
    };

    view! {
        <button
            type="button"
            class="p-2 rounded-full hover:bg-surface-200 dark:hover:bg-surface-700 transition-colors"
            on:click=on_click
            aria-label="Toggle dark mode"
            aria-pressed=move || is_dark.get().to_string()
        >
            <span class="sr-only">"Toggle dark mode"</span>
            <i class=move || if is_dark.get() { "fas fa-sun text-yellow-400" } else { "fas fa-moon" }></i>
        </button>
    }
}
