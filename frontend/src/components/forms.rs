use leptos::*;

const INPUT_CLASS: &str = "input-field";
const INPUT_ERROR_CLASS: &str = "input-field border-red-500 dark:border-red-500";

pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        INPUT_ERROR_CLASS
    } else {
        INPUT_CLASS
    }
}

#[component]
pub fn FormLabel(#[prop(into)] text: String, #[prop(into)] for_id: String) -> impl IntoView {
    view! {
        <label for=for_id class="block text-sm font-medium mb-1">
            {text}
        </label>
    }
}

/// Inline, field-scoped validation message. Renders nothing when `message`
/// is `None`.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class="text-red-500 text-xs mt-1" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}
