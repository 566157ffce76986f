use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    /// Font Awesome class for the illustration.
    #[prop(optional, into)]
    icon: Option<String>,
) -> impl IntoView {
    let icon = icon.unwrap_or_else(|| "fas fa-inbox".to_string());
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="text-center">
                <div class="mb-4 text-5xl text-surface-400">
                    <i class=icon></i>
                </div>
                <h3 class="text-lg font-medium mb-2">{title}</h3>
                {description.map(|desc| view! {
                    <p class="text-surface-500 dark:text-surface-400 max-w-md mx-auto">{desc}</p>
                })}
            </div>
        </div>
    }
}
