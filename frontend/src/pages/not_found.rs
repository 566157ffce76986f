use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="min-h-[60vh] flex items-center justify-center px-4">
                <div class="max-w-md w-full text-center">
                    <div class="relative mx-auto mb-8 w-32 h-32">
                        <div class="absolute inset-0 bg-gradient-to-br from-primary to-accent rounded-full opacity-20"></div>
                        <div class="absolute inset-2 bg-gradient-to-br from-primary to-accent rounded-full opacity-40"></div>
                        <div class="absolute inset-4 bg-gradient-to-br from-primary to-accent rounded-full opacity-60"></div>
                        <div class="absolute inset-0 flex items-center justify-center text-white text-6xl font-bold">
                            "404"
                        </div>
                    </div>
                    <h1 class="text-3xl font-bold mb-4">"Page Not Found"</h1>
                    <p class="text-surface-500 dark:text-surface-400 mb-8">
                        "The page you are looking for doesn't exist or has been moved."
                    </p>
                    <a href="/" class="btn btn-primary inline-flex items-center space-x-2">
                        <i class="fas fa-arrow-left"></i>
                        <span>"Back to Dashboard"</span>
                    </a>
                </div>
            </div>
        </Layout>
    }
}
