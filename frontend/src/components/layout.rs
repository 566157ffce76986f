use chrono::Datelike;
use leptos::*;

use crate::{components::theme::ThemeToggle, utils::time::today};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Dashboard", path: "/" },
    NavLink { name: "Employees", path: "/employees" },
    NavLink { name: "Attendance", path: "/attendance" },
    NavLink { name: "Performance", path: "/performance" },
    NavLink { name: "Documents", path: "/documents" },
];

const NAV_LINK_CLASS: &str = "text-surface-600 hover:text-primary dark:text-surface-300 dark:hover:text-primary-light font-medium transition-colors";

/// Open/closed state of the small-screen navigation drawer.
#[derive(Debug, Clone, Copy)]
pub struct MobileMenu {
    open: RwSignal<bool>,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self {
            open: create_rw_signal(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Header(#[prop(optional)] menu: Option<MobileMenu>) -> impl IntoView {
    let menu = menu.unwrap_or_default();

    view! {
        <header class="sticky top-0 z-50 glass border-b border-surface-200 dark:border-surface-700">
            <div class="container mx-auto px-4 py-3">
                <div class="flex items-center justify-between">
                    <a href="/" class="flex items-center space-x-2">
                        <div class="h-9 w-9 rounded-lg bg-gradient-to-br from-primary to-accent flex items-center justify-center">
                            <span class="text-white font-bold text-lg">"S"</span>
                        </div>
                        <span class="text-xl font-bold bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                            "StaffSync"
                        </span>
                    </a>
                    <nav class="hidden md:flex items-center space-x-6">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <a href=link.path class=NAV_LINK_CLASS>{link.name}</a> })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center space-x-4">
                        <ThemeToggle />
                        <div class="md:hidden">
                            <button
                                type="button"
                                class="p-2 rounded-full hover:bg-surface-200 dark:hover:bg-surface-700 transition-colors"
                                on:click=move |_| menu.toggle()
                                aria-label="Toggle menu"
                                aria-expanded=move || menu.is_open().to_string()
                                aria-controls="mobile-nav"
                            >
                                <i class=move || if menu.is_open() { "fas fa-times text-xl" } else { "fas fa-bars text-xl" }></i>
                            </button>
                        </div>
                        <div class="hidden md:block">
                            <div class="h-8 w-8 rounded-full bg-primary flex items-center justify-center">
                                <span class="text-white font-medium text-sm">"JS"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <MobileNav menu=menu />
        </header>
    }
}

#[component]
fn MobileNav(menu: MobileMenu) -> impl IntoView {
    view! {
        <Show when=move || menu.is_open()>
            <div id="mobile-nav" class="md:hidden glass border-b border-surface-200 dark:border-surface-700">
                <nav class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.path
                                class=format!("{NAV_LINK_CLASS} py-2")
                                on:click=move |_| menu.close()
                            >
                                {link.name}
                            </a>
                        })
                        .collect_view()}
                </nav>
            </div>
        </Show>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = today().year();
    view! {
        <footer class="bg-white dark:bg-surface-800 border-t border-surface-200 dark:border-surface-700 py-6">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p class="mb-4 md:mb-0 text-surface-500 dark:text-surface-400 text-sm">
                        {format!("© {year} StaffSync. All rights reserved.")}
                    </p>
                    <div class="flex space-x-6">
                        <a href="#" class="text-surface-500 hover:text-primary dark:text-surface-400 dark:hover:text-primary-light text-sm">"Privacy Policy"</a>
                        <a href="#" class="text-surface-500 hover:text-primary dark:text-surface-400 dark:hover:text-primary-light text-sm">"Terms of Service"</a>
                        <a href="#" class="text-surface-500 hover:text-primary dark:text-surface-400 dark:hover:text-primary-light text-sm">"Contact"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Header/>
            <main class="flex-grow container mx-auto px-4 py-6">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};
    use std::collections::HashSet;

    #[test]
    fn header_renders_every_nav_link() {
        let html = render_to_string(|| view! { <Header /> });
        for link in NAV_LINKS {
            assert!(html.contains(link.name), "missing {}", link.name);
            assert!(html.contains(&format!("href=\"{}\"", link.path)));
        }
        assert!(html.contains("Toggle dark mode"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("id=\"mobile-nav\""));
    }

    #[test]
    fn open_menu_renders_mobile_nav() {
        let html = render_to_string(|| {
            let menu = MobileMenu::new();
            menu.toggle();
            view! { <Header menu=menu /> }
        });
        assert!(html.contains("id=\"mobile-nav\""));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("fa-times"));
    }

    #[test]
    fn menu_toggles_and_closes() {
        with_runtime(|| {
            let menu = MobileMenu::new();
            assert!(!menu.is_open());
            menu.toggle();
            assert!(menu.is_open());
            menu.close();
            assert!(!menu.is_open());
            menu.toggle();
            menu.toggle();
            assert!(!menu.is_open());
        });
    }

    #[test]
    fn layout_renders_children_and_footer() {
        let html = render_to_string(|| view! { <Layout><div>"child"</div></Layout> });
        assert!(html.contains("child"));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn nav_paths_are_unique() {
        let unique: HashSet<&str> = NAV_LINKS.iter().map(|link| link.path).collect();
        assert_eq!(unique.len(), NAV_LINKS.len());
    }
}
