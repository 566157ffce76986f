use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    pages::{DashboardPage, NotFoundPage},
    state::theme::provide_theme,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/*any"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_theme();
    view! {
        <Title text="StaffSync"/>
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
