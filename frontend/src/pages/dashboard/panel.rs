use crate::pages::{
    attendance::AttendanceWidget,
    dashboard::{
        components::{DirectorySection, StatsSection},
        layout::DashboardFrame,
        view_model::use_dashboard_view_model,
    },
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let employees = Signal::derive(move || vm.visible_employees.get());

    view! {
        <DashboardFrame>
            <div class="space-y-8">
                <div>
                    <h1 class="text-2xl font-bold">"HR Dashboard"</h1>
                    <p class="mt-1 text-sm text-surface-500 dark:text-surface-400">
                        "Overview of your workforce and today's attendance."
                    </p>
                </div>
                <StatsSection tiles=vm.tiles />
                <DirectorySection
                    employees=employees
                    search=vm.search.into()
                    on_search=Callback::new(vm.on_search())
                />
                <AttendanceWidget />
            </div>
        </DashboardFrame>
    }
}
