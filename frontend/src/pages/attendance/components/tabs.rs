use crate::{components::empty_state::EmptyState, pages::attendance::view_model::AttendanceTab};
use leptos::*;

const ACTIVE_TAB_CLASS: &str = "bg-primary text-white";
const IDLE_TAB_CLASS: &str = "bg-surface-100 text-surface-600 hover:bg-surface-200 dark:bg-surface-700 dark:text-surface-300 dark:hover:bg-surface-600";

#[component]
pub fn TabBar(active: Signal<AttendanceTab>, on_select: Callback<AttendanceTab>) -> impl IntoView {
    view! {
        <div class="flex space-x-2" role="tablist">
            {AttendanceTab::ALL
                .into_iter()
                .map(|tab| view! {
                    <button
                        type="button"
                        role="tab"
                        aria-selected=move || (active.get() == tab).to_string()
                        class=move || {
                            let state = if active.get() == tab { ACTIVE_TAB_CLASS } else { IDLE_TAB_CLASS };
                            format!("px-4 py-2 rounded-lg flex items-center space-x-2 transition-colors {state}")
                        }
                        on:click=move |_| on_select.call(tab)
                    >
                        <i class=tab.icon()></i>
                        <span class="text-sm font-medium">{tab.label()}</span>
                    </button>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn TimesheetPlaceholder() -> impl IntoView {
    view! {
        <EmptyState
            title="Timesheet Feature"
            description="The timesheet feature is coming soon. You'll be able to view and manage detailed time records for all employees."
            icon="fas fa-clock"
        />
    }
}
