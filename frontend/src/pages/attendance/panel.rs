use super::{
    components::{RecordForm, RecordTable, TabBar, TimesheetPlaceholder},
    utils::FormField,
    view_model::{use_attendance_view_model, AttendanceTab},
};
use crate::{
    components::common::{Button, ButtonVariant},
    utils::time::format_long_date,
};
use leptos::*;

#[component]
pub fn AttendanceWidget() -> impl IntoView {
    let vm = use_attendance_view_model();
    let log = vm.log();
    let records = Signal::derive(move || log.with(|log| log.records().to_vec()));
    let expanded = Signal::derive(move || vm.expanded.get());
    let active_tab = Signal::derive(move || vm.active_tab.get());
    let today_label = format_long_date(vm.today());

    view! {
        <section class="card overflow-hidden">
            <div class="flex flex-col space-y-6">
                <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between">
                    <h2 class="text-xl font-bold mb-2 sm:mb-0">"Daily Attendance"</h2>
                    <TabBar active=active_tab on_select=Callback::new(vm.on_select_tab()) />
                </div>
                <Show
                    when=move || active_tab.get() == AttendanceTab::Tracker
                    fallback=|| view! { <TimesheetPlaceholder /> }
                >
                    <div>
                        <div class="flex justify-between items-center mb-4">
                            <div class="text-sm text-surface-500 dark:text-surface-400">
                                {today_label.clone()}
                            </div>
                            <Button
                                variant=ButtonVariant::Primary
                                class="flex items-center space-x-2"
                                icon="fas fa-plus"
                                on_click=Callback::new(vm.on_toggle_form())
                            >
                                <span>"Record Attendance"</span>
                            </Button>
                        </div>
                        <Show when=move || vm.show_form.get()>
                            <RecordForm
                                form=vm.form
                                roster=vm.roster
                                employee_error=vm.field_error(FormField::Employee)
                                date_error=vm.field_error(FormField::Date)
                                clock_in_error=vm.field_error(FormField::ClockIn)
                                clock_out_error=vm.field_error(FormField::ClockOut)
                                on_input=Callback::new(vm.on_input())
                                on_submit=Callback::new(vm.on_submit())
                                on_cancel=Callback::new(vm.on_cancel())
                            />
                        </Show>
                        <RecordTable
                            records=records
                            expanded=expanded
                            department_of=Callback::new(move |employee_id: String| vm.department_of(&employee_id))
                            on_toggle=Callback::new(vm.on_toggle_details())
                        />
                    </div>
                </Show>
            </div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::model::AttendanceStatus;
    use crate::pages::attendance::{repository, view_model::AttendanceViewModel};
    use crate::state::attendance::AttendanceStore;
    use crate::test_support::ssr::render_to_string;

    fn provide_vm() -> AttendanceViewModel {
        let vm = AttendanceViewModel::with_parts(
            AttendanceStore::new(repository::seed_log()),
            repository::roster(),
            repository::seed_date,
            AttendanceStatus::default_late_after(),
        );
        provide_context(vm);
        vm
    }

    #[test]
    fn widget_renders_tracker_by_default() {
        let html = render_to_string(|| {
            provide_vm();
            view! { <AttendanceWidget /> }
        });
        assert!(html.contains("Daily Attendance"));
        assert!(html.contains("Thursday, June 15, 2023"));
        assert!(html.contains("Record Attendance"));
        assert!(html.contains("Emily Rodriguez"));
        assert!(!html.contains("Record New Attendance"));
    }

    #[test]
    fn widget_shows_form_when_open() {
        let html = render_to_string(|| {
            let vm = provide_vm();
            vm.toggle_form();
            view! { <AttendanceWidget /> }
        });
        assert!(html.contains("Record New Attendance"));
        assert!(html.contains("David Kim"));
    }

    #[test]
    fn widget_shows_new_record_after_submit() {
        let html = render_to_string(|| {
            let vm = provide_vm();
            vm.set_field(FormField::Employee, "EMP005".into());
            vm.set_field(FormField::ClockIn, "08:55".into());
            vm.set_field(FormField::ClockOut, "17:05".into());
            vm.submit().unwrap();
            vm.toggle_details(5);
            view! { <AttendanceWidget /> }
        });
        assert!(html.contains("David Kim"));
        assert!(html.contains("8h 10m"));
        assert!(html.contains("Finance"));
    }

    #[test]
    fn timesheet_tab_shows_placeholder() {
        let html = render_to_string(|| {
            let vm = provide_vm();
            vm.active_tab.set(AttendanceTab::Timesheet);
            view! { <AttendanceWidget /> }
        });
        assert!(html.contains("Timesheet Feature"));
        assert!(!html.contains("Alex Johnson"));
    }
}
