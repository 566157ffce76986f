use chrono::{NaiveDate, NaiveTime};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    *,
};

use crate::model::{AttendanceLog, Employee};
use crate::pages::attendance::{
    repository,
    utils::{department_for, validate_draft, AttendanceFormState, FormErrors, FormField},
};
use crate::state::attendance::{use_attendance_store, AttendanceStore};
use crate::utils::time::today;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceTab {
    Tracker,
    Timesheet,
}

impl AttendanceTab {
    pub const ALL: [AttendanceTab; 2] = [AttendanceTab::Tracker, AttendanceTab::Timesheet];

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceTab::Tracker => "Attendance Tracker",
            AttendanceTab::Timesheet => "Timesheet",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AttendanceTab::Tracker => "fas fa-calendar-alt",
            AttendanceTab::Timesheet => "fas fa-clock",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub store: AttendanceStore,
    pub roster: StoredValue<Vec<Employee>>,
    pub form: AttendanceFormState,
    pub errors: RwSignal<FormErrors>,
    pub show_form: RwSignal<bool>,
    pub active_tab: RwSignal<AttendanceTab>,
    pub expanded: RwSignal<Option<u32>>,
    today: fn() -> NaiveDate,
    late_after: NaiveTime,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let store = use_attendance_store(repository::seed_log);
        Self::with_parts(
            store,
            repository::roster(),
            today,
            crate::config::current().late_after,
        )
    }

    pub fn with_parts(
        store: AttendanceStore,
        roster: Vec<Employee>,
        today: fn() -> NaiveDate,
        late_after: NaiveTime,
    ) -> Self {
        Self {
            store,
            roster: store_value(roster),
            form: AttendanceFormState::new(today()),
            errors: create_rw_signal(FormErrors::default()),
            show_form: create_rw_signal(false),
            active_tab: create_rw_signal(AttendanceTab::Tracker),
            expanded: create_rw_signal(None),
            today,
            late_after,
        }
    }

    /// Current calendar day, read fresh on every call.
    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    pub fn log(&self) -> RwSignal<AttendanceLog> {
        self.store.log
    }

    pub fn field_error(&self, field: FormField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Updates one input and clears only that input's error.
    pub fn set_field(&self, field: FormField, value: String) {
        self.form.signal(field).set(value);
        if self.errors.with_untracked(|e| e.get(field).is_some()) {
            self.errors.update(|e| e.clear(field));
        }
    }

    /// Validates the form and appends a record. Returns the new record's id.
    pub fn submit(&self) -> Result<u32, FormErrors> {
        let draft = self.form.snapshot();
        let new_record = self
            .roster
            .with_value(|roster| validate_draft(&draft, roster, self.late_after));
        match new_record {
            Ok(new_record) => {
                let id = self.store.record(new_record);
                self.form.reset(self.today());
                self.errors.set(FormErrors::default());
                self.show_form.set(false);
                Ok(id)
            }
            Err(errors) => {
                log::debug!("attendance form rejected: {errors:?}");
                self.errors.set(errors.clone());
                Err(errors)
            }
        }
    }

    pub fn toggle_form(&self) {
        self.show_form.update(|open| *open = !*open);
    }

    pub fn toggle_details(&self, id: u32) {
        self.expanded.update(|current| {
            *current = if *current == Some(id) { None } else { Some(id) };
        });
    }

    pub fn department_of(&self, employee_id: &str) -> String {
        self.roster
            .with_value(|roster| department_for(roster, employee_id))
    }

    pub fn on_submit(&self) -> impl Fn(SubmitEvent) {
        let vm = *self;
        move |ev| {
            ev.prevent_default();
            vm.submit().ok();
        }
    }

    pub fn on_input(&self) -> impl Fn((FormField, String)) {
        let vm = *self;
        move |(field, value)| vm.set_field(field, value)
    }

    pub fn on_toggle_form(&self) -> impl Fn(MouseEvent) {
        let vm = *self;
        move |_| vm.toggle_form()
    }

    pub fn on_cancel(&self) -> impl Fn(MouseEvent) {
        let show_form = self.show_form;
        move |_| show_form.set(false)
    }

    pub fn on_toggle_details(&self) -> impl Fn(u32) {
        let vm = *self;
        move |id| vm.toggle_details(id)
    }

    pub fn on_select_tab(&self) -> impl Fn(AttendanceTab) {
        let active_tab = self.active_tab;
        move |tab| active_tab.set(tab)
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::model::AttendanceStatus;
    use crate::test_support::{helpers::small_roster, ssr::with_runtime};
    use std::cell::Cell;
    use std::collections::HashSet;

    thread_local! {
        static TODAY: Cell<NaiveDate> = Cell::new(NaiveDate::from_ymd_opt(2023, 6, 16).unwrap());
    }

    fn fixed_today() -> NaiveDate {
        TODAY.with(Cell::get)
    }

    fn seeded_vm() -> AttendanceViewModel {
        AttendanceViewModel::with_parts(
            AttendanceStore::new(repository::seed_log()),
            small_roster(),
            fixed_today,
            AttendanceStatus::default_late_after(),
        )
    }

    #[test]
    fn submit_without_employee_is_rejected() {
        with_runtime(|| {
            let vm = seeded_vm();
            vm.show_form.set(true);
            vm.set_field(FormField::ClockIn, "08:30".into());

            let result = vm.submit();

            assert!(result.is_err());
            assert_eq!(
                vm.errors.get().employee.as_deref(),
                Some("Employee is required")
            );
            assert_eq!(vm.log().with(|log| log.records().len()), 4);
            assert!(vm.show_form.get());
        });
    }

    #[test]
    fn valid_submit_appends_one_record_and_resets_form() {
        with_runtime(|| {
            let vm = seeded_vm();
            vm.show_form.set(true);
            vm.set_field(FormField::Employee, "EMP001".into());
            vm.set_field(FormField::Date, "2023-06-16".into());
            vm.set_field(FormField::ClockIn, "09:20".into());
            vm.set_field(FormField::Notes, "Train delay".into());

            let id = vm.submit().unwrap();

            let records = vm.log().with(|log| log.records().to_vec());
            assert_eq!(records.len(), 5);
            let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), records.len());
            let added = records.last().unwrap();
            assert_eq!(added.id, id);
            assert_eq!(added.employee_name, "Alex Johnson");
            assert_eq!(added.status, AttendanceStatus::Late);
            assert_eq!(added.notes.as_deref(), Some("Train delay"));

            assert!(!vm.show_form.get());
            assert_eq!(vm.form.employee_id.get(), "");
            assert_eq!(vm.form.date.get(), "2023-06-16");
            assert!(vm.errors.get().is_empty());
        });
    }

    #[test]
    fn reset_after_submit_uses_the_current_day() {
        with_runtime(|| {
            let vm = seeded_vm();
            assert_eq!(vm.form.date.get(), "2023-06-16");
            vm.set_field(FormField::Employee, "EMP002".into());
            vm.set_field(FormField::ClockIn, "08:50".into());

            TODAY.with(|day| day.set(NaiveDate::from_ymd_opt(2023, 6, 17).unwrap()));
            vm.submit().unwrap();

            let added = vm.log().with(|log| log.records().last().cloned()).unwrap();
            assert_eq!(added.date, NaiveDate::from_ymd_opt(2023, 6, 16).unwrap());
            assert_eq!(vm.form.date.get(), "2023-06-17");
            assert_eq!(vm.today(), NaiveDate::from_ymd_opt(2023, 6, 17).unwrap());
        });
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        with_runtime(|| {
            let vm = seeded_vm();
            vm.set_field(FormField::Date, String::new());
            assert!(vm.submit().is_err());
            assert!(vm.field_error(FormField::Date).get().is_some());

            vm.set_field(FormField::Employee, "EMP002".into());

            assert!(vm.field_error(FormField::Employee).get().is_none());
            assert_eq!(
                vm.field_error(FormField::Date).get().as_deref(),
                Some("Date is required")
            );
        });
    }

    #[test]
    fn only_one_record_is_expanded_at_a_time() {
        with_runtime(|| {
            let vm = seeded_vm();
            vm.toggle_details(2);
            assert_eq!(vm.expanded.get(), Some(2));
            vm.toggle_details(3);
            assert_eq!(vm.expanded.get(), Some(3));
            vm.toggle_details(3);
            assert_eq!(vm.expanded.get(), None);
        });
    }

    #[test]
    fn toggle_form_and_tabs() {
        with_runtime(|| {
            let vm = seeded_vm();
            vm.toggle_form();
            assert!(vm.show_form.get());
            vm.toggle_form();
            assert!(!vm.show_form.get());
            (vm.on_select_tab())(AttendanceTab::Timesheet);
            assert_eq!(vm.active_tab.get(), AttendanceTab::Timesheet);
            assert_eq!(vm.department_of("EMP002"), "Marketing");
        });
    }
}
