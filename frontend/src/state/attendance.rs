use leptos::*;

use crate::model::{AttendanceLog, NewAttendanceRecord};

/// Session-scoped attendance log shared by everything under the provider.
#[derive(Clone, Copy)]
pub struct AttendanceStore {
    pub log: RwSignal<AttendanceLog>,
}

impl AttendanceStore {
    pub fn new(log: AttendanceLog) -> Self {
        Self {
            log: create_rw_signal(log),
        }
    }

    /// Appends a record and returns the id it was given.
    pub fn record(&self, new: NewAttendanceRecord) -> u32 {
        let mut id = 0;
        self.log.update(|log| {
            let record = log.append(new);
            id = record.id;
            log::info!(
                "recorded attendance #{} for {} on {} ({})",
                record.id,
                record.employee_id,
                record.date,
                record.status
            );
        });
        id
    }
}

pub fn use_attendance_store(seed: impl FnOnce() -> AttendanceLog) -> AttendanceStore {
    match use_context::<AttendanceStore>() {
        Some(store) => store,
        None => {
            let store = AttendanceStore::new(seed());
            provide_context(store);
            store
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::model::AttendanceStatus;
    use crate::test_support::ssr::with_runtime;
    use chrono::NaiveDate;

    fn absent(employee_id: &str) -> NewAttendanceRecord {
        NewAttendanceRecord {
            employee_name: "David Kim".into(),
            employee_id: employee_id.into(),
            date: NaiveDate::from_ymd_opt(2023, 6, 16).unwrap(),
            clock_in: None,
            clock_out: None,
            status: AttendanceStatus::Absent,
            notes: None,
        }
    }

    #[test]
    fn record_returns_assigned_id() {
        with_runtime(|| {
            let store = AttendanceStore::new(AttendanceLog::default());
            assert_eq!(store.record(absent("EMP005")), 1);
            assert_eq!(store.record(absent("EMP005")), 2);
            assert_eq!(store.log.with(|log| log.records().len()), 2);
        });
    }

    #[test]
    fn store_is_shared_through_context() {
        with_runtime(|| {
            let first = use_attendance_store(AttendanceLog::default);
            first.record(absent("EMP005"));
            let second = use_attendance_store(|| panic!("seed must not run twice"));
            assert_eq!(second.log.with(|log| log.records().len()), 1);
        });
    }
}
