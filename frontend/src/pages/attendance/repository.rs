use chrono::{NaiveDate, NaiveTime};

use crate::model::{AttendanceLog, AttendanceRecord, AttendanceStatus, Employee};
use crate::pages::dashboard::repository::employee_directory;

fn hm(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Day the seeded records were taken.
pub fn seed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 15).unwrap_or_default()
}

fn seed_record(
    id: u32,
    employee_name: &str,
    employee_id: &str,
    clock_in: Option<NaiveTime>,
    clock_out: Option<NaiveTime>,
    status: AttendanceStatus,
) -> AttendanceRecord {
    AttendanceRecord {
        id,
        employee_name: employee_name.into(),
        employee_id: employee_id.into(),
        date: seed_date(),
        clock_in,
        clock_out,
        status,
        notes: None,
    }
}

pub fn seed_log() -> AttendanceLog {
    AttendanceLog::new(vec![
        seed_record(1, "Alex Johnson", "EMP001", hm(9, 0), hm(17, 30), AttendanceStatus::Present),
        seed_record(2, "Sarah Williams", "EMP002", hm(8, 45), hm(17, 15), AttendanceStatus::Present),
        seed_record(3, "Michael Chen", "EMP003", hm(9, 20), hm(17, 45), AttendanceStatus::Late),
        seed_record(4, "Emily Rodriguez", "EMP004", None, None, AttendanceStatus::Absent),
    ])
}

/// Employees selectable in the record form.
pub fn roster() -> Vec<Employee> {
    employee_directory()
}
