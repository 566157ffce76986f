use chrono::{NaiveDate, NaiveTime};
use leptos::*;

use crate::model::{
    find_employee, parse_optional_clock_time, AttendanceStatus, Employee, NewAttendanceRecord,
};
use crate::utils::time::{format_date_input, DATE_INPUT_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Employee,
    Date,
    ClockIn,
    ClockOut,
    Notes,
}

impl FormField {
    pub fn input_id(&self) -> &'static str {
        match self {
            FormField::Employee => "attendance-employee",
            FormField::Date => "attendance-date",
            FormField::ClockIn => "attendance-clock-in",
            FormField::ClockOut => "attendance-clock-out",
            FormField::Notes => "attendance-notes",
        }
    }
}

/// Raw, unvalidated values of the record form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub notes: String,
}

impl AttendanceDraft {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: format_date_input(today),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub employee: Option<String>,
    pub date: Option<String>,
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.employee.is_none()
            && self.date.is_none()
            && self.clock_in.is_none()
            && self.clock_out.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Employee => self.employee.as_deref(),
            FormField::Date => self.date.as_deref(),
            FormField::ClockIn => self.clock_in.as_deref(),
            FormField::ClockOut => self.clock_out.as_deref(),
            FormField::Notes => None,
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Employee => self.employee = None,
            FormField::Date => self.date = None,
            FormField::ClockIn => self.clock_in = None,
            FormField::ClockOut => self.clock_out = None,
            FormField::Notes => {}
        }
    }
}

/// Checks a draft against the roster. Employee and date are required; the
/// time fields may be blank but must be `HH:MM` when given.
pub fn validate_draft(
    draft: &AttendanceDraft,
    roster: &[Employee],
    late_after: NaiveTime,
) -> Result<NewAttendanceRecord, FormErrors> {
    let mut errors = FormErrors::default();

    let employee_id = draft.employee_id.trim();
    let employee = if employee_id.is_empty() {
        errors.employee = Some("Employee is required".into());
        None
    } else {
        let found = find_employee(roster, employee_id);
        if found.is_none() {
            errors.employee = Some("Select an employee from the list".into());
        }
        found
    };

    let date_raw = draft.date.trim();
    let date = if date_raw.is_empty() {
        errors.date = Some("Date is required".into());
        None
    } else {
        match NaiveDate::parse_from_str(date_raw, DATE_INPUT_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.date = Some("Date must be in YYYY-MM-DD format".into());
                None
            }
        }
    };

    let clock_in = parse_optional_clock_time(&draft.clock_in).unwrap_or_else(|_| {
        errors.clock_in = Some("Clock in time must be in HH:MM format".into());
        None
    });
    let clock_out = parse_optional_clock_time(&draft.clock_out).unwrap_or_else(|_| {
        errors.clock_out = Some("Clock out time must be in HH:MM format".into());
        None
    });

    match (employee, date) {
        (Some(employee), Some(date)) if errors.is_empty() => {
            let notes = draft.notes.trim();
            Ok(NewAttendanceRecord {
                employee_name: employee.name.clone(),
                employee_id: employee.id.clone(),
                date,
                clock_in,
                clock_out,
                status: AttendanceStatus::from_clock_in(clock_in, late_after),
                notes: (!notes.is_empty()).then(|| notes.to_string()),
            })
        }
        _ => Err(errors),
    }
}

/// Signals backing each input of the record form.
#[derive(Debug, Clone, Copy)]
pub struct AttendanceFormState {
    pub employee_id: RwSignal<String>,
    pub date: RwSignal<String>,
    pub clock_in: RwSignal<String>,
    pub clock_out: RwSignal<String>,
    pub notes: RwSignal<String>,
}

impl AttendanceFormState {
    pub fn new(today: NaiveDate) -> Self {
        let blank = AttendanceDraft::blank(today);
        Self {
            employee_id: create_rw_signal(blank.employee_id),
            date: create_rw_signal(blank.date),
            clock_in: create_rw_signal(blank.clock_in),
            clock_out: create_rw_signal(blank.clock_out),
            notes: create_rw_signal(blank.notes),
        }
    }

    pub fn signal(&self, field: FormField) -> RwSignal<String> {
        match field {
            FormField::Employee => self.employee_id,
            FormField::Date => self.date,
            FormField::ClockIn => self.clock_in,
            FormField::ClockOut => self.clock_out,
            FormField::Notes => self.notes,
        }
    }

    pub fn snapshot(&self) -> AttendanceDraft {
        AttendanceDraft {
            employee_id: self.employee_id.get_untracked(),
            date: self.date.get_untracked(),
            clock_in: self.clock_in.get_untracked(),
            clock_out: self.clock_out.get_untracked(),
            notes: self.notes.get_untracked(),
        }
    }

    pub fn reset(&self, today: NaiveDate) {
        let blank = AttendanceDraft::blank(today);
        self.employee_id.set(blank.employee_id);
        self.date.set(blank.date);
        self.clock_in.set(blank.clock_in);
        self.clock_out.set(blank.clock_out);
        self.notes.set(blank.notes);
    }
}

/// Department shown in a record's details row.
pub fn department_for(roster: &[Employee], employee_id: &str) -> String {
    find_employee(roster, employee_id)
        .map(|employee| employee.department.clone())
        .unwrap_or_else(|| "-".into())
}
