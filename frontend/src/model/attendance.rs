use chrono::{NaiveDate, NaiveTime, Timelike};
use std::fmt;
use thiserror::Error;

pub const CLOCK_FORMAT: &str = "%H:%M";
const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time is empty")]
    Empty,
    #[error("'{0}' is not a valid HH:MM time")]
    Malformed(String),
}

/// Parses a 24-hour `HH:MM` time-of-day as produced by `<input type="time">`.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, TimeParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    NaiveTime::parse_from_str(trimmed, CLOCK_FORMAT)
        .map_err(|_| TimeParseError::Malformed(trimmed.to_string()))
}

/// Like [`parse_clock_time`] but maps a blank field to `None`.
pub fn parse_optional_clock_time(raw: &str) -> Result<Option<NaiveTime>, TimeParseError> {
    match parse_clock_time(raw) {
        Ok(time) => Ok(Some(time)),
        Err(TimeParseError::Empty) => Ok(None),
        Err(err) => Err(err),
    }
}

pub fn format_clock_time(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    /// Default cut-off: anyone clocking in after 09:00 is late.
    pub fn default_late_after() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
    }

    pub fn from_clock_in(clock_in: Option<NaiveTime>, late_after: NaiveTime) -> Self {
        match clock_in {
            None => AttendanceStatus::Absent,
            Some(time) if time > late_after => AttendanceStatus::Late,
            Some(_) => AttendanceStatus::Present,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "badge-green",
            AttendanceStatus::Late => "badge-yellow",
            AttendanceStatus::Absent => "badge-red",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "fas fa-check-circle text-green-500",
            AttendanceStatus::Late => "fas fa-exclamation-circle text-amber-500",
            AttendanceStatus::Absent => "fas fa-times-circle text-red-500",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkDuration {
    minutes: u32,
}

impl WorkDuration {
    pub fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn hours(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minutes(&self) -> u32 {
        self.minutes % 60
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours(), self.minutes())
    }
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Elapsed time between two clock readings. A clock-out earlier than the
/// clock-in is treated as falling on the next day.
pub fn work_duration(clock_in: NaiveTime, clock_out: NaiveTime) -> WorkDuration {
    let elapsed = (minutes_since_midnight(clock_out) - minutes_since_midnight(clock_in))
        .rem_euclid(MINUTES_PER_DAY);
    // rem_euclid keeps this in 0..1440
    WorkDuration::from_minutes(elapsed as u32)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: u32,
    pub employee_name: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

impl AttendanceRecord {
    pub fn duration(&self) -> Option<WorkDuration> {
        match (self.clock_in, self.clock_out) {
            (Some(start), Some(end)) => Some(work_duration(start, end)),
            _ => None,
        }
    }

    pub fn initials(&self) -> String {
        self.employee_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Fields of a record before an id has been assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendanceRecord {
    pub employee_name: String,
    pub employee_id: String,
    pub date: NaiveDate,
    pub clock_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
}

/// Append-only, insertion-ordered list of attendance records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceLog {
    records: Vec<AttendanceRecord>,
}

impl AttendanceLog {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn next_id(&self) -> u32 {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn append(&mut self, new: NewAttendanceRecord) -> &AttendanceRecord {
        let id = self.next_id();
        let index = self.records.len();
        self.records.push(AttendanceRecord {
            id,
            employee_name: new.employee_name,
            employee_id: new.employee_id,
            date: new.date,
            clock_in: new.clock_in,
            clock_out: new.clock_out,
            status: new.status,
            notes: new.notes,
        });
        &self.records[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(raw: &str) -> NaiveTime {
        parse_clock_time(raw).unwrap()
    }

    fn nine() -> NaiveTime {
        AttendanceStatus::default_late_after()
    }

    /// Status for a raw clock-in field, blank meaning absent.
    fn status(raw: &str) -> Result<AttendanceStatus, TimeParseError> {
        parse_optional_clock_time(raw).map(|clock_in| AttendanceStatus::from_clock_in(clock_in, nine()))
    }

    fn duration(clock_in: &str, clock_out: &str) -> String {
        work_duration(time(clock_in), time(clock_out)).to_string()
    }

    fn new_record(name: &str, clock_in: Option<&str>) -> NewAttendanceRecord {
        let clock_in = clock_in.map(time);
        NewAttendanceRecord {
            employee_name: name.into(),
            employee_id: "EMP001".into(),
            date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            clock_in,
            clock_out: None,
            status: AttendanceStatus::from_clock_in(clock_in, nine()),
            notes: None,
        }
    }

    #[test]
    fn status_follows_clock_in() {
        assert_eq!(status("08:45"), Ok(AttendanceStatus::Present));
        assert_eq!(status("09:00"), Ok(AttendanceStatus::Present));
        assert_eq!(status("09:01"), Ok(AttendanceStatus::Late));
        assert_eq!(status("09:20"), Ok(AttendanceStatus::Late));
        assert_eq!(status(""), Ok(AttendanceStatus::Absent));
        assert_eq!(status("   "), Ok(AttendanceStatus::Absent));
    }

    #[test]
    fn status_agrees_with_padded_string_order() {
        for hour in 0..24 {
            for minute in [0, 1, 30, 59] {
                let raw = format!("{hour:02}:{minute:02}");
                let expected = if raw.as_str() > "09:00" {
                    AttendanceStatus::Late
                } else {
                    AttendanceStatus::Present
                };
                assert_eq!(status(&raw), Ok(expected), "{raw}");
            }
        }
    }

    #[test]
    fn status_rejects_malformed_clock_in() {
        assert_eq!(
            status("9am"),
            Err(TimeParseError::Malformed("9am".into()))
        );
    }

    #[test]
    fn status_honours_custom_threshold() {
        assert_eq!(
            AttendanceStatus::from_clock_in(Some(time("09:20")), time("09:30")),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn durations_format_hours_and_minutes() {
        assert_eq!(duration("09:00", "17:30"), "8h 30m");
        assert_eq!(duration("09:00", "08:00"), "23h 0m");
        assert_eq!(duration("09:00", "09:00"), "0h 0m");
        assert_eq!(duration("22:15", "06:05"), "7h 50m");
    }

    #[test]
    fn clock_times_report_bad_input() {
        assert_eq!(parse_clock_time(""), Err(TimeParseError::Empty));
        assert!(matches!(
            parse_clock_time("25:00"),
            Err(TimeParseError::Malformed(_))
        ));
        assert_eq!(parse_optional_clock_time("  "), Ok(None));
    }

    #[test]
    fn record_duration_requires_both_times() {
        let mut log = AttendanceLog::default();
        let record = log.append(new_record("Alex Johnson", Some("09:00"))).clone();
        assert_eq!(record.duration(), None);

        let full = AttendanceRecord {
            clock_out: Some(time("17:30")),
            ..record
        };
        assert_eq!(full.duration(), Some(WorkDuration::from_minutes(510)));
    }

    #[test]
    fn initials_take_first_letter_of_each_name() {
        let mut log = AttendanceLog::default();
        let record = log.append(new_record("Emily Rodriguez", None));
        assert_eq!(record.initials(), "ER");
    }

    #[test]
    fn log_assigns_sequential_unique_ids() {
        let mut log = AttendanceLog::default();
        assert_eq!(log.next_id(), 1);
        let first = log.append(new_record("Alex Johnson", Some("09:00"))).id;
        let second = log.append(new_record("Sarah Williams", Some("08:45"))).id;
        assert_eq!((first, second), (1, 2));
        assert_eq!(log.records().len(), 2);
        assert_eq!(log.records()[1].employee_name, "Sarah Williams");
    }

    #[test]
    fn next_id_skips_past_highest_existing_id() {
        let mut seeded = AttendanceLog::default();
        seeded.append(new_record("Alex Johnson", None));
        let mut records = seeded.records().to_vec();
        records[0].id = 7;
        let log = AttendanceLog::new(records);
        assert_eq!(log.next_id(), 8);
    }

    #[test]
    fn status_labels() {
        assert_eq!(AttendanceStatus::Late.to_string(), "late");
        assert_eq!(AttendanceStatus::Absent.label(), "Absent");
        assert_eq!(AttendanceStatus::Present.badge_class(), "badge-green");
    }
}
