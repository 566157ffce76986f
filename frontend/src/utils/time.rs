use chrono::{Datelike, Local, NaiveDate};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Value for an `<input type="date">`.
pub fn format_date_input(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// e.g. `6/15/2023`
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// e.g. `Thursday, June 15, 2023`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(format_date_input(date), "2023-06-15");
        assert_eq!(format_short_date(date), "6/15/2023");
        assert_eq!(format_long_date(date), "Thursday, June 15, 2023");
    }

    #[test]
    fn long_date_does_not_pad_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "Tuesday, March 5, 2024");
    }
}
