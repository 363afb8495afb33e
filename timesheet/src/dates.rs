use thiserror::Error;
use time::{Date, Month};

/// Errors raised when a work date string cannot be turned into a calendar date.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("expected YYYY-MM-DD, found {0} segments")]
    SegmentCount(usize),
    #[error("non-numeric date segment: {0:?}")]
    NonNumeric(String),
    #[error("no such calendar date: {0}")]
    OutOfRange(String),
}

/// Parse a work date string into a calendar date.
///
/// The input is ISO-like: the portion before an optional `T` separator must
/// be three hyphen-separated numeric segments (year, month, day). Anything
/// after the `T` (a time component) is ignored.
pub fn parse_work_date(raw: &str) -> Result<Date, DateError> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    let segments: Vec<&str> = date_part.split('-').collect();
    if segments.len() != 3 {
        return Err(DateError::SegmentCount(segments.len()));
    }

    let year: i32 = parse_segment(segments[0])?;
    let month_number: u8 = parse_segment(segments[1])?;
    let day: u8 = parse_segment(segments[2])?;

    let month = Month::try_from(month_number)
        .map_err(|_| DateError::OutOfRange(date_part.to_string()))?;
    Date::from_calendar_date(year, month, day)
        .map_err(|_| DateError::OutOfRange(date_part.to_string()))
}

fn parse_segment<T: std::str::FromStr>(segment: &str) -> Result<T, DateError> {
    segment
        .parse()
        .map_err(|_| DateError::NonNumeric(segment.to_string()))
}

/// Render a work date string in short form, e.g. `Mar 5, 2024`.
pub fn format_work_date(raw: &str) -> Result<String, DateError> {
    Ok(format_short(parse_work_date(raw)?))
}

/// Short display form of a calendar date.
pub fn format_short(date: Date) -> String {
    format!(
        "{} {}, {}",
        month_abbrev(date.month()),
        date.day(),
        date.year()
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_work_date("2024-03-05").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), Month::March);
        assert_eq!(date.day(), 5);
    }

    #[test]
    fn test_time_suffix_is_ignored() {
        assert_eq!(
            parse_work_date("2024-03-05T10:00:00Z").unwrap(),
            parse_work_date("2024-03-05").unwrap()
        );
    }

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_work_date("2024-03-05").unwrap(), "Mar 5, 2024");
        assert_eq!(
            format_work_date("2024-03-05T10:00:00Z").unwrap(),
            "Mar 5, 2024"
        );
        assert_eq!(format_work_date("2023-12-31").unwrap(), "Dec 31, 2023");
    }

    #[test]
    fn test_wrong_segment_count() {
        assert_eq!(parse_work_date("2024-03"), Err(DateError::SegmentCount(2)));
        assert_eq!(parse_work_date(""), Err(DateError::SegmentCount(1)));
        assert_eq!(
            parse_work_date("2024-03-05-07"),
            Err(DateError::SegmentCount(4))
        );
    }

    #[test]
    fn test_non_numeric_segment() {
        assert_eq!(
            parse_work_date("2024-ab-05"),
            Err(DateError::NonNumeric("ab".to_string()))
        );
    }

    #[test]
    fn test_impossible_calendar_date() {
        assert_eq!(
            parse_work_date("2024-13-05"),
            Err(DateError::OutOfRange("2024-13-05".to_string()))
        );
        assert_eq!(
            parse_work_date("2024-02-30"),
            Err(DateError::OutOfRange("2024-02-30".to_string()))
        );
    }
}
