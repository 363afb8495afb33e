use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::{parse_work_date, DateError};

/// A project hours are logged against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    pub id: i32,
    pub name: String,
}

/// An employee logging hours.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    pub id: i32,
    pub name: String,
}

/// One logged work entry. Immutable input; the table never mutates it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    pub project: Project,
    pub employee: Employee,
    /// ISO-like date: `YYYY-MM-DD`, optionally followed by `T` and a time.
    pub date: String,
    pub hours: f64,
}

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("hours is not a finite number")]
    NonFiniteHours,
    #[error("hours is negative: {0}")]
    NegativeHours(f64),
    #[error("invalid date {raw:?}: {source}")]
    InvalidDate { raw: String, source: DateError },
}

impl Activity {
    /// Check the record invariants: finite non-negative hours, parseable date.
    ///
    /// Run at ingestion so that everything downstream (aggregation, display)
    /// can trust the record without re-checking.
    pub fn validate(&self) -> Result<(), ActivityError> {
        if !self.hours.is_finite() {
            return Err(ActivityError::NonFiniteHours);
        }
        if self.hours < 0.0 {
            return Err(ActivityError::NegativeHours(self.hours));
        }
        parse_work_date(&self.date).map_err(|source| ActivityError::InvalidDate {
            raw: self.date.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(date: &str, hours: f64) -> Activity {
        Activity {
            project: Project {
                id: 1,
                name: "Website".to_string(),
            },
            employee: Employee {
                id: 1,
                name: "Ada".to_string(),
            },
            date: date.to_string(),
            hours,
        }
    }

    #[test]
    fn test_valid_activity() {
        assert!(activity("2024-03-05", 7.5).validate().is_ok());
        assert!(activity("2024-03-05T10:00:00Z", 0.0).validate().is_ok());
    }

    #[test]
    fn test_negative_hours_rejected() {
        let err = activity("2024-03-05", -1.0).validate().unwrap_err();
        assert!(matches!(err, ActivityError::NegativeHours(h) if h == -1.0));
    }

    #[test]
    fn test_non_finite_hours_rejected() {
        let err = activity("2024-03-05", f64::NAN).validate().unwrap_err();
        assert!(matches!(err, ActivityError::NonFiniteHours));
        let err = activity("2024-03-05", f64::INFINITY).validate().unwrap_err();
        assert!(matches!(err, ActivityError::NonFiniteHours));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let err = activity("march 5th", 1.0).validate().unwrap_err();
        assert!(matches!(err, ActivityError::InvalidDate { .. }));
    }
}
