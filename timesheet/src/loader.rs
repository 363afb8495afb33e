use thiserror::Error;

use crate::activity::{Activity, ActivityError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid activity JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("activity #{index}: {source}")]
    Invalid { index: usize, source: ActivityError },
}

/// Deserialize a JSON array of activity records and validate every record.
///
/// Fails on the first invalid record, carrying its position in the input so
/// the caller can point at the offending entry.
pub fn activities_from_json(raw: &str) -> Result<Vec<Activity>, LoadError> {
    let activities: Vec<Activity> = serde_json::from_str(raw)?;
    for (index, activity) in activities.iter().enumerate() {
        activity
            .validate()
            .map_err(|source| LoadError::Invalid { index, source })?;
    }
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r#"[
        {
            "project": { "id": 1, "name": "Website" },
            "employee": { "id": 10, "name": "Ada" },
            "date": "2024-03-05",
            "hours": 3.0
        },
        {
            "project": { "id": 1, "name": "Website" },
            "employee": { "id": 11, "name": "Ben" },
            "date": "2024-03-05T10:00:00Z",
            "hours": 4.0
        }
    ]"#;

    #[test]
    fn test_loads_valid_records() {
        let activities = activities_from_json(GOOD).unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities[0].employee.name, "Ada");
        assert_eq!(activities[1].hours, 4.0);
    }

    #[test]
    fn test_missing_field_is_a_json_error() {
        // No employee at all: the typed model rejects it up front instead of
        // rendering a blank cell later.
        let raw = r#"[{ "project": { "id": 1, "name": "Website" }, "date": "2024-03-05", "hours": 1.0 }]"#;
        let err = activities_from_json(raw).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_invalid_record_reports_index() {
        let raw = r#"[
            {
                "project": { "id": 1, "name": "Website" },
                "employee": { "id": 10, "name": "Ada" },
                "date": "2024-03-05",
                "hours": 3.0
            },
            {
                "project": { "id": 1, "name": "Website" },
                "employee": { "id": 11, "name": "Ben" },
                "date": "not a date",
                "hours": 4.0
            }
        ]"#;
        let err = activities_from_json(raw).unwrap_err();
        match err {
            LoadError::Invalid { index, .. } => assert_eq!(index, 1),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_hours_rejected_on_load() {
        let raw = r#"[{
            "project": { "id": 1, "name": "Website" },
            "employee": { "id": 10, "name": "Ada" },
            "date": "2024-03-05",
            "hours": -2.0
        }]"#;
        assert!(matches!(
            activities_from_json(raw).unwrap_err(),
            LoadError::Invalid { index: 0, .. }
        ));
    }
}
