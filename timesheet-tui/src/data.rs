use anyhow::{Context, Result};
use std::path::Path;
use timesheet::{activities_from_json, Activity};

/// Read and validate a JSON file of activity records.
pub fn load_activities(path: &Path) -> Result<Vec<Activity>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read activities from {}", path.display()))?;
    let activities = activities_from_json(&raw)
        .with_context(|| format!("Invalid activities in {}", path.display()))?;
    Ok(activities)
}
