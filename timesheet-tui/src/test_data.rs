use timesheet::{Activity, Employee, Project};

fn entry(
    project_id: i32,
    project: &str,
    employee_id: i32,
    employee: &str,
    date: &str,
    hours: f64,
) -> Activity {
    Activity {
        project: Project {
            id: project_id,
            name: project.to_string(),
        },
        employee: Employee {
            id: employee_id,
            name: employee.to_string(),
        },
        date: date.to_string(),
        hours,
    }
}

/// Built-in sample timesheet for the `demo` subcommand.
pub fn demo_activities() -> Vec<Activity> {
    vec![
        entry(1, "Website Relaunch", 10, "Anna Lindberg", "2024-03-04", 6.0),
        entry(1, "Website Relaunch", 11, "Ben Carter", "2024-03-04", 4.5),
        entry(2, "Mobile App", 12, "Cleo Park", "2024-03-04", 8.0),
        entry(1, "Website Relaunch", 10, "Anna Lindberg", "2024-03-05", 7.5),
        entry(3, "Internal Tools", 13, "David Norén", "2024-03-05", 3.0),
        entry(2, "Mobile App", 11, "Ben Carter", "2024-03-05T09:30:00Z", 2.5),
        entry(2, "Mobile App", 12, "Cleo Park", "2024-03-05", 5.0),
        entry(1, "Website Relaunch", 11, "Ben Carter", "2024-03-06", 8.0),
        entry(3, "Internal Tools", 10, "Anna Lindberg", "2024-03-06", 1.5),
        entry(3, "Internal Tools", 13, "David Norén", "2024-03-06T14:00:00Z", 6.0),
        entry(2, "Mobile App", 12, "Cleo Park", "2024-03-07", 7.0),
        entry(1, "Website Relaunch", 10, "Anna Lindberg", "2024-03-07", 4.0),
        entry(3, "Internal Tools", 13, "David Norén", "2024-03-07", 2.5),
        entry(2, "Mobile App", 11, "Ben Carter", "2024-03-08", 6.5),
        entry(1, "Website Relaunch", 12, "Cleo Park", "2024-03-08", 3.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_data_is_valid() {
        let activities = demo_activities();
        assert!(!activities.is_empty());
        for activity in &activities {
            activity.validate().unwrap();
        }
    }
}
