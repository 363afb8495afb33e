use crate::activity::Activity;
use crate::aggregate::hours_display;
use crate::dates::format_work_date;

/// The four timesheet columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Project,
    Employee,
    Date,
    Hours,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Project, Column::Employee, Column::Date, Column::Hours];

    pub fn header(self) -> &'static str {
        match self {
            Column::Project => "Project",
            Column::Employee => "Employee",
            Column::Date => "Date",
            Column::Hours => "Hours",
        }
    }

    /// Hours is aggregated, never grouped on.
    pub fn groupable(self) -> bool {
        !matches!(self, Column::Hours)
    }

    pub fn next(self) -> Column {
        match self {
            Column::Project => Column::Employee,
            Column::Employee => Column::Date,
            Column::Date => Column::Hours,
            Column::Hours => Column::Project,
        }
    }

    pub fn previous(self) -> Column {
        match self {
            Column::Project => Column::Hours,
            Column::Employee => Column::Project,
            Column::Date => Column::Employee,
            Column::Hours => Column::Date,
        }
    }

    /// Typed accessor for this column's cell in a record.
    pub fn value(self, activity: &Activity) -> CellValue<'_> {
        match self {
            Column::Project => CellValue::Text(&activity.project.name),
            Column::Employee => CellValue::Text(&activity.employee.name),
            Column::Date => CellValue::Date(&activity.date),
            Column::Hours => CellValue::Hours(activity.hours),
        }
    }
}

/// A typed cell value with one display rule per column kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    /// Raw ISO-like date string; rendered in short form.
    Date(&'a str),
    Hours(f64),
}

impl CellValue<'_> {
    /// Display representation of the cell.
    ///
    /// A date that fails to parse falls back to its raw string; loaded data
    /// is validated up front, so that path only serves callers that skip
    /// validation.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text) => (*text).to_string(),
            CellValue::Date(raw) => {
                format_work_date(raw).unwrap_or_else(|_| (*raw).to_string())
            }
            CellValue::Hours(hours) => hours_display(*hours),
        }
    }

    /// The raw value rows cluster on when this column provides the grouping.
    pub fn group_key(&self) -> String {
        match self {
            CellValue::Text(text) => (*text).to_string(),
            CellValue::Date(raw) => (*raw).to_string(),
            CellValue::Hours(hours) => hours_display(*hours),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{Employee, Project};

    fn activity() -> Activity {
        Activity {
            project: Project {
                id: 1,
                name: "Website".to_string(),
            },
            employee: Employee {
                id: 10,
                name: "Ada".to_string(),
            },
            date: "2024-03-05T10:00:00Z".to_string(),
            hours: 7.5,
        }
    }

    #[test]
    fn test_headers_in_fixed_order() {
        let headers: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(headers, ["Project", "Employee", "Date", "Hours"]);
    }

    #[test]
    fn test_only_hours_is_not_groupable() {
        assert!(Column::Project.groupable());
        assert!(Column::Employee.groupable());
        assert!(Column::Date.groupable());
        assert!(!Column::Hours.groupable());
    }

    #[test]
    fn test_cell_display_per_kind() {
        let a = activity();
        assert_eq!(Column::Project.value(&a).display(), "Website");
        assert_eq!(Column::Employee.value(&a).display(), "Ada");
        assert_eq!(Column::Date.value(&a).display(), "Mar 5, 2024");
        assert_eq!(Column::Hours.value(&a).display(), "7.5");
    }

    #[test]
    fn test_unparseable_date_displays_raw() {
        let mut a = activity();
        a.date = "someday".to_string();
        assert_eq!(Column::Date.value(&a).display(), "someday");
    }

    #[test]
    fn test_date_group_key_is_raw_string() {
        let a = activity();
        assert_eq!(Column::Date.value(&a).group_key(), "2024-03-05T10:00:00Z");
    }
}
