use std::collections::{HashMap, HashSet};

use crate::activity::Activity;
use crate::aggregate::total_hours;
use crate::dates::format_work_date;

use super::column::Column;
use super::options::TableOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: Column,
    pub direction: SortDirection,
}

/// One row of the table body, in final display order.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayRow {
    GroupHeader {
        /// Raw grouping value the rows share.
        key: String,
        /// Display form of the grouping value.
        label: String,
        /// Aggregated hours for the group.
        hours: f64,
        entries: usize,
        collapsed: bool,
    },
    /// Index into the activity list.
    Activity(usize),
}

struct GroupAgg {
    key: String,
    hours: f64,
    rows: Vec<usize>,
}

/// The table's interaction state and row production.
///
/// Owns the activity list plus grouping, sorting, expansion, and pagination
/// state; the frontend draws whatever `page_rows` yields. The grand total
/// and the body row list are cached: they are rebuilt by the operations that
/// change their inputs, never during a draw.
pub struct TableModel {
    activities: Vec<Activity>,
    total_hours: f64,
    group_by: Option<Column>,
    sort: Option<Sort>,
    collapsed: HashSet<String>,
    expand_groups: bool,
    page_index: usize,
    page_size: usize,
    rows: Vec<DisplayRow>,
}

impl TableModel {
    pub fn new(activities: Vec<Activity>, options: &TableOptions) -> Self {
        let total = total_hours(&activities);
        let mut model = Self {
            activities,
            total_hours: total,
            group_by: None,
            sort: None,
            collapsed: HashSet::new(),
            expand_groups: options.expand_groups,
            page_index: 0,
            page_size: options.page_size.max(1),
            rows: Vec::new(),
        };
        model.rebuild_rows();
        if let Some(column) = options.initial_grouping {
            model.set_group_by(Some(column));
        }
        model
    }

    /// Replace the activity list, recomputing the cached grand total and rows.
    pub fn set_activities(&mut self, activities: Vec<Activity>) {
        self.total_hours = total_hours(&activities);
        self.activities = activities;
        self.collapsed.clear();
        self.page_index = 0;
        self.rebuild_rows();
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn activity(&self, index: usize) -> Option<&Activity> {
        self.activities.get(index)
    }

    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    pub fn group_by(&self) -> Option<Column> {
        self.group_by
    }

    /// Apply or clear grouping. Non-groupable columns are refused.
    pub fn set_group_by(&mut self, column: Option<Column>) {
        if let Some(column) = column {
            if !column.groupable() {
                return;
            }
        }
        self.group_by = column;
        self.collapsed.clear();
        self.page_index = 0;
        if !self.expand_groups {
            if let Some(column) = self.group_by {
                let order = self.ordered_indices();
                for group in self.build_groups(column, &order) {
                    self.collapsed.insert(group.key);
                }
            }
        }
        self.rebuild_rows();
    }

    /// Group by `column`, or clear grouping if it already provides it.
    pub fn toggle_group_by(&mut self, column: Column) {
        if self.group_by == Some(column) {
            self.set_group_by(None);
        } else {
            self.set_group_by(Some(column));
        }
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Cycle `column` through ascending, descending, unsorted.
    pub fn cycle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some(Sort { column: current, direction }) if current == column => match direction {
                SortDirection::Ascending => Some(Sort {
                    column,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(Sort {
                column,
                direction: SortDirection::Ascending,
            }),
        };
        self.page_index = 0;
        self.rebuild_rows();
    }

    pub fn is_collapsed(&self, key: &str) -> bool {
        self.collapsed.contains(key)
    }

    pub fn toggle_collapsed(&mut self, key: &str) {
        if !self.collapsed.remove(key) {
            self.collapsed.insert(key.to_string());
        }
        self.rebuild_rows();
        self.clamp_page();
    }

    /// Label of the aggregated Hours cell: names the column currently
    /// providing the grouping. The group's summed hours render after it.
    pub fn aggregated_cell_label(&self) -> Option<String> {
        self.group_by
            .map(|column| format!("Hours per {}", column.header()))
    }

    /// Row order after sorting, as indices into the activity list.
    fn ordered_indices(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.activities.len()).collect();
        if let Some(Sort { column, direction }) = self.sort {
            order.sort_by(|&a, &b| {
                let left = &self.activities[a];
                let right = &self.activities[b];
                let ordering = match column {
                    Column::Project => left.project.name.cmp(&right.project.name),
                    Column::Employee => left.employee.name.cmp(&right.employee.name),
                    // Lexicographic order of ISO dates is chronological.
                    Column::Date => left.date.cmp(&right.date),
                    Column::Hours => left
                        .hours
                        .partial_cmp(&right.hours)
                        .unwrap_or(std::cmp::Ordering::Equal),
                };
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        order
    }

    /// Groups in order of first appearance in the current row order.
    fn build_groups(&self, column: Column, order: &[usize]) -> Vec<GroupAgg> {
        let mut groups: Vec<GroupAgg> = Vec::new();
        let mut slot_by_key: HashMap<String, usize> = HashMap::new();
        for &index in order {
            let activity = &self.activities[index];
            let key = column.value(activity).group_key();
            let slot = *slot_by_key.entry(key.clone()).or_insert_with(|| {
                groups.push(GroupAgg {
                    key,
                    hours: 0.0,
                    rows: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].hours += activity.hours;
            groups[slot].rows.push(index);
        }
        groups
    }

    /// All body rows under the current grouping, sorting, and expansion state.
    pub fn display_rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Rebuild the cached row list. Called by every operation that changes
    /// its inputs: the activity list, grouping, sorting, or expansion.
    fn rebuild_rows(&mut self) {
        let order = self.ordered_indices();
        let Some(column) = self.group_by else {
            self.rows = order.into_iter().map(DisplayRow::Activity).collect();
            return;
        };

        let mut rows = Vec::new();
        for group in self.build_groups(column, &order) {
            let collapsed = self.collapsed.contains(&group.key);
            let label = match column {
                Column::Date => {
                    format_work_date(&group.key).unwrap_or_else(|_| group.key.clone())
                }
                _ => group.key.clone(),
            };
            rows.push(DisplayRow::GroupHeader {
                key: group.key,
                label,
                hours: group.hours,
                entries: group.rows.len(),
                collapsed,
            });
            if !collapsed {
                rows.extend(group.rows.into_iter().map(DisplayRow::Activity));
            }
        }
        self.rows = rows;
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.clamp_page();
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// The current page's window of body rows.
    pub fn page_rows(&self) -> &[DisplayRow] {
        let start = (self.page_index * self.page_size).min(self.rows.len());
        let end = (start + self.page_size).min(self.rows.len());
        &self.rows[start..end]
    }

    pub fn next_page(&mut self) {
        if self.page_index + 1 < self.page_count() {
            self.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    fn clamp_page(&mut self) {
        let last = self.page_count() - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }
}
