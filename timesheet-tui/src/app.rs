use timesheet::table::{Column, DisplayRow, SortDirection, TableModel, TableOptions};
use timesheet::Activity;

pub const DEFAULT_COLUMN_WIDTHS: [u16; 4] = [22, 18, 14, 28];
const MIN_COLUMN_WIDTH: u16 = 6;
const MAX_COLUMN_WIDTH: u16 = 60;

pub struct App {
    pub running: bool,
    pub model: TableModel,
    pub focused_column: Column,
    /// Focused row within the current page.
    pub focused_row: usize,
    pub column_widths: [u16; 4],
    pub resizable_columns: bool,
    pub sticky_header: bool,
    pub sticky_footer: bool,
    /// Scroll offset within the current page (# rows skipped from top).
    pub table_scroll: usize,
    pub status_message: Option<String>,
    pub source_label: String,
}

impl App {
    pub fn new(
        activities: Vec<Activity>,
        options: TableOptions,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            running: true,
            model: TableModel::new(activities, &options),
            focused_column: Column::Project,
            focused_row: 0,
            column_widths: DEFAULT_COLUMN_WIDTHS,
            resizable_columns: options.resizable_columns,
            sticky_header: options.sticky_header,
            sticky_footer: options.sticky_footer,
            table_scroll: 0,
            status_message: None,
            source_label: source_label.into(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn column_slot(column: Column) -> usize {
        Column::ALL
            .iter()
            .position(|&c| c == column)
            .unwrap_or(0)
    }

    pub fn focus_next_column(&mut self) {
        self.focused_column = self.focused_column.next();
    }

    pub fn focus_previous_column(&mut self) {
        self.focused_column = self.focused_column.previous();
    }

    pub fn focus_row_down(&mut self) {
        let rows = self.model.page_rows().len();
        if rows > 0 && self.focused_row + 1 < rows {
            self.focused_row += 1;
        }
    }

    pub fn focus_row_up(&mut self) {
        self.focused_row = self.focused_row.saturating_sub(1);
    }

    fn reset_row_focus(&mut self) {
        self.focused_row = 0;
        self.table_scroll = 0;
    }

    pub fn next_page(&mut self) {
        self.model.next_page();
        self.reset_row_focus();
        self.page_status();
    }

    pub fn previous_page(&mut self) {
        self.model.previous_page();
        self.reset_row_focus();
        self.page_status();
    }

    fn page_status(&mut self) {
        self.set_status(format!(
            "Page {}/{}",
            self.model.page_index() + 1,
            self.model.page_count()
        ));
    }

    pub fn toggle_grouping(&mut self, column: Column) {
        self.model.toggle_group_by(column);
        self.reset_row_focus();
        match self.model.group_by() {
            Some(column) => self.set_status(format!("Grouped by {}", column.header())),
            None => self.set_status("Grouping cleared".to_string()),
        }
    }

    pub fn clear_grouping(&mut self) {
        if self.model.group_by().is_some() {
            self.model.set_group_by(None);
            self.reset_row_focus();
            self.set_status("Grouping cleared".to_string());
        }
    }

    pub fn cycle_sort_focused(&mut self) {
        self.model.cycle_sort(self.focused_column);
        self.reset_row_focus();
        match self.model.sort() {
            Some(sort) => {
                let direction = match sort.direction {
                    SortDirection::Ascending => "ascending",
                    SortDirection::Descending => "descending",
                };
                self.set_status(format!("Sorted by {} {}", sort.column.header(), direction));
            }
            None => self.set_status("Sort cleared".to_string()),
        }
    }

    pub fn widen_focused_column(&mut self) {
        self.resize_focused_column(1);
    }

    pub fn narrow_focused_column(&mut self) {
        self.resize_focused_column(-1);
    }

    fn resize_focused_column(&mut self, delta: i16) {
        if !self.resizable_columns {
            return;
        }
        let slot = Self::column_slot(self.focused_column);
        let width = self.column_widths[slot] as i16 + delta;
        self.column_widths[slot] = width.clamp(MIN_COLUMN_WIDTH as i16, MAX_COLUMN_WIDTH as i16) as u16;
    }

    /// Collapse or expand the focused group header.
    pub fn activate_focused_row(&mut self) {
        let key = match self.model.page_rows().get(self.focused_row) {
            Some(DisplayRow::GroupHeader { key, .. }) => key.clone(),
            _ => return,
        };
        self.model.toggle_collapsed(&key);
        let remaining = self.model.page_rows().len();
        if remaining > 0 && self.focused_row >= remaining {
            self.focused_row = remaining - 1;
        }
    }
}
