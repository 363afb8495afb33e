use super::utils::fit;
use super::*;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};
use timesheet::hours_display;
use timesheet::table::{Column, DisplayRow, SortDirection};
use timesheet::Activity;

pub fn render_table_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            format!(
                " Timesheet: {} ({} activities) ",
                app.source_label,
                app.model.activities().len()
            ),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    // Header and footer rows collapse to zero height when not sticky.
    let header_height = if app.sticky_header { 1 } else { 0 };
    let footer_height = if app.sticky_footer { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // sticky header
            Constraint::Min(0),                // body rows
            Constraint::Length(footer_height), // sticky footer
            Constraint::Length(1),             // page info + status
        ])
        .split(inner);

    if app.sticky_header {
        render_header(frame, app, chunks[0]);
    }
    render_body(frame, app, chunks[1]);
    if app.sticky_footer {
        render_footer(frame, app, chunks[2]);
    }
    render_page_line(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span<'_>> = Vec::new();
    for (slot, column) in Column::ALL.into_iter().enumerate() {
        let mut text = column.header().to_string();
        if let Some(sort) = app.model.sort() {
            if sort.column == column {
                text.push_str(match sort.direction {
                    SortDirection::Ascending => " ↑",
                    SortDirection::Descending => " ↓",
                });
            }
        }

        let style = if column == app.focused_column {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if app.model.group_by() == Some(column) {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(fit(&text, app.column_widths[slot]), style));
        if slot < Column::ALL.len() - 1 {
            spans.push(Span::raw(" "));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(frame: &mut Frame, app: &mut App, area: Rect) {
    let row_count = app.model.page_rows().len();

    if row_count == 0 {
        let empty = Paragraph::new("No activities")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let max_rows = area.height as usize;
    if max_rows == 0 {
        return;
    }

    if app.focused_row >= row_count {
        app.focused_row = row_count - 1;
    }

    // Clamp scroll so the focused row stays visible.
    if app.focused_row >= app.table_scroll + max_rows {
        app.table_scroll = app.focused_row + 1 - max_rows;
    }
    if app.focused_row < app.table_scroll {
        app.table_scroll = app.focused_row;
    }
    if row_count <= max_rows {
        app.table_scroll = 0;
    } else if app.table_scroll > row_count - max_rows {
        app.table_scroll = row_count - max_rows;
    }

    // Reserve 1 column on the right for the scrollbar.
    let content_width = if row_count > max_rows {
        area.width.saturating_sub(1)
    } else {
        area.width
    };

    let mut row_y = area.y;
    for (row_index, row) in app
        .model
        .page_rows()
        .iter()
        .enumerate()
        .skip(app.table_scroll)
        .take(max_rows)
    {
        let is_focused = row_index == app.focused_row;
        let line = match row {
            DisplayRow::Activity(index) => match app.model.activity(*index) {
                Some(activity) => build_activity_row(app, activity, is_focused),
                None => Line::raw(""),
            },
            DisplayRow::GroupHeader {
                label,
                hours,
                entries,
                collapsed,
                ..
            } => build_group_row(app, label, *hours, *entries, *collapsed, is_focused),
        };
        let row_rect = Rect::new(area.x, row_y, content_width, 1);
        frame.render_widget(Paragraph::new(line), row_rect);
        row_y += 1;
    }

    if row_count > max_rows {
        let mut scrollbar_state = ScrollbarState::new(row_count)
            .position(app.table_scroll)
            .viewport_content_length(max_rows);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(Color::DarkGray)),
            area,
            &mut scrollbar_state,
        );
    }
}

fn build_activity_row<'a>(app: &App, activity: &'a Activity, is_focused: bool) -> Line<'a> {
    let colors = [Color::Cyan, Color::White, Color::Yellow, Color::Magenta];
    let mut spans: Vec<Span<'_>> = Vec::new();
    for (slot, column) in Column::ALL.into_iter().enumerate() {
        let cell = column.value(activity).display();
        spans.push(Span::styled(
            fit(&cell, app.column_widths[slot]),
            Style::default().fg(colors[slot]),
        ));
        if slot < Column::ALL.len() - 1 {
            spans.push(Span::raw(" "));
        }
    }

    if is_focused {
        return focused_line(spans);
    }
    Line::from(spans)
}

fn build_group_row<'a>(
    app: &App,
    label: &'a str,
    hours: f64,
    entries: usize,
    collapsed: bool,
    is_focused: bool,
) -> Line<'a> {
    let marker = if collapsed { "▶" } else { "▼" };
    // Group text spans the three leading columns plus their gaps.
    let lead_width = app.column_widths[0] + app.column_widths[1] + app.column_widths[2] + 2;
    let lead = fit(&format!("{} {} ({})", marker, label, entries), lead_width);

    let mut spans = vec![
        Span::styled(
            lead,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    if let Some(label) = app.model.aggregated_cell_label() {
        spans.push(Span::styled(
            format!("{}: ", label),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            hours_display(hours),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    if is_focused {
        return focused_line(spans);
    }
    Line::from(spans)
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let lead_width = app.column_widths[0] + app.column_widths[1] + app.column_widths[2] + 2;
    let spans = vec![
        Span::raw(" ".repeat(lead_width as usize + 1)),
        Span::styled(
            "Total Hours: ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            hours_display(app.model.total_hours()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_page_line(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(
            "Page {}/{} ({} rows)",
            app.model.page_index() + 1,
            app.model.page_count(),
            app.model.page_rows().len()
        ),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(status) = &app.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            status.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Focused rows render as a single inverse-video span.
fn focused_line(spans: Vec<Span<'_>>) -> Line<'static> {
    let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    )])
}
