use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

mod table_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    table_view::render_table_view(frame, app, root[0]);
    render_controls(frame, root[1]);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls_text = vec![
        Span::styled("P/E/D", Style::default().fg(Color::Yellow)),
        Span::raw(": Group  "),
        Span::styled("G", Style::default().fg(Color::Yellow)),
        Span::raw(": Ungroup  "),
        Span::styled("S", Style::default().fg(Color::Yellow)),
        Span::raw(": Sort  "),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::raw(": Column  "),
        Span::styled("+/-", Style::default().fg(Color::Yellow)),
        Span::raw(": Resize  "),
        Span::styled("N/B", Style::default().fg(Color::Yellow)),
        Span::raw(": Page  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Fold group  "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(": Quit"),
    ];

    let controls = Paragraph::new(Line::from(controls_text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(controls, area);
}
