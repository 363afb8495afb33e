mod app;
mod cli;
mod config;
mod data;
mod test_data;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::TimesheetConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use timesheet::table::{Column, TableOptions};
use timesheet::Activity;

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::View { file } => {
            let activities = data::load_activities(&file)?;
            let label = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            run_table(activities, label)
        }
        Commands::Demo => run_table(test_data::demo_activities(), "demo data".to_string()),
        Commands::ConfigPath => {
            let path = TimesheetConfig::config_path()?;
            if !path.exists() {
                TimesheetConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_table(activities: Vec<Activity>, source_label: String) -> Result<()> {
    let config = TimesheetConfig::load()?;
    let options = TableOptions {
        page_size: config.page_size,
        ..TableOptions::default()
    };
    let mut app = App::new(activities, options, source_label);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(key, app);
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App) {
    // Status messages are transient: any key press clears the previous one.
    app.clear_status();
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        // Grouping toggles, one per groupable column
        KeyCode::Char('p') | KeyCode::Char('P') => app.toggle_grouping(Column::Project),
        KeyCode::Char('e') | KeyCode::Char('E') => app.toggle_grouping(Column::Employee),
        KeyCode::Char('d') | KeyCode::Char('D') => app.toggle_grouping(Column::Date),
        KeyCode::Char('g') | KeyCode::Char('G') => app.clear_grouping(),
        KeyCode::Up | KeyCode::Char('k') => app.focus_row_up(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_row_down(),
        KeyCode::Left | KeyCode::Char('h') => app.focus_previous_column(),
        KeyCode::Right | KeyCode::Char('l') => app.focus_next_column(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.cycle_sort_focused(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.widen_focused_column(),
        KeyCode::Char('-') => app.narrow_focused_column(),
        KeyCode::Char('n') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('b') | KeyCode::PageUp => app.previous_page(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused_row(),
        _ => {}
    }
}
