//! Main UI rendering and coordination

use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{
    Board, HelpPanel, LoadingDialog, LogsPanel, ReasonDialog, StatusBar, Toast,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::backend::AttendanceBackend;
use crate::config::Config;
use crate::constants::EVENT_POLL_MS;

/// Run the main TUI application
pub async fn run_app(config: Config, backend: Arc<dyn AttendanceBackend>) -> Result<()> {
    // Terminal initialization. Mouse capture is the acquire half of an
    // explicit pair released on shutdown; without it the terminal
    // would scroll instead of dragging.
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let mut app = App::new(&config, backend)?;

    // Initial load so the board fills as soon as the backend answers
    app.refresh_data();

    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup, releasing mouse capture before leaving the screen
    disable_raw_mode()?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        // Handle events with a timeout to allow for async operations
        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        handle_events(Event::Key(key), app)?;
                    }
                }
                Event::Mouse(mouse) => {
                    handle_events(Event::Mouse(mouse), app)?;
                }
                Event::Resize(_, _) => {
                    // Geometry is rebuilt on the next draw
                }
                _ => {}
            }
        }

        // Drain background fetch/commit results
        app.process_background_actions();
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let chunks = LayoutManager::main_layout(f.area());

    Board::render(f, chunks[0], app);
    StatusBar::render(f, chunks[1], app);

    if app.store.is_loading() {
        LoadingDialog::render(f, app);
    }

    if app.gate.is_open() {
        ReasonDialog::render(f, app);
    }

    if let Some(toast) = &app.toast {
        Toast::render(f, toast);
    }

    if app.show_logs {
        LogsPanel::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
