//! Terminal front end

mod keys;
mod render;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app::App;

use keys::{UiState, handle_key};

const TICK: Duration = Duration::from_millis(100);

/// Take over the terminal until the operator quits
pub async fn run(app: &mut App) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        tracing::error!(error = %e, "Console loop failed");
    }
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut ui = UiState::default();

    while app.is_running() {
        app.pump();
        ui.sync(app);
        terminal.draw(|f| render::draw(f, app, &ui))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            handle_key(app, &mut ui, key);
        }
        // Let background requests make progress between frames
        tokio::task::yield_now().await;
    }
    Ok(())
}
