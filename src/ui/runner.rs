//! Terminal lifecycle and the event loop for the showcase binary

use crate::config::Config;
use crate::ui::app::ShowcaseApp;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::time::Instant;

/// Set up the terminal, run the showcase, restore the terminal
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ShowcaseApp::new(&config);
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut ShowcaseApp,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| app.render(f, f.area()))?;
        event_handler.mark_rendered();

        let event = event_handler.next_event().await?;
        match event {
            EventType::Key(_) | EventType::Mouse(_) | EventType::Resize(_, _) | EventType::Tick => {
                app.handle_event(event, Instant::now());
            }
            EventType::Render | EventType::Other => {}
        }

        if app.should_quit() {
            log::info!("showcase exiting");
            return Ok(());
        }
    }
}
