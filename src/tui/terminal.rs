//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are entered on start and always left
//! again, including when the process panics.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // A panic must not leave the shell in raw mode
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Put the screen back first so the panic message is readable
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Raw mode, alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Hand stdout to ratatui
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
pub fn run_tui(storage: &mut Storage, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    info!(tab = %settings.default_tab, "starting terminal UI");

    // Session state and the input/tick thread
    let mut app = App::new(storage, settings);
    let events = EventHandler::default();

    let result = event_loop(&mut terminal, &mut app, &events);

    // Restore even when the loop failed, then report its error
    restore_terminal()?;
    info!("terminal UI closed");
    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        // Draw
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        // Ticks only age the status message; everything else goes to the handler
        match events.next()? {
            Event::Tick => app.tick(),
            event => handle_event(app, event)?,
        }

        // Quit
        if app.should_quit {
            return Ok(());
        }
    }
}
