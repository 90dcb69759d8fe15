//! Terminal setup, teardown, and main event loop.

mod app;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

pub use app::PlayApp;

/// How long to wait for input before advancing the game clock.
const TICK: Duration = Duration::from_millis(100);

/// Launch the TUI.
pub fn run(mut app: PlayApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop. Input is polled so the security guard keeps turning
/// while the player thinks.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut PlayApp,
) -> Result<(), String> {
    let mut last_tick = Instant::now();
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= TICK {
            app.advance(elapsed);
            last_tick = Instant::now();
        }
    }
}

fn handle_event(app: &mut PlayApp, event: Event) {
    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.should_quit = true;
            return;
        }
        app.handle_key(key);
    }
}
