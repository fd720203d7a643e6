//! Terminal setup and teardown for chart display
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use super::CategoryChart;
use crate::error::{BudgetError, BudgetResult};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Initialize the terminal for full-screen drawing
pub fn init_terminal() -> BudgetResult<Tui> {
    // The chart can be opened many times per session; wrap the hook once
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
    });

    enter_screen(
        enable_raw_mode,
        || execute!(io::stdout(), EnterAlternateScreen),
        disable_raw_mode,
    )
    .map_err(tui_error)?;

    Terminal::new(CrosstermBackend::new(io::stdout())).map_err(|e| {
        let _ = restore_terminal();
        tui_error(e)
    })
}

/// Turn on raw mode, then switch screens
///
/// If the switch fails raw mode is turned back off, so the caller is left
/// with a line-buffered terminal either way.
fn enter_screen<R, A, D>(raw_on: R, alternate: A, raw_off: D) -> io::Result<()>
where
    R: FnOnce() -> io::Result<()>,
    A: FnOnce() -> io::Result<()>,
    D: FnOnce() -> io::Result<()>,
{
    raw_on()?;
    if let Err(e) = alternate() {
        let _ = raw_off();
        return Err(e);
    }
    Ok(())
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> BudgetResult<()> {
    disable_raw_mode().map_err(tui_error)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_error)?;
    Ok(())
}

/// Show the chart full screen and block until the user closes it
pub fn show(chart: &CategoryChart, currency_symbol: &str) -> BudgetResult<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, chart, currency_symbol);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Tui, chart: &CategoryChart, currency_symbol: &str) -> BudgetResult<()> {
    loop {
        terminal
            .draw(|frame| chart.render(frame, frame.area(), currency_symbol))
            .map_err(tui_error)?;

        // Resize and other events just trigger a redraw
        if let Event::Key(key) = event::read().map_err(tui_error)? {
            if key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
            {
                return Ok(());
            }
        }
    }
}

fn tui_error(err: io::Error) -> BudgetError {
    BudgetError::Tui(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_screen_switch_leaves_raw_mode() {
        let raw = Cell::new(false);

        let result = enter_screen(
            || {
                raw.set(true);
                Ok(())
            },
            || Err(io::Error::new(io::ErrorKind::Other, "no alternate screen")),
            || {
                raw.set(false);
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(!raw.get());
    }

    #[test]
    fn test_raw_mode_failure_skips_screen_switch() {
        let switched = Cell::new(false);

        let result = enter_screen(
            || Err(io::Error::new(io::ErrorKind::Other, "not a tty")),
            || {
                switched.set(true);
                Ok(())
            },
            || Ok(()),
        );

        assert!(result.is_err());
        assert!(!switched.get());
    }

    #[test]
    fn test_successful_setup_keeps_raw_mode() {
        let raw = Cell::new(false);

        enter_screen(
            || {
                raw.set(true);
                Ok(())
            },
            || Ok(()),
            || {
                raw.set(false);
                Ok(())
            },
        )
        .unwrap();

        assert!(raw.get());
    }
}
