//! Terminal setup for the calculator screen
//!
//! The keypad is clickable, so mouse capture is switched on together with
//! raw mode and the alternate screen. All three are undone on exit and from
//! the panic hook, otherwise the user's shell is left receiving mouse escape
//! sequences.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into calculator mode
///
/// Raw mode delivers single key presses (digits, Backspace, Enter) without
/// waiting for a newline. Mouse capture turns clicks on the keypad into
/// `MouseEvent`s for the reducer to hit-test.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Hand the terminal back to the shell
///
/// Mouse capture goes first so no click reports leak once the alternate
/// screen is gone.
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    terminal.show_cursor()?;

    Ok(())
}

/// Restore the terminal before a panic message is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);

        original_hook(panic_info);
    }));
}
