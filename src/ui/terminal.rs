//! Terminal setup and teardown for the interactive session

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns raw mode and the alternate screen for as long as it lives.
///
/// Dropping the guard restores the terminal, including while unwinding from
/// a panic. Call [`TerminalGuard::restore`] on the normal exit path to get
/// the teardown error back.
pub struct TerminalGuard {
    terminal: Tui,
    restored: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, and install a panic hook
    /// that puts the terminal back before the panic message is printed.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let terminal = match enter_screen() {
            Ok(terminal) => terminal,
            Err(err) => {
                // Best effort; the setup error is the one worth reporting
                let _ = restore_terminal();
                return Err(err);
            }
        };

        install_panic_hook();
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = restore_terminal();
        }
    }
}

fn enter_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Leave raw mode and the alternate screen and show the cursor.
///
/// Every step runs even when an earlier one fails; the first error wins.
pub fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}
