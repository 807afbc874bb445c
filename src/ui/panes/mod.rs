//! TUI pane rendering modules
//!
//! Stateless render functions for the chrome around the program frame:
//!
//! - [`header`]: running program indicator and program tabs
//! - [`status`]: status bar with the program's status line and keybindings
//!
//! The program frame itself is drawn by [`App`](crate::ui::App), which hands
//! the inner area to the mounted widget.

pub mod header;
pub mod status;

// Re-export render functions for convenience
pub use header::render_header;
pub use status::render_status_bar;
