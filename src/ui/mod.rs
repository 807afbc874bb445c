//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state and keyboard event loop; routes host keys
//!   (program switching, quit) and hands the rest to the mounted program
//! - **[`panes`]** — stateless render functions for the header and status bar
//! - **[`widgets`]** — one widget per program, each owning its own model
//! - **[`theme`]** — centralized color palette used by panes and widgets
//!
//! [`terminal`] holds the raw-mode/alternate-screen guard used by the binary.
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`HostShell`] and call [`App::run`] to start the event loop.
//!
//! [`HostShell`]: crate::host::HostShell
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use terminal::TerminalGuard;
