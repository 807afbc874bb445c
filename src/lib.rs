//! # Introduction
//!
//! vonneumann shows the idea behind the general-purpose computer: one fixed
//! machine that becomes a different tool depending on the program it runs.
//! A single terminal frame hosts three small programs (a calculator, a
//! tic-tac-toe game and a text editor) and switches between them.
//!
//! ## Layers
//!
//! ```text
//! key event → App → HostShell → mounted Program widget → model
//! ```
//!
//! 1. [`calc`] — whitelisted arithmetic: lexer, recursive descent parser and
//!    evaluator, plus the [`calc::Calculator`] input/result model.
//! 2. [`game`] — tic-tac-toe board, turn order and win/draw detection.
//! 3. [`text`] — text buffer with a derived word count.
//! 4. [`host`] — program registry and the [`host::HostShell`] that owns the
//!    active program. Switching programs drops the old widget's state.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 6. [`logging`] — `tracing` subscriber setup for the binary.

pub mod calc;
pub mod game;
pub mod host;
pub mod logging;
pub mod text;
pub mod ui;
