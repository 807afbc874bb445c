//! Program widgets mounted inside the host frame
//!
//! - [`calculator`]: expression input and result line
//! - [`game`]: 3x3 tic-tac-toe grid with a keyboard cursor
//! - [`editor`]: text area with a word count
//!
//! Each widget implements [`Program`](crate::host::Program) and owns its own
//! model. Nothing here is shared between widgets.

pub mod calculator;
pub mod editor;
pub mod game;

pub use calculator::CalculatorWidget;
pub use editor::TextEditorWidget;
pub use game::GameWidget;
