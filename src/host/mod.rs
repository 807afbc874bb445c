//! The program host: one frame, swappable programs
//!
//! - [`registry`]: the fixed catalog of programs, each with a label and a
//!   factory that mounts a fresh widget
//! - [`shell`]: [`HostShell`], which owns the active selection and the
//!   mounted widget
//!
//! Programs never talk to each other. The only cross-program action is the
//! host switching which one is mounted, and a switch always throws the old
//! widget (and its state) away.

pub mod registry;
pub mod shell;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use std::fmt;
use thiserror::Error;

pub use registry::{ProgramEntry, ProgramRegistry};
pub use shell::{HostShell, HostView, MountId};

/// Identifier of a built-in program. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramId {
    Calculator,
    Game,
    TextEditor,
}

impl ProgramId {
    /// All programs in display order
    pub const ALL: [ProgramId; 3] = [
        ProgramId::Calculator,
        ProgramId::Game,
        ProgramId::TextEditor,
    ];

    /// Stable short name used on the command line
    pub fn key(self) -> &'static str {
        match self {
            ProgramId::Calculator => "calculator",
            ProgramId::Game => "game",
            ProgramId::TextEditor => "text",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ProgramId::Calculator => 0,
            ProgramId::Game => 1,
            ProgramId::TextEditor => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Returned when a name does not match any built-in program
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown program '{0}'")]
pub struct UnknownProgram(pub String);

/// A mounted program widget.
///
/// Each implementation owns its own model and nothing else. Widgets are
/// created by a registry factory and dropped when the host switches away.
pub trait Program {
    fn id(&self) -> ProgramId;

    /// Handle a key press. Returns true when the key was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    /// Draw the widget inside the host frame
    fn render(&self, frame: &mut Frame, area: Rect);

    /// One-line summary for the status bar
    fn status(&self) -> String;
}
