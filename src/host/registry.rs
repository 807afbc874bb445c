//! Fixed catalog of the built-in programs

use super::{Program, ProgramId, UnknownProgram};
use crate::ui::widgets::{CalculatorWidget, GameWidget, TextEditorWidget};
use rustc_hash::FxHashMap;

/// Factory that mounts a fresh widget in its initial state
pub type ProgramFactory = fn() -> Box<dyn Program>;

/// One catalog row: identifier, display label, names it answers to, and the
/// factory for its widget
#[derive(Debug, Clone, Copy)]
pub struct ProgramEntry {
    pub id: ProgramId,
    pub label: &'static str,
    pub aliases: &'static [&'static str],
    pub factory: ProgramFactory,
}

const BUILTIN_PROGRAMS: [ProgramEntry; 3] = [
    ProgramEntry {
        id: ProgramId::Calculator,
        label: "Calculator",
        aliases: &["calc"],
        factory: create_calculator,
    },
    ProgramEntry {
        id: ProgramId::Game,
        label: "Tic-Tac-Toe",
        aliases: &["tictactoe", "tic-tac-toe"],
        factory: create_game,
    },
    ProgramEntry {
        id: ProgramId::TextEditor,
        label: "Text Editor",
        aliases: &["editor", "text-editor"],
        factory: create_text_editor,
    },
];

fn create_calculator() -> Box<dyn Program> {
    Box::new(CalculatorWidget::new())
}

fn create_game() -> Box<dyn Program> {
    Box::new(GameWidget::new())
}

fn create_text_editor() -> Box<dyn Program> {
    Box::new(TextEditorWidget::new())
}

/// Immutable program catalog, built once at startup
#[derive(Debug, Clone)]
pub struct ProgramRegistry {
    entries: [ProgramEntry; 3],
    by_name: FxHashMap<&'static str, ProgramId>,
}

impl ProgramRegistry {
    pub fn builtin() -> Self {
        let entries = BUILTIN_PROGRAMS;
        let mut by_name = FxHashMap::default();
        for entry in &entries {
            by_name.insert(entry.id.key(), entry.id);
            for alias in entry.aliases {
                by_name.insert(*alias, entry.id);
            }
        }
        ProgramRegistry { entries, by_name }
    }

    /// Entries in display order
    pub fn entries(&self) -> &[ProgramEntry] {
        &self.entries
    }

    pub fn get(&self, id: ProgramId) -> &ProgramEntry {
        &self.entries[id.index()]
    }

    pub fn label(&self, id: ProgramId) -> &'static str {
        self.get(id).label
    }

    /// Resolve a program by key or alias, ignoring case and surrounding
    /// whitespace
    pub fn lookup(&self, name: &str) -> Result<ProgramId, UnknownProgram> {
        let normalized = name.trim().to_ascii_lowercase();
        self.by_name
            .get(normalized.as_str())
            .copied()
            .ok_or_else(|| UnknownProgram(name.to_string()))
    }

    /// Create a fresh widget for `id`
    pub fn mount(&self, id: ProgramId) -> Box<dyn Program> {
        (self.get(id).factory)()
    }
}

impl Default for ProgramRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
