//! Host shell: owns the active program and its mounted widget

use super::{Program, ProgramId, ProgramRegistry};
use tracing::{info, warn};

/// Identity of one mount. A new id is issued every time a widget is
/// created, so two views with the same id show the same widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

/// What the frame needs to draw the active program
pub struct HostView<'a> {
    pub id: ProgramId,
    pub label: &'static str,
    pub mount: MountId,
    pub program: &'a dyn Program,
}

/// Holds the single "which program is running" selection.
///
/// Widget state lives exactly as long as the mount: switching away drops
/// the widget, switching back mounts a new one in its initial state.
pub struct HostShell {
    registry: ProgramRegistry,
    active: ProgramId,
    mounted: Box<dyn Program>,
    mount_id: MountId,
}

impl HostShell {
    /// Host with the calculator active
    pub fn new() -> Self {
        Self::with_program(ProgramId::Calculator)
    }

    pub fn with_program(id: ProgramId) -> Self {
        Self::with_registry(ProgramRegistry::builtin(), id)
    }

    pub fn with_registry(registry: ProgramRegistry, id: ProgramId) -> Self {
        let mounted = registry.mount(id);
        info!(program = %id, "program mounted");
        HostShell {
            registry,
            active: id,
            mounted,
            mount_id: MountId(0),
        }
    }

    pub fn registry(&self) -> &ProgramRegistry {
        &self.registry
    }

    pub fn active_program(&self) -> ProgramId {
        self.active
    }

    pub fn active_label(&self) -> &'static str {
        self.registry.label(self.active)
    }

    pub fn mount_id(&self) -> MountId {
        self.mount_id
    }

    /// Make `id` the active program.
    ///
    /// Selecting the program that is already active keeps the current
    /// widget. Returns true when a new widget was mounted.
    pub fn switch_program(&mut self, id: ProgramId) -> bool {
        if id == self.active {
            return false;
        }

        let previous = self.active;
        self.mounted = self.registry.mount(id);
        self.active = id;
        self.mount_id = MountId(self.mount_id.0 + 1);
        info!(from = %previous, to = %id, mount = self.mount_id.0, "program switched");
        true
    }

    /// Switch by key or alias. Unknown names leave the host untouched.
    pub fn switch_program_by_name(&mut self, name: &str) -> bool {
        match self.registry.lookup(name) {
            Ok(id) => self.switch_program(id),
            Err(err) => {
                warn!(error = %err, "switch request ignored");
                false
            }
        }
    }

    pub fn next_program(&mut self) -> bool {
        self.switch_program(self.active.next())
    }

    pub fn prev_program(&mut self) -> bool {
        self.switch_program(self.active.prev())
    }

    pub fn active(&self) -> &dyn Program {
        self.mounted.as_ref()
    }

    pub fn active_mut(&mut self) -> &mut dyn Program {
        self.mounted.as_mut()
    }

    /// Current frame contents. Does not touch widget state.
    pub fn render(&self) -> HostView<'_> {
        HostView {
            id: self.active,
            label: self.active_label(),
            mount: self.mount_id,
            program: self.mounted.as_ref(),
        }
    }
}

impl Default for HostShell {
    fn default() -> Self {
        Self::new()
    }
}
