//! Execution context for commands.

use crate::cursor::DirectoryCursor;
use crate::state::History;

use super::{CommandRegistry, Discovery};

/// Execution context passed to commands.
///
/// Borrows the session's state for the duration of one invocation, so
/// commands can inspect or rebuild the registry, move the directory cursor,
/// or clear the history.
pub struct ExecContext<'a> {
    /// Registry the current command was resolved from.
    pub registry: &'a mut CommandRegistry,
    /// Provider list used to rebuild the registry.
    pub discovery: &'a Discovery,
    /// Virtual current directory.
    pub cursor: &'a mut DirectoryCursor,
    /// Command history and transcript.
    pub history: &'a mut History,
}

impl ExecContext<'_> {
    /// Rebuild the registry from scratch.
    pub fn refresh(&mut self) {
        *self.registry = self.discovery.discover();
    }
}

/// Owned session state for exercising commands in unit tests.
#[cfg(test)]
pub(crate) struct TestState {
    pub registry: CommandRegistry,
    pub discovery: Discovery,
    pub cursor: DirectoryCursor,
    pub history: History,
}

#[cfg(test)]
impl TestState {
    pub fn new() -> Self {
        let discovery = Discovery::with_defaults();
        Self {
            registry: discovery.discover(),
            discovery,
            cursor: DirectoryCursor::new(std::env::temp_dir(), crate::cursor::DEFAULT_ROOT),
            history: History::new(Box::new(crate::state::MemoryStore::new())),
        }
    }

    pub fn ctx(&mut self) -> ExecContext<'_> {
        ExecContext {
            registry: &mut self.registry,
            discovery: &self.discovery,
            cursor: &mut self.cursor,
            history: &mut self.history,
        }
    }
}
