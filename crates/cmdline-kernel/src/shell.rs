//! Shell: one interactive session.
//!
//! The Shell owns all session state and runs each submitted line to
//! completion before the next:
//!
//! ```text
//! line ──► tokenize ──► dispatch ──► record ──► Outcome
//!                          │            │
//!                  ┌───────┴──────┐  ┌──┴──────────────┐
//!                  │ Registry     │  │ History         │
//!                  │ (built-ins,  │  │ (commands,      │
//!                  │  scopes)     │  │  transcript)    │
//!                  ├──────────────┤  ├─────────────────┤
//!                  │ Discovery    │  │ KeyValueStore   │
//!                  │ Cursor       │  │                 │
//!                  └──────────────┘  └─────────────────┘
//! ```
//!
//! Sessions are independent: nothing here is process-global.

use anyhow::{Context, Result};

use crate::commands::builtin::CLEAR;
use crate::commands::{CommandRegistry, Discovery, ExecContext};
use crate::config::ShellConfig;
use crate::cursor::DirectoryCursor;
use crate::dispatch::{Outcome, dispatch};
use crate::state::{Direction, FileStore, History, KeyValueStore, MemoryStore, SYSTEM_SOURCE};
use crate::tokenizer::{has_unterminated_quote, tokenize};

/// Transcript entry shown the first time a session starts.
pub const WELCOME: &str = "Welcome to the command line. Type 'help' for commands.";

/// An interactive shell session.
pub struct Shell {
    name: String,
    registry: CommandRegistry,
    discovery: Discovery,
    cursor: DirectoryCursor,
    history: History,
}

impl Shell {
    /// Create a session with the bundled providers.
    ///
    /// Persistent sessions open their state file; transient ones keep state
    /// in memory.
    pub fn new(config: ShellConfig) -> Result<Self> {
        let store: Box<dyn KeyValueStore> = if config.persist {
            let path = config.resolved_state_path();
            let store = FileStore::open(&path)
                .with_context(|| format!("opening session state: {}", path.display()))?;
            Box::new(store)
        } else {
            Box::new(MemoryStore::new())
        };

        Ok(Self::with_store(&config, store, Discovery::with_defaults()))
    }

    /// Create a transient session.
    pub fn transient() -> Result<Self> {
        Self::new(ShellConfig::transient())
    }

    /// Create a session over an explicit store and provider set.
    ///
    /// Unreadable stored values are logged and reset one key at a time. A
    /// store that cannot be read at all leaves an empty history.
    pub fn with_store(config: &ShellConfig, store: Box<dyn KeyValueStore>, discovery: Discovery) -> Self {
        let mut history = History::new(store);
        if let Err(e) = history.load() {
            tracing::warn!(session = %config.name, error = %e, "discarding unreadable session state");
        }

        if history.transcript().is_empty() {
            if let Err(e) = history.record(SYSTEM_SOURCE, WELCOME) {
                tracing::warn!(error = %e, "failed to persist welcome message");
            }
        }

        Self {
            name: config.name.clone(),
            registry: discovery.discover(),
            discovery,
            cursor: DirectoryCursor::new(&config.project_dir, config.root_name.clone()),
            history,
        }
    }

    /// Run one line: tokenize, dispatch, record.
    ///
    /// Returns `None` for blank lines, which are neither run nor recorded.
    pub fn process_line(&mut self, line: &str) -> Option<Outcome> {
        let line = line.trim();
        let tokens = tokenize(line);
        if has_unterminated_quote(line) {
            tracing::debug!(line, "unterminated quote runs to end of line");
        }

        let mut ctx = ExecContext {
            registry: &mut self.registry,
            discovery: &self.discovery,
            cursor: &mut self.cursor,
            history: &mut self.history,
        };
        let outcome = dispatch(&tokens, &mut ctx)?;

        let is_clear = tokens.first().is_some_and(|t| t.eq_ignore_ascii_case(CLEAR));
        if !is_clear {
            if let Err(e) = self.history.record(line, &outcome.output) {
                tracing::warn!(error = %e, "failed to persist history");
            }
        }

        Some(outcome)
    }

    /// Run one line and return only its text.
    pub fn execute(&mut self, line: &str) -> String {
        self.process_line(line)
            .map(|outcome| outcome.output)
            .unwrap_or_default()
    }

    /// Step through history; `None` if it is empty.
    pub fn navigate(&mut self, direction: Direction) -> Option<String> {
        self.history.navigate(direction).map(str::to_string)
    }

    /// Session name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn cursor(&self) -> &DirectoryCursor {
        &self.cursor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// `Scopes: a, b` for the info area.
    pub fn scopes_line(&self) -> String {
        format!("Scopes: {}", self.registry.scopes().join(", "))
    }

    /// `Directory: "Assets/..."` for the info area.
    pub fn directory_line(&self) -> String {
        format!("Directory: \"{}\"", self.cursor.display())
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("name", &self.name)
            .field("registry", &self.registry)
            .field("cursor", &self.cursor.display())
            .field("history", &self.history)
            .finish()
    }
}
