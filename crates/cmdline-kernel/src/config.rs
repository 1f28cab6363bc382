//! Shell session configuration.

use std::path::PathBuf;

use crate::cursor::DEFAULT_ROOT;
use crate::state::paths;

/// Configuration for session initialization.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Name of this session (used for state file naming).
    pub name: String,
    /// Whether to persist history and transcript to disk.
    pub persist: bool,
    /// Project directory that holds the root folder.
    pub project_dir: PathBuf,
    /// Name of the root folder the directory cursor is confined to.
    pub root_name: String,
    /// Explicit state file; defaults to the session file under the data dir.
    pub state_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            persist: true,
            project_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            root_name: DEFAULT_ROOT.to_string(),
            state_path: None,
        }
    }
}

impl ShellConfig {
    /// Create a transient (non-persistent) session config.
    pub fn transient() -> Self {
        Self {
            name: "transient".to_string(),
            persist: false,
            ..Self::default()
        }
    }

    /// Create a persistent session config with the given name.
    pub fn persistent(name: &str) -> Self {
        Self {
            name: name.to_string(),
            persist: true,
            ..Self::default()
        }
    }

    /// Use a different project directory.
    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    /// Use a different root folder name.
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Store state at an explicit path.
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = Some(path.into());
        self
    }

    /// Where persistent state lives for this session.
    pub fn resolved_state_path(&self) -> PathBuf {
        self.state_path
            .clone()
            .unwrap_or_else(|| paths::session_file(&self.name))
    }
}
