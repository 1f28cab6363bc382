//! XDG Base Directory paths for session state.
//!
//! | Purpose | XDG Variable | Default | Path |
//! |---------|--------------|---------|------|
//! | Session files | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/cmdline/sessions/*.json` |

use std::path::PathBuf;

use directories::BaseDirs;

/// Get the data directory for persistent state.
///
/// Uses `$XDG_DATA_HOME/cmdline` or falls back to `~/.local/share/cmdline`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join("cmdline")
}

/// Directory holding one state file per named session.
pub fn sessions_dir() -> PathBuf {
    data_dir().join("sessions")
}

/// State file for the named session.
pub fn session_file(name: &str) -> PathBuf {
    sessions_dir().join(format!("{name}.json"))
}

/// Fallback home directory when BaseDirs fails.
fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}
