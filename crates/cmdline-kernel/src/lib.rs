//! cmdline-kernel: the core of an embedded interactive command shell.
//!
//! This crate provides:
//!
//! - **Tokenizer**: splits lines into arguments, honoring double quotes
//! - **Commands**: schemas, the registry, discovery over providers, and
//!   typed argument binding
//! - **Dispatch**: resolves `<command> [args]` and `<scope> <command> [args]`
//! - **State**: command history and output transcript over a key-value store
//! - **Cursor**: a virtual current directory confined to a project root
//! - **Shell**: the session that ties them together per line

pub mod commands;
pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod error;
pub mod providers;
pub mod shell;
pub mod state;
pub mod tokenizer;

pub use config::ShellConfig;
pub use dispatch::{EXIT_FAILED, EXIT_NOT_FOUND, EXIT_OK, Outcome};
pub use shell::Shell;
