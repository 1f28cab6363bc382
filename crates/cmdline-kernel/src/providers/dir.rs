//! dir — Navigate the virtual current directory.
//!
//! - `dir current` shows the cursor
//! - `dir reset` returns to the root folder
//! - `dir cd <path>` moves: `.` goes up, one segment goes down, several
//!   segments (`a/b/c`) set the path from the root
//!
//! Cursor errors are returned as output rather than as execution errors.

use std::sync::Arc;

use crate::commands::{CommandProvider, CommandSchema, ParamKind, Registrar};
use crate::cursor::DirectoryCursor;
use crate::error::DiscoveryError;

/// Provider for the `dir` scope.
#[derive(Debug, Default)]
pub struct DirectoryCommands;

impl DirectoryCommands {
    fn current(&self, cursor: &DirectoryCursor) -> String {
        format!("Current directory is: \"{}\"", cursor.display())
    }

    fn reset(&self, cursor: &mut DirectoryCursor) -> String {
        cursor.reset();
        format!("Current directory reset to: {}", cursor.display())
    }

    fn change(&self, cursor: &mut DirectoryCursor, path: &str) -> String {
        if path == "." {
            return match cursor.up() {
                Ok(()) => self.current(cursor),
                Err(e) => format!("Error: {e}"),
            };
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let moved = match segments.as_slice() {
            [] => return "Error: Invalid path format. Use 'dir cd <path>' or 'dir cd .'".to_string(),
            [segment] => cursor.down(segment),
            _ => cursor.set_absolute(&segments),
        };

        match moved {
            Ok(()) => self.current(cursor),
            Err(e) => format!("Error: {e}"),
        }
    }
}

impl CommandProvider for DirectoryCommands {
    fn register(self: Arc<Self>, registrar: &mut Registrar) -> Result<(), DiscoveryError> {
        let this = Arc::clone(&self);
        registrar.command(
            CommandSchema::scoped("dir", "current")
                .description("Shows the current working directory.")
                .usage("dir current"),
            move |_, ctx| Ok(this.current(ctx.cursor)),
        );

        let this = Arc::clone(&self);
        registrar.command(
            CommandSchema::scoped("dir", "reset")
                .description("Resets the current directory to the project root folder.")
                .usage("dir reset"),
            move |_, ctx| Ok(this.reset(ctx.cursor)),
        );

        registrar.command(
            CommandSchema::scoped("dir", "cd")
                .description("Changes the current directory. Use '.' to go up.")
                .usage("dir cd <path>")
                .param("path", ParamKind::String),
            move |args, ctx| Ok(self.change(ctx.cursor, args.string(0)?)),
        );

        Ok(())
    }
}
