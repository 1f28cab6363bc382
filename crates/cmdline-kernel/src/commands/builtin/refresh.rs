//! refresh — Re-run command discovery.

use crate::commands::{BoundArgs, Command, CommandSchema, ExecContext};
use crate::error::CommandError;

/// Refresh command: rebuilds the registry from the provider list.
pub struct Refresh;

impl Command for Refresh {
    fn schema(&self) -> CommandSchema {
        CommandSchema::builtin("refresh", "Re-scans all providers for commands.")
    }

    fn execute(&self, _args: &BoundArgs, ctx: &mut ExecContext<'_>) -> Result<String, CommandError> {
        ctx.refresh();
        Ok("Command list refreshed.".to_string())
    }
}
