//! scopes — List discovered scopes.

use crate::commands::{BoundArgs, Command, CommandSchema, ExecContext};
use crate::error::CommandError;

use super::scope_lines;

/// Scopes command.
pub struct Scopes;

impl Command for Scopes {
    fn schema(&self) -> CommandSchema {
        CommandSchema::builtin("scopes", "Lists all available command scopes.")
    }

    fn execute(&self, _args: &BoundArgs, ctx: &mut ExecContext<'_>) -> Result<String, CommandError> {
        Ok(format!("Available Scopes:\n{}", scope_lines(ctx.registry)))
    }
}
