//! log — Send a message to the host log.

use crate::commands::{BoundArgs, Command, CommandSchema, ExecContext};
use crate::error::CommandError;

/// Log command: writes its arguments to the `cmdline::log` tracing target.
pub struct Log;

impl Command for Log {
    fn schema(&self) -> CommandSchema {
        CommandSchema::builtin("log", "Logs a message to the console.")
    }

    fn execute(&self, args: &BoundArgs, _ctx: &mut ExecContext<'_>) -> Result<String, CommandError> {
        let message = args.joined();
        tracing::info!(target: "cmdline::log", "{}", message);
        Ok(format!("Message logged to console: {message}"))
    }
}
