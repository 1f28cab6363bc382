//! The command trait and a closure-backed implementation.

use std::fmt;

use crate::error::CommandError;

use super::{BoundArgs, CommandSchema, ExecContext};

/// A command the dispatcher can invoke.
pub trait Command: Send + Sync {
    /// Metadata: scope, name, help text, and declared parameters.
    fn schema(&self) -> CommandSchema;

    /// Run the command with already-bound arguments.
    fn execute(&self, args: &BoundArgs, ctx: &mut ExecContext<'_>) -> Result<String, CommandError>;
}

/// Signature of a handler captured at registration time.
pub type HandlerFn =
    dyn Fn(&BoundArgs, &mut ExecContext<'_>) -> Result<String, CommandError> + Send + Sync;

/// A command whose behavior is a captured function value.
///
/// Providers register these; the closure usually holds the provider
/// instance it was created from.
pub struct FnCommand {
    schema: CommandSchema,
    handler: Box<HandlerFn>,
}

impl FnCommand {
    pub fn new<F>(schema: CommandSchema, handler: F) -> Self
    where
        F: Fn(&BoundArgs, &mut ExecContext<'_>) -> Result<String, CommandError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            schema,
            handler: Box::new(handler),
        }
    }
}

impl Command for FnCommand {
    fn schema(&self) -> CommandSchema {
        self.schema.clone()
    }

    fn execute(&self, args: &BoundArgs, ctx: &mut ExecContext<'_>) -> Result<String, CommandError> {
        (self.handler)(args, ctx)
    }
}

impl fmt::Debug for FnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}
