//! Command resolution and invocation.
//!
//! Resolution order for a tokenized line:
//!
//! 1. the first token (lowercased) as a built-in, invoked with the rest
//! 2. the first token as a scope and the second as a command in it, invoked
//!    with everything from the third token on
//! 3. otherwise the command or scope is not found
//!
//! Every outcome is text. Binding failures and handler faults become
//! `Execution Error: <message>`; nothing propagates to the caller.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::commands::{Command, ExecContext, Signature, bind};
use crate::error::CommandError;

/// Exit code for a successful command.
pub const EXIT_OK: i32 = 0;
/// Exit code for a command that was found but failed.
pub const EXIT_FAILED: i32 = 1;
/// Exit code for an unresolved command or scope.
pub const EXIT_NOT_FOUND: i32 = 127;

const NO_OUTPUT: &str = "Command executed successfully (no output).";

/// The displayable result of a dispatched line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Process-style status: see the `EXIT_*` constants.
    pub code: i32,
    /// Text to show and record.
    pub output: String,
}

impl Outcome {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            code: EXIT_OK,
            output: output.into(),
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            code: EXIT_FAILED,
            output: output.into(),
        }
    }

    pub fn not_found(output: impl Into<String>) -> Self {
        Self {
            code: EXIT_NOT_FOUND,
            output: output.into(),
        }
    }

    /// True if the command succeeded.
    pub fn ok(&self) -> bool {
        self.code == EXIT_OK
    }
}

/// Resolve and run an already tokenized line. `None` for an empty line.
pub fn dispatch(tokens: &[String], ctx: &mut ExecContext<'_>) -> Option<Outcome> {
    let (first, rest) = tokens.split_first()?;
    let name = first.to_lowercase();

    if let Some(command) = ctx.registry.builtin(&name) {
        tracing::debug!(builtin = %name, "dispatching");
        return Some(invoke(&command, rest, ctx));
    }

    if let Some((sub, args)) = rest.split_first() {
        if ctx.registry.has_scope(&name) {
            let sub = sub.to_lowercase();
            return Some(match ctx.registry.scoped(&name, &sub) {
                Some(command) => {
                    tracing::debug!(scope = %name, command = %sub, "dispatching");
                    invoke(&command, args, ctx)
                }
                None => Outcome::not_found(format!(
                    "Error: Command '{sub}' not found in scope '{name}'. Type 'help {name}' for available commands."
                )),
            });
        }
    }

    Some(Outcome::not_found(format!(
        "Error: Command or scope '{name}' not found. Type 'help' for a list of commands and scopes."
    )))
}

/// Bind and run a resolved command.
pub fn invoke(command: &Arc<dyn Command>, tokens: &[String], ctx: &mut ExecContext<'_>) -> Outcome {
    let schema = command.schema();
    let args = match bind(&schema, tokens) {
        Ok(args) => args,
        Err(e) => return execution_error(&CommandError::from(e)),
    };

    let result = catch_unwind(AssertUnwindSafe(|| command.execute(&args, ctx)))
        .unwrap_or_else(|payload| Err(CommandError::fault(panic_message(payload.as_ref()))));

    match result {
        Ok(output) if output.is_empty() && matches!(schema.signature, Signature::Typed(_)) => {
            Outcome::success(NO_OUTPUT)
        }
        Ok(output) => Outcome::success(output),
        Err(e) => execution_error(&e),
    }
}

fn execution_error(error: &CommandError) -> Outcome {
    Outcome::failure(format!("Execution Error: {error}"))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "command panicked".to_string()
    }
}
