//! clear — Wipe the history and transcript.

use crate::commands::{BoundArgs, Command, CommandSchema, ExecContext};
use crate::error::CommandError;

/// Name of the clear command. Lines invoking it are never recorded.
pub const CLEAR: &str = "clear";

/// Clear command: empties history and transcript, in memory and in the store.
pub struct Clear;

impl Command for Clear {
    fn schema(&self) -> CommandSchema {
        CommandSchema::builtin(CLEAR, "Clears the output area.")
    }

    fn execute(&self, _args: &BoundArgs, ctx: &mut ExecContext<'_>) -> Result<String, CommandError> {
        ctx.history
            .clear()
            .map_err(|e| CommandError::fault(e.to_string()))?;
        Ok("Output cleared.".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::TestState;

    #[test]
    fn test_clear_empties_history() {
        let mut state = TestState::new();
        state.history.record("echo a", "a").unwrap();
        assert_eq!(state.history.commands().len(), 1);

        let out = Clear.execute(&BoundArgs::default(), &mut state.ctx()).unwrap();
        assert_eq!(out, "Output cleared.");
        assert!(state.history.commands().is_empty());
        assert!(state.history.transcript().is_empty());
        assert_eq!(state.history.index(), -1);
    }
}
