//! echo — Print arguments back to the output.

use crate::commands::{BoundArgs, Command, CommandSchema, ExecContext};
use crate::error::CommandError;

/// Echo command: joins its arguments with single spaces.
pub struct Echo;

impl Command for Echo {
    fn schema(&self) -> CommandSchema {
        CommandSchema::builtin("echo", "Prints the given text back to the output.")
    }

    fn execute(&self, args: &BoundArgs, _ctx: &mut ExecContext<'_>) -> Result<String, CommandError> {
        Ok(args.joined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::TestState;

    fn echo(tokens: &[&str]) -> String {
        let mut state = TestState::new();
        let tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        Echo.execute(&BoundArgs::raw(&tokens), &mut state.ctx()).unwrap()
    }

    #[test]
    fn test_echo_simple() {
        assert_eq!(echo(&["hello"]), "hello");
    }

    #[test]
    fn test_echo_multiple() {
        assert_eq!(echo(&["hello", "world"]), "hello world");
    }

    #[test]
    fn test_echo_keeps_quoted_spaces() {
        assert_eq!(echo(&["a  b", "c"]), "a  b c");
    }

    #[test]
    fn test_echo_empty() {
        assert_eq!(echo(&[]), "");
    }
}
