//! help — Describe built-ins, scopes, and scoped commands.

use crate::commands::{BoundArgs, Command, CommandSchema, ExecContext};
use crate::error::CommandError;

use super::scope_lines;

/// Help command: `help` for the overview, `help <scope>` for one scope.
pub struct Help;

impl Command for Help {
    fn schema(&self) -> CommandSchema {
        CommandSchema::builtin("help", "Shows available commands or help for a specific scope.")
    }

    fn execute(&self, args: &BoundArgs, ctx: &mut ExecContext<'_>) -> Result<String, CommandError> {
        let registry = &*ctx.registry;

        let Some(scope) = args.tokens().first() else {
            let builtins: Vec<String> = registry
                .builtins()
                .iter()
                .map(|command| {
                    let schema = command.schema();
                    format!("  {:<10} - {}", schema.name, schema.description)
                })
                .collect();
            return Ok(format!(
                "Available Built-in Commands:\n{}\n\nAvailable Scopes (use 'help <scope>' for details):\n{}",
                builtins.join("\n"),
                scope_lines(registry)
            ));
        };

        let scope = scope.to_lowercase();
        match registry.scope_commands(&scope) {
            Some(commands) => {
                let lines: Vec<String> = commands
                    .iter()
                    .map(|(name, command)| {
                        let schema = command.schema();
                        format!(
                            "  {:<15} - {}\n    Usage: {}",
                            name, schema.description, schema.usage
                        )
                    })
                    .collect();
                Ok(format!("Commands in scope '{scope}':\n{}", lines.join("\n")))
            }
            None => Ok(format!("Error: Scope '{scope}' not found.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::TestState;

    fn help(tokens: &[&str]) -> String {
        let mut state = TestState::new();
        let tokens: Vec<String> = tokens.iter().map(|s| s.to_string()).collect();
        Help.execute(&BoundArgs::raw(&tokens), &mut state.ctx()).unwrap()
    }

    #[test]
    fn test_help_overview() {
        let out = help(&[]);
        assert!(out.starts_with("Available Built-in Commands:\n"));
        assert!(out.contains("  echo       - Prints the given text back to the output."));
        assert!(out.contains("Available Scopes (use 'help <scope>' for details):\n  dir\n  math"));
    }

    #[test]
    fn test_help_scope() {
        let out = help(&["DIR"]);
        assert!(out.starts_with("Commands in scope 'dir':"));
        assert!(out.contains("    Usage: dir cd <path>"));
    }

    #[test]
    fn test_help_unknown_scope() {
        assert_eq!(help(&["nope"]), "Error: Scope 'nope' not found.");
    }
}
