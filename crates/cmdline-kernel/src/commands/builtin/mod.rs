//! Built-in commands.
//!
//! These are registered by a fixed list on every discovery pass and are
//! checked before any discovered scope. They receive their tokens raw.

mod clear;
mod echo;
mod help;
mod log;
mod refresh;
mod scopes;

pub use clear::CLEAR;

use super::CommandRegistry;

/// Register all built-in commands with the registry.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register_builtin(help::Help);
    registry.register_builtin(clear::Clear);
    registry.register_builtin(log::Log);
    registry.register_builtin(echo::Echo);
    registry.register_builtin(refresh::Refresh);
    registry.register_builtin(scopes::Scopes);
}

/// Sorted scopes, one indented per line.
fn scope_lines(registry: &CommandRegistry) -> String {
    registry
        .scopes()
        .iter()
        .map(|scope| format!("  {scope}"))
        .collect::<Vec<_>>()
        .join("\n")
}
