//! Command registry: built-ins by name, discovered commands by scope and name.

use std::collections::HashMap;
use std::sync::Arc;

use super::traits::Command;

/// Registry of available commands.
///
/// Keys are lowercase. Registering a command under an existing key replaces
/// the previous one.
#[derive(Default)]
pub struct CommandRegistry {
    builtins: HashMap<String, Arc<dyn Command>>,
    scopes: HashMap<String, HashMap<String, Arc<dyn Command>>>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a built-in command under its name.
    pub fn register_builtin(&mut self, command: impl Command + 'static) {
        let name = command.schema().name.to_lowercase();
        self.builtins.insert(name, Arc::new(command));
    }

    /// Register a scoped command. Commands without a scope are built-ins.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        let schema = command.schema();
        let name = schema.name.to_lowercase();
        let Some(scope) = schema.scope.as_ref().map(|s| s.to_lowercase()) else {
            self.builtins.insert(name, command);
            return;
        };

        let commands = self.scopes.entry(scope).or_default();
        if commands.contains_key(&name) {
            tracing::debug!(
                scope = ?schema.scope,
                name = %name,
                "replacing previously registered command"
            );
        }
        commands.insert(name, command);
    }

    /// Look up a built-in by name.
    pub fn builtin(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.builtins.get(name).cloned()
    }

    /// Look up a discovered command by scope and name.
    pub fn scoped(&self, scope: &str, name: &str) -> Option<Arc<dyn Command>> {
        self.scopes.get(scope)?.get(name).cloned()
    }

    /// Check if a discovered scope exists.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains_key(scope)
    }

    /// Sorted built-in names.
    pub fn builtin_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.builtins.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Built-in commands sorted by name.
    pub fn builtins(&self) -> Vec<Arc<dyn Command>> {
        self.builtin_names()
            .into_iter()
            .filter_map(|name| self.builtin(name))
            .collect()
    }

    /// Sorted scope names.
    pub fn scopes(&self) -> Vec<&str> {
        let mut scopes: Vec<_> = self.scopes.keys().map(|s| s.as_str()).collect();
        scopes.sort();
        scopes
    }

    /// Commands in a scope sorted by name, or `None` if the scope is unknown.
    pub fn scope_commands(&self, scope: &str) -> Option<Vec<(&str, Arc<dyn Command>)>> {
        let commands = self.scopes.get(scope)?;
        let mut entries: Vec<_> = commands
            .iter()
            .map(|(name, command)| (name.as_str(), Arc::clone(command)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        Some(entries)
    }

    /// Number of registered commands, built-ins included.
    pub fn len(&self) -> usize {
        self.builtins.len() + self.scopes.values().map(HashMap::len).sum::<usize>()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("builtins", &self.builtin_names())
            .field("scopes", &self.scopes())
            .finish()
    }
}
