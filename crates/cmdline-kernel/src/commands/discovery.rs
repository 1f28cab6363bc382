//! Command discovery.
//!
//! Each provider is registered as a factory. A discovery pass instantiates
//! every provider and asks it to register its commands, producing a brand
//! new [`CommandRegistry`]. Passes are idempotent: nothing from a previous
//! pass survives.
//!
//! A provider that cannot be instantiated or fails to register is skipped
//! with a warning. A single malformed command is skipped on its own; the
//! rest of its provider's commands still load.

use std::fmt;
use std::sync::Arc;

use crate::error::{CommandError, DiscoveryError};
use crate::providers;

use super::builtin::register_builtins;
use super::traits::{Command, FnCommand};
use super::{BoundArgs, CommandRegistry, CommandSchema, ExecContext};

/// A source of scoped commands.
pub trait CommandProvider: Send + Sync {
    /// Register this provider's commands.
    ///
    /// Handlers may capture `self` to reach provider state.
    fn register(self: Arc<Self>, registrar: &mut Registrar) -> Result<(), DiscoveryError>;
}

/// Creates a fresh provider instance for each discovery pass.
pub type ProviderFactory =
    Box<dyn Fn() -> Result<Arc<dyn CommandProvider>, DiscoveryError> + Send + Sync>;

struct ProviderEntry {
    name: String,
    factory: ProviderFactory,
}

/// Collects the commands a provider registers.
pub struct Registrar {
    provider: String,
    commands: Vec<Arc<dyn Command>>,
}

impl Registrar {
    fn new(provider: &str) -> Self {
        Self {
            provider: provider.to_string(),
            commands: Vec::new(),
        }
    }

    /// Name of the provider being scanned.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Register a command backed by a function value.
    pub fn command<F>(&mut self, schema: CommandSchema, handler: F)
    where
        F: Fn(&BoundArgs, &mut ExecContext<'_>) -> Result<String, CommandError>
            + Send
            + Sync
            + 'static,
    {
        self.commands.push(Arc::new(FnCommand::new(schema, handler)));
    }

    /// Keep only well-formed commands.
    fn finish(self) -> Vec<Arc<dyn Command>> {
        let provider = self.provider;
        self.commands
            .into_iter()
            .filter(|command| match validate(&command.schema()) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(provider = %provider, error = %e, "skipping command");
                    false
                }
            })
            .collect()
    }
}

fn validate(schema: &CommandSchema) -> Result<(), DiscoveryError> {
    let scope = schema.scope.as_deref().unwrap_or_default();
    let invalid = |reason: &str| DiscoveryError::InvalidCommand {
        scope: scope.to_string(),
        name: schema.name.clone(),
        reason: reason.to_string(),
    };

    if scope.is_empty() {
        return Err(invalid("discovered commands need a scope"));
    }
    if schema.name.is_empty() {
        return Err(invalid("empty command name"));
    }
    if scope.contains(char::is_whitespace) || schema.name.contains(char::is_whitespace) {
        return Err(invalid("names cannot contain whitespace"));
    }
    Ok(())
}

/// The set of command providers and the discovery pass over them.
#[derive(Default)]
pub struct Discovery {
    providers: Vec<ProviderEntry>,
}

impl Discovery {
    /// Discovery with no providers; only built-ins will be registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery over the bundled providers.
    pub fn with_defaults() -> Self {
        let mut discovery = Self::new();
        providers::register_providers(&mut discovery);
        discovery
    }

    /// Add a provider factory.
    pub fn add<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Arc<dyn CommandProvider>, DiscoveryError> + Send + Sync + 'static,
    {
        self.providers.push(ProviderEntry {
            name: name.into(),
            factory: Box::new(factory),
        });
    }

    /// Add a provider that is built with `Default`.
    pub fn add_default<P>(&mut self, name: impl Into<String>)
    where
        P: CommandProvider + Default + 'static,
    {
        self.add(name, || Ok(Arc::new(P::default()) as Arc<dyn CommandProvider>));
    }

    /// Registered provider names, in registration order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name.as_str()).collect()
    }

    /// Build a fresh registry: built-ins first, then every provider.
    pub fn discover(&self) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);

        for entry in &self.providers {
            match scan(entry) {
                Ok(commands) => {
                    for command in commands {
                        registry.register(command);
                    }
                }
                Err(e) => {
                    tracing::warn!(provider = %entry.name, error = %e, "skipping command provider");
                }
            }
        }

        tracing::debug!(commands = registry.len(), scopes = ?registry.scopes(), "discovery complete");
        registry
    }
}

fn scan(entry: &ProviderEntry) -> Result<Vec<Arc<dyn Command>>, DiscoveryError> {
    let provider = (entry.factory)()?;
    let mut registrar = Registrar::new(&entry.name);
    provider.register(&mut registrar)?;
    Ok(registrar.finish())
}

impl fmt::Debug for Discovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discovery")
            .field("providers", &self.provider_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Greeter;

    impl CommandProvider for Greeter {
        fn register(self: Arc<Self>, registrar: &mut Registrar) -> Result<(), DiscoveryError> {
            registrar.command(CommandSchema::scoped("greet", "hello"), |_, _| Ok("hi".into()));
            registrar.command(CommandSchema::scoped("greet", "bad name"), |_, _| Ok("".into()));
            Ok(())
        }
    }

    struct Broken;

    impl CommandProvider for Broken {
        fn register(self: Arc<Self>, registrar: &mut Registrar) -> Result<(), DiscoveryError> {
            registrar.command(CommandSchema::scoped("broken", "partial"), |_, _| Ok("".into()));
            Err(DiscoveryError::Register {
                provider: registrar.provider().to_string(),
                reason: "boom".into(),
            })
        }
    }

    #[test]
    fn builtins_always_present() {
        let registry = Discovery::new().discover();
        for name in ["clear", "echo", "help", "log", "refresh", "scopes"] {
            assert!(registry.builtin(name).is_some(), "missing builtin {name}");
        }
        assert!(registry.scopes().is_empty());
    }

    #[test]
    fn malformed_command_skipped_alone() {
        let mut discovery = Discovery::new();
        discovery.add_default::<Greeter>("greeter");
        let registry = discovery.discover();

        assert!(registry.scoped("greet", "hello").is_some());
        assert_eq!(registry.scope_commands("greet").map(|c| c.len()), Some(1));
    }

    #[test]
    fn failing_provider_skipped_entirely() {
        let mut discovery = Discovery::new();
        discovery.add("broken", || Ok(Arc::new(Broken) as Arc<dyn CommandProvider>));
        discovery.add_default::<Greeter>("greeter");
        let registry = discovery.discover();

        assert!(!registry.has_scope("broken"));
        assert!(registry.has_scope("greet"));
    }

    #[test]
    fn uninstantiable_provider_skipped() {
        let mut discovery = Discovery::new();
        discovery.add("ghost", || {
            Err(DiscoveryError::Instantiate {
                provider: "ghost".into(),
                reason: "no default constructor".into(),
            })
        });
        discovery.add_default::<Greeter>("greeter");

        let registry = discovery.discover();
        assert_eq!(registry.scopes(), vec!["greet"]);
    }

    #[test]
    fn discovery_is_idempotent() {
        let discovery = Discovery::with_defaults();
        let first = discovery.discover();
        let second = discovery.discover();
        assert_eq!(first.scopes(), second.scopes());
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn defaults_include_bundled_scopes() {
        let registry = Discovery::with_defaults().discover();
        assert!(registry.has_scope("dir"));
        assert!(registry.has_scope("math"));
    }
}
