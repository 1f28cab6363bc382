//! Commands: schemas, argument binding, the registry, and discovery.

mod binder;
pub mod builtin;
pub(crate) mod context;
mod discovery;
mod registry;
mod schema;
mod traits;

pub use binder::{BoundArgs, Value, bind, convert};
pub use context::ExecContext;
pub use discovery::{CommandProvider, Discovery, ProviderFactory, Registrar};
pub use registry::CommandRegistry;
pub use schema::{BUILTIN_USAGE, CommandSchema, ParamKind, ParamSchema, Signature};
pub use traits::{Command, FnCommand, HandlerFn};
