//! Command metadata: names, help text, and declared parameters.

use std::fmt;

/// Usage text shown for built-ins, which take their tokens unchecked.
pub const BUILTIN_USAGE: &str = "Varies by command.";
const DEFAULT_DESCRIPTION: &str = "No description provided.";
const DEFAULT_USAGE: &str = "No usage information provided.";

/// Primitive parameter kinds a command may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    String,
    Int,
    Float,
    Bool,
}

impl ParamKind {
    /// Name used in help text and conversion errors.
    pub fn label(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Int => "integer",
            ParamKind::Float => "float",
            ParamKind::Bool => "boolean",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSchema {
    pub name: String,
    pub kind: ParamKind,
}

/// How a command receives its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signature {
    /// Tokens are passed through as strings with no arity check (built-ins).
    Raw,
    /// Exactly these parameters, converted by kind.
    Typed(Vec<ParamSchema>),
}

/// Metadata describing a command.
///
/// Scope and name are lowercased on construction, so lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSchema {
    /// `None` for built-ins.
    pub scope: Option<String>,
    pub name: String,
    pub description: String,
    pub usage: String,
    pub signature: Signature,
}

impl CommandSchema {
    /// Schema for a built-in command.
    pub fn builtin(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            scope: None,
            name: name.into().to_lowercase(),
            description: description.into(),
            usage: BUILTIN_USAGE.to_string(),
            signature: Signature::Raw,
        }
    }

    /// Schema for a command reached as `<scope> <name>`.
    ///
    /// Starts with no parameters; add them with [`CommandSchema::param`].
    pub fn scoped(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into().to_lowercase()),
            name: name.into().to_lowercase(),
            description: DEFAULT_DESCRIPTION.to_string(),
            usage: DEFAULT_USAGE.to_string(),
            signature: Signature::Typed(Vec::new()),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Append a typed parameter. Turns a raw signature into a typed one.
    pub fn param(mut self, name: impl Into<String>, kind: ParamKind) -> Self {
        let param = ParamSchema {
            name: name.into(),
            kind,
        };
        match &mut self.signature {
            Signature::Typed(params) => params.push(param),
            Signature::Raw => self.signature = Signature::Typed(vec![param]),
        }
        self
    }

    /// Declared parameters, empty for raw signatures.
    pub fn params(&self) -> &[ParamSchema] {
        match &self.signature {
            Signature::Typed(params) => params,
            Signature::Raw => &[],
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.scope.is_none()
    }
}
