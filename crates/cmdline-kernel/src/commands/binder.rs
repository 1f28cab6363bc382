//! Argument binding: string tokens to typed values.
//!
//! Typed commands declare an exact parameter list. Binding checks the arity
//! first, then converts each token through the conversion table for its
//! declared kind. There are no optional or variadic parameters.

use std::fmt;

use crate::error::{BindError, CommandError};

use super::schema::{CommandSchema, ParamKind, Signature};

/// A converted argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Convert a single token according to its declared kind.
///
/// Booleans accept `true`/`false` in any case. Nothing else is coerced.
pub fn convert(kind: ParamKind, token: &str) -> Option<Value> {
    match kind {
        ParamKind::String => Some(Value::String(token.to_string())),
        ParamKind::Int => token.parse().ok().map(Value::Int),
        ParamKind::Float => token.parse().ok().map(Value::Float),
        ParamKind::Bool => {
            if token.eq_ignore_ascii_case("true") {
                Some(Value::Bool(true))
            } else if token.eq_ignore_ascii_case("false") {
                Some(Value::Bool(false))
            } else {
                None
            }
        }
    }
}

/// Arguments ready to hand to a command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundArgs {
    values: Vec<Value>,
    raw: Vec<String>,
}

impl BoundArgs {
    /// Arguments for a raw signature: every token stays a string.
    pub fn raw(tokens: &[String]) -> Self {
        Self {
            values: tokens.iter().cloned().map(Value::String).collect(),
            raw: tokens.to_vec(),
        }
    }

    /// The original tokens, unconverted.
    pub fn tokens(&self) -> &[String] {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// String argument at `index`.
    pub fn string(&self, index: usize) -> Result<&str, CommandError> {
        match self.values.get(index) {
            Some(Value::String(s)) => Ok(s),
            other => Err(mismatch(index, ParamKind::String, other)),
        }
    }

    pub fn int(&self, index: usize) -> Result<i64, CommandError> {
        match self.values.get(index) {
            Some(Value::Int(i)) => Ok(*i),
            other => Err(mismatch(index, ParamKind::Int, other)),
        }
    }

    pub fn float(&self, index: usize) -> Result<f64, CommandError> {
        match self.values.get(index) {
            Some(Value::Float(x)) => Ok(*x),
            other => Err(mismatch(index, ParamKind::Float, other)),
        }
    }

    pub fn bool(&self, index: usize) -> Result<bool, CommandError> {
        match self.values.get(index) {
            Some(Value::Bool(b)) => Ok(*b),
            other => Err(mismatch(index, ParamKind::Bool, other)),
        }
    }

    /// All tokens joined by single spaces.
    pub fn joined(&self) -> String {
        self.raw.join(" ")
    }
}

fn mismatch(index: usize, wanted: ParamKind, found: Option<&Value>) -> CommandError {
    match found {
        Some(value) => CommandError::fault(format!(
            "argument {index} is not a {wanted} (found '{value}')"
        )),
        None => CommandError::fault(format!("argument {index} is missing")),
    }
}

/// Bind tokens to a command's declared parameters.
pub fn bind(schema: &CommandSchema, tokens: &[String]) -> Result<BoundArgs, BindError> {
    let params = match &schema.signature {
        Signature::Raw => return Ok(BoundArgs::raw(tokens)),
        Signature::Typed(params) => params,
    };

    if tokens.len() != params.len() {
        return Err(BindError::Arity {
            expected: params.len(),
            actual: tokens.len(),
            usage: schema.usage.clone(),
        });
    }

    let values = params
        .iter()
        .zip(tokens)
        .enumerate()
        .map(|(i, (param, token))| {
            convert(param.kind, token).ok_or_else(|| BindError::Conversion {
                position: i + 1,
                name: param.name.clone(),
                value: token.clone(),
                kind: param.kind,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BoundArgs {
        values,
        raw: tokens.to_vec(),
    })
}
