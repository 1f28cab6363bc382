//! math — Small arithmetic commands over typed arguments.

use std::sync::Arc;

use crate::commands::{CommandProvider, CommandSchema, ParamKind, Registrar};
use crate::error::{CommandError, DiscoveryError};

/// Provider for the `math` scope.
#[derive(Debug, Default)]
pub struct MathCommands;

impl MathCommands {
    fn add(&self, a: i64, b: i64) -> Result<String, CommandError> {
        let sum = a
            .checked_add(b)
            .ok_or_else(|| CommandError::fault(format!("{a} + {b} overflows")))?;
        Ok(format!("{a} + {b} = {sum}"))
    }

    fn multiply(&self, a: f64, b: f64) -> String {
        format!("{a} * {b} = {}", a * b)
    }
}

impl CommandProvider for MathCommands {
    fn register(self: Arc<Self>, registrar: &mut Registrar) -> Result<(), DiscoveryError> {
        let this = Arc::clone(&self);
        registrar.command(
            CommandSchema::scoped("math", "add")
                .description("Adds two integer numbers.")
                .usage("math add <num1> <num2>")
                .param("num1", ParamKind::Int)
                .param("num2", ParamKind::Int),
            move |args, _| this.add(args.int(0)?, args.int(1)?),
        );

        registrar.command(
            CommandSchema::scoped("math", "multiply")
                .description("Multiplies two float numbers.")
                .usage("math multiply <num1> <num2>")
                .param("num1", ParamKind::Float)
                .param("num2", ParamKind::Float),
            move |args, _| Ok(self.multiply(args.float(0)?, args.float(1)?)),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_formats_sum() {
        assert_eq!(MathCommands.add(2, 3).unwrap(), "2 + 3 = 5");
        assert_eq!(MathCommands.add(-4, 1).unwrap(), "-4 + 1 = -3");
    }

    #[test]
    fn add_overflow_is_fault() {
        let err = MathCommands.add(i64::MAX, 1).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn multiply_formats_product() {
        assert_eq!(MathCommands.multiply(2.5, 2.0), "2.5 * 2 = 5");
    }
}
