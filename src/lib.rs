pub mod errors;
pub mod context;
pub mod constants;
pub mod format;
pub mod functions;  // plugin model
mod expression;
mod parser;

use tracing::debug;

use constants::substitute_constants;
use context::Options;
use errors::{EvalError, Result};
use functions::Registry;

pub use errors::SyntaxError;
pub use expression::{evaluate, MAX_DEPTH};
pub use format::format_value;

/// The calculator front of the evaluator: pre-resolves constants, calls
/// [`evaluate`] and applies the configured non-finite policy.
#[derive(Clone)]
pub struct Calculator {
    options: Options,
    registry: Registry,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Registry::with_builtins())
    }
}

impl Calculator {
    pub fn new(registry: Registry) -> Self {
        Self { options: Options::default(), registry }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Evaluate user input to a value the caller may display.
    pub fn calculate(&self, input: &str) -> Result<f64> {
        let input = input.trim();
        if input.is_empty() {
            return Err(EvalError::EmptyInput);
        }
        let resolved = if self.options.substitute_constants {
            substitute_constants(input)
        } else {
            input.into()
        };
        let outcome = evaluate(&resolved)
            .map_err(EvalError::from)
            .and_then(|v| self.options.check(v));
        debug!(input, resolved = %resolved, ?outcome, "calculated");
        outcome
    }

    /// Apply a registered unary function to `value`.
    pub fn apply(&self, name: &str, value: f64) -> Result<f64> {
        let f = self
            .registry
            .get(name)
            .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
        let outcome = f.call(value, &self.options).and_then(|v| self.options.check(v));
        debug!(name, value, ?outcome, "applied");
        outcome
    }
}

/// Convenience: calculate with built-in functions and default options.
pub fn calculate(input: &str) -> Result<f64> {
    Calculator::default().calculate(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use context::NonFinitePolicy;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_is_rejected_before_parsing() {
        assert!(matches!(calculate("   "), Err(EvalError::EmptyInput)));
    }

    #[test]
    fn constants_are_resolved() {
        assert_eq!(calculate("π").unwrap(), std::f64::consts::PI);
        assert_eq!(calculate("2*e").unwrap(), 2.0 * std::f64::consts::E);
    }

    #[test]
    fn constants_can_be_disabled() {
        let calc = Calculator::default().with_options(Options {
            substitute_constants: false,
            ..Options::default()
        });
        let err = calc.calculate("π").unwrap_err();
        assert!(matches!(err, EvalError::Syntax(e) if e.found() == Some('π')));
    }

    #[test]
    fn policy_is_explicit() {
        assert!(matches!(calculate("5/0"), Err(EvalError::Overflow)));
        assert!(matches!(calculate("0/0"), Err(EvalError::NotANumber)));

        let lenient = Calculator::default().with_options(Options {
            non_finite: NonFinitePolicy::Allow,
            ..Options::default()
        });
        assert_eq!(lenient.calculate("5/0").unwrap(), f64::INFINITY);
    }

    #[test]
    fn unknown_function() {
        let err = Calculator::default().apply("cosh", 1.0).unwrap_err();
        assert_eq!(err.to_string(), "unknown function: cosh");
    }
}
