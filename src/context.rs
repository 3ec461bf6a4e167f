use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, Result};

/// What a calculation does with an infinite or NaN result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Report infinities as overflow and NaN as an invalid calculation.
    #[default]
    Reject,
    /// Hand the raw IEEE-754 value back to the caller.
    Allow,
}

/// Unit trigonometric functions read their argument in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

/// Caller-side knobs for a `Calculator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub non_finite: NonFinitePolicy,
    pub angle: AngleMode,
    /// Replace `π` and `e` with their numeric text before evaluating.
    pub substitute_constants: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            non_finite: NonFinitePolicy::default(),
            angle: AngleMode::default(),
            substitute_constants: true,
        }
    }
}

impl Options {
    /// Load options from a JSON file; absent fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EvalError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| EvalError::Config(e.to_string()))
    }

    /// Apply the non-finite policy to a computed value.
    pub fn check(&self, value: f64) -> Result<f64> {
        match self.non_finite {
            NonFinitePolicy::Allow => Ok(value),
            NonFinitePolicy::Reject if value.is_nan() => Err(EvalError::NotANumber),
            NonFinitePolicy::Reject if value.is_infinite() => Err(EvalError::Overflow),
            NonFinitePolicy::Reject => Ok(value),
        }
    }
}
