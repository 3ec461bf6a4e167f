use std::collections::HashMap;
use std::sync::Arc;

use crate::context::{AngleMode, Options};
use crate::errors::Result;

/// Trait for pluggable unary functions the calculator applies to a value.
pub trait Function: Send + Sync {
    fn name(&self) -> &'static str;
    fn call(&self, x: f64, opts: &Options) -> Result<f64>;
}

/// Thread-safe function registry.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<HashMap<&'static str, Arc<dyn Function>>>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register(builtins::Sqrt);
        reg.register(builtins::Log);
        reg.register(builtins::Ln);
        reg.register(builtins::Square);
        reg.register(builtins::Cube);
        reg.register(builtins::Exp10);
        reg.register(builtins::Exp);
        reg.register(builtins::Reciprocal);
        reg.register(builtins::Abs);
        reg.register(builtins::Factorial);
        reg.register(builtins::Trig::Sin);
        reg.register(builtins::Trig::Cos);
        reg.register(builtins::Trig::Tan);
        reg
    }

    pub fn register<F: Function + 'static>(&mut self, f: F) {
        let mut_map = Arc::make_mut(&mut self.inner);
        mut_map.insert(f.name(), Arc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.inner.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

fn to_radians(x: f64, angle: AngleMode) -> f64 {
    match angle {
        AngleMode::Degrees => x.to_radians(),
        AngleMode::Radians => x,
    }
}

pub mod builtins {
    use super::*;
    use crate::errors::EvalError;

    /// Largest n whose factorial fits in an i64.
    pub const MAX_FACTORIAL: u32 = 20;

    macro_rules! simple {
        ($ty:ident, $name:literal, |$x:ident| $body:expr) => {
            pub struct $ty;
            impl Function for $ty {
                fn name(&self) -> &'static str { $name }
                fn call(&self, $x: f64, _opts: &Options) -> Result<f64> { Ok($body) }
            }
        };
    }

    simple!(Sqrt, "sqrt", |x| x.sqrt());
    simple!(Log, "log", |x| x.log10());
    simple!(Ln, "ln", |x| x.ln());
    simple!(Square, "square", |x| x.powi(2));
    simple!(Cube, "cube", |x| x.powi(3));
    simple!(Exp10, "exp10", |x| 10f64.powf(x));
    simple!(Exp, "exp", |x| x.exp());
    simple!(Reciprocal, "reciprocal", |x| 1.0 / x);
    simple!(Abs, "abs", |x| x.abs());

    pub struct Factorial;
    impl Function for Factorial {
        fn name(&self) -> &'static str { "factorial" }
        fn call(&self, x: f64, _opts: &Options) -> Result<f64> {
            if x < 0.0 {
                return Err(EvalError::Domain("factorial of negative number".into()));
            }
            if x > MAX_FACTORIAL as f64 {
                return Err(EvalError::Domain("value too large for factorial".into()));
            }
            if x.fract() != 0.0 {
                return Err(EvalError::Domain("factorial requires an integer".into()));
            }
            let n = x as i64;
            Ok((1..=n).product::<i64>() as f64)
        }
    }

    pub enum Trig {
        Sin,
        Cos,
        Tan,
    }
    impl Function for Trig {
        fn name(&self) -> &'static str {
            match self {
                Trig::Sin => "sin",
                Trig::Cos => "cos",
                Trig::Tan => "tan",
            }
        }
        fn call(&self, x: f64, opts: &Options) -> Result<f64> {
            let r = to_radians(x, opts.angle);
            Ok(match self {
                Trig::Sin => r.sin(),
                Trig::Cos => r.cos(),
                Trig::Tan => r.tan(),
            })
        }
    }
}
