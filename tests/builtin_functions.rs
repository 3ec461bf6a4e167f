use calc_eval::context::{AngleMode, Options};
use calc_eval::errors::EvalError;
use calc_eval::Calculator;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn test_builtin_roots_and_powers() {
    let calc = Calculator::default();
    assert_eq!(calc.apply("sqrt", 16.0).unwrap(), 4.0);
    assert_eq!(calc.apply("square", -3.0).unwrap(), 9.0);
    assert_eq!(calc.apply("cube", 2.0).unwrap(), 8.0);
    assert_eq!(calc.apply("exp10", 3.0).unwrap(), 1000.0);
    assert_eq!(calc.apply("reciprocal", 4.0).unwrap(), 0.25);
    assert_eq!(calc.apply("abs", -2.5).unwrap(), 2.5);
}

#[test]
fn test_builtin_logs() {
    let calc = Calculator::default();
    assert!(close(calc.apply("log", 1000.0).unwrap(), 3.0));
    assert!(close(calc.apply("ln", std::f64::consts::E).unwrap(), 1.0));
    assert!(close(calc.apply("exp", 1.0).unwrap(), std::f64::consts::E));
}

#[test]
fn test_builtin_factorial() {
    let calc = Calculator::default();
    assert_eq!(calc.apply("factorial", 0.0).unwrap(), 1.0);
    assert_eq!(calc.apply("factorial", 5.0).unwrap(), 120.0);
    assert_eq!(calc.apply("factorial", 20.0).unwrap(), 2_432_902_008_176_640_000.0);

    for (x, msg) in [
        (-1.0, "factorial of negative number"),
        (21.0, "value too large for factorial"),
        (2.5, "factorial requires an integer"),
    ] {
        match calc.apply("factorial", x) {
            Err(EvalError::Domain(m)) => assert_eq!(m, msg),
            other => panic!("factorial({x}) gave {other:?}"),
        }
    }
}

#[test]
fn test_builtin_trig_respects_angle_mode() {
    let degrees = Calculator::default();
    assert!(close(degrees.apply("sin", 30.0).unwrap(), 0.5));
    assert!(close(degrees.apply("cos", 60.0).unwrap(), 0.5));
    assert!(close(degrees.apply("tan", 45.0).unwrap(), 1.0));

    let radians = Calculator::default().with_options(Options {
        angle: AngleMode::Radians,
        ..Options::default()
    });
    assert!(close(radians.apply("sin", std::f64::consts::FRAC_PI_2).unwrap(), 1.0));
}

#[test]
fn test_builtin_results_pass_policy() {
    let calc = Calculator::default();
    assert!(matches!(calc.apply("sqrt", -1.0), Err(EvalError::NotANumber)));
    assert!(matches!(calc.apply("reciprocal", 0.0), Err(EvalError::Overflow)));
}
