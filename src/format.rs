/// Render a result for display.
///
/// Finite values use the shortest decimal text that reads back to the same
/// double, with no exponent, so the output is itself a valid expression.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}
