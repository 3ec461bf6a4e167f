use std::borrow::Cow;
use std::f64::consts::{E, PI};

/// Symbols the calculator resolves before handing text to the evaluator.
pub const CONSTANTS: [(char, f64); 2] = [('π', PI), ('e', E)];

/// Replace every known constant symbol with its parenthesised decimal text.
///
/// The evaluator recognises no identifiers, so this must run first. The
/// parentheses keep `2e` from silently reading as the number `22.718...`;
/// it becomes a syntax error instead. Text without any constant is
/// returned borrowed.
pub fn substitute_constants(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| CONSTANTS.iter().any(|(sym, _)| *sym == c)) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match CONSTANTS.iter().find(|(sym, _)| *sym == c) {
            Some((_, value)) => {
                out.push('(');
                out.push_str(&value.to_string());
                out.push(')');
            }
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}
