// src/expression.rs
use crate::errors::SyntaxError;
use crate::parser::{is_number_char, Parser};

/// Deepest chain of nested factors (parentheses, unary signs, exponents)
/// accepted before giving up instead of exhausting the stack.
pub const MAX_DEPTH: usize = 512;

/// Evaluate an infix arithmetic expression to a double.
///
/// The grammar, from loosest to tightest binding:
///
/// ```text
/// expression := term { ('+' | '-') term }
/// term       := factor { ('*' | '/' | '%') factor }
/// factor     := ('+' | '-') factor | power
/// power      := primary [ '^' factor ]
/// primary    := number | '(' expression ')'
/// ```
///
/// The value is computed while parsing; no tree is built. Division and
/// modulo by zero are not errors and yield infinities or NaN as IEEE-754
/// prescribes. Any unconsumed input after the top-level expression fails.
///
/// Numbers are lexed as the longest run of digits and dots, so `1.2.3` is
/// scanned as one token and then rejected as a malformed number rather
/// than as trailing input.
pub fn evaluate(input: &str) -> Result<f64, SyntaxError> {
    let mut p = EParser::new(input);
    let result = p.parse_all();
    if let Err(e) = &result {
        tracing::trace!(input, position = e.position(), "evaluation failed: {}", e.message());
    }
    result
}

struct EParser<'a> {
    parser: Parser<'a>,
    depth: usize,
}

impl<'a> EParser<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            parser: Parser::new(s),
            depth: 0,
        }
    }

    fn parse_all(&mut self) -> Result<f64, SyntaxError> {
        let x = self.parse_expression()?;
        if !self.parser.eof() {
            return Err(self.unexpected());
        }
        Ok(x)
    }

    fn parse_expression(&mut self) -> Result<f64, SyntaxError> {
        let mut x = self.parse_term()?;
        loop {
            if self.parser.eat('+') {
                x += self.parse_term()?;
            } else if self.parser.eat('-') {
                x -= self.parse_term()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn parse_term(&mut self) -> Result<f64, SyntaxError> {
        let mut x = self.parse_factor()?;
        loop {
            if self.parser.eat('*') {
                x *= self.parse_factor()?;
            } else if self.parser.eat('/') {
                x /= self.parse_factor()?;
            } else if self.parser.eat('%') {
                x %= self.parse_factor()?;
            } else {
                return Ok(x);
            }
        }
    }

    fn parse_factor(&mut self) -> Result<f64, SyntaxError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("expression nested too deeply"));
        }
        self.depth += 1;
        let x = if self.parser.eat('+') {
            self.parse_factor()
        } else if self.parser.eat('-') {
            self.parse_factor().map(|v| -v)
        } else {
            self.parse_power()
        };
        self.depth -= 1;
        x
    }

    fn parse_power(&mut self) -> Result<f64, SyntaxError> {
        let x = self.parse_primary()?;
        if self.parser.eat('^') {
            // right operand is a factor, which makes `^` right-associative
            return Ok(x.powf(self.parse_factor()?));
        }
        Ok(x)
    }

    fn parse_primary(&mut self) -> Result<f64, SyntaxError> {
        if self.parser.eat('(') {
            let x = self.parse_expression()?;
            if !self.parser.eat(')') {
                return Err(self.error("missing ')'"));
            }
            return Ok(x);
        }
        match self.parser.peek_char() {
            Some(c) if is_number_char(c) => self.parse_number(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_number(&mut self) -> Result<f64, SyntaxError> {
        let start = self.parser.position();
        let first = self.parser.peek_char();
        let literal = self.parser.scan_number();
        literal
            .parse::<f64>()
            .map_err(|_| SyntaxError::new(format!("malformed number '{literal}'"), start, first))
    }

    fn unexpected(&self) -> SyntaxError {
        match self.parser.peek_char() {
            Some(c) => self.error(format!("unexpected character '{c}'")),
            None => self.error("unexpected end of input"),
        }
    }

    fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(message, self.parser.position(), self.parser.peek_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn computes_while_parsing() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("7%4").unwrap(), 3.0);
        assert_eq!(evaluate("-2^2").unwrap(), -4.0);
    }

    #[test]
    fn trailing_input_points_at_offender() {
        let err = evaluate("2 3").unwrap_err();
        assert_eq!(err.message(), "unexpected character '3'");
        assert_eq!(err.position(), 2);
        assert_eq!(err.found(), Some('3'));
    }

    #[test]
    fn missing_operand_reports_end_of_input() {
        let err = evaluate("2+").unwrap_err();
        assert_eq!(err.message(), "unexpected end of input");
        assert_eq!(err.position(), 2);
        assert_eq!(err.found(), None);
    }

    #[test]
    fn unclosed_group() {
        let err = evaluate("(2+3").unwrap_err();
        assert_eq!(err.message(), "missing ')'");
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn second_dot_fails_as_number_not_grammar() {
        let err = evaluate("1+1.2.3").unwrap_err();
        assert_eq!(err.message(), "malformed number '1.2.3'");
        assert_eq!(err.position(), 2);
        assert_eq!(err.found(), Some('1'));
    }

    #[test]
    fn lone_dot_is_malformed() {
        let err = evaluate(".").unwrap_err();
        assert_eq!(err.message(), "malformed number '.'");
    }

    #[test]
    fn partial_fractions_parse() {
        assert_eq!(evaluate("1.").unwrap(), 1.0);
        assert_eq!(evaluate(".5").unwrap(), 0.5);
    }

    #[test]
    fn depth_is_bounded() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        let err = evaluate(&deep).unwrap_err();
        assert_eq!(err.message(), "expression nested too deeply");

        let ok = format!("{}1{}", "(".repeat(MAX_DEPTH - 1), ")".repeat(MAX_DEPTH - 1));
        assert_eq!(evaluate(&ok).unwrap(), 1.0);
    }
}
