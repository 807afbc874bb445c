//! Arithmetic expression evaluation for the calculator program
//!
//! Evaluation is a fixed pipeline:
//!
//! ```text
//! raw text → whitelist → Lexer → Parser → Expr → f64 → finiteness check
//! ```
//!
//! - [`is_whitelisted`]: every char must be an ASCII digit, one of
//!   `+ - * / ( ) .`, or whitespace. Nothing else ever reaches the lexer.
//! - [`lexer`]: tokenization (text → tokens)
//! - [`parse`]: recursive descent parsing (tokens → [`ast::Expr`])
//! - [`ast`]: expression tree and its `f64` evaluation
//!
//! Every failure collapses into [`InvalidExpression`]; callers show it as a
//! message and carry on.

pub mod ast;
pub mod lexer;
pub mod parse;

use parse::{ParseError, Parser};
use thiserror::Error;
use tracing::debug;

/// Why an input could not be turned into a number
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidExpression {
    #[error("empty expression")]
    Empty,

    #[error("character '{}' at column {} is not allowed", .ch, .position + 1)]
    DisallowedCharacter { ch: char, position: usize },

    #[error("syntax error at column {}: {}", .position + 1, .message)]
    Syntax { message: String, position: usize },

    #[error("result is not a finite number ({value})")]
    NonFinite { value: f64 },
}

impl From<ParseError> for InvalidExpression {
    fn from(err: ParseError) -> Self {
        InvalidExpression::Syntax {
            message: err.message,
            position: err.position,
        }
    }
}

/// Returns true for the chars an expression may contain.
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_digit()
        || matches!(ch, '+' | '-' | '*' | '/' | '(' | ')' | '.')
        || ch.is_whitespace()
}

/// Returns true when `raw` is non-empty and made only of allowed chars.
pub fn is_whitelisted(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(is_allowed_char)
}

fn check_whitelist(raw: &str) -> Result<(), InvalidExpression> {
    if raw.is_empty() {
        return Err(InvalidExpression::Empty);
    }
    match raw.chars().enumerate().find(|(_, ch)| !is_allowed_char(*ch)) {
        Some((position, ch)) => Err(InvalidExpression::DisallowedCharacter { ch, position }),
        None => Ok(()),
    }
}

/// Validate and evaluate an arithmetic expression.
///
/// Pure: the same input always produces the same output.
pub fn evaluate(raw: &str) -> Result<f64, InvalidExpression> {
    let outcome = check_whitelist(raw).and_then(|()| {
        let expr = Parser::new(raw)?.parse()?;
        let value = expr.eval();
        if value.is_finite() {
            Ok(value)
        } else {
            Err(InvalidExpression::NonFinite { value })
        }
    });

    match &outcome {
        Ok(value) => debug!(input = raw, value, "expression evaluated"),
        Err(err) => debug!(input = raw, error = %err, "expression rejected"),
    }

    outcome
}

/// Format a result the way a script runtime prints numbers: no trailing
/// `.0` on integral values and no negative zero.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Message shown in place of a result when evaluation fails
pub const INVALID_MESSAGE: &str = "Invalid expression";

/// Calculator state: the text being typed and the outcome of the last
/// evaluation.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    input: String,
    last_result: Option<Result<f64, InvalidExpression>>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Clear the input. The last result stays visible until the next
    /// evaluation.
    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Evaluate the current input and remember the outcome
    pub fn evaluate(&mut self) -> &Result<f64, InvalidExpression> {
        self.last_result.insert(evaluate(&self.input))
    }

    pub fn last_result(&self) -> Option<&Result<f64, InvalidExpression>> {
        self.last_result.as_ref()
    }

    /// Text for the result line: empty before the first evaluation
    pub fn display(&self) -> String {
        match &self.last_result {
            None => String::new(),
            Some(Ok(value)) => format_number(*value),
            Some(Err(_)) => INVALID_MESSAGE.to_string(),
        }
    }
}
