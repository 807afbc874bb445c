//! Recursive descent parser for calculator expressions
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+')+ primary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! `**` is right-associative and binds tighter than the prefix operators on
//! its left, but a prefix operator may not be applied directly to its base:
//! `-2 ** 2` is rejected and has to be written `(-2) ** 2` or `-(2 ** 2)`.
//!
//! Nesting depth and operator count are capped so that neither parsing nor
//! evaluating the resulting tree can exhaust the stack.

use crate::calc::ast::{BinOp, Expr, UnaryOp};
use crate::calc::lexer::{LexError, Lexer, Token};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error at column {}: {}", self.position + 1, self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            position: err.position,
        }
    }
}

/// Deepest allowed nesting of parentheses, prefix operators and exponents
pub const MAX_DEPTH: usize = 128;

/// Most operators (binary and prefix) one expression may contain
pub const MAX_OPERATORS: usize = 1024;

/// Recursive descent parser over a token stream
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    operators: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            depth: 0,
            operators: 0,
        })
    }

    /// Parse the whole input as a single expression.
    ///
    /// Trailing tokens after a complete expression are an error.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        if self.is_at_end() {
            return Err(self.error_here("Empty expression"));
        }

        let expr = self.parse_expression()?;

        if !self.is_at_end() {
            return Err(self.error_here(&format!("Unexpected {}", self.peek())));
        }

        Ok(expr)
    }

    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.peek() {
                Token::Plus(_) => BinOp::Add,
                Token::Minus(_) => BinOp::Sub,
                _ => break,
            };
            self.count_operator()?;
            self.advance();
            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.peek() {
                Token::Star(_) => BinOp::Mul,
                Token::Slash(_) => BinOp::Div,
                _ => break,
            };
            self.count_operator()?;
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if !matches!(self.peek(), Token::Minus(_) | Token::Plus(_)) {
            return self.parse_power();
        }

        let expr = self.parse_prefixed()?;

        if let Token::StarStar(pos) = self.peek() {
            return Err(ParseError {
                message: "Unary operator used immediately before '**'; add parentheses"
                    .to_string(),
                position: *pos,
            });
        }

        Ok(expr)
    }

    /// A chain of prefix operators applied to a primary, never to a power.
    fn parse_prefixed(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek() {
            Token::Minus(_) => UnaryOp::Neg,
            Token::Plus(_) => UnaryOp::Plus,
            _ => return self.parse_primary(),
        };
        self.count_operator()?;
        self.enter()?;
        self.advance();

        let operand = self.parse_prefixed()?;
        self.leave();
        Ok(Expr::unary(op, operand))
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;

        if matches!(self.peek(), Token::StarStar(_)) {
            self.count_operator()?;
            self.enter()?;
            self.advance();
            // Exponent may itself carry a sign: 2 ** -1
            let exponent = self.parse_unary()?;
            self.leave();
            return Ok(Expr::binary(BinOp::Pow, base, exponent));
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().clone() {
            Token::Number(value, _) => {
                self.advance();
                Ok(Expr::number(value))
            }
            Token::LParen(open) => {
                self.enter()?;
                self.advance();
                if let Token::RParen(_) = self.peek() {
                    return Err(self.error_here("Empty parentheses"));
                }
                let inner = self.parse_expression()?;
                match self.peek().clone() {
                    Token::RParen(_) => {
                        self.advance();
                        self.leave();
                        Ok(inner)
                    }
                    Token::Eof(_) => Err(ParseError {
                        message: "Unclosed '('".to_string(),
                        position: open,
                    }),
                    other => Err(self.error_here(&format!("Expected ')' but found {}", other))),
                }
            }
            other => {
                Err(self.error_here(&format!("Expected a number or '(' but found {}", other)))
            }
        }
    }

    // ===== Helper methods =====

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth == MAX_DEPTH {
            return Err(self.error_here("Expression nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Every operator adds one node to the tree, so this also bounds its depth
    fn count_operator(&mut self) -> Result<(), ParseError> {
        if self.operators == MAX_OPERATORS {
            return Err(self.error_here("Expression has too many operators"));
        }
        self.operators += 1;
        Ok(())
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    fn error_here(&self, message: &str) -> ParseError {
        ParseError {
            message: message.to_string(),
            position: self.peek().position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Expr, ParseError> {
        Parser::new(source)?.parse()
    }

    #[test]
    fn test_precedence() {
        let expr = parse("1 + 2 * 3").unwrap();
        assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn test_left_associativity() {
        let expr = parse("8 - 4 - 2").unwrap();
        assert_eq!(expr.to_string(), "((8 - 4) - 2)");

        let expr = parse("8 / 4 / 2").unwrap();
        assert_eq!(expr.to_string(), "((8 / 4) / 2)");
    }

    #[test]
    fn test_power_is_right_associative() {
        let expr = parse("2 ** 3 ** 2").unwrap();
        assert_eq!(expr.to_string(), "(2 ** (3 ** 2))");
    }

    #[test]
    fn test_negative_exponent() {
        let expr = parse("2 ** -1").unwrap();
        assert_eq!(expr.to_string(), "(2 ** (-1))");
    }

    #[test]
    fn test_unary_before_power_rejected() {
        let err = parse("-2 ** 2").unwrap_err();
        assert_eq!(err.position, 3);

        assert!(parse("(-2) ** 2").is_ok());
        assert!(parse("-(2 ** 2)").is_ok());
    }

    #[test]
    fn test_parentheses() {
        let expr = parse("(2 + 3) * 4").unwrap();
        assert_eq!(expr.to_string(), "((2 + 3) * 4)");
    }

    #[test]
    fn test_errors() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
        assert!(parse("2+").is_err());
        assert!(parse("()").is_err());
        assert!(parse("(1 + 2").is_err());
        assert!(parse("1 + 2)").is_err());
        assert!(parse("2 3").is_err());
        assert!(parse("* 2").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let at_limit = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert!(parse(&at_limit).is_ok());

        let deep = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
        let err = parse(&deep).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");
        assert_eq!(err.position, MAX_DEPTH);

        let err = parse(&format!("{}1", "-".repeat(100_000))).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");

        let err = parse(&vec!["2"; 10_000].join(" ** ")).unwrap_err();
        assert_eq!(err.message, "Expression nested too deeply");
    }

    #[test]
    fn test_operator_limit() {
        assert!(parse(&vec!["1"; MAX_OPERATORS + 1].join("+")).is_ok());

        let err = parse(&vec!["1"; 200_000].join("+")).unwrap_err();
        assert_eq!(err.message, "Expression has too many operators");

        let err = parse(&vec!["1"; 200_000].join("*")).unwrap_err();
        assert_eq!(err.message, "Expression has too many operators");
    }

    #[test]
    fn test_unclosed_paren_points_at_open() {
        let err = parse("4 * (1 + 2").unwrap_err();
        assert_eq!(err.position, 4);
    }
}
