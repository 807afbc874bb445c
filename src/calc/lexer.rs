//! Lexer (tokenizer) for calculator input
//!
//! Converts expression text into a flat [`Token`] stream consumed by the parser.
//! Only number literals, the four arithmetic operators, `**` and parentheses
//! are recognised; any other non-whitespace character is a [`LexError`].

use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries the zero-based char position where it starts so
/// that syntax errors can point at the offending spot.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64, usize),

    Plus(usize),     // +
    Minus(usize),    // -
    Star(usize),     // *
    StarStar(usize), // **
    Slash(usize),    // /

    LParen(usize), // (
    RParen(usize), // )

    Eof(usize),
}

impl Token {
    /// Returns the position where this token starts.
    pub fn position(&self) -> usize {
        match self {
            Token::Number(_, pos)
            | Token::Plus(pos)
            | Token::Minus(pos)
            | Token::Star(pos)
            | Token::StarStar(pos)
            | Token::Slash(pos)
            | Token::LParen(pos)
            | Token::RParen(pos)
            | Token::Eof(pos) => *pos,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::StarStar(_) => write!(f, "'**'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub position: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexer error at column {}: {}", self.position + 1, self.message)
    }
}

impl std::error::Error for LexError {}

/// Lexer for arithmetic expressions
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.position));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        let pos = self.position;
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            position: pos,
        })?;

        match ch {
            '0'..='9' | '.' => self.number_literal(ch, pos),
            '+' => Ok(Token::Plus(pos)),
            '-' => Ok(Token::Minus(pos)),
            '*' => {
                if self.peek() == Some('*') {
                    self.advance();
                    Ok(Token::StarStar(pos))
                } else {
                    Ok(Token::Star(pos))
                }
            }
            '/' => Ok(Token::Slash(pos)),
            '(' => Ok(Token::LParen(pos)),
            ')' => Ok(Token::RParen(pos)),
            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                position: pos,
            }),
        }
    }

    /// Parse a decimal literal: `12`, `1.5`, `.5` or `5.`.
    ///
    /// A second `.` ends the literal, so `1.2.3` lexes as `1.2` followed by
    /// `.3` and is rejected by the parser as two adjacent numbers.
    fn number_literal(&mut self, first: char, start: usize) -> Result<Token, LexError> {
        let mut text = String::new();
        text.push(first);
        let mut seen_dot = first == '.';

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if text == "." {
            return Err(LexError {
                message: "Expected digits around '.'".to_string(),
                position: start,
            });
        }

        // `str::parse::<f64>` accepts "5." and ".5" alike
        text.parse::<f64>()
            .map(|value| Token::Number(value, start))
            .map_err(|_| LexError {
                message: format!("Invalid number literal: {}", text),
                position: start,
            })
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}
