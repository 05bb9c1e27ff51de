use std::fmt::Display;
use log::trace;
use crate::parser::error::*;


/// A single classified lexical unit.
///
/// Only [`Token::Number`] carries a numeric payload. [`Token::Unknown`] keeps the
/// character that could not be classified so it can be reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// `+`
    Plus,
    /// `-`, binary subtraction or unary negation depending on position
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// A decimal literal such as `3`, `2.5` or `7.`
    Number(f64),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// No input left
    End,
    /// A character that starts no valid token
    Unknown(char),
}

impl Token {
    /// Returns the classification of this token without its payload.
    pub const fn kind(&self) -> TokenKind {
        match self {
            Token::Plus => TokenKind::Plus,
            Token::Minus => TokenKind::Minus,
            Token::Mult => TokenKind::Mult,
            Token::Div => TokenKind::Div,
            Token::Pow => TokenKind::Pow,
            Token::Number(_) => TokenKind::Number,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::End => TokenKind::End,
            Token::Unknown(_) => TokenKind::Unknown,
        }
    }

    /// Numeric payload, present only for [`Token::Number`].
    pub const fn value(&self) -> Option<f64> {
        match self {
            Token::Number(value) => Some(*value),
            _ => None
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Mult => write!(f, "'*'"),
            Token::Div => write!(f, "'/'"),
            Token::Pow => write!(f, "'^'"),
            Token::Number(value) => write!(f, "{value}"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::End => write!(f, "<end>"),
            Token::Unknown(ch) => write!(f, "{ch:?}"),
        }
    }
}


/// Payload-free classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TokenKind {
    Plus,
    Minus,
    Mult,
    Div,
    Pow,
    Number,
    LeftParen,
    RightParen,
    End,
    Unknown,
}


/// Pull based tokenizer over an arithmetic expression.
///
/// Every call to [`Lexer::next_token()`] consumes exactly one token from the front
/// of the remaining input. The most recent token is kept so that a single
/// [`Lexer::revert()`] can hand it out once more.
///
/// An unrecognised character ends the scan for good: the rest of the input is
/// dropped and every later pull yields [`Token::End`].
#[derive(Debug)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    token_start: usize,
    previous: Option<Token>,
    replay: bool,
}

impl Lexer {
    /// Creates a lexer positioned at the start of `input`.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
            previous: None,
            replay: false,
        }
    }

    /// Produces the next token, or replays the previous one after a [`Lexer::revert()`].
    ///
    /// # Errors
    /// Returns [`ParserError::Number`] if a numeric literal cannot be converted to `f64`.
    ///
    /// # Examples
    /// ```
    /// use maths_parser::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("2 * (1.5)");
    /// assert_eq!(lexer.next_token().unwrap(), Token::Number(2.0));
    /// assert_eq!(lexer.next_token().unwrap(), Token::Mult);
    /// assert_eq!(lexer.next_token().unwrap(), Token::LeftParen);
    /// assert_eq!(lexer.next_token().unwrap(), Token::Number(1.5));
    /// assert_eq!(lexer.next_token().unwrap(), Token::RightParen);
    /// assert_eq!(lexer.next_token().unwrap(), Token::End);
    /// ```
    pub fn next_token(&mut self) -> Result<Token> {
        if self.replay {
            self.replay = false;
            if let Some(token) = self.previous {
                return Ok(token);
            }
        }

        let token = self.scan()?;
        trace!("token {token} at {}", self.token_start);

        self.previous = Some(token);
        Ok(token)
    }

    /// Makes the next [`Lexer::next_token()`] call return the last produced token again.
    ///
    /// Only one token of history is kept, so reverting twice in a row is the same
    /// as reverting once. Reverting before any token was produced does nothing.
    pub fn revert(&mut self) {
        self.replay = self.previous.is_some();
    }

    /// Looks at the next token without consuming it.
    ///
    /// # Errors
    /// Same as [`Lexer::next_token()`].
    pub fn peek_token(&mut self) -> Result<Token> {
        let token = self.next_token()?;
        self.revert();
        Ok(token)
    }

    /// Character offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Character offset where the most recently produced token starts.
    pub fn token_position(&self) -> usize {
        self.token_start
    }

    fn scan(&mut self) -> Result<Token> {
        self.skip_whitespace();
        self.token_start = self.position;

        let Some(&ch) = self.input.get(self.position) else {
            return Ok(Token::End);
        };

        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Mult,
            '/' => Token::Div,
            '^' => Token::Pow,
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            '0'..='9' => return self.read_number(),
            other => {
                self.input.truncate(self.position);
                return Ok(Token::Unknown(other));
            }
        };

        self.position += 1;
        Ok(token)
    }

    fn skip_whitespace(&mut self) {
        while self.position < self.input.len() && self.input[self.position].is_whitespace() {
            self.position += 1;
        }
    }

    fn skip_digits(&mut self) {
        while self.position < self.input.len() && self.input[self.position].is_ascii_digit() {
            self.position += 1;
        }
    }

    fn read_number(&mut self) -> Result<Token> {
        let start = self.position;
        self.skip_digits();

        if self.input.get(self.position) == Some(&'.') {
            self.position += 1;
            self.skip_digits();
        }

        let literal: String = self.input[start..self.position].iter().collect();
        Ok(Token::Number(literal.parse()?))
    }
}
