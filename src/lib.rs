//! Evaluates arithmetic expressions written as text.
//!
//! Supported are `+ - * / ^`, unary minus, parentheses and decimal literals.
//! Values are `f64` throughout and follow IEEE 754 rules, so `1/0` is infinity
//! rather than an error.
//!
//! ```
//! use maths_parser::{evaluate, ParserError};
//!
//! assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
//!
//! let err = evaluate("2 + @").unwrap_err();
//! assert_eq!(err.err(), &ParserError::UnknownCharacter('@'));
//! ```
#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]


mod error;
mod options;
mod parser;

pub use error::Error;
pub use options::{Options, OptionsBuilder, UnaryMinus, PowerBinding, DEFAULT_MAX_DEPTH};
pub use parser::{
    ParserError,
    Lexer, Token, TokenKind,
    BinaryOperator,
    Evaluator, evaluate, evaluate_with
};
