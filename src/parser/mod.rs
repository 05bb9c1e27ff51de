#[cfg(test)]
mod str_test_strategies;

mod error;
mod lexer;
mod operator;
mod eval;

pub use error::ParserError;
pub use lexer::{Lexer, Token, TokenKind};
pub use operator::BinaryOperator;
pub use eval::{Evaluator, evaluate, evaluate_with};
