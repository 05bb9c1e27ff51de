use log::debug;
use crate::{Options, PowerBinding, UnaryMinus};
use crate::parser::error::*;
use crate::parser::operator::{BinaryOperator, Precedence};
use crate::parser::{Lexer, Token};


/// A single pass recursive descent evaluator for arithmetic expressions.
///
/// The grammar, loosest binding first:
///
/// ```text
/// expression := factor (('+' | '-') factor)*
/// factor     := power (('*' | '/') power)*
/// power      := number ('^' number)*
/// number     := NUMBER | '(' expression ')' | '-' expression
/// ```
///
/// Every binary operator folds left to right, so `2^3^2` is `64`. With
/// [`PowerBinding::Factor`] the `power` rule disappears and `^` folds together
/// with `*` and `/`, making `2*3^2` equal `36` instead of `18`.
/// The operand of a unary minus depends on [`Options::unary_minus()`].
///
/// An evaluator is built for one input and parsed once. The outcome is kept,
/// so [`Evaluator::value()`], [`Evaluator::has_error()`] and [`Evaluator::error()`]
/// can be queried afterwards.
#[derive(Debug)]
pub struct Evaluator {
    lexer: Lexer,
    input: String,
    options: Options,
    depth: usize,
    outcome: Option<Result<f64>>,
}

impl Evaluator {
    /// Creates an evaluator for `input` with the default [`Options`].
    ///
    /// # Examples
    /// ```
    /// use maths_parser::Evaluator;
    ///
    /// let mut evaluator = Evaluator::new("(2 + 3) * 4");
    /// assert_eq!(evaluator.parse(), Ok(20.0));
    /// assert_eq!(evaluator.value(), Some(20.0));
    /// assert!(!evaluator.has_error());
    /// ```
    pub fn new(input: &str) -> Self {
        Self::with_options(input, Options::default())
    }

    /// Creates an evaluator for `input` with the given [`Options`].
    ///
    /// # Examples
    /// ```
    /// use maths_parser::{Evaluator, Options, UnaryMinus};
    ///
    /// let options = Options::builder().unary_minus(UnaryMinus::Operand).build().unwrap();
    ///
    /// let mut evaluator = Evaluator::with_options("-2^2", options);
    /// assert_eq!(evaluator.parse(), Ok(4.0));
    ///
    /// let mut evaluator = Evaluator::new("-2^2");
    /// assert_eq!(evaluator.parse(), Ok(-4.0));
    /// ```
    pub fn with_options(input: &str, options: Options) -> Self {
        Self {
            lexer: Lexer::new(input),
            input: input.to_owned(),
            options,
            depth: 0,
            outcome: None,
        }
    }

    /// Parses and evaluates the whole input.
    ///
    /// The first call does the work; later calls return the same outcome.
    ///
    /// # Errors
    /// Errors returned are always wrapped with a [`ParserError::AtPosition`] holding
    /// the character offset of the offending token. The wrapped error is one of:
    /// - [`ParserError::Empty`] if the input holds nothing but whitespace.
    /// - [`ParserError::UnknownCharacter`] if a character starts no valid token.
    /// - [`ParserError::UnexpectedToken`] or [`ParserError::UnexpectedEnd`] where a
    ///   number, `(` or `-` was expected.
    /// - [`ParserError::UnclosedParenthesis`] if a group is not closed.
    /// - [`ParserError::TrailingInput`] if tokens remain after the expression.
    /// - [`ParserError::TooDeep`] if nesting exceeds [`Options::max_depth()`].
    ///
    /// # Examples
    /// ```
    /// use maths_parser::{Evaluator, ParserError};
    ///
    /// let mut evaluator = Evaluator::new("2 + 2)");
    /// let err = evaluator.parse().unwrap_err();
    ///
    /// assert!(matches!(err.err(), ParserError::TrailingInput(_)));
    /// assert_eq!(err.pos(), Some(&5));
    /// assert!(evaluator.has_error());
    /// assert_eq!(evaluator.value(), None);
    /// ```
    pub fn parse(&mut self) -> Result<f64> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let outcome = self.parse_input()
            .map_err(|err| err.at_pos(self.lexer.token_position()));

        match &outcome {
            Ok(value) => debug!("evaluated {:?} to {value}", self.input),
            Err(err) => debug!("failed to evaluate {:?}: {err}", self.input),
        }

        self.outcome = Some(outcome.clone());
        outcome
    }

    /// The computed value, present only after a successful [`Evaluator::parse()`].
    pub fn value(&self) -> Option<f64> {
        match self.outcome {
            Some(Ok(value)) => Some(value),
            _ => None
        }
    }

    /// Whether [`Evaluator::parse()`] has run and failed.
    pub fn has_error(&self) -> bool {
        matches!(self.outcome, Some(Err(_)))
    }

    /// The error of a failed [`Evaluator::parse()`].
    pub fn error(&self) -> Option<&ParserError> {
        match &self.outcome {
            Some(Err(err)) => Some(err),
            _ => None
        }
    }

    /// The input exactly as given at construction.
    pub fn original_text(&self) -> &str {
        &self.input
    }

    /// The settings this evaluator runs with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn parse_input(&mut self) -> Result<f64> {
        if self.lexer.peek_token()? == Token::End {
            return Err(ParserError::Empty);
        }

        let value = self.parse_expression()?;

        match self.lexer.next_token()? {
            Token::End => Ok(value),
            Token::Unknown(ch) => Err(ParserError::UnknownCharacter(ch)),
            other => Err(ParserError::TrailingInput(other.to_string())),
        }
    }

    fn parse_expression(&mut self) -> Result<f64> {
        let mut total = self.parse_factor()?;

        while let Some(op) = self.peek_operator(Precedence::Sum)? {
            self.lexer.next_token()?;
            total = op.op(total, self.parse_factor()?);
        }

        Ok(total)
    }

    fn parse_factor(&mut self) -> Result<f64> {
        let mut total = self.parse_power()?;

        while let Some(op) = self.peek_operator(Precedence::Product)? {
            self.lexer.next_token()?;
            total = op.op(total, self.parse_power()?);
        }

        Ok(total)
    }

    fn parse_power(&mut self) -> Result<f64> {
        let mut total = self.parse_number()?;

        while let Some(op) = self.peek_operator(Precedence::Power)? {
            self.lexer.next_token()?;
            total = op.op(total, self.parse_number()?);
        }

        Ok(total)
    }

    fn parse_number(&mut self) -> Result<f64> {
        match self.lexer.next_token()? {
            Token::Number(value) => Ok(value),

            Token::LeftParen => {
                let value = self.nested(Self::parse_expression)?;

                match self.lexer.next_token()? {
                    Token::RightParen => Ok(value),
                    Token::Unknown(ch) => Err(ParserError::UnknownCharacter(ch)),
                    _ => Err(ParserError::UnclosedParenthesis)
                }
            },

            Token::Minus => {
                let operand = match self.options.unary_minus() {
                    UnaryMinus::Expression => self.nested(Self::parse_expression)?,
                    UnaryMinus::Operand => self.nested(Self::parse_number)?,
                };
                Ok(-operand)
            },

            Token::Unknown(ch) => Err(ParserError::UnknownCharacter(ch)),
            Token::End => Err(ParserError::UnexpectedEnd),
            other => Err(ParserError::UnexpectedToken(other.to_string()))
        }
    }

    fn peek_operator(&mut self, precedence: Precedence) -> Result<Option<BinaryOperator>> {
        let token = self.lexer.peek_token()?;
        Ok(BinaryOperator::from_token(&token).filter(|op| self.tier(*op) == precedence))
    }

    fn tier(&self, op: BinaryOperator) -> Precedence {
        match (op, self.options.power_binding()) {
            (BinaryOperator::Power, PowerBinding::Factor) => Precedence::Product,
            _ => op.precedence()
        }
    }

    fn nested(&mut self, rule: fn(&mut Self) -> Result<f64>) -> Result<f64> {
        if self.depth >= self.options.max_depth() {
            return Err(ParserError::TooDeep(self.options.max_depth()));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;

        result
    }
}


/// Evaluates an arithmetic expression with the default [`Options`].
///
/// This is a convenience function that creates an [`Evaluator`] and calls its `parse` method.
///
/// # Errors
/// Same as [`Evaluator::parse()`].
///
/// # Examples
/// ```
/// use maths_parser::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
/// assert_eq!(evaluate("(5-3)^-(2+2)"), Ok(0.0625));
/// assert!(evaluate("(5 - 3").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<f64> {
    Evaluator::new(input).parse()
}

/// Evaluates an arithmetic expression with the given [`Options`].
///
/// # Errors
/// Same as [`Evaluator::parse()`].
pub fn evaluate_with(input: &str, options: Options) -> Result<f64> {
    Evaluator::with_options(input, options).parse()
}
