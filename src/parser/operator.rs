use std::fmt::Display;
use crate::parser::Token;


/// Binding tier of a binary operator, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    Sum = 1,
    Product = 2,
    Power = 3,
}


/// The binary operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
}

impl BinaryOperator {
    /// Maps an operator token to its operator, `None` for every other token.
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(BinaryOperator::Add),
            Token::Minus => Some(BinaryOperator::Subtract),
            Token::Mult => Some(BinaryOperator::Multiply),
            Token::Div => Some(BinaryOperator::Divide),
            Token::Pow => Some(BinaryOperator::Power),
            _ => None
        }
    }

    pub(crate) const fn precedence(&self) -> Precedence {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => Precedence::Sum,
            BinaryOperator::Multiply | BinaryOperator::Divide => Precedence::Product,
            BinaryOperator::Power => Precedence::Power,
        }
    }

    /// Applies the operator with plain IEEE 754 semantics.
    ///
    /// Division by zero gives an infinity or NaN and `0 ^ 0` is `1`; no case is guarded.
    ///
    /// # Examples
    /// ```
    /// use maths_parser::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Power.op(2.0, -2.0), 0.25);
    /// assert_eq!(BinaryOperator::Divide.op(1.0, 0.0), f64::INFINITY);
    /// ```
    pub fn op(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator as Op;
        match self {
            Op::Add => left + right,
            Op::Subtract => left - right,
            Op::Multiply => left * right,
            Op::Divide => left / right,
            Op::Power => left.powf(right),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Power => write!(f, "^"),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;


    fn token_strategy() -> impl Strategy<Value = Token> {
        prop_oneof![
            (0u16..=100).prop_map(|n| Token::Number(n as f64)),
            Just(Token::Plus),
            Just(Token::Minus),
            Just(Token::Mult),
            Just(Token::Div),
            Just(Token::Pow),
            Just(Token::LeftParen),
            Just(Token::RightParen),
            Just(Token::End),
            Just(Token::Unknown('#')),
        ]
    }

    proptest! {
        #[test]
        fn test_precedence_of_token(token in token_strategy()) {
            let precedence = BinaryOperator::from_token(&token).map(|op| op.precedence());

            match token {
                Token::Plus | Token::Minus => prop_assert_eq!(precedence, Some(Precedence::Sum)),
                Token::Mult | Token::Div => prop_assert_eq!(precedence, Some(Precedence::Product)),
                Token::Pow => prop_assert_eq!(precedence, Some(Precedence::Power)),
                _ => prop_assert_eq!(precedence, None),
            }
        }

        #[test]
        fn test_display_matches_token(token in token_strategy()) {
            if let Some(op) = BinaryOperator::from_token(&token) {
                prop_assert_eq!(format!("'{op}'"), token.to_string());
            }
        }

        #[test]
        fn test_arithmetic(left in -1000i32..=1000, right in -1000i32..=1000) {
            let (l, r) = (left as f64, right as f64);

            prop_assert_eq!(BinaryOperator::Add.op(l, r), (left + right) as f64);
            prop_assert_eq!(BinaryOperator::Subtract.op(l, r), (left - right) as f64);
            prop_assert_eq!(BinaryOperator::Multiply.op(l, r), (left * right) as f64);
        }
    }

    #[test]
    fn test_floating_point_edge_cases() {
        assert_eq!(BinaryOperator::Divide.op(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(BinaryOperator::Divide.op(0.0, 0.0).is_nan());
        assert_eq!(BinaryOperator::Power.op(0.0, 0.0), 1.0);
        assert_eq!(BinaryOperator::Power.op(4.0, 0.5), 2.0);
        assert!(BinaryOperator::Power.op(-8.0, 1.0 / 3.0).is_nan());
    }
}
