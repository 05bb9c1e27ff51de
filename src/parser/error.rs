/// Everything that can go wrong while tokenizing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    #[error("At position {0} - {1}")]
    AtPosition(usize, Box<ParserError>),

    #[error("Invalid character: {0:?}")]
    UnknownCharacter(char),

    #[error("Invalid number: {0}")]
    Number(#[from] std::num::ParseFloatError),

    #[error("Input string is empty")]
    Empty,

    #[error("Parenthesis was not closed")]
    UnclosedParenthesis,

    #[error("Unexpected token, expected a number, '(' or '-', got {0}")]
    UnexpectedToken(String),

    #[error("Unexpected end of input")]
    UnexpectedEnd,

    #[error("Unexpected input after the expression: {0}")]
    TrailingInput(String),

    #[error("Expression is nested deeper than {0} levels")]
    TooDeep(usize),
}

impl ParserError {
    pub fn err(&self) -> &Self {
        match self {
            ParserError::AtPosition(_, err) => err.as_ref(),
            other => other
        }
    }

    pub fn pos(&self) -> Option<&usize> {
        match self {
            ParserError::AtPosition(position, _) => Some(position),
            _ => None
        }
    }

    pub fn at_pos(self, position: usize) -> Self {
        match self {
            ParserError::AtPosition(_, _) => self,
            other => ParserError::AtPosition(position, Box::new(other))
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
