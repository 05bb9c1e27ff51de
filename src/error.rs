use crate::parser::ParserError as ParserError;


/// Crate level error covering configuration, parsing and the command line tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Parser error - {0}")]
    ParserError(#[from] ParserError),

    #[error("I/O error - {0}")]
    Io(#[from] std::io::Error),
}
