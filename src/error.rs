use shunt_syntax::ParseError;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    MismatchedParentheses,
    InsufficientOperands(char),
    InvalidNumber(String),
    // leftover operands once every token has been consumed, or none at all
    MalformedExpression,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MismatchedParentheses => write!(f, "mismatched parentheses"),
            Error::InsufficientOperands(op) => {
                write!(f, "insufficient values for operator '{}'", op)
            }
            Error::InvalidNumber(literal) => write!(f, "invalid number: {}", literal),
            Error::MalformedExpression => write!(f, "invalid postfix expression"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::MismatchedParentheses => Error::MismatchedParentheses,
        }
    }
}
