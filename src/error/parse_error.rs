use crate::interpreter::lexer::{Position, Token};

#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while parsing tokens.
pub enum ParseError {
    /// A specific token was required but another one was found.
    Expected {
        /// Description of what the grammar required.
        expected: String,
        /// The token actually present.
        found:    Token,
        /// Where the found token starts.
        position: Position,
    },
    /// The token cannot begin a statement.
    UnknownStatement {
        /// The offending token.
        token:    Token,
        /// Where the token starts.
        position: Position,
    },
    /// The token cannot begin an expression.
    UnexpectedToken {
        /// The offending token.
        token:    Token,
        /// Where the token starts.
        position: Position,
    },
    /// Parentheses, prefix minus signs and blocks nest deeper than
    /// [`MAX_NESTING_DEPTH`](crate::interpreter::parser::core::MAX_NESTING_DEPTH).
    NestingTooDeep {
        /// Where the innermost rejected level opens.
        position: Position,
    },
    /// The token stream ended without an end-of-input marker.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expected { expected,
                             found,
                             position, } => {
                write!(f, "Error on {position}: Expected {expected} but got {found}.")
            },
            Self::UnknownStatement { token, position } => {
                write!(f, "Error on {position}: Unknown statement: {token}.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error on {position}: Unexpected token: {token}.")
            },
            Self::NestingTooDeep { position } => {
                write!(f, "Error on {position}: Nesting is too deep.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
        }
    }
}

impl std::error::Error for ParseError {}
