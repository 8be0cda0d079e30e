use crate::interpreter::lexer::Position;

#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// An integer literal too large for a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Unexpected character: '{character}' at line {}, col {}",
                                                                        position.line,
                                                                        position.column),
            Self::LiteralTooLarge { literal, position } => write!(f,
                                                                  "Literal is too large: {literal} at line {}, col {}",
                                                                  position.line,
                                                                  position.column),
        }
    }
}

impl std::error::Error for LexError {}
