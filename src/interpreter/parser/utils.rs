use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Position, SpannedToken, Token},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Consumes the next token if it equals `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token the grammar requires here.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns [`ParseError::Expected`] without consuming anything if the next
/// token differs.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<Position>
    where I: Iterator<Item = &'a SpannedToken>
{
    match tokens.peek().copied() {
        Some((tok, position)) if tok == expected => {
            let position = *position;
            tokens.next();
            Ok(position)
        },
        Some((tok, position)) => Err(ParseError::Expected { expected: expected.to_string(),
                                                            found:    tok.clone(),
                                                            position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a plain identifier and returns its name.
///
/// Keywords are never identifiers; the lexer has already reclassified them.
///
/// # Errors
/// Returns [`ParseError::Expected`] if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a SpannedToken>
{
    match tokens.peek().copied() {
        Some((Token::Ident(name), _)) => {
            let name = name.clone();
            tokens.next();
            Ok(name)
        },
        Some((tok, position)) => Err(ParseError::Expected { expected: "identifier".to_string(),
                                                            found:    tok.clone(),
                                                            position: *position, }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Enters one more level of nesting below `depth`.
///
/// # Parameters
/// - `depth`: Levels already open.
/// - `position`: Where the new level opens, for the error message.
///
/// # Returns
/// The depth inside the new level.
///
/// # Errors
/// Returns [`ParseError::NestingTooDeep`] once [`MAX_NESTING_DEPTH`] levels are
/// already open.
pub(in crate::interpreter::parser) const fn nest(depth: usize,
                                                 position: Position)
                                                 -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }

    Ok(depth + 1)
}
