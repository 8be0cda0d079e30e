use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, nest},
        },
    },
};

/// Parses a block of statements delimited by braces.
///
/// Parsing continues until a closing `}` is found. Reaching the end of input
/// first surfaces as an unknown-statement error at the end-of-input token.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: Levels already enclosing the block.
///
/// # Returns
/// The statements of the block, in source order.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a SpannedToken>
{
    let open = expect(tokens, &Token::LBrace)?;
    let depth = nest(depth, open)?;

    let mut statements = Vec::new();
    while !matches!(tokens.peek(), Some((Token::RBrace, _)) | None) {
        statements.push(parse_statement(tokens, depth)?);
    }

    expect(tokens, &Token::RBrace)?;

    Ok(statements)
}
