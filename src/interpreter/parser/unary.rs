use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, nest},
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is `-`. It is desugared on the spot into a
/// subtraction from zero, so `-x` becomes `0 - x` and `--x` becomes
/// `0 - (0 - x)`. Every `-` opens one level of nesting.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    if let Some((Token::Minus, position)) = tokens.peek().copied() {
        let depth = nest(depth, *position)?;
        tokens.next();
        let operand = parse_unary(tokens, depth)?;
        return Ok(Expr::binary(Expr::Number(0), BinaryOperator::Sub, operand));
    }

    parse_primary(tokens, depth)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENT
///              | "(" expression ")"
/// ```
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for any other token, and
/// [`ParseError::NestingTooDeep`] when a `(` opens one level too many.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (token, position) = tokens.peek().copied().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Number(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number(value))
        },
        Token::Ident(name) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Variable(name))
        },
        Token::LParen => {
            let depth = nest(depth, *position)?;
            tokens.next();
            let expr = parse_expression(tokens, depth)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        tok => Err(ParseError::UnexpectedToken { token:    tok.clone(),
                                                 position: *position, }),
    }
}
