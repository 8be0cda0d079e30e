use std::iter::Peekable;

use crate::{
    ast::{ForLoop, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Keyword, SpannedToken, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// The leading token decides the construct:
/// - `dhori`: a variable declaration.
/// - `dekhao`: a print statement.
/// - `jodi`: a conditional.
/// - `ghuri`: a loop.
/// - an identifier: an assignment.
///
/// `nahole` and `nahole-jodi` cannot start a statement; neither can any
/// punctuation or literal.
///
/// `depth` counts the blocks around the statement; nested blocks and
/// expressions continue counting from it.
///
/// # Errors
/// Returns [`ParseError::UnknownStatement`] for any other leading token.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (token, position) = tokens.peek().copied().ok_or(ParseError::UnexpectedEndOfInput)?;

    match token {
        Token::Keyword(Keyword::Dhori) => parse_variable_declaration(tokens, depth),
        Token::Keyword(Keyword::Dekhao) => parse_print(tokens, depth),
        Token::Keyword(Keyword::Jodi) => parse_if(tokens, depth),
        Token::Keyword(Keyword::Ghuri) => parse_for(tokens, depth),
        Token::Ident(_) => parse_assignment(tokens, depth),
        tok => Err(ParseError::UnknownStatement { token:    tok.clone(),
                                                  position: *position, }),
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `dhori <identifier> = <expression>;`. The
/// trailing `;` belongs to the declaration, which is why a loop header reuses
/// this rule for its init clause.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::Keyword(Keyword::Dhori))?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, &Token::Semi)?;

    Ok(Statement::VariableDeclaration { name, value })
}

/// Parses a print statement: `dekhao <expression>;`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::Keyword(Keyword::Dekhao))?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, &Token::Semi)?;

    Ok(Statement::Print { value })
}

/// Parses a conditional with an optional else block.
///
/// Syntax:
/// ```text
///     jodi <condition> { <statements> }
///     nahole { <statements> }
/// ```
///
/// Only `nahole` introduces an else block. A following `nahole-jodi` is left
/// unconsumed and is rejected by the next call to [`parse_statement`].
fn parse_if<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::Keyword(Keyword::Jodi))?;
    let condition = parse_expression(tokens, depth)?;
    let then_branch = parse_block(tokens, depth)?;

    let else_branch = match tokens.peek() {
        Some((Token::Keyword(Keyword::Nahole), _)) => {
            tokens.next();
            Some(parse_block(tokens, depth)?)
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch })
}

/// Parses a `ghuri` loop.
///
/// Syntax:
/// ```text
///     ghuri (dhori <name> = <expr>; <condition>; <name> = <expr>) { <statements> }
/// ```
///
/// The init clause is a full declaration and consumes its own `;`. The update
/// clause has no `;` because `)` follows it, so it is parsed by
/// [`parse_loop_update`] rather than [`parse_assignment`].
fn parse_for<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    expect(tokens, &Token::Keyword(Keyword::Ghuri))?;
    expect(tokens, &Token::LParen)?;
    let init = parse_variable_declaration(tokens, depth)?;
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, &Token::Semi)?;
    let update = parse_loop_update(tokens, depth)?;
    expect(tokens, &Token::RParen)?;
    let body = parse_block(tokens, depth)?;

    Ok(Statement::For(ForLoop { init: Box::new(init),
                                condition,
                                update: Box::new(update),
                                body }))
}

/// Parses an assignment statement: `<identifier> = <expression>;`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, &Token::Semi)?;

    Ok(Statement::Assignment { name, value })
}

/// Parses the update clause of a loop header: `<identifier> = <expression>`.
///
/// Unlike a standalone assignment there is no `;`; the caller expects `)`.
fn parse_loop_update<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a SpannedToken>
{
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Assign)?;
    let value = parse_expression(tokens, depth)?;

    Ok(Statement::Assignment { name, value })
}
