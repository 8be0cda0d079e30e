use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{binary::parse_binary, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How many parentheses, prefix minus signs and blocks may enclose each other.
///
/// Parsing and evaluation recurse once per level, so the limit keeps deeply
/// nested programs from exhausting the stack. Chains of binary operators are
/// not nesting and are unlimited.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a whole token stream into a [`Program`].
///
/// Statements are parsed until [`Token::Eof`]. The stream is read strictly
/// left to right with a single token of lookahead.
///
/// Grammar: `program := statement* EOF`
///
/// # Errors
/// Returns the first [`ParseError`] encountered; nothing after it is parsed.
///
/// # Example
/// ```
/// use bpp::{
///     ast::{Expr, Statement},
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("dekhao 7;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements,
///            vec![Statement::Print { value: Expr::Number(7) }]);
/// ```
pub fn parse_program(tokens: &[SpannedToken]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        match iter.peek() {
            Some((Token::Eof, _)) => break,
            Some(_) => statements.push(parse_statement(&mut iter, 0)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It starts precedence
/// climbing at the lowest level, so comparisons are accepted.
///
/// Grammar: `expression := binary(0)`
///
/// `depth` is the number of levels already enclosing the expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    parse_binary(tokens, 0, depth)
}
