use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses binary operator chains by precedence climbing.
///
/// Operators whose [`BinaryOperator::precedence`] is below `min_precedence`
/// end the current chain and are left for the caller. The right operand is
/// parsed with `precedence + 1`, so operators of equal precedence fold left:
/// `10 - 3 - 2` parses as `(10 - 3) - 2`.
///
/// Grammar: `binary(p) := unary (op binary(prec(op) + 1))*` where `prec(op) >=
/// p`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `min_precedence`: Weakest operator accepted at this level.
/// - `depth`: Levels already enclosing the expression. Operators do not add
///   levels; the chain is folded in a loop.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the unary expression when no operator follows.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           min_precedence: u8,
                           depth: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let mut left = parse_unary(tokens, depth)?;

    while let Some((token, _)) = tokens.peek().copied()
          && let Some(op) = token_to_binary_operator(token)
    {
        let precedence = op.precedence();
        if precedence < min_precedence {
            break;
        }

        tokens.next();
        let right = parse_binary(tokens, precedence + 1, depth)?;
        left = Expr::binary(left, op, right);
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that cannot continue an expression.
///
/// # Example
/// ```
/// use bpp::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Less => Some(BinaryOperator::Less),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        _ => None,
    }
}
