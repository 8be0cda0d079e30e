/// Core parsing entry points.
///
/// Holds the parse result type, the program-level loop, and the expression
/// entry point.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the leading token to declarations, prints, conditionals,
/// loops, and assignments.
pub mod statement;

/// Brace-delimited statement lists.
pub mod block;

/// Binary operator parsing.
///
/// Implements precedence climbing over arithmetic and comparison operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix minus, literals, variables, and parenthesized expressions.
pub mod unary;

/// Shared token-level helpers such as `expect` and identifier parsing.
pub mod utils;
