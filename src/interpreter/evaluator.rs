/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the program entry point, expression evaluation
/// and statement dispatch.
pub mod core;

/// The variable store.
///
/// A single flat mapping from names to integers, owned by one interpreter.
pub mod environment;

/// Binary operator evaluation logic.
///
/// Handles arithmetic with overflow checks, floor division, and comparisons
/// that yield `1` or `0`.
pub mod binary;

/// Evaluation of statement lists and conditionals.
pub mod block;

/// Evaluation of `ghuri` loops.
pub mod for_loop;
