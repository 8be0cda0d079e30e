//! # bpp
//!
//! bpp runs programs written in b++, a small teaching language with Bengali
//! keywords: `dhori` declares, `dekhao` prints, `jodi`/`nahole` branch and
//! `ghuri` loops. Values are 64-bit integers; comparisons yield `1` or `0`.
//!
//! Source text goes through three stages, each of which may stop the run:
//! the lexer, a recursive-descent parser, and a tree-walking evaluator.
//!
//! ```
//! let outcome = bpp::run("ghuri (dhori i = 0; i < 3; i = i + 1) { dekhao i; }");
//!
//! assert!(outcome.success);
//! assert_eq!(outcome.output_lines, vec!["0", "1", "2"]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Defines the binary operators and their precedence.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error aborts the run; there are no warnings.
///
/// # Responsibilities
/// - Defines one error enum per stage, carrying source positions where the
///   stage knows them.
/// - Combines them into a single `Error` for the pipeline boundary.
pub mod error;
/// Holds the lexer, parser and evaluator.
///
/// Each stage is usable on its own; [`pipeline`] chains them.
pub mod interpreter;
/// Runs the stages in order and shapes the result for callers.
///
/// # Responsibilities
/// - Stops at the first failing stage.
/// - Produces the success flag, output lines and error message.
/// - Optionally records a phase-by-phase transcript.
pub mod pipeline;
/// Integer helpers shared by the evaluator.
pub mod util;

pub use pipeline::{Report, RunOutcome, execute, run, run_with_report};
