/// The evaluator module executes the syntax tree and collects output.
///
/// The evaluator walks statements in order against a single flat variable
/// environment, evaluates integer expressions, and records one output line per
/// print statement.
///
/// # Responsibilities
/// - Evaluates statements and expressions of the AST.
/// - Owns the environment of one run.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a number, identifier, keyword, operator or
/// delimiter, tagged with its line and column. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Reclassifies reserved words as keywords.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with precedence climbing for
/// binary operators. It reads tokens left to right with one token of
/// lookahead and never backtracks.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Validates the grammar, reporting the expected and found tokens.
pub mod parser;
