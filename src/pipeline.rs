use tracing::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::core::parse_program},
};

const RULE: &str = "------------------------------";

/// Result of one program run, shaped for callers that render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Whether every phase completed.
    pub success:       bool,
    /// Printed lines in execution order. Empty on failure.
    pub output_lines:  Vec<String>,
    /// The single-line diagnostic of the first failure.
    pub error_message: Option<String>,
}

impl From<Result<Vec<String>, Error>> for RunOutcome {
    fn from(result: Result<Vec<String>, Error>) -> Self {
        match result {
            Ok(output_lines) => Self { success: true,
                                       output_lines,
                                       error_message: None },
            Err(e) => Self { success:       false,
                             output_lines:  Vec::new(),
                             error_message: Some(e.to_string()), },
        }
    }
}

/// A run together with the phase-by-phase transcript shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Transcript lines, including blank separator lines.
    pub lines:   Vec<String>,
    /// The underlying outcome.
    pub outcome: RunOutcome,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Lexes, parses and interprets `source`, returning the printed lines.
///
/// The stages run strictly in order and the first error stops the run.
///
/// # Errors
/// Returns the [`Error`] of whichever stage failed first.
///
/// # Example
/// ```
/// use bpp::execute;
///
/// let output = execute("dhori x = 5; dekhao x;").unwrap();
/// assert_eq!(output, vec!["5"]);
///
/// assert!(execute("dekhao 1 / 0;").is_err());
/// ```
pub fn execute(source: &str) -> Result<Vec<String>, Error> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenization finished");

    let program = parse_program(&tokens)?;
    debug!(statements = program.statements.len(), "parsing finished");

    Interpreter::new().interpret(&program)
}

/// Runs `source` and packages the result for an outer layer.
///
/// On failure the output is empty and `error_message` holds the diagnostic,
/// even if some lines were printed before the error.
///
/// # Example
/// ```
/// use bpp::run;
///
/// let outcome = run("dekhao y;");
///
/// assert!(!outcome.success);
/// assert!(outcome.output_lines.is_empty());
/// assert_eq!(outcome.error_message.as_deref(),
///            Some("Runtime error: undefined variable: y"));
/// ```
#[must_use]
pub fn run(source: &str) -> RunOutcome {
    let outcome = RunOutcome::from(execute(source));
    if let Some(message) = &outcome.error_message {
        debug!(%message, "run failed");
    }
    outcome
}

/// Runs `source` and records a transcript of each phase.
///
/// The transcript announces every phase as it starts, confirms it when it
/// succeeds, and ends with either the program output between two rules or a
/// line starting with `ERROR:`.
///
/// # Example
/// ```
/// use bpp::run_with_report;
///
/// let report = run_with_report("dekhao 2 + 3 * 4;");
///
/// assert!(report.outcome.success);
/// assert!(report.lines.contains(&"14".to_string()));
/// assert_eq!(report.lines.last().map(String::as_str), Some("Execution successful."));
/// ```
#[must_use]
pub fn run_with_report(source: &str) -> Report {
    let mut lines = Vec::new();
    let result = transcribe(source, &mut lines);

    match &result {
        Ok(output) => {
            lines.push(String::new());
            lines.push("Program Output:".to_string());
            lines.push(RULE.to_string());
            lines.extend(output.iter().cloned());
            lines.push(RULE.to_string());
            lines.push(String::new());
            lines.push("Execution successful.".to_string());
        },
        Err(e) => lines.push(format!("ERROR: {e}")),
    }

    Report { lines,
             outcome: RunOutcome::from(result) }
}

/// Runs the phases, appending each header and confirmation to `lines`.
fn transcribe(source: &str, lines: &mut Vec<String>) -> Result<Vec<String>, Error> {
    lines.push("[PHASE 1] Lexical Analysis...".to_string());
    let tokens = tokenize(source)?;
    lines.push(format!("Tokenization successful. {} tokens generated.", tokens.len()));
    lines.push(String::new());

    lines.push("[PHASE 2] Syntax Analysis (Parsing)...".to_string());
    let program = parse_program(&tokens)?;
    lines.push("Parsing successful. AST generated.".to_string());
    lines.push(String::new());

    lines.push("[PHASE 3] Semantic Analysis & Interpretation...".to_string());
    Interpreter::new().interpret(&program)
}
