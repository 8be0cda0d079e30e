/// Integer arithmetic helpers.
///
/// The language only knows 64-bit signed integers, which double as booleans.
/// This module holds the operations the standard library does not spell the
/// way the language needs them: floor division and integer truth values.
pub mod num;
