/// Locale-independent number parsing and formatting.
///
/// This module holds the conversions between `f64` and text that the value
/// model, the parser and the builtins share, so a number always reads and
/// renders the same way regardless of where it came from.
pub mod num;
