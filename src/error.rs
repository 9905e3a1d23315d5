/// Lexing errors.
///
/// Raised by the lexer when the source line contains a character that cannot
/// start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token stream into
/// a syntax tree: unexpected tokens, missing parentheses, malformed number
/// literals and lines that end before an expression was found.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking the syntax tree:
/// unbound variables, unknown functions, missing arguments and operands that
/// cannot be converted to numbers.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure produced while running one input line through the pipeline.
///
/// Every stage error converts into this type with `?`, so callers that chain
/// `tokenize`, `parse` and `evaluate` get a single error channel. The message
/// of the wrapped error is passed through unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The lexer rejected a character.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream does not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of the syntax tree failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
