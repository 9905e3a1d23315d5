/// Entry points of the parser.
///
/// Holds the result type, the line-level statement loop and the expression
/// entry point that the other submodules recurse into.
pub mod core;

/// Unary operators and primary expressions.
///
/// Handles prefix negation and logical not, literals, variables, calls and
/// parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to
/// exponentiation.
pub mod binary;

/// `let` bindings and bare expression statements.
pub mod statement;

/// Small helpers shared by the other parser modules.
pub mod utils;
