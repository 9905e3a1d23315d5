/// Binary operator evaluation logic.
///
/// Handles arithmetic, text concatenation, equality, ordering and the two
/// short-circuiting logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and session management.
///
/// Contains the main evaluation engine and the `Session` that carries state
/// from one line to the next.
pub mod core;

/// The case-insensitive variable table.
pub mod environment;

/// Utility functions for evaluation.
///
/// Provides argument checks and coercions shared by the builtins.
pub mod utils;

/// Function evaluation.
///
/// Handles builtin lookup, argument evaluation and the builtin
/// implementations themselves.
pub mod function;
