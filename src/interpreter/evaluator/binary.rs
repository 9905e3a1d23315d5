/// Operator dispatch.
///
/// Evaluates operands in the right order and routes each operator to its
/// handler.
pub mod core;

/// Short-circuiting `and` and `or`.
pub mod logic;

/// Equality and relational operators.
pub mod comparison;

/// `+`, `-`, `*`, `/` and `^`.
pub mod arithmetic;
