/// The runtime value type.
///
/// Defines `Value` together with the coercion, truthiness, equality and
/// rendering rules that the evaluator and every builtin share.
pub mod core;
