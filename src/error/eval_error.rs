/// Represents all errors that can occur during evaluation.
///
/// Evaluation errors abort the current line only. Bindings committed by
/// earlier lines stay in the session.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Tried to read a variable that was never assigned.
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name as written in the source.
        name: String,
    },
    /// Called a function that is not in the builtin table.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name as written in the source.
        name: String,
    },
    /// A builtin was called with fewer arguments than it requires.
    #[error("Not enough arguments for '{function}': expected at least {expected}, found {found}.")]
    NotEnoughArguments {
        /// The builtin that was called.
        function: &'static str,
        /// The number of required arguments.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An operand or argument could not be converted to a number.
    #[error("Cannot convert to number: '{value}'.")]
    NotANumber {
        /// The textual rendering of the offending value.
        value: String,
    },
}
