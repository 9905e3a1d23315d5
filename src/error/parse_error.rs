/// Represents all errors that can occur during parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this position.
    #[error("Error at column {column}: Expected {expected}, found '{found}'.")]
    UnexpectedToken {
        /// Description of what the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The 1-based column of the token.
        column:   usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at column {column}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The column of the token found instead.
        column: usize,
    },
    /// A numeric literal that does not convert to a number, such as `1.2.3`.
    #[error("Error at column {column}: Invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The literal text as written.
        literal: String,
        /// The 1-based column of the literal.
        column:  usize,
    },
    /// Reached the end of input where an expression was required.
    #[error("Error at column {column}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The column just past the last character.
        column: usize,
    },
    /// The expression nests deeper than the parser allows.
    #[error("Error at column {column}: Expression is nested too deeply.")]
    TooDeep {
        /// The column of the token that would have gone one level deeper.
        column: usize,
    },
}
