/// Represents all errors that can occur during lexing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that is not whitespace, part of a comment, a literal, an
    /// identifier or an operator symbol.
    #[error("Error at column {column}: Unrecognized character '{character}'.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// The 1-based column of the character.
        column:    usize,
    },
}
