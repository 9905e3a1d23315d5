/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree against a session, applying the coercion
/// rules of the value model and calling builtins.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Stores assignments in the session environment.
/// - Reports runtime errors such as undefined variables or unknown functions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their column.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of a line.
///
/// # Responsibilities
/// - Converts tokens into expression trees by recursive descent.
/// - Validates correct grammar and syntax, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares `Value` (number, text, boolean or absent) and the rules for
/// converting, comparing and rendering values.
pub mod value;
