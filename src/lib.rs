//! # seals
//!
//! seals is an interactive evaluator for a small, dynamically typed
//! expression language written in Rust.
//! It tokenizes, parses and evaluates one line at a time, with arithmetic,
//! comparison, boolean logic, text operations, variables and builtin
//! functions. Variables persist from line to line within a [`Session`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of one line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each stage has its own error enum; [`Error`] wraps all three so a whole
/// line can be run with `?`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches column numbers to lexer and parser errors.
/// - Renders human-readable messages through `Display`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for one line of source.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-evaluate-print loop.
///
/// Reads lines from any `BufRead`, evaluates them in one session and writes
/// results to any `Write`.
pub mod repl;
/// General numeric helpers.
///
/// Parsing and rendering of numbers and index clamping, shared by the parser,
/// the value model and the builtins.
pub mod util;

pub use crate::{
    ast::Expr,
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::core::Session,
        lexer::{Token, tokenize},
        value::core::Value,
    },
};
use crate::interpreter::parser::core::parse_program;

/// Parses a token sequence produced by [`tokenize`] into one tree.
///
/// Statements may be separated by `;`. All of them must be valid, but only
/// the last one is returned.
///
/// # Errors
/// Returns a [`ParseError`] on any grammar violation, if the tokens contain
/// no statement, or if a statement nests deeper than
/// [`MAX_DEPTH`](interpreter::parser::core::MAX_DEPTH).
///
/// # Example
/// ```
/// use seals::{Expr, parse, tokenize};
///
/// let tree = parse(&tokenize("1; 2; x").unwrap()).unwrap();
/// assert_eq!(tree, Expr::Variable("x".to_string()));
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> Result<Expr, ParseError> {
    parse_program(&mut tokens.iter().peekable())
}

/// Evaluates a tree against a session.
///
/// Assignments in the tree update the session's environment.
///
/// # Errors
/// Returns an [`EvalError`] if evaluation fails. Bindings made before the
/// failure stay in place.
///
/// # Example
/// ```
/// use seals::{Session, Value, evaluate, parse, tokenize};
///
/// let mut session = Session::new();
/// let tree = parse(&tokenize("concat('a', 1 + 1)").unwrap()).unwrap();
///
/// assert_eq!(evaluate(&tree, &mut session).unwrap(), Value::from("a2"));
/// ```
pub fn evaluate(expr: &Expr, session: &mut Session) -> Result<Value, EvalError> {
    session.eval(expr)
}

/// Runs one line of source through every stage.
///
/// Text written by `print` is kept in the session until
/// [`Session::take_output`] collects it.
///
/// # Errors
/// Returns whichever stage error occurs first.
///
/// # Examples
/// ```
/// use seals::{Session, Value, eval_line};
///
/// let mut session = Session::new();
///
/// assert_eq!(eval_line("let r = 2 + 2", &mut session).unwrap(), Value::Number(4.0));
/// assert_eq!(eval_line("r * 10", &mut session).unwrap(), Value::Number(40.0));
///
/// // 'y' is not defined, but the session keeps working afterwards.
/// assert!(eval_line("y + 1", &mut session).is_err());
/// assert_eq!(eval_line("r", &mut session).unwrap(), Value::Number(4.0));
/// ```
pub fn eval_line(source: &str, session: &mut Session) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let tree = parse(&tokens)?;
    Ok(evaluate(&tree, session)?)
}
