use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Height limit, in nodes, of the tree built for one statement.
///
/// Parsing and evaluation both recurse once per level, so the limit keeps
/// a hostile line from exhausting the stack.
pub const MAX_DEPTH: usize = 128;

/// Returns the depth for the children of a node parsed at `depth`.
///
/// # Errors
/// `TooDeep` at `column` if a child there could not fit under
/// [`MAX_DEPTH`].
pub(in crate::interpreter::parser) fn descend(depth: usize,
                                              column: usize)
                                              -> ParseResult<usize> {
    if depth + 1 < MAX_DEPTH {
        Ok(depth + 1)
    } else {
        Err(ParseError::TooDeep { column })
    }
}

/// Parses a full line of tokens into the tree that will be evaluated.
///
/// A line is a sequence of statements separated by optional semicolons.
/// Every statement must be syntactically valid, but only the last one is
/// returned: earlier statements are parsed and then dropped without ever
/// reaching the evaluator. `let x = 5; x + 1` therefore yields just `x + 1`.
///
/// Grammar: `program := statement (";"? statement)* ";"?`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs, ending with
///   [`Token::Eof`].
///
/// # Returns
/// The tree of the last statement.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line contains no statement at all.
/// - `TooDeep` if a statement's tree would be taller than [`MAX_DEPTH`].
/// - Any other error raised while parsing one of the statements.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut last = None;

    loop {
        match tokens.peek() {
            Some((Token::Eof, column)) => {
                return last.ok_or(ParseError::UnexpectedEndOfInput { column: *column });
            },
            None => return last.ok_or(ParseError::UnexpectedEndOfInput { column: 0 }),
            Some(_) => {},
        }

        last = Some(parse_statement(tokens)?);

        if let Some((Token::Semicolon, _)) = tokens.peek() {
            tokens.next();
        }
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Number of nodes above the expression; `0` for a statement.
///
/// # Returns
/// The parsed expression node. Its height plus `depth` never exceeds
/// [`MAX_DEPTH`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens, depth)
}
