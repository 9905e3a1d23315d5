use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, descend, parse_expression},
            utils::parse_arguments,
        },
    },
    util::num::parse_invariant,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!` / `not`  (logical not)
///
/// Unary operators are right-associative and bind tighter than every binary
/// operator, so `-2 ^ 2` is `(-2) ^ 2` and `!-x` is `!(-x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "not") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Number of nodes above this one.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (op, column) = match tokens.peek() {
        Some((Token::Minus, column)) => (UnaryOperator::Negate, *column),
        Some((Token::Not, column)) => (UnaryOperator::Not, *column),
        _ => return parse_primary(tokens, depth),
    };
    tokens.next();
    let operand = parse_unary(tokens, descend(depth, column)?)?;
    Ok(Expr::unary(op, operand))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - `true` and `false`
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// An identifier directly followed by `(` is always a call, even when it is
/// spelled `true` or `false`.
///
/// # Errors
/// - `InvalidNumber` for numeric text such as `1.2.3`.
/// - `ExpectedClosingParen` for an unbalanced group.
/// - `UnexpectedEndOfInput` when the line ends where an operand is needed.
/// - `UnexpectedToken` for anything else that cannot start an operand.
/// - `TooDeep` when the arguments or the group would nest past the limit.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(literal), column)) => {
            parse_invariant(literal).map(Expr::NumberLiteral)
                                    .ok_or_else(|| ParseError::InvalidNumber { literal: literal.clone(),
                                                                               column:  *column, })
        },
        Some((Token::StringLiteral(text), _)) => Ok(Expr::StringLiteral(text.clone())),
        Some((Token::Identifier(name), column)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments = parse_arguments(tokens, descend(depth, *column)?)?;
                return Ok(Expr::Call { name: name.clone(),
                                       arguments });
            }
            Ok(match name.as_str() {
                "true" => Expr::BooleanLiteral(true),
                "false" => Expr::BooleanLiteral(false),
                _ => Expr::Variable(name.clone()),
            })
        },
        Some((Token::LParen, column)) => parse_grouping(tokens, descend(depth, *column)?),
        Some((Token::Eof, column)) => Err(ParseError::UnexpectedEndOfInput { column: *column }),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { expected: "expression".to_string(),
                                                                 found:    tok.to_string(),
                                                                 column:   *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}

/// Parses the inside of a parenthesized expression, after its `(`.
///
/// Grouping only affects precedence; no node is created for it. It still
/// counts as a level of depth, since every group costs a level of recursion.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let inner = parse_expression(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        Some((_, column)) => Err(ParseError::ExpectedClosingParen { column: *column }),
        None => Err(ParseError::ExpectedClosingParen { column: 0 }),
    }
}
