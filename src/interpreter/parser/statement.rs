use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, descend, parse_expression},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement is either a variable binding introduced by `let` or a bare
/// expression. Bindings become [`Expr::Assign`] nodes, so both forms produce
/// an expression tree.
///
/// Grammar: `statement := "let" IDENTIFIER "=" expression | expression`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, column)` pairs.
///
/// # Returns
/// The parsed statement as an [`Expr`].
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(binding) = parse_variable_binding(tokens)? {
        return Ok(binding);
    }

    parse_expression(tokens, 0)
}

/// Parses a variable binding of the form `let <identifier> = <expression>`.
///
/// If the next token is not `let`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a possible `let`.
///
/// # Returns
/// - `Ok(Some(Expr::Assign))` if a binding is parsed,
/// - `Ok(None)` if no binding is present.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is missing,
/// - `=` is missing,
/// - the expression is malformed.
fn parse_variable_binding<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Let, column)) = tokens.peek() else {
        return Ok(None);
    };
    let depth = descend(0, *column)?;
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::Equals, "'='")?;
    let value = parse_expression(tokens, depth)?;

    Ok(Some(Expr::Assign { name,
                           value: Box::new(value) }))
}
