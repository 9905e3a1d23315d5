use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses the argument list of a call, after its opening parenthesis.
///
/// Arguments are full expressions separated by commas and terminated by
/// `)`. An immediately encountered `)` produces an empty list.
///
/// Grammar: `arguments := (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `depth`: Depth of the arguments themselves.
///
/// # Returns
/// The argument expressions in source order.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - a token other than `,` or `)` follows an argument,
/// - the line ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             depth: usize)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();

        return Ok(arguments);
    }
    loop {
        arguments.push(parse_expression(tokens, depth)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((Token::Eof, column)) => {
                return Err(ParseError::ExpectedClosingParen { column: *column });
            },
            Some((tok, column)) => {
                return Err(ParseError::UnexpectedToken { expected: "',' or ')'".to_string(),
                                                         found:    tok.to_string(),
                                                         column:   *column, });
            },
            None => return Err(ParseError::ExpectedClosingParen { column: 0 }),
        }
    }
    Ok(arguments)
}

/// Parses a plain identifier and returns its name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier as written.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((Token::Eof, column)) => Err(ParseError::UnexpectedEndOfInput { column: *column }),
        Some((tok, column)) => {
            Err(ParseError::UnexpectedToken { expected: "identifier".to_string(),
                                              found:    tok.to_string(),
                                              column:   *column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `description`: How the expected token is named in the error message.
///
/// # Errors
/// Returns `UnexpectedToken` (or `UnexpectedEndOfInput` at the end of the
/// line) if a different token is found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    description: &str)
                                                    -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((Token::Eof, column)) => Err(ParseError::UnexpectedEndOfInput { column: *column }),
        Some((tok, column)) => {
            Err(ParseError::UnexpectedToken { expected: description.to_string(),
                                              found:    tok.to_string(),
                                              column:   *column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}
