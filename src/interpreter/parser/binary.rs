use std::iter::Peekable;

use crate::{
    ast::{ArithmeticOperator, BinaryOperator, ComparisonOperator, Expr, LogicalOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_DEPTH, ParseResult, descend},
            unary::parse_unary,
        },
    },
};

/// Parses logical OR expressions.
///
/// Lowest precedence level of the expression grammar.
///
/// Grammar: `or := and ("or" and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Number of nodes above the expression.
///
/// # Returns
/// A binary expression tree using `LogicalOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, parse_logical_and, |op| {
        matches!(op, BinaryOperator::Logical(LogicalOperator::Or))
    })
}

/// Parses logical AND expressions.
///
/// Grammar: `and := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, parse_equality, |op| {
        matches!(op, BinaryOperator::Logical(LogicalOperator::And))
    })
}

/// Parses equality operators `==` and `!=`.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, parse_comparison, |op| {
        matches!(op,
                 BinaryOperator::Comparison(ComparisonOperator::Equal
                                            | ComparisonOperator::NotEqual))
    })
}

/// Parses relational operators.
///
/// Handles `<`, `<=`, `>` and `>=`. Chains such as `a < b < c` are legal and
/// fold to the left; the inner comparison yields a boolean which the outer
/// one then coerces.
///
/// Grammar: `comparison := term (("<" | "<=" | ">" | ">=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, parse_term, is_relational_op)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, parse_factor, |op| {
        matches!(op,
                 BinaryOperator::Arithmetic(ArithmeticOperator::Add | ArithmeticOperator::Sub))
    })
}

/// Parses multiplication-level expressions.
///
/// The rule is: `factor := power (("*" | "/") power)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, parse_power, |op| {
        matches!(op,
                 BinaryOperator::Arithmetic(ArithmeticOperator::Mul | ArithmeticOperator::Div))
    })
}

/// Parses exponentiation expressions.
///
/// Exponentiation binds tighter than multiplication but is
/// left-associative like every other binary level: `2 ^ 3 ^ 2` parses as
/// `(2 ^ 3) ^ 2` and evaluates to 64.
///
/// The rule is: `power := unary ("^" unary)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, parse_unary, |op| {
        matches!(op, BinaryOperator::Arithmetic(ArithmeticOperator::Pow))
    })
}

/// Folds one precedence level into a left-leaning tree.
///
/// Parses an operand with `operand`, then repeatedly consumes any operator
/// accepted by `accepts` followed by another operand. Every fold pushes the
/// existing tree one level down, so a chain stops with `TooDeep` once it
/// would grow taller than [`MAX_DEPTH`] allows.
fn parse_left_assoc<'a, I, F, P>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 operand: F,
                                 accepts: P)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone,
          F: Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
          P: Fn(BinaryOperator) -> bool
{
    let mut left = operand(tokens, depth)?;
    let mut height = left.height();
    loop {
        if let Some((token, column)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            let column = *column;
            if depth + height + 1 > MAX_DEPTH {
                return Err(ParseError::TooDeep { column });
            }
            tokens.next();
            let right = operand(tokens, descend(depth, column)?)?;
            height = height.max(right.height()) + 1;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Determines whether a binary operator is one of the ordering relations.
///
/// # Example
/// ```
/// use seals::{
///     ast::{ArithmeticOperator, ComparisonOperator},
///     interpreter::parser::binary::is_relational_op,
/// };
///
/// assert!(is_relational_op(ComparisonOperator::Less.into()));
/// assert!(!is_relational_op(ComparisonOperator::Equal.into()));
/// assert!(!is_relational_op(ArithmeticOperator::Add.into()));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Comparison(ComparisonOperator::Less
                                        | ComparisonOperator::Greater
                                        | ComparisonOperator::LessEqual
                                        | ComparisonOperator::GreaterEqual))
}

/// Maps a token to the binary operator it denotes, if any.
///
/// `-` always maps to subtraction here; its prefix use is handled by the
/// unary parser before this function is consulted.
///
/// # Example
/// ```
/// use seals::{
///     ast::{ArithmeticOperator, BinaryOperator},
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Arithmetic(ArithmeticOperator::Pow)));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    use BinaryOperator::{Arithmetic, Comparison, Logical};

    let op = match token {
        Token::Plus => Arithmetic(ArithmeticOperator::Add),
        Token::Minus => Arithmetic(ArithmeticOperator::Sub),
        Token::Star => Arithmetic(ArithmeticOperator::Mul),
        Token::Slash => Arithmetic(ArithmeticOperator::Div),
        Token::Caret => Arithmetic(ArithmeticOperator::Pow),
        Token::EqualEqual => Comparison(ComparisonOperator::Equal),
        Token::BangEqual => Comparison(ComparisonOperator::NotEqual),
        Token::Less => Comparison(ComparisonOperator::Less),
        Token::LessEqual => Comparison(ComparisonOperator::LessEqual),
        Token::Greater => Comparison(ComparisonOperator::Greater),
        Token::GreaterEqual => Comparison(ComparisonOperator::GreaterEqual),
        Token::And => Logical(LogicalOperator::And),
        Token::Or => Logical(LogicalOperator::Or),
        _ => return None,
    };
    Some(op)
}
