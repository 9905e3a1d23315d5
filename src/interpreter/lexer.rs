use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// `true` and `false` are not keywords: they lex as identifiers and are
/// turned into boolean literals by the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// The raw text is kept; malformed literals such as `1.2.3` are rejected
    /// by the parser when it converts the text.
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9][0-9.]*", |lex| lex.slice().to_string())]
    Number(String),
    /// String literal tokens delimited by `"` or `'`, with escapes resolved.
    #[token("\"", |lex| lex_string(lex, '"'))]
    #[token("'", |lex| lex_string(lex, '\''))]
    StringLiteral(String),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `let`
    #[token("let")]
    Let,
    /// `and`, `&&` or `&`
    #[token("and")]
    #[token("&&")]
    #[token("&")]
    And,
    /// `or`, `||` or `|`
    #[token("or")]
    #[token("||")]
    #[token("|")]
    Or,
    /// `not` or `!`
    #[token("not")]
    #[token("!")]
    Not,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// End of input. Never produced by the logos automaton; [`tokenize`]
    /// appends it after the last real token.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Number(text) | Self::Identifier(text) => return write!(f, "{text}"),
            Self::StringLiteral(text) => return write!(f, "{text:?}"),
            Self::Let => "let",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Comment => "comment",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Eof => "end of input",
        };
        write!(f, "{symbol}")
    }
}

/// Scans the body of a string literal after its opening quote.
///
/// Consumes characters up to and including the matching `quote`. `\n` and
/// `\t` become newline and tab; any other escaped character is kept as is.
/// An unterminated literal runs to the end of the input.
///
/// # Parameters
/// - `lex`: The lexer, positioned just after the opening quote.
/// - `quote`: The quote character that closes the literal.
///
/// # Returns
/// The unescaped contents of the literal.
fn lex_string(lex: &mut logos::Lexer<Token>, quote: char) -> String {
    let mut text = String::new();
    let mut consumed = 0;
    let mut chars = lex.remainder().chars();

    while let Some(c) = chars.next() {
        consumed += c.len_utf8();
        if c == quote {
            break;
        }
        if c != '\\' {
            text.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            break;
        };
        consumed += escaped.len_utf8();
        text.push(match escaped {
                      'n' => '\n',
                      't' => '\t',
                      other => other,
                  });
    }

    lex.bump(consumed);
    text
}

/// Converts a source line into tokens paired with their 1-based column.
///
/// The returned vector always ends with [`Token::Eof`], whose column is one
/// past the last character.
///
/// # Errors
/// Returns `LexError::UnrecognizedCharacter` for the first character that
/// cannot start a token.
///
/// # Example
/// ```
/// use seals::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 'hi'").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Let, 1),
///                 (Token::Identifier("x".to_string()), 5),
///                 (Token::Equals, 7),
///                 (Token::StringLiteral("hi".to_string()), 9),
///                 (Token::Eof, 13)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = column_of(source, lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(LexError::UnrecognizedCharacter { character, column });
            },
        }
    }

    tokens.push((Token::Eof, column_of(source, source.len())));
    Ok(tokens)
}

/// Converts a byte offset into a 1-based character column.
fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}
