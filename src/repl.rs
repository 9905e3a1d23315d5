use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::{Error, Session, Value, parse, tokenize};

/// The framed title printed when the interactive loop starts.
pub const BANNER: &str = "########################\n##   SEALS LANGUAGE   ##\n########################";

/// The prompt shown before each line is read.
pub const PROMPT: &str = "> ";

/// How a line read by the loop is to be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `exit`, in any case and with any surrounding whitespace.
    Exit,
    /// Nothing but whitespace. Skipped without evaluating.
    Blank,
    /// Source to evaluate, without its line terminator.
    Source(&'a str),
}

/// Classifies one input line.
///
/// ## Example
/// ```
/// use seals::repl::{Line, classify};
///
/// assert_eq!(classify("  EXIT \n"), Line::Exit);
/// assert_eq!(classify(" \t"), Line::Blank);
/// assert_eq!(classify("1 + 1\r\n"), Line::Source("1 + 1"));
/// ```
#[must_use]
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Line::Blank
    } else if trimmed.eq_ignore_ascii_case("exit") {
        Line::Exit
    } else {
        Line::Source(line.trim_end_matches(['\n', '\r']))
    }
}

/// Settings for [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Colour errors with ANSI escapes.
    pub color:  bool,
    /// Write [`PROMPT`] before reading each line.
    pub prompt: bool,
    /// Dump tokens and the parsed tree of each line to stderr.
    pub debug:  bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { color:  true,
               prompt: true,
               debug:  false, }
    }
}

/// Writes [`BANNER`] followed by a short usage line.
pub fn write_banner<W: Write>(output: &mut W, color: bool) -> io::Result<()> {
    if color {
        writeln!(output, "{}", BANNER.magenta())?;
    } else {
        writeln!(output, "{BANNER}")?;
    }
    writeln!(output, "Expressions with math, logic and text functions. Type 'exit' to quit.")
}

/// Runs the read-evaluate-print loop until `exit` or end of input.
///
/// Every line is evaluated in `session`, so assignments carry over to later
/// lines. Text from `print` is written first, then values other than
/// `Absent` on their own line. Errors are written as `Error: <message>` and
/// the loop continues with the next line. Bytes that are not UTF-8 are
/// replaced with U+FFFD, which only affects the line they occur on.
///
/// # Errors
/// Only I/O errors from `input` or `output` end the loop early.
///
/// # Example
/// ```
/// use seals::{
///     Session,
///     repl::{Options, run},
/// };
///
/// let input = "let x = 4\nx * x\nprint(x)\nnope\nexit\n1 + 1\n";
/// let mut output = Vec::new();
/// let options = Options { color:  false,
///                         prompt: false,
///                         debug:  false, };
///
/// run(input.as_bytes(), &mut output, &mut Session::new(), options).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "4\n16\n4 \nError: Undefined variable 'nope'.\n");
/// ```
pub fn run<R, W>(mut input: R,
                 output: &mut W,
                 session: &mut Session,
                 options: Options)
                 -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut bytes = Vec::new();
    loop {
        if options.prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&bytes);

        let source = match classify(&line) {
            Line::Exit => return Ok(()),
            Line::Blank => continue,
            Line::Source(source) => source,
        };

        let result = eval_source(source, session, options.debug);
        write_printed(output, session)?;
        match result {
            Ok(value) => write_value(output, &value)?,
            Err(e) => write_error(output, &e, options.color)?,
        }
    }
}

/// Evaluates one line, tracing each stage to stderr when `debug` is set.
///
/// # Errors
/// Returns the first stage error.
pub fn eval_source(source: &str, session: &mut Session, debug: bool) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    if debug {
        eprintln!("Tokens: {tokens:#?}");
    }

    let tree = parse(&tokens)?;
    if debug {
        eprintln!("Parsed: {tree:#?}");
        eprintln!("Grouped: {tree}");
    }

    Ok(session.eval(&tree)?)
}

/// Writes out and clears whatever `print` left in `session`.
pub fn write_printed<W: Write>(output: &mut W, session: &mut Session) -> io::Result<()> {
    output.write_all(session.take_output().as_bytes())
}

/// Writes a value on its own line; `Absent` writes nothing.
pub fn write_value<W: Write>(output: &mut W, value: &Value) -> io::Result<()> {
    if value.is_absent() {
        return Ok(());
    }
    writeln!(output, "{value}")
}

/// Writes an error as `Error: <message>`, in red when `color` is set.
pub fn write_error<W: Write>(output: &mut W, error: &Error, color: bool) -> io::Result<()> {
    let message = format!("Error: {error}");
    if color {
        writeln!(output, "{}", message.red())
    } else {
        writeln!(output, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Options {
        Options { color:  false,
                  prompt: false,
                  debug:  false, }
    }

    fn transcript(input: &str, options: Options) -> String {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output, &mut Session::new(), options).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(transcript("\n   \n2\n", plain()), "2\n");
    }

    #[test]
    fn absent_results_print_nothing() {
        assert_eq!(transcript("if(false, 1)\n", plain()), "");
    }

    #[test]
    fn prompt_is_written_before_every_read() {
        let options = Options { prompt: true,
                                ..plain() };

        assert_eq!(transcript("1\n", options), "> 1\n> ");
    }

    #[test]
    fn printed_text_comes_before_the_result() {
        let input = "print('a', 1 + 1)\nconcat(print('b'), 'c')\nprint('d') + nope\n";

        assert_eq!(transcript(input, plain()),
                   "a 2 \nb \nc\nd \nError: Undefined variable 'nope'.\n");
    }

    #[test]
    fn invalid_utf8_fails_only_its_own_line() {
        let input: &[u8] = b"let x = 2\n\xff\xfe\nx + 1\n";
        let mut output = Vec::new();
        run(input, &mut output, &mut Session::new(), plain()).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(),
                   "Error: Error at column 1: Unrecognized character '\u{fffd}'.\n3\n");
    }

    #[test]
    fn exit_is_case_insensitive() {
        assert_eq!(transcript(" Exit \n1\n", plain()), "");
    }

    #[test]
    fn last_line_without_newline_is_evaluated() {
        assert_eq!(transcript("'a' + 'b'", plain()), "ab\n");
    }

    #[test]
    fn plain_banner_has_no_escapes() {
        let mut output = Vec::new();
        write_banner(&mut output, false).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with(BANNER));
        assert!(!text.contains('\u{1b}'));
    }
}
