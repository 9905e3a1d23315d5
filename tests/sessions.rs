use std::fs;

use seals::{Session, eval_line};
use walkdir::WalkDir;

/// One input line of a transcript and what it must produce.
#[derive(Debug)]
struct Step {
    input:    String,
    expected: Expected,
    line:     usize,
}

#[derive(Debug)]
enum Expected {
    /// The rendered value; empty for `Absent`.
    Output(String),
    /// A fragment of the error message.
    Error(String),
}

/// Replays every `tests/sessions/*.session` transcript in a fresh session.
///
/// Transcript format:
/// - `# ...` is a comment,
/// - `> source` is a line fed to the evaluator,
/// - `! fragment` means that line must fail with a message containing
///   `fragment`,
/// - any other lines up to the next `>` are the expected rendering.
#[test]
fn session_transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "session"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut session = Session::new();
        for step in parse_transcript(&content) {
            count += 1;
            let result = eval_line(&step.input, &mut session);

            match (&step.expected, result) {
                (Expected::Output(expected), Ok(value)) => {
                    assert_eq!(&value.to_string(),
                               expected,
                               "{path:?}:{} `{}` rendered differently",
                               step.line,
                               step.input);
                },
                (Expected::Error(fragment), Err(e)) => {
                    assert!(e.to_string().contains(fragment.as_str()),
                            "{path:?}:{} `{}` failed with `{e}`, expected `{fragment}`",
                            step.line,
                            step.input);
                },
                (Expected::Output(expected), Err(e)) => {
                    panic!("{path:?}:{} `{}` failed with `{e}`, expected `{expected}`",
                           step.line,
                           step.input)
                },
                (Expected::Error(fragment), Ok(value)) => {
                    panic!("{path:?}:{} `{}` gave `{value}`, expected error `{fragment}`",
                           step.line,
                           step.input)
                },
            }
        }
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

fn parse_transcript(content: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut current: Option<(String, usize)> = None;
    let mut output: Vec<&str> = Vec::new();
    let mut error = None;

    let mut finish = |current: Option<(String, usize)>,
                      output: &mut Vec<&str>,
                      error: &mut Option<String>| {
        if let Some((input, line)) = current {
            while output.last().is_some_and(|l| l.is_empty()) {
                output.pop();
            }
            let expected = error.take()
                                .map_or_else(|| Expected::Output(output.join("\n")),
                                             Expected::Error);
            steps.push(Step { input,
                              expected,
                              line });
        }
        output.clear();
    };

    for (index, line) in content.lines().enumerate() {
        if line.starts_with('#') {
            continue;
        }
        if let Some(input) = line.strip_prefix("> ") {
            finish(current.take(), &mut output, &mut error);
            current = Some((input.to_string(), index + 1));
        } else if let Some(fragment) = line.strip_prefix("! ") {
            error = Some(fragment.to_string());
        } else if current.is_some() {
            output.push(line);
        }
    }
    finish(current, &mut output, &mut error);

    steps
}

#[test]
fn transcript_parser_reads_all_kinds_of_lines() {
    let steps = parse_transcript("# note\n> 1\n1\n> if(0, 1)\n> x\n! Undefined\n");

    assert_eq!(steps.len(), 3);
    assert!(matches!(&steps[0].expected, Expected::Output(o) if o == "1"));
    assert!(matches!(&steps[1].expected, Expected::Output(o) if o.is_empty()));
    assert!(matches!(&steps[2].expected, Expected::Error(e) if e == "Undefined"));
    assert_eq!(steps[2].line, 5);
}
