use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use seals::{
    Session,
    repl::{self, Options},
};

/// seals is an interactive evaluator for a small expression language with
/// math, logic and text functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single line, prints its value and exits.
    #[arg(short, long, conflicts_with = "file")]
    eval: Option<String>,

    /// Runs every line of a script file in one session, printing each value.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Disables coloured output.
    #[arg(long)]
    no_color: bool,

    /// Dumps the tokens and the parsed tree of every line to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut session = Session::new();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let color = !args.no_color;

    if let Some(source) = args.eval {
        let result = repl::eval_source(&source, &mut session, args.debug);
        if let Err(e) = repl::write_printed(&mut output, &mut session) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        return match result {
            Ok(value) => {
                if let Err(e) = repl::write_value(&mut output, &value) {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
                ExitCode::SUCCESS
            },
            Err(e) => {
                let _ = repl::write_error(&mut io::stderr(), &e, color);
                ExitCode::FAILURE
            },
        };
    }

    let result = if let Some(path) = args.file {
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        };
        let options = Options { color,
                                prompt: false,
                                debug: args.debug };
        repl::run(BufReader::new(file), &mut output, &mut session, options)
    } else {
        let options = Options { color,
                                prompt: true,
                                debug: args.debug };
        repl::write_banner(&mut output, color).and_then(|()| {
                                                   repl::run(io::stdin().lock(),
                                                             &mut output,
                                                             &mut session,
                                                             options)
                                               })
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
