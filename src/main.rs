use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Parser};
use clex::{error::Error, interpreter::evaluator::core::Interpreter, parse_source, run};
use log::{LevelFilter, Log, Metadata, Record, debug};

/// Exit status for invalid command-line arguments.
const EXIT_USAGE: i32 = 64;
/// Exit status for a script file that cannot be read.
const EXIT_NO_INPUT: i32 = 66;
/// Exit status for a failure reading the interactive prompt.
const EXIT_IO_ERROR: i32 = 74;

/// clex runs scripts written in a small dynamically typed language, or
/// evaluates it line by line at an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run. Without one, clex starts an interactive prompt.
    script: Option<PathBuf>,

    /// Print the syntax tree of each statement instead of running it.
    #[arg(long)]
    ast: bool,

    /// Log pipeline stages to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// What to do with each parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Run,
    PrintAst,
}

struct Config {
    script:    Option<PathBuf>,
    mode:      Mode,
    log_level: LevelFilter,
}

impl Config {
    fn from_args(args: Args) -> Self {
        let mode = if args.ast { Mode::PrintAst } else { Mode::Run };

        let log_level = match args.verbose {
            0 => LevelFilter::Off,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        Self { script: args.script,
               mode,
               log_level }
    }
}

/// Writes log records to stderr as `[clex:level] message`.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[clex:{}] {}",
                      record.level().as_str().to_lowercase(),
                      record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let code = if error.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = error.print();
            process::exit(code);
        },
    };

    let config = Config::from_args(args);
    init_logging(config.log_level);

    let code = match &config.script {
        Some(path) => run_file(path, config.mode),
        None => run_prompt(config.mode),
    };

    let _ = io::stdout().flush();
    process::exit(code);
}

/// Runs or prints a whole script and returns the process exit status.
fn run_file(path: &Path, mode: Mode) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read the script '{}': {error}", path.display());
            return EXIT_NO_INPUT;
        },
    };
    debug!("read {} bytes from {}", source.len(), path.display());

    let mut interpreter = Interpreter::stdout();

    match process_source(&source, mode, &mut interpreter) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{error}");
            error.exit_code()
        },
    }
}

/// Reads and processes one line at a time until end of input.
///
/// Errors are reported and the prompt carries on; variables defined by
/// earlier lines stay visible.
fn run_prompt(mode: Mode) -> i32 {
    let mut interpreter = Interpreter::stdout();
    let mut stdin = io::stdin().lock();
    let mut line = String::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => return 0,
            Ok(_) => {},
            Err(error) => {
                eprintln!("Failed to read input: {error}");
                return EXIT_IO_ERROR;
            },
        }

        if let Err(error) = process_source(&line, mode, &mut interpreter) {
            eprintln!("{error}");
        }
    }
}

fn process_source<W: Write>(source: &str,
                            mode: Mode,
                            interpreter: &mut Interpreter<W>)
                            -> Result<(), Error> {
    match mode {
        Mode::Run => run(source, interpreter),
        Mode::PrintAst => {
            for statement in parse_source(source)? {
                println!("{statement}");
            }
            Ok(())
        },
    }
}
