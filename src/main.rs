use log::{debug, info, log_enabled, trace, Level, LevelFilter};
use shunt::{token, tokenizer, Error};
use std::io::{self, Read};
use std::{fs, path::PathBuf, process};
use structopt::StructOpt;

const DEMO_EXPRESSIONS: [&str; 3] = ["3+5", "7-3+4", "3*(3+11-4)/2"];

#[derive(StructOpt)]
#[structopt(about = "infix arithmetic calculator")]
struct Options {
    /// Log more; repeat for more detail
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Evaluate every non-blank line of the given files, or of stdin
    Run {
        #[structopt(parse(from_os_str))]
        filenames: Vec<PathBuf>,
    },
    /// Evaluate a single expression
    Eval {
        expression: String,
        /// Print the postfix form before the result
        #[structopt(long)]
        postfix: bool,
    },
    /// Evaluate a few sample expressions
    Demo,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn calculate(expression: &str) -> Result<f64, Error> {
    if log_enabled!(Level::Trace) {
        trace!("tokens: {}", token::render(&tokenizer::tokenize(expression)));
        if let Ok(postfix) = shunt::parse(expression) {
            trace!("postfix: {}", token::render(&postfix));
        }
    }
    let result = shunt::calculate(expression);
    if let Ok(value) = &result {
        debug!("{:?} = {}", expression, value);
    }
    result
}

// Returns false if any line failed to evaluate.
fn run_lines(contents: &str) -> bool {
    let mut ok = true;
    for line in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match calculate(line) {
            Ok(result) => println!("{} = {}", line, result),
            Err(error) => {
                eprintln!("{}: error: {}", line, error);
                ok = false;
            }
        }
    }
    ok
}

fn run(filenames: Vec<PathBuf>) -> bool {
    if filenames.is_empty() {
        let mut contents = String::new();
        return match io::stdin().read_to_string(&mut contents) {
            Ok(_) => run_lines(&contents),
            Err(error) => {
                eprintln!("unable to read stdin: {}", error);
                false
            }
        };
    }

    let mut ok = true;
    for filename in filenames {
        info!("running {}", filename.display());
        match fs::read_to_string(&filename) {
            Ok(contents) => ok &= run_lines(&contents),
            Err(error) => {
                eprintln!("unable to read {}: {}", filename.display(), error);
                ok = false;
            }
        }
    }
    ok
}

fn eval(expression: &str, show_postfix: bool) -> bool {
    if show_postfix {
        if let Ok(postfix) = shunt::parse(expression) {
            println!("{}", token::render(&postfix));
        }
    }
    match calculate(expression) {
        Ok(result) => {
            println!("{}", result);
            true
        }
        Err(error) => {
            eprintln!("error: {}", error);
            false
        }
    }
}

fn demo() -> bool {
    let mut ok = true;
    for expression in DEMO_EXPRESSIONS {
        match calculate(expression) {
            Ok(result) => println!("Input: {:?}\nOutput: {}\n", expression, result),
            Err(error) => {
                eprintln!("Error: {}", error);
                ok = false;
            }
        }
    }
    ok
}

fn main() {
    let options = Options::from_args();
    init_logging(options.verbose);

    let ok = match options.command {
        Command::Run { filenames } => run(filenames),
        Command::Eval {
            expression,
            postfix,
        } => eval(&expression, postfix),
        Command::Demo => demo(),
    };

    if !ok {
        process::exit(1);
    }
}
