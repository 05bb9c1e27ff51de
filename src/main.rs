use std::{fs, path::{Path, PathBuf}, process::ExitCode};

use clap::Parser;
use log::{info, LevelFilter};

use maths_parser::{evaluate_with, Error, Options, PowerBinding, UnaryMinus, DEFAULT_MAX_DEPTH};

const DEMO_EXPRESSION: &str = "(5-3)^-(2+2)";

/// Evaluates arithmetic expressions made of numbers, `+ - * / ^` and parentheses.
///
/// Each result is printed on its own line. Expressions that fail are reported on
/// stderr and make the exit status non-zero. Put `--` before an expression that
/// starts with `-`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads one expression per non-blank line from this file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// What a leading `-` negates: `expression` or `operand`.
    #[arg(long, default_value_t = UnaryMinus::Expression)]
    unary_minus: UnaryMinus,

    /// Where `^` binds: `tight` (above `*` and `/`) or `factor` (with them).
    #[arg(long, default_value_t = PowerBinding::Tight)]
    power: PowerBinding,

    /// Deepest allowed nesting of parentheses and unary minus.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enables debug logging. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    /// Expressions to evaluate. Defaults to a demonstration expression.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<bool, Error> {
    let options = Options::builder()
        .unary_minus(args.unary_minus)
        .power_binding(args.power)
        .max_depth(args.max_depth)
        .build()?;

    let mut expressions = match &args.file {
        Some(path) => read_expressions(path)?,
        None => Vec::new(),
    };
    expressions.extend(args.expressions);

    if expressions.is_empty() {
        info!("no expression given, evaluating {DEMO_EXPRESSION}");
        expressions.push(DEMO_EXPRESSION.to_owned());
    }

    let mut all_ok = true;
    for expression in &expressions {
        match evaluate_with(expression, options) {
            Ok(value) => println!("{value}"),
            Err(err) => {
                all_ok = false;
                eprintln!("ERROR: {expression}: {err}");
            }
        }
    }

    Ok(all_ok)
}

fn read_expressions(path: &Path) -> Result<Vec<String>, Error> {
    let contents = fs::read_to_string(path)?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
