use clap::Parser;
use collect::output::render;
use collect::{CliError, OutputFormat, Query, collect_args};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Collect values from a JSON document with dotted path expressions.
///
/// Paths are concatenated in order: `collect store ..price` is the same as
/// `collect store..price`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path expressions, e.g. `store.book.isbn` or `..price`
    paths: Vec<String>,

    /// JSON file to query (reads stdin when omitted or `-`)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output format for the matches
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Array)]
    format: OutputFormat,

    /// Print only the number of matches
    #[arg(short, long, default_value_t = false)]
    count: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn read_data(path: Option<&PathBuf>) -> Result<Value, CliError> {
    let source = match path {
        Some(path) if path.as_os_str() != "-" => {
            log::debug!("Loading data from {}", path.display());
            fs::read_to_string(path)?
        }
        _ => {
            log::debug!("Loading data from stdin");
            io::read_to_string(io::stdin())?
        }
    };
    Ok(serde_json::from_str(&source)?)
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!("Running query '{}'", Query::parse_all(&args.paths));

    let mut call: Vec<Value> = args.paths.iter().cloned().map(Value::String).collect();
    call.push(read_data(args.data.as_ref())?);
    let matches = collect_args(&call)?;

    if args.count {
        println!("{}", matches.len());
    } else {
        println!("{}", render(&matches, args.format)?);
    }
    Ok(())
}
