use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cvt::prelude::*;
use tabwriter::TabWriter;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Debug, Parser)]
#[command(name = "cvt", version, about = "Convert JSON values between dynamic types")]
struct Cli {
    /// TOML file with timestamp settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Offset for timestamps without one, e.g. +08:00 (overrides the config file)
    #[arg(long, global = true)]
    offset: Option<String>,

    /// Log conversion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a JSON value to a target type.
    Convert {
        /// bool, int, int8 ... uint64, float32, float64, string, time, slice, string_map, int_map
        target: Target,
        /// JSON text, or @path to read it from a file
        #[arg(allow_negative_numbers = true)]
        input: String,
    },
    /// Try every target and print a table of the results.
    Inspect {
        /// JSON text, or @path to read it from a file
        #[arg(allow_negative_numbers = true)]
        input: String,
    },
    /// Print the keys of a mapping or the field names of a record.
    Keys {
        /// JSON text, or @path to read it from a file
        #[arg(allow_negative_numbers = true)]
        input: String,
    },
    /// Print one field of a mapping.
    Field {
        /// JSON text, or @path to read it from a file
        #[arg(allow_negative_numbers = true)]
        input: String,
        key: String,
    },
    /// Print one field of every row in a list or mapping.
    Column {
        /// JSON text, or @path to read it from a file
        #[arg(allow_negative_numbers = true)]
        input: String,
        key: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::ConfigFile::default(),
    };
    let opts = config::time_options(&file, cli.offset.as_deref())?;

    match cli.cmd {
        Command::Convert { target, input } => {
            let val = read_input(&input)?;
            let out = target.apply_with_options(&val, &opts);
            println!("{}", exit_on_failure(out.and_then(|v| render(&v))));
        }
        Command::Inspect { input } => {
            let val = read_input(&input)?;
            let mut tw = TabWriter::new(io::stdout());
            writeln!(tw, "target\tresult")?;
            for target in Target::ALL {
                let cell = match target.apply_with_options(&val, &opts).and_then(|v| render(&v)) {
                    Ok(text) => text,
                    Err(err) => format!("error({})", err.code().as_str()),
                };
                writeln!(tw, "{target}\t{cell}")?;
            }
            tw.flush()?;
        }
        Command::Keys { input } => {
            let val = read_input(&input)?;
            for key in exit_on_failure(keys(&val)) {
                println!("{}", exit_on_failure(render(&key)));
            }
        }
        Command::Field { input, key } => {
            let val = read_input(&input)?;
            let found = exit_on_failure(field(&val, &Value::Str(key)));
            println!("{}", exit_on_failure(render(found)));
        }
        Command::Column { input, key } => {
            let val = read_input(&input)?;
            for cell in exit_on_failure(columns(&val, &Value::Str(key))) {
                println!("{}", exit_on_failure(render(cell)));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(arg: &str) -> anyhow::Result<Value> {
    let text = match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
        None => arg.to_string(),
    };
    let val = json::from_json_str(&text).context("input is not valid JSON")?;
    tracing::debug!(kind = ?val.kind(), "parsed input");
    Ok(val)
}

/// Text output for one converted value.
///
/// Strings print raw, collections print as canonical JSON.
fn render(val: &Value) -> Result<String, ConvertError> {
    match val {
        Value::Str(s) => Ok(s.clone()),
        Value::Time(t) => Ok(t.to_rfc3339()),
        Value::Seq(_) | Value::Map(_) | Value::Struct(_) => json::to_canonical_json_string(val),
        other => to_string(other),
    }
}

// Conversion failures share one exit code, distinct from unreadable input.
fn exit_on_failure<T>(res: Result<T, ConvertError>) -> T {
    match res {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    }
}
