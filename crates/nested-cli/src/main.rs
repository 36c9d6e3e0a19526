//! `nested` CLI: check, reformat and size JSON documents with nested-container.
//!
//! ## Usage
//!
//! ```sh
//! # Reformat (stdin → stdout): whitespace dropped, keys sorted
//! echo '{"b": 1, "a": [1.50, true]}' | nested format
//!
//! # Reformat from file to file with a specific generator
//! nested format -i data.json -o data.min.json --strategy grammar
//!
//! # Fail instead of printing `null` when the input is malformed
//! nested format --strict -i data.json
//!
//! # Report the first syntax error with its line and column
//! nested check -i data.json
//!
//! # Compare the size estimate with the generated length
//! nested estimate -i data.json
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see why a lenient parse
//! produced `null`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nested_container::{GenerationStrategy, ParseLimits, ParsePolicy, Serializer, Value};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "nested",
    version,
    about = "Check, reformat and size JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and write it back in canonical form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Generator used to write the output
        #[arg(long, value_enum, default_value_t = Strategy::Stream)]
        strategy: Strategy,
        #[command(flatten)]
        parse: ParseArgs,
    },
    /// Parse a document strictly and report the first error
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Maximum nesting depth of objects and arrays
        #[arg(long, default_value_t = ParseLimits::default().max_depth)]
        max_depth: usize,
    },
    /// Show the size estimate next to the length of the generated text
    Estimate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        parse: ParseArgs,
    },
}

#[derive(clap::Args)]
struct ParseArgs {
    /// Fail on malformed input instead of treating it as null
    #[arg(long)]
    strict: bool,
    /// Maximum nesting depth of objects and arrays
    #[arg(long, default_value_t = ParseLimits::default().max_depth)]
    max_depth: usize,
    /// Maximum input size in bytes
    #[arg(long)]
    max_bytes: Option<usize>,
}

impl ParseArgs {
    fn serializer(&self) -> Serializer {
        let policy = if self.strict {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        };
        Serializer::new()
            .with_policy(policy)
            .with_limits(ParseLimits::new(self.max_depth, self.max_bytes))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Rule table over a preallocated buffer
    Grammar,
    /// Visitor over a preallocated buffer
    Hybrid,
    /// Visitor over a growable buffer
    Stream,
}

impl From<Strategy> for GenerationStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Grammar => GenerationStrategy::Grammar,
            Strategy::Hybrid => GenerationStrategy::VisitorHybrid,
            Strategy::Stream => GenerationStrategy::VisitorStream,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            input,
            output,
            strategy,
            parse,
        } => {
            let text = read_input(input.as_deref())?;
            let serializer = parse.serializer().with_strategy(strategy.into());
            let value = serializer
                .deserialize(&text)
                .context("Failed to parse input")?;
            let mut formatted = serializer
                .serialize(&value)
                .context("Failed to generate output")?;
            formatted.push('\n');
            write_output(output.as_deref(), &formatted)?;
        }
        Commands::Check { input, max_depth } => {
            let text = read_input(input.as_deref())?;
            let serializer = Serializer::new()
                .with_policy(ParsePolicy::Strict)
                .with_limits(ParseLimits::new(max_depth, None));
            match serializer.deserialize(&text) {
                Ok(value) => println!("ok: {} document", root_label(&value)),
                Err(err) => {
                    tracing::debug!(input = ?input, "check failed");
                    eprintln!("{err}");
                    process::exit(1);
                }
            }
        }
        Commands::Estimate { input, parse } => {
            let text = read_input(input.as_deref())?;
            let value = parse
                .serializer()
                .deserialize(&text)
                .context("Failed to parse input")?;
            let estimate = nested_container::estimate_size(&value);
            let actual = nested_container::serialize(&value).len();
            println!("Estimate:   {} bytes", estimate);
            println!("Generated:  {} bytes", actual);
            println!("Slack:      {} bytes", estimate.saturating_sub(actual));
        }
    }

    Ok(())
}

fn root_label(value: &Value) -> &'static str {
    if value.is_map() {
        "object"
    } else {
        "array"
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
