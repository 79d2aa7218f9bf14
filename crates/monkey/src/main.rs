use std::env;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use monkey_common::{MonkeyConfig, OutputFormat};

mod commands;
mod error;
mod logging;

use error::Result;

/// Monkey language lexer.
///
/// Tokenizes Monkey source files and prints the resulting token stream.
#[derive(Parser)]
#[command(
    name = "monkey",
    version,
    about,
    long_about = "Monkey language lexer.\n\nTurns Monkey source into a stream of tokens.\n\nExamples:\n  monkey tokens hello.mk           Print tokens, one per line\n  monkey tokens hello.mk --json    Print tokens as JSON\n  monkey check hello.mk            Report unrecognized characters\n  monkey repl                      Tokenize lines interactively"
)]
struct Cli {
    /// Path to a Monkey.toml (default: search upward from the current directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every identifier classification to stderr, on top of any MONKEY_LOG/RUST_LOG filter.
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Tokens {
        /// Input source file
        input: PathBuf,

        /// Emit tokens as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report every illegal character in a source file
    Check {
        /// Input source file
        input: PathBuf,
    },

    /// Tokenize lines read interactively
    Repl {
        /// Override the configured prompt
        #[arg(long)]
        prompt: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.trace);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(source = ?config.source, "loaded configuration");

    match cli.command {
        Command::Tokens { input, json } => {
            let format = if json {
                OutputFormat::Json
            } else {
                config.output.format
            };
            commands::tokens::run(&input, format, cli.trace)
        }
        Command::Check { input } => commands::check::run(&input, cli.trace),
        Command::Repl { prompt } => {
            let prompt = prompt.unwrap_or(config.repl.prompt);
            commands::repl::run(&prompt, config.output.format, cli.trace)
        }
    }
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<MonkeyConfig> {
    let config = match explicit {
        Some(path) => MonkeyConfig::load(path)?,
        None => MonkeyConfig::discover(&env::current_dir()?)?,
    };
    Ok(config)
}
