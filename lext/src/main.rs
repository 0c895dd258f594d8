//! lext - command-line front end for the lexis tokeniser.
//!
//! Reads source files, runs them through one of the built-in grammars and
//! prints the token stream or any lexical errors.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{CheckArgs, CheckCommand},
    config::{ConfigArgs, ConfigCommand},
    keywords::{KeywordsArgs, KeywordsCommand},
    tokens::{TokensArgs, TokensCommand},
    traits::Command,
};
use config::Config;
use error::{LextError, Result};

/// lext - inspect how source files tokenise
#[derive(Parser, Debug)]
#[command(name = "lext")]
#[command(author = "Lexis Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenise source files and report lexical errors", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of each file
    Tokens(TokensCommandArgs),

    /// Report the first lexical error in each file
    ///
    /// Exits with a non-zero status if any file fails to tokenise.
    Check(CheckCommandArgs),

    /// List the reserved words of a grammar
    Keywords(KeywordsCommandArgs),

    /// Show the effective configuration, or write it to a file
    Config(ConfigCommandArgs),
}

#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Files to tokenise
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Grammar to use (source, ir)
    #[arg(short, long)]
    grammar: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Include line and column of each token
    #[arg(short, long)]
    spans: bool,

    /// Number of worker threads
    #[arg(short, long)]
    jobs: Option<usize>,
}

#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Files to check
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Grammar to use (source, ir)
    #[arg(short, long)]
    grammar: Option<String>,

    /// Number of worker threads
    #[arg(short, long)]
    jobs: Option<usize>,
}

#[derive(Parser, Debug)]
struct KeywordsCommandArgs {
    /// Grammar to use (source, ir)
    #[arg(short, long)]
    grammar: Option<String>,

    /// List operators instead of keywords
    #[arg(long)]
    operators: bool,
}

#[derive(Parser, Debug)]
struct ConfigCommandArgs {
    /// Write the configuration to this path instead of printing it
    #[arg(short, long)]
    write: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;
    execute_command(cli.command, &config)
}

/// Logs go to stderr so token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LextError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute::<TokensCommand>(
            TokensArgs {
                input: args.input,
                grammar: args.grammar,
                format: args.format,
                spans: args.spans,
                jobs: args.jobs,
            },
            config,
        ),
        Commands::Check(args) => execute::<CheckCommand>(
            CheckArgs {
                input: args.input,
                grammar: args.grammar,
                jobs: args.jobs,
            },
            config,
        ),
        Commands::Keywords(args) => execute::<KeywordsCommand>(
            KeywordsArgs {
                grammar: args.grammar,
                operators: args.operators,
            },
            config,
        ),
        Commands::Config(args) => execute::<ConfigCommand>(
            ConfigArgs {
                write: args.write,
                force: args.force,
            },
            config,
        ),
    }
}

fn execute<C: Command>(args: C::Args, config: &Config) -> Result<()> {
    let command = C::new(args, config)?;
    debug!("Running {}", command.name());
    command.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["lext", "tokens", "a.src", "b.src"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("a.src"), PathBuf::from("b.src")]);
            assert!(!args.spans);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_options() {
        let cli = Cli::parse_from([
            "lext", "tokens", "a.src", "--grammar", "ir", "-F", "json", "--spans", "-j", "2",
        ]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.grammar, Some("ir".to_string()));
            assert_eq!(args.format, Some("json".to_string()));
            assert!(args.spans);
            assert_eq!(args.jobs, Some(2));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_tokens_requires_input() {
        assert!(Cli::try_parse_from(["lext", "tokens"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["lext", "check", "a.src"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_cli_parse_keywords() {
        let cli = Cli::parse_from(["lext", "keywords", "--operators"]);
        if let Commands::Keywords(args) = cli.command {
            assert!(args.operators);
            assert_eq!(args.grammar, None);
        } else {
            panic!("Expected Keywords command");
        }
    }

    #[test]
    fn test_cli_parse_config_write() {
        let cli = Cli::parse_from(["lext", "config", "--write", "lext.toml", "--force"]);
        if let Commands::Config(args) = cli.command {
            assert_eq!(args.write, Some(PathBuf::from("lext.toml")));
            assert!(args.force);
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "lext", "--verbose", "--no-color", "--config", "/tmp/lext.toml", "keywords",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/lext.toml")));
    }
}
