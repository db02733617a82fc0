//! dlex - command-line driver for the dragon scanner.
//!
//! Reads source files, runs them through `dragon-lex` and prints the
//! resulting tokens. Logging goes to stderr so stdout carries only tokens.

mod commands;
mod config;
mod error;
mod source;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_init, run_lex, InitArgs, LexArgs};
use config::Config;
use error::{DlexError, Result};

/// dlex - scan dragon source files into tokens
#[derive(Parser, Debug)]
#[command(name = "dlex")]
#[command(author = "Dragon Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan dragon source files into tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "DLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "DLEX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the dlex CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of one or more files
    ///
    /// Whitespace and the end-of-input marker are omitted unless
    /// requested. Use `-` to read from standard input.
    Lex(LexCommand),

    /// Write a starter dlex.toml
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to scan (`-` for stdin)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Also print whitespace tokens
    #[arg(short = 'w', long)]
    include_whitespace: bool,

    /// Append the byte range of each token
    #[arg(short = 's', long)]
    show_spans: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write dlex.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing dlex.toml
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system on stderr.
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
        .map_err(|e| DlexError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, verbose, config),
        Commands::Init(args) => execute_init(args, verbose),
    }
}

fn execute_lex(args: LexCommand, verbose: bool, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        verbose,
        input: args.files,
        format: args.format,
        include_whitespace: args.include_whitespace,
        show_spans: args.show_spans,
    };
    run_lex(lex_args, config)
}

fn execute_init(args: InitCommand, verbose: bool) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    run_init(init_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::parse_from(["dlex", "lex", "dragon0.txt"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.files, vec![PathBuf::from("dragon0.txt")]);
            assert_eq!(args.format, None);
            assert!(!args.include_whitespace);
            assert!(!args.show_spans);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_options() {
        let cli = Cli::parse_from([
            "dlex",
            "lex",
            "a.txt",
            "b.txt",
            "--format",
            "json",
            "-w",
            "--show-spans",
        ]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert_eq!(args.format, Some("json".to_string()));
            assert!(args.include_whitespace);
            assert!(args.show_spans);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_requires_files() {
        assert!(Cli::try_parse_from(["dlex", "lex"]).is_err());
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["dlex", "init", "--path", "/tmp/dlex", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/dlex")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "dlex",
            "lex",
            "x.txt",
            "--verbose",
            "--config",
            "custom.toml",
            "--no-color",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.no_color);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["dlex"]).is_err());
    }
}
