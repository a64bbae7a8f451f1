//! tComment CLI - Infer null-related preconditions from Javadoc comments.
//!
//! Reads documented methods from JSON, translates their `@param` and
//! `@throws` comments into conditions, and measures the result against goal
//! files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use tcomment_ops::{Config, OpsContext, OutputFormat, ThrowsMode};

mod commands;

use commands::config as config_cmd;

/// tComment CLI - Translate Javadoc comments into null conditions.
#[derive(Parser, Debug)]
#[command(
    name = "tcomment",
    author,
    version,
    about = "tComment: Infer null preconditions from @param and @throws comments",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate the documented methods in a JSON file or directory.
    Translate {
        /// JSON file or directory of JSON files.
        input: PathBuf,

        /// Output file path (defaults to `<output_dir>/<stem>_<format>.json`).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: specs or randoop.
        #[arg(short, long, default_value = "specs")]
        format: OutputFormat,

        /// Throws mode: all or gated (defaults to the configured mode).
        #[arg(long)]
        mode: Option<ThrowsMode>,

        /// Number of translation workers (defaults to the configured count).
        #[arg(long)]
        workers: Option<usize>,

        /// Print the result to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Compare translations with the expected conditions of a goal file.
    Evaluate {
        /// Goal file or directory whose tags carry expected conditions.
        goal: PathBuf,

        /// Throws mode: all or gated (defaults to the configured mode).
        #[arg(long)]
        mode: Option<ThrowsMode>,

        /// Number of translation workers (defaults to the configured count).
        #[arg(long)]
        workers: Option<usize>,

        /// List every compared tag, not only the wrong and missing ones.
        #[arg(long)]
        all: bool,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the heuristics on a single comment.
    Inspect {
        /// Comment text.
        comment: String,

        /// Parameter names of the method, comma separated, in order.
        #[arg(short, long, value_delimiter = ',')]
        parameters: Vec<String>,

        /// Parameter the comment documents as a `@param` comment.
        #[arg(long)]
        param: Option<String>,

        /// Throws mode: all or gated (defaults to the configured mode).
        #[arg(long)]
        mode: Option<ThrowsMode>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    match cli.command {
        Commands::Translate {
            input,
            output,
            format,
            mode,
            workers,
            stdout,
        } => {
            let ctx = OpsContext::new(config);
            let args = commands::translate::TranslateArgs {
                input,
                output,
                format,
                mode,
                workers,
                stdout,
            };
            commands::translate::execute(&ctx, args, cli.quiet).await?;
        }

        Commands::Evaluate {
            goal,
            mode,
            workers,
            all,
            json,
        } => {
            let ctx = OpsContext::new(config);
            let args = commands::evaluate::EvaluateArgs {
                goal,
                mode,
                workers,
                all,
                json,
            };
            commands::evaluate::execute(&ctx, args).await?;
        }

        Commands::Inspect {
            comment,
            parameters,
            param,
            mode,
            json,
        } => {
            let ctx = OpsContext::new(config);
            commands::inspect::execute(&ctx, comment, parameters, param, mode, json)?;
        }

        Commands::Config(config_cmd_inner) => {
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    // Environment overrides must not end up in the file
                    let mut stored =
                        Config::load_file().context("Failed to read configuration file")?;
                    config_cmd::set(&mut stored, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}
