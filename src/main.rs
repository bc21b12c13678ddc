//! Hamster Skin Converter - Baidu skin to Hamster keyboard assets
//!
//! Converts sprite descriptors to resource YAML, draws debug overlays onto
//! sprite sheets and transcodes keyboard layouts to JSON.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hamster_skin::cli::{
    CliError, CliResult, ConvertArgs, EdgemarkArgs, ExitCode, KeyboardArgs, ResourcesArgs,
};
use hamster_skin::config::Config;
use hamster_skin::constants::{APP_BINARY_NAME, APP_NAME};

/// Hamster Skin Converter - Baidu skin to Hamster keyboard assets
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert sprite descriptors to resource YAML
    Resources(ResourcesArgs),
    /// Draw debug overlays onto sprite sheets
    Edgemark(EdgemarkArgs),
    /// Transcode keyboard layouts to JSON
    Keyboard(KeyboardArgs),
    /// Run all three stages
    Convert(ConvertArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = Config::load(cli.config.as_deref())
        .map_err(|e| CliError::validation(format!("{e:#}")))?;
    debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Resources(args) => args.execute(&config),
        Commands::Edgemark(args) => args.execute(&config),
        Commands::Keyboard(args) => args.execute(&config),
        Commands::Convert(args) => args.execute(&config),
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are reported through the error path too
            let code = if err.use_stderr() {
                ExitCode::ValidationError
            } else {
                ExitCode::Success
            };
            let _ = err.print();
            std::process::exit(code.code());
        }
    };

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code().code());
    }

    std::process::exit(ExitCode::Success.code());
}
