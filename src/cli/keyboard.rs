//! Keyboard command: layout ini files to Hamster keyboard JSON.

use crate::cli::common::{print_report, require_source_dir, resolve_output_dir, CliError, CliResult};
use crate::config::Config;
use crate::services::{convert_keyboards, KeyboardOptions, StageReport};
use clap::Args;
use std::path::{Path, PathBuf};

/// Transcode keyboard layouts and their styles to JSON
#[derive(Debug, Clone, Args)]
pub struct KeyboardArgs {
    /// Baidu skin source directory
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output directory (defaults to a sibling `<SOURCE>-辅助` directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl KeyboardArgs {
    /// Execute the keyboard command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let report = run_keyboard(&self.source, self.output.as_ref(), config)?;
        print_report(&report, self.json)
    }
}

/// Runs the keyboard stage with settings from `config`.
pub(crate) fn run_keyboard(
    source: &Path,
    output: Option<&PathBuf>,
    config: &Config,
) -> CliResult<StageReport> {
    require_source_dir(source)?;
    let output_dir = resolve_output_dir(source, output, &config.output.aux_suffix)?;

    let options = KeyboardOptions {
        output_dir,
        style_sheet: config.keyboard.style_sheet.clone(),
        layouts: config.keyboard.layouts.clone(),
    };

    convert_keyboards(source, &options)
        .map_err(|e| CliError::io(format!("Keyboard conversion failed: {e:#}")))
}
