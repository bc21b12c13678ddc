//! Edgemark command: debug overlays for sprite sheets.

use crate::cli::common::{print_report, require_source_dir, resolve_output_dir, CliError, CliResult};
use crate::cli::resources::discovery;
use crate::config::Config;
use crate::services::{mark_edges, EdgemarkOptions, StageReport};
use clap::Args;
use std::path::{Path, PathBuf};

/// Draw sprite outlines, margin rulers and labels onto copies of sprite sheets
#[derive(Debug, Clone, Args)]
pub struct EdgemarkArgs {
    /// Baidu skin source directory
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output directory (defaults to a sibling `<SOURCE>-辅助` directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Classify descriptors by `dark`/`light` anywhere in their path
    #[arg(long)]
    pub classify_by_path: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl EdgemarkArgs {
    /// Execute the edgemark command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let report = run_edgemark(
            &self.source,
            self.output.as_ref(),
            self.classify_by_path,
            config,
        )?;
        print_report(&report, self.json)
    }
}

/// Runs the edgemark stage with CLI flags layered over `config`.
pub(crate) fn run_edgemark(
    source: &Path,
    output: Option<&PathBuf>,
    classify_by_path: bool,
    config: &Config,
) -> CliResult<StageReport> {
    require_source_dir(source)?;
    let output_dir = resolve_output_dir(source, output, &config.output.aux_suffix)?;

    let options = EdgemarkOptions {
        output_dir,
        discovery: discovery(classify_by_path),
        style: config.overlay,
    };

    mark_edges(source, &options).map_err(|e| CliError::io(format!("Edge marking failed: {e:#}")))
}
