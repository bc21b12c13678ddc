//! Resources command: descriptors to Hamster resource YAML.

use crate::cli::common::{print_report, require_source_dir, resolve_output_dir, CliError, CliResult};
use crate::config::Config;
use crate::models::InsetTransform;
use crate::services::{convert_resources, ResourcesOptions, StageReport, ThemeDiscovery};
use clap::Args;
use std::path::{Path, PathBuf};

/// Convert sprite descriptors (.til) to Hamster resource YAML
#[derive(Debug, Clone, Args)]
pub struct ResourcesArgs {
    /// Baidu skin source directory
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Output directory (defaults to a sibling `<SOURCE>-仓输入法` directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Replace insets equal to the whole sprite with the fallback margins
    #[arg(long)]
    pub replace: bool,

    /// Classify descriptors by `dark`/`light` anywhere in their path
    #[arg(long)]
    pub classify_by_path: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResourcesArgs {
    /// Execute the resources command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let report = run_resources(
            &self.source,
            self.output.as_ref(),
            self.replace,
            self.classify_by_path,
            config,
        )?;
        print_report(&report, self.json)
    }
}

pub(crate) const fn discovery(classify_by_path: bool) -> ThemeDiscovery {
    if classify_by_path {
        ThemeDiscovery::PathMatch
    } else {
        ThemeDiscovery::Subdirs
    }
}

/// Runs the resources stage with CLI flags layered over `config`.
pub(crate) fn run_resources(
    source: &Path,
    output: Option<&PathBuf>,
    replace: bool,
    classify_by_path: bool,
    config: &Config,
) -> CliResult<StageReport> {
    require_source_dir(source)?;
    let output_dir = resolve_output_dir(source, output, &config.output.resources_suffix)?;

    let options = ResourcesOptions {
        output_dir,
        discovery: discovery(classify_by_path),
        transform: InsetTransform::new(replace || config.insets.replace_degenerate),
    };

    convert_resources(source, &options)
        .map_err(|e| CliError::io(format!("Resource conversion failed: {e:#}")))
}
