//! Convert command: all three stages in one run.

use crate::cli::common::{print_report, CliError, CliResult};
use crate::cli::edgemark::run_edgemark;
use crate::cli::keyboard::run_keyboard;
use crate::cli::resources::run_resources;
use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

/// Run resources, edgemark and keyboard over one skin
///
/// Resources always go to the sibling `<SOURCE>-仓输入法` directory. Overlays
/// and keyboard JSON go to DESTINATION when given, otherwise to the sibling
/// `<SOURCE>-辅助` directory.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Baidu skin source directory
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory for overlays and keyboard JSON
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

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

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let destination = self.destination.as_ref();

        let reports = vec![
            run_resources(
                &self.source,
                None,
                self.replace,
                self.classify_by_path,
                config,
            )?,
            run_edgemark(&self.source, destination, self.classify_by_path, config)?,
            run_keyboard(&self.source, destination, config)?,
        ];

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&reports).map_err(|e| {
                    CliError::io(format!("Failed to serialize JSON: {e}"))
                })?
            );
            return Ok(());
        }

        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                println!();
            }
            print_report(report, false)?;
        }

        Ok(())
    }
}
