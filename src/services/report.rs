//! Per-stage run summaries.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Conversion stage a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Descriptor → resource YAML (plus sprite sheet copy)
    Resources,
    /// Sprite sheet → debug overlay image
    Edgemark,
    /// Keyboard layout → style JSON
    Keyboard,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resources => "resources",
            Self::Edgemark => "edgemark",
            Self::Keyboard => "keyboard",
        };
        write!(f, "{name}")
    }
}

/// One successfully written output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Converted {
    /// Input file
    pub source: PathBuf,
    /// Written file
    pub destination: PathBuf,
}

/// One input that produced no output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    /// Input file or directory
    pub source: PathBuf,
    /// Why it was skipped
    pub reason: String,
}

/// Outcome of running one stage over a skin package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    /// Stage that produced this report
    pub stage: Stage,
    /// Root directory outputs were written under
    pub output_dir: PathBuf,
    /// Written outputs, in processing order
    pub converted: Vec<Converted>,
    /// Inputs that were skipped
    pub skipped: Vec<Skipped>,
    /// Non-fatal problems with otherwise converted inputs
    pub warnings: Vec<String>,
}

impl StageReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new(stage: Stage, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            stage,
            output_dir: output_dir.into(),
            converted: Vec::new(),
            skipped: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Records a written output.
    pub fn converted(&mut self, source: &Path, destination: &Path) {
        info!(
            "[{}] {} -> {}",
            self.stage,
            source.display(),
            destination.display()
        );
        self.converted.push(Converted {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
    }

    /// Records a skipped input and logs the reason.
    pub fn skipped(&mut self, source: &Path, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("[{}] skipped {}: {}", self.stage, source.display(), reason);
        self.skipped.push(Skipped {
            source: source.to_path_buf(),
            reason,
        });
    }

    /// Records a non-fatal problem and logs it.
    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("[{}] {}", self.stage, message);
        self.warnings.push(message);
    }

    /// True when nothing was skipped and nothing was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_records() {
        let mut report = StageReport::new(Stage::Edgemark, "/out");
        assert!(report.is_clean());

        report.converted(Path::new("/in/a.til"), Path::new("/out/dark/a.png"));
        report.skipped(Path::new("/in/b.til"), "image not found");

        assert_eq!(report.converted.len(), 1);
        assert_eq!(report.skipped[0].reason, "image not found");
        assert!(!report.is_clean());
    }

    #[test]
    fn test_report_serializes_stage_name() {
        let report = StageReport::new(Stage::Keyboard, "/out");
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["stage"], "keyboard");
        assert_eq!(Stage::Resources.to_string(), "resources");
    }
}
