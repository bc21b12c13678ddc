//! Service layer for directory-level work.
//!
//! This module walks skin packages and runs the conversion stages that
//! coordinate the parsers and exporters.

pub mod report;
pub mod stages;
pub mod walker;

// Re-export commonly used types and functions
pub use report::{Converted, Skipped, Stage, StageReport};
pub use stages::{
    check_directories, convert_keyboards, convert_resources, mark_edges, EdgemarkOptions,
    KeyboardOptions, ResourcesOptions,
};
pub use walker::{default_output_dir, ThemeDiscovery};
