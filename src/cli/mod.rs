//! CLI command handlers for the skin converter.
//!
//! Each subcommand runs one conversion stage (or all of them) over a Baidu
//! skin directory and prints a report.

pub mod common;
pub mod convert;
pub mod edgemark;
pub mod keyboard;
pub mod resources;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use convert::ConvertArgs;
pub use edgemark::EdgemarkArgs;
pub use keyboard::KeyboardArgs;
pub use resources::ResourcesArgs;
