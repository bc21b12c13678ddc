//! Hamster Skin Converter Library
//!
//! This library converts Baidu input-method skin packages into assets for
//! the Hamster keyboard, including sprite descriptor parsing, resource YAML
//! and keyboard JSON export, and debug overlays for sprite sheets.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
