//! Configuration loading and parsing for repatch.
//!
//! This module handles:
//! - The built-in rule table and defaults
//! - TOML config file parsing and validation
//! - Config file discovery

pub mod discover;
pub mod parser;
pub mod types;

pub use discover::{CONFIG_FILE_NAME, generate_init_template, load_config};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{ConfigSource, LoadedConfig, PatchConfig, RuleSpec};
