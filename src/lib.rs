//! Repatch - idempotent regex find/replace across a source tree.
//!
//! This library provides the core functionality for repatch, including:
//! - Configuration: the built-in rule table and `.repatch.toml` loading
//! - Rule compilation and sequential application
//! - Deterministic recursive scanning by file extension
//! - Single-file patching with `.backup` copies
//!
//! # Example
//!
//! ```no_run
//! use repatch::config::PatchConfig;
//! use repatch::driver::{RunOptions, run};
//!
//! let config = PatchConfig::default();
//! let summary = run(&config, &RunOptions::default(), &mut std::io::stdout()).unwrap();
//! println!("{} file(s) fixed", summary.fixed);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod patch;
pub mod rules;
pub mod scan;

pub use error::{PatchError, Result};
