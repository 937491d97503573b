//! Blueprint Core — shared errors and configuration.
//!
//! This crate has no internal Blueprint dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Formatter and cleaning options
//! - [`traits`]: The [`ConfigManager`] trait for TOML config files

#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod traits;

// Re-export key types at crate root for convenience
pub use config::{CleanOptions, FormatterConfig};
pub use error::{Error, Result};
pub use traits::ConfigManager;
