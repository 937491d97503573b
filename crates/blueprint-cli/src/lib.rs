//! # blueprint-cli
//!
//! Command-line front end for the Builder Blueprint text formatter.
//!
//! The `blueprint` binary reads AI-generated text from a file or stdin and
//! prints its sections as JSON, a cleaned copy of the text, canonical
//! markdown, a header outline, or a short excerpt. The `config` subcommands
//! manage the TOML file that drives [`blueprint_core::FormatterConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config_handlers;
pub mod input;
