//! CLI, configuration, output rendering
//!
//! This crate provides the `snoozectl` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;

pub use cli::Cli;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
