//! Configuration management for cupmove
//!
//! Collects the options of a run into one place.

use crate::cli::Args;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default pause after each move
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// How each move is carried out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Hand the `move` command line to the host shell
    #[default]
    Shell,
    /// Rename through the filesystem API
    Native,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Root directory, exactly as given on the command line
    pub root: String,
    /// Pause after each move
    pub delay: Duration,
    /// Executor selection
    pub mode: ExecutionMode,
}

impl Config {
    /// Create a configuration for `root` with default settings
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            debug: false,
            root: root.into(),
            delay: DEFAULT_DELAY,
            mode: ExecutionMode::default(),
        }
    }

    /// Create configuration from command line arguments.
    ///
    /// Returns `None` when no root was given; nothing can be done without one.
    pub fn from_args(args: &Args) -> Option<Self> {
        let root = args.root.as_ref()?;

        Some(Self {
            debug: args.debug,
            delay: Duration::from_millis(args.delay_ms),
            mode: args.mode,
            ..Self::new(root.clone())
        })
    }
}
