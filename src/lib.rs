//! # cupmove
//!
//! Pulls a set of nested "cups" back out to a root directory. The layout
//! `cup3/cup2/cup1/ball.txt` is unpacked by three moves, run in order with a
//! pause after each:
//!
//! 1. `cup3\cup2` into the root
//! 2. `cup2\cup1` into the root
//! 3. `cup1\ball.txt` into the root
//!
//! Every move is echoed to stdout before it runs. A failed move is logged and
//! the remaining ones are still attempted.
//!
//! ## Example
//!
//! ```no_run
//! use cupmove::core::{ActionRunner, NativeExecutor, plan};
//! use std::time::Duration;
//!
//! let runner = ActionRunner::new(NativeExecutor::new(), Duration::from_secs(1));
//! let report = runner.run(&plan("/tmp/game"), &mut std::io::stdout())?;
//! println!("{} moves failed", report.failures());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr; stdout only carries the echoed commands.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
