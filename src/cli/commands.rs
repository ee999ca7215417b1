//! Command implementation for the CLI

use crate::{
    config::{Config, ExecutionMode},
    core::{ActionRunner, Executor, NativeExecutor, ShellExecutor, plan},
};
use anyhow::Context;
use tracing::{debug, info, instrument};

/// Move every cup out to the configured root
#[instrument(skip(config), fields(root = %config.root, mode = ?config.mode))]
pub fn execute_command(config: &Config) -> anyhow::Result<()> {
    debug!("Configuration: {:?}", config);

    match config.mode {
        ExecutionMode::Shell => run_with(ShellExecutor::new(config.debug), config),
        ExecutionMode::Native => run_with(NativeExecutor::new(), config),
    }
}

fn run_with<E: Executor>(executor: E, config: &Config) -> anyhow::Result<()> {
    let actions = plan(&config.root);
    info!("Moving {} items into {}", actions.len(), config.root);

    let runner = ActionRunner::new(executor, config.delay);
    let mut stdout = std::io::stdout().lock();
    let report = runner
        .run(&actions, &mut stdout)
        .context("Failed to write to stdout")?;

    debug!("Run finished: {:?}", report);
    Ok(())
}
