#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use cupmove::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Without a root there is nothing to move
    let Some(config) = Config::from_args(&args) else {
        cli::print_usage()?;
        return Ok(());
    };

    cli::execute_command(&config)
}
