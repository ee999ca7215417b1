//! Command-line argument parsing

use crate::config::ExecutionMode;
use clap::{CommandFactory, Parser};

/// Move the nested cups and the ball back out to a root directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "cupmove")]
pub struct Args {
    /// Root directory holding cup3/cup2/cup1/ball.txt
    #[arg(short = 'r', long = "root", value_name = "PATH")]
    pub root: Option<String>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// How each move is carried out
    #[arg(long, value_enum, default_value_t = ExecutionMode::Shell)]
    pub mode: ExecutionMode,

    /// Pause after each move, in milliseconds
    #[arg(long = "delay-ms", value_name = "MS", default_value_t = 1000)]
    pub delay_ms: u64,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

/// Print the help text to stdout
pub fn print_usage() -> std::io::Result<()> {
    Args::command().print_help()?;
    println!();
    Ok(())
}
