//! Core functionality for moving the cups
//!
//! Contains the fixed move plan and the sequential runner that executes it.

pub mod action;
pub mod runner;

pub use action::{MoveAction, plan};
pub use runner::{ActionRunner, Executor, NativeExecutor, RunReport, ShellExecutor};
