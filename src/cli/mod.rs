//! Command-line interface.
//!
//! Argument definitions live in [`args`], the per-subcommand
//! implementations in [`commands`], and the shared wiring (config, data
//! directory, stores, catalog client) in [`context`].

pub mod args;
pub mod commands;
pub mod context;

pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use context::AppContext;
