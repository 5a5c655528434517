//! Interactive shell for scanning receipts and inspecting the session.

pub mod core;
pub mod output;
pub mod shell;

pub use core::{CliError, CliMode, ShellContext};
pub use shell::run_cli;
