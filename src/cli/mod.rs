//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{list_formats, run_check, run_optimize, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, OptimizeOptions};
pub use presenter::Presenter;
