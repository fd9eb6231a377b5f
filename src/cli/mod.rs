//! CLI module for sortscope.
//!
//! All CLI logic lives here instead of main.rs so it can be tested. The entry
//! point `run_cli` is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOptions, DEFAULT_VERIFY_RUNS};
pub use commands::{
    export_frames, list_algorithms, resolve_config, run_cli, run_playback,
    verify_reproducibility,
};
pub use output::{print_help, print_version, version_string};
