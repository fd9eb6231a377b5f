//! sortscope CLI - sorting-algorithm visualizer
//!
//! All logic lives in the `cli` module; this binary only wires logging and
//! the exit code.

use std::process::ExitCode;

use sortscope::cli::{run_cli, Args};
use sortscope::logging::{init_subscriber, Verbosity};

fn main() -> ExitCode {
    let args = Args::parse();
    init_subscriber(Verbosity::from_flags(args.verbose, args.quiet), args.no_color);
    run_cli(args)
}
