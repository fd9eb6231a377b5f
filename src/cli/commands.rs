//! CLI command handlers.
//!
//! Each handler has a writer-generic core returning [`SortResult`] so tests
//! can capture output; the public wrappers print to stdout and map the
//! result to an exit code.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::algorithms::Algorithm;
use crate::config::VisConfig;
use crate::describe::description;
use crate::error::{SortError, SortResult};
use crate::player::FramePlayer;
use crate::render::TextChart;
use crate::session::{prepare_run, Visualizer};

use super::output::{print_help, print_version};
use super::{Args, Command, RunOptions};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    let result = match args.command {
        Command::Run(options) => run_playback(&options, &mut io::stdout().lock()),
        Command::Frames(options) => export_frames(&options, &mut io::stdout().lock()),
        Command::Verify { options, runs } => {
            verify_reproducibility(&options, runs, &mut io::stdout().lock())
        }
        Command::List => list_algorithms(&mut io::stdout().lock()),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    };

    exit_code(result)
}

fn exit_code(result: SortResult<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Build the effective configuration: file (or defaults), then CLI overrides.
///
/// # Errors
///
/// Returns error if the file cannot be loaded, the algorithm name is
/// unknown, or the merged configuration is invalid.
pub fn resolve_config(options: &RunOptions) -> SortResult<VisConfig> {
    let mut config = match &options.config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            VisConfig::load(path)?
        }
        None => VisConfig::default(),
    };

    if let Some(name) = &options.algorithm {
        config.algorithm = name.parse::<Algorithm>()?;
    }
    if let Some(count) = options.count {
        config.count = count;
    }
    if let Some(delay) = options.delay {
        config.delay = delay;
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }

    config.check()?;
    Ok(config)
}

/// Generate a run and animate it as a text bar chart.
///
/// # Errors
///
/// Returns error on invalid configuration or a failed write.
pub fn run_playback<W: Write>(options: &RunOptions, out: &mut W) -> SortResult<()> {
    let config = resolve_config(options)?;
    let mut visualizer = Visualizer::new(config)?;
    let run = visualizer.start()?;
    let display = visualizer.config().display;

    writeln!(
        out,
        "{} on {} elements (seed {})",
        run.algorithm(),
        run.input().len(),
        run.seed()
    )?;

    let mut chart = TextChart::new(&mut *out, display.chart_height, display.clear_screen);
    let mut player = FramePlayer::new(visualizer.config().delay_duration());
    let outcome = run.play(&mut player, &mut chart)?;
    tracing::info!(played = outcome.played(), "playback finished");
    Ok(())
}

/// Generate a run and write its frame sequence as JSON.
///
/// # Errors
///
/// Returns error on invalid configuration or a failed write.
pub fn export_frames<W: Write>(options: &RunOptions, out: &mut W) -> SortResult<()> {
    let config = resolve_config(options)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let run = prepare_run(&config, seed)?;
    writeln!(out, "{}", run.frames().to_json()?)?;
    Ok(())
}

/// Regenerate `runs` times from one seed and compare fingerprints.
///
/// # Errors
///
/// Returns error on invalid configuration, or a config error if any run
/// diverges from the first.
pub fn verify_reproducibility<W: Write>(
    options: &RunOptions,
    runs: usize,
    out: &mut W,
) -> SortResult<()> {
    if runs == 0 {
        return Err(SortError::config("--runs must be at least 1"));
    }

    let config = resolve_config(options)?;
    let seed = config.seed.unwrap_or_else(rand::random);

    writeln!(
        out,
        "Verifying {} with seed {seed} across {runs} runs",
        config.algorithm
    )?;

    let mut reference = None;
    for i in 1..=runs {
        let run = prepare_run(&config, seed)?;
        let fingerprint = run.frames().fingerprint();
        writeln!(
            out,
            "  run {i}: {} frames, fingerprint {}",
            run.frames().len(),
            fingerprint.to_hex()
        )?;

        match reference {
            None => reference = Some(fingerprint),
            Some(expected) if expected != fingerprint => {
                writeln!(out, "✗ run {i} diverged")?;
                return Err(SortError::config(format!(
                    "run {i} produced a different frame sequence for seed {seed}"
                )));
            }
            Some(_) => {}
        }
    }

    writeln!(out, "✓ all {runs} runs identical")?;
    Ok(())
}

/// Print every algorithm with its description.
///
/// # Errors
///
/// Returns error on a failed write.
pub fn list_algorithms<W: Write>(out: &mut W) -> SortResult<()> {
    for algorithm in Algorithm::ALL {
        writeln!(out, "{} ({})", algorithm.display_name(), algorithm.key())?;
        for line in description(algorithm) {
            writeln!(out, "  - {line}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
