//! CLI argument parsing.
//!
//! Hand-rolled so it can be driven from any iterator of strings in tests.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
    /// `-v` / `--verbose`.
    pub verbose: bool,
    /// `-q` / `--quiet`.
    pub quiet: bool,
    /// `--no-color`.
    pub no_color: bool,
}

/// Options shared by the commands that generate a run.
///
/// Every field overrides the matching value from the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Algorithm name as typed; resolved when the command runs.
    pub algorithm: Option<String>,
    /// Array length.
    pub count: Option<usize>,
    /// Inter-frame delay in seconds.
    pub delay: Option<f64>,
    /// Master seed.
    pub seed: Option<u64>,
    /// YAML configuration file.
    pub config_path: Option<PathBuf>,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate and play back as a text chart
    Run(RunOptions),
    /// Generate and print the frame sequence as JSON
    Frames(RunOptions),
    /// Regenerate several times and compare fingerprints
    Verify {
        /// Generation options.
        options: RunOptions,
        /// Number of verification runs.
        runs: usize,
    },
    /// List algorithms with their descriptions
    List,
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// The first item is the program name.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        let mut parsed = Self {
            command: Command::Help,
            verbose: false,
            quiet: false,
            no_color: false,
        };

        if args.len() < 2 {
            return parsed;
        }

        let rest = &args[2..];
        parsed.command = match args[1].as_str() {
            "run" => parse_options(rest, &mut parsed).map_or(Command::Help, |(o, _)| Command::Run(o)),
            "frames" => {
                parse_options(rest, &mut parsed).map_or(Command::Help, |(o, _)| Command::Frames(o))
            }
            "verify" => parse_options(rest, &mut parsed).map_or(Command::Help, |(options, runs)| {
                Command::Verify {
                    options,
                    runs: runs.unwrap_or(DEFAULT_VERIFY_RUNS),
                }
            }),
            "list" => Command::List,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        parsed
    }
}

/// Runs performed by `verify` when `--runs` is absent.
pub const DEFAULT_VERIFY_RUNS: usize = 3;

/// Parse run options plus the global flags. Returns `None` (after printing
/// the problem) on a malformed option.
fn parse_options(args: &[String], global: &mut Args) -> Option<(RunOptions, Option<usize>)> {
    let mut options = RunOptions::default();
    let mut runs = None;

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-v" | "--verbose" => global.verbose = true,
            "-q" | "--quiet" => global.quiet = true,
            "--no-color" => global.no_color = true,
            "-a" | "--algorithm" => options.algorithm = Some(value(args, i, flag)?.to_string()),
            "-n" | "--count" => options.count = Some(parse_value(args, i, flag)?),
            "-d" | "--delay" => options.delay = Some(parse_value(args, i, flag)?),
            "-s" | "--seed" => options.seed = Some(parse_value(args, i, flag)?),
            "-c" | "--config" => options.config_path = Some(PathBuf::from(value(args, i, flag)?)),
            "--runs" => runs = Some(parse_value(args, i, flag)?),
            other => {
                eprintln!("Error: unexpected argument '{other}'");
                return None;
            }
        }
        i += if takes_value(flag) { 2 } else { 1 };
    }

    Some((options, runs))
}

fn takes_value(flag: &str) -> bool {
    !matches!(flag, "-v" | "--verbose" | "-q" | "--quiet" | "--no-color")
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Option<&'a str> {
    let found = args.get(i + 1).map(String::as_str);
    if found.is_none() {
        eprintln!("Error: '{flag}' requires a value");
    }
    found
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Option<T> {
    let raw = value(args, i, flag)?;
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        eprintln!("Error: invalid value '{raw}' for '{flag}'");
    }
    parsed
}
