//! CLI output formatting.

/// Version string embedded by the build script.
#[must_use]
pub fn version_string() -> String {
    let version = option_env!("SORTSCOPE_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    match option_env!("GIT_HASH").and_then(|hash| hash.get(..8)) {
        Some(short) => format!("sortscope {version} ({short})"),
        None => format!("sortscope {version}"),
    }
}

/// Print version information.
pub fn print_version() {
    println!("{}", version_string());
}

/// Print help message.
pub fn print_help() {
    println!(
        r"sortscope - Reproducible sorting-algorithm visualizer

USAGE:
    sortscope <COMMAND> [OPTIONS]

COMMANDS:
    run                         Generate a run and animate it as a text chart
    frames                      Generate a run and print its frames as JSON
    verify                      Regenerate from one seed and compare fingerprints
        --runs <N>              Number of verification runs (default: 3)
    list                        List algorithms and their descriptions
    help                        Show this help message
    version                     Show version information

OPTIONS:
    -a, --algorithm <NAME>      bubble, insertion, selection, quick, merge, bogo, sleep
    -n, --count <N>             Array length, 5..=90 (default: 15)
    -d, --delay <SECS>          Pause between frames, 0.001..=0.3 (default: 0.03)
    -s, --seed <N>              Master seed (default: random)
    -c, --config <FILE>         YAML configuration; flags override it
    -v, --verbose               Debug logging on stderr
    -q, --quiet                 Errors only on stderr
        --no-color              Plain log output

EXAMPLES:
    sortscope run -a quick -n 30
    sortscope frames -a merge -n 8 --seed 42
    sortscope verify -a bogo -n 5 --seed 7 --runs 5

ENVIRONMENT:
    SORTSCOPE_LOG               Log filter directives (overrides RUST_LOG)
"
    );
}
