//! "Start Sorting" orchestration.
//!
//! A [`Visualizer`] turns the current configuration into a [`SortRun`]:
//! a freshly sampled input array, its frame sequence and a cancellation
//! token for the playback. Starting a new run cancels the previous one, so
//! at most one playback per visualizer is live.

use std::sync::Arc;

use crate::algorithms::Algorithm;
use crate::config::VisConfig;
use crate::describe::description;
use crate::engine::rng::SortRng;
use crate::error::SortResult;
use crate::frames::{Element, FrameSequence};
use crate::player::{CancelToken, FramePlayer, FrameSink, Pacer, PlaybackOutcome};

/// One generated run, ready to play.
#[derive(Debug, Clone)]
pub struct SortRun {
    seed: u64,
    input: Vec<Element>,
    frames: Arc<FrameSequence>,
    cancel: CancelToken,
}

impl SortRun {
    /// Seed that reproduces this run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Algorithm being animated.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.frames.algorithm()
    }

    /// The unsorted input array.
    #[must_use]
    pub fn input(&self) -> &[Element] {
        &self.input
    }

    /// Recorded frames.
    #[must_use]
    pub fn frames(&self) -> &FrameSequence {
        &self.frames
    }

    /// Shared handle to the recorded frames, for cursors that outlive a borrow.
    #[must_use]
    pub fn shared_frames(&self) -> Arc<FrameSequence> {
        Arc::clone(&self.frames)
    }

    /// Description lines for the algorithm.
    #[must_use]
    pub fn description(&self) -> &'static [&'static str] {
        description(self.frames.algorithm())
    }

    /// Token that stops this run's playback.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Whether a newer run (or the caller) cancelled this one.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Play this run's frames into `sink`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `sink`.
    pub fn play<P: Pacer, S: FrameSink>(
        &self,
        player: &mut FramePlayer<P>,
        sink: &mut S,
    ) -> Result<PlaybackOutcome, S::Error> {
        player.play(&self.frames, sink, &self.cancel)
    }
}

/// Build a run from `config` with an explicit seed.
///
/// The input array and the bogo shuffles draw from separate streams, so the
/// same seed yields the same input for every algorithm.
///
/// # Errors
///
/// Returns error if the value range cannot supply `config.count` distinct values.
pub fn prepare_run(config: &VisConfig, seed: u64) -> SortResult<SortRun> {
    let mut root = SortRng::new(seed);
    let mut input_rng = root.fork();
    let mut sort_rng = root.fork();

    let input = input_rng.sample_distinct(config.count, config.values.as_range())?;
    let frames = config
        .generator()
        .generate(config.algorithm, &input, &mut sort_rng);

    tracing::info!(
        seed,
        algorithm = config.algorithm.key(),
        count = config.count,
        frames = frames.len(),
        "sort run prepared"
    );

    Ok(SortRun {
        seed,
        input,
        frames: Arc::new(frames),
        cancel: CancelToken::new(),
    })
}

/// Session state behind the "Start Sorting" trigger.
#[derive(Debug)]
pub struct Visualizer {
    config: VisConfig,
    active: Option<CancelToken>,
    runs_started: u64,
}

impl Visualizer {
    /// Create a visualizer after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: VisConfig) -> SortResult<Self> {
        config.check()?;
        Ok(Self {
            config,
            active: None,
            runs_started: 0,
        })
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &VisConfig {
        &self.config
    }

    /// Replace the configuration for subsequent runs.
    ///
    /// # Errors
    ///
    /// Returns error (and keeps the old configuration) if `config` is invalid.
    pub fn set_config(&mut self, config: VisConfig) -> SortResult<()> {
        config.check()?;
        self.config = config;
        Ok(())
    }

    /// Runs started so far.
    #[must_use]
    pub const fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// Start a new run, cancelling the previous playback if any.
    ///
    /// Uses the configured seed, or a fresh one when none is set.
    ///
    /// # Errors
    ///
    /// Returns error if input sampling fails.
    pub fn start(&mut self) -> SortResult<SortRun> {
        if let Some(previous) = self.active.take() {
            if !previous.is_cancelled() {
                tracing::debug!("cancelling previous playback");
                previous.cancel();
            }
        }

        let seed = self.config.seed.unwrap_or_else(rand::random);
        let run = prepare_run(&self.config, seed)?;
        self.active = Some(run.cancel_token());
        self.runs_started += 1;
        Ok(run)
    }

    /// Cancel the active playback, if any.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancel();
        }
    }
}
