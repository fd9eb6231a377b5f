//! Sorting TUI application state and logic.
//!
//! Terminal I/O is handled by the `sort-tui` binary; everything testable
//! lives here. The binary calls [`SortApp::tick`] once per
//! [`SortApp::frame_delay`], which advances a [`Playback`] cursor by one
//! frame. The last frame stays on screen for one full tick before the
//! completion view replaces it.

use std::time::Duration;

use crossterm::event::KeyCode;

use crate::algorithms::Algorithm;
use crate::config::{VisConfig, MAX_DELAY_SECS, MIN_DELAY_SECS};
use crate::error::SortResult;
use crate::frames::Frame;
use crate::player::Playback;
use crate::render::{bars, plain_bars, Bar};
use crate::session::{SortRun, Visualizer};

/// Application state for the sorting TUI.
#[derive(Debug)]
pub struct SortApp {
    visualizer: Visualizer,
    run: SortRun,
    playback: Playback,
    /// Set on the tick after the last frame was shown.
    completed: bool,
    /// Whether playback is paused.
    pub paused: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Last error, shown in the status bar.
    pub last_error: Option<String>,
}

impl SortApp {
    /// Create the app and start the first run.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(config: VisConfig) -> SortResult<Self> {
        let mut visualizer = Visualizer::new(config)?;
        let run = visualizer.start()?;
        let playback = Playback::new(run.shared_frames());
        Ok(Self {
            visualizer,
            run,
            playback,
            completed: false,
            paused: false,
            should_quit: false,
            last_error: None,
        })
    }

    /// The run being played.
    #[must_use]
    pub const fn run(&self) -> &SortRun {
        &self.run
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &VisConfig {
        self.visualizer.config()
    }

    /// Frames shown so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.playback.position()
    }

    /// Whether every frame of the current run has been shown and the
    /// completion view is up.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.completed
    }

    /// Pause between frames.
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        self.config().delay_duration()
    }

    /// Frame currently on screen; `None` before the first tick and once
    /// the completion view is up.
    #[must_use]
    pub fn current_frame(&self) -> Option<&Frame> {
        if self.completed {
            return None;
        }
        self.playback.current()
    }

    /// Bars to draw: the input before playback, the current frame during
    /// it and the unhighlighted final state once finished.
    #[must_use]
    pub fn bars(&self) -> Vec<Bar> {
        if self.is_finished() {
            return plain_bars(self.run.frames().final_state());
        }
        match self.current_frame() {
            Some(frame) => bars(frame),
            None => plain_bars(self.run.input()),
        }
    }

    /// Advance playback by one frame, or switch to the completion view
    /// once the last frame has had its tick on screen.
    pub fn tick(&mut self) {
        if self.paused || self.completed || self.run.is_cancelled() {
            return;
        }
        if self.playback.next_frame().is_some() {
            return;
        }
        self.completed = true;
        tracing::info!(
            algorithm = self.run.algorithm().key(),
            frames = self.playback.position(),
            "playback completed"
        );
    }

    /// Start a new run with the current configuration.
    pub fn restart(&mut self) {
        match self.visualizer.start() {
            Ok(run) => {
                self.playback = Playback::new(run.shared_frames());
                self.run = run;
                self.completed = false;
                self.paused = false;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    /// Switch algorithm and start a new run.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        let mut config = self.config().clone();
        config.algorithm = algorithm;
        if self.apply(config) {
            self.restart();
        }
    }

    /// Scale the inter-frame delay, clamped to the allowed range.
    pub fn scale_delay(&mut self, factor: f64) {
        let mut config = self.config().clone();
        config.delay = (config.delay * factor).clamp(MIN_DELAY_SECS, MAX_DELAY_SECS);
        self.apply(config);
    }

    fn apply(&mut self, config: VisConfig) -> bool {
        match self.visualizer.set_config(config) {
            Ok(()) => true,
            Err(e) => {
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.visualizer.stop();
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') | KeyCode::Enter => self.restart(),
            KeyCode::Char('a') => self.select_algorithm(self.config().algorithm.next()),
            KeyCode::Char('A') => self.select_algorithm(self.config().algorithm.prev()),
            KeyCode::Char('+' | '=') => self.scale_delay(0.5),
            KeyCode::Char('-') => self.scale_delay(2.0),
            _ => {}
        }
    }

    /// Check if the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// One-line playback status.
    #[must_use]
    pub fn status_line(&self) -> String {
        let state = if self.is_finished() {
            format!("done ({:?})", self.run.frames().completion())
        } else if self.paused {
            "paused".to_string()
        } else {
            "playing".to_string()
        };
        format!(
            "{state} | frame {}/{} | delay {:.3}s | seed {}",
            self.playback.position(),
            self.run.frames().len(),
            self.config().delay,
            self.run.seed()
        )
    }
}
