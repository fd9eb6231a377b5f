//! Frame Player: paced, in-order playback of a frame sequence.
//!
//! The player hands every frame of a [`FrameSequence`] to a [`FrameSink`]
//! exactly once, in recorded order, pausing between frames with a
//! [`Pacer`]. Once the last frame is shown the sink's `complete` hook runs.
//! Sink errors abort playback and are returned to the caller as-is.
//!
//! Two ways to drive playback:
//! - [`FramePlayer::play`] blocks the calling thread until the sequence is
//!   exhausted or the [`CancelToken`] fires.
//! - [`Playback`] is a cursor for event loops that need to redraw between
//!   frames (the TUI), stepping on their own tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::frames::{Frame, FrameSequence};

/// Rendering collaborator fed by the player.
pub trait FrameSink {
    /// Error raised by the collaborator.
    type Error;

    /// Show one frame. `delay_hint` is the pause that follows it.
    ///
    /// # Errors
    ///
    /// Any error aborts playback and is returned from [`FramePlayer::play`].
    fn render(&mut self, frame: &Frame, delay_hint: Duration) -> Result<(), Self::Error>;

    /// Called once after the final frame of an uncancelled playback.
    ///
    /// # Errors
    ///
    /// Returned from [`FramePlayer::play`] unchanged.
    fn complete(&mut self, sequence: &FrameSequence) -> Result<(), Self::Error> {
        let _ = sequence;
        Ok(())
    }
}

/// Adapts a closure into a [`FrameSink`].
#[derive(Debug)]
pub struct FnSink<F>(pub F);

impl<F, E> FrameSink for FnSink<F>
where
    F: FnMut(&Frame) -> Result<(), E>,
{
    type Error = E;

    fn render(&mut self, frame: &Frame, _delay_hint: Duration) -> Result<(), E> {
        (self.0)(frame)
    }
}

/// Waits between frames.
pub trait Pacer {
    /// Suspend for `delay`.
    fn pause(&mut self, delay: Duration);
}

/// Blocks the current thread with `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Records requested pauses without waiting.
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl RecordingPacer {
    /// Pauses requested so far.
    #[must_use]
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of all requested pauses.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}

/// Shared cancellation flag for one playback session.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every clone observes it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// How a playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Every frame was rendered and `complete` ran.
    Completed {
        /// Frames rendered.
        frames: usize,
    },
    /// The token fired before the sequence was exhausted.
    Cancelled {
        /// Frames rendered before cancellation.
        played: usize,
        /// Frames in the sequence.
        total: usize,
    },
}

impl PlaybackOutcome {
    /// Whether playback ran to the end.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Frames rendered.
    #[must_use]
    pub const fn played(self) -> usize {
        match self {
            Self::Completed { frames } => frames,
            Self::Cancelled { played, .. } => played,
        }
    }
}

/// Forward-only cursor over a shared frame sequence.
///
/// Owns its sequence through an `Arc`, so a host can keep the cursor next
/// to the run it plays.
#[derive(Debug, Clone)]
pub struct Playback {
    sequence: Arc<FrameSequence>,
    position: usize,
}

impl Playback {
    /// Cursor positioned before the first frame.
    #[must_use]
    pub const fn new(sequence: Arc<FrameSequence>) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }

    /// Advance and return the next frame.
    pub fn next_frame(&mut self) -> Option<&Frame> {
        let frame = self.sequence.get(self.position)?;
        self.position += 1;
        Some(frame)
    }

    /// Most recently returned frame.
    #[must_use]
    pub fn current(&self) -> Option<&Frame> {
        self.position
            .checked_sub(1)
            .and_then(|index| self.sequence.get(index))
    }

    /// Frames returned so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Frames not yet returned.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sequence.len().saturating_sub(self.position)
    }

    /// Whether every frame has been returned.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position >= self.sequence.len()
    }

    /// Start over from the first frame.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// The sequence being played.
    #[must_use]
    pub fn sequence(&self) -> &FrameSequence {
        &self.sequence
    }
}

/// Blocking frame player.
#[derive(Debug, Clone)]
pub struct FramePlayer<P = ThreadPacer> {
    delay: Duration,
    pacer: P,
}

impl FramePlayer<ThreadPacer> {
    /// Player that sleeps `delay` between frames.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pacer: ThreadPacer,
        }
    }
}

impl<P: Pacer> FramePlayer<P> {
    /// Player with a custom pacer.
    #[must_use]
    pub const fn with_pacer(delay: Duration, pacer: P) -> Self {
        Self { delay, pacer }
    }

    /// Inter-frame delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// The pacer, for inspection after playback.
    #[must_use]
    pub const fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Play every frame of `sequence` into `sink`.
    ///
    /// The pause follows each frame except the last. `cancel` is checked
    /// before each frame; a cancelled playback skips `complete`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `sink`.
    pub fn play<S: FrameSink>(
        &mut self,
        sequence: &FrameSequence,
        sink: &mut S,
        cancel: &CancelToken,
    ) -> Result<PlaybackOutcome, S::Error> {
        let total = sequence.len();
        tracing::debug!(
            algorithm = sequence.algorithm().key(),
            frames = total,
            delay_ms = self.delay.as_millis() as u64,
            "playback started"
        );

        for (index, frame) in sequence.iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::debug!(played = index, total, "playback cancelled");
                return Ok(PlaybackOutcome::Cancelled {
                    played: index,
                    total,
                });
            }
            sink.render(frame, self.delay)?;
            if index + 1 < total {
                self.pacer.pause(self.delay);
            }
        }

        sink.complete(sequence)?;
        tracing::debug!(frames = total, "playback completed");
        Ok(PlaybackOutcome::Completed { frames: total })
    }
}

/// Play `sequence`, calling `on_frame` for each frame and sleeping `delay`
/// between frames.
///
/// # Errors
///
/// Returns the first error raised by `on_frame`.
pub fn play<F, E>(sequence: &FrameSequence, delay: Duration, on_frame: F) -> Result<PlaybackOutcome, E>
where
    F: FnMut(&Frame) -> Result<(), E>,
{
    FramePlayer::new(delay).play(sequence, &mut FnSink(on_frame), &CancelToken::new())
}
