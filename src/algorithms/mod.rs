//! Frame Generator: instrumented sorting algorithms.
//!
//! Each algorithm sorts a private copy of the input and records a
//! [`Frame`](crate::frames::Frame) whenever it compares or moves elements.
//! The recording policy per algorithm defines what the animation shows:
//!
//! | Algorithm | Frames | Highlight |
//! |-----------|--------|-----------|
//! | Bubble    | before each comparison, after each swap | `(j, j+1)` |
//! | Insertion | after each shift, after the key settles | `(j, j+1)`, `(pos, i)` |
//! | Selection | before each candidate comparison, after the pass swap | `(i, j)`, `(i, min)` |
//! | Quick     | before each pivot comparison, after swaps, at pivot placement | `(j, high)`, `(i, j)`, `(i+1, high)` |
//! | Merge     | before and after every write-back | `(k, k)` |
//! | Bogo      | before every shuffle, plus one once sorted | none |
//! | Sleep     | one per emission into a zero-filled output | `(k, k)` |

mod bogo;
mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;
mod sleep;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::rng::SortRng;
use crate::error::SortError;
use crate::frames::{Completion, Element, FrameRecorder, FrameSequence};

pub use bogo::DEFAULT_BOGO_MAX_ATTEMPTS;

/// Sorting algorithms the visualizer can animate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Adjacent swaps with early exit.
    #[default]
    Bubble,
    /// Shift-left insertion.
    Insertion,
    /// Minimum selection, one swap per pass.
    Selection,
    /// Lomuto partition quicksort.
    Quick,
    /// Top-down merge sort.
    Merge,
    /// Shuffle until sorted, bounded.
    Bogo,
    /// Emit values in ascending order.
    Sleep,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Quick,
        Self::Merge,
        Self::Bogo,
        Self::Sleep,
    ];

    /// Short lowercase identifier used in config files and on the CLI.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Quick => "quick",
            Self::Merge => "merge",
            Self::Bogo => "bogo",
            Self::Sleep => "sleep",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
            Self::Bogo => "Bogo Sort",
            Self::Sleep => "Sleep Sort",
        }
    }

    /// Next algorithm in menu order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in menu order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn sort_fn(self) -> SortFn {
        DISPATCH[self as usize].1
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts `bubble`, `bubble-sort`, `bubble_sort` or `Bubble Sort`, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        let key = normalized.strip_suffix("_sort").unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}

/// Run-scoped inputs shared by every sorting routine.
pub(crate) struct SortContext<'a> {
    /// Random source; only bogo sort draws from it.
    pub rng: &'a mut SortRng,
    /// Shuffle budget for bogo sort.
    pub max_bogo_attempts: u32,
}

type SortFn = fn(&mut [Element], &mut FrameRecorder, &mut SortContext<'_>) -> Completion;

/// Dispatch table, indexed by `Algorithm as usize`.
const DISPATCH: [(Algorithm, SortFn); 7] = [
    (Algorithm::Bubble, bubble::sort),
    (Algorithm::Insertion, insertion::sort),
    (Algorithm::Selection, selection::sort),
    (Algorithm::Quick, quick::sort),
    (Algorithm::Merge, merge::sort),
    (Algorithm::Bogo, bogo::sort),
    (Algorithm::Sleep, sleep::sort),
];

/// Frame generator with per-run options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGenerator {
    max_bogo_attempts: u32,
}

impl Default for FrameGenerator {
    fn default() -> Self {
        Self {
            max_bogo_attempts: DEFAULT_BOGO_MAX_ATTEMPTS,
        }
    }
}

impl FrameGenerator {
    /// Generator with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the bogo sort shuffle budget.
    #[must_use]
    pub const fn with_max_bogo_attempts(mut self, attempts: u32) -> Self {
        self.max_bogo_attempts = attempts;
        self
    }

    /// Bogo sort shuffle budget.
    #[must_use]
    pub const fn max_bogo_attempts(&self) -> u32 {
        self.max_bogo_attempts
    }

    /// Sort a copy of `input` with `algorithm`, recording every frame.
    ///
    /// `input` is never modified. Empty and single-element inputs are valid
    /// and produce zero or trivial frames.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortscope::algorithms::{Algorithm, FrameGenerator};
    /// use sortscope::engine::rng::SortRng;
    ///
    /// let mut rng = SortRng::new(42);
    /// let frames = FrameGenerator::new().generate(Algorithm::Sleep, &[50, 10, 30], &mut rng);
    /// assert_eq!(frames.len(), 3);
    /// assert_eq!(frames.final_state(), &[10, 30, 50]);
    /// ```
    #[must_use]
    pub fn generate(
        &self,
        algorithm: Algorithm,
        input: &[Element],
        rng: &mut SortRng,
    ) -> FrameSequence {
        let mut state = input.to_vec();
        let mut recorder = FrameRecorder::new(algorithm, input.len());
        let mut ctx = SortContext {
            rng,
            max_bogo_attempts: self.max_bogo_attempts,
        };

        let completion = (algorithm.sort_fn())(&mut state, &mut recorder, &mut ctx);

        tracing::debug!(
            algorithm = algorithm.key(),
            input_len = input.len(),
            frames = recorder.len(),
            ?completion,
            "generated frame sequence"
        );

        recorder.finish(state, completion)
    }
}

/// Generate frames with default options.
#[must_use]
pub fn generate(algorithm: Algorithm, input: &[Element], rng: &mut SortRng) -> FrameSequence {
    FrameGenerator::default().generate(algorithm, input, rng)
}

/// Whether `values` is in non-decreasing order.
#[must_use]
pub fn is_sorted(values: &[Element]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
