//! Frames: the recorded animation steps of one sort run.
//!
//! A [`Frame`] is a deep copy of the working array plus the pair of indices
//! the algorithm was touching at that moment. A [`FrameSequence`] is the
//! complete, immutable trace of one run, built by a [`FrameRecorder`] while
//! the algorithm executes and never modified afterwards.

use serde::{Deserialize, Serialize};

use crate::algorithms::Algorithm;
use crate::error::SortResult;

/// Value stored in the array being sorted.
pub type Element = i64;

/// Indices highlighted in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// No meaningful pair (bogo sort shuffles).
    None,
    /// Two indices into the snapshot; may be equal.
    Pair(usize, usize),
}

impl Highlight {
    /// Whether `index` is one of the highlighted positions.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        match self {
            Self::None => false,
            Self::Pair(a, b) => a == index || b == index,
        }
    }

    /// The pair as a tuple, or `None` when nothing is highlighted.
    #[must_use]
    pub const fn pair(self) -> Option<(usize, usize)> {
        match self {
            Self::None => None,
            Self::Pair(a, b) => Some((a, b)),
        }
    }
}

/// One recorded animation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    snapshot: Vec<Element>,
    highlight: Highlight,
}

impl Frame {
    /// Create a frame from an owned snapshot.
    #[must_use]
    pub const fn new(snapshot: Vec<Element>, highlight: Highlight) -> Self {
        Self {
            snapshot,
            highlight,
        }
    }

    /// Array state at this step.
    #[must_use]
    pub fn snapshot(&self) -> &[Element] {
        &self.snapshot
    }

    /// Highlighted index pair.
    #[must_use]
    pub const fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Whether position `index` is highlighted.
    #[must_use]
    pub const fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.contains(index)
    }

    /// Number of elements in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}

/// How a generation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Completion {
    /// The final array state is sorted.
    Sorted,
    /// Bogo sort gave up after exhausting its shuffle budget.
    AttemptCapReached {
        /// Shuffles performed before giving up.
        attempts: u32,
    },
}

impl Completion {
    /// Whether the run ended with a sorted array.
    #[must_use]
    pub const fn is_sorted(self) -> bool {
        matches!(self, Self::Sorted)
    }
}

/// The immutable trace of one sort run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSequence {
    algorithm: Algorithm,
    input_len: usize,
    frames: Vec<Frame>,
    final_state: Vec<Element>,
    completion: Completion,
}

impl FrameSequence {
    /// Algorithm that produced this sequence.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Length of the input array (and of every snapshot).
    #[must_use]
    pub const fn input_len(&self) -> usize {
        self.input_len
    }

    /// All frames in chronological order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Iterate frames in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Frame at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Last recorded frame.
    #[must_use]
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frame was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Array state once the algorithm returned.
    #[must_use]
    pub fn final_state(&self) -> &[Element] {
        &self.final_state
    }

    /// How the run ended.
    #[must_use]
    pub const fn completion(&self) -> Completion {
        self.completion
    }

    /// Content hash over every snapshot and highlight, in order.
    ///
    /// Two sequences with the same fingerprint replay identically.
    #[must_use]
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.algorithm.key().as_bytes());
        hasher.update(&(self.input_len as u64).to_le_bytes());
        for frame in &self.frames {
            match frame.highlight {
                Highlight::None => {
                    hasher.update(&[0]);
                }
                Highlight::Pair(a, b) => {
                    hasher.update(&[1]);
                    hasher.update(&(a as u64).to_le_bytes());
                    hasher.update(&(b as u64).to_le_bytes());
                }
            }
            for value in &frame.snapshot {
                hasher.update(&value.to_le_bytes());
            }
        }
        hasher.finalize()
    }

    /// Serialize the sequence as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> SortResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a sequence previously written by [`FrameSequence::to_json`].
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed.
    pub fn from_json(json: &str) -> SortResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Append-only frame log used by the sorting routines.
#[derive(Debug)]
pub struct FrameRecorder {
    algorithm: Algorithm,
    input_len: usize,
    frames: Vec<Frame>,
}

impl FrameRecorder {
    /// Start recording a run of `algorithm` over `input_len` elements.
    #[must_use]
    pub const fn new(algorithm: Algorithm, input_len: usize) -> Self {
        Self {
            algorithm,
            input_len,
            frames: Vec::new(),
        }
    }

    /// Snapshot `state` with indices `a` and `b` highlighted.
    pub fn record(&mut self, state: &[Element], a: usize, b: usize) {
        self.push(state, Highlight::Pair(a, b));
    }

    /// Snapshot `state` without highlight.
    pub fn record_plain(&mut self, state: &[Element]) {
        self.push(state, Highlight::None);
    }

    fn push(&mut self, state: &[Element], highlight: Highlight) {
        debug_assert_eq!(state.len(), self.input_len, "snapshot length changed");
        if let Highlight::Pair(a, b) = highlight {
            debug_assert!(a < state.len() && b < state.len(), "highlight out of bounds");
        }
        self.frames.push(Frame::new(state.to_vec(), highlight));
    }

    /// Frames recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Seal the recording.
    #[must_use]
    pub fn finish(self, final_state: Vec<Element>, completion: Completion) -> FrameSequence {
        FrameSequence {
            algorithm: self.algorithm,
            input_len: self.input_len,
            frames: self.frames,
            final_state,
            completion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sequence() -> FrameSequence {
        let mut recorder = FrameRecorder::new(Algorithm::Bubble, 3);
        recorder.record(&[3, 1, 2], 0, 1);
        recorder.record(&[1, 3, 2], 0, 1);
        recorder.record_plain(&[1, 3, 2]);
        recorder.finish(vec![1, 2, 3], Completion::Sorted)
    }

    #[test]
    fn test_highlight_contains() {
        assert!(Highlight::Pair(1, 4).contains(1));
        assert!(Highlight::Pair(1, 4).contains(4));
        assert!(!Highlight::Pair(1, 4).contains(2));
        assert!(!Highlight::None.contains(0));
        assert_eq!(Highlight::Pair(2, 2).pair(), Some((2, 2)));
        assert_eq!(Highlight::None.pair(), None);
    }

    #[test]
    fn test_recorder_snapshots_are_copies() {
        let mut state = vec![5, 4];
        let mut recorder = FrameRecorder::new(Algorithm::Bubble, 2);
        recorder.record(&state, 0, 1);
        state.swap(0, 1);
        recorder.record(&state, 0, 1);
        let seq = recorder.finish(state, Completion::Sorted);

        assert_eq!(seq.frames()[0].snapshot(), &[5, 4]);
        assert_eq!(seq.frames()[1].snapshot(), &[4, 5]);
    }

    #[test]
    fn test_sequence_accessors() {
        let seq = sample_sequence();
        assert_eq!(seq.algorithm(), Algorithm::Bubble);
        assert_eq!(seq.input_len(), 3);
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(seq.final_state(), &[1, 2, 3]);
        assert!(seq.completion().is_sorted());
        assert_eq!(seq.last().map(Frame::highlight), Some(Highlight::None));
        assert_eq!((&seq).into_iter().count(), 3);
    }

    #[test]
    fn test_fingerprint_stable_and_sensitive() {
        let a = sample_sequence();
        let b = sample_sequence();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let mut recorder = FrameRecorder::new(Algorithm::Bubble, 3);
        recorder.record(&[3, 1, 2], 0, 2);
        let c = recorder.finish(vec![3, 1, 2], Completion::Sorted);
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_json_round_trip() {
        let seq = sample_sequence();
        let json = seq.to_json().unwrap();
        assert!(json.contains("\"bubble\""));
        let restored = FrameSequence::from_json(&json).unwrap();
        assert_eq!(restored, seq);
    }

    #[test]
    fn test_completion_cap_reached() {
        let c = Completion::AttemptCapReached { attempts: 10 };
        assert!(!c.is_sorted());
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("attempt_cap_reached"));
    }
}
