//! Selection sort.

use super::SortContext;
use crate::frames::{Completion, Element, FrameRecorder};

/// Scans for the minimum recording `(i, j)` per candidate, then swaps it into
/// place recording `(i, min)`. The swap frame is recorded every pass, even
/// when the minimum is already in place.
pub(super) fn sort(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    _ctx: &mut SortContext<'_>,
) -> Completion {
    let n = state.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            recorder.record(state, i, j);
            if state[j] < state[min_idx] {
                min_idx = j;
            }
        }
        state.swap(i, min_idx);
        recorder.record(state, i, min_idx);
    }
    Completion::Sorted
}
