//! Insertion sort.

use super::SortContext;
use crate::frames::{Completion, Element, FrameRecorder};

/// Shifts larger elements right one at a time, recording `(j-1, j)` after
/// each shift, then records `(position, i)` once the key is placed.
pub(super) fn sort(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    _ctx: &mut SortContext<'_>,
) -> Completion {
    for i in 1..state.len() {
        let key = state[i];
        let mut j = i;
        while j > 0 && key < state[j - 1] {
            state[j] = state[j - 1];
            recorder.record(state, j - 1, j);
            j -= 1;
        }
        state[j] = key;
        recorder.record(state, j, i);
    }
    Completion::Sorted
}
