//! Bubble sort with early exit.

use super::SortContext;
use crate::frames::{Completion, Element, FrameRecorder};

/// Records `(j, j+1)` before each comparison and again after each swap.
/// A pass without swaps ends the run.
pub(super) fn sort(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    _ctx: &mut SortContext<'_>,
) -> Completion {
    let n = state.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            recorder.record(state, j, j + 1);
            if state[j] > state[j + 1] {
                state.swap(j, j + 1);
                swapped = true;
                recorder.record(state, j, j + 1);
            }
        }
        if !swapped {
            break;
        }
    }
    Completion::Sorted
}
