//! Sleep sort, as ordered emission.
//!
//! Instead of timers, indices are stably sorted by value and the values are
//! emitted one by one into a zero-filled output buffer.

use super::SortContext;
use crate::frames::{Completion, Element, FrameRecorder};

pub(super) fn sort(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    _ctx: &mut SortContext<'_>,
) -> Completion {
    let mut order: Vec<usize> = (0..state.len()).collect();
    order.sort_by_key(|&i| state[i]);

    let mut output: Vec<Element> = vec![0; state.len()];
    for (slot, &source) in order.iter().enumerate() {
        output[slot] = state[source];
        recorder.record(&output, slot, slot);
    }

    state.copy_from_slice(&output);
    Completion::Sorted
}
