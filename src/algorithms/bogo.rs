//! Bogo sort, bounded.

use super::{is_sorted, SortContext};
use crate::frames::{Completion, Element, FrameRecorder};

/// Shuffle budget after which bogo sort gives up.
pub const DEFAULT_BOGO_MAX_ATTEMPTS: u32 = 10_000;

/// Records an unhighlighted frame before each shuffle, and one more once
/// the array is sorted. Stops unsorted when the shuffle budget runs out.
pub(super) fn sort(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    ctx: &mut SortContext<'_>,
) -> Completion {
    let mut attempts = 0_u32;
    while !is_sorted(state) {
        if attempts >= ctx.max_bogo_attempts {
            tracing::warn!(
                attempts,
                len = state.len(),
                "bogo sort gave up before reaching a sorted permutation"
            );
            return Completion::AttemptCapReached { attempts };
        }
        recorder.record_plain(state);
        ctx.rng.shuffle(state);
        attempts += 1;
    }

    recorder.record_plain(state);
    tracing::debug!(attempts, "bogo sort reached a sorted permutation");
    Completion::Sorted
}
