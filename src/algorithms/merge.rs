//! Top-down merge sort.

use super::SortContext;
use crate::frames::{Completion, Element, FrameRecorder};

pub(super) fn sort(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    _ctx: &mut SortContext<'_>,
) -> Completion {
    if state.len() > 1 {
        let right = state.len() - 1;
        merge_sort(state, recorder, 0, right);
    }
    Completion::Sorted
}

/// Sorts the inclusive range `left..=right`.
fn merge_sort(state: &mut [Element], recorder: &mut FrameRecorder, left: usize, right: usize) {
    if left < right {
        let mid = (left + right) / 2;
        merge_sort(state, recorder, left, mid);
        merge_sort(state, recorder, mid + 1, right);
        merge(state, recorder, left, mid, right);
    }
}

/// Merges `left..=mid` and `mid+1..=right`, recording `(k, k)` before and
/// after every write-back. Ties take from the left run.
fn merge(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    left: usize,
    mid: usize,
    right: usize,
) {
    let lo = state[left..=mid].to_vec();
    let hi = state[mid + 1..=right].to_vec();
    let (mut i, mut j) = (0, 0);

    for k in left..=right {
        recorder.record(state, k, k);
        let take_lo = j >= hi.len() || (i < lo.len() && lo[i] <= hi[j]);
        if take_lo {
            state[k] = lo[i];
            i += 1;
        } else {
            state[k] = hi[j];
            j += 1;
        }
        recorder.record(state, k, k);
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::{generate, Algorithm};
    use crate::engine::rng::SortRng;
    use crate::frames::Highlight;

    #[test]
    fn test_two_element_merge() {
        let seq = generate(Algorithm::Merge, &[4, 2], &mut SortRng::new(0));
        let trace: Vec<(Vec<i64>, Highlight)> = seq
            .iter()
            .map(|f| (f.snapshot().to_vec(), f.highlight()))
            .collect();
        assert_eq!(
            trace,
            vec![
                (vec![4, 2], Highlight::Pair(0, 0)),
                (vec![2, 2], Highlight::Pair(0, 0)),
                (vec![2, 2], Highlight::Pair(1, 1)),
                (vec![2, 4], Highlight::Pair(1, 1)),
            ]
        );
    }

    #[test]
    fn test_two_frames_per_write() {
        // n = 5 splits as [0..=2] / [3..=4]; writes: 2 + 3 + 2 + 5 = 12
        let seq = generate(Algorithm::Merge, &[5, 4, 3, 2, 1], &mut SortRng::new(0));
        assert_eq!(seq.len(), 24);
        for pair in seq.frames().chunks(2) {
            assert_eq!(pair[0].highlight(), pair[1].highlight());
        }
        assert_eq!(seq.final_state(), &[1, 2, 3, 4, 5]);
    }
}
