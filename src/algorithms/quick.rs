//! Quicksort with Lomuto partitioning.

use super::SortContext;
use crate::frames::{Completion, Element, FrameRecorder};

pub(super) fn sort(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    _ctx: &mut SortContext<'_>,
) -> Completion {
    if state.len() > 1 {
        let high = state.len() - 1;
        quicksort(state, recorder, 0, high);
    }
    Completion::Sorted
}

/// Sorts the inclusive range `low..=high`.
fn quicksort(state: &mut [Element], recorder: &mut FrameRecorder, low: usize, high: usize) {
    if low < high {
        let pivot = partition(state, recorder, low, high);
        if pivot > low {
            quicksort(state, recorder, low, pivot - 1);
        }
        quicksort(state, recorder, pivot + 1, high);
    }
}

/// Partitions around `state[high]` and returns the pivot's final index.
///
/// `store` is the slot the next smaller-than-pivot element moves into.
fn partition(
    state: &mut [Element],
    recorder: &mut FrameRecorder,
    low: usize,
    high: usize,
) -> usize {
    let pivot = state[high];
    let mut store = low;
    for j in low..high {
        recorder.record(state, j, high);
        if state[j] < pivot {
            state.swap(store, j);
            recorder.record(state, store, j);
            store += 1;
        }
    }
    state.swap(store, high);
    recorder.record(state, store, high);
    store
}

#[cfg(test)]
mod tests {
    use crate::algorithms::{generate, Algorithm};
    use crate::engine::rng::SortRng;
    use crate::frames::Highlight;

    #[test]
    fn test_partition_trace() {
        let seq = generate(Algorithm::Quick, &[3, 1, 2], &mut SortRng::new(0));
        let trace: Vec<(Vec<i64>, Highlight)> = seq
            .iter()
            .map(|f| (f.snapshot().to_vec(), f.highlight()))
            .collect();
        assert_eq!(
            trace,
            vec![
                // pivot 2: compare 3, compare 1
                (vec![3, 1, 2], Highlight::Pair(0, 2)),
                (vec![3, 1, 2], Highlight::Pair(1, 2)),
                // 1 < 2 moves into slot 0
                (vec![1, 3, 2], Highlight::Pair(0, 1)),
                // pivot placed at slot 1
                (vec![1, 2, 3], Highlight::Pair(1, 2)),
            ]
        );
    }

    #[test]
    fn test_pivot_at_range_start() {
        // pivot 1 is the minimum, lands at index 0, left recursion is empty
        let seq = generate(Algorithm::Quick, &[3, 2, 1], &mut SortRng::new(0));
        assert_eq!(seq.final_state(), &[1, 2, 3]);
        assert_eq!(seq.frames()[2].snapshot(), &[1, 2, 3]);
        assert_eq!(seq.frames()[2].highlight(), Highlight::Pair(0, 2));
    }

    #[test]
    fn test_duplicates() {
        let seq = generate(Algorithm::Quick, &[5, 5, 1, 5, 1], &mut SortRng::new(0));
        assert_eq!(seq.final_state(), &[1, 1, 5, 5, 5]);
    }
}
