//! Property tests over generated frame sequences and playback.

use std::time::Duration;

use proptest::prelude::*;
use sortscope::algorithms::{generate, is_sorted, Algorithm, FrameGenerator};
use sortscope::player::RecordingPacer;
use sortscope::prelude::*;

fn sorted_copy(input: &[Element]) -> Vec<Element> {
    let mut sorted = input.to_vec();
    sorted.sort_unstable();
    sorted
}

fn deterministic_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(vec![
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Sleep,
    ])
}

proptest! {
    #[test]
    fn prop_final_state_is_sorted_permutation(
        algorithm in deterministic_algorithm(),
        input in prop::collection::vec(10i64..100, 0..40),
    ) {
        let seq = generate(algorithm, &input, &mut SortRng::new(0));
        let expected = sorted_copy(&input);
        prop_assert_eq!(seq.final_state(), expected.as_slice());
        prop_assert!(seq.completion().is_sorted());
        if let Some(last) = seq.last() {
            prop_assert_eq!(last.snapshot(), seq.final_state());
        }
    }

    #[test]
    fn prop_snapshot_length_constant(
        algorithm in deterministic_algorithm(),
        input in prop::collection::vec(-50i64..50, 0..40),
    ) {
        let seq = generate(algorithm, &input, &mut SortRng::new(0));
        prop_assert_eq!(seq.input_len(), input.len());
        for frame in &seq {
            prop_assert_eq!(frame.len(), input.len());
        }
    }

    #[test]
    fn prop_highlights_in_bounds(
        algorithm in deterministic_algorithm(),
        input in prop::collection::vec(0i64..20, 1..30),
    ) {
        let seq = generate(algorithm, &input, &mut SortRng::new(0));
        for frame in &seq {
            if let Some((a, b)) = frame.highlight().pair() {
                prop_assert!(a < input.len() && b < input.len());
            }
        }
    }

    #[test]
    fn prop_selection_frame_count(input in prop::collection::vec(0i64..1000, 0..40)) {
        // one frame per comparison plus one swap frame per position
        let n = input.len();
        let seq = generate(Algorithm::Selection, &input, &mut SortRng::new(0));
        prop_assert_eq!(seq.len(), n + n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn prop_bogo_respects_cap(
        seed in 0u64..1000,
        cap in 0u32..50,
        input in prop::collection::vec(0i64..100, 0..8),
    ) {
        let seq = FrameGenerator::new()
            .with_max_bogo_attempts(cap)
            .generate(Algorithm::Bogo, &input, &mut SortRng::new(seed));
        match seq.completion() {
            Completion::Sorted => prop_assert!(is_sorted(seq.final_state())),
            Completion::AttemptCapReached { attempts } => {
                prop_assert_eq!(attempts, cap);
                prop_assert_eq!(seq.len(), cap as usize);
            }
        }
        prop_assert!(seq.len() <= cap as usize + 1);
    }

    #[test]
    fn prop_same_seed_same_sequence(
        algorithm in prop::sample::select(Algorithm::ALL.to_vec()),
        seed in 0u64..10_000,
        input in prop::collection::vec(0i64..100, 0..6),
    ) {
        let a = generate(algorithm, &input, &mut SortRng::new(seed));
        let b = generate(algorithm, &input, &mut SortRng::new(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_player_preserves_order(input in prop::collection::vec(0i64..100, 0..25)) {
        let seq = generate(Algorithm::Insertion, &input, &mut SortRng::new(0));
        let mut seen = Vec::new();
        let mut sink = FnSink(|frame: &Frame| {
            seen.push(frame.clone());
            Ok::<(), std::convert::Infallible>(())
        });

        let delay = Duration::from_millis(5);
        let mut player = FramePlayer::with_pacer(delay, RecordingPacer::default());
        let outcome = player.play(&seq, &mut sink, &CancelToken::new()).unwrap();

        prop_assert_eq!(outcome, PlaybackOutcome::Completed { frames: seq.len() });
        prop_assert_eq!(seen.as_slice(), seq.frames());
        prop_assert_eq!(player.pacer().pauses().len(), seq.len().saturating_sub(1));
    }
}

#[test]
fn bubble_early_exit_on_sorted_input() {
    let seq = generate(Algorithm::Bubble, &[1, 2, 3, 4, 5], &mut SortRng::new(0));
    assert_eq!(seq.len(), 4);
}

#[test]
fn quick_sort_trace_matches() {
    let seq = generate(Algorithm::Quick, &[3, 1, 2], &mut SortRng::new(0));
    let trace: Vec<(Vec<Element>, Highlight)> = seq
        .iter()
        .map(|f| (f.snapshot().to_vec(), f.highlight()))
        .collect();
    assert_eq!(
        trace,
        vec![
            (vec![3, 1, 2], Highlight::Pair(0, 2)),
            (vec![3, 1, 2], Highlight::Pair(1, 2)),
            (vec![1, 3, 2], Highlight::Pair(0, 1)),
            (vec![1, 2, 3], Highlight::Pair(1, 2)),
        ]
    );
}

#[test]
fn merge_sort_records_each_write_twice() {
    let seq = generate(Algorithm::Merge, &[4, 2], &mut SortRng::new(0));
    let snapshots: Vec<Vec<Element>> = seq.iter().map(|f| f.snapshot().to_vec()).collect();
    assert_eq!(
        snapshots,
        vec![vec![4, 2], vec![2, 2], vec![2, 2], vec![2, 4]]
    );
}

#[test]
fn cancelled_playback_skips_completion() {
    struct CountingSink {
        rendered: usize,
        completed: bool,
        cancel: CancelToken,
    }

    impl FrameSink for CountingSink {
        type Error = std::convert::Infallible;

        fn render(&mut self, _frame: &Frame, _delay: Duration) -> Result<(), Self::Error> {
            self.rendered += 1;
            if self.rendered == 2 {
                self.cancel.cancel();
            }
            Ok(())
        }

        fn complete(&mut self, _sequence: &FrameSequence) -> Result<(), Self::Error> {
            self.completed = true;
            Ok(())
        }
    }

    let seq = generate(Algorithm::Selection, &[5, 4, 3, 2, 1], &mut SortRng::new(0));
    let cancel = CancelToken::new();
    let mut sink = CountingSink {
        rendered: 0,
        completed: false,
        cancel: cancel.clone(),
    };
    let mut player = FramePlayer::with_pacer(Duration::ZERO, RecordingPacer::default());
    let outcome = player.play(&seq, &mut sink, &cancel).unwrap();

    assert_eq!(
        outcome,
        PlaybackOutcome::Cancelled {
            played: 2,
            total: seq.len()
        }
    );
    assert!(!sink.completed);
}
