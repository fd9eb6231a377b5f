//! Deterministic random source.
//!
//! Wraps PCG64 with partitioned streams so the initial array and the bogo
//! sort shuffles draw from independent sequences. Given the same master
//! seed, every run produces the same input and the same shuffles.

use std::ops::Range;

use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::{SortError, SortResult};

/// Golden-ratio increment used to spread stream seeds apart.
const STREAM_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone)]
pub struct SortRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Next stream index handed out by `partition`.
    stream: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SortRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            stream: 0,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Create an RNG from a fresh OS-provided seed.
    ///
    /// The seed is still available through [`SortRng::master_seed`] so an
    /// unseeded run can be replayed later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Get the next stream index.
    #[must_use]
    pub const fn stream(&self) -> u64 {
        self.stream
    }

    /// Split off `n` independent generators derived from the master seed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortscope::engine::rng::SortRng;
    ///
    /// let mut rng = SortRng::new(42);
    /// let streams = rng.partition(2);
    /// assert_eq!(streams.len(), 2);
    /// assert_eq!(rng.stream(), 2);
    /// ```
    #[must_use]
    pub fn partition(&mut self, n: usize) -> Vec<Self> {
        let partitions: Vec<Self> = (0..n as u64)
            .map(|i| self.derive(self.stream + i))
            .collect();

        self.stream += n as u64;
        partitions
    }

    /// Split off the next independent stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let child = self.derive(self.stream);
        self.stream += 1;
        child
    }

    fn derive(&self, stream: u64) -> Self {
        let seed = self
            .master_seed
            .wrapping_add(stream.wrapping_add(1).wrapping_mul(STREAM_SPREAD));
        Self {
            master_seed: self.master_seed,
            stream,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Generate a random u64.
    pub fn gen_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Draw `count` distinct values from `range`, in random order.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::SampleTooLarge`] if the range holds fewer than
    /// `count` distinct values.
    pub fn sample_distinct(&mut self, count: usize, range: Range<i64>) -> SortResult<Vec<i64>> {
        let available = usize::try_from(range.end.saturating_sub(range.start)).unwrap_or(0);
        if count > available {
            return Err(SortError::SampleTooLarge {
                requested: count,
                available,
            });
        }

        Ok(index::sample(&mut self.rng, available, count)
            .into_iter()
            .map(|offset| range.start + offset as i64)
            .collect())
    }

    /// Uniformly permute `items` in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Property: Same seed produces same sample.
    #[test]
    fn test_reproducibility() {
        let mut rng1 = SortRng::new(42);
        let mut rng2 = SortRng::new(42);

        let a = rng1.sample_distinct(15, 10..100).unwrap();
        let b = rng2.sample_distinct(15, 10..100).unwrap();

        assert_eq!(a, b, "Same seed must produce identical samples");
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SortRng::new(42);
        let mut rng2 = SortRng::new(43);

        let a = rng1.sample_distinct(30, 10..100).unwrap();
        let b = rng2.sample_distinct(30, 10..100).unwrap();

        assert_ne!(a, b, "Different seeds must produce different samples");
    }

    #[test]
    fn test_sample_distinct_in_range_and_unique() {
        let mut rng = SortRng::new(7);
        let values = rng.sample_distinct(90, 10..100).unwrap();
        assert_eq!(values.len(), 90);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 90, "values must be distinct");
        assert!(values.iter().all(|v| (10..100).contains(v)));
    }

    #[test]
    fn test_sample_too_large() {
        let mut rng = SortRng::new(7);
        let err = rng.sample_distinct(91, 10..100).unwrap_err();
        assert!(matches!(
            err,
            SortError::SampleTooLarge {
                requested: 91,
                available: 90
            }
        ));
    }

    #[test]
    fn test_sample_empty_range() {
        let mut rng = SortRng::new(7);
        assert!(rng.sample_distinct(0, 5..5).unwrap().is_empty());
        assert!(rng.sample_distinct(1, 5..3).is_err());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SortRng::new(11);
        let mut items: Vec<i64> = (0..20).collect();
        rng.shuffle(&mut items);

        let mut restored = items.clone();
        restored.sort_unstable();
        assert_eq!(restored, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_partition_independence() {
        let mut rng = SortRng::new(42);
        let mut streams = rng.partition(2);
        let a: Vec<u64> = (0..8).map(|_| streams[0].gen_u64()).collect();
        let b: Vec<u64> = (0..8).map(|_| streams[1].gen_u64()).collect();
        assert_ne!(a, b, "Partitions must be independent");
    }

    #[test]
    fn test_partition_stream_increment() {
        let mut rng = SortRng::new(42);
        let _ = rng.partition(2);
        assert_eq!(rng.stream(), 2);
        let _ = rng.partition(3);
        assert_eq!(rng.stream(), 5);
    }

    #[test]
    fn test_fork_matches_partition() {
        let mut a = SortRng::new(5);
        let mut b = SortRng::new(5);
        let mut forked = a.fork();
        let mut parts = b.partition(1);
        assert_eq!(forked.gen_u64(), parts[0].gen_u64());
        assert_eq!(a.stream(), b.stream());
    }

    #[test]
    fn test_from_entropy_exposes_seed() {
        let rng = SortRng::from_entropy();
        let mut replay = SortRng::new(rng.master_seed());
        let mut original = rng;
        assert_eq!(original.gen_u64(), replay.gen_u64());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_sample_reproducible(seed in 0u64..u64::MAX, count in 0usize..=90) {
            let a = SortRng::new(seed).sample_distinct(count, 10..100).unwrap();
            let b = SortRng::new(seed).sample_distinct(count, 10..100).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_partition_count(seed in 0u64..u64::MAX, n in 1usize..16) {
            let mut rng = SortRng::new(seed);
            prop_assert_eq!(rng.partition(n).len(), n);
        }
    }
}
