//! Dense tally of trial sums.

/// Occurrence counts for every sum in `[min_sum, max_sum]` inclusive.
///
/// The range is fixed at construction from the exact extreme sums, so
/// every attainable result has a slot even if it is never drawn. Stored
/// as a Vec indexed by offset from `min_sum`; iteration is always in
/// ascending sum order.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    min_sum: i64,
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Creates a zero-filled table spanning `min_sum..=max_sum`.
    ///
    /// The range collapses to a single slot when the two bounds coincide
    /// (zero draws, or a hat of identical values).
    pub fn new(min_sum: i64, max_sum: i64) -> Self {
        debug_assert!(min_sum <= max_sum);
        Self {
            min_sum,
            counts: vec![0; (max_sum - min_sum + 1) as usize],
        }
    }

    pub fn min_sum(&self) -> i64 {
        self.min_sum
    }

    pub fn max_sum(&self) -> i64 {
        self.min_sum + self.counts.len() as i64 - 1
    }

    /// Tallies one trial result. The result must lie within the table's
    /// range; anything else means the draw and extreme logic disagree.
    pub fn record(&mut self, sum: i64) {
        debug_assert!(
            sum >= self.min_sum && sum <= self.max_sum(),
            "trial sum {} outside [{}, {}]",
            sum,
            self.min_sum,
            self.max_sum()
        );
        self.counts[(sum - self.min_sum) as usize] += 1;
    }

    pub fn count(&self, sum: i64) -> u64 {
        if sum < self.min_sum || sum > self.max_sum() {
            return 0;
        }
        self.counts[(sum - self.min_sum) as usize]
    }

    /// All `(sum, count)` pairs in ascending sum order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &count)| (self.min_sum + i as i64, count))
    }

    /// Highest count across the whole table (zero-count rows included).
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Total number of recorded trials.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The most frequent sum. Ties go to the smallest sum: the scan runs
    /// in ascending order and only a strictly greater count displaces the
    /// current pick.
    pub fn mode(&self) -> i64 {
        let mut best_sum = self.min_sum;
        let mut best_count = 0;
        for (sum, count) in self.iter() {
            if count > best_count {
                best_count = count;
                best_sum = sum;
            }
        }
        best_sum
    }

    /// Arithmetic mean of all recorded trial sums.
    pub fn mean(&self) -> f64 {
        let weighted: i64 = self.iter().map(|(sum, count)| sum * count as i64).sum();
        weighted as f64 / self.total() as f64
    }
}
