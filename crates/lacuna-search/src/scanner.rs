// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Local Gap Scanner
//!
//! Walks the primes inside one worker's assignment by repeated next-prime
//! advancement and records the largest gap whose prime pair is fully
//! contained in the worker's scan window.
//!
//! For an assignment `[start, end)` the scan window is `(start, end]`: the
//! walk begins at the smallest prime strictly greater than `start` and a
//! pair `(current, candidate)` contributes only when `candidate <= end`.
//! Each prime in the window is touched exactly twice, once as the right end
//! of a gap and once as the left end of the next; the cost is dominated by
//! the engine's next-prime primitive.
//!
//! A gap replaces the running maximum only on strict improvement, so the
//! earliest witness of the maximal size is the one that survives. A window
//! too small to contain two primes yields an empty [`LocalResult`].

use lacuna_core::num::primes::PrimeEngine;
use lacuna_model::range::WorkerAssignment;
use lacuna_model::result::LocalResult;

/// What one finished scan produced: the frozen local maximum plus scan
/// instrumentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// The worker's local maximum, frozen at scan end.
    pub result: LocalResult,
    /// Number of next-prime advancements the scan performed.
    pub advancements: u64,
}

/// Scans assignments for their largest fully-contained prime gap.
///
/// The scanner borrows its engine so a group of scanners can share one
/// engine across worker threads.
#[derive(Debug)]
pub struct GapScanner<'a, E> {
    engine: &'a E,
}

impl<'a, E> GapScanner<'a, E>
where
    E: PrimeEngine,
{
    /// Creates a scanner over the given prime engine.
    #[inline]
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// Scans `assignment` and returns the frozen local result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::num::primes::NumPrimeEngine;
    /// # use lacuna_model::range::SearchRange;
    /// # use lacuna_search::scanner::GapScanner;
    /// # use num_bigint::BigUint;
    ///
    /// let engine = NumPrimeEngine;
    /// let range = SearchRange::from_u64(100).unwrap();
    /// let assignment = range.assignment(0, 1).unwrap();
    ///
    /// let outcome = GapScanner::new(&engine).scan(&assignment);
    /// assert_eq!(*outcome.result.max_gap(), BigUint::from(8u32));
    /// ```
    pub fn scan(&self, assignment: &WorkerAssignment) -> ScanOutcome {
        let start = assignment.interval().start();
        let end = assignment.interval().end();

        let mut result = LocalResult::empty();
        let mut advancements = 0u64;

        let mut current = self.engine.next_prime(start);
        advancements += 1;

        while &current < end {
            let candidate = self.engine.next_prime(&current);
            advancements += 1;

            // Only gaps fully contained in the scan window (start, end]
            // count; the pair straddling into the next assignment is
            // deliberately left to no one.
            if &candidate <= end {
                result.observe(&current, &candidate);
            }

            current = candidate;
        }

        tracing::debug!(
            rank = assignment.rank(),
            max_gap = %result.max_gap(),
            advancements,
            "local scan finished"
        );

        ScanOutcome {
            result,
            advancements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacuna_core::num::primes::NumPrimeEngine;
    use lacuna_model::range::SearchRange;
    use num_bigint::BigUint;

    fn scan_rank(n: u64, worker_count: usize, rank: usize) -> LocalResult {
        let engine = NumPrimeEngine;
        let range = SearchRange::from_u64(n).unwrap();
        let assignment = range.assignment(rank, worker_count).unwrap();
        GapScanner::new(&engine).scan(&assignment).result
    }

    fn witness_pair(result: &LocalResult) -> (u64, u64) {
        let witness = result.witness().expect("result has a witness");
        (
            u64::try_from(witness.lower()).unwrap(),
            u64::try_from(witness.upper()).unwrap(),
        )
    }

    #[test]
    fn test_full_range_below_100() {
        // The largest gap below 100 is 8, between 89 and 97.
        let result = scan_rank(100, 1, 0);
        assert_eq!(*result.max_gap(), BigUint::from(8u32));
        assert_eq!(witness_pair(&result), (89, 97));
    }

    #[test]
    fn test_earliest_witness_survives_equal_gap() {
        // Below 30 the maximal gap of 4 occurs twice: (7, 11) then (13, 17)
        // and (19, 23). The first witness must be the one reported.
        let result = scan_rank(30, 1, 0);
        assert_eq!(*result.max_gap(), BigUint::from(4u32));
        assert_eq!(witness_pair(&result), (7, 11));
    }

    #[test]
    fn test_two_worker_halves_of_20() {
        // Window (0, 10]: gaps among 2, 3, 5, 7. The pair (7, 11) leaks out
        // of the window and must not count.
        let first = scan_rank(20, 2, 0);
        assert_eq!(*first.max_gap(), BigUint::from(2u32));
        assert_eq!(witness_pair(&first), (3, 5));

        // Window (10, 20]: 11, 13, 17, 19.
        let second = scan_rank(20, 2, 1);
        assert_eq!(*second.max_gap(), BigUint::from(4u32));
        assert_eq!(witness_pair(&second), (13, 17));
    }

    #[test]
    fn test_seam_prime_starts_the_upper_window() {
        // 11 sits just above the seam of (0, 11] / (11, 22]; the upper
        // window starts at 13, so (11, 13) belongs to the lower rank.
        let first = scan_rank(22, 2, 0);
        let second = scan_rank(22, 2, 1);
        assert_eq!(witness_pair(&first), (7, 11));
        assert_eq!(*second.max_gap(), BigUint::from(4u32));
        assert_eq!(witness_pair(&second), (13, 17));
    }

    #[test]
    fn test_window_without_two_primes_is_empty() {
        // (0, 2] contains a single prime and therefore no gap.
        let result = scan_rank(2, 1, 0);
        assert!(result.is_empty());
        assert_eq!(*result.max_gap(), BigUint::ZERO);

        // (0, 1] contains no prime at all.
        let result = scan_rank(1, 1, 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_assignment_is_empty() {
        // With more workers than units some assignments are empty intervals.
        let result = scan_rank(3, 5, 4);
        assert!(result.is_empty());
    }

    #[test]
    fn test_matches_exhaustive_reference_below_200() {
        // Reference computation over a hardcoded prime table.
        const PRIMES: &[u64] = &[
            2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79,
            83, 89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167,
            173, 179, 181, 191, 193, 197, 199,
        ];

        let (mut best_gap, mut best_pair) = (0u64, (0u64, 0u64));
        for pair in PRIMES.windows(2) {
            let gap = pair[1] - pair[0];
            if gap > best_gap {
                best_gap = gap;
                best_pair = (pair[0], pair[1]);
            }
        }

        let result = scan_rank(200, 1, 0);
        assert_eq!(*result.max_gap(), BigUint::from(best_gap));
        assert_eq!(witness_pair(&result), best_pair);
    }

    #[test]
    fn test_advancements_count_every_step() {
        let engine = NumPrimeEngine;
        let range = SearchRange::from_u64(10).unwrap();
        let assignment = range.assignment(0, 1).unwrap();
        let outcome = GapScanner::new(&engine).scan(&assignment);
        // Walk: 2, 3, 5, 7, 11. Five advancements, four primes in the window.
        assert_eq!(outcome.advancements, 5);
    }
}
