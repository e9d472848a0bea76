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

//! # Search Range and Worker Assignments
//!
//! The validated global input of a run and its division into per-worker
//! sub-ranges. A [`SearchRange`] is created once from configuration and
//! never mutated; a [`WorkerAssignment`] is derived once per worker from
//! the range, the worker's rank, and the group size.
//!
//! ## Boundary convention
//!
//! Assignments partition `[0, N)` as half-open intervals. A worker holding
//! `[start, end)` scans the primes in `(start, end]`: its first scanned
//! prime is the smallest prime strictly greater than `start`, and a gap
//! only counts when its upper prime is at most `end`. Under this convention
//! the scanned prime sets of all ranks are disjoint and their union is
//! exactly the primes in `[1, N]`; a prime sitting on an interior seam
//! belongs to the lower rank as a right gap endpoint and to the upper rank
//! as a starting point. The gap that straddles a seam is intentionally not
//! observed by either side; this is a documented accuracy limitation,
//! accepted instead of coordinating boundary primes across workers.

use lacuna_core::math::interval::ClosedOpenInterval;
use lacuna_core::math::partition::{partition, PartitionError};
use num_bigint::BigUint;

/// The error type for model construction and assignment derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The upper bound is zero; the range contains nothing to scan.
    InvalidUpperBound,
    /// The assignment could not be derived from rank and group size.
    Partition(PartitionError),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUpperBound => {
                write!(f, "Upper bound must be a positive integer")
            }
            Self::Partition(e) => write!(f, "Partition error: {}", e),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<PartitionError> for ModelError {
    fn from(e: PartitionError) -> Self {
        Self::Partition(e)
    }
}

/// The global upper bound of one search run.
///
/// Read-only after construction. The search considers every prime in
/// `[1, upper_bound]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRange {
    upper_bound: BigUint,
}

impl SearchRange {
    /// Creates a new `SearchRange`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidUpperBound`] if `upper_bound` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_model::range::SearchRange;
    /// # use num_bigint::BigUint;
    ///
    /// assert!(SearchRange::new(BigUint::from(100u32)).is_ok());
    /// assert!(SearchRange::new(BigUint::from(0u32)).is_err());
    /// ```
    pub fn new(upper_bound: BigUint) -> Result<Self, ModelError> {
        if upper_bound == BigUint::ZERO {
            return Err(ModelError::InvalidUpperBound);
        }
        Ok(Self { upper_bound })
    }

    /// Convenience constructor from a machine integer.
    pub fn from_u64(upper_bound: u64) -> Result<Self, ModelError> {
        Self::new(BigUint::from(upper_bound))
    }

    /// Returns the upper bound of the search.
    #[inline]
    pub fn upper_bound(&self) -> &BigUint {
        &self.upper_bound
    }

    /// Derives rank `rank`'s assignment for a group of `worker_count` workers.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Partition`] if the group is empty or the rank
    /// is not a member of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_model::range::SearchRange;
    /// # use num_bigint::BigUint;
    ///
    /// let range = SearchRange::from_u64(20).unwrap();
    /// let assignment = range.assignment(1, 2).unwrap();
    /// assert_eq!(assignment.rank(), 1);
    /// assert_eq!(*assignment.interval().start(), BigUint::from(10u32));
    /// assert_eq!(*assignment.interval().end(), BigUint::from(20u32));
    /// ```
    pub fn assignment(&self, rank: usize, worker_count: usize) -> Result<WorkerAssignment, ModelError> {
        let interval = partition(&self.upper_bound, worker_count, rank)?;
        Ok(WorkerAssignment { rank, interval })
    }
}

impl std::fmt::Display for SearchRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchRange(upper_bound: {})", self.upper_bound)
    }
}

/// One worker's contiguous sub-range of the search.
///
/// Derived once from `(SearchRange, rank, worker_count)` and never mutated.
/// See the module documentation for the `(start, end]` scan convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerAssignment {
    rank: usize,
    interval: ClosedOpenInterval<BigUint>,
}

impl WorkerAssignment {
    /// Returns the rank this assignment belongs to.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the assigned half-open interval `[start, end)`.
    #[inline]
    pub fn interval(&self) -> &ClosedOpenInterval<BigUint> {
        &self.interval
    }
}

impl std::fmt::Display for WorkerAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WorkerAssignment(rank: {}, interval: {})", self.rank, self.interval)
    }
}
