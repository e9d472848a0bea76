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

//! # Fair Range Partitioner
//!
//! Pure arithmetic that divides the half-open interval `[0, n)` into
//! `worker_count` contiguous sub-intervals, one per rank, such that:
//!
//! - the union of all sub-intervals equals `[0, n)` with no overlap and no
//!   gap between adjacent ranks,
//! - sub-interval sizes differ by at most one, and
//! - the first `n mod worker_count` ranks receive the larger share.
//!
//! With `quotient = floor(n / worker_count)` and
//! `remainder = n mod worker_count`, rank `r` receives
//! `[r * quotient + min(r, remainder), start + quotient + (1 if r < remainder))`.
//! The last rank's end is always exactly `n`.
//!
//! The function is generic over any [`Integer`] so the same arithmetic is
//! checked against machine integers in tests and runs over
//! `num_bigint::BigUint` in production. No side effects; the result depends
//! only on the inputs.

use crate::math::interval::ClosedOpenInterval;
use num_integer::Integer;
use num_traits::FromPrimitive;

/// The error type for partition requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionError {
    /// The worker group is empty (`worker_count == 0`).
    NoWorkers,
    /// The rank is not a member of the group (`rank >= worker_count`).
    RankOutOfBounds {
        /// The offending rank.
        rank: usize,
        /// The size of the worker group.
        worker_count: usize,
    },
    /// The worker count or rank is not representable in the bound type.
    CountNotRepresentable,
}

impl std::fmt::Display for PartitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWorkers => write!(f, "Worker count must be positive"),
            Self::RankOutOfBounds { rank, worker_count } => write!(
                f,
                "Rank {} is out of bounds for a group of {} workers",
                rank, worker_count
            ),
            Self::CountNotRepresentable => {
                write!(f, "Worker count is not representable in the bound type")
            }
        }
    }
}

impl std::error::Error for PartitionError {}

/// Computes rank `rank`'s share of the half-open interval `[0, n)`.
///
/// # Errors
///
/// Returns [`PartitionError::NoWorkers`] if `worker_count` is zero and
/// [`PartitionError::RankOutOfBounds`] if `rank >= worker_count`. `n == 0`
/// is not an error; every rank simply receives an empty interval.
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::math::partition::partition;
///
/// // 20 units over 2 workers: a clean split.
/// assert_eq!(partition(&20u64, 2, 0).unwrap(), (0..10).into());
/// assert_eq!(partition(&20u64, 2, 1).unwrap(), (10..20).into());
///
/// // 10 units over 3 workers: the first rank absorbs the remainder.
/// assert_eq!(partition(&10u64, 3, 0).unwrap(), (0..4).into());
/// assert_eq!(partition(&10u64, 3, 1).unwrap(), (4..7).into());
/// assert_eq!(partition(&10u64, 3, 2).unwrap(), (7..10).into());
/// ```
pub fn partition<T>(
    n: &T,
    worker_count: usize,
    rank: usize,
) -> Result<ClosedOpenInterval<T>, PartitionError>
where
    T: Integer + Clone + FromPrimitive,
{
    if worker_count == 0 {
        return Err(PartitionError::NoWorkers);
    }
    if rank >= worker_count {
        return Err(PartitionError::RankOutOfBounds { rank, worker_count });
    }

    let count = T::from_usize(worker_count).ok_or(PartitionError::CountNotRepresentable)?;
    let rank_t = T::from_usize(rank).ok_or(PartitionError::CountNotRepresentable)?;

    let (quotient, remainder) = n.div_mod_floor(&count);

    // The first `remainder` ranks carry one extra unit each; earlier ranks
    // shift this rank's start by one unit apiece.
    let takes_extra = rank_t < remainder;
    let shift = if takes_extra {
        rank_t.clone()
    } else {
        remainder
    };

    let start = rank_t * quotient.clone() + shift;
    let mut end = start.clone() + quotient;
    if takes_extra {
        end = end + T::one();
    }

    Ok(ClosedOpenInterval::new_unchecked(start, end))
}
