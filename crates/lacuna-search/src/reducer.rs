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

//! # Global Reducer
//!
//! The single synchronization point of a run. Every non-coordinator rank
//! sends exactly one [`LocalResult`] to the coordinator and aggregates
//! nothing; the coordinator seeds the fold with its own local result and
//! performs `P - 1` blocking receives **in ascending rank order**.
//!
//! The fold compares with strict `>`, so among equal maxima the result of
//! the lowest rank survives. Combined with the individually addressed
//! receive discipline this makes the reduction fully deterministic,
//! including which witness backs a tied maximum. A zero-gap local result
//! carries no witness and can never win against a real gap.

use lacuna_comm::{CommError, Communicator};
use lacuna_model::result::LocalResult;

/// The rank that aggregates all local results.
pub const COORDINATOR: usize = 0;

/// Folds all ranks' local results at the coordinator.
///
/// Must be called by rank [`COORDINATOR`] only; `own` is the coordinator's
/// own local result, which seeds the fold.
///
/// # Errors
///
/// Returns [`CommError`] if any worker's endpoint vanishes before its
/// result arrives. A worker that merely stalls blocks this call forever.
pub fn reduce<C>(comm: &C, own: LocalResult) -> Result<LocalResult, CommError>
where
    C: Communicator<Message = LocalResult>,
{
    debug_assert_eq!(
        comm.rank(),
        COORDINATOR,
        "called reduce on a non-coordinator rank"
    );

    let mut global = own;
    for rank in 1..comm.size() {
        let candidate = comm.recv(rank)?;
        // Strict inequality: ties keep the lower, earlier-folded rank.
        if candidate.max_gap() > global.max_gap() {
            global = candidate;
        }
    }

    Ok(global)
}

/// Transfers a non-coordinator rank's result to the coordinator.
///
/// The counterpart of [`reduce`]; each non-coordinator rank calls this
/// exactly once and performs no aggregation of its own.
pub fn report<C>(comm: &C, result: LocalResult) -> Result<(), CommError>
where
    C: Communicator<Message = LocalResult>,
{
    debug_assert_ne!(
        comm.rank(),
        COORDINATOR,
        "called report on the coordinator rank"
    );
    comm.send(COORDINATOR, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lacuna_comm::channel::ChannelGroup;
    use num_bigint::BigUint;
    use std::thread;

    fn result_of(lower: u64, upper: u64) -> LocalResult {
        let mut result = LocalResult::empty();
        result.observe(&BigUint::from(lower), &BigUint::from(upper));
        result
    }

    /// Runs a reduction over the given per-rank results; index 0 seeds the
    /// coordinator.
    fn run_reduction(results: Vec<LocalResult>) -> LocalResult {
        let mut endpoints = ChannelGroup::create(results.len()).unwrap();
        let coordinator = endpoints.remove(0);
        let mut results = results.into_iter();
        let own = results.next().unwrap();

        let handles: Vec<_> = endpoints
            .into_iter()
            .zip(results)
            .map(|(endpoint, result)| {
                thread::spawn(move || report(&endpoint, result).unwrap())
            })
            .collect();

        let global = reduce(&coordinator, own).unwrap();
        for handle in handles {
            handle.join().unwrap();
        }
        global
    }

    #[test]
    fn test_single_rank_reduction_is_identity() {
        let global = run_reduction(vec![result_of(89, 97)]);
        assert_eq!(global, result_of(89, 97));
    }

    #[test]
    fn test_maximum_wins() {
        let global = run_reduction(vec![
            result_of(3, 5),    // gap 2
            result_of(89, 97),  // gap 8
            result_of(7, 11),   // gap 4
        ]);
        assert_eq!(global, result_of(89, 97));
    }

    #[test]
    fn test_ties_favor_the_lower_rank() {
        // Ranks 1 and 2 report the same gap size with different witnesses;
        // rank 1 must win.
        let global = run_reduction(vec![
            LocalResult::empty(),
            result_of(7, 11),
            result_of(13, 17),
        ]);
        assert_eq!(global, result_of(7, 11));
    }

    #[test]
    fn test_coordinator_wins_its_own_tie() {
        let global = run_reduction(vec![result_of(7, 11), result_of(13, 17)]);
        assert_eq!(global, result_of(7, 11));
    }

    #[test]
    fn test_empty_contributions_lose() {
        let global = run_reduction(vec![
            LocalResult::empty(),
            LocalResult::empty(),
            result_of(23, 29),
            LocalResult::empty(),
        ]);
        assert_eq!(global, result_of(23, 29));
    }

    #[test]
    fn test_all_empty_stays_empty() {
        let global = run_reduction(vec![LocalResult::empty(), LocalResult::empty()]);
        assert!(global.is_empty());
    }

    #[test]
    fn test_vanished_worker_is_an_error() {
        let mut endpoints = ChannelGroup::<LocalResult>::create(2).unwrap();
        let worker = endpoints.pop().unwrap();
        let coordinator = endpoints.pop().unwrap();
        drop(worker);

        assert_eq!(
            reduce(&coordinator, LocalResult::empty()).err(),
            Some(CommError::Disconnected { peer: 1 })
        );
    }
}
