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

//! # Gap Results
//!
//! The records that carry a maximum prime gap from a worker's scan to the
//! coordinator and out of the program. A [`LocalResult`] is built
//! incrementally during a scan (its maximum is monotonically non-decreasing)
//! and frozen at scan end; a [`GlobalResult`] is built only at the
//! coordinator and frozen once every worker has contributed.
//!
//! The central invariant, enforced at every construction site: a result has
//! `max_gap == 0` exactly when it has no witness pair. A zero-gap result is
//! "no contribution" and loses every reduction against a real gap.

use num_bigint::BigUint;

/// A pair of consecutive primes bounding one gap.
///
/// `lower` and `upper` are consecutive: no prime lies strictly between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapWitness {
    lower: BigUint,
    upper: BigUint,
}

impl GapWitness {
    /// Constructs a new `GapWitness`.
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper`; a gap is always strictly positive.
    pub fn new(lower: BigUint, upper: BigUint) -> Self {
        assert!(
            lower < upper,
            "called GapWitness::new with lower >= upper: lower = {}, upper = {}",
            lower,
            upper
        );
        Self { lower, upper }
    }

    /// Returns the lower prime of the pair.
    #[inline]
    pub fn lower(&self) -> &BigUint {
        &self.lower
    }

    /// Returns the upper prime of the pair.
    #[inline]
    pub fn upper(&self) -> &BigUint {
        &self.upper
    }

    /// Returns the size of the gap (`upper - lower`).
    #[inline]
    pub fn gap(&self) -> BigUint {
        &self.upper - &self.lower
    }
}

impl std::fmt::Display for GapWitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lower, self.upper)
    }
}

/// The maximum gap one worker observed inside its own assignment.
///
/// Owned by the worker until it is transmitted to the coordinator. The
/// maximum only ever grows while scanning, and an equally large gap found
/// later never replaces the recorded witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalResult {
    max_gap: BigUint,
    witness: Option<GapWitness>,
}

impl LocalResult {
    /// Creates a result with no contribution (`max_gap == 0`, no witness).
    #[inline]
    pub fn empty() -> Self {
        Self {
            max_gap: BigUint::ZERO,
            witness: None,
        }
    }

    /// Creates a result from a single witness pair.
    pub fn from_witness(witness: GapWitness) -> Self {
        Self {
            max_gap: witness.gap(),
            witness: Some(witness),
        }
    }

    /// Offers one consecutive-prime pair to the running maximum.
    ///
    /// The pair is recorded only if its gap is *strictly* larger than the
    /// current maximum; ties keep the earlier witness. Returns `true` if the
    /// pair was recorded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_model::result::LocalResult;
    /// # use num_bigint::BigUint;
    ///
    /// let mut result = LocalResult::empty();
    /// assert!(result.observe(&BigUint::from(7u32), &BigUint::from(11u32)));
    /// // Equal gap later: not recorded, the witness stays (7, 11).
    /// assert!(!result.observe(&BigUint::from(13u32), &BigUint::from(17u32)));
    /// assert_eq!(*result.witness().unwrap().lower(), BigUint::from(7u32));
    /// ```
    pub fn observe(&mut self, lower: &BigUint, upper: &BigUint) -> bool {
        debug_assert!(
            lower < upper,
            "called LocalResult::observe with lower >= upper: lower = {}, upper = {}",
            lower,
            upper
        );

        let gap = upper - lower;
        if gap > self.max_gap {
            self.max_gap = gap;
            self.witness = Some(GapWitness::new(lower.clone(), upper.clone()));
            true
        } else {
            false
        }
    }

    /// Returns the size of the largest recorded gap, zero if none.
    #[inline]
    pub fn max_gap(&self) -> &BigUint {
        &self.max_gap
    }

    /// Returns the prime pair bounding the largest gap, if any.
    #[inline]
    pub fn witness(&self) -> Option<&GapWitness> {
        self.witness.as_ref()
    }

    /// Returns `true` if this result carries no contribution.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.witness.is_none()
    }
}

impl Default for LocalResult {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for LocalResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.witness {
            Some(witness) => write!(f, "LocalResult(max_gap: {}, witness: {})", self.max_gap, witness),
            None => write!(f, "LocalResult(no contribution)"),
        }
    }
}

/// The final answer of one run, owned solely by the coordinator.
///
/// Immutable once every worker's [`LocalResult`] has been folded in. This is
/// the program's only externally observable output besides timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalResult {
    upper_bound: BigUint,
    reduced: LocalResult,
}

impl GlobalResult {
    /// Freezes the folded maximum over all workers into the final answer.
    #[inline]
    pub fn new(upper_bound: BigUint, reduced: LocalResult) -> Self {
        Self {
            upper_bound,
            reduced,
        }
    }

    /// Returns the upper bound the run searched below.
    #[inline]
    pub fn upper_bound(&self) -> &BigUint {
        &self.upper_bound
    }

    /// Returns the size of the globally largest gap, zero if none was found.
    #[inline]
    pub fn max_gap(&self) -> &BigUint {
        self.reduced.max_gap()
    }

    /// Returns the prime pair bounding the globally largest gap, if any.
    #[inline]
    pub fn witness(&self) -> Option<&GapWitness> {
        self.reduced.witness()
    }

    /// Returns `true` if no worker contributed a gap.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reduced.is_empty()
    }
}

impl std::fmt::Display for GlobalResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "upper limit is {}", self.upper_bound)?;
        match self.witness() {
            Some(witness) => {
                writeln!(f, "max prime gap is {}", self.max_gap())?;
                writeln!(f, "left prime is {}", witness.lower())?;
                write!(f, "right prime is {}", witness.upper())
            }
            None => write!(f, "no prime gap found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(x: u64) -> BigUint {
        BigUint::from(x)
    }

    #[test]
    fn test_witness_gap() {
        let witness = GapWitness::new(big(89), big(97));
        assert_eq!(witness.gap(), big(8));
        assert_eq!(witness.to_string(), "(89, 97)");
    }

    #[test]
    #[should_panic(expected = "lower >= upper")]
    fn test_witness_rejects_inverted_pair() {
        GapWitness::new(big(97), big(89));
    }

    #[test]
    fn test_empty_result() {
        let result = LocalResult::empty();
        assert!(result.is_empty());
        assert_eq!(*result.max_gap(), BigUint::ZERO);
        assert!(result.witness().is_none());
    }

    #[test]
    fn test_observe_is_monotone() {
        let mut result = LocalResult::empty();
        assert!(result.observe(&big(2), &big(3)));
        assert_eq!(*result.max_gap(), big(1));

        assert!(result.observe(&big(7), &big(11)));
        assert_eq!(*result.max_gap(), big(4));

        // Smaller gap afterwards: maximum must not shrink.
        assert!(!result.observe(&big(11), &big(13)));
        assert_eq!(*result.max_gap(), big(4));
    }

    #[test]
    fn test_observe_keeps_earliest_equal_witness() {
        let mut result = LocalResult::empty();
        result.observe(&big(7), &big(11));
        // (13, 17) is the same gap size; the witness must stay (7, 11).
        assert!(!result.observe(&big(13), &big(17)));
        let witness = result.witness().unwrap();
        assert_eq!(*witness.lower(), big(7));
        assert_eq!(*witness.upper(), big(11));
    }

    #[test]
    fn test_global_report_format() {
        let mut local = LocalResult::empty();
        local.observe(&big(89), &big(97));
        let global = GlobalResult::new(big(100), local);
        assert_eq!(
            global.to_string(),
            "upper limit is 100\nmax prime gap is 8\nleft prime is 89\nright prime is 97"
        );
    }

    #[test]
    fn test_global_report_without_witness() {
        let global = GlobalResult::new(big(2), LocalResult::empty());
        assert!(global.is_empty());
        assert_eq!(global.to_string(), "upper limit is 2\nno prime gap found");
    }
}
