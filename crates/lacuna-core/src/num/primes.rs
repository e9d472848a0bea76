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

//! # Prime Engine
//!
//! The next-prime primitive behind a trait seam. The gap scanner only ever
//! advances from one prime to the next; it never factors, sieves, or tests
//! arbitrary candidates. Keeping the engine opaque lets tests substitute a
//! deterministic fixture and keeps the (deliberately probabilistic)
//! primality machinery out of the search logic.
//!
//! ## Probabilistic primality
//!
//! The default engine advances with a Baillie-PSW class test via the
//! `num-prime` crate. This mirrors the classic GMP `mpz_nextprime`
//! behavior: candidates are accepted with a negligible but nonzero
//! false-positive rate. Callers that need certified primes must bring their
//! own engine; the search pipeline deliberately carries the probabilistic
//! assumption instead of silently strengthening it.

use num_bigint::BigUint;
use num_prime::nt_funcs;

/// The sequential next-prime capability used by the gap scanner.
///
/// Implementations must be deterministic: repeated calls with the same
/// argument return the same prime. The engine is shared by reference across
/// worker threads, so implementations are expected to be stateless or
/// internally synchronized.
pub trait PrimeEngine {
    /// Returns the smallest prime strictly greater than `x`.
    fn next_prime(&self, x: &BigUint) -> BigUint;
}

/// The default [`PrimeEngine`] over `num_bigint::BigUint`.
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::num::primes::{NumPrimeEngine, PrimeEngine};
/// # use num_bigint::BigUint;
///
/// let engine = NumPrimeEngine;
/// assert_eq!(engine.next_prime(&BigUint::from(0u32)), BigUint::from(2u32));
/// assert_eq!(engine.next_prime(&BigUint::from(89u32)), BigUint::from(97u32));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumPrimeEngine;

impl PrimeEngine for NumPrimeEngine {
    fn next_prime(&self, x: &BigUint) -> BigUint {
        // `next_prime` only returns `None` when the next prime cannot be
        // represented, which cannot happen for an unbounded integer.
        nt_funcs::next_prime(x, None)
            .expect("next prime of an arbitrary-precision integer always exists")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next(engine: &NumPrimeEngine, x: u64) -> u64 {
        let p = engine.next_prime(&BigUint::from(x));
        u64::try_from(&p).expect("test primes fit in u64")
    }

    #[test]
    fn test_next_prime_small_values() {
        let engine = NumPrimeEngine;
        assert_eq!(next(&engine, 0), 2);
        assert_eq!(next(&engine, 1), 2);
        assert_eq!(next(&engine, 2), 3);
        assert_eq!(next(&engine, 3), 5);
        assert_eq!(next(&engine, 4), 5);
    }

    #[test]
    fn test_next_prime_is_strict() {
        // The result must be strictly greater than the argument, even when
        // the argument itself is prime.
        let engine = NumPrimeEngine;
        assert_eq!(next(&engine, 7), 11);
        assert_eq!(next(&engine, 11), 13);
    }

    #[test]
    fn test_next_prime_across_known_gaps() {
        let engine = NumPrimeEngine;
        // The gap of 8 below 100.
        assert_eq!(next(&engine, 89), 97);
        // The first gap of 14.
        assert_eq!(next(&engine, 113), 127);
        // The first gap of 34.
        assert_eq!(next(&engine, 1327), 1361);
    }

    #[test]
    fn test_next_prime_beyond_machine_words() {
        let engine = NumPrimeEngine;
        // 2^89 - 1 is a Mersenne prime; advancing from below must land on it.
        let mersenne = (BigUint::from(1u32) << 89) - 1u32;
        let below = &mersenne - 1u32;
        assert_eq!(engine.next_prime(&below), mersenne);
    }
}
