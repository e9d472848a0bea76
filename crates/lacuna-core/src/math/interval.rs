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

use num_integer::Integer;
use std::iter::FusedIterator;

/// A half-open interval `[start, end)` defined by a start (inclusive) and end (exclusive).
///
/// This struct represents a contiguous set of integers. Unlike a machine-word
/// range it is generic over any [`Integer`], so the same type carries both
/// small test fixtures (`u64`) and arbitrary-precision production bounds
/// (`num_bigint::BigUint`). Bounds are held by value and exposed by reference;
/// the element type only needs to be `Clone`, not `Copy`.
///
/// # Invariants
/// `start_inclusive` must always be less than or equal to `end_exclusive`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedOpenInterval<T>
where
    T: Integer + Clone,
{
    start_inclusive: T,
    end_exclusive: T,
}

/// An iterator over the integer points contained within a `ClosedOpenInterval`.
///
/// # Examples
///
/// ```rust
/// # use lacuna_core::math::interval::ClosedOpenInterval;
///
/// let iv = ClosedOpenInterval::new(1u64, 5);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
pub struct ClosedOpenIntervalIterator<T>
where
    T: Integer + Clone,
{
    end_exclusive: T,
    current: T,
}

impl<T> Iterator for ClosedOpenIntervalIterator<T>
where
    T: Integer + Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            let result = self.current.clone();
            self.current = result.clone() + T::one();
            Some(result)
        } else {
            None
        }
    }
}

impl<T> DoubleEndedIterator for ClosedOpenIntervalIterator<T>
where
    T: Integer + Clone,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end_exclusive {
            self.end_exclusive = self.end_exclusive.clone() - T::one();
            Some(self.end_exclusive.clone())
        } else {
            None
        }
    }
}

impl<T> FusedIterator for ClosedOpenIntervalIterator<T> where T: Integer + Clone {}

impl<T> ClosedOpenInterval<T>
where
    T: Integer + Clone,
{
    /// Creates a new `ClosedOpenInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(0u64, 10);
    /// assert_eq!(iv.len(), 10);
    /// ```
    #[inline]
    pub fn new(start_inclusive: T, end_exclusive: T) -> Self {
        assert!(
            start_inclusive <= end_exclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_exclusive"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Creates a new `ClosedOpenInterval` if the inputs are valid.
    ///
    /// Returns `None` if `start_inclusive > end_exclusive`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// assert!(ClosedOpenInterval::try_new(0u64, 10).is_some());
    /// assert!(ClosedOpenInterval::try_new(10u64, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(start_inclusive: T, end_exclusive: T) -> Option<Self> {
        if start_inclusive <= end_exclusive {
            Some(Self {
                start_inclusive,
                end_exclusive,
            })
        } else {
            None
        }
    }

    /// Creates a new `ClosedOpenInterval` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `start_inclusive <= end_exclusive`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(start_inclusive: T, end_exclusive: T) -> Self {
        debug_assert!(
            start_inclusive <= end_exclusive,
            "Invalid interval: start_inclusive must be less than or equal to end_exclusive"
        );
        Self {
            start_inclusive,
            end_exclusive,
        }
    }

    /// Returns the inclusive start bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(5u64, 10);
    /// assert_eq!(*iv.start(), 5);
    /// ```
    #[inline]
    pub fn start(&self) -> &T {
        &self.start_inclusive
    }

    /// Returns the exclusive end bound of the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(5u64, 10);
    /// assert_eq!(*iv.end(), 10);
    /// ```
    #[inline]
    pub fn end(&self) -> &T {
        &self.end_exclusive
    }

    /// Consumes the interval and returns its `(start, end)` bounds.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.start_inclusive, self.end_exclusive)
    }

    /// Returns `true` if this interval overlaps with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let a = ClosedOpenInterval::new(0u64, 10);
    /// let b = ClosedOpenInterval::new(5u64, 15);
    /// assert!(a.intersects(&b));
    ///
    /// let c = ClosedOpenInterval::new(10u64, 20); // Adjacent
    /// assert!(!a.intersects(&c));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start_inclusive < other.end_exclusive && other.start_inclusive < self.end_exclusive
    }

    /// Returns `true` if the intervals share a boundary but do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let a = ClosedOpenInterval::new(0u64, 10);
    /// let b = ClosedOpenInterval::new(10u64, 20);
    /// assert!(a.adjacent(&b));
    /// ```
    #[inline]
    pub fn adjacent(&self, other: &Self) -> bool {
        self.end_exclusive == other.start_inclusive || other.end_exclusive == self.start_inclusive
    }

    /// Returns `true` if the intervals are disjoint (neither intersecting nor adjacent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let a = ClosedOpenInterval::new(0u64, 10);
    /// assert!(a.disjoint(&ClosedOpenInterval::new(15u64, 20))); // Disjoint
    /// assert!(!a.disjoint(&ClosedOpenInterval::new(5u64, 15))); // Intersects
    /// assert!(!a.disjoint(&ClosedOpenInterval::new(10u64, 15))); // Adjacent
    /// ```
    #[inline]
    pub fn disjoint(&self, other: &Self) -> bool {
        !(self.start_inclusive <= other.end_exclusive && other.start_inclusive <= self.end_exclusive)
    }

    /// Returns `true` if `value` is contained in the interval `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(0u64, 10);
    /// assert!(iv.contains_point(&0));
    /// assert!(iv.contains_point(&9));
    /// assert!(!iv.contains_point(&10));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: &T) -> bool {
        self.start_inclusive <= *value && *value < self.end_exclusive
    }

    /// Returns `true` if `other` is fully contained within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let a = ClosedOpenInterval::new(0u64, 10);
    /// let b = ClosedOpenInterval::new(2u64, 8);
    /// assert!(a.contains_interval(&b));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.start_inclusive <= other.start_inclusive && other.end_exclusive <= self.end_exclusive
    }

    /// Returns the length of the interval (`end - start`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// assert_eq!(ClosedOpenInterval::new(10u64, 20).len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> T {
        self.end_exclusive.clone() - self.start_inclusive.clone()
    }

    /// Returns `true` if the interval is empty (`start == end`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// assert!(ClosedOpenInterval::new(10u64, 10).is_empty());
    /// assert!(!ClosedOpenInterval::new(10u64, 11).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_inclusive == self.end_exclusive
    }

    /// Creates an iterator over the points in the interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use lacuna_core::math::interval::ClosedOpenInterval;
    ///
    /// let iv = ClosedOpenInterval::new(1u64, 4);
    /// let points: Vec<_> = iv.iter().collect();
    /// assert_eq!(points, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> ClosedOpenIntervalIterator<T> {
        ClosedOpenIntervalIterator {
            end_exclusive: self.end_exclusive.clone(),
            current: self.start_inclusive.clone(),
        }
    }
}

impl<T> Default for ClosedOpenInterval<T>
where
    T: Integer + Clone,
{
    #[inline]
    fn default() -> Self {
        Self {
            start_inclusive: T::zero(),
            end_exclusive: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for ClosedOpenInterval<T>
where
    T: Integer + Clone + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedOpenInterval")
            .field("start_inclusive", &self.start_inclusive)
            .field("end_exclusive", &self.end_exclusive)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedOpenInterval<T>
where
    T: Integer + Clone + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start_inclusive, self.end_exclusive)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedOpenInterval<T>
where
    T: Integer + Clone,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start_inclusive)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Excluded(&self.end_exclusive)
    }
}

impl<T> IntoIterator for ClosedOpenInterval<T>
where
    T: Integer + Clone,
{
    type Item = T;
    type IntoIter = ClosedOpenIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ClosedOpenIntervalIterator {
            end_exclusive: self.end_exclusive,
            current: self.start_inclusive,
        }
    }
}

impl<T> IntoIterator for &ClosedOpenInterval<T>
where
    T: Integer + Clone,
{
    type Item = T;
    type IntoIter = ClosedOpenIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<std::ops::Range<T>> for ClosedOpenInterval<T>
where
    T: Integer + Clone,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<ClosedOpenInterval<T>> for std::ops::Range<T>
where
    T: Integer + Clone,
{
    #[inline]
    fn from(iv: ClosedOpenInterval<T>) -> Self {
        std::ops::Range {
            start: iv.start_inclusive,
            end: iv.end_exclusive,
        }
    }
}
