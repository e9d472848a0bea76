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

//! # Lacuna Core
//!
//! Foundational utilities, numerics, and math primitives for the Lacuna
//! prime-gap search ecosystem. This crate consolidates the reusable building
//! blocks that underpin the higher-level model, search, and solver crates.
//!
//! ## Modules
//!
//! - `math`: Closed-open interval `[start, end)` primitives with validation,
//!   predicates, measurements, and iteration, plus the fair range partitioner
//!   that divides a search interval across a group of workers.
//! - `num`: The arbitrary-precision prime engine seam (`PrimeEngine`) and its
//!   default implementation backed by probabilistic primality testing.
//!
//! ## Purpose
//!
//! These primitives keep the search pipeline generic and exact: interval and
//! partition arithmetic never leave the integer domain, and all prime values
//! stay in arbitrary precision until a final, bounded-magnitude report is
//! formatted.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
