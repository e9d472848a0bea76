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

//! # Lacuna Search
//!
//! The two halves of the distributed maximum-gap computation: the local scan
//! a worker performs over its own assignment, and the reduction the
//! coordinator performs over every worker's local maximum.
//!
//! ## Modules
//!
//! - `scanner`: Walks the primes of one assignment by repeated next-prime
//!   advancement, tracking the largest fully-contained gap and its witness
//!   pair.
//! - `reducer`: The coordinator-side fold over all ranks' local results,
//!   with a deterministic lowest-rank tie-break, and the matching
//!   non-coordinator report.
//! - `stats`: Per-run search statistics and their builder.
//!
//! The split mirrors the data flow: scanners run in parallel with no
//! communication; the reducer synchronizes the group exactly once at the
//! end.

pub mod reducer;
pub mod scanner;
pub mod stats;
