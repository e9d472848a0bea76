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

//! # Lacuna Model
//!
//! Domain types for the parallel maximum prime-gap search. This crate owns
//! the validated inputs (`SearchRange`), the per-worker unit of work
//! (`WorkerAssignment`), and the results that flow from workers to the
//! coordinator (`GapWitness`, `LocalResult`, `GlobalResult`).
//!
//! ## Modules
//!
//! - `range`: The global search range and the derivation of one worker's
//!   contiguous sub-range from its rank and the group size.
//! - `result`: The maximum-gap records produced by a scan and by the final
//!   reduction, with the `max_gap == 0 iff no witness` invariant enforced
//!   at construction.
//!
//! All prime and gap values stay in `num_bigint::BigUint`; nothing in this
//! crate ever narrows to a machine word.

pub mod range;
pub mod result;
