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

//! # Lacuna Comm
//!
//! The explicit message-passing seam between workers. Workers in the search
//! pipeline share no mutable state; they coordinate exclusively through a
//! [`Communicator`]: a rank-addressed, blocking send/receive surface plus a
//! group-wide barrier. The trait keeps the search and orchestration code
//! independent of the transport.
//!
//! ## Modules
//!
//! - `channel`: [`ChannelGroup`](channel::ChannelGroup), the in-process
//!   implementation over a full mesh of `std::sync::mpsc` channels and a
//!   shared `std::sync::Barrier`.
//!
//! ## Semantics
//!
//! All operations are blocking with no timeout and no retry. A receive is
//! individually addressed (`recv(src)` only ever yields messages from
//! `src`), which is what makes the reduction order, and therefore the
//! tie-break witness of the final answer, deterministic. A peer that
//! disappears surfaces as [`CommError::Disconnected`]; a peer that merely
//! stalls blocks its counterpart indefinitely, which is an accepted
//! characteristic of the collective, not a recoverable error.

pub mod channel;

/// The error type for communicator operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommError {
    /// A worker group must contain at least one rank.
    EmptyGroup,
    /// The addressed rank is not a member of the group.
    RankOutOfBounds {
        /// The offending rank.
        rank: usize,
        /// The size of the group.
        size: usize,
    },
    /// The peer's endpoint was dropped before the transfer completed.
    Disconnected {
        /// The rank of the vanished peer.
        peer: usize,
    },
}

impl std::fmt::Display for CommError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGroup => write!(f, "Worker group must contain at least one rank"),
            Self::RankOutOfBounds { rank, size } => {
                write!(f, "Rank {} is out of bounds for a group of size {}", rank, size)
            }
            Self::Disconnected { peer } => {
                write!(f, "Peer rank {} disconnected before the transfer completed", peer)
            }
        }
    }
}

impl std::error::Error for CommError {}

/// A blocking, rank-addressed communication endpoint for one worker.
///
/// Each worker owns exactly one endpoint. `send` and `recv` are
/// point-to-point and blocking; `barrier` synchronizes the whole group.
/// Implementations deliver messages between a fixed pair of ranks in FIFO
/// order.
pub trait Communicator {
    /// The message type carried by this communicator.
    type Message;

    /// Returns this worker's zero-based rank within the group.
    fn rank(&self) -> usize;

    /// Returns the number of ranks in the group.
    fn size(&self) -> usize;

    /// Delivers `message` to rank `dest`, blocking until handed off.
    fn send(&self, dest: usize, message: Self::Message) -> Result<(), CommError>;

    /// Receives the next message sent by rank `src`, blocking until one
    /// arrives.
    fn recv(&self, src: usize) -> Result<Self::Message, CommError>;

    /// Blocks until every rank in the group has reached the barrier.
    fn barrier(&self);
}
