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

//! # In-Process Channel Group
//!
//! A [`Communicator`] over standard library primitives: one `mpsc` channel
//! per ordered rank pair (a full mesh) and a single shared `Barrier`. The
//! mesh is what makes `recv(src)` individually addressed: messages from
//! different sources can never be observed out of source order, because
//! they never share a queue.
//!
//! Endpoints are created as a batch with [`ChannelGroup::create`] and then
//! moved into their worker threads; an endpoint is `Send` but deliberately
//! not `Sync` (one owner per rank, like a process owning its MPI rank).

use crate::{CommError, Communicator};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Barrier};

/// One worker's endpoint of an in-process channel mesh.
///
/// # Examples
///
/// ```rust
/// # use lacuna_comm::channel::ChannelGroup;
/// # use lacuna_comm::Communicator;
///
/// let mut endpoints = ChannelGroup::<u64>::create(2).unwrap();
/// let right = endpoints.pop().unwrap();
/// let left = endpoints.pop().unwrap();
///
/// let handle = std::thread::spawn(move || right.send(0, 42).unwrap());
/// assert_eq!(left.recv(1).unwrap(), 42);
/// handle.join().unwrap();
/// ```
pub struct ChannelGroup<M> {
    rank: usize,
    /// Sender to each destination rank, indexed by destination.
    senders: Vec<Sender<M>>,
    /// Receiver from each source rank, indexed by source.
    receivers: Vec<Receiver<M>>,
    barrier: Arc<Barrier>,
}

impl<M> ChannelGroup<M> {
    /// Creates all endpoints of a group of `size` ranks.
    ///
    /// The returned vector is indexed by rank: `endpoints[r]` is the
    /// endpoint for rank `r`.
    ///
    /// # Errors
    ///
    /// Returns [`CommError::EmptyGroup`] if `size` is zero.
    pub fn create(size: usize) -> Result<Vec<Self>, CommError> {
        if size == 0 {
            return Err(CommError::EmptyGroup);
        }

        let barrier = Arc::new(Barrier::new(size));

        let mut senders: Vec<Vec<Sender<M>>> = (0..size).map(|_| Vec::with_capacity(size)).collect();
        let mut receivers: Vec<Vec<Receiver<M>>> =
            (0..size).map(|_| Vec::with_capacity(size)).collect();

        // The (src, dst) channel is pushed onto src's sender list and dst's
        // receiver list; both end up indexed by peer rank.
        for src in 0..size {
            for dst in 0..size {
                let (tx, rx) = mpsc::channel();
                senders[src].push(tx);
                receivers[dst].push(rx);
            }
        }

        // receivers[dst] was filled in ascending src order only because the
        // outer loop runs over src; keep it that way.
        let endpoints = senders
            .into_iter()
            .zip(receivers)
            .enumerate()
            .map(|(rank, (senders, receivers))| Self {
                rank,
                senders,
                receivers,
                barrier: Arc::clone(&barrier),
            })
            .collect();

        Ok(endpoints)
    }

    fn check_rank(&self, rank: usize) -> Result<(), CommError> {
        if rank < self.senders.len() {
            Ok(())
        } else {
            Err(CommError::RankOutOfBounds {
                rank,
                size: self.senders.len(),
            })
        }
    }
}

impl<M> Communicator for ChannelGroup<M> {
    type Message = M;

    #[inline]
    fn rank(&self) -> usize {
        self.rank
    }

    #[inline]
    fn size(&self) -> usize {
        self.senders.len()
    }

    fn send(&self, dest: usize, message: M) -> Result<(), CommError> {
        self.check_rank(dest)?;
        tracing::trace!(from = self.rank, to = dest, "sending message");
        self.senders[dest]
            .send(message)
            .map_err(|_| CommError::Disconnected { peer: dest })
    }

    fn recv(&self, src: usize) -> Result<M, CommError> {
        self.check_rank(src)?;
        tracing::trace!(at = self.rank, from = src, "awaiting message");
        self.receivers[src]
            .recv()
            .map_err(|_| CommError::Disconnected { peer: src })
    }

    fn barrier(&self) {
        self.barrier.wait();
    }
}

impl<M> std::fmt::Debug for ChannelGroup<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelGroup")
            .field("rank", &self.rank)
            .field("size", &self.senders.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_create_rejects_empty_group() {
        assert_eq!(
            ChannelGroup::<u64>::create(0).err(),
            Some(CommError::EmptyGroup)
        );
    }

    #[test]
    fn test_ranks_are_assigned_in_order() {
        let endpoints = ChannelGroup::<u64>::create(3).unwrap();
        let ranks: Vec<_> = endpoints.iter().map(|e| e.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
        assert!(endpoints.iter().all(|e| e.size() == 3));
    }

    #[test]
    fn test_rank_bounds_are_checked() {
        let endpoints = ChannelGroup::<u64>::create(2).unwrap();
        assert_eq!(
            endpoints[0].send(2, 7),
            Err(CommError::RankOutOfBounds { rank: 2, size: 2 })
        );
        assert_eq!(
            endpoints[0].recv(5).err(),
            Some(CommError::RankOutOfBounds { rank: 5, size: 2 })
        );
    }

    #[test]
    fn test_point_to_point_transfer() {
        let mut endpoints = ChannelGroup::<u64>::create(2).unwrap();
        let second = endpoints.pop().unwrap();
        let first = endpoints.pop().unwrap();

        let sender = thread::spawn(move || {
            second.send(0, 99).unwrap();
        });

        assert_eq!(first.recv(1).unwrap(), 99);
        sender.join().unwrap();
    }

    #[test]
    fn test_receives_are_source_addressed() {
        // Rank 0 receives from rank 2 first even if rank 1 sends first.
        let mut endpoints = ChannelGroup::<u64>::create(3).unwrap();
        let third = endpoints.pop().unwrap();
        let second = endpoints.pop().unwrap();
        let first = endpoints.pop().unwrap();

        second.send(0, 11).unwrap();
        third.send(0, 22).unwrap();

        assert_eq!(first.recv(2).unwrap(), 22);
        assert_eq!(first.recv(1).unwrap(), 11);
    }

    #[test]
    fn test_fifo_between_a_fixed_pair() {
        let mut endpoints = ChannelGroup::<u64>::create(2).unwrap();
        let second = endpoints.pop().unwrap();
        let first = endpoints.pop().unwrap();

        for value in 0..10 {
            second.send(0, value).unwrap();
        }
        for value in 0..10 {
            assert_eq!(first.recv(1).unwrap(), value);
        }
    }

    #[test]
    fn test_disconnected_peer_is_reported() {
        let mut endpoints = ChannelGroup::<u64>::create(2).unwrap();
        let second = endpoints.pop().unwrap();
        let first = endpoints.pop().unwrap();
        drop(second);

        assert_eq!(first.recv(1).err(), Some(CommError::Disconnected { peer: 1 }));
        assert_eq!(first.send(1, 1).err(), Some(CommError::Disconnected { peer: 1 }));
    }

    #[test]
    fn test_barrier_synchronizes_the_group() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let endpoints = ChannelGroup::<u64>::create(4).unwrap();
        let arrived = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = endpoints
            .into_iter()
            .map(|endpoint| {
                let arrived = Arc::clone(&arrived);
                thread::spawn(move || {
                    arrived.fetch_add(1, Ordering::SeqCst);
                    endpoint.barrier();
                    // Nobody passes the barrier before everyone arrived.
                    assert_eq!(arrived.load(Ordering::SeqCst), 4);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
