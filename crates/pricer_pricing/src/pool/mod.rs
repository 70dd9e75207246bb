//! Thread-local scratch buffer pool.
//!
//! The finite-difference solver needs a right-hand side and a solution
//! vector for every time step. [`ThreadLocalPool`] hands out zero-filled
//! `f64` buffers that go back to the calling thread's pool when dropped, so
//! a backward sweep allocates at most once per buffer regardless of the
//! number of steps.
//!
//! # Example
//!
//! ```rust
//! use pricer_pricing::pool::ThreadLocalPool;
//!
//! let pool = ThreadLocalPool::new();
//!
//! for _ in 0..10 {
//!     let mut rhs = pool.get_buffer(64);
//!     rhs[0] = 1.0;
//!     // returned to the pool here
//! }
//!
//! assert!(pool.stats().allocations_avoided >= 9);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Usage counters of the current thread's pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers currently idle in the pool.
    pub buffers_in_pool: usize,
    /// Buffer requests served so far.
    pub total_requests: usize,
    /// Requests served by reusing an idle buffer.
    pub allocations_avoided: usize,
    /// Requests that had to allocate.
    pub allocations_made: usize,
}

impl PoolStats {
    /// Fraction of requests served without allocating.
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.allocations_avoided as f64 / self.total_requests as f64
        }
    }
}

#[derive(Default)]
struct PoolState {
    idle: Vec<Vec<f64>>,
    stats: PoolStats,
}

impl PoolState {
    /// Takes the smallest idle buffer that fits, or allocates.
    fn take(&mut self, len: usize) -> Vec<f64> {
        self.stats.total_requests += 1;

        let best = self
            .idle
            .iter()
            .enumerate()
            .filter(|(_, buf)| buf.capacity() >= len)
            .min_by_key(|(_, buf)| buf.capacity())
            .map(|(idx, _)| idx);

        let mut buffer = match best {
            Some(idx) => {
                self.stats.allocations_avoided += 1;
                self.idle.swap_remove(idx)
            }
            None => {
                self.stats.allocations_made += 1;
                Vec::with_capacity(len)
            }
        };
        self.stats.buffers_in_pool = self.idle.len();

        buffer.clear();
        buffer.resize(len, 0.0);
        buffer
    }

    fn give_back(&mut self, buffer: Vec<f64>) {
        self.idle.push(buffer);
        self.stats.buffers_in_pool = self.idle.len();
    }
}

thread_local! {
    static POOL_STATE: RefCell<PoolState> = RefCell::new(PoolState::default());
}

/// Handle to the calling thread's buffer pool.
///
/// The handle is a zero-sized value; storage and statistics live in
/// thread-local state, so no locking takes place.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadLocalPool;

impl ThreadLocalPool {
    /// Creates a pool handle.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Returns a zero-filled buffer of exactly `len` elements.
    pub fn get_buffer(&self, len: usize) -> PooledBuffer {
        let inner = POOL_STATE.with(|state| state.borrow_mut().take(len));
        PooledBuffer { inner }
    }

    /// Drops every idle buffer of the current thread.
    pub fn clear(&self) {
        POOL_STATE.with(|state| {
            let mut state = state.borrow_mut();
            state.idle.clear();
            state.stats.buffers_in_pool = 0;
        });
    }

    /// Statistics of the current thread's pool.
    pub fn stats(&self) -> PoolStats {
        POOL_STATE.with(|state| state.borrow().stats.clone())
    }
}

/// A buffer on loan from [`ThreadLocalPool`].
///
/// Dereferences to `[f64]` and returns to the pool when dropped.
pub struct PooledBuffer {
    inner: Vec<f64>,
}

impl Deref for PooledBuffer {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl Drop for PooledBuffer {
    fn drop(&mut self) {
        let buffer = std::mem::take(&mut self.inner);
        // try_with: the thread-local may already be gone during thread teardown
        let _ = POOL_STATE.try_with(|state| state.borrow_mut().give_back(buffer));
    }
}

impl fmt::Debug for PooledBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledBuffer")
            .field("len", &self.inner.len())
            .field("capacity", &self.inner.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffers_are_zeroed_and_sized() {
        let pool = ThreadLocalPool::new();
        pool.clear();

        {
            let mut buffer = pool.get_buffer(8);
            buffer.iter_mut().for_each(|x| *x = 3.0);
        }
        let buffer = pool.get_buffer(5);
        assert_eq!(buffer.len(), 5);
        assert!(buffer.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_reuse_counts() {
        let pool = ThreadLocalPool::new();
        pool.clear();
        let before = pool.stats();

        for _ in 0..20 {
            let _rhs = pool.get_buffer(100);
            let _x = pool.get_buffer(100);
        }

        let after = pool.stats();
        assert_eq!(after.total_requests - before.total_requests, 40);
        assert!(after.allocations_made - before.allocations_made <= 2);
        assert_eq!(after.buffers_in_pool, 2);
    }

    #[test]
    fn test_best_fit_prefers_smallest() {
        let pool = ThreadLocalPool::new();
        pool.clear();
        drop((pool.get_buffer(1000), pool.get_buffer(10)));

        let small = pool.get_buffer(8);
        assert!(small.inner.capacity() < 1000);
    }

    #[test]
    fn test_hit_rate() {
        let stats = PoolStats {
            buffers_in_pool: 0,
            total_requests: 4,
            allocations_avoided: 3,
            allocations_made: 1,
        };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(PoolStats::default().hit_rate(), 0.0);
    }
}
