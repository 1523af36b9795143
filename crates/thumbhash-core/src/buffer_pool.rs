//! Scratch buffer pool for channel planes
//!
//! Encoding converts every input pixel into four `f64` channel planes. When
//! many images are hashed back to back these planes can be recycled instead
//! of reallocated. Buffers are handed out as [`PooledBuffer`] guards that
//! give the caller exclusive ownership and put the buffer back when dropped,
//! whichever way the caller's scope is left.

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default number of idle buffers retained by an enabled pool
pub const DEFAULT_MAX_POOLED: usize = 8;

/// Pool of reusable channel buffers
pub struct BufferPool {
    channels: Mutex<Vec<Vec<f64>>>,
    max_pooled: usize,
    outstanding: AtomicUsize,
}

impl BufferPool {
    /// Create a pool that retains up to [`DEFAULT_MAX_POOLED`] idle buffers
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_POOLED)
    }

    /// Create a pool that retains up to `max_pooled` idle buffers
    pub fn with_capacity(max_pooled: usize) -> Self {
        Self {
            channels: Mutex::new(Vec::new()),
            max_pooled,
            outstanding: AtomicUsize::new(0),
        }
    }

    /// A pool that never retains anything; every checkout allocates
    pub fn disabled() -> Self {
        Self::with_capacity(0)
    }

    pub fn is_enabled(&self) -> bool {
        self.max_pooled > 0
    }

    /// Check out a zeroed buffer of `len` elements
    pub fn checkout(&self, len: usize) -> PooledBuffer<'_> {
        let recycled = self.lock().pop();
        let buf = match recycled {
            Some(mut buf) => {
                buf.clear();
                buf.resize(len, 0.0);
                buf
            }
            None => vec![0.0; len],
        };
        self.outstanding.fetch_add(1, Ordering::Relaxed);
        PooledBuffer { pool: self, buf }
    }

    fn release(&self, buf: Vec<f64>) {
        self.outstanding.fetch_sub(1, Ordering::Relaxed);
        let mut pool = self.lock();
        if pool.len() < self.max_pooled {
            pool.push(buf);
        }
    }

    /// Drop every idle buffer
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn stats(&self) -> BufferPoolStats {
        BufferPoolStats {
            pooled: self.lock().len(),
            outstanding: self.outstanding.load(Ordering::Relaxed),
        }
    }

    // A panic while holding the lock cannot leave the Vec in a torn state.
    fn lock(&self) -> MutexGuard<'_, Vec<Vec<f64>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about buffer pool usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferPoolStats {
    /// Idle buffers waiting for reuse
    pub pooled: usize,
    /// Buffers currently checked out
    pub outstanding: usize,
}

/// A checked-out buffer, returned to its pool on drop
pub struct PooledBuffer<'a> {
    pool: &'a BufferPool,
    buf: Vec<f64>,
}

impl Deref for PooledBuffer<'_> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buf));
    }
}
