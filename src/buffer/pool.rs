//! Thread-local pool of block buffers.

use std::cell::RefCell;
use std::fmt;

use crate::config::DEFAULT_BLOCK_SIZE;

/// Largest capacity a buffer may have and still be returned to the pool.
pub const MAX_POOLED_CAPACITY: usize = DEFAULT_BLOCK_SIZE * 2;

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable byte buffer holding one partially assembled block.
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or creates a new one, with
    /// room for at least `capacity` bytes.
    pub fn take(capacity: usize) -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut data = pool.borrow_mut().pop().unwrap_or_default();
            data.reserve(capacity);
            Self { data }
        })
    }

    /// Clears the buffer without deallocating.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Extends the buffer with data.
    pub fn extend_from_slice(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data);
    }

    /// Returns the buffered bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        // Blocks from oversized custom configs are freed instead of pooled.
        if self.data.capacity() > MAX_POOLED_CAPACITY {
            return;
        }

        let mut data = std::mem::take(&mut self.data);
        data.clear();
        // The pool may already be gone during thread teardown.
        let _ = THREAD_BUFFER_POOL.try_with(|pool| {
            let mut pool = pool.borrow_mut();
            if pool.len() < MAX_POOL_SIZE {
                pool.push(data);
            }
        });
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .finish()
    }
}

thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
