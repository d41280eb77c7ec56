//! Internal buffer management for block assembly.
//!
//! This module provides a thread-local buffer pool so repeated fingerprint
//! computations do not reallocate their 100 KiB block buffer. It is an
//! implementation detail and not part of the public API.

mod pool;

pub(crate) use pool::Buffer;
