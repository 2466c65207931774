//! # dequex
//!
//! A thread-safe, bounded, double-ended blocking queue for producer/consumer pipelines.
//!
//! ## Features
//!
//! - **BlockingDeque**: Multi-producer, multi-consumer bounded deque with blocking,
//!   timed, and non-blocking variants of every operation
//! - **Peek**: Inspect the next item without consuming it, with the same waiting
//!   discipline as removal
//! - **Front insertion**: Re-prioritize an item by placing it ahead of the normal
//!   FIFO order
//!
//! ## Philosophy
//!
//! dequex focuses on providing:
//! - One mutex and two condition variables, no lock-free cleverness
//! - A uniform `Result`-based API across blocking, timed, and non-blocking modes
//! - Ergonomic APIs that guide users toward correct concurrent programming patterns
//! - Extensive documentation and real-world usage examples
//!
//! ## Quick Start
//!
//! ```rust
//! use dequex::{BlockingDeque, Wait};
//!
//! let deque = BlockingDeque::new(100);
//! deque.push_back(42, Wait::Block).unwrap();
//! assert_eq!(deque.pop_front(Wait::Block), Ok(42));
//! ```
//!
//! ## Thread Safety
//!
//! `BlockingDeque` is designed to be shared across threads behind an `Arc` without
//! additional synchronization. Every access to the underlying storage, including
//! positional reads and `Debug`/`Display` formatting, happens under the internal
//! mutex.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod deque;

pub use crate::deque::{BlockingDeque, Wait};

/// Error types for dequex operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The deque is at capacity and the wait mode did not permit (further) waiting
    Full,
    /// The deque has no items and the wait mode did not permit (further) waiting
    Empty,
    /// A timed operation was given a negative or non-finite timeout
    InvalidTimeout,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Full => write!(f, "Deque is full"),
            Error::Empty => write!(f, "Deque is empty"),
            Error::InvalidTimeout => write!(f, "Timeout must be a non-negative duration"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for dequex operations
pub type Result<T> = core::result::Result<T, Error>;
