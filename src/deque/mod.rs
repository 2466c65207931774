//! Deque (double-ended queue) implementations
//!
//! This module provides a blocking deque built for producer/consumer pipelines
//! that need to inspect or re-prioritize work items.
//!
//! ## Available Deques
//!
//! - [`BlockingDeque`]: Mutex + condvar bounded deque with blocking, timed, and
//!   non-blocking operation variants
//!
//! ## Operation Surface
//!
//! | Operation | Modes | Failure on contention |
//! |-----------|-------|-----------------------|
//! | `push_back` | block / timeout / no-wait | `Error::Full` |
//! | `push_front` | block / timeout / no-wait | `Error::Full` |
//! | `pop_front` | block / timeout / no-wait | `Error::Empty` |
//! | `peek_front` | block / timeout / no-wait | `Error::Empty` |
//! | `get(i)` | no-wait only | returns `None`, never fails |
//!
//! ## Example
//!
//! ```rust
//! use dequex::{BlockingDeque, Wait};
//!
//! let deque = BlockingDeque::new(10);
//! deque.push_back("job", Wait::Block)?;
//! assert_eq!(deque.peek_front(Wait::NoWait)?, "job");
//! assert_eq!(deque.pop_front(Wait::NoWait)?, "job");
//! # Ok::<(), dequex::Error>(())
//! ```

pub mod blocking;

// Re-export main types for convenience
pub use blocking::{BlockingDeque, Wait};


#[cfg(test)]
mod proptests;
