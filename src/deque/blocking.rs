//! Blocking Double-Ended Queue
//!
//! This module implements a bounded blocking deque using one mutex and two
//! condition variables.
//!
//! ## Design Philosophy
//!
//! The deque favors a small, obviously-correct synchronization core over
//! lock-free cleverness:
//!
//! - **One lock**: The storage and the in-flight counter share a single mutex;
//!   front and back share one occupancy invariant, so a lock per end would buy
//!   nothing
//! - **Two condition variables**: `not_empty` wakes consumers, `not_full` wakes
//!   producers
//! - **Predicate loops**: Every wait re-checks its predicate in a loop, which is
//!   what makes spurious wakeups and multiple waiters safe
//! - **Uniform results**: Blocking, timed, and non-blocking calls all go through
//!   the same [`Wait`] mode and return the same `Result` shape
//!
//! ## Waiting Model
//!
//! ```text
//! Producer (push_back/push_front)      Consumer (pop_front/peek_front)
//! -------------------------------      -------------------------------
//! lock                                 lock
//! while full: wait(not_full)           while empty: wait(not_empty)
//! mutate storage                       read/remove front
//! notify(not_empty)                    notify(not_full) [pop only]
//! unlock                               unlock
//! ```
//!
//! Timed waits compute an absolute deadline on entry and wait on the remaining
//! time each iteration; once the remaining time hits zero the call fails with
//! `Full` or `Empty` rather than waiting further.
//!
//! ## Ordering Guarantees
//!
//! Items are strictly FIFO: back-inserted items come out only after every item
//! ahead of them, except where [`BlockingDeque::push_front`] is used to place an
//! item at the head of the line. No wake-order fairness is promised among
//! blocked callers beyond what the platform condvar provides.
//!
//! ## Example
//!
//! ```rust
//! use dequex::{BlockingDeque, Wait};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let deque = Arc::new(BlockingDeque::new(4));
//!
//! let producer = thread::spawn({
//!     let deque = Arc::clone(&deque);
//!     move || {
//!         for i in 0..8 {
//!             deque.push_back(i, Wait::Block).unwrap();
//!         }
//!     }
//! });
//!
//! let consumer = thread::spawn({
//!     let deque = Arc::clone(&deque);
//!     move || {
//!         let mut sum = 0;
//!         for _ in 0..8 {
//!             sum += deque.pop_front(Wait::Block).unwrap();
//!         }
//!         sum
//!     }
//! });
//!
//! producer.join().unwrap();
//! assert_eq!(consumer.join().unwrap(), 28);
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::{Error, Result};

/// How long an operation is allowed to wait for its predicate.
///
/// Every blocking operation on [`BlockingDeque`] takes a `Wait`, which makes the
/// blocking / timed / non-blocking variants a single uniform API instead of
/// three method families.
///
/// # Examples
///
/// ```rust
/// use dequex::{BlockingDeque, Error, Wait};
/// use std::time::Duration;
///
/// let deque: BlockingDeque<i32> = BlockingDeque::new(1);
///
/// // Non-blocking: fail immediately when the predicate does not hold.
/// assert_eq!(deque.pop_front(Wait::NoWait), Err(Error::Empty));
///
/// // Timed: give up once the deadline passes.
/// assert_eq!(
///     deque.pop_front(Wait::Timeout(Duration::from_millis(10))),
///     Err(Error::Empty)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wait {
    /// Wait indefinitely until the operation can proceed
    Block,
    /// Wait at most the given duration, then fail with `Full`/`Empty`
    Timeout(Duration),
    /// Fail immediately if the operation cannot proceed
    NoWait,
}

impl Wait {
    /// Build a bounded wait from (possibly fractional) seconds.
    ///
    /// `Duration` cannot express a negative timeout, so the validation that a
    /// caller-supplied timeout is non-negative lives here: negative or
    /// non-finite values are rejected with [`Error::InvalidTimeout`] before any
    /// lock is touched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dequex::{Error, Wait};
    ///
    /// assert!(Wait::timeout_secs(0.1).is_ok());
    /// assert_eq!(Wait::timeout_secs(-0.1), Err(Error::InvalidTimeout));
    /// assert_eq!(Wait::timeout_secs(f64::NAN), Err(Error::InvalidTimeout));
    /// ```
    pub fn timeout_secs(secs: f64) -> Result<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(Error::InvalidTimeout);
        }
        Ok(Wait::Timeout(Duration::from_secs_f64(secs)))
    }
}

// Storage and bookkeeping guarded by the one mutex. Front of `items` is the
// next item to be removed.
struct Inner<T> {
    items: VecDeque<T>,
    in_flight: usize,
}

/// A thread-safe, bounded, double-ended blocking queue.
///
/// Producers insert at the back with [`push_back`](Self::push_back) or jump the
/// queue with [`push_front`](Self::push_front); consumers remove from the front
/// with [`pop_front`](Self::pop_front) or inspect it non-destructively with
/// [`peek_front`](Self::peek_front). Each operation accepts a [`Wait`] mode
/// selecting blocking, timed, or non-blocking behavior.
///
/// A capacity of `0` means unbounded: inserts never wait and never fail.
///
/// # Peek
///
/// `peek_front` uses the same waiting discipline as `pop_front` but leaves the
/// item in place, so a consumer can decide whether it can process the next item
/// without losing its place in line. A peek does not change occupancy and does
/// not wake waiting producers.
///
/// # In-flight accounting
///
/// Every successful insert increments an in-flight counter; callers that want
/// simple work-tracking call [`task_done`](Self::task_done) once per processed
/// item and read [`in_flight`](Self::in_flight). There is no join/wait-for-idle
/// mechanism.
///
/// # Examples
///
/// ```rust
/// use dequex::{BlockingDeque, Error, Wait};
///
/// let deque = BlockingDeque::new(1);
/// deque.push_back(10, Wait::Block)?;
/// assert_eq!(deque.push_back(20, Wait::NoWait), Err(Error::Full));
/// assert_eq!(deque.pop_front(Wait::Block)?, 10);
/// deque.push_back(20, Wait::Block)?;
/// # Ok::<(), dequex::Error>(())
/// ```
///
/// # Thread Safety
///
/// All operations, including positional reads and `Debug`/`Display` formatting,
/// acquire the internal mutex, so a shared `Arc<BlockingDeque<T>>` never
/// observes a torn snapshot.
pub struct BlockingDeque<T> {
    // Guards items and in_flight; both condvars are associated with this mutex
    inner: Mutex<Inner<T>>,

    // Signaled after every successful insert
    not_empty: Condvar,

    // Signaled after every successful removal
    not_full: Condvar,

    // Maximum number of items, 0 = unbounded; immutable after construction
    capacity: usize,
}

impl<T> BlockingDeque<T> {
    /// Create a new deque with the given capacity.
    ///
    /// A capacity of `0` means unbounded.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::with_capacity(capacity),
                in_flight: 0,
            }),
            not_empty: Condvar::new(),
            not_full: Condvar::new(),
            capacity,
        }
    }

    /// Create a new unbounded deque.
    ///
    /// Equivalent to `BlockingDeque::new(0)`.
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    /// Insert an item at the back of the deque.
    ///
    /// Waits per `wait` while the deque is at capacity. Fails with
    /// [`Error::Full`] when the wait mode does not permit (further) waiting.
    /// Unbounded deques never wait.
    pub fn push_back(&self, item: T, wait: Wait) -> Result<()> {
        let inner = self.inner.lock().unwrap();
        let mut inner = self.wait_for_slot(inner, wait)?;
        inner.items.push_back(item);
        inner.in_flight += 1;
        self.not_empty.notify_one();
        Ok(())
    }

    /// Insert an item at the front of the deque, ahead of the normal order.
    ///
    /// The item becomes the very next one removed, which lets a caller re-queue
    /// a high-priority item without any priority machinery. Capacity and wait
    /// semantics are identical to [`push_back`](Self::push_back).
    pub fn push_front(&self, item: T, wait: Wait) -> Result<()> {
        let inner = self.inner.lock().unwrap();
        let mut inner = self.wait_for_slot(inner, wait)?;
        inner.items.push_front(item);
        inner.in_flight += 1;
        self.not_empty.notify_one();
        Ok(())
    }

    /// Remove and return the item at the front of the deque.
    ///
    /// Waits per `wait` while the deque is empty. Fails with [`Error::Empty`]
    /// when the wait mode does not permit (further) waiting.
    pub fn pop_front(&self, wait: Wait) -> Result<T> {
        let inner = self.inner.lock().unwrap();
        let mut inner = self.wait_for_item(inner, wait)?;
        // wait_for_item only returns with at least one item present
        let item = inner.items.pop_front().unwrap();
        self.not_full.notify_one();
        Ok(item)
    }

    /// Return a clone of the item at the front of the deque without removing it.
    ///
    /// Same waiting discipline as [`pop_front`](Self::pop_front): waits per
    /// `wait` while the deque is empty and fails with [`Error::Empty`] when the
    /// wait mode does not permit (further) waiting. Neither the storage nor the
    /// in-flight counter is mutated.
    pub fn peek_front(&self, wait: Wait) -> Result<T>
    where
        T: Clone,
    {
        let inner = self.inner.lock().unwrap();
        let inner = self.wait_for_item(inner, wait)?;
        // A peek frees no slot, so waiting producers are not woken.
        Ok(inner.items.front().unwrap().clone())
    }

    /// Non-blocking shorthand for `push_back(item, Wait::NoWait)`.
    pub fn try_push_back(&self, item: T) -> Result<()> {
        self.push_back(item, Wait::NoWait)
    }

    /// Non-blocking shorthand for `push_front(item, Wait::NoWait)`.
    pub fn try_push_front(&self, item: T) -> Result<()> {
        self.push_front(item, Wait::NoWait)
    }

    /// Non-blocking shorthand for `pop_front(Wait::NoWait)`.
    pub fn try_pop_front(&self) -> Result<T> {
        self.pop_front(Wait::NoWait)
    }

    /// Non-blocking shorthand for `peek_front(Wait::NoWait)`.
    pub fn try_peek_front(&self) -> Result<T>
    where
        T: Clone,
    {
        self.peek_front(Wait::NoWait)
    }

    /// Return a clone of the item at position `index`, front = index 0.
    ///
    /// This is a diagnostic accessor: it never blocks and an out-of-range index
    /// returns `None` rather than failing, so debug inspection can never
    /// destabilize a running pipeline. The read still happens under the mutex
    /// for a consistent snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dequex::{BlockingDeque, Wait};
    ///
    /// let deque = BlockingDeque::unbounded();
    /// deque.push_back(10, Wait::Block).unwrap();
    /// assert_eq!(deque.get(0), Some(10));
    /// assert_eq!(deque.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        let inner = self.inner.lock().unwrap();
        inner.items.get(index).cloned()
    }

    /// Get the current number of items in the deque.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    /// Check if the deque is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().items.is_empty()
    }

    /// Check if the deque is at capacity. Always `false` for unbounded deques.
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.inner.lock().unwrap().items.len() == self.capacity
    }

    /// Get the capacity this deque was constructed with, `0` = unbounded.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of items inserted but not yet marked complete.
    pub fn in_flight(&self) -> usize {
        self.inner.lock().unwrap().in_flight
    }

    /// Mark one previously removed item as complete.
    ///
    /// Decrements the in-flight counter; calling it more times than items were
    /// inserted leaves the counter at zero.
    pub fn task_done(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight = inner.in_flight.saturating_sub(1);
    }

    // Wait until the deque has a free slot, per the wait mode. Returns holding
    // the lock with `items.len() < capacity` (or unbounded).
    fn wait_for_slot<'a>(
        &self,
        mut inner: MutexGuard<'a, Inner<T>>,
        wait: Wait,
    ) -> Result<MutexGuard<'a, Inner<T>>> {
        if self.capacity == 0 {
            return Ok(inner);
        }
        match wait {
            Wait::NoWait => {
                if inner.items.len() == self.capacity {
                    return Err(Error::Full);
                }
            }
            Wait::Block => {
                while inner.items.len() == self.capacity {
                    inner = self.not_full.wait(inner).unwrap();
                }
            }
            Wait::Timeout(timeout) => {
                let deadline = deadline_after(timeout);
                while inner.items.len() == self.capacity {
                    match remaining_until(deadline) {
                        Some(remaining) if remaining.is_zero() => return Err(Error::Full),
                        Some(remaining) => {
                            inner = self.not_full.wait_timeout(inner, remaining).unwrap().0;
                        }
                        // Deadline unrepresentable, wait unbounded
                        None => inner = self.not_full.wait(inner).unwrap(),
                    }
                }
            }
        }
        Ok(inner)
    }

    // Wait until the deque has at least one item, per the wait mode. Returns
    // holding the lock with `items` non-empty.
    fn wait_for_item<'a>(
        &self,
        mut inner: MutexGuard<'a, Inner<T>>,
        wait: Wait,
    ) -> Result<MutexGuard<'a, Inner<T>>> {
        match wait {
            Wait::NoWait => {
                if inner.items.is_empty() {
                    return Err(Error::Empty);
                }
            }
            Wait::Block => {
                while inner.items.is_empty() {
                    inner = self.not_empty.wait(inner).unwrap();
                }
            }
            Wait::Timeout(timeout) => {
                let deadline = deadline_after(timeout);
                while inner.items.is_empty() {
                    match remaining_until(deadline) {
                        Some(remaining) if remaining.is_zero() => return Err(Error::Empty),
                        Some(remaining) => {
                            inner = self.not_empty.wait_timeout(inner, remaining).unwrap().0;
                        }
                        None => inner = self.not_empty.wait(inner).unwrap(),
                    }
                }
            }
        }
        Ok(inner)
    }
}

// Absolute deadline for a timed wait, computed once at call entry. `None` when
// the duration overflows Instant arithmetic (an effectively unbounded wait).
fn deadline_after(timeout: Duration) -> Option<Instant> {
    Instant::now().checked_add(timeout)
}

fn remaining_until(deadline: Option<Instant>) -> Option<Duration> {
    deadline.map(|d| d.saturating_duration_since(Instant::now()))
}

impl<T> Default for BlockingDeque<T> {
    /// An unbounded deque, matching `BlockingDeque::unbounded()`.
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T: fmt::Debug> fmt::Debug for BlockingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("BlockingDeque")
            .field("items", &inner.items)
            .field("capacity", &self.capacity)
            .field("in_flight", &inner.in_flight)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Display for BlockingDeque<T> {
    /// Human-readable snapshot of current contents, front first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock().unwrap();
        write!(f, "BlockingDeque {:?}", inner.items)
    }
}
