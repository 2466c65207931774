//! Property-based tests for the blocking deque using proptest
//!
//! These tests verify that the deque maintains its invariants across arbitrary
//! operation sequences and edge cases.

use crate::deque::{BlockingDeque, Wait};
use proptest::prelude::*;

proptest! {
    /// FIFO ordering is preserved when only push_back is used
    #[test]
    fn test_fifo_ordering_single_thread(
        values in prop::collection::vec(any::<i32>(), 1..50)
    ) {
        let deque: BlockingDeque<i32> = BlockingDeque::unbounded();

        for &value in &values {
            deque.try_push_back(value).unwrap();
        }

        for &expected in &values {
            prop_assert_eq!(deque.try_pop_front(), Ok(expected));
        }

        prop_assert!(deque.is_empty());
    }

    /// len never exceeds capacity, and every accepted item can be drained
    #[test]
    fn test_capacity_invariant(
        capacity in 1usize..50,
        values in prop::collection::vec(any::<i32>(), 1..100)
    ) {
        let deque: BlockingDeque<i32> = BlockingDeque::new(capacity);
        let mut accepted = 0;

        for &value in &values {
            if deque.try_push_back(value).is_ok() {
                accepted += 1;
            }
            prop_assert!(deque.len() <= capacity);
        }

        prop_assert_eq!(deque.len(), accepted.min(capacity));

        let mut drained = 0;
        while deque.try_pop_front().is_ok() {
            drained += 1;
        }
        prop_assert_eq!(drained, accepted);
    }

    /// peek followed by pop with no intervening insert returns the same item
    #[test]
    fn test_peek_pop_agree(
        values in prop::collection::vec(any::<i32>(), 1..50)
    ) {
        let deque: BlockingDeque<i32> = BlockingDeque::unbounded();
        for &value in &values {
            deque.try_push_back(value).unwrap();
        }

        while let Ok(peeked) = deque.try_peek_front() {
            prop_assert_eq!(deque.try_pop_front(), Ok(peeked));
        }
        prop_assert!(deque.is_empty());
    }

    /// A front-inserted item is always the next one removed
    #[test]
    fn test_push_front_wins(
        existing in prop::collection::vec(any::<i32>(), 0..30),
        jumped in any::<i32>()
    ) {
        let deque: BlockingDeque<i32> = BlockingDeque::unbounded();
        for &value in &existing {
            deque.try_push_back(value).unwrap();
        }

        deque.try_push_front(jumped).unwrap();
        prop_assert_eq!(deque.try_pop_front(), Ok(jumped));

        // The rest come out in their original order
        for &expected in &existing {
            prop_assert_eq!(deque.try_pop_front(), Ok(expected));
        }
    }

    /// Mixed push/pop sequences keep len consistent and within bounds
    #[test]
    fn test_len_invariant(
        capacity in 1usize..50,
        operations in prop::collection::vec(prop::bool::weighted(0.7), 1..100)
    ) {
        let deque: BlockingDeque<i32> = BlockingDeque::new(capacity);
        let mut expected_len = 0usize;
        let mut counter = 0;

        for &should_push in &operations {
            if should_push {
                if deque.try_push_back(counter).is_ok() {
                    expected_len += 1;
                }
                counter += 1;
            } else if deque.try_pop_front().is_ok() {
                expected_len -= 1;
            }

            prop_assert_eq!(deque.len(), expected_len);
            prop_assert!(expected_len <= capacity);
        }
    }

    /// get(i) mirrors the front-to-back contents without consuming anything
    #[test]
    fn test_indexed_access_matches_contents(
        values in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let deque: BlockingDeque<i32> = BlockingDeque::unbounded();
        for &value in &values {
            deque.try_push_back(value).unwrap();
        }

        for (i, &expected) in values.iter().enumerate() {
            prop_assert_eq!(deque.get(i), Some(expected));
        }
        prop_assert_eq!(deque.get(values.len()), None);
        prop_assert_eq!(deque.len(), values.len());
    }

    /// Negative and non-finite timeouts are rejected regardless of magnitude
    #[test]
    fn test_negative_timeout_always_rejected(secs in -1000.0f64..-1e-9) {
        prop_assert_eq!(Wait::timeout_secs(secs), Err(crate::Error::InvalidTimeout));
    }

    /// Non-negative finite timeouts are always accepted
    #[test]
    fn test_non_negative_timeout_accepted(secs in 0.0f64..1000.0) {
        prop_assert!(Wait::timeout_secs(secs).is_ok());
    }
}
