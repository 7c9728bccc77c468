//! # Property-Based Tests
//!
//! LIFO ordering and size accounting checked with proptest.

use proptest::collection::vec;
use proptest::prelude::*;
use tda_core::{Stack, StackError};

/// One step applied to a stack under test.
#[derive(Debug, Clone)]
enum Op {
    Push(String),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ".{0,16}".prop_map(Op::Push),
        Just(Op::Pop),
    ]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// N pushes followed by N pops come back in exact reverse order.
    #[test]
    fn pops_reverse_pushes(items in vec(".{0,32}", 0..64)) {
        let mut stack = Stack::new();
        for item in &items {
            stack.push(item.clone());
        }

        let mut popped = Vec::with_capacity(items.len());
        while stack.size() > 0 {
            popped.push(stack.pop().expect("non-empty pop"));
        }

        let mut expected = items.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
    }

    /// Size always equals successful pushes minus successful pops,
    /// and every pop agrees with a plain Vec model.
    #[test]
    fn size_tracks_successful_operations(ops in vec(op_strategy(), 0..128)) {
        let mut stack = Stack::new();
        let mut model: Vec<String> = Vec::new();
        let mut pushes = 0usize;
        let mut pops = 0usize;

        for op in ops {
            match op {
                Op::Push(x) => {
                    stack.push(x.clone());
                    model.push(x);
                    pushes += 1;
                }
                Op::Pop => {
                    let result = stack.pop();
                    match model.pop() {
                        Some(expected) => {
                            prop_assert_eq!(result, Ok(expected));
                            pops += 1;
                        }
                        None => prop_assert_eq!(result, Err(StackError::EmptyStack)),
                    }
                }
            }
            prop_assert_eq!(stack.size(), pushes - pops);
            prop_assert_eq!(stack.peek(), model.last().map(String::as_str));
        }
    }

    /// Pop on a drained stack keeps failing until something is pushed.
    #[test]
    fn empty_pop_is_idempotent(items in vec(".{0,8}", 0..16), attempts in 1usize..16) {
        let mut stack: Stack = items.into_iter().collect();
        while stack.pop().is_ok() {}

        for _ in 0..attempts {
            prop_assert_eq!(stack.pop(), Err(StackError::EmptyStack));
            prop_assert_eq!(stack.size(), 0);
        }

        stack.push("again");
        prop_assert_eq!(stack.pop(), Ok("again".to_string()));
    }

    /// Push never fails and grows the stack by exactly one, whatever the input.
    #[test]
    fn push_always_grows_by_one(prefill in 0usize..32, len in 0usize..10_000) {
        let mut stack = Stack::new();
        for i in 0..prefill {
            stack.push(i.to_string());
        }

        let long = "x".repeat(len);
        stack.push(long.clone());

        prop_assert_eq!(stack.size(), prefill + 1);
        prop_assert_eq!(stack.peek(), Some(long.as_str()));
    }
}
