//! # tda-core
//!
//! The stack container for tda - THE LOGIC.
//!
//! This crate implements a last-in-first-out sequence of `String` values.
//! The tail of the sequence is the top of the stack: `push` appends to it,
//! `pop` removes from it, and `size` counts what is left.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Holds a single element type (`String`)
//! - Has no capacity limit
//! - Performs no I/O and does no logging
//! - Assumes a single owner; callers sharing a stack across threads must
//!   wrap it in their own lock
//!
//! ## Example
//!
//! ```
//! use tda_core::{Stack, StackError};
//!
//! let mut stack = Stack::new();
//! stack.push("world!");
//! stack.push("Hello, ");
//! assert_eq!(stack.size(), 2);
//!
//! let mut greeting = String::new();
//! while stack.size() > 0 {
//!     if let Ok(word) = stack.pop() {
//!         greeting.push_str(&word);
//!     }
//! }
//! assert_eq!(greeting, "Hello, world!");
//! assert_eq!(stack.pop(), Err(StackError::EmptyStack));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod stack;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use stack::Stack;
pub use types::StackError;
