//! # Types Module
//!
//! Shared type definitions for tda-core.
//!
//! This module contains:
//! - Error types (`StackError`)

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur when operating on a [`Stack`](crate::Stack).
///
/// - No silent failures: `pop` on an empty stack reports `EmptyStack`
/// - The CORE never panics; every error is recoverable by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` was called while the stack held no elements.
    #[error("empty stack")]
    EmptyStack,
}
