//! Invariant checks for the two-stack machine.
//!
//! `StackPair` implements [`DebugInvariants`]: every rank in `0..n` must be
//! held by exactly one element across stacks A and B. The solver dispatcher
//! runs the check after each solve in debug builds and with the
//! `check-invariants` feature.

use crate::push_swap_error::PushSwapError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), PushSwapError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
