//! # push-swap
//!
//! push-swap sorts a list of distinct signed integers using two stacks and
//! eight primitive operations, and emits the operation sequence. A companion
//! checker replays an operation sequence against the original input and
//! reports whether it leaves stack A sorted and stack B empty.
//!
//! ## Features
//! - `StackPair`: stacks A and B over `VecDeque`, O(1) primitives, and an
//!   operation log that records only primitives that changed something
//! - Exact case-based solvers for two to five elements
//! - A chunked distribution / nearest-rotation drain solver for larger inputs,
//!   tunable through [`SolverConfig`](crate::config::SolverConfig)
//! - A replay engine with an explicit line reader for checker input
//!
//! ## Usage
//! ```rust
//! use push_swap::prelude::*;
//!
//! let ops = sort_operations(&[3, -1, 2]);
//! let script: String = ops.iter().map(|op| format!("{op}\n")).collect();
//! assert_eq!(check(&[3, -1, 2], script.as_bytes()), Ok(Verdict::Ok));
//! ```
//!
//! ## Logging
//! The crate logs through the `log` facade (solver choice and operation
//! counts at `debug`, phase progress at `trace`) and installs no logger.

pub mod algs;
pub mod checker;
pub mod config;
pub mod debug_invariants;
pub mod input;
pub mod push_swap_error;
pub mod stacks;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{solve, sort_operations, sort_operations_with};
    pub use crate::checker::{check, replay, InstructionReader, Verdict};
    pub use crate::config::SolverConfig;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::input::parse_args;
    pub use crate::push_swap_error::PushSwapError;
    pub use crate::stacks::{Instruction, Op, Ranked, StackPair};
}
