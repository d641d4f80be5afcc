//! Top-level module for the two-stack machine.
//!
//! It includes:
//! - The operation vocabulary (`Op` primitives and checker `Instruction`s)
//! - Ranked elements and the ranking pass over the initial input
//! - `StackPair`, which owns stacks A and B and logs every effective primitive
//!
//! Solvers and the checker both drive a `StackPair`; nothing else mutates the
//! stacks.

pub mod op;
pub mod pair;
pub mod rank;
pub mod ranked;

pub use op::{Instruction, Op};
pub use pair::StackPair;
pub use rank::{rank_values, ranks};
pub use ranked::Ranked;
