//! `StackPair`: stacks A and B plus the log of executed primitives.
//!
//! Both stacks are `VecDeque`s with the top at the front, so every primitive
//! is O(1). A primitive that cannot act (too few elements) leaves the stacks
//! untouched and is not logged.

use std::collections::VecDeque;

use itertools::Itertools;

use super::op::{Instruction, Op};
use super::rank::rank_values;
use super::ranked::Ranked;
use crate::debug_invariants::DebugInvariants;
use crate::push_swap_error::PushSwapError;

/// The two working stacks and the operation log of a single run.
#[derive(Clone, Debug, Default)]
pub struct StackPair {
    a: VecDeque<Ranked>,
    b: VecDeque<Ranked>,
    log: Vec<Op>,
}

impl StackPair {
    /// Build a pair with `elements` in A (first element on top) and B empty.
    pub fn new(elements: impl IntoIterator<Item = Ranked>) -> Self {
        Self {
            a: elements.into_iter().collect(),
            b: VecDeque::new(),
            log: Vec::new(),
        }
    }

    /// Rank `values` and load them into A.
    pub fn from_values(values: &[i32]) -> Self {
        Self::new(rank_values(values))
    }

    /// Stack A, top first.
    #[inline]
    pub fn a(&self) -> &VecDeque<Ranked> {
        &self.a
    }

    /// Stack B, top first.
    #[inline]
    pub fn b(&self) -> &VecDeque<Ranked> {
        &self.b
    }

    #[inline]
    pub fn len_a(&self) -> usize {
        self.a.len()
    }

    #[inline]
    pub fn len_b(&self) -> usize {
        self.b.len()
    }

    /// Total number of elements across both stacks.
    #[inline]
    pub fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    #[inline]
    pub fn top_a(&self) -> Option<&Ranked> {
        self.a.front()
    }

    #[inline]
    pub fn top_b(&self) -> Option<&Ranked> {
        self.b.front()
    }

    /// Raw values of A, top first.
    pub fn values_a(&self) -> Vec<i32> {
        self.a.iter().map(|r| r.value).collect()
    }

    /// Whether A is strictly ascending by rank (top is smallest).
    pub fn a_is_ascending(&self) -> bool {
        self.a.iter().tuple_windows().all(|(x, y)| x.rank < y.rank)
    }

    /// Terminal success: A ascending and B empty.
    pub fn is_sorted(&self) -> bool {
        self.b.is_empty() && self.a_is_ascending()
    }

    /// Operations executed so far.
    #[inline]
    pub fn log(&self) -> &[Op] {
        &self.log
    }

    /// Take the operation log, leaving an empty one behind.
    pub fn take_log(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.log)
    }

    /// Execute one primitive. Returns `true` (and logs `op`) iff the stacks
    /// changed.
    pub fn apply(&mut self, op: Op) -> bool {
        let changed = match op {
            Op::SwapA => swap_top(&mut self.a),
            Op::SwapB => swap_top(&mut self.b),
            Op::PushA => transfer(&mut self.b, &mut self.a),
            Op::PushB => transfer(&mut self.a, &mut self.b),
            Op::RotateA => rotate_up(&mut self.a),
            Op::RotateB => rotate_up(&mut self.b),
            Op::ReverseRotateA => rotate_down(&mut self.a),
            Op::ReverseRotateB => rotate_down(&mut self.b),
        };
        if changed {
            self.log.push(op);
        }
        changed
    }

    /// Execute a checker instruction, composites expanding A then B.
    pub fn execute(&mut self, instruction: Instruction) {
        for &op in instruction.ops() {
            self.apply(op);
        }
    }

    /// Apply `op` `times` times.
    pub fn repeat(&mut self, op: Op, times: usize) {
        for _ in 0..times {
            self.apply(op);
        }
    }

    // === Named primitives ===

    pub fn sa(&mut self) -> bool {
        self.apply(Op::SwapA)
    }

    pub fn sb(&mut self) -> bool {
        self.apply(Op::SwapB)
    }

    pub fn pa(&mut self) -> bool {
        self.apply(Op::PushA)
    }

    pub fn pb(&mut self) -> bool {
        self.apply(Op::PushB)
    }

    pub fn ra(&mut self) -> bool {
        self.apply(Op::RotateA)
    }

    pub fn rb(&mut self) -> bool {
        self.apply(Op::RotateB)
    }

    pub fn rra(&mut self) -> bool {
        self.apply(Op::ReverseRotateA)
    }

    pub fn rrb(&mut self) -> bool {
        self.apply(Op::ReverseRotateB)
    }
}

fn swap_top(stack: &mut VecDeque<Ranked>) -> bool {
    if stack.len() < 2 {
        return false;
    }
    stack.swap(0, 1);
    true
}

fn transfer(from: &mut VecDeque<Ranked>, to: &mut VecDeque<Ranked>) -> bool {
    match from.pop_front() {
        Some(top) => {
            to.push_front(top);
            true
        }
        None => false,
    }
}

fn rotate_up(stack: &mut VecDeque<Ranked>) -> bool {
    if stack.len() < 2 {
        return false;
    }
    stack.rotate_left(1);
    true
}

fn rotate_down(stack: &mut VecDeque<Ranked>) -> bool {
    if stack.len() < 2 {
        return false;
    }
    stack.rotate_right(1);
    true
}

impl DebugInvariants for StackPair {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "StackPair invalid");
    }

    /// Every rank in `0..len` is held by exactly one element across A and B.
    fn validate_invariants(&self) -> Result<(), PushSwapError> {
        let n = self.len();
        let mut seen = vec![false; n];
        for r in self.a.iter().chain(self.b.iter()) {
            match seen.get_mut(r.rank) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => return Err(PushSwapError::DuplicateRank(r.rank)),
                None => return Err(PushSwapError::MissingRank(
                    seen.iter().position(|s| !*s).unwrap_or(r.rank),
                )),
            }
        }
        match seen.iter().position(|s| !*s) {
            Some(rank) => Err(PushSwapError::MissingRank(rank)),
            None => Ok(()),
        }
    }
}
