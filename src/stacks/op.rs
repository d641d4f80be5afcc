//! Operation vocabulary for the two-stack machine.
//!
//! [`Op`] is one of the eight primitives the sorter emits. [`Instruction`]
//! extends it with the three composite aliases (`ss`, `rr`, `rrr`) that only
//! the checker accepts.

use std::fmt;
use std::str::FromStr;

use crate::push_swap_error::PushSwapError;

/// One of the eight atomic stack operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Op {
    /// Exchange the top two elements of A.
    SwapA,
    /// Exchange the top two elements of B.
    SwapB,
    /// Move the top of B onto A.
    PushA,
    /// Move the top of A onto B.
    PushB,
    /// Move the top of A to its bottom.
    RotateA,
    /// Move the top of B to its bottom.
    RotateB,
    /// Move the bottom of A to its top.
    ReverseRotateA,
    /// Move the bottom of B to its top.
    ReverseRotateB,
}

impl Op {
    /// Every primitive, in canonical token order.
    pub const ALL: [Op; 8] = [
        Op::SwapA,
        Op::SwapB,
        Op::PushA,
        Op::PushB,
        Op::RotateA,
        Op::RotateB,
        Op::ReverseRotateA,
        Op::ReverseRotateB,
    ];

    /// The canonical output token for this primitive.
    pub const fn token(self) -> &'static str {
        match self {
            Op::SwapA => "sa",
            Op::SwapB => "sb",
            Op::PushA => "pa",
            Op::PushB => "pb",
            Op::RotateA => "ra",
            Op::RotateB => "rb",
            Op::ReverseRotateA => "rra",
            Op::ReverseRotateB => "rrb",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Op {
    type Err = PushSwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| PushSwapError::UnknownOp(s.to_string()))
    }
}

/// A checker instruction: a single primitive or a composite applied to both
/// stacks, A first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Single(Op),
    /// `ss`: `sa` then `sb`.
    SwapBoth,
    /// `rr`: `ra` then `rb`.
    RotateBoth,
    /// `rrr`: `rra` then `rrb`.
    ReverseRotateBoth,
}

impl Instruction {
    /// The primitives this instruction expands to, in application order.
    pub fn ops(self) -> &'static [Op] {
        match self {
            Instruction::Single(op) => match op {
                Op::SwapA => &[Op::SwapA],
                Op::SwapB => &[Op::SwapB],
                Op::PushA => &[Op::PushA],
                Op::PushB => &[Op::PushB],
                Op::RotateA => &[Op::RotateA],
                Op::RotateB => &[Op::RotateB],
                Op::ReverseRotateA => &[Op::ReverseRotateA],
                Op::ReverseRotateB => &[Op::ReverseRotateB],
            },
            Instruction::SwapBoth => &[Op::SwapA, Op::SwapB],
            Instruction::RotateBoth => &[Op::RotateA, Op::RotateB],
            Instruction::ReverseRotateBoth => &[Op::ReverseRotateA, Op::ReverseRotateB],
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Instruction::Single(op) => op.token(),
            Instruction::SwapBoth => "ss",
            Instruction::RotateBoth => "rr",
            Instruction::ReverseRotateBoth => "rrr",
        }
    }
}

impl From<Op> for Instruction {
    fn from(op: Op) -> Self {
        Instruction::Single(op)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Instruction {
    type Err = PushSwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ss" => Ok(Instruction::SwapBoth),
            "rr" => Ok(Instruction::RotateBoth),
            "rrr" => Ok(Instruction::ReverseRotateBoth),
            other => other.parse::<Op>().map(Instruction::Single),
        }
    }
}
