//! `Ranked`: a value paired with its immutable dense rank.

use std::fmt;

/// An input value together with its 0-based position in the ascending order
/// of the whole input set.
///
/// Ranks are assigned once by [`rank_values`](super::rank::rank_values) and
/// never change; every ordering decision in the solvers uses the rank, not
/// the raw value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Ranked {
    pub value: i32,
    pub rank: usize,
}

impl Ranked {
    #[inline]
    pub const fn new(value: i32, rank: usize) -> Self {
        Self { value, rank }
    }
}

impl fmt::Debug for Ranked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.value, self.rank)
    }
}

impl fmt::Display for Ranked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_and_display() {
        let r = Ranked::new(-7, 2);
        assert_eq!(format!("{r:?}"), "-7#2");
        assert_eq!(format!("{r}"), "-7");
    }
}
