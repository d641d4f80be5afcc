//! Sorting strategies and the dispatcher that picks one.

pub mod chunked;
pub mod small;

pub use chunked::sort_chunked;
pub use small::{sort_small, sort_three};

use log::debug;

use crate::config::{MAX_SMALL_LIMIT, SolverConfig};
use crate::debug_invariants::DebugInvariants;
use crate::stacks::op::Op;
use crate::stacks::pair::StackPair;

/// Sort the stacks in place, choosing the exact solver for small inputs and
/// the chunked solver otherwise. Already sorted input emits nothing.
pub fn solve(stacks: &mut StackPair, cfg: &SolverConfig) {
    let n = stacks.len_a();
    if stacks.is_sorted() {
        debug!("input of {n} elements already sorted");
        return;
    }
    if n <= cfg.small_limit.min(MAX_SMALL_LIMIT) {
        debug!("exact solver for {n} elements");
        sort_small(stacks);
    } else {
        let chunk = cfg.chunk_size(n);
        debug!("chunked solver for {n} elements, chunk {chunk}");
        sort_chunked(stacks, chunk);
    }
    stacks.debug_assert_invariants();
    debug_assert!(stacks.is_sorted(), "solver left stacks unsorted");
    debug!("emitted {} operations", stacks.log().len());
}

/// The operation sequence that sorts `values` under the default
/// configuration. `values` must be pairwise distinct.
pub fn sort_operations(values: &[i32]) -> Vec<Op> {
    sort_operations_with(values, &SolverConfig::default())
}

pub fn sort_operations_with(values: &[i32], cfg: &SolverConfig) -> Vec<Op> {
    let mut stacks = StackPair::from_values(values);
    solve(&mut stacks, cfg);
    stacks.take_log()
}
