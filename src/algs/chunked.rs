//! General solver: chunked distribution into B, then a nearest-rotation drain
//! back into A.

use log::trace;

use crate::stacks::op::Op;
use crate::stacks::pair::StackPair;

/// Sort A of any length using chunks of `chunk` ranks. B must be empty.
///
/// A zero chunk is treated as 1; distribution would never make progress
/// otherwise.
pub fn sort_chunked(stacks: &mut StackPair, chunk: usize) {
    distribute(stacks, chunk.max(1));
    trace!("distribution done: {} ops, {} in B", stacks.log().len(), stacks.len_b());
    drain(stacks);
    trace!("drain done: {} ops", stacks.log().len());
}

/// Move all of A into B.
///
/// An element whose rank is below the current size of B is pushed and sent
/// to B's bottom; one inside the window `size(B)..size(B) + chunk` stays on
/// top; anything else is rotated to A's bottom for a later round.
pub fn distribute(stacks: &mut StackPair, chunk: usize) {
    while let Some(top) = stacks.top_a() {
        let count = stacks.len_b();
        let rank = top.rank;
        if rank < count {
            stacks.pb();
            stacks.rb();
        } else if rank - count < chunk {
            stacks.pb();
        } else {
            stacks.ra();
        }
    }
}

/// Push B back onto A, highest rank first, rotating B toward whichever end
/// is closer to that element.
pub fn drain(stacks: &mut StackPair) {
    while let Some(pos) = highest_rank_position(stacks) {
        let len = stacks.len_b();
        if pos < len / 2 {
            stacks.repeat(Op::RotateB, pos);
        } else if pos > 0 {
            stacks.repeat(Op::ReverseRotateB, len - pos);
        }
        stacks.pa();
    }
}

/// Distance from B's top to its highest-ranked element, or `None` if B is
/// empty.
pub fn highest_rank_position(stacks: &StackPair) -> Option<usize> {
    stacks
        .b()
        .iter()
        .enumerate()
        .max_by_key(|(_, r)| r.rank)
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stacks::ranked::Ranked;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn shuffled(n: usize, seed: u64) -> Vec<i32> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut v: Vec<i32> = (0..n as i32).map(|x| x * 3 - 100).collect();
        v.shuffle(&mut rng);
        v
    }

    #[test]
    fn sorts_reverse_input() {
        let values: Vec<i32> = (0..20).rev().collect();
        let mut s = StackPair::from_values(&values);
        sort_chunked(&mut s, 15);
        assert!(s.is_sorted());
    }

    #[test]
    fn sorts_random_inputs() {
        for seed in 0..20 {
            let values = shuffled(6 + seed as usize * 7, seed);
            let mut s = StackPair::from_values(&values);
            sort_chunked(&mut s, 15);
            assert!(s.is_sorted(), "seed {seed}");
        }
    }

    #[test]
    fn chunk_size_does_not_affect_correctness() {
        let values = shuffled(60, 7);
        for chunk in [0, 1, 2, 5, 15, 30, 100] {
            let mut s = StackPair::from_values(&values);
            sort_chunked(&mut s, chunk);
            assert!(s.is_sorted(), "chunk {chunk}");
        }
    }

    #[test]
    fn unbounded_chunk_pushes_everything_in_order() {
        let mut s = StackPair::from_values(&[6, 5, 4, 3, 2, 1, 0]);
        sort_chunked(&mut s, usize::MAX);
        assert!(s.is_sorted());
        assert!(!s.log().contains(&Op::RotateA));
    }

    #[test]
    fn distribute_empties_a() {
        let mut s = StackPair::from_values(&shuffled(40, 3));
        distribute(&mut s, 15);
        assert_eq!(s.len_a(), 0);
        assert_eq!(s.len_b(), 40);
    }

    #[test]
    fn low_ranks_sink_to_bottom_of_b() {
        // Ranks 1, 0: rank 1 is pushed inside the window, then rank 0 is
        // below count 1 so it is pushed and rotated under it.
        let mut s = StackPair::new([Ranked::new(20, 1), Ranked::new(10, 0)]);
        distribute(&mut s, 15);
        assert_eq!(s.log(), &[Op::PushB, Op::PushB, Op::RotateB]);
        assert_eq!(s.b().iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 0]);
    }

    #[test]
    fn out_of_window_ranks_rotate_a() {
        let mut s = StackPair::new([Ranked::new(9, 2), Ranked::new(1, 0), Ranked::new(5, 1)]);
        distribute(&mut s, 1);
        assert_eq!(s.log()[0], Op::RotateA);
    }

    #[test]
    fn drain_picks_nearest_direction() {
        // B (top first): ranks 0, 1, 2, 3, 4 -> highest is at the bottom.
        let mut s = StackPair::new((0..5).rev().map(|r| Ranked::new(r as i32, r)));
        s.repeat(Op::PushB, 5);
        s.take_log();
        assert_eq!(highest_rank_position(&s), Some(4));
        drain(&mut s);
        assert_eq!(s.log()[0], Op::ReverseRotateB);
        assert!(s.is_sorted());
        assert!(!s.log().contains(&Op::RotateB));
    }

    #[test]
    fn drain_single_element_emits_only_pa() {
        let mut s = StackPair::new([Ranked::new(1, 0)]);
        s.pb();
        s.take_log();
        drain(&mut s);
        assert_eq!(s.log(), &[Op::PushA]);
    }

    #[test]
    fn highest_rank_position_empty() {
        assert_eq!(highest_rank_position(&StackPair::default()), None);
    }
}
