//! Regression guards on the average number of operations emitted for large
//! random inputs. These are tuning thresholds, not correctness bounds.

use push_swap::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn mean_ops(n: usize, trials: u64) -> f64 {
    let mut total = 0usize;
    for seed in 0..trials {
        let mut rng = SmallRng::seed_from_u64(0x5eed ^ seed);
        let mut values: Vec<i32> = (0..n as i32).map(|v| v * 11 - 2_000).collect();
        values.shuffle(&mut rng);
        let ops = sort_operations(&values);
        let mut stacks = StackPair::from_values(&values);
        for op in &ops {
            assert!(stacks.apply(*op), "no-op {op} emitted for seed {seed}");
        }
        assert!(stacks.is_sorted(), "n = {n}, seed = {seed}");
        total += ops.len();
    }
    total as f64 / trials as f64
}

#[test]
fn hundred_elements_mean_below_700() {
    let mean = mean_ops(100, 50);
    assert!(mean < 700.0, "mean {mean}");
}

#[test]
fn five_hundred_elements_mean_below_5500() {
    let mean = mean_ops(500, 10);
    assert!(mean < 5500.0, "mean {mean}");
}

#[test]
fn thousand_elements_sort() {
    mean_ops(1000, 2);
}
