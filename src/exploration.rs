use rand::{
    distributions::{Distribution, WeightedIndex},
    seq::SliceRandom,
    Rng,
};

use crate::q_table::Hashable;

/// Uniform-random selection over the full action set
///
/// The non-learning policy: every action is equally likely, independent of
/// state or table contents.
///
/// **Panics** if `actions` is empty
pub fn uniform<A, R>(rng: &mut R, actions: &[A]) -> A
where
    A: Copy,
    R: Rng + ?Sized,
{
    *actions.choose(rng).expect("`actions` is not empty")
}

/// Epsilon-greedy selection with randomized tie-breaking
///
/// One `best` action is drawn uniformly from `best_set`, so ties are broken
/// fairly rather than favoring enumeration order. An action is then sampled
/// from the distribution that gives `best` probability `1 - epsilon` and
/// spreads `epsilon` evenly over every *other* action. At `epsilon = 0` this
/// collapses to certainty on `best`; at `epsilon = 1` the best action carries
/// no mass and the rest split it evenly.
///
/// `epsilon` must already be inside `[0,1]`; clamping is the schedule's job,
/// never the policy's.
///
/// **Panics** if `best_set` is empty
pub fn epsilon_greedy<A, R>(rng: &mut R, epsilon: f32, best_set: &[A], actions: &[A]) -> A
where
    A: Hashable,
    R: Rng + ?Sized,
{
    let best = *best_set.choose(rng).expect("`best_set` is not empty");
    let others = actions
        .iter()
        .copied()
        .filter(|&a| a != best)
        .collect::<Vec<_>>();
    if others.is_empty() {
        return best;
    }

    let weights = exploration_weights(epsilon, actions.len());
    let dist = WeightedIndex::new(&weights).expect("weights are nonnegative with positive sum");
    match dist.sample(rng) {
        0 => best,
        i => others[i - 1],
    }
}

/// Probability of the best action followed by each of the `n - 1` others
fn exploration_weights(epsilon: f32, n: usize) -> Vec<f32> {
    let spread = epsilon / (n - 1) as f32;
    let mut weights = vec![spread; n];
    weights[0] = 1.0 - epsilon;
    weights
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    const ACTIONS: [u8; 4] = [0, 1, 2, 3];

    #[test]
    fn weights_always_sum_to_one() {
        for epsilon in [0.0, 0.2, 0.5, 1.0] {
            for n in [2, 3, 4, 7] {
                let sum = exploration_weights(epsilon, n).iter().sum::<f32>();
                assert!(
                    (sum - 1.0).abs() < 1e-6,
                    "Weights sum to 1 for epsilon {} over {} actions, got {}",
                    epsilon,
                    n,
                    sum,
                );
            }
        }
    }

    #[test]
    fn uniform_reaches_every_action() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[uniform(&mut rng, &ACTIONS) as usize] = true;
        }
        assert_eq!(seen, [true; 4], "All actions drawn under uniform policy");
    }

    #[test]
    fn zero_epsilon_is_pure_exploitation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let action = epsilon_greedy(&mut rng, 0.0, &[2], &ACTIONS);
            assert_eq!(action, 2, "Greedy action is certain at epsilon 0");
        }
    }

    #[test]
    fn full_epsilon_never_exploits() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let action = epsilon_greedy(&mut rng, 1.0, &[2], &ACTIONS);
            assert_ne!(action, 2, "Best action carries no mass at epsilon 1");
        }
    }

    #[test]
    fn ties_break_uniformly_among_maxima() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[epsilon_greedy(&mut rng, 0.0, &[1, 3], &ACTIONS) as usize] += 1;
        }
        assert_eq!(counts[0] + counts[2], 0, "Only tied maxima are drawn");
        let share = counts[1] as f32 / 10_000.0;
        assert!(
            (share - 0.5).abs() < 0.02,
            "Tied maxima split evenly, got {}",
            share,
        );
    }

    #[test]
    fn sampled_frequencies_match_the_distribution() {
        const N: u32 = 100_000;
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..N {
            counts[epsilon_greedy(&mut rng, 0.2, &[1], &ACTIONS) as usize] += 1;
        }

        let best_share = counts[1] as f32 / N as f32;
        assert!(
            (best_share - 0.8).abs() < 0.01,
            "Best action drawn with probability 1 - epsilon, got {}",
            best_share,
        );
        for a in [0, 2, 3] {
            let share = counts[a] as f32 / N as f32;
            assert!(
                (share - 0.2 / 3.0).abs() < 0.01,
                "Other actions split epsilon evenly, got {} for action {}",
                share,
                a,
            );
        }
    }
}
