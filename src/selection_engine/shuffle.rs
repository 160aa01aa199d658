use rand::Rng;

/// Return a uniformly shuffled copy of `items`.
///
/// Fisher-Yates, single backward pass: each index `i` from `len - 1` down
/// to 1 swaps with a uniformly chosen index in `[0, i]`, giving all `n!`
/// permutations equal probability. The input slice is left untouched so
/// callers that keep the source around never see it reordered.
pub fn shuffled<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out: Vec<T> = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Draw up to `count` items uniformly at random, without replacement.
///
/// Shuffles a copy and takes the prefix; asking for more than the slice
/// holds returns everything in random order.
pub fn draw<T: Clone, R: Rng>(rng: &mut R, items: &[T], count: usize) -> Vec<T> {
    let mut out = shuffled(rng, items);
    out.truncate(count);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffled_is_a_permutation_of_the_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<u32> = (0..20).collect();

        let out = shuffled(&mut rng, &items);

        assert_eq!(out.len(), items.len());
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items, "output must hold the same multiset of elements");
    }

    #[test]
    fn shuffled_does_not_mutate_the_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..10).collect();
        let before = items.clone();

        let _ = shuffled(&mut rng, &items);

        assert_eq!(items, before);
    }

    #[test]
    fn shuffled_handles_empty_and_single_element_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<u32> = Vec::new();
        assert!(shuffled(&mut rng, &empty).is_empty());
        assert_eq!(shuffled(&mut rng, &[9u32]), vec![9]);
    }

    #[test]
    fn shuffled_is_deterministic_with_seed() {
        let items: Vec<u32> = (0..30).collect();
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffled(&mut rng, &items)
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn draw_returns_exactly_count_distinct_items() {
        let mut rng = StdRng::seed_from_u64(5);
        let items: Vec<u32> = (0..20).collect();

        let out = draw(&mut rng, &items, 8);

        assert_eq!(out.len(), 8);
        let mut seen = std::collections::HashSet::new();
        for x in &out {
            assert!(seen.insert(*x), "duplicate item {x} in draw");
            assert!(items.contains(x));
        }
    }

    #[test]
    fn draw_clamps_to_available_items() {
        let mut rng = StdRng::seed_from_u64(5);
        let items: Vec<u32> = (0..3).collect();
        assert_eq!(draw(&mut rng, &items, 10).len(), 3);
    }

    #[test]
    fn shuffle_positions_are_roughly_uniform() {
        // Statistical check: over many trials each element should land in
        // each position with frequency near 1/n. Deterministic via seed.
        let n = 6usize;
        let trials = 6000usize;
        let items: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);

        // counts[pos] = how often element 0 landed at pos.
        let mut counts = vec![0usize; n];
        for _ in 0..trials {
            let out = shuffled(&mut rng, &items);
            let pos = out.iter().position(|&x| x == 0).unwrap();
            counts[pos] += 1;
        }

        let expected = trials / n;
        for (pos, &c) in counts.iter().enumerate() {
            assert!(
                c > expected * 7 / 10 && c < expected * 13 / 10,
                "element 0 at position {pos}: {c} of {trials} trials \
                 (expected near {expected})"
            );
        }
    }
}
