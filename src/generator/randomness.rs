use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Uniformly random reordering of `items`; the input is left untouched.
pub fn shuffle<T: Clone>(rng: &mut impl Rng, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// One uniformly random element. Sampling from nothing is a caller bug.
pub fn sample<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    items
        .choose(rng)
        .expect("cannot sample from an empty slice")
}

/// Uniformly random bijection from `left` onto `right` as an index table:
/// `table[i]` is the index in `right` paired with `left[i]`.
pub fn random_mapping<A, B>(rng: &mut impl Rng, left: &[A], right: &[B]) -> Vec<usize> {
    assert_eq!(
        left.len(),
        right.len(),
        "a bijection requires equal-size sets"
    );
    let mut table: Vec<usize> = (0..right.len()).collect();
    table.shuffle(rng);
    table
}

/// All `n!` orderings of `items`, lazily, one `Vec` per step. Each call starts
/// a fresh enumeration; the order is Heap's, not lexicographic.
pub fn permutations<T: Clone>(items: &[T]) -> Permutations<T> {
    Permutations {
        counters: vec![0; items.len()],
        items: items.to_vec(),
        index: 0,
        started: false,
        done: false,
    }
}

/// Iterative Heap's algorithm: each successive ordering differs from the
/// previous one by a single swap.
pub struct Permutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    index: usize,
    started: bool,
    done: bool,
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }
        while self.index < self.items.len() {
            if self.counters[self.index] < self.index {
                if self.index % 2 == 0 {
                    self.items.swap(0, self.index);
                } else {
                    self.items.swap(self.counters[self.index], self.index);
                }
                self.counters[self.index] += 1;
                self.index = 0;
                return Some(self.items.clone());
            }
            self.counters[self.index] = 0;
            self.index += 1;
        }
        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_shuffle_preserves_elements_without_mutating_input() {
        let mut rng = StdRng::seed_from_u64(11);
        let items: Vec<u32> = (0..50).collect();
        let shuffled = shuffle(&mut rng, &items);

        assert_eq!(items, (0..50).collect::<Vec<u32>>());
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_sample_returns_member() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = [3, 7, 11];
        for _ in 0..20 {
            assert!(items.contains(sample(&mut rng, &items)));
        }
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn test_sample_panics_on_empty_input() {
        let mut rng = StdRng::seed_from_u64(11);
        sample(&mut rng, &[] as &[u32]);
    }

    #[test]
    fn test_random_mapping_is_a_bijection() {
        let mut rng = StdRng::seed_from_u64(11);
        let left = ["a", "b", "c", "d", "e"];
        let right = [10, 20, 30, 40, 50];
        for _ in 0..20 {
            let table = random_mapping(&mut rng, &left, &right);
            let targets: HashSet<usize> = table.iter().copied().collect();
            assert_eq!(targets.len(), left.len());
            assert!(targets.iter().all(|&t| t < right.len()));
        }
    }

    #[test]
    #[should_panic(expected = "equal-size sets")]
    fn test_random_mapping_rejects_mismatched_sets() {
        let mut rng = StdRng::seed_from_u64(11);
        random_mapping(&mut rng, &[1, 2, 3], &[1, 2]);
    }

    #[test]
    fn test_permutations_enumerates_exactly_n_factorial() {
        let seen: HashSet<Vec<u8>> = permutations(&[1u8, 2, 3, 4]).collect();
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn test_permutations_of_trivial_inputs() {
        assert_eq!(permutations(&[] as &[u8]).count(), 1);
        assert_eq!(permutations(&[9u8]).collect::<Vec<_>>(), vec![vec![9]]);
    }

    #[test]
    fn test_permutations_restart_independently() {
        let first: HashSet<Vec<u8>> = permutations(&[1u8, 2, 3]).collect();
        let second: HashSet<Vec<u8>> = permutations(&[1u8, 2, 3]).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }
}
