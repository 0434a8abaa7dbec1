use rand::Rng;

use crate::generator::randomness::shuffle;
use crate::model::{
    GenerateError, MemoryQuestion, MemorySolution, Puzzle, PuzzleKind, Question, Solution,
};

pub const BOARD_SIZE: usize = 4;
pub const PAIR_COUNT: u8 = 8;

/// Lays the eight value pairs out in uniform random order. The layout is the
/// solution; the question reveals only the board size, since this puzzle is
/// played by flipping, not by solving.
pub(crate) fn generate(rng: &mut impl Rng) -> Result<Puzzle, GenerateError> {
    let values: Vec<u8> = (1..=PAIR_COUNT).flat_map(|value| [value, value]).collect();
    let board: Vec<Vec<u8>> = shuffle(rng, &values)
        .chunks(BOARD_SIZE)
        .map(|row| row.to_vec())
        .collect();

    Ok(Puzzle::new(
        PuzzleKind::Memory,
        Question::Memory(MemoryQuestion { size: BOARD_SIZE }),
        Solution::Memory(MemorySolution { board }),
    ))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::tests::property_iterations;

    #[test]
    fn test_board_is_four_by_four_with_eight_pairs() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..property_iterations() {
            let puzzle = generate(&mut rng).unwrap();
            let Question::Memory(question) = &puzzle.question else {
                panic!("wrong question payload");
            };
            assert_eq!(question.size, BOARD_SIZE);

            let Solution::Memory(solution) = &puzzle.solution else {
                panic!("wrong solution payload");
            };
            assert_eq!(solution.board.len(), BOARD_SIZE);

            let mut occurrences: HashMap<u8, usize> = HashMap::new();
            for row in &solution.board {
                assert_eq!(row.len(), BOARD_SIZE);
                for &value in row {
                    *occurrences.entry(value).or_insert(0) += 1;
                }
            }
            assert_eq!(occurrences.len(), PAIR_COUNT as usize);
            assert!(occurrences.values().all(|&n| n == 2));
            assert!(occurrences.keys().all(|&v| (1..=PAIR_COUNT).contains(&v)));
        }
    }
}
