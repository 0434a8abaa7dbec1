use log::trace;
use rand::Rng;

use crate::generator::grid::{adjacent_pairs, has_three_in_a_row};
use crate::model::{
    GenerateError, MatchThreeQuestion, MatchThreeSolution, Puzzle, PuzzleKind, Question, Solution,
};

pub const GRID_SIZE: usize = 5;
pub const TILE_KINDS: u8 = 7;
/// Target score shown to the player, not a property of the grid.
pub const TARGET_SCORE: u32 = 20;

const MAX_GRID_ATTEMPTS: usize = 1_000;

/// Rolls fresh grids until one has no pre-existing run of three but at least
/// one adjacent swap that creates one.
pub(crate) fn generate(rng: &mut impl Rng) -> Result<Puzzle, GenerateError> {
    for attempt in 0..MAX_GRID_ATTEMPTS {
        let grid = random_grid(rng);
        if has_three_in_a_row(&grid) {
            trace!(
                target: "match_three",
                "attempt {}: grid already matched, rerolling",
                attempt
            );
            continue;
        }
        let swaps = legal_swaps(&grid);
        if swaps.is_empty() {
            trace!(
                target: "match_three",
                "attempt {}: no swap creates a match, rerolling",
                attempt
            );
            continue;
        }
        trace!(
            target: "match_three",
            "accepted grid after {} rerolls with {} legal swaps",
            attempt,
            swaps.len()
        );
        return Ok(Puzzle::new(
            PuzzleKind::MatchThree,
            Question::MatchThree(MatchThreeQuestion { grid }),
            Solution::MatchThree(MatchThreeSolution {
                count: TARGET_SCORE,
            }),
        ));
    }
    Err(GenerateError::retries_exhausted(
        PuzzleKind::MatchThree,
        MAX_GRID_ATTEMPTS,
    ))
}

fn random_grid(rng: &mut impl Rng) -> Vec<Vec<u8>> {
    (0..GRID_SIZE)
        .map(|_| {
            (0..GRID_SIZE)
                .map(|_| rng.random_range(0..TILE_KINDS))
                .collect()
        })
        .collect()
}

/// Adjacent swaps that would produce a run of three, each simulated on a
/// scratch copy of the grid.
pub(crate) fn legal_swaps(grid: &[Vec<u8>]) -> Vec<((usize, usize), (usize, usize))> {
    adjacent_pairs(GRID_SIZE, GRID_SIZE)
        .into_iter()
        .filter(|&((r1, c1), (r2, c2))| {
            let mut scratch = grid.to_vec();
            let held = scratch[r1][c1];
            scratch[r1][c1] = scratch[r2][c2];
            scratch[r2][c2] = held;
            has_three_in_a_row(&scratch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_context::test_context;

    use super::*;
    use crate::tests::{property_iterations, UsingLogger};

    #[test_context(UsingLogger)]
    #[test]
    fn test_generated_grids_always_admit_a_swap(_: &mut UsingLogger) {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..property_iterations() {
            let puzzle = generate(&mut rng).unwrap();
            let Question::MatchThree(question) = &puzzle.question else {
                panic!("wrong question payload");
            };
            assert_eq!(question.grid.len(), GRID_SIZE);
            for row in &question.grid {
                assert_eq!(row.len(), GRID_SIZE);
                assert!(row.iter().all(|&kind| kind < TILE_KINDS));
            }
            assert!(!has_three_in_a_row(&question.grid));

            let swaps = legal_swaps(&question.grid);
            assert!(!swaps.is_empty());
            for ((r1, c1), (r2, c2)) in swaps {
                assert!(r1 < GRID_SIZE && c1 < GRID_SIZE);
                assert!(r2 < GRID_SIZE && c2 < GRID_SIZE);
            }

            let Solution::MatchThree(solution) = &puzzle.solution else {
                panic!("wrong solution payload");
            };
            assert_eq!(solution.count, TARGET_SCORE);
            assert!(puzzle.id.starts_with("match3-"));
        }
    }

    #[test]
    fn test_legal_swaps_finds_a_known_swap() {
        // swapping (0,2) down brings the third 1 into line
        let mut grid = vec![vec![6; GRID_SIZE]; GRID_SIZE];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = ((r * 2 + c * 3) % 5) as u8;
            }
        }
        grid[0][0] = 1;
        grid[0][1] = 1;
        grid[0][2] = 2;
        grid[1][2] = 1;
        let swaps = legal_swaps(&grid);
        assert!(swaps.contains(&(((0, 2), (1, 2)))));
    }
}
