use log::trace;
use rand::Rng;

use crate::generator::randomness::sample;
use crate::model::{
    GenerateError, Move, Puzzle, PuzzleKind, Question, SlidingQuestion, SlidingSolution, Solution,
};

pub const BOARD_SIZE: usize = 3;
pub const SCRAMBLE_MOVES: usize = 15;

pub(crate) fn solved_board() -> Vec<Vec<u8>> {
    vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 0]]
}

fn blank_position(board: &[Vec<u8>]) -> (usize, usize) {
    for (r, row) in board.iter().enumerate() {
        for (c, &tile) in row.iter().enumerate() {
            if tile == 0 {
                return (r, c);
            }
        }
    }
    panic!("board has no blank tile");
}

pub(crate) fn legal_moves(board: &[Vec<u8>]) -> Vec<Move> {
    let (r, c) = blank_position(board);
    Move::all()
        .into_iter()
        .filter(|m| {
            let (dr, dc) = m.delta();
            let nr = r as i32 + dr;
            let nc = c as i32 + dc;
            (0..BOARD_SIZE as i32).contains(&nr) && (0..BOARD_SIZE as i32).contains(&nc)
        })
        .collect()
}

/// Slides the blank one step; the move must be legal for the current board.
pub(crate) fn apply_move(board: &mut [Vec<u8>], m: Move) {
    let (r, c) = blank_position(board);
    let (dr, dc) = m.delta();
    let nr = (r as i32 + dr) as usize;
    let nc = (c as i32 + dc) as usize;
    board[r][c] = board[nr][nc];
    board[nr][nc] = 0;
}

/// Scrambles the solved board with exactly [`SCRAMBLE_MOVES`] uniform random
/// legal blank moves; the solution is the walk reversed and inverted, so
/// replaying it restores the solved board.
pub(crate) fn generate(rng: &mut impl Rng) -> Result<Puzzle, GenerateError> {
    let mut board = solved_board();
    let mut walk = Vec::with_capacity(SCRAMBLE_MOVES);
    for _ in 0..SCRAMBLE_MOVES {
        let m = *sample(rng, &legal_moves(&board));
        apply_move(&mut board, m);
        walk.push(m);
    }
    trace!(target: "sliding", "scramble walk: {:?}", walk);

    let moves: Vec<Move> = walk.iter().rev().map(|m| m.inverse()).collect();
    Ok(Puzzle::new(
        PuzzleKind::Sliding,
        Question::Sliding(SlidingQuestion { board }),
        Solution::Sliding(SlidingSolution { moves }),
    ))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::*;
    use crate::tests::property_iterations;

    fn unpack(puzzle: &Puzzle) -> (Vec<Vec<u8>>, Vec<Move>) {
        let Question::Sliding(question) = &puzzle.question else {
            panic!("wrong question payload");
        };
        let Solution::Sliding(solution) = &puzzle.solution else {
            panic!("wrong solution payload");
        };
        (question.board.clone(), solution.moves.clone())
    }

    #[test]
    fn test_solution_restores_the_solved_board() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..property_iterations() {
            let puzzle = generate(&mut rng).unwrap();
            let (mut board, moves) = unpack(&puzzle);
            assert_eq!(moves.len(), SCRAMBLE_MOVES);
            for m in moves {
                assert!(legal_moves(&board).contains(&m));
                apply_move(&mut board, m);
            }
            assert_eq!(board, solved_board());
        }
    }

    #[test]
    fn test_board_holds_every_tile_once() {
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = generate(&mut rng).unwrap();
        let (board, _) = unpack(&puzzle);
        let mut tiles: Vec<u8> = board.into_iter().flatten().collect();
        tiles.sort();
        assert_eq!(tiles, (0..=8).collect::<Vec<u8>>());
    }

    #[test]
    fn test_same_seed_reproduces_the_same_puzzle() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let (board1, moves1) = unpack(&generate(&mut rng1).unwrap());
        let (board2, moves2) = unpack(&generate(&mut rng2).unwrap());
        assert_eq!(board1, board2);
        assert_eq!(moves1, moves2);
    }

    /// Degenerate random source: every draw yields the same word, so every
    /// direction choice lands on the same index and the whole walk is a
    /// fixed, replayable sequence.
    struct ScriptedRng;

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            1
        }

        fn next_u64(&mut self) -> u64 {
            1
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    #[test]
    fn test_scripted_rng_fully_determines_the_puzzle() {
        let (board1, moves1) = unpack(&generate(&mut ScriptedRng).unwrap());
        let (board2, moves2) = unpack(&generate(&mut ScriptedRng).unwrap());
        assert_eq!(board1, board2);
        assert_eq!(moves1, moves2);
        assert_eq!(moves1.len(), SCRAMBLE_MOVES);

        let mut board = board1;
        for m in moves1 {
            apply_move(&mut board, m);
        }
        assert_eq!(board, solved_board());
    }
}
