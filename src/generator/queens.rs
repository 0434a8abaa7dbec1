use log::{info, trace};
use rand::Rng;

use crate::generator::grid::flood_fill_region;
use crate::generator::randomness::shuffle;
use crate::model::{
    GenerateError, Puzzle, PuzzleKind, Question, QueensQuestion, QueensSolution, Solution,
};

pub const BOARD_SIZE: usize = 8;
const MIN_REVEALED: usize = 2;
const MAX_REVEALED: usize = 4;
const MAX_CARVE_ATTEMPTS: usize = 2_000;

pub(crate) fn generate(rng: &mut impl Rng) -> Result<Puzzle, GenerateError> {
    let col_of_row = random_queens_solution(rng);
    trace!(target: "queens", "base solution: {:?}", col_of_row);

    for attempt in 0..MAX_CARVE_ATTEMPTS {
        // under-fill is a normal outcome of the randomized fill, not an error
        let Some(regions) = carve_regions(rng, &col_of_row) else {
            continue;
        };
        let initial = reveal_queens(rng, &col_of_row);
        let completions = bounded_completions(&initial, &regions, 2);
        if completions.len() == 1 {
            info!(
                target: "queens",
                "unique carving found after {} attempts ({} reveals)",
                attempt + 1,
                initial.iter().filter(|&&col| col >= 0).count()
            );
            return Ok(Puzzle::new(
                PuzzleKind::Queens,
                Question::Queens(QueensQuestion {
                    size: BOARD_SIZE,
                    initial,
                    regions,
                }),
                Solution::Queens(QueensSolution {
                    positions: col_of_row.iter().map(|&col| col as u8).collect(),
                }),
            ));
        }
        trace!(
            target: "queens",
            "carving attempt {} admitted {} completions, recarving",
            attempt,
            completions.len()
        );
    }
    Err(GenerateError::retries_exhausted(
        PuzzleKind::Queens,
        MAX_CARVE_ATTEMPTS,
    ))
}

/// One classic 8-Queens solution, varied across calls by trying columns in
/// random order per row. Occupancy is tracked in column/diagonal bitmasks.
pub(crate) fn random_queens_solution(rng: &mut impl Rng) -> [usize; BOARD_SIZE] {
    let mut col_of_row = [0usize; BOARD_SIZE];
    let placed = place_row(rng, 0, 0, 0, 0, &mut col_of_row);
    debug_assert!(placed, "an empty 8x8 board always admits a solution");
    col_of_row
}

fn place_row(
    rng: &mut impl Rng,
    row: usize,
    used_cols: u16,
    diag_up: u16,
    diag_down: u16,
    col_of_row: &mut [usize; BOARD_SIZE],
) -> bool {
    if row == BOARD_SIZE {
        return true;
    }
    for col in shuffle(rng, &(0..BOARD_SIZE).collect::<Vec<_>>()) {
        let col_bit = 1u16 << col;
        let up_bit = 1u16 << (row + col);
        let down_bit = 1u16 << (row + BOARD_SIZE - 1 - col);
        if used_cols & col_bit != 0 || diag_up & up_bit != 0 || diag_down & down_bit != 0 {
            continue;
        }
        col_of_row[row] = col;
        if place_row(
            rng,
            row + 1,
            used_cols | col_bit,
            diag_up | up_bit,
            diag_down | down_bit,
            col_of_row,
        ) {
            return true;
        }
    }
    false
}

/// Partitions the board into eight connected 8-cell regions, each seeded at
/// one solution queen. Every queen cell is reserved up front so no region can
/// swallow another region's seed; the regions are then grown in random seed
/// order. Returns None when any fill starves, leaving cells unclaimed.
pub(crate) fn carve_regions(
    rng: &mut impl Rng,
    col_of_row: &[usize; BOARD_SIZE],
) -> Option<Vec<Vec<u8>>> {
    let mut claimed = vec![vec![false; BOARD_SIZE]; BOARD_SIZE];
    let mut regions = vec![vec![0u8; BOARD_SIZE]; BOARD_SIZE];
    for (row, &col) in col_of_row.iter().enumerate() {
        claimed[row][col] = true;
        regions[row][col] = row as u8;
    }

    for region_id in shuffle(rng, &(0..BOARD_SIZE).collect::<Vec<_>>()) {
        let seed = (region_id, col_of_row[region_id]);
        let cells = flood_fill_region(rng, &mut claimed, seed, BOARD_SIZE);
        if cells.len() < BOARD_SIZE {
            trace!(
                target: "queens",
                "region {} starved at {} cells, discarding carving",
                region_id,
                cells.len()
            );
            return None;
        }
        for (r, c) in cells {
            regions[r][c] = region_id as u8;
        }
    }
    Some(regions)
}

fn reveal_queens(rng: &mut impl Rng, col_of_row: &[usize; BOARD_SIZE]) -> Vec<i8> {
    let mut initial = vec![-1i8; BOARD_SIZE];
    let n_revealed = rng.random_range(MIN_REVEALED..=MAX_REVEALED);
    for &row in shuffle(rng, &(0..BOARD_SIZE).collect::<Vec<_>>())
        .iter()
        .take(n_revealed)
    {
        initial[row] = col_of_row[row] as i8;
    }
    initial
}

/// Row-by-row backtracking over the published constraints: revealed rows are
/// pinned, every queen takes a fresh column and a fresh region, and a queen
/// may not sit column-adjacent to the queen of the previous row. Collects at
/// most `cap` completions.
pub(crate) fn bounded_completions(
    initial: &[i8],
    regions: &[Vec<u8>],
    cap: usize,
) -> Vec<[usize; BOARD_SIZE]> {
    let mut found = Vec::new();
    let mut used_cols = [false; BOARD_SIZE];
    let mut used_regions = [false; BOARD_SIZE];
    let mut placed = [0usize; BOARD_SIZE];
    search(
        0,
        initial,
        regions,
        &mut used_cols,
        &mut used_regions,
        &mut placed,
        cap,
        &mut found,
    );
    found
}

#[allow(clippy::too_many_arguments)]
fn search(
    row: usize,
    initial: &[i8],
    regions: &[Vec<u8>],
    used_cols: &mut [bool; BOARD_SIZE],
    used_regions: &mut [bool; BOARD_SIZE],
    placed: &mut [usize; BOARD_SIZE],
    cap: usize,
    found: &mut Vec<[usize; BOARD_SIZE]>,
) {
    if found.len() >= cap {
        return;
    }
    if row == BOARD_SIZE {
        found.push(*placed);
        return;
    }
    let candidates: Vec<usize> = if initial[row] >= 0 {
        vec![initial[row] as usize]
    } else {
        (0..BOARD_SIZE).collect()
    };
    for col in candidates {
        let region = regions[row][col] as usize;
        if used_cols[col] || used_regions[region] {
            continue;
        }
        if row > 0 && placed[row - 1].abs_diff(col) == 1 {
            continue;
        }
        used_cols[col] = true;
        used_regions[region] = true;
        placed[row] = col;
        search(
            row + 1,
            initial,
            regions,
            used_cols,
            used_regions,
            placed,
            cap,
            found,
        );
        used_cols[col] = false;
        used_regions[region] = false;
        if found.len() >= cap {
            return;
        }
    }
}
