use std::collections::VecDeque;

use itertools::iproduct;
use rand::Rng;

use crate::generator::randomness::shuffle;

/// Whether any horizontal or vertical run of three equal values exists.
/// Grids narrower or shorter than three never match.
pub fn has_three_in_a_row(grid: &[Vec<u8>]) -> bool {
    let rows = grid.len();
    let cols = grid.first().map_or(0, |row| row.len());
    for (r, c) in iproduct!(0..rows, 0..cols) {
        if c + 2 < cols && grid[r][c] == grid[r][c + 1] && grid[r][c] == grid[r][c + 2] {
            return true;
        }
        if r + 2 < rows && grid[r][c] == grid[r + 1][c] && grid[r][c] == grid[r + 2][c] {
            return true;
        }
    }
    false
}

/// Every horizontally or vertically adjacent cell pair of a rows x cols grid.
pub fn adjacent_pairs(rows: usize, cols: usize) -> Vec<((usize, usize), (usize, usize))> {
    let mut pairs = Vec::new();
    for (r, c) in iproduct!(0..rows, 0..cols) {
        if c + 1 < cols {
            pairs.push(((r, c), (r, c + 1)));
        }
        if r + 1 < rows {
            pairs.push(((r, c), (r + 1, c)));
        }
    }
    pairs
}

/// Grows a 4-connected region of up to `target` cells from `start`, expanding
/// breadth-first with the neighbor order shuffled at every cell. Cells are
/// claimed in the shared mask as the region takes them; already-claimed cells
/// block growth. A result shorter than `target` means the fill starved and the
/// caller must discard or retry.
pub fn flood_fill_region(
    rng: &mut impl Rng,
    claimed: &mut [Vec<bool>],
    start: (usize, usize),
    target: usize,
) -> Vec<(usize, usize)> {
    let rows = claimed.len();
    let cols = claimed.first().map_or(0, |row| row.len());
    let (start_row, start_col) = start;

    claimed[start_row][start_col] = true;
    let mut region = vec![start];
    let mut frontier = VecDeque::from([start]);

    while region.len() < target {
        let Some((r, c)) = frontier.pop_front() else {
            break;
        };
        let mut neighbors = Vec::with_capacity(4);
        if r > 0 {
            neighbors.push((r - 1, c));
        }
        if r + 1 < rows {
            neighbors.push((r + 1, c));
        }
        if c > 0 {
            neighbors.push((r, c - 1));
        }
        if c + 1 < cols {
            neighbors.push((r, c + 1));
        }
        for (nr, nc) in shuffle(rng, &neighbors) {
            if region.len() == target {
                break;
            }
            if !claimed[nr][nc] {
                claimed[nr][nc] = true;
                region.push((nr, nc));
                frontier.push_back((nr, nc));
            }
        }
    }
    region
}
