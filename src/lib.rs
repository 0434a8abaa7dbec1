pub mod generator;
pub mod model;

pub use generator::{
    generate, generate_seeded, logic_grid_puzzle, match_three_puzzle, memory_puzzle, queens_puzzle,
    sliding_puzzle,
};
pub use model::{GenerateError, Puzzle, PuzzleKind};
