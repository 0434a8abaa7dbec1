mod categories;
mod clue;
mod error;
mod puzzle;

pub use categories::{CATEGORY_SIZE, CITIES, INSTRUMENTS, PEOPLE};
pub use clue::{Assignment, Clue, ClueKind};
pub use error::GenerateError;
pub use puzzle::{
    LogicGridCategories, LogicGridQuestion, LogicGridSolution, MatchThreeQuestion,
    MatchThreeSolution, MemoryQuestion, MemorySolution, Move, Puzzle, PuzzleKind, Question,
    QueensQuestion, QueensSolution, SlidingQuestion, SlidingSolution, Solution,
};
