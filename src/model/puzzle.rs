use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::GenerateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleKind {
    #[serde(rename = "match-3")]
    MatchThree,
    #[serde(rename = "sliding")]
    Sliding,
    #[serde(rename = "memory")]
    Memory,
    #[serde(rename = "logic-grid")]
    LogicGrid,
    #[serde(rename = "n-queens")]
    Queens,
}

impl PuzzleKind {
    pub fn all() -> Vec<PuzzleKind> {
        vec![
            PuzzleKind::MatchThree,
            PuzzleKind::Sliding,
            PuzzleKind::Memory,
            PuzzleKind::LogicGrid,
            PuzzleKind::Queens,
        ]
    }

    /// The `type` string carried on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            PuzzleKind::MatchThree => "match-3",
            PuzzleKind::Sliding => "sliding",
            PuzzleKind::Memory => "memory",
            PuzzleKind::LogicGrid => "logic-grid",
            PuzzleKind::Queens => "n-queens",
        }
    }

    pub fn id_prefix(&self) -> &'static str {
        match self {
            PuzzleKind::MatchThree => "match3",
            PuzzleKind::Sliding => "sliding",
            PuzzleKind::Memory => "memory",
            PuzzleKind::LogicGrid => "logicgrid",
            PuzzleKind::Queens => "queens",
        }
    }
}

impl Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

impl FromStr for PuzzleKind {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PuzzleKind::all()
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| GenerateError::UnknownKind(s.to_string()))
    }
}

/// One generated puzzle, immutable once produced. Serializes to the
/// `{id, type, question, solution}` record the delivery layer persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PuzzleKind,
    pub question: Question,
    pub solution: Solution,
}

impl Puzzle {
    pub fn new(kind: PuzzleKind, question: Question, solution: Solution) -> Self {
        Self {
            id: format!("{}-{}", kind.id_prefix(), Uuid::new_v4()),
            kind,
            question,
            solution,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchThreeQuestion {
    pub grid: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchThreeSolution {
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub fn all() -> [Move; 4] {
        [Move::Up, Move::Down, Move::Left, Move::Right]
    }

    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Row/column displacement of the blank when it makes this move.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingQuestion {
    pub board: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingSolution {
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryQuestion {
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySolution {
    pub board: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicGridCategories {
    pub people: Vec<String>,
    pub instruments: Vec<String>,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicGridQuestion {
    pub categories: LogicGridCategories,
    pub clues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicGridSolution {
    pub instruments: BTreeMap<String, String>,
    pub cities: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensQuestion {
    pub size: usize,
    /// Pre-revealed queen column per row, -1 where hidden.
    pub initial: Vec<i8>,
    pub regions: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueensSolution {
    pub positions: Vec<u8>,
}

/// Question payloads, untagged on the wire: the surrounding record's `type`
/// field says which shape to expect. `Memory` stays last so its single-field
/// shape cannot shadow the n-queens payload during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Question {
    MatchThree(MatchThreeQuestion),
    Sliding(SlidingQuestion),
    LogicGrid(LogicGridQuestion),
    Queens(QueensQuestion),
    Memory(MemoryQuestion),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Solution {
    MatchThree(MatchThreeSolution),
    Sliding(SlidingSolution),
    Memory(MemorySolution),
    LogicGrid(LogicGridSolution),
    Queens(QueensSolution),
}
