use thiserror::Error;

use crate::model::PuzzleKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A retry loop hit its attempt cap without satisfying the generator's
    /// validity predicate. Recoverable: the caller may simply call again.
    #[error("{kind} generation did not converge after {attempts} attempts")]
    RetriesExhausted { kind: PuzzleKind, attempts: usize },

    #[error("unknown puzzle kind {0:?}")]
    UnknownKind(String),
}

impl GenerateError {
    pub fn retries_exhausted(kind: PuzzleKind, attempts: usize) -> Self {
        Self::RetriesExhausted { kind, attempts }
    }
}
