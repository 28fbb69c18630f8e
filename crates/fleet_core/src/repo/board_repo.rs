//! Board store contract and in-memory implementation.

use crate::model::board::{Board, FacilityBoards};
use crate::model::ids::FacilityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by board store operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from board store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Facility has no board in this store.
    FacilityNotFound(FacilityId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FacilityNotFound(id) => write!(f, "facility board not found: {id}"),
        }
    }
}

impl Error for RepoError {}

/// Store holding one board per facility.
pub trait BoardRepository {
    /// Loads the current board of one facility.
    fn board(&self, facility: &FacilityId) -> Option<&Board>;
    /// Publishes a new board for one facility in a single replacement.
    fn replace_board(&mut self, facility: &FacilityId, board: Board) -> RepoResult<()>;
}

/// Process-local board store seeded from configuration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    boards: FacilityBoards,
}

impl InMemoryBoardRepository {
    pub fn new(boards: FacilityBoards) -> Self {
        Self { boards }
    }
}

impl BoardRepository for InMemoryBoardRepository {
    fn board(&self, facility: &FacilityId) -> Option<&Board> {
        self.boards.get(facility)
    }

    fn replace_board(&mut self, facility: &FacilityId, board: Board) -> RepoResult<()> {
        match self.boards.get_mut(facility) {
            Some(slot) => {
                *slot = board;
                Ok(())
            }
            None => Err(RepoError::FacilityNotFound(facility.clone())),
        }
    }
}
