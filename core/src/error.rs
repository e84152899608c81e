use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Chance of a light starting on must be between 0 and 1")]
    InvalidChance,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Invalid light {0:?}, expected 'O' or '.'")]
    InvalidLight(char),
    #[error("Board is too large to solve")]
    TooLargeToSolve,
    #[error("Game state does not match the board")]
    InconsistentState,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
