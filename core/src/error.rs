use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board configuration out of range")]
    InvalidConfig,
    #[error("Mine coordinate outside the board")]
    CoordOutOfRange,
}

pub type Result<T> = core::result::Result<T, GameError>;
