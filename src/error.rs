//! Error taxonomy for the engine's fallible surface
//!
//! These are all local conditions: the caller reports them and carries on.
//! Hash collisions in the 64-bit position hash are accepted as a benign,
//! extremely low-probability risk and have no error kind.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Move request outside the 15x15 board.
    #[error("coordinate ({row}, {col}) is outside the board")]
    InvalidCoordinate { row: i32, col: i32 },

    /// Move request targeting a cell that already holds a stone.
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    /// No empty cell remains; there is nothing to search.
    #[error("the board is full")]
    BoardFull,
}
