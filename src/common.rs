//! Common types for the game: coordinates, shot results and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// A 0-based (row, column) position on a board.
///
/// Components are signed so that positions just outside the board (e.g. a
/// buffer neighbour at row `-1`, or human input `0`) can be represented and
/// rejected by bounds checks rather than by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position shifted by (`dr`, `dc`).
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Shot hit a ship that still has cells left.
    Hit,
    /// Shot hit open water.
    Miss,
    /// Shot sank a ship, carrying its class name.
    Sink(&'static str),
}

impl GuessResult {
    /// Only a hit that leaves the ship afloat grants another shot.
    pub fn grants_extra_shot(&self) -> bool {
        matches!(self, GuessResult::Hit)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying cell-set error.
    BitBoardError(BitBoardError),
    /// Target or ship cell lies outside the board.
    OutOfBounds,
    /// Cell was already fired at, or is blocked around a sunk ship.
    AlreadyGuessed,
    /// Ship placement overlaps or touches another ship.
    ShipOverlaps,
    /// Placement attempt budget ran out before the fleet was complete.
    UnableToPlaceShip,
    /// Board size outside the supported range.
    GridSizeUnsupported { size: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds => write!(f, "You are trying to fire outside the board!"),
            BoardError::AlreadyGuessed => write!(f, "You have already fired at this cell"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps or touches another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::GridSizeUnsupported { size } => {
                write!(f, "Board size {} is not supported", size)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
