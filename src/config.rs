use crate::common::BoardError;
use crate::ship::ShipType;

pub const DEFAULT_GRID_SIZE: usize = 6;
pub const MIN_GRID_SIZE: usize = 6;
/// Largest board whose cells fit in the 128-bit cell sets.
pub const MAX_GRID_SIZE: usize = 11;

pub const NUM_SHIPS: usize = 7;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Cruiser", 3),
    ShipType::new("Destroyer", 2),
    ShipType::new("Destroyer", 2),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
    ShipType::new("Boat", 1),
];

/// Random placement attempts allowed per board before it is thrown away.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Runtime game settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub placement_attempts: usize,
}

impl GameConfig {
    /// Settings for a `grid_size` board, rejecting sizes the fleet or the
    /// cell sets cannot handle.
    pub fn new(grid_size: usize) -> Result<Self, BoardError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(BoardError::GridSizeUnsupported { size: grid_size });
        }
        Ok(Self {
            grid_size,
            placement_attempts: PLACEMENT_ATTEMPTS,
        })
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            placement_attempts: PLACEMENT_ATTEMPTS,
        }
    }
}
