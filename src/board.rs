//! Board state: ship placements, buffer zones, hits and misses.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Coord, GuessResult};
use crate::config::{GameConfig, FLEET, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::ship::{Orientation, Ship, ShipType};

type BB = BitBoard<u128, MAX_GRID_SIZE>;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied,
    Hit,
    Miss,
}

impl Cell {
    /// Glyph used by the text renderer. Concealed boards draw unhit ship
    /// cells as open water.
    pub fn glyph(self, concealed: bool) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied if concealed => '.',
            Cell::Occupied => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
        }
    }
}

/// One side's playing field.
///
/// `blocked` holds every cell that may not be used again: during fleet
/// generation that is ship cells plus their buffer ring, during play it is
/// every cell fired at plus the ring around each sunk ship.
#[derive(Clone)]
pub struct Board {
    size: usize,
    concealed: bool,
    ships: Vec<Ship>,
    blocked: BB,
    ship_map: BB,
    hits: BB,
    misses: BB,
    sunk: usize,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(BoardError::GridSizeUnsupported { size });
        }
        Ok(Board {
            size,
            concealed: false,
            ships: Vec::new(),
            blocked: BB::new(),
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
            sunk: 0,
        })
    }

    /// Generate a board with the default fleet, starting over with an empty
    /// board each time the placement budget runs out.
    ///
    /// Boards smaller than [`MIN_GRID_SIZE`] cannot hold the default fleet
    /// and are rejected up front, as are budgets smaller than the fleet.
    pub fn random<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&config.grid_size) {
            return Err(BoardError::GridSizeUnsupported {
                size: config.grid_size,
            });
        }
        if config.placement_attempts < FLEET.len() {
            return Err(BoardError::UnableToPlaceShip);
        }
        let mut restarts = 0usize;
        loop {
            match Self::try_random(config.grid_size, &FLEET, config.placement_attempts, rng) {
                Ok(board) => {
                    debug!("fleet placed after {} restart(s)", restarts);
                    return Ok(board);
                }
                Err(BoardError::UnableToPlaceShip) => {
                    restarts += 1;
                    warn!(
                        "placement budget of {} exhausted, regenerating board",
                        config.placement_attempts
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Single fleet generation pass: random anchor and orientation per ship,
    /// retried on collision, with `attempts` tries shared across the whole
    /// fleet. Clears the blocked set on success so play starts fresh.
    pub fn try_random<R: Rng>(
        size: usize,
        fleet: &[ShipType],
        attempts: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut board = Board::new(size)?;
        let mut tries = 0usize;
        for &ship_type in fleet {
            loop {
                tries += 1;
                if tries > attempts {
                    return Err(BoardError::UnableToPlaceShip);
                }
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                let anchor = Coord::new(
                    rng.random_range(0..size as i32),
                    rng.random_range(0..size as i32),
                );
                match board.place(Ship::new(ship_type, orientation, anchor)) {
                    Ok(()) => break,
                    Err(BoardError::OutOfBounds) | Err(BoardError::ShipOverlaps) => continue,
                    Err(e) => return Err(e),
                }
            }
        }
        board.begin();
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Hide unhit ship cells when rendering.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    /// Ships placed on this board, sunk ones included.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk == self.ships.len()
    }

    pub fn is_out_of_bounds(&self, cell: Coord) -> bool {
        let n = self.size as i32;
        cell.row < 0 || cell.col < 0 || cell.row >= n || cell.col >= n
    }

    /// Whether `cell` is currently unavailable for placement or shooting.
    pub fn is_blocked(&self, cell: Coord) -> bool {
        self.blocked.contains(cell)
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Display state of `cell`, or `None` outside the board.
    pub fn cell(&self, cell: Coord) -> Option<Cell> {
        if self.is_out_of_bounds(cell) {
            None
        } else if self.hits.contains(cell) {
            Some(Cell::Hit)
        } else if self.misses.contains(cell) {
            Some(Cell::Miss)
        } else if self.ship_map.contains(cell) {
            Some(Cell::Occupied)
        } else {
            Some(Cell::Empty)
        }
    }

    /// Place `ship`, then block its surrounding ring so no later ship can
    /// touch it. The ring is not drawn.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.cells().any(|c| self.is_out_of_bounds(c)) {
            return Err(BoardError::OutOfBounds);
        }
        if ship.cells().any(|c| self.blocked.contains(c)) {
            return Err(BoardError::ShipOverlaps);
        }
        for cell in ship.cells() {
            self.ship_map.insert(cell)?;
            self.blocked.insert(cell)?;
        }
        self.ships.push(ship);
        self.block_surroundings(&ship, false)
    }

    /// Forget placement-time blocking before play begins. Ship cells stay in
    /// the occupancy mask, so shots still find them.
    pub fn begin(&mut self) {
        self.blocked.clear_all();
    }

    /// Process a shot at `target`, marking hits/misses and reporting result.
    pub fn guess(&mut self, target: Coord) -> Result<GuessResult, BoardError> {
        if self.is_out_of_bounds(target) {
            return Err(BoardError::OutOfBounds);
        }
        if self.blocked.contains(target) {
            return Err(BoardError::AlreadyGuessed);
        }
        self.blocked.insert(target)?;

        let Some(idx) = self.ships.iter().position(|s| s.contains(target)) else {
            self.misses.insert(target)?;
            debug!("shot at {} missed", target);
            return Ok(GuessResult::Miss);
        };

        self.hits.insert(target)?;
        let ship = &mut self.ships[idx];
        ship.register_hit();
        if !ship.is_sunk() {
            debug!("shot at {} hit {:?}", target, ship);
            return Ok(GuessResult::Hit);
        }

        let ship = *ship;
        self.sunk += 1;
        self.block_surroundings(&ship, true)?;
        debug!("shot at {} sank {:?} ({} sunk)", target, ship, self.sunk);
        Ok(GuessResult::Sink(ship.ship_type().name()))
    }

    /// Block every in-bounds neighbour of `ship` not blocked yet. With
    /// `reveal`, those cells are also shown as misses: water around a sunk
    /// ship is known to be empty.
    fn block_surroundings(&mut self, ship: &Ship, reveal: bool) -> Result<(), BoardError> {
        for cell in ship.cells() {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let near = cell.offset(dr, dc);
                    if self.is_out_of_bounds(near) || self.blocked.contains(near) {
                        continue;
                    }
                    if reveal {
                        self.misses.insert(near)?;
                    }
                    self.blocked.insert(near)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   |")?;
        for c in 0..self.size {
            write!(f, "{:>2} |", c + 1)?;
        }
        for r in 0..self.size {
            write!(f, "\n{:>2} |", r + 1)?;
            for c in 0..self.size {
                let cell = self
                    .cell(Coord::new(r as i32, c as i32))
                    .unwrap_or(Cell::Empty);
                write!(f, " {} |", cell.glyph(self.concealed))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("concealed", &self.concealed)
            .field("sunk", &self.sunk)
            .field("ships", &self.ships)
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}
