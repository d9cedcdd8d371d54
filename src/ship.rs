//! Ship definitions: a straight run of cells anchored at one corner.

use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells extend along the row, increasing column.
    Horizontal,
    /// Cells extend down the column, increasing row.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship at an anchor cell with an orientation and remaining hit points.
///
/// Construction never fails: whether the cells fit on a board, and whether
/// they collide with other ships, is decided by the board at placement.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    anchor: Coord,
    remaining: usize,
}

impl Ship {
    /// Ship of `ship_type` starting at `anchor`, extending along `orientation`.
    pub fn new(ship_type: ShipType, orientation: Orientation, anchor: Coord) -> Self {
        Ship {
            ship_type,
            orientation,
            anchor,
            remaining: ship_type.length(),
        }
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let anchor = self.anchor;
        let (dr, dc) = self.orientation.step();
        (0..self.ship_type.length() as i32).map(move |i| anchor.offset(dr * i, dc * i))
    }

    /// Whether `cell` is one of the ship's cells.
    pub fn contains(&self, cell: Coord) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// Hit points left; zero once every cell was hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Removes one hit point. Only the owning board calls this, after it has
    /// confirmed the shot landed on one of the ship's cells.
    pub(crate) fn register_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", anchor: {}, orientation: {:?}, remaining: {}/{} }}",
            self.ship_type.name(),
            self.anchor,
            self.orientation,
            self.remaining,
            self.ship_type.length(),
        )
    }
}
