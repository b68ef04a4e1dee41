//! Board model: a 10x10 grid of cell statuses plus the ships placed on it.
//!
//! Attack resolution is computed here from stored ship geometry. The board
//! never trusts a caller's claim about hit/miss/sunk; it derives all three
//! from the grid and the ship list.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 10;

/// Status of a single cell. A cell transitions at most once from a
/// pre-attack state (`Empty` / `Ship`) to a terminal state (`Hit` / `Miss`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// Whether this cell has already been attacked.
    pub fn is_terminal(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A validated on-board coordinate (0 <= x,y < 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Validate raw coordinates into an on-board `Coord`.
    pub fn new(x: i32, y: i32) -> Result<Self, DomainError> {
        if !(0..BOARD_SIZE as i32).contains(&x) || !(0..BOARD_SIZE as i32).contains(&y) {
            return Err(DomainError::validation(
                ValidationKind::OutOfRange,
                format!("Attack coordinates ({x}, {y}) are outside the 10x10 grid"),
            ));
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }
}

/// A ship described by its head position, length and orientation.
///
/// `sunk` is stored redundantly but is always derived: it flips to true the
/// moment every occupied cell has been hit, and never flips back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub name: String,
    pub length: u8,
    pub position: Coord,
    pub orientation: Orientation,
    #[serde(default)]
    pub sunk: bool,
}

impl Ship {
    /// Logical cells occupied by this ship. Cells are the head position
    /// extended by `length` along the orientation; arithmetic is widened so
    /// a client-supplied layout running off the grid cannot overflow.
    fn cell_coords(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        let (x, y) = (self.position.x as u16, self.position.y as u16);
        (0..self.length as u16).map(move |i| match self.orientation {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
    }

    pub fn occupies(&self, coord: Coord) -> bool {
        self.cell_coords()
            .any(|(cx, cy)| cx == coord.x as u16 && cy == coord.y as u16)
    }
}

/// Outcome of a resolved attack, computed from ship geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackReport {
    pub hit: bool,
    /// Name of the ship this attack sank, if any.
    pub sunk_ship: Option<String>,
    /// True when every ship on the board is now sunk.
    pub all_ships_sunk: bool,
}

/// One player's 10x10 grid plus their ship list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    pub ships: Vec<Ship>,
}

impl Board {
    /// An all-`Empty` board with no ships (the pre-join side 2).
    pub fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
        }
    }

    /// Build a board from a client-supplied layout.
    ///
    /// Validation is structural only: the grid must be exactly 10x10 and
    /// every ship length must be at least 1. Ship geometry and overlap are
    /// the client's responsibility.
    pub fn from_layout(
        ships: Vec<Ship>,
        cells: Vec<Vec<CellState>>,
    ) -> Result<Self, DomainError> {
        if cells.len() != BOARD_SIZE || cells.iter().any(|row| row.len() != BOARD_SIZE) {
            return Err(DomainError::validation(
                ValidationKind::InvalidLayout,
                "Board cell grid must be exactly 10x10",
            ));
        }
        if ships.iter().any(|ship| ship.length == 0) {
            return Err(DomainError::validation(
                ValidationKind::InvalidLayout,
                "Ship length must be at least 1",
            ));
        }

        let mut grid = [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in cells.into_iter().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                grid[y][x] = cell;
            }
        }
        Ok(Self { cells: grid, ships })
    }

    pub fn cell(&self, coord: Coord) -> CellState {
        self.cells[coord.y as usize][coord.x as usize]
    }

    /// Resolve an attack against this board.
    ///
    /// The cell must be in a pre-attack state; re-attacking a `Hit` or
    /// `Miss` cell is rejected. Hit/miss is derived from the stored ship
    /// geometry (a `Ship` cell marker with no ship under it still misses),
    /// and a ship is marked sunk exactly when its last occupied cell is hit.
    pub fn apply_attack(&mut self, coord: Coord) -> Result<AttackReport, DomainError> {
        if self.cell(coord).is_terminal() {
            return Err(DomainError::validation(
                ValidationKind::AlreadyAttacked,
                format!("Cell ({}, {}) has already been attacked", coord.x, coord.y),
            ));
        }

        let occupied = self.ships.iter().any(|ship| ship.occupies(coord));
        if !occupied {
            self.cells[coord.y as usize][coord.x as usize] = CellState::Miss;
            return Ok(AttackReport {
                hit: false,
                sunk_ship: None,
                all_ships_sunk: false,
            });
        }

        self.cells[coord.y as usize][coord.x as usize] = CellState::Hit;

        // First not-yet-sunk ship occupying the cell. If the layout stacked
        // ships the earlier one absorbs the hit, matching the order the
        // client supplied.
        let cells = &self.cells;
        let mut sunk_ship = None;
        for ship in self.ships.iter_mut() {
            if ship.sunk || !ship.occupies(coord) {
                continue;
            }
            let fully_hit = ship.cell_coords().all(|(cx, cy)| {
                (cx as usize) < BOARD_SIZE
                    && (cy as usize) < BOARD_SIZE
                    && cells[cy as usize][cx as usize] == CellState::Hit
            });
            if fully_hit {
                ship.sunk = true;
                sunk_ship = Some(ship.name.clone());
            }
            break;
        }

        // An empty ship list can never be defeated.
        let all_ships_sunk = !self.ships.is_empty() && self.ships.iter().all(|ship| ship.sunk);

        Ok(AttackReport {
            hit: true,
            sunk_ship,
            all_ships_sunk,
        })
    }
}
