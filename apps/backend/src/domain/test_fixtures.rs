//! Shared builders for domain tests.

use crate::domain::board::{Board, CellState, Coord, Orientation, Ship, BOARD_SIZE};
use crate::domain::state::{GameState, PlayerId};
use crate::domain::transitions;

pub const P1: PlayerId = 1;
pub const P2: PlayerId = 2;

pub fn ship(name: &str, length: u8, x: u8, y: u8, orientation: Orientation) -> Ship {
    Ship {
        name: name.to_string(),
        length,
        position: Coord { x, y },
        orientation,
        sunk: false,
    }
}

/// Five-cell carrier along the top row, as in the reference scenario.
pub fn carrier_at_origin() -> Ship {
    ship("carrier", 5, 0, 0, Orientation::Horizontal)
}

/// A 10x10 grid with `Ship` markers under every cell of the given ships.
pub fn grid_for(ships: &[Ship]) -> Vec<Vec<CellState>> {
    let mut grid = vec![vec![CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
    for s in ships {
        for i in 0..s.length {
            let (x, y) = match s.orientation {
                Orientation::Horizontal => (s.position.x + i, s.position.y),
                Orientation::Vertical => (s.position.x, s.position.y + i),
            };
            if (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE {
                grid[y as usize][x as usize] = CellState::Ship;
            }
        }
    }
    grid
}

pub fn board_with(ships: Vec<Ship>) -> Board {
    let grid = grid_for(&ships);
    Board::from_layout(ships, grid).expect("fixture layout is structurally valid")
}

pub fn coord(x: u8, y: u8) -> Coord {
    Coord::new(x as i32, y as i32).expect("fixture coordinate is on the board")
}

/// An `Active` two-player game: P1 created it with a carrier, P2 joined
/// with the given ships. Turn is with P1.
pub fn active_game(p2_ships: Vec<Ship>) -> GameState {
    let mut game = transitions::new_game(P1, board_with(vec![carrier_at_origin()]), false);
    transitions::join(&mut game, P2, board_with(p2_ships)).expect("join succeeds on open game");
    game
}
