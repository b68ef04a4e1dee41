//! Domain layer: pure game logic, no HTTP or database dependencies.

pub mod board;
pub mod state;
pub mod transitions;

#[cfg(test)]
mod test_fixtures;
#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_props_board;
#[cfg(test)]
mod tests_transitions;

// Re-exports for ergonomics
pub use board::{AttackReport, Board, CellState, Coord, Orientation, Ship, BOARD_SIZE};
pub use state::{GameState, GameStatus, PlayerId};
