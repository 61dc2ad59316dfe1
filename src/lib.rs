pub mod error;
pub mod grid;
pub mod mine_map;
pub mod game_board;
pub mod sentence;
pub mod knowledge;
pub mod solver;
pub mod game;
pub mod config;

pub use error::{MinesweeperError, Result};
pub use grid::Cell;
