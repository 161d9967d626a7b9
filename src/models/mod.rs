pub mod board;

pub use board::{Grid, Position, Tile, BOARD_SIZE, INTERIOR_CELLS, SIDE};
