//! Boggle board generation and word tracing.
//!
//! [`game::GridGenerator`] rolls the sixteen dice onto a bordered 4x4 board and
//! [`game::is_traceable`] checks whether a word can be spelled along a path of
//! adjacent, unrepeated cells.

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use error::{GridError, ParsePolicyError};
pub use game::{is_traceable, trace, GridGenerator, PathFinder, SearchPolicy};
pub use models::{Grid, Position, Tile};
