use std::fmt;

use serde::Serialize;

use crate::error::GridError;

/// Playable side length of the board
pub const BOARD_SIZE: usize = 4;
/// Side length including the sentinel border ring
pub const SIDE: usize = BOARD_SIZE + 2;
/// Number of playable cells, one per die
pub const INTERIOR_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Offsets of the eight neighbours in the order the search checks them:
/// NW, N, NE, W, E, SW, S, SE
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Tile {
    /// Border ring placeholder, never matches a letter
    Border,
    Letter(char),
}

impl Tile {
    pub fn matches(self, c: char) -> bool {
        match self {
            Tile::Border => false,
            Tile::Letter(letter) => letter == c,
        }
    }
}

/// Coordinates in the bordered grid. Interior cells span `1..=BOARD_SIZE`.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_interior(&self) -> bool {
        (1..=BOARD_SIZE).contains(&self.row) && (1..=BOARD_SIZE).contains(&self.col)
    }

    /// The eight surrounding positions, NW first and SE last.
    ///
    /// Only meaningful for interior positions: the border ring guarantees every
    /// neighbour of an interior cell is still inside the grid.
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        NEIGHBOUR_OFFSETS.iter().map(move |&(dr, dc)| Position {
            row: self.row.wrapping_add_signed(dr),
            col: self.col.wrapping_add_signed(dc),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A bordered Boggle board.
///
/// The outer ring holds [`Tile::Border`] and every interior cell holds a letter.
/// There are no mutators; a grid is fixed once built.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Grid {
    tiles: [[Tile; SIDE]; SIDE],
    /// Catalog index of the die behind each interior cell, row-major.
    /// `None` for hand-made grids.
    dice: Option<[usize; INTERIOR_CELLS]>,
}

impl Grid {
    /// Wrap interior letters in a sentinel border
    pub(crate) fn with_letters(
        letters: [[char; BOARD_SIZE]; BOARD_SIZE],
        dice: Option<[usize; INTERIOR_CELLS]>,
    ) -> Self {
        let mut tiles = [[Tile::Border; SIDE]; SIDE];
        for (r, row) in letters.iter().enumerate() {
            for (c, &letter) in row.iter().enumerate() {
                tiles[r + 1][c + 1] = Tile::Letter(letter);
            }
        }
        Self { tiles, dice }
    }

    /// Build a grid from four rows of four letters, e.g. `["CATS", "OREW", ...]`.
    /// Letters are uppercased.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        if rows.len() != BOARD_SIZE {
            return Err(GridError::RowCount {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut letters = [[' '; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.as_ref().chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(GridError::RowLength {
                    row: r,
                    expected: BOARD_SIZE,
                    found: chars.len(),
                });
            }
            for (c, ch) in chars.into_iter().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(GridError::InvalidLetter { row: r, col: c, ch });
                }
                letters[r][c] = ch.to_ascii_uppercase();
            }
        }

        Ok(Self::with_letters(letters, None))
    }

    /// Tile at `pos`, or `None` outside the bordered grid
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.tiles.get(pos.row)?.get(pos.col).copied()
    }

    /// Letter at `pos`, or `None` for border cells and out-of-range positions
    pub fn letter(&self, pos: Position) -> Option<char> {
        match self.tile(pos)? {
            Tile::Letter(letter) => Some(letter),
            Tile::Border => None,
        }
    }

    /// Interior positions in row-major order
    pub fn interior_positions() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE).flat_map(|row| (1..=BOARD_SIZE).map(move |col| Position { row, col }))
    }

    pub fn dice_placement(&self) -> Option<&[usize]> {
        self.dice.as_ref().map(|dice| dice.as_slice())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for tile in row {
                match tile {
                    Tile::Border => write!(f, "   ")?,
                    Tile::Letter(letter) => write!(f, "  {}", letter)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
