use crate::models::{Grid, Position};
use std::collections::HashSet;

/// Independent checks on a traced path, without searching.
pub struct PathValidator;

impl PathValidator {
    /// A path is valid when it is non-empty, every step lands on a lettered
    /// cell next to the previous one, and no cell repeats.
    pub fn is_valid_path(grid: &Grid, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        if !positions
            .iter()
            .all(|&pos| pos.is_interior() && grid.letter(pos).is_some())
        {
            return false;
        }

        if !positions
            .windows(2)
            .all(|step| Self::are_adjacent(&step[0], &step[1]))
        {
            return false;
        }

        let distinct: HashSet<_> = positions.iter().collect();
        distinct.len() == positions.len()
    }

    /// Horizontal, vertical or diagonal neighbours
    pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        let row_diff = pos1.row.abs_diff(pos2.row);
        let col_diff = pos1.col.abs_diff(pos2.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }

    /// Check that the letters along `positions` spell `word`, ignoring case
    pub fn spells(grid: &Grid, positions: &[Position], word: &str) -> bool {
        let letters: Option<String> = positions.iter().map(|&pos| grid.letter(pos)).collect();
        letters.is_some_and(|letters| letters == word.to_uppercase())
    }
}
