use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    models::{Grid, BOARD_SIZE, INTERIOR_CELLS},
    utils::dice::{Die, DICE, FACES},
};

pub struct GridGenerator;

impl GridGenerator {
    /// Roll the standard dice onto a fresh board
    pub fn generate() -> Grid {
        let mut rng = rand::rng();
        Self::generate_with(&DICE, &mut rng)
    }

    /// Roll the standard dice with a fixed seed, for reproducible boards
    pub fn from_seed(seed: u64) -> Grid {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with(&DICE, &mut rng)
    }

    /// Shuffle `catalog` across the interior cells in row-major order and roll
    /// each die for its face.
    ///
    /// # Panics
    ///
    /// If the catalog does not hold exactly one die per interior cell.
    pub fn generate_with<R: Rng + ?Sized>(catalog: &[Die], rng: &mut R) -> Grid {
        assert_eq!(
            catalog.len(),
            INTERIOR_CELLS,
            "dice catalog must hold exactly one die per interior cell"
        );

        let mut order: Vec<usize> = (0..catalog.len()).collect();
        order.shuffle(rng);

        let mut letters = [[' '; BOARD_SIZE]; BOARD_SIZE];
        let mut placement = [0; INTERIOR_CELLS];

        for (cell, &die) in order.iter().enumerate() {
            let face = rng.random_range(0..FACES);
            letters[cell / BOARD_SIZE][cell % BOARD_SIZE] = catalog[die].face(face);
            placement[cell] = die;
        }

        tracing::debug!("Generated grid from dice order {:?}", placement);

        Grid::with_letters(letters, Some(placement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, Tile, SIDE};

    fn assert_well_formed(grid: &Grid) {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let pos = Position::new(row, col);
                let tile = grid.tile(pos).unwrap();
                if pos.is_interior() {
                    assert!(matches!(tile, Tile::Letter(_)), "{} should hold a letter", pos);
                } else {
                    assert_eq!(tile, Tile::Border, "{} should be border", pos);
                }
            }
        }

        let placement = grid.dice_placement().unwrap();
        let mut used = placement.to_vec();
        used.sort_unstable();
        assert_eq!(used, (0..INTERIOR_CELLS).collect::<Vec<_>>());

        for (pos, &die) in Grid::interior_positions().zip(placement) {
            let letter = grid.letter(pos).unwrap();
            assert!(DICE[die].has_face(letter), "{} is not on die {}", letter, die);
        }
    }

    #[test]
    fn test_grid_generation() {
        let first = GridGenerator::generate();
        let second = GridGenerator::generate();
        assert_well_formed(&first);
        assert_well_formed(&second);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = GridGenerator::from_seed(42);
        let b = GridGenerator::from_seed(42);
        assert_eq!(a, b);
        assert_well_formed(&a);
    }

    #[test]
    fn test_seeds_shuffle_dice() {
        let placements: Vec<Vec<usize>> = (0..8)
            .map(|seed| GridGenerator::from_seed(seed).dice_placement().unwrap().to_vec())
            .collect();
        assert!(placements.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = [Die::from_ascii(b"ZZZZZZ"); INTERIOR_CELLS];
        let grid = GridGenerator::generate_with(&catalog, &mut StdRng::seed_from_u64(7));
        assert!(Grid::interior_positions().all(|pos| grid.letter(pos) == Some('Z')));
    }

    #[test]
    #[should_panic(expected = "one die per interior cell")]
    fn test_short_catalog_panics() {
        GridGenerator::generate_with(&DICE[..15], &mut StdRng::seed_from_u64(1));
    }
}
