/// Faces on every die
pub const FACES: usize = 6;

/// A six-sided letter cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die([char; FACES]);

impl Die {
    pub const fn from_ascii(faces: &[u8; FACES]) -> Self {
        let mut letters = [' '; FACES];
        let mut i = 0;
        while i < FACES {
            letters[i] = faces[i] as char;
            i += 1;
        }
        Self(letters)
    }

    pub fn faces(&self) -> [char; FACES] {
        self.0
    }

    /// Face at `index`; panics when `index >= FACES`
    pub fn face(&self, index: usize) -> char {
        self.0[index]
    }

    pub fn has_face(&self, letter: char) -> bool {
        self.0.contains(&letter)
    }
}

/// The sixteen dice of a classic 4x4 set.
///
/// The second face of `OQAMJB` is the Qu face; it lands on the board as a plain `Q`.
pub static DICE: [Die; 16] = [
    Die::from_ascii(b"COTAIA"),
    Die::from_ascii(b"OSEWDN"),
    Die::from_ascii(b"LERASC"),
    Die::from_ascii(b"VGTZEI"),
    Die::from_ascii(b"EYUGKL"),
    Die::from_ascii(b"DUNOKT"),
    Die::from_ascii(b"HYFEIE"),
    Die::from_ascii(b"DVNZAE"),
    Die::from_ascii(b"OQAMJB"),
    Die::from_ascii(b"LEPUTS"),
    Die::from_ascii(b"NEPIHS"),
    Die::from_ascii(b"LUWIGR"),
    Die::from_ascii(b"XIBOFR"),
    Die::from_ascii(b"ALIBTY"),
    Die::from_ascii(b"OMARSH"),
    Die::from_ascii(b"DCEAPM"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_board() {
        assert_eq!(DICE.len(), crate::models::INTERIOR_CELLS);
    }

    #[test]
    fn test_faces_are_uppercase_letters() {
        for die in &DICE {
            assert!(die.faces().iter().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_face_lookup() {
        assert_eq!(DICE[0].faces(), ['C', 'O', 'T', 'A', 'I', 'A']);
        assert_eq!(DICE[8].face(1), 'Q');
        assert!(DICE[15].has_face('M'));
        assert!(!DICE[15].has_face('Z'));
    }
}
