//! Key-derived 5×5 cipher matrix.

use std::fmt::{self, Display};

use crate::{Letter, Position, letters};

/// A 5×5 Playfair key matrix with its letter→position inverse.
///
/// The matrix is a pure function of the normalized key: the key's letters are
/// walked in order and each not-yet-seen letter is appended, then the rest of
/// the alphabet follows in natural A–Z order. The resulting 25-letter list is
/// laid out row-major. Every alphabet letter appears exactly once — an
/// invariant guaranteed by construction, so lookups in either direction are
/// total.
///
/// The inverse index is built together with the grid and never mutated
/// independently.
///
/// # Examples
///
/// ```
/// use playfair_core::{Letter, Matrix, Position};
///
/// let matrix = Matrix::from_key("MONARCHY");
/// assert_eq!(matrix.letter_at(Position::new(0, 0)), Letter::M);
/// assert_eq!(matrix.position_of(Letter::Z), Position::new(4, 4));
///
/// // An empty key degrades to the alphabet in natural order
/// let plain = Matrix::from_key("");
/// assert_eq!(plain.letter_at(Position::new(0, 0)), Letter::A);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: [[Letter; 5]; 5],
    positions: [Position; 25],
}

impl Matrix {
    /// Builds the matrix for `key`.
    ///
    /// The key is normalized internally; repeats and non-alphabetic
    /// characters are ignored. Identical normalized keys always yield
    /// identical matrices.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let mut seen = [false; 25];
        let mut order = Vec::with_capacity(25);
        for letter in letters(key).chain(Letter::ALL) {
            if !seen[usize::from(letter.index())] {
                seen[usize::from(letter.index())] = true;
                order.push(letter);
            }
        }
        debug_assert_eq!(order.len(), 25);

        let mut cells = [[Letter::A; 5]; 5];
        let mut positions = [Position::new(0, 0); 25];
        for (pos, letter) in Position::all().zip(order) {
            cells[usize::from(pos.row())][usize::from(pos.col())] = letter;
            positions[usize::from(letter.index())] = pos;
        }
        Self { cells, positions }
    }

    /// Returns the letter in the given cell.
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Letter {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Returns the (row, column) position of `letter`.
    ///
    /// Total for every [`Letter`]: the matrix contains the whole alphabet.
    #[must_use]
    pub fn position_of(&self, letter: Letter) -> Position {
        self.positions[usize::from(letter.index())]
    }

    /// Returns the grid rows in order, each row left to right.
    #[must_use]
    pub const fn rows(&self) -> &[[Letter; 5]; 5] {
        &self.cells
    }
}

impl Display for Matrix {
    /// Formats the matrix as five lines of five space-separated letters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn row(matrix: &Matrix, index: usize) -> String {
        matrix.rows()[index].iter().map(|l| l.as_char()).collect()
    }

    #[test]
    fn test_monarchy_layout() {
        // The textbook example key
        let matrix = Matrix::from_key("MONARCHY");
        assert_eq!(row(&matrix, 0), "MONAR");
        assert_eq!(row(&matrix, 1), "CHYBD");
        assert_eq!(row(&matrix, 2), "EFGIK");
        assert_eq!(row(&matrix, 3), "LPQST");
        assert_eq!(row(&matrix, 4), "UVWXZ");
    }

    #[test]
    fn test_empty_key_yields_plain_alphabet() {
        let matrix = Matrix::from_key("");
        for (pos, letter) in Position::all().zip(Letter::ALL) {
            assert_eq!(matrix.letter_at(pos), letter);
        }
    }

    #[test]
    fn test_non_alphabetic_key_yields_plain_alphabet() {
        assert_eq!(Matrix::from_key("123 !?"), Matrix::from_key(""));
    }

    #[test]
    fn test_key_normalization() {
        // Case, punctuation, and repeats don't matter; J folds onto I
        assert_eq!(Matrix::from_key("monarchy!"), Matrix::from_key("MONARCHY"));
        assert_eq!(Matrix::from_key("MMOONN"), Matrix::from_key("MON"));
        assert_eq!(Matrix::from_key("JAM"), Matrix::from_key("IAM"));
    }

    #[test]
    fn test_index_inverts_grid() {
        let matrix = Matrix::from_key("KEYWORD");
        for pos in Position::all() {
            assert_eq!(matrix.position_of(matrix.letter_at(pos)), pos);
        }
        for letter in Letter::ALL {
            assert_eq!(matrix.letter_at(matrix.position_of(letter)), letter);
        }
    }

    #[test]
    fn test_display() {
        let matrix = Matrix::from_key("MONARCHY");
        let text = matrix.to_string();
        assert_eq!(text.lines().next(), Some("M O N A R"));
        assert_eq!(text.lines().count(), 5);
    }

    proptest! {
        #[test]
        fn test_grid_contains_every_letter_once(key in ".*") {
            let matrix = Matrix::from_key(&key);
            let mut counts = [0u8; 25];
            for pos in Position::all() {
                counts[usize::from(matrix.letter_at(pos).index())] += 1;
            }
            prop_assert!(counts.iter().all(|&n| n == 1));
        }

        #[test]
        fn test_deterministic(key in ".*") {
            prop_assert_eq!(Matrix::from_key(&key), Matrix::from_key(&key));
        }
    }
}
