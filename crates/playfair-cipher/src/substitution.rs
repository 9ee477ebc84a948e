//! Pairwise substitution rules.
//!
//! Each digraph is transformed by exactly one of the three classical rules,
//! chosen from the positions of its letters in the key matrix. [`substitute`]
//! applies the rule and records which one fired.

use playfair_core::{Matrix, Position};

use crate::Pair;

/// The substitution rule applied to a pair.
///
/// # Examples
///
/// ```
/// use playfair_cipher::Rule;
///
/// assert_eq!(Rule::SameRow.to_string(), "same row");
/// assert_eq!(Rule::Rectangle.to_string(), "rectangle");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rule {
    /// Both letters share a row: each shifts one column, wrapping.
    #[display("same row")]
    SameRow,
    /// Both letters share a column: each shifts one row, wrapping.
    #[display("same column")]
    SameColumn,
    /// Letters share neither row nor column: each keeps its row and takes
    /// the other's column. Self-inverse.
    #[display("rectangle")]
    Rectangle,
}

/// The direction of a substitution.
///
/// Encryption shifts right/down, decryption shifts left/up; the rectangle
/// rule is identical in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Direction {
    /// Forward transformation (plaintext pair to ciphertext pair).
    Encrypt,
    /// Inverse transformation (ciphertext pair to plaintext pair).
    Decrypt,
}

/// One substitution, recorded for display and audit.
///
/// Produced once per pair per direction; immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    /// The pair fed into the rule.
    pub input: Pair,
    /// The rule that fired.
    pub rule: Rule,
    /// The transformed pair.
    pub output: Pair,
}

/// Applies the substitution rule for `pair` in the given direction.
///
/// The rule is selected from the letters' positions in `matrix`:
/// [`Rule::SameRow`] when the rows match, [`Rule::SameColumn`] when the
/// columns match, [`Rule::Rectangle`] otherwise. A pair of identical letters
/// matches both the row and the column; the row rule wins, matching the
/// classical presentation.
///
/// For every pair, substituting forward and then backward returns the
/// original pair.
///
/// # Examples
///
/// ```
/// use playfair_cipher::{Direction, Pair, Rule, substitute};
/// use playfair_core::{Letter, Matrix};
///
/// let matrix = Matrix::from_key("MONARCHY");
/// let step = substitute(&matrix, Pair::new(Letter::S, Letter::T), Direction::Encrypt);
/// assert_eq!(step.rule, Rule::SameRow);
/// assert_eq!(step.output.to_string(), "TL");
/// ```
#[must_use]
pub fn substitute(matrix: &Matrix, pair: Pair, direction: Direction) -> StepRecord {
    let p = matrix.position_of(pair.first());
    let q = matrix.position_of(pair.second());

    let (a, b, rule) = if p.row() == q.row() {
        let (a, b) = match direction {
            Direction::Encrypt => (p.right(), q.right()),
            Direction::Decrypt => (p.left(), q.left()),
        };
        (a, b, Rule::SameRow)
    } else if p.col() == q.col() {
        let (a, b) = match direction {
            Direction::Encrypt => (p.down(), q.down()),
            Direction::Decrypt => (p.up(), q.up()),
        };
        (a, b, Rule::SameColumn)
    } else {
        let a = Position::new(p.row(), q.col());
        let b = Position::new(q.row(), p.col());
        (a, b, Rule::Rectangle)
    };

    StepRecord {
        input: pair,
        rule,
        output: Pair::new(matrix.letter_at(a), matrix.letter_at(b)),
    }
}

#[cfg(test)]
mod tests {
    use playfair_core::Letter;
    use proptest::prelude::*;

    use super::*;

    fn pair(text: &str) -> Pair {
        let mut chars = text.chars();
        let first = Letter::from_char(chars.next().unwrap()).unwrap();
        let second = Letter::from_char(chars.next().unwrap()).unwrap();
        Pair::new(first, second)
    }

    #[test]
    fn test_same_row_rule() {
        // S and T sit side by side in row 3 of the MONARCHY matrix
        let matrix = Matrix::from_key("MONARCHY");

        let step = substitute(&matrix, pair("ST"), Direction::Encrypt);
        assert_eq!(step.rule, Rule::SameRow);
        assert_eq!(step.output, pair("TL")); // T wraps to the row start

        let step = substitute(&matrix, pair("TL"), Direction::Decrypt);
        assert_eq!(step.rule, Rule::SameRow);
        assert_eq!(step.output, pair("ST"));
    }

    #[test]
    fn test_same_column_rule() {
        // M and E share column 0
        let matrix = Matrix::from_key("MONARCHY");

        let step = substitute(&matrix, pair("ME"), Direction::Encrypt);
        assert_eq!(step.rule, Rule::SameColumn);
        assert_eq!(step.output, pair("CL"));

        let step = substitute(&matrix, pair("CL"), Direction::Decrypt);
        assert_eq!(step.rule, Rule::SameColumn);
        assert_eq!(step.output, pair("ME"));
    }

    #[test]
    fn test_rectangle_rule_is_self_inverse() {
        let matrix = Matrix::from_key("MONARCHY");

        let forward = substitute(&matrix, pair("IN"), Direction::Encrypt);
        assert_eq!(forward.rule, Rule::Rectangle);
        assert_eq!(forward.output, pair("GA"));

        let backward = substitute(&matrix, forward.output, Direction::Decrypt);
        assert_eq!(backward.rule, Rule::Rectangle);
        assert_eq!(backward.output, pair("IN"));
    }

    #[test]
    fn test_identical_letters_use_row_rule() {
        // Identical letters share both row and column; the row rule wins
        let matrix = Matrix::from_key("MONARCHY");

        let step = substitute(&matrix, pair("XX"), Direction::Encrypt);
        assert_eq!(step.rule, Rule::SameRow);
        assert_eq!(step.output, pair("ZZ"));
    }

    #[test]
    fn test_round_trip_all_pairs() {
        // decrypt(encrypt(pair)) == pair, exhaustively over the 25x25 space
        let matrix = Matrix::from_key("MONARCHY");
        for first in Letter::ALL {
            for second in Letter::ALL {
                let original = Pair::new(first, second);
                let forward = substitute(&matrix, original, Direction::Encrypt);
                let back = substitute(&matrix, forward.output, Direction::Decrypt);
                assert_eq!(back.output, original, "round trip failed for {original}");
                assert_eq!(back.rule, forward.rule);
            }
        }
    }

    #[test]
    fn test_direction_queries() {
        assert!(Direction::Encrypt.is_encrypt());
        assert!(Direction::Decrypt.is_decrypt());
    }

    proptest! {
        #[test]
        fn test_round_trip_under_any_key(key in ".*", first in 0u8..25, second in 0u8..25) {
            let matrix = Matrix::from_key(&key);
            let original = Pair::new(Letter::from_index(first), Letter::from_index(second));
            let forward = substitute(&matrix, original, Direction::Encrypt);
            let back = substitute(&matrix, forward.output, Direction::Decrypt);
            prop_assert_eq!(back.output, original);
            prop_assert_eq!(back.rule, forward.rule);
        }
    }
}
