//! Core data structures for the Playfair cipher.
//!
//! This crate provides the alphabet, coordinate, and key-matrix types shared
//! by the cipher engine and front ends.
//!
//! # Overview
//!
//! 1. **Alphabet** - [`letter`]: type-safe representation of the 25-letter
//!    Playfair alphabet (A–Z with J folded onto I)
//! 2. **Coordinates** - [`position`]: (row, column) cells of the 5×5 matrix
//!    with the wrapping steps used by the substitution rules
//! 3. **Normalization** - [`normalize`]: uppercase, letters-only, J-folded
//!    preparation of arbitrary input
//! 4. **Key matrix** - [`matrix`]: the key-derived 5×5 grid together with its
//!    letter→position inverse
//!
//! # Examples
//!
//! ```
//! use playfair_core::{Letter, Matrix, Position};
//!
//! let matrix = Matrix::from_key("MONARCHY");
//!
//! // The grid and its positional inverse agree
//! let pos = matrix.position_of(Letter::H);
//! assert_eq!(pos, Position::new(1, 1));
//! assert_eq!(matrix.letter_at(pos), Letter::H);
//! ```

pub mod letter;
pub mod matrix;
pub mod normalize;
pub mod position;

// Re-export commonly used items
pub use self::{
    letter::Letter,
    matrix::Matrix,
    normalize::{letters, normalize},
    position::Position,
};
