//! Digraph segmentation of normalized text.
//!
//! Playfair substitutes two letters at a time. [`segment`] turns a normalized
//! letter sequence into the digraph stream used for encryption, applying the
//! duplicate-letter split and trailing-singleton padding rules. [`fixed_pairs`]
//! is the simpler segmentation used for ciphertext, which is already paired.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use playfair_core::Letter;

/// An ordered two-letter substitution unit.
///
/// Both letters are alphabet members by construction, so a pair can always be
/// looked up in any key matrix.
///
/// # Examples
///
/// ```
/// use playfair_cipher::Pair;
/// use playfair_core::Letter;
///
/// let pair = Pair::new(Letter::H, Letter::I);
/// assert_eq!(pair.to_string(), "HI");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    first: Letter,
    second: Letter,
}

impl Pair {
    /// Creates a pair from two letters.
    #[must_use]
    pub const fn new(first: Letter, second: Letter) -> Self {
        Self { first, second }
    }

    /// Returns the first letter.
    #[must_use]
    pub const fn first(self) -> Letter {
        self.first
    }

    /// Returns the second letter.
    #[must_use]
    pub const fn second(self) -> Letter {
        self.second
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Segments normalized plaintext into the digraphs to encrypt.
///
/// Scanning left to right with a cursor:
///
/// - a trailing singleton is paired with `pad`;
/// - when the next letter repeats the current one, the pair is completed with
///   `pad` and the cursor advances by **one**, so the repeated letter heads
///   the next pair;
/// - otherwise the two letters form a pair and the cursor advances by two.
///
/// The returned iterator is lazy and finite; empty input yields no pairs.
///
/// # Examples
///
/// ```
/// use playfair_cipher::segment;
/// use playfair_core::{Letter, letters};
///
/// let text: Vec<Letter> = letters("BALLOON").collect();
/// let pairs: Vec<String> = segment(&text, Letter::X)
///     .map(|pair| pair.to_string())
///     .collect();
/// assert_eq!(pairs, ["BA", "LX", "LO", "ON"]);
/// ```
pub fn segment(letters: &[Letter], pad: Letter) -> Segments<'_> {
    Segments {
        letters,
        pad,
        cursor: 0,
    }
}

/// Lazy iterator over the digraphs of a plaintext.
///
/// Created by [`segment`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    letters: &'a [Letter],
    pad: Letter,
    cursor: usize,
}

impl Iterator for Segments<'_> {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        let first = *self.letters.get(self.cursor)?;
        match self.letters.get(self.cursor + 1) {
            // Trailing singleton: pad and stop
            None => {
                self.cursor += 1;
                Some(Pair::new(first, self.pad))
            }
            // Duplicate split: the repeat heads the next pair
            Some(&second) if second == first => {
                self.cursor += 1;
                Some(Pair::new(first, self.pad))
            }
            Some(&second) => {
                self.cursor += 2;
                Some(Pair::new(first, second))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.letters.len() - self.cursor;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for Segments<'_> {}

/// Segments ciphertext into fixed-width pairs of two.
///
/// Ciphertext is assumed to be already paired; if its length is odd, the
/// final letter is paired with `pad`. No duplicate-letter rule applies.
///
/// # Examples
///
/// ```
/// use playfair_cipher::fixed_pairs;
/// use playfair_core::{Letter, letters};
///
/// let text: Vec<Letter> = letters("GATLM").collect();
/// let pairs: Vec<String> = fixed_pairs(&text, Letter::X)
///     .map(|pair| pair.to_string())
///     .collect();
/// assert_eq!(pairs, ["GA", "TL", "MX"]);
/// ```
pub fn fixed_pairs(letters: &[Letter], pad: Letter) -> impl Iterator<Item = Pair> + '_ {
    letters
        .chunks(2)
        .map(move |chunk| Pair::new(chunk[0], *chunk.get(1).unwrap_or(&pad)))
}
