//! Playfair alphabet letter representation.

use std::fmt::{self, Display};

/// A letter of the 25-letter Playfair alphabet (A–Z without J).
///
/// This enum provides type-safe representation of cipher letters, preventing
/// invalid values at compile time. The classical Playfair cipher works on a
/// 25-letter alphabet so that it fits a 5×5 matrix; `J` is traditionally
/// merged with `I`, and [`Letter::from_char`] performs that fold.
///
/// Because every `Letter` belongs to the alphabet, every `Letter` has a
/// position in every key matrix. Downstream lookups are total by
/// construction.
///
/// # Examples
///
/// ```
/// use playfair_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter, Letter::Q);
///
/// // J folds onto I
/// assert_eq!(Letter::from_char('J'), Some(Letter::I));
///
/// // Non-alphabetic characters are rejected
/// assert_eq!(Letter::from_char('!'), None);
///
/// // Iterate over the whole alphabet
/// for letter in Letter::ALL {
///     println!("{letter}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Letter {
    /// The letter A.
    A = 0,
    /// The letter B.
    B = 1,
    /// The letter C.
    C = 2,
    /// The letter D.
    D = 3,
    /// The letter E.
    E = 4,
    /// The letter F.
    F = 5,
    /// The letter G.
    G = 6,
    /// The letter H.
    H = 7,
    /// The letter I, which also stands in for J.
    I = 8,
    /// The letter K.
    K = 9,
    /// The letter L.
    L = 10,
    /// The letter M.
    M = 11,
    /// The letter N.
    N = 12,
    /// The letter O.
    O = 13,
    /// The letter P.
    P = 14,
    /// The letter Q.
    Q = 15,
    /// The letter R.
    R = 16,
    /// The letter S.
    S = 17,
    /// The letter T.
    T = 18,
    /// The letter U.
    U = 19,
    /// The letter V.
    V = 20,
    /// The letter W.
    W = 21,
    /// The letter X.
    X = 22,
    /// The letter Y.
    Y = 23,
    /// The letter Z.
    Z = 24,
}

impl Letter {
    /// Array containing all 25 alphabet letters in natural A–Z order
    /// (J skipped).
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair_core::Letter;
    ///
    /// assert_eq!(Letter::ALL.len(), 25);
    /// assert_eq!(Letter::ALL[0], Letter::A);
    /// assert_eq!(Letter::ALL[24], Letter::Z);
    /// ```
    pub const ALL: [Self; 25] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Creates a letter from an alphabet index in the range 0-24.
    ///
    /// Index 0 is `A`, index 8 is `I`, index 9 is `K` (J does not exist in
    /// the alphabet), index 24 is `Z`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-24.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair_core::Letter;
    ///
    /// assert_eq!(Letter::from_index(0), Letter::A);
    /// assert_eq!(Letter::from_index(9), Letter::K);
    /// ```
    ///
    /// ```should_panic
    /// use playfair_core::Letter;
    ///
    /// // This will panic
    /// let _ = Letter::from_index(25);
    /// ```
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        assert!(index < 25, "Invalid letter index: {index}");
        Self::ALL[usize::from(index)]
    }

    /// Creates a letter from an arbitrary character.
    ///
    /// ASCII letters are accepted in either case; `j` and `J` fold onto
    /// [`Letter::I`]. Every other character yields `None`. This is the single
    /// fallible boundary of the alphabet: once a value is a `Letter`, it is
    /// a member of every key matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair_core::Letter;
    ///
    /// assert_eq!(Letter::from_char('a'), Some(Letter::A));
    /// assert_eq!(Letter::from_char('J'), Some(Letter::I));
    /// assert_eq!(Letter::from_char('7'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        match c {
            'A'..='I' => Some(Self::from_index(c as u8 - b'A')),
            'J' => Some(Self::I),
            'K'..='Z' => Some(Self::from_index(c as u8 - b'A' - 1)),
            _ => None,
        }
    }

    /// Returns the alphabet index of this letter (0-24).
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair_core::Letter;
    ///
    /// assert_eq!(Letter::A.index(), 0);
    /// assert_eq!(Letter::Z.index(), 24);
    /// ```
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the uppercase character for this letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair_core::Letter;
    ///
    /// assert_eq!(Letter::K.as_char(), 'K');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        const CHARS: [char; 25] = [
            'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
            'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
        ];
        CHARS[self as usize]
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}
