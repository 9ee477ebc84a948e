//! Coordinates within the 5×5 key matrix.

/// A (row, column) coordinate in the 5×5 key matrix.
///
/// Both coordinates are in the range 0-4, checked at construction time.
/// The wrapping step methods ([`right`](Self::right), [`left`](Self::left),
/// [`down`](Self::down), [`up`](Self::up)) implement the modulo-5 shifts
/// used by the row and column substitution rules.
///
/// # Examples
///
/// ```
/// use playfair_core::Position;
///
/// let pos = Position::new(0, 4);
/// assert_eq!(pos.right(), Position::new(0, 0)); // wraps around
/// assert_eq!(pos.down(), Position::new(1, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-4.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 5, "Row must be 0-4");
        assert!(col < 5, "Column must be 0-4");
        Self { row, col }
    }

    /// Returns the row coordinate (0-4).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-4).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position one column to the right, wrapping within the row.
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, (self.col + 1) % 5)
    }

    /// Returns the position one column to the left, wrapping within the row.
    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.row, (self.col + 4) % 5)
    }

    /// Returns the position one row down, wrapping within the column.
    #[must_use]
    pub const fn down(self) -> Self {
        Self::new((self.row + 1) % 5, self.col)
    }

    /// Returns the position one row up, wrapping within the column.
    #[must_use]
    pub const fn up(self) -> Self {
        Self::new((self.row + 4) % 5, self.col)
    }

    /// Returns an iterator over all 25 positions in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use playfair_core::Position;
    /// let positions: Vec<_> = Position::all().collect();
    /// assert_eq!(positions.len(), 25);
    /// assert_eq!(positions[0], Position::new(0, 0));
    /// assert_eq!(positions[24], Position::new(4, 4));
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..5).flat_map(|row| (0..5).map(move |col| Self::new(row, col)))
    }
}
