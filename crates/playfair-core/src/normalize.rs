//! Input normalization for keys and texts.
//!
//! The cipher accepts arbitrary-case, punctuation-laden input. Normalization
//! uppercases, drops every character outside A–Z, and folds J onto I so that
//! the result fits the 25-letter alphabet. It never fails; input with no
//! usable letters normalizes to the empty string.

use crate::Letter;

/// Returns an iterator over the alphabet letters of `text`, in order.
///
/// Characters outside A–Z (in either case) are skipped; `J` and `j` yield
/// [`Letter::I`].
///
/// # Examples
///
/// ```
/// use playfair_core::{Letter, letters};
///
/// let out: Vec<_> = letters("Ju-jitsu!").collect();
/// assert_eq!(
///     out,
///     [Letter::I, Letter::U, Letter::I, Letter::I, Letter::T, Letter::S, Letter::U],
/// );
/// ```
pub fn letters(text: &str) -> impl Iterator<Item = Letter> + '_ {
    text.chars().filter_map(Letter::from_char)
}

/// Normalizes `text` to its uppercase, J-folded, letters-only form.
///
/// Idempotent: normalizing an already-normalized string returns it unchanged.
///
/// # Examples
///
/// ```
/// use playfair_core::normalize;
///
/// assert_eq!(normalize("Hide the gold, Jim!"), "HIDETHEGOLDIIM");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    letters(text).map(Letter::as_char).collect()
}
