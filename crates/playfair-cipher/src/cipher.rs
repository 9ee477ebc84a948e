//! Whole-text encryption and decryption.

use playfair_core::{Letter, Matrix, letters};

use crate::{CipherError, Direction, StepRecord, fixed_pairs, segment, substitute};

/// A configured Playfair cipher: a key matrix plus a pad letter.
///
/// Construction is the only fallible step; once built, [`encrypt`](Self::encrypt)
/// and [`decrypt`](Self::decrypt) accept arbitrary input and normalize it
/// internally. Each call is a pure function of the configured key, the pad,
/// and the text: the cipher holds no mutable state and may be shared freely
/// across threads.
///
/// # Examples
///
/// ```
/// use playfair_cipher::Playfair;
///
/// let cipher = Playfair::new("MONARCHY", 'X')?;
/// let outcome = cipher.encrypt("Instruments");
/// assert_eq!(outcome.cipher_text, "GATLMZCLRQXA");
/// # Ok::<(), playfair_cipher::CipherError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    matrix: Matrix,
    pad: Letter,
}

/// The result of a whole-text encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptOutcome {
    /// The key matrix the text was encrypted with.
    pub matrix: Matrix,
    /// The segmented plaintext as space-joined digraphs, e.g. `"BA LX LO ON"`.
    pub prepared_text: String,
    /// The concatenated ciphertext.
    pub cipher_text: String,
    /// One record per digraph, in order.
    pub steps: Vec<StepRecord>,
}

/// The result of a whole-text decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptOutcome {
    /// The key matrix the text was decrypted with.
    pub matrix: Matrix,
    /// The concatenated decrypted letters before pad cleanup.
    pub raw_text: String,
    /// [`raw_text`](Self::raw_text) with inserted pad letters removed
    /// (best effort; see [`Playfair::decrypt`]).
    pub plain_text: String,
    /// One record per digraph, in order.
    pub steps: Vec<StepRecord>,
}

impl Playfair {
    /// The conventional pad letter.
    pub const DEFAULT_PAD: char = 'X';

    /// Creates a cipher for `key` with the given pad character.
    ///
    /// The key may be empty or contain repeats and punctuation; it is
    /// normalized and de-duplicated as the matrix is derived. The pad must be
    /// a single alphabetic letter (`J` folds onto `I`, like any other input).
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidPad`] if `pad` is not an ASCII letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use playfair_cipher::{CipherError, Playfair};
    ///
    /// let cipher = Playfair::new("keyword", Playfair::DEFAULT_PAD)?;
    /// assert!(matches!(
    ///     Playfair::new("keyword", '7'),
    ///     Err(CipherError::InvalidPad { pad: '7' }),
    /// ));
    /// # Ok::<(), CipherError>(())
    /// ```
    pub fn new(key: &str, pad: char) -> Result<Self, CipherError> {
        let pad = Letter::from_char(pad).ok_or(CipherError::InvalidPad { pad })?;
        Ok(Self {
            matrix: Matrix::from_key(key),
            pad,
        })
    }

    /// Returns the derived key matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the pad letter.
    #[must_use]
    pub const fn pad(&self) -> Letter {
        self.pad
    }

    /// Encrypts `text`.
    ///
    /// The text is normalized, segmented into digraphs (duplicate letters
    /// split by the pad, a trailing singleton completed with it), and every
    /// digraph is substituted in the forward direction. Empty or
    /// non-alphabetic input yields an empty outcome.
    #[must_use]
    pub fn encrypt(&self, text: &str) -> EncryptOutcome {
        let text: Vec<Letter> = letters(text).collect();
        let mut prepared_text = String::new();
        let mut cipher_text = String::new();
        let mut steps = Vec::new();
        for pair in segment(&text, self.pad) {
            if !prepared_text.is_empty() {
                prepared_text.push(' ');
            }
            prepared_text.push(pair.first().as_char());
            prepared_text.push(pair.second().as_char());

            let step = substitute(&self.matrix, pair, Direction::Encrypt);
            cipher_text.push(step.output.first().as_char());
            cipher_text.push(step.output.second().as_char());
            steps.push(step);
        }
        EncryptOutcome {
            matrix: self.matrix.clone(),
            prepared_text,
            cipher_text,
            steps,
        }
    }

    /// Decrypts `text`.
    ///
    /// The text is normalized and split into fixed-width pairs of two (a
    /// trailing odd letter is paired with the pad), and every pair is
    /// substituted in the inverse direction. The concatenated result is kept
    /// as [`DecryptOutcome::raw_text`]; [`DecryptOutcome::plain_text`] then
    /// applies a best-effort cleanup that drops each pad letter sitting
    /// between two copies of the same letter (undoing the duplicate split)
    /// and strips a single trailing pad.
    ///
    /// The cleanup is a heuristic. When the pad letter occurs legitimately in
    /// the source plaintext it can remove too much; this is a known, accepted
    /// limitation of the classical scheme, not an error condition. Callers
    /// that need the unmodified decryption should read `raw_text`.
    #[must_use]
    pub fn decrypt(&self, text: &str) -> DecryptOutcome {
        let text: Vec<Letter> = letters(text).collect();
        let mut raw = Vec::with_capacity(text.len());
        let mut steps = Vec::new();
        for pair in fixed_pairs(&text, self.pad) {
            let step = substitute(&self.matrix, pair, Direction::Decrypt);
            raw.push(step.output.first());
            raw.push(step.output.second());
            steps.push(step);
        }
        let plain_text = strip_padding(&raw, self.pad);
        DecryptOutcome {
            matrix: self.matrix.clone(),
            raw_text: raw.iter().map(|letter| letter.as_char()).collect(),
            plain_text,
            steps,
        }
    }
}

/// Encrypts `text` under `key` with the given pad character.
///
/// Convenience wrapper over [`Playfair::new`] + [`Playfair::encrypt`].
///
/// # Errors
///
/// Returns [`CipherError::InvalidPad`] if `pad` is not an ASCII letter.
///
/// # Examples
///
/// ```
/// use playfair_cipher::encrypt;
///
/// let outcome = encrypt("MONARCHY", "INSTRUMENTS", 'X')?;
/// assert_eq!(outcome.cipher_text, "GATLMZCLRQXA");
/// # Ok::<(), playfair_cipher::CipherError>(())
/// ```
pub fn encrypt(key: &str, text: &str, pad: char) -> Result<EncryptOutcome, CipherError> {
    Ok(Playfair::new(key, pad)?.encrypt(text))
}

/// Decrypts `text` under `key` with the given pad character.
///
/// Convenience wrapper over [`Playfair::new`] + [`Playfair::decrypt`].
///
/// # Errors
///
/// Returns [`CipherError::InvalidPad`] if `pad` is not an ASCII letter.
pub fn decrypt(key: &str, text: &str, pad: char) -> Result<DecryptOutcome, CipherError> {
    Ok(Playfair::new(key, pad)?.decrypt(text))
}

fn strip_padding(raw: &[Letter], pad: Letter) -> String {
    let mut kept = Vec::with_capacity(raw.len());
    for (i, &letter) in raw.iter().enumerate() {
        let splits_repeat =
            letter == pad && i > 0 && i + 1 < raw.len() && raw[i - 1] == raw[i + 1];
        if !splits_repeat {
            kept.push(letter);
        }
    }
    if kept.last() == Some(&pad) {
        kept.pop();
    }
    kept.iter().map(|letter| letter.as_char()).collect()
}

#[cfg(test)]
mod tests {
    use crate::Rule;

    use super::*;

    #[test]
    fn test_textbook_encrypt() {
        // The classic worked example from cipher literature
        let outcome = encrypt("MONARCHY", "INSTRUMENTS", 'X').unwrap();
        assert_eq!(outcome.prepared_text, "IN ST RU ME NT SX");
        assert_eq!(outcome.cipher_text, "GATLMZCLRQXA");

        let rules: Vec<Rule> = outcome.steps.iter().map(|step| step.rule).collect();
        assert_eq!(
            rules,
            [
                Rule::Rectangle,
                Rule::SameRow,
                Rule::Rectangle,
                Rule::SameColumn,
                Rule::Rectangle,
                Rule::SameColumn,
            ],
        );
    }

    #[test]
    fn test_textbook_decrypt() {
        let outcome = decrypt("MONARCHY", "GATLMZCLRQXA", 'X').unwrap();
        assert_eq!(outcome.raw_text, "INSTRUMENTSX");
        assert_eq!(outcome.plain_text, "INSTRUMENTS");
        assert_eq!(outcome.steps.len(), 6);
    }

    #[test]
    fn test_normalizes_input() {
        let noisy = encrypt("monarchy!", "In-stru, ments?", 'x').unwrap();
        let clean = encrypt("MONARCHY", "INSTRUMENTS", 'X').unwrap();
        assert_eq!(noisy, clean);
    }

    #[test]
    fn test_round_trip_with_duplicate_split() {
        let cipher = Playfair::new("MONARCHY", 'X').unwrap();
        let encrypted = cipher.encrypt("BALLOON");
        assert_eq!(encrypted.prepared_text, "BA LX LO ON");

        let decrypted = cipher.decrypt(&encrypted.cipher_text);
        assert_eq!(decrypted.raw_text, "BALXLOON");
        assert_eq!(decrypted.plain_text, "BALLOON");
    }

    #[test]
    fn test_round_trip_with_trailing_pad() {
        let cipher = Playfair::new("KEYWORD", 'X').unwrap();
        let encrypted = cipher.encrypt("FOX");
        let decrypted = cipher.decrypt(&encrypted.cipher_text);
        assert_eq!(decrypted.plain_text, "FOX");
    }

    #[test]
    fn test_cleanup_is_lossy_when_pad_occurs_in_plaintext() {
        // Known limitation: the cleanup heuristic cannot tell an inserted pad
        // from a legitimate one. AXA segments to AX AX; the cleanup then sees
        // the original X between two As and removes it.
        let cipher = Playfair::new("MONARCHY", 'X').unwrap();
        let encrypted = cipher.encrypt("AXA");
        let decrypted = cipher.decrypt(&encrypted.cipher_text);
        assert_eq!(decrypted.raw_text, "AXAX");
        assert_eq!(decrypted.plain_text, "AA");
    }

    #[test]
    fn test_empty_text() {
        let cipher = Playfair::new("MONARCHY", 'X').unwrap();

        let encrypted = cipher.encrypt("");
        assert_eq!(encrypted.prepared_text, "");
        assert_eq!(encrypted.cipher_text, "");
        assert!(encrypted.steps.is_empty());

        let decrypted = cipher.decrypt("?!42");
        assert_eq!(decrypted.plain_text, "");
        assert!(decrypted.steps.is_empty());
    }

    #[test]
    fn test_invalid_pad_rejected() {
        assert_eq!(
            Playfair::new("MONARCHY", '3').unwrap_err(),
            CipherError::InvalidPad { pad: '3' },
        );
        assert_eq!(
            encrypt("MONARCHY", "HELLO", ' ').unwrap_err(),
            CipherError::InvalidPad { pad: ' ' },
        );
    }

    #[test]
    fn test_pad_letter_is_normalized() {
        // Lowercase and J-folding apply to the pad like any other input
        assert_eq!(Playfair::new("", 'x').unwrap().pad(), Letter::X);
        assert_eq!(Playfair::new("", 'J').unwrap().pad(), Letter::I);
    }

    #[test]
    fn test_decrypt_odd_length_ciphertext() {
        // The final letter pairs with the pad before substitution
        let outcome = decrypt("MONARCHY", "GATLM", 'X').unwrap();
        assert_eq!(outcome.steps.len(), 3);
        assert_eq!(outcome.steps[2].input.to_string(), "MX");
    }

    #[test]
    fn test_matrix_is_exposed() {
        let cipher = Playfair::new("MONARCHY", 'X').unwrap();
        let outcome = cipher.encrypt("HELLO");
        assert_eq!(&outcome.matrix, cipher.matrix());
    }
}
