//! The Playfair cipher engine.
//!
//! This crate composes the [`playfair_core`] types into whole-text encryption
//! and decryption with a per-digraph audit trail.
//!
//! # Overview
//!
//! 1. **Segmentation** - [`digraph`]: splitting normalized text into
//!    two-letter pairs, with the duplicate-letter and odd-length padding
//!    rules
//! 2. **Substitution** - [`substitution`]: the row, column, and rectangle
//!    rules in both directions, each application recorded as a
//!    [`StepRecord`]
//! 3. **Orchestration** - [`cipher`]: the [`Playfair`] type and the
//!    [`encrypt`]/[`decrypt`] entry points, returning the derived matrix,
//!    the prepared text, the output text, and the step trace
//!
//! The Playfair cipher is a historical, pedagogical cipher; nothing here
//! claims cryptographic security.
//!
//! # Examples
//!
//! ```
//! use playfair_cipher::Playfair;
//!
//! let cipher = Playfair::new("MONARCHY", 'X')?;
//!
//! let encrypted = cipher.encrypt("Hide the gold");
//! let decrypted = cipher.decrypt(&encrypted.cipher_text);
//! assert_eq!(decrypted.plain_text, "HIDETHEGOLD");
//!
//! for step in &encrypted.steps {
//!     println!("{} -[{}]-> {}", step.input, step.rule, step.output);
//! }
//! # Ok::<(), playfair_cipher::CipherError>(())
//! ```

pub mod cipher;
pub mod digraph;
pub mod substitution;

// Re-export commonly used items
pub use self::{
    cipher::{DecryptOutcome, EncryptOutcome, Playfair, decrypt, encrypt},
    digraph::{Pair, Segments, fixed_pairs, segment},
    substitution::{Direction, Rule, StepRecord, substitute},
};

/// Errors produced by cipher construction.
///
/// Normalization and matrix building never fail on arbitrary input; the pad
/// character is the only argument that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CipherError {
    /// The pad argument is not a single alphabetic letter.
    #[display("invalid pad character {pad:?}: expected a single letter A-Z")]
    InvalidPad {
        /// The rejected character.
        pad: char,
    },
}
