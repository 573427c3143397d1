//! Wrapper type for the accelerator modulus.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{
    Error, Result,
    encoding::{self, WORD_BITS, Word},
};

/// A positive modulus together with the word width it was supplied at.
///
/// Wrapping the decoded integer makes `N > 0` a construction-time fact, so
/// the generator itself has no failure path. The supplied array width is
/// retained because derived constants are encoded back at that width.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Modulus {
    value: BigUint,
    width: usize,
}

impl Modulus {
    /// Decode a modulus from a big-endian array of 32-bit words.
    ///
    /// Returns [`Error::ZeroModulus`] if `words` is empty or every word is
    /// zero.
    pub fn from_be_words(words: &[Word]) -> Result<Self> {
        let value = encoding::from_be_words(words);

        if value.is_zero() {
            return Err(Error::ZeroModulus);
        }

        Ok(Self {
            value,
            width: words.len(),
        })
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.value.bits()
    }

    /// Number of 32-bit words needed to hold the modulus.
    ///
    /// This is the width of the reduction window the derivation operates
    /// on. It can be smaller than [`Modulus::width`] when the supplied
    /// array carried leading zero words.
    pub fn word_width(&self) -> usize {
        ((self.bits() + 31) >> 5) as usize
    }

    /// Width in words of the array the modulus was supplied as.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gap in bits between the modulus and the word boundary above it.
    ///
    /// Zero exactly when the bit length is a multiple of [`WORD_BITS`].
    pub(crate) fn alignment_gap(&self) -> u64 {
        u64::from(WORD_BITS) * self.word_width() as u64 - self.bits()
    }

    /// Borrow the modulus value.
    pub fn as_uint(&self) -> &BigUint {
        &self.value
    }
}
