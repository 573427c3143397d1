//! Derivation of the Montgomery residue constant `R^2 mod N`.
//!
//! `R = 2^(32w)` where `w` is the number of 32-bit words holding the
//! modulus, i.e. the smallest word-aligned power of two above `N`. The
//! constant is derived the way the accelerator derives it for itself:
//! the modulus is left-aligned to its word boundary, and an accumulator is
//! shifted one word left per round while the overflow word above the
//! `w`-word window is cleared by subtracting word-scaled multiples of the
//! aligned modulus. The word-serial form matters: for moduli that are not
//! word-aligned it yields the exact bit pattern the peripheral expects,
//! which a generic wide reduction of `R^2` does not.

use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{
    Modulus,
    encoding::{self, WORD_BITS, Word},
};

/// Montgomery residue constant derived from a [`Modulus`].
///
/// Holds the constant as an integer together with the output word width,
/// which matches the width the modulus was supplied at. The [`Display`]
/// impl renders the source literal downstream tooling parses, e.g.
/// `R2: [u32; 8] = [0x1C1F0858, ..., 0x3AF42ABB];`, so its exact shape is
/// a compatibility contract.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct R2 {
    value: BigUint,
    width: usize,
}

impl R2 {
    /// The constant as an integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.value
    }

    /// Output width in 32-bit words.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Encode the constant as a big-endian word array of the output width.
    pub fn to_be_words(&self) -> Vec<Word> {
        encoding::to_be_words(&self.value, self.width)
            .expect("derived constant fits the modulus width")
    }
}

impl fmt::Display for R2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R2: [u32; {}] = [", self.width)?;

        for (i, word) in self.to_be_words().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{word:08X}")?;
        }

        f.write_str("];")
    }
}

/// Compute the Montgomery residue constant `R^2 mod N` for `modulus`.
///
/// Runs `w + 2` reduction rounds over a `w`-word window, `w` being the
/// modulus word width. Each round shifts the accumulator one word left and
/// knocks the overflow word back to zero; every subtraction removes a
/// multiple of the aligned modulus, and the accumulator never exceeds
/// `2^(32(w+1))`, so the rounds always terminate with a result below
/// `2^(32w)`.
pub fn montgomery_r2(modulus: &Modulus) -> R2 {
    let window = u64::from(WORD_BITS) * modulus.word_width() as u64;
    // Modulus shifted up to sit flush against the word boundary.
    let aligned = modulus.as_uint() << modulus.alignment_gap();
    let mask = BigUint::from(Word::MAX);

    let mut z = (BigUint::one() << window) - &aligned;

    for _ in 0..modulus.word_width() + 2 {
        z <<= WORD_BITS;

        // Overflow word: bits [32w, 32w + 32) of the accumulator.
        let mut msw = (&z >> window) & &mask;
        while !msw.is_zero() {
            z -= &aligned * &msw;
            msw = (&z >> window) & &mask;
        }
    }

    R2 {
        value: z,
        width: modulus.width(),
    }
}
