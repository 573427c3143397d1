//! Big-endian word array encoding of arbitrary-precision integers.
//!
//! PKA-style peripherals exchange big integers as fixed-width arrays of
//! 32-bit words with the most significant word first. These codecs convert
//! between that representation and [`BigUint`].

use num_bigint::BigUint;

use crate::{Error, Result};

/// The accelerator's natural digit size.
pub type Word = u32;

/// Size of a [`Word`] in bits.
pub const WORD_BITS: u32 = 32;

/// Decode a big-endian array of 32-bit words into an integer.
///
/// The words are treated as digits of a base-`2^32` number, most
/// significant first. Any input is valid; an empty slice decodes to zero.
pub fn from_be_words(words: &[Word]) -> BigUint {
    let le: Vec<Word> = words.iter().rev().copied().collect();
    BigUint::from_slice(&le)
}

/// Encode an integer as a big-endian array of exactly `width` 32-bit words.
///
/// Values narrower than the requested width are zero-padded on the high
/// (leading) side. Returns [`Error::Truncated`] if the value has more than
/// `32 * width` significant bits.
pub fn to_be_words(value: &BigUint, width: usize) -> Result<Vec<Word>> {
    if value.bits() > u64::from(WORD_BITS) * width as u64 {
        return Err(Error::Truncated {
            bits: value.bits(),
            width,
        });
    }

    let mut words = value.to_u32_digits();
    words.resize(width, 0);
    words.reverse();
    Ok(words)
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use num_traits::Zero;

    use super::{from_be_words, to_be_words};
    use crate::Error;

    #[test]
    fn from_be_words_msw_first() {
        assert_eq!(
            from_be_words(&[0x00112233, 0x44556677]),
            BigUint::from(0x00112233_44556677_u64)
        );
    }

    #[test]
    fn from_be_words_empty_is_zero() {
        assert_eq!(from_be_words(&[]), BigUint::zero());
    }

    #[test]
    fn to_be_words_zero_pads_high_side() {
        assert_eq!(
            to_be_words(&BigUint::from(1_u32), 2),
            Ok(vec![0x00000000, 0x00000001])
        );
    }

    #[test]
    fn to_be_words_full_width() {
        assert_eq!(
            to_be_words(&BigUint::from(u64::MAX), 2),
            Ok(vec![0xffffffff, 0xffffffff])
        );
    }

    #[test]
    fn to_be_words_rejects_truncation() {
        let value = BigUint::from(1_u32) << 64;
        assert_eq!(
            to_be_words(&value, 2),
            Err(Error::Truncated { bits: 65, width: 2 })
        );
    }
}
