//! Montgomery parameter generation for PKA-style hardware accelerators.
//!
//! # About
//! Modular arithmetic peripherals that implement Montgomery multiplication
//! need the residue constant `R^2 mod N` to move operands into Montgomery
//! form. This crate derives that constant for an arbitrary modulus `N`,
//! supplied and returned as a big-endian array of 32-bit words, the digit
//! format such peripherals exchange through their operand RAM.
//!
//! Rather than reducing `R^2` with a generic wide division, the generator
//! replays the word-serial shift-and-subtract reduction the accelerator
//! performs internally, one 32-bit word per round. The emitted constant is
//! therefore bit-exact for the hardware, including for moduli whose bit
//! length is not a multiple of the word size.
//!
//! # Usage
//! ```
//! use pka_r2::{Modulus, montgomery_r2};
//!
//! // The P-256 group order.
//! let modulus = Modulus::from_be_words(&[
//!     0xffffffff, 0x00000000, 0xffffffff, 0xffffffff,
//!     0xbce6faad, 0xa7179e84, 0xf3b9cac2, 0xfc632551,
//! ])?;
//!
//! let r2 = montgomery_r2(&modulus);
//! assert_eq!(r2.to_be_words()[0], 0x1C1F0858);
//! # Ok::<(), pka_r2::Error>(())
//! ```
//!
//! The `pka-r2` binary wraps the same derivation for one-off use, printing
//! the constant as a source literal ready to paste next to the modulus it
//! belongs to.

#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod encoding;
mod error;
mod modulus;
mod params;

pub use crate::{
    encoding::{WORD_BITS, Word, from_be_words, to_be_words},
    error::{Error, Result},
    modulus::Modulus,
    params::{R2, montgomery_r2},
};
pub use num_bigint;
