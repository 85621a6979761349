//! Sign-magnitude arbitrary-precision integers over 32-bit limbs.
//!
//! # Representation
//!
//! A magnitude is a sequence of [`Limb`]s stored **least-significant limb
//! first**, so `[0, 1]` is `1 << 32` and `[7]` is `7`. The value of a
//! magnitude is `Σ limb[i] * BASE^i` with `BASE = 2^32`.
//!
//! [`BigSigned`] pairs such a magnitude with a [`Sign`]. It owns a growable
//! limb buffer whose capacity never drops below a small floor and which
//! always keeps headroom for a pending carry, so the scalar mutators never
//! reallocate in the middle of a carry ripple.
//!
//! ```
//! use bigsigned::{BigSigned, Sign};
//!
//! let mut x = BigSigned::from(u64::MAX);
//! x.add_unsigned(1);
//! assert_eq!(x.limbs(), &[0, 0, 1]);
//!
//! x.multiply_unsigned(3);
//! assert_eq!(x.limbs(), &[0, 0, 3]);
//!
//! // The word's top bit is read as a two's-complement sign.
//! let mut y = BigSigned::new();
//! y.subtract_unsigned(5);
//! assert_eq!(y.sign(), Sign::Minus);
//! assert!(y < x);
//! ```
//!
//! # Ranged magnitude operations
//!
//! The [`magnitude`] module works directly on caller-owned limb slices. Each
//! operand is a [`Window`] into a backing array; results are written into a
//! caller-supplied buffer at a destination offset. Every precondition (window
//! bounds, result capacity, operand ordering for subtraction) is checked
//! before the first result limb is written.
//!
//! ```
//! use bigsigned::magnitude;
//!
//! let mut product = [0; 4];
//! magnitude::multiply(&[u32::MAX, 1], &[2, 0], &mut product, 0).unwrap();
//! assert_eq!(product, [u32::MAX - 1, 3, 0, 0]);
//! ```
//!
//! # Features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`].
//! - `alloc`: build without the standard library, on top of `alloc`.
//! - `serde`: `Serialize`/`Deserialize` for [`BigSigned`] and [`Sign`].

#![doc(html_root_url = "https://docs.rs/bigsigned/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    // limb arithmetic truncates wide intermediates on purpose
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::len_without_is_empty,
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(any(feature = "std", feature = "alloc")))]
mod features_check;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    pub(crate) use core::cmp::Ordering;
    pub(crate) use core::{fmt, mem, str};

    pub(crate) use alloc::boxed::Box;
    pub(crate) use alloc::vec::Vec;
}

pub use crate::error::{Category, Error, ErrorCode, Result};
pub use crate::limb::{Limb, Wide, BASE, LIMB_BITS, MASK};
pub use crate::magnitude::Window;
pub use crate::signed::{BigSigned, Sign};

pub mod error;
pub mod magnitude;

mod buffer;
mod limb;
mod signed;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;
