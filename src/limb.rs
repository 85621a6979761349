//! Single-limb building blocks for the carry and borrow loops.
//!
//! Every multi-limb routine in this crate is a ripple of the scalar steps
//! below. The wide type is exactly twice the limb width, which leaves room for
//! one product plus one carry: `Wide::MAX - Limb::MAX * Limb::MAX >= Limb::MAX`.

use crate::lib::mem;

/// Type for a single limb of the big integer.
///
/// A limb is analogous to a digit in base10, except it stores a 32-bit
/// number instead.
pub type Limb = u32;

/// Intermediate type for limb arithmetic, twice as wide as [`Limb`].
pub type Wide = u64;

/// Number of bits in a [`Limb`].
pub const LIMB_BITS: usize = mem::size_of::<Limb>() * 8;

/// The radix of a magnitude, `2^32`.
pub const BASE: Wide = 1 << LIMB_BITS;

/// Mask selecting the low limb of a [`Wide`].
pub const MASK: Wide = BASE - 1;

/// Split u64 into limbs, in little-endian order.
#[inline]
pub(crate) fn split_u64(x: u64) -> [Limb; 2] {
    [x as Limb, (x >> LIMB_BITS) as Limb]
}

/// Join the two lowest limbs of a little-endian slice into a u64.
#[inline]
pub(crate) fn join_u64(lo: Limb, hi: Limb) -> u64 {
    ((hi as u64) << LIMB_BITS) | lo as u64
}

// ADDITION

/// Add two limbs and an incoming carry. Returns the (low, carry) components.
#[inline]
pub(crate) fn add(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
    let z = x as Wide + y as Wide + carry as Wide;
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

// SUBTRACTION

/// Subtract a limb and an incoming borrow. Returns the (low, borrow)
/// components, where the low limb has wrapped around by `BASE` whenever the
/// outgoing borrow is set.
#[inline]
pub(crate) fn sub(x: Limb, y: Limb, borrow: Limb) -> (Limb, Limb) {
    let (z, b1) = x.overflowing_sub(y);
    let (z, b2) = z.overflowing_sub(borrow);
    (z, (b1 | b2) as Limb)
}

/// SubAssign a limb and an incoming borrow, returning the outgoing borrow.
#[inline]
pub(crate) fn isub(x: &mut Limb, y: Limb, borrow: Limb) -> Limb {
    let (lo, borrow) = sub(*x, y, borrow);
    *x = lo;
    borrow
}

// MULTIPLICATION

/// Multiply two limbs and add both an accumulator limb and a carry.
///
/// Returns the (low, high) components. Cannot overflow, since
/// `(2^32-1)^2 + 2*(2^32-1) == 2^64-1`.
#[inline]
pub(crate) fn mul_add(x: Limb, y: Limb, acc: Limb, carry: Limb) -> (Limb, Limb) {
    let z = x as Wide * y as Wide + acc as Wide + carry as Wide;
    (z as Limb, (z >> LIMB_BITS) as Limb)
}

/// MulAssign a limb by a full 64-bit multiplier with a 64-bit carry.
///
/// Returns the outgoing carry. The intermediate is bounded by
/// `(2^32-1)*(2^64-1) + (2^64-1) < 2^96`, so the carry always fits in 64 bits.
#[inline]
pub(crate) fn imul_u64(x: &mut Limb, y: u64, carry: u64) -> u64 {
    let z = *x as u128 * y as u128 + carry as u128;
    *x = z as Limb;
    (z >> LIMB_BITS) as u64
}
