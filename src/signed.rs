//! Sign-magnitude big integer with in-place scalar arithmetic.

use crate::buffer::LimbBuffer;
use crate::error::{Error, ErrorCode, Result};
use crate::lib::{fmt, str, Ordering};
use crate::limb::{self, Limb};
use crate::magnitude;

/// Sign of a [`BigSigned`].
///
/// Ordered `Minus < Zero < Plus`, which is also the order of the values
/// carrying them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Strictly negative.
    Minus,
    /// Exactly zero.
    Zero,
    /// Strictly positive.
    Plus,
}

impl Sign {
    /// `-1`, `0` or `1`.
    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Sign::Minus => -1,
            Sign::Zero => 0,
            Sign::Plus => 1,
        }
    }

    /// Inverse of [`signum`](Self::signum).
    #[inline]
    pub fn from_signum(signum: i8) -> Option<Sign> {
        match signum {
            -1 => Some(Sign::Minus),
            0 => Some(Sign::Zero),
            1 => Some(Sign::Plus),
            _ => None,
        }
    }

    #[inline]
    fn of(value: i64) -> Sign {
        match value.cmp(&0) {
            Ordering::Less => Sign::Minus,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Plus,
        }
    }

    #[inline]
    fn negate(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Zero => Sign::Zero,
            Sign::Plus => Sign::Minus,
        }
    }
}

/// Arbitrary-precision signed integer.
///
/// Holds a [`Sign`] and an exclusively owned little-endian limb buffer. The
/// sign is [`Sign::Zero`] exactly when every limb is zero. The buffer keeps
/// at least 16 limbs of capacity and grows ahead of need, so a carry ripple
/// never reallocates half way through.
///
/// The scalar mutators take a `u64` word. `add_unsigned` and
/// `subtract_unsigned` read the word's top bit as a two's-complement sign, so
/// `x.add_unsigned(w)` computes `x + (w as i64)`; `multiply_unsigned` uses the
/// whole word as an unsigned multiplier.
#[derive(Clone)]
pub struct BigSigned {
    sign: Sign,
    mag: LimbBuffer,
}

impl BigSigned {
    /// Zero.
    pub fn new() -> Self {
        BigSigned {
            sign: Sign::Zero,
            mag: LimbBuffer::new(),
        }
    }

    /// Create a value from a sign and an unsigned 64-bit magnitude.
    fn from_sign_u64(sign: Sign, magnitude: u64) -> Self {
        let mut x = BigSigned::new();
        if magnitude != 0 {
            x.seed(sign, magnitude);
        }
        x
    }

    /// Build a value from a sign and little-endian limbs.
    ///
    /// Returns `None` unless the sign and magnitude agree: [`Sign::Zero`]
    /// requires every limb to be zero, and any other sign requires a nonzero
    /// limb.
    ///
    /// ```
    /// use bigsigned::{magnitude, BigSigned, Sign};
    ///
    /// let mut product = [0; 4];
    /// magnitude::multiply(&[u32::MAX, 1], &[3, 0], &mut product, 0).unwrap();
    /// let x = BigSigned::from_limbs(Sign::Minus, &product).unwrap();
    /// assert_eq!(x.to_i128(), Some(-3 * 0x1_FFFF_FFFF));
    ///
    /// assert!(BigSigned::from_limbs(Sign::Plus, &[0, 0]).is_none());
    /// ```
    pub fn from_limbs(sign: Sign, limbs: &[Limb]) -> Option<BigSigned> {
        let zero = magnitude::most_significant_nonzero(limbs).is_none();
        if zero != (sign == Sign::Zero) {
            return None;
        }
        Some(BigSigned {
            sign,
            mag: LimbBuffer::from_limbs(limbs),
        })
    }

    // PROPERTIES

    /// The sign of the value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// The magnitude's limbs, least significant first, without high zero
    /// limbs. Empty for zero.
    pub fn limbs(&self) -> &[Limb] {
        &self.mag.as_slice()[..self.len()]
    }

    /// Number of limbs up to and including the most-significant nonzero one.
    pub fn len(&self) -> usize {
        if self.is_zero() {
            0
        } else {
            self.mag.logical_len()
        }
    }

    /// Number of limbs allocated for the magnitude.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.mag.capacity()
    }

    /// The value as an `i128`, if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        debug_assert_eq!(self.is_zero(), self.mag.logical_len() == 0);
        let limbs = self.limbs();
        if limbs.len() > 4 {
            return None;
        }
        let magnitude = limbs
            .iter()
            .rev()
            .fold(0u128, |acc, &x| (acc << limb::LIMB_BITS) | x as u128);
        match self.sign {
            Sign::Zero => Some(0),
            Sign::Plus => i128::try_from(magnitude).ok(),
            Sign::Minus if magnitude == i128::MIN.unsigned_abs() => Some(i128::MIN),
            Sign::Minus => i128::try_from(magnitude).ok().map(|x| -x),
        }
    }

    // BUFFER MANAGEMENT

    /// Release unused capacity if that frees a worthwhile amount of memory.
    ///
    /// Only shrinks when at least a quarter of the capacity, and at least
    /// 8192 limbs, sit above the most-significant nonzero limb. Never goes
    /// below 16 limbs. Returns true if the buffer was reallocated.
    pub fn shrink(&mut self) -> bool {
        self.mag.shrink()
    }

    /// Set the value to zero, keeping the allocation.
    fn assign_zero(&mut self) {
        self.sign = Sign::Zero;
        self.mag.clear();
    }

    /// Turn a zero value into `sign * magnitude` on a fresh minimum buffer.
    fn seed(&mut self, sign: Sign, magnitude: u64) {
        debug_assert!(magnitude != 0 && sign != Sign::Zero);
        self.mag.reset();
        let [lo, hi] = limb::split_u64(magnitude);
        let limbs = self.mag.as_mut_slice();
        limbs[0] = lo;
        limbs[1] = hi;
        self.sign = sign;
    }

    /// Flip the sign.
    pub fn negate(&mut self) {
        self.sign = self.sign.negate();
    }

    // ADDITION

    /// Add a signed 64-bit word, given as its raw bit pattern.
    ///
    /// Same-sign operands grow the magnitude; an operand of the opposite sign
    /// is handed to the magnitude subtraction instead.
    ///
    /// ```
    /// use bigsigned::BigSigned;
    ///
    /// let mut x = BigSigned::from(10);
    /// x.add_unsigned(5);
    /// assert_eq!(x.to_i128(), Some(15));
    /// x.add_unsigned(-20i64 as u64);
    /// assert_eq!(x.to_i128(), Some(-5));
    /// ```
    pub fn add_unsigned(&mut self, word: u64) {
        let value = word as i64;
        self.iadd_signed(Sign::of(value), value.unsigned_abs());
    }

    /// AddAssign `sign * magnitude`.
    fn iadd_signed(&mut self, sign: Sign, magnitude: u64) {
        if magnitude == 0 {
            return;
        }
        match (self.sign, sign) {
            (_, Sign::Zero) => {}
            (Sign::Zero, _) => self.seed(sign, magnitude),
            (x, y) if x == y => self.iadd_magnitude(magnitude),
            _ => self.isub_magnitude(magnitude),
        }
    }

    /// AddAssign an unsigned 64-bit value to the magnitude.
    fn iadd_magnitude(&mut self, y: u64) {
        // Feed the operand in as the initial carry, then ripple. Only the low
        // limb of the carry joins each sum; the rest moves up with it.
        let mut carry = y;
        for xi in self.mag.as_mut_slice().iter_mut() {
            if carry == 0 {
                return;
            }
            let sum = (*xi as u64) + (carry & limb::MASK);
            *xi = sum as Limb;
            carry = (carry >> limb::LIMB_BITS) + (sum >> limb::LIMB_BITS);
        }

        // Overflowed the buffer entirely: the carry spans at most two limbs.
        if carry != 0 {
            let len = self.mag.capacity();
            self.mag.grow_to_fit(len + 2);
            let [lo, hi] = limb::split_u64(carry);
            let limbs = self.mag.as_mut_slice();
            limbs[len] = lo;
            limbs[len + 1] = hi;
        }
    }

    // SUBTRACTION

    /// Subtract a signed 64-bit word, given as its raw bit pattern.
    ///
    /// Subtracting from zero seeds a value of the opposite sign; a same-sign
    /// operand shrinks the magnitude, flipping the sign if it crosses zero,
    /// and an opposite-sign operand is handed to the magnitude addition.
    ///
    /// ```
    /// use bigsigned::{BigSigned, Sign};
    ///
    /// let mut x = BigSigned::from(u64::MAX);
    /// x.add_unsigned(1);
    /// x.subtract_unsigned(1);
    /// assert_eq!(x.limbs(), &[u32::MAX, u32::MAX]);
    ///
    /// let mut y = BigSigned::from(3);
    /// y.subtract_unsigned(5);
    /// assert_eq!(y.sign(), Sign::Minus);
    /// assert_eq!(y.limbs(), &[2]);
    /// ```
    pub fn subtract_unsigned(&mut self, word: u64) {
        let value = word as i64;
        self.iadd_signed(Sign::of(value).negate(), value.unsigned_abs());
    }

    /// SubAssign an unsigned 64-bit value from the magnitude.
    ///
    /// Ripples the borrow through every limb. When the magnitude is smaller
    /// than `y` the sign flips and the magnitude becomes `y - magnitude`.
    fn isub_magnitude(&mut self, y: u64) {
        let len = self.mag.logical_len();
        if len <= 2 {
            let limbs = self.mag.as_slice();
            let x = limb::join_u64(limbs[0], limbs[1]);
            match x.cmp(&y) {
                Ordering::Less => {
                    let [lo, hi] = limb::split_u64(y - x);
                    let limbs = self.mag.as_mut_slice();
                    limbs[0] = lo;
                    limbs[1] = hi;
                    self.negate();
                    return;
                }
                Ordering::Equal => {
                    self.assign_zero();
                    return;
                }
                Ordering::Greater => {}
            }
        }

        let [lo, hi] = limb::split_u64(y);
        let limbs = self.mag.as_mut_slice();
        let mut borrow = limb::isub(&mut limbs[0], lo, 0);
        borrow = limb::isub(&mut limbs[1], hi, borrow);
        for xi in limbs[2..len.max(2)].iter_mut() {
            if borrow == 0 {
                break;
            }
            borrow = limb::isub(xi, 0, borrow);
        }
        debug_assert_eq!(borrow, 0);
    }

    // MULTIPLICATION

    /// Multiply the magnitude by an unsigned 64-bit word.
    ///
    /// Multiplying by zero yields zero. Two spare limbs are reserved before
    /// the ripple, so the final carry always lands in place.
    ///
    /// ```
    /// use bigsigned::BigSigned;
    ///
    /// let mut x = BigSigned::from(-3);
    /// x.multiply_unsigned(1 << 32);
    /// assert_eq!(x.limbs(), &[0, 3]);
    /// assert_eq!(x.to_i128(), Some(-3 << 32));
    /// ```
    pub fn multiply_unsigned(&mut self, word: u64) {
        if word == 0 {
            self.assign_zero();
            return;
        }
        if self.is_zero() {
            return;
        }

        self.mag.reserve_spare(2);
        let len = self.mag.logical_len();
        let limbs = self.mag.as_mut_slice();
        let mut carry: u64 = 0;
        for xi in limbs[..len].iter_mut() {
            carry = limb::imul_u64(xi, word, carry);
        }
        let [lo, hi] = limb::split_u64(carry);
        limbs[len] = lo;
        limbs[len + 1] = hi;
    }

    // RELATIVE OPERATORS

    /// Three-way comparison of two values.
    ///
    /// Differing signs order by sign; two zeros are equal; otherwise the
    /// magnitudes decide, reversed for negative values.
    pub fn compare(&self, other: &BigSigned) -> Ordering {
        if self.sign != other.sign {
            return self.sign.cmp(&other.sign);
        }
        match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Plus => magnitude::compare(self.mag.as_slice(), other.mag.as_slice()),
            Sign::Minus => magnitude::compare(other.mag.as_slice(), self.mag.as_slice()),
        }
    }

    // PARSING

    /// Build a value from a decimal digit string.
    ///
    /// Accepts an optional leading `+` or `-` followed by one or more ASCII
    /// digits. Digits are consumed nine at a time: each chunk scales the
    /// value by a power of ten and is then added in.
    ///
    /// ```
    /// use bigsigned::BigSigned;
    ///
    /// let x = BigSigned::from_decimal_digits("-18446744073709551616").unwrap();
    /// assert_eq!(x.limbs(), &[0, 0, 1]);
    /// assert!(BigSigned::from_decimal_digits("12a").is_err());
    /// ```
    pub fn from_decimal_digits(digits: &str) -> Result<BigSigned> {
        const OPERATION: &str = "from_decimal_digits";
        // Largest power of ten that fits in a limb is 10^9.
        const STEP: usize = 9;

        let bytes = digits.as_bytes();
        let (negative, offset) = match bytes.first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };
        if bytes.len() == offset {
            return Err(Error::new(ErrorCode::EmptyDigits, OPERATION));
        }

        let mut result = BigSigned::new();
        let mut counter = 0;
        let mut value: Limb = 0;
        for (index, &byte) in bytes.iter().enumerate().skip(offset) {
            let digit = match byte {
                b'0'..=b'9' => (byte - b'0') as Limb,
                _ => return Err(Error::new(ErrorCode::InvalidDigit { index, byte }, OPERATION)),
            };
            if counter == STEP {
                result.iadd_chunk(value, counter);
                counter = 0;
                value = 0;
            }
            value = value * 10 + digit;
            counter += 1;
        }
        result.iadd_chunk(value, counter);

        if negative {
            result.negate();
        }
        Ok(result)
    }

    /// Scale by `10^digits` and add a chunk of that many digits.
    fn iadd_chunk(&mut self, value: Limb, digits: usize) {
        self.multiply_unsigned(10u64.pow(digits as u32));
        self.iadd_signed(Sign::Plus, value as u64);
    }
}

impl Default for BigSigned {
    fn default() -> Self {
        BigSigned::new()
    }
}

impl PartialEq for BigSigned {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigSigned {}

impl PartialOrd for BigSigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigSigned {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Debug for BigSigned {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BigSigned")
            .field("sign", &self.sign)
            .field("limbs", &self.limbs())
            .finish()
    }
}

impl str::FromStr for BigSigned {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigSigned::from_decimal_digits(s)
    }
}

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigSigned {
                #[inline]
                fn from(i: $ty) -> Self {
                    let i = i as i64;
                    BigSigned::from_sign_u64(Sign::of(i), i.unsigned_abs())
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigSigned {
                #[inline]
                fn from(u: $ty) -> Self {
                    BigSigned::from_sign_u64(Sign::Plus, u as u64)
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64);
from_unsigned!(u8 u16 u32 u64);
