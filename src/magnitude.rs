//! Building-blocks for multi-limb arithmetic on caller-owned buffers.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for `[0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Operands are [`Window`]s: borrowed, bounds-checked views of a contiguous
//! run of limbs inside a larger array. Results go to a caller-supplied buffer
//! starting at a destination offset. Nothing here allocates, and every
//! precondition is checked before the first result limb is written, so a
//! failed call leaves `result` untouched.

use crate::error::{Error, ErrorCode, Result};
use crate::lib::Ordering;
use crate::limb::{self, Limb};

// WINDOW
// ------

/// Borrowed view of the limbs `array[start..=end]` of a magnitude.
///
/// The window is little-endian like the array it views: its first limb is
/// the least significant. An empty window, only obtainable through
/// [`Window::full`] on an empty array, represents zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window<'a> {
    array: &'a [Limb],
    start: usize,
    len: usize,
}

impl<'a> Window<'a> {
    /// View the inclusive limb range `start..=end` of `array`.
    ///
    /// ```
    /// use bigsigned::{ErrorCode, Window};
    ///
    /// let limbs = [1, 2, 3, 4];
    /// let window = Window::new(&limbs, 1, 2).unwrap();
    /// assert_eq!(window.limbs(), &[2, 3]);
    ///
    /// let err = Window::new(&limbs, 2, 4).unwrap_err();
    /// assert_eq!(*err.code(), ErrorCode::WindowOutOfBounds { end: 4, len: 4 });
    /// ```
    pub fn new(array: &'a [Limb], start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::new(
                ErrorCode::WindowStartAfterEnd { start, end },
                "Window::new",
            ));
        }
        if end >= array.len() {
            return Err(Error::new(
                ErrorCode::WindowOutOfBounds {
                    end,
                    len: array.len(),
                },
                "Window::new",
            ));
        }
        Ok(Window {
            array,
            start,
            len: end - start + 1,
        })
    }

    /// View all of `array`.
    #[inline]
    pub fn full(array: &'a [Limb]) -> Self {
        Window {
            array,
            start: 0,
            len: array.len(),
        }
    }

    /// Index into the backing array of the window's least-significant limb.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of limbs in the window, including high zero limbs.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the window holds no limbs at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The viewed limbs.
    #[inline]
    pub fn limbs(&self) -> &'a [Limb] {
        &self.array[self.start..self.start + self.len]
    }

    /// The viewed limbs up to and including the most-significant nonzero one.
    #[inline]
    fn significant(&self) -> &'a [Limb] {
        let limbs = self.limbs();
        match most_significant_nonzero(limbs) {
            Some(index) => &limbs[..=index],
            None => &[],
        }
    }
}

// PRECONDITIONS
// -------------

#[inline]
fn check_result_len(required: usize, result: &[Limb], operation: &'static str) -> Result<()> {
    if result.len() < required {
        return Err(Error::new(
            ErrorCode::ResultTooSmall {
                required,
                len: result.len(),
            },
            operation,
        ));
    }
    Ok(())
}

// MULTIPLICATION

/// Grade-school multiplication of two windows.
///
/// Zero-fills all of `result`, then writes the product of `lhs` and `rhs`
/// to `result[result_start..result_start + lhs.len() + rhs.len()]`. Each
/// outer iteration multiplies every limb of `lhs` by one limb of `rhs`,
/// accumulating into the partial product and rippling the carry; the carry
/// left after the inner loop lands one limb past its span.
///
/// Fails with [`ErrorCode::ResultTooSmall`] if `result` cannot hold
/// `result_start + lhs.len() + rhs.len()` limbs.
pub fn multiply_ranges(
    lhs: Window,
    rhs: Window,
    result: &mut [Limb],
    result_start: usize,
) -> Result<()> {
    let required = result_start
        .saturating_add(lhs.len())
        .saturating_add(rhs.len());
    check_result_len(required, result, "multiply_ranges")?;

    for limb in result.iter_mut() {
        *limb = 0;
    }

    let x = lhs.limbs();
    let out = &mut result[result_start..required];
    for (i, &yi) in rhs.limbs().iter().enumerate() {
        let mut carry: Limb = 0;
        for (j, &xj) in x.iter().enumerate() {
            let (lo, hi) = limb::mul_add(xj, yi, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + x.len()] = carry;
    }
    Ok(())
}

/// Multiply two whole arrays, writing the product at `result_start`.
///
/// See [`multiply_ranges`].
#[inline]
pub fn multiply(lhs: &[Limb], rhs: &[Limb], result: &mut [Limb], result_start: usize) -> Result<()> {
    multiply_ranges(Window::full(lhs), Window::full(rhs), result, result_start)
}

// ADDITION

/// Add two windows limb by limb, rippling the carry.
///
/// The shorter window is treated as zero-extended to the length of the
/// longer one. Writes `max(lhs.len(), rhs.len()) + 1` limbs starting at
/// `result[result_start]`; the last of them is the final carry, which may be
/// zero. Limbs of `result` outside that span are left untouched.
///
/// Fails with [`ErrorCode::ResultTooSmall`] if the span does not fit.
pub fn add_ranges(lhs: Window, rhs: Window, result: &mut [Limb], result_start: usize) -> Result<()> {
    let len = lhs.len().max(rhs.len());
    let required = result_start.saturating_add(len).saturating_add(1);
    check_result_len(required, result, "add_ranges")?;

    let (x, y) = (lhs.limbs(), rhs.limbs());
    let out = &mut result[result_start..required];
    let mut carry: Limb = 0;
    for (i, zi) in out[..len].iter_mut().enumerate() {
        let xi = x.get(i).copied().unwrap_or(0);
        let yi = y.get(i).copied().unwrap_or(0);
        let (lo, next) = limb::add(xi, yi, carry);
        *zi = lo;
        carry = next;
    }
    out[len] = carry;
    Ok(())
}

/// Add two whole arrays, writing the sum at `result_start`.
///
/// See [`add_ranges`].
#[inline]
pub fn add(lhs: &[Limb], rhs: &[Limb], result: &mut [Limb], result_start: usize) -> Result<()> {
    add_ranges(Window::full(lhs), Window::full(rhs), result, result_start)
}

// SUBTRACTION

/// Subtract `subtrahend` from `minuend` limb by limb, rippling the borrow.
///
/// Writes `minuend.len()` limbs starting at `result[result_start]`, with the
/// subtrahend treated as zero-extended. Limbs of `result` outside that span
/// are left untouched.
///
/// Fails with [`ErrorCode::SubtrahendTooLarge`] if the subtrahend's magnitude
/// exceeds the minuend's, and with [`ErrorCode::ResultTooSmall`] if the span
/// does not fit.
pub fn subtract_ranges(
    minuend: Window,
    subtrahend: Window,
    result: &mut [Limb],
    result_start: usize,
) -> Result<()> {
    if compare_ranges(minuend, subtrahend) == Ordering::Less {
        return Err(Error::new(ErrorCode::SubtrahendTooLarge, "subtract_ranges"));
    }
    let len = minuend.len();
    let required = result_start.saturating_add(len);
    check_result_len(required, result, "subtract_ranges")?;

    let (x, y) = (minuend.limbs(), subtrahend.limbs());
    let out = &mut result[result_start..required];
    let mut borrow: Limb = 0;
    for (i, zi) in out.iter_mut().enumerate() {
        let yi = y.get(i).copied().unwrap_or(0);
        let (lo, next) = limb::sub(x[i], yi, borrow);
        *zi = lo;
        borrow = next;
    }
    // The ordering check rules out a borrow past the top limb.
    debug_assert_eq!(borrow, 0);
    Ok(())
}

/// Subtract two whole arrays, writing the difference at `result_start`.
///
/// See [`subtract_ranges`].
#[inline]
pub fn subtract(
    minuend: &[Limb],
    subtrahend: &[Limb],
    result: &mut [Limb],
    result_start: usize,
) -> Result<()> {
    subtract_ranges(Window::full(minuend), Window::full(subtrahend), result, result_start)
}

// RELATIVE OPERATORS

/// Compare the magnitudes viewed by two windows.
///
/// High zero limbs are ignored: the window with more significant limbs is
/// larger, and windows of equal significant length are compared from the
/// most-significant limb down.
pub fn compare_ranges(lhs: Window, rhs: Window) -> Ordering {
    let x = lhs.significant();
    let y = rhs.significant();
    if x.len() > y.len() {
        return Ordering::Greater;
    } else if x.len() < y.len() {
        return Ordering::Less;
    }
    for (&xi, &yi) in x.iter().rev().zip(y.iter().rev()) {
        if xi > yi {
            return Ordering::Greater;
        } else if xi < yi {
            return Ordering::Less;
        }
    }
    Ordering::Equal
}

/// Compare the magnitudes held by two whole arrays.
#[inline]
pub fn compare(lhs: &[Limb], rhs: &[Limb]) -> Ordering {
    compare_ranges(Window::full(lhs), Window::full(rhs))
}

// BIT LENGTH

/// Index into the backing array of the window's most-significant nonzero
/// limb, or `None` if every limb in the window is zero.
#[inline]
pub fn most_significant_nonzero_range(window: Window) -> Option<usize> {
    most_significant_nonzero(window.limbs()).map(|index| window.start() + index)
}

/// Index of the most-significant nonzero limb, or `None` if every limb is
/// zero.
#[inline]
pub fn most_significant_nonzero(limbs: &[Limb]) -> Option<usize> {
    limbs.iter().rposition(|&x| x != 0)
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::Vec;
    use alloc::vec;

    #[test]
    fn window_test() {
        let limbs = [1, 2, 3, 4];
        let window = Window::new(&limbs, 1, 2).unwrap();
        assert_eq!(window.start(), 1);
        assert_eq!(window.len(), 2);
        assert_eq!(window.limbs(), &[2, 3]);

        let window = Window::new(&limbs, 3, 3).unwrap();
        assert_eq!(window.limbs(), &[4]);

        let window = Window::full(&[]);
        assert!(window.is_empty());
        assert_eq!(window.limbs(), &[] as &[Limb]);
    }

    #[test]
    fn window_error_test() {
        let limbs = [1, 2, 3, 4];
        let err = Window::new(&limbs, 3, 1).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::WindowStartAfterEnd { start: 3, end: 1 });

        let err = Window::new(&limbs, 0, 4).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::WindowOutOfBounds { end: 4, len: 4 });

        let err = Window::new(&[], 0, 0).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::WindowOutOfBounds { end: 0, len: 0 });
    }

    #[test]
    fn most_significant_nonzero_test() {
        assert_eq!(most_significant_nonzero(&[]), None);
        assert_eq!(most_significant_nonzero(&[0, 0, 0]), None);
        assert_eq!(most_significant_nonzero(&[1, 0, 0]), Some(0));
        assert_eq!(most_significant_nonzero(&[1, 0, 9, 0]), Some(2));

        // Reported as an index into the backing array.
        let limbs = [7, 0, 5, 0, 0, 8];
        let window = Window::new(&limbs, 1, 4).unwrap();
        assert_eq!(most_significant_nonzero_range(window), Some(2));
        let window = Window::new(&limbs, 3, 4).unwrap();
        assert_eq!(most_significant_nonzero_range(window), None);
    }

    #[test]
    fn compare_test() {
        // Simple
        assert_eq!(compare(&[1], &[2]), Ordering::Less);
        assert_eq!(compare(&[2], &[2]), Ordering::Equal);
        assert_eq!(compare(&[2], &[1]), Ordering::Greater);

        // Check asymmetric
        assert_eq!(compare(&[5, 1], &[2]), Ordering::Greater);
        assert_eq!(compare(&[2], &[5, 1]), Ordering::Less);

        // Check when we use reverse ordering properly.
        assert_eq!(compare(&[5, 1, 9], &[6, 2, 8]), Ordering::Greater);
        assert_eq!(compare(&[0, 1, 9], &[4294967295, 0, 9]), Ordering::Greater);

        // High zero limbs do not count towards the length.
        assert_eq!(compare(&[5, 0, 0, 0], &[5]), Ordering::Equal);
        assert_eq!(compare(&[0, 0], &[]), Ordering::Equal);
        assert_eq!(compare(&[4, 0, 0], &[0, 1]), Ordering::Less);
    }

    #[test]
    fn compare_ranges_test() {
        let x = [9, 3, 4, 0, 9];
        let y = [4, 3, 1];
        // [3, 4, 0] vs [3, 1]
        let lhs = Window::new(&x, 1, 3).unwrap();
        let rhs = Window::new(&y, 1, 2).unwrap();
        assert_eq!(compare_ranges(lhs, rhs), Ordering::Greater);
        assert_eq!(compare_ranges(rhs, lhs), Ordering::Less);
        assert_eq!(compare_ranges(lhs, lhs), Ordering::Equal);
    }

    #[test]
    fn multiply_test() {
        let mut result = [0; 2];
        multiply(&[3], &[4], &mut result, 0).unwrap();
        assert_eq!(result, [12, 0]);

        // Overflow, 1 carry.
        let mut result = [0; 2];
        multiply(&[0x33333334], &[5], &mut result, 0).unwrap();
        assert_eq!(result, [4, 1]);

        // (2^64 - 1)^2 == 2^128 - 2^65 + 1
        let mut result = [0; 4];
        multiply(&[u32::MAX, u32::MAX], &[u32::MAX, u32::MAX], &mut result, 0).unwrap();
        assert_eq!(result, [1, 0, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn multiply_ranges_test() {
        // [2, 1] * [3] == 2^32 * 3 + 6, written one limb up.
        let x = [7, 2, 1, 7];
        let y = [3, 9];
        let lhs = Window::new(&x, 1, 2).unwrap();
        let rhs = Window::new(&y, 0, 0).unwrap();
        let mut result = vec![0xAAAA; 5];
        multiply_ranges(lhs, rhs, &mut result, 1).unwrap();
        assert_eq!(result, vec![0, 6, 3, 0, 0]);
    }

    #[test]
    fn multiply_empty_test() {
        let mut result = [5; 3];
        multiply(&[], &[1, 2], &mut result, 0).unwrap();
        assert_eq!(result, [0; 3]);
    }

    #[test]
    fn multiply_result_too_small_test() {
        let mut result = [0xAAAA; 3];
        let err = multiply(&[1, 2], &[3, 4], &mut result, 0).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::ResultTooSmall { required: 4, len: 3 });
        assert_eq!(err.operation(), "multiply_ranges");
        // All-or-nothing: nothing was cleared.
        assert_eq!(result, [0xAAAA; 3]);

        let mut result = [0; 4];
        let err = multiply(&[1, 2], &[3, 4], &mut result, 1).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::ResultTooSmall { required: 5, len: 4 });
    }

    #[test]
    fn add_test() {
        let mut result = [0; 2];
        add(&[u32::MAX], &[1], &mut result, 0).unwrap();
        assert_eq!(result, [0, 1]);

        // Carry ripples through the longer operand.
        let mut result = [0; 4];
        add(&[u32::MAX, u32::MAX, 7], &[1], &mut result, 0).unwrap();
        assert_eq!(result, [0, 0, 8, 0]);

        // Shorter operand first.
        let mut result = [0; 3];
        add(&[5], &[6, 1], &mut result, 0).unwrap();
        assert_eq!(result, [11, 1, 0]);
    }

    #[test]
    fn add_ranges_test() {
        let x = [0, u32::MAX, u32::MAX];
        let y = [1, 1];
        let lhs = Window::new(&x, 1, 2).unwrap();
        let rhs = Window::new(&y, 1, 1).unwrap();
        let mut result = [9; 5];
        add_ranges(lhs, rhs, &mut result, 2).unwrap();
        assert_eq!(result, [9, 9, 0, 0, 1]);

        let err = add_ranges(lhs, rhs, &mut result, 3).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::ResultTooSmall { required: 6, len: 5 });
    }

    #[test]
    fn subtract_test() {
        let mut result = [0; 2];
        subtract(&[0, 1], &[1], &mut result, 0).unwrap();
        assert_eq!(result, [u32::MAX, 0]);

        // Borrow ripples across several limbs.
        let mut result = [0; 3];
        subtract(&[0, 0, 1], &[1], &mut result, 0).unwrap();
        assert_eq!(result, [u32::MAX, u32::MAX, 0]);

        // Subtrahend with high zero limbs past the minuend.
        let mut result = [0; 1];
        subtract(&[9], &[4, 0, 0], &mut result, 0).unwrap();
        assert_eq!(result, [5]);

        let mut result = [0; 2];
        subtract(&[3, 7], &[3, 7], &mut result, 0).unwrap();
        assert_eq!(result, [0, 0]);
    }

    #[test]
    fn subtract_error_test() {
        let mut result = [0xAAAA; 2];
        let err = subtract(&[1], &[0, 1], &mut result, 0).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::SubtrahendTooLarge);
        assert_eq!(result, [0xAAAA; 2]);

        let err = subtract(&[1, 1], &[1], &mut result, 1).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::ResultTooSmall { required: 3, len: 2 });
    }

    #[test]
    fn multiply_matches_repeated_add_test() {
        // x * 3 == x + x + x
        let x = [u32::MAX, 0x8000_0000, 5];
        let mut product = [0; 4];
        multiply(&x, &[3], &mut product, 0).unwrap();

        let mut twice = [0; 4];
        add(&x, &x, &mut twice, 0).unwrap();
        let mut thrice = [0; 5];
        add(&twice, &x, &mut thrice, 0).unwrap();
        assert_eq!(compare(&product, &thrice), Ordering::Equal);

        let expected: Vec<Limb> = vec![u32::MAX - 2, 0x8000_0002, 16, 0];
        assert_eq!(&product[..], &expected[..]);
    }
}
