#![allow(clippy::cast_lossless)]

use bigsigned::{BigSigned, Sign};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::cmp::Ordering;

fn from_words(words: &[i64]) -> BigSigned {
    let mut x = BigSigned::new();
    for &w in words {
        x.add_unsigned(w as u64);
    }
    x
}

/// Large values: the seed scaled past 128 bits, then offset.
fn wide(seed: i64, scale: u64, offset: i64) -> BigSigned {
    let mut x = BigSigned::from(seed);
    x.multiply_unsigned(scale);
    x.multiply_unsigned(scale);
    x.multiply_unsigned(scale);
    x.add_unsigned(offset as u64);
    x
}

#[test]
fn test_add_sequence() {
    let mut x = BigSigned::new();
    x.add_unsigned(u64::MAX >> 1);
    x.add_unsigned(u64::MAX >> 1);
    x.add_unsigned(2);
    assert_eq!(x.limbs(), &[0, 0, 1]);
    assert_eq!(x.sign(), Sign::Plus);
}

#[test]
fn test_growth_keeps_headroom() {
    let mut x = BigSigned::from(1);
    let mut grown = 0;
    for _ in 0..40 {
        let (capacity, len) = (x.capacity(), x.len());
        x.multiply_unsigned(u32::MAX as u64);
        if x.capacity() != capacity {
            grown += 1;
            assert!(x.capacity() >= len + 2, "{:?}", x);
        }
        assert!(x.capacity() >= x.len());
        x.add_unsigned(i64::MAX as u64);
        assert!(x.capacity() >= 16);
    }
    assert!(grown > 0);
}

#[test]
fn test_shrink() {
    let mut x = BigSigned::from(1);
    assert!(!x.shrink());
    assert_eq!(x.capacity(), 16);

    // Small transient values never trigger a reallocation.
    x.multiply_unsigned(u64::MAX);
    x.multiply_unsigned(u64::MAX);
    assert!(!x.shrink());
    assert!(x.capacity() >= 16);
}

#[test]
fn test_from_str() {
    let x: BigSigned = "-79228162514264337593543950336".parse().unwrap();
    assert_eq!(x.sign(), Sign::Minus);
    assert_eq!(x.limbs(), &[0, 0, 0, 1]);

    let err = "1_000".parse::<BigSigned>().unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.operation(), "from_decimal_digits");
}

#[quickcheck]
fn prop_add_matches_i128(seed: i64, words: Vec<i64>) -> TestResult {
    if words.len() > 64 {
        return TestResult::discard();
    }
    let mut x = BigSigned::from(seed);
    let mut expected = seed as i128;
    for &w in &words {
        x.add_unsigned(w as u64);
        expected += w as i128;
    }
    TestResult::from_bool(x.to_i128() == Some(expected))
}

#[quickcheck]
fn prop_subtract_matches_i128(seed: i64, words: Vec<i64>) -> TestResult {
    if words.len() > 64 {
        return TestResult::discard();
    }
    let mut x = BigSigned::from(seed);
    let mut expected = seed as i128;
    for &w in &words {
        x.subtract_unsigned(w as u64);
        expected -= w as i128;
    }
    TestResult::from_bool(x.to_i128() == Some(expected))
}

#[quickcheck]
fn prop_multiply_matches_i128(seed: i64, words: Vec<u64>) -> TestResult {
    let mut x = BigSigned::from(seed);
    let mut expected = seed as i128;
    for &w in &words {
        expected = match expected.checked_mul(w as i128) {
            Some(product) => product,
            None => return TestResult::discard(),
        };
        x.multiply_unsigned(w);
    }
    if x.to_i128() != Some(expected) {
        return TestResult::error(format!("{:?} does not match {}", x, expected));
    }
    TestResult::passed()
}

#[quickcheck]
fn prop_add_commutes(a: i64, b: i64, words: Vec<i64>) -> bool {
    let mut x = from_words(&words);
    let mut y = x.clone();
    x.add_unsigned(a as u64);
    x.add_unsigned(b as u64);
    y.add_unsigned(b as u64);
    y.add_unsigned(a as u64);
    x == y
}

#[quickcheck]
fn prop_add_then_subtract_is_identity(seed: i64, scale: u64, offset: i64, a: i64) -> bool {
    let x = wide(seed, scale, offset);
    let mut y = x.clone();
    y.add_unsigned(a as u64);
    y.subtract_unsigned(a as u64);
    y == x && y.sign() == x.sign() && y.limbs() == x.limbs()
}

#[quickcheck]
fn prop_subtract_then_add_is_identity(seed: i64, scale: u64, offset: i64, a: i64) -> bool {
    let x = wide(seed, scale, offset);
    let mut y = x.clone();
    y.subtract_unsigned(a as u64);
    y.add_unsigned(a as u64);
    y == x
}

#[quickcheck]
fn prop_multiply_identity(seed: i64, scale: u64, offset: i64) -> bool {
    let x = wide(seed, scale, offset);
    let mut y = x.clone();
    y.multiply_unsigned(1);
    let mut z = x.clone();
    z.multiply_unsigned(0);
    y == x && z.is_zero() && z.sign() == Sign::Zero && z.limbs().is_empty()
}

#[quickcheck]
fn prop_sign_tracks_magnitude(seed: i64, scale: u64, offset: i64, words: Vec<i64>) -> bool {
    let mut x = wide(seed, scale, offset);
    for &w in &words {
        x.subtract_unsigned(w as u64);
        if x.is_zero() != x.limbs().is_empty() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn prop_compare_matches_i128(a: i64, b: i64, m: u64, n: u64) -> bool {
    let mut x = BigSigned::from(a);
    x.multiply_unsigned(m);
    let mut y = BigSigned::from(b);
    y.multiply_unsigned(n);
    let expected = (a as i128 * m as i128).cmp(&(b as i128 * n as i128));
    x.compare(&y) == expected
}

#[quickcheck]
fn prop_compare_antisymmetric(a: (i64, u64, i64), b: (i64, u64, i64)) -> bool {
    let x = wide(a.0, a.1, a.2);
    let y = wide(b.0, b.1, b.2);
    x.compare(&x) == Ordering::Equal && x.compare(&y) == y.compare(&x).reverse()
}

#[quickcheck]
fn prop_compare_transitive(a: (i64, u64, i64), b: (i64, u64, i64), c: (i64, u64, i64)) -> bool {
    let mut values = [wide(a.0, a.1, a.2), wide(b.0, b.1, b.2), wide(c.0, c.1, c.2)];
    values.sort();
    values[0] <= values[1] && values[1] <= values[2] && values[0] <= values[2]
}

#[quickcheck]
fn prop_decimal_digits_match_i128(x: i64, y: u64) -> bool {
    let expected = x as i128 * y as i128;
    let parsed = BigSigned::from_decimal_digits(&expected.to_string()).unwrap();
    parsed.to_i128() == Some(expected)
        && parsed.sign().signum() as i128 == expected.signum()
        && parsed.is_zero() == parsed.limbs().is_empty()
}

#[test]
fn test_zero_digits_are_zero() {
    for digits in ["0", "-0", "+0", "000", "0000000000"] {
        let x = BigSigned::from_decimal_digits(digits).unwrap();
        assert_eq!(x.sign(), Sign::Zero, "{}", digits);
        assert!(x.is_zero());
        assert_eq!(x.cmp(&BigSigned::new()), Ordering::Equal);
    }
}
