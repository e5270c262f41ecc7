//! Checked integer arithmetic primitives
//!
//! Every multiply/add/subtract used on a path that can reach the i64
//! boundary goes through these wrappers, so overflow is reported at the
//! first operation that would wrap rather than after accumulating a
//! garbage intermediate.

use crate::error::{Error, Result};

/// Greatest common divisor of `a` and `b`.
///
/// # Algorithm
/// Binary GCD (Stein's algorithm) - uses only shifts and subtracts.
/// O(log(min(a, b))) operations, no division.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();

    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();

        if a > b {
            std::mem::swap(&mut a, &mut b);
        }

        b -= a;

        if b == 0 {
            break;
        }
    }

    // Restore common factors of 2
    a << shift
}

/// Multiply `a * b`, failing with [`Error::Overflow`] instead of wrapping.
///
/// `op`, `n`, `k` identify the public operation on whose behalf the
/// multiplication runs; they are echoed in the error.
pub fn checked_mul(a: i64, b: i64, op: &'static str, n: i64, k: i64) -> Result<i64> {
    a.checked_mul(b).ok_or(Error::Overflow { op, n, k })
}

/// Add `a + b`, failing with [`Error::Overflow`] instead of wrapping.
pub fn checked_add(a: i64, b: i64, op: &'static str, n: i64, k: i64) -> Result<i64> {
    a.checked_add(b).ok_or(Error::Overflow { op, n, k })
}

/// Subtract `a - b`, failing with [`Error::Overflow`] instead of wrapping.
pub fn checked_sub(a: i64, b: i64, op: &'static str, n: i64, k: i64) -> Result<i64> {
    a.checked_sub(b).ok_or(Error::Overflow { op, n, k })
}
