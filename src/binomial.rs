//! Exact and log-domain binomial coefficients
//!
//! `binomial_coefficient` computes `C(n, k)` exactly in an i64, selecting
//! one of three iteration strategies by `n` so that intermediates never
//! wrap while the true value is still representable.
//! `log_binomial_coefficient` is the overflow-tolerant counterpart: it
//! stays finite for every valid `(n, k)` by escalating from the exact
//! value through a double accumulation to a log-beta identity.

use crate::arith::{checked_mul, gcd};
use crate::error::{Error, Result};
use crate::gamma::lbeta;

/// Largest `n` for which the naive `result * i / j` iteration cannot wrap:
/// the intermediate before each division equals `C(n - m + j, j) * j`,
/// bounded by `C(61, 30) * 30` which still fits an i64 (`C(62, 31) * 31`
/// does not).
const MAX_NAIVE_N: i64 = 61;

/// Largest `n` for which `C(n, k)` fits an i64 for every `k`.
/// `C(66, 33) = 7219428434016265740` fits; `C(67, 33)` does not.
const MAX_EXACT_N: i64 = 66;

/// Upfront rejection bound for `n > 66`: `C(68, 34)` already exceeds
/// `2^63`, so `min(k, n - k) > 33` can never produce a representable value.
const MAX_HALF_K: i64 = 33;

/// Largest `n` for which the double accumulation stays finite for every
/// `k`: `C(1029, 514)` approaches `f64::MAX`.
const MAX_DOUBLE_N: i64 = 1029;

/// For `min(k, n - k)` at most this, the double accumulation stays finite
/// for any `n`, because the partial products are bounded by `C(n, 37)`
/// which is far below `f64::MAX` for every representable `n`.
const MAX_DOUBLE_HALF_K: i64 = 37;

/// Validate `n >= 0` and `0 <= k <= n`.
pub(crate) fn check_n_k(n: i64, k: i64) -> Result<()> {
    if n < 0 {
        return Err(Error::Negative { arg: "n", value: n });
    }
    if k < 0 || k > n {
        return Err(Error::OutOfRange {
            arg: "k",
            value: k,
            min: 0,
            max: n,
        });
    }
    Ok(())
}

/// Compute `C(n, k)` exactly.
///
/// Selects by `n`:
///
/// 1. `n <= 61`: naive `result = result * i / j` iteration; provably free
///    of intermediate overflow because every value before a division is
///    `C(n - m + j, j) * j`, bounded in this range.
/// 2. `61 < n <= 66`: the same iteration with each step split by
///    `gcd(i, j)` so intermediates stay in range even though the final
///    value still fits.
/// 3. `n > 66`: the gcd-split iteration with every multiplication
///    overflow-checked; the first overflowing step aborts the call.
///
/// # Errors
///
/// - [`Error::Negative`] if `n < 0`.
/// - [`Error::OutOfRange`] if `k < 0` or `k > n`.
/// - [`Error::Overflow`] if the true value exceeds `i64::MAX`.
///
/// # Examples
///
/// ```
/// assert_eq!(combr::binomial_coefficient(5, 2), Ok(10));
/// assert_eq!(combr::binomial_coefficient(66, 33), Ok(7219428434016265740));
/// ```
pub fn binomial_coefficient(n: i64, k: i64) -> Result<i64> {
    check_n_k(n, k)?;

    let m = k.min(n - k);
    if m == 0 {
        return Ok(1);
    }
    if m == 1 {
        return Ok(n);
    }

    let mut result: i64 = 1;
    if n <= MAX_NAIVE_N {
        let mut i = n - m + 1;
        for j in 1..=m {
            result = result * i / j;
            i += 1;
        }
    } else if n <= MAX_EXACT_N {
        let mut i = n - m + 1;
        for j in 1..=m {
            let d = gcd(i, j);
            // Exact: result is C(i - 1, j - 1) and divisible by j / d.
            result = (result / (j / d)) * (i / d);
            i += 1;
        }
    } else {
        if m > MAX_HALF_K {
            return Err(Error::Overflow {
                op: "binomial_coefficient",
                n,
                k,
            });
        }
        let mut i = n - m + 1;
        for j in 1..=m {
            let d = gcd(i, j);
            result = checked_mul(result / (j / d), i / d, "binomial_coefficient", n, k)?;
            i += 1;
        }
    }
    Ok(result)
}

/// Compute `C(n, k)` as a double accumulation `∏ (n - m + j) / j`.
///
/// Not exact, but free of spurious infinities within the regimes that
/// call it: every partial product is itself a binomial coefficient
/// bounded by the final value.
///
/// Preconditions are the caller's responsibility.
pub(crate) fn binomial_coefficient_double(n: i64, k: i64) -> f64 {
    let m = k.min(n - k);
    if m == 0 {
        return 1.0;
    }
    if m == 1 {
        return n as f64;
    }

    let mut result = 1.0;
    for j in 1..=m {
        result *= (n - m + j) as f64 / j as f64;
    }
    result
}

/// Compute `ln C(n, k)` as a finite double.
///
/// The overflow-tolerant counterpart of [`binomial_coefficient`]: valid
/// arguments never fail, even where the exact value exceeds every
/// fixed-width integer. Tiered by `(n, m)` with `m = min(k, n - k)`:
///
/// - `m = 0` → `0`; `m = 1` → `ln n`.
/// - `n <= 66` → log of the exact value (guaranteed representable).
/// - `n <= 1029` or `m <= 37` → log of the double accumulation.
/// - otherwise → `C(n, k) = 1 / (m · B(m, n - m + 1))`, so the result is
///   `-ln m - ln B(m, n - m + 1)` via the log-beta collaborator.
///
/// # Errors
///
/// - [`Error::Negative`] if `n < 0`.
/// - [`Error::OutOfRange`] if `k < 0` or `k > n`.
pub fn log_binomial_coefficient(n: i64, k: i64) -> Result<f64> {
    check_n_k(n, k)?;

    let m = k.min(n - k);
    if m == 0 {
        return Ok(0.0);
    }
    if m == 1 {
        return Ok((n as f64).ln());
    }

    if n <= MAX_EXACT_N {
        // Tier 1/2 of the exact algorithm cannot overflow here.
        let exact = binomial_coefficient(n, k)?;
        return Ok((exact as f64).ln());
    }
    if n <= MAX_DOUBLE_N || m <= MAX_DOUBLE_HALF_K {
        return Ok(binomial_coefficient_double(n, k).ln());
    }
    Ok(-((m as f64).ln()) - lbeta(m as f64, (n - m + 1) as f64))
}
