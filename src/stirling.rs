//! Stirling numbers of the first and second kind
//!
//! Exact i64 values of `s(n, k)` (signed, first kind) and `S(n, k)`
//! (second kind). Small `n` comes straight from triangular tables built
//! once by the defining recurrences. Past the tables, evaluation
//! dispatches over an ordered set of regimes: closed-form identities for
//! `k` near `0` or near `n`, each guarded by its own analytically derived
//! overflow threshold, and a checked recurrence walk for the interior.
//!
//! Overflow growth depends sharply on where `k` sits relative to
//! `0, 1, n, n-1, n-2`; a single global cutoff on `n` would be either
//! unsafely permissive in the middle region or needlessly conservative at
//! the edges, so each regime carries its own threshold next to its
//! formula.

use std::sync::OnceLock;

use crate::arith::{checked_add, checked_mul, checked_sub};
use crate::binomial::{binomial_coefficient, check_n_k};
use crate::error::{Error, Result};
use crate::factorial::factorial;

// ============================================================================
// Precomputed Tables
// ============================================================================

/// Rows of the first-kind table: `n` in `0..=20`. Row 21 is the first
/// with an entry (`s(21, 3)`) outside the i64 range.
const S1_ROWS: usize = 21;

/// Rows of the second-kind table: `n` in `0..=25`. Row 26 is the first
/// with an entry (`S(26, 9)`) outside the i64 range.
const S2_ROWS: usize = 26;

/// Triangular table of `s(n, k)`, built once by
/// `s(n, k) = s(n-1, k-1) - (n-1) * s(n-1, k)`.
fn s1_table() -> &'static Vec<Vec<i64>> {
    static TABLE: OnceLock<Vec<Vec<i64>>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut rows: Vec<Vec<i64>> = Vec::with_capacity(S1_ROWS);
        rows.push(vec![1]);
        for n in 1..S1_ROWS {
            let prev = &rows[n - 1];
            let mut row = vec![0i64; n + 1];
            for k in 1..=n {
                let above = if k < n { prev[k] } else { 0 };
                row[k] = prev[k - 1] - (n as i64 - 1) * above;
            }
            rows.push(row);
        }
        rows
    })
}

/// Triangular table of `S(n, k)`, built once by
/// `S(n, k) = k * S(n-1, k) + S(n-1, k-1)`.
fn s2_table() -> &'static Vec<Vec<i64>> {
    static TABLE: OnceLock<Vec<Vec<i64>>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut rows: Vec<Vec<i64>> = Vec::with_capacity(S2_ROWS);
        rows.push(vec![1]);
        for n in 1..S2_ROWS {
            let prev = &rows[n - 1];
            let mut row = vec![0i64; n + 1];
            for k in 1..=n {
                let above = if k < n { prev[k] } else { 0 };
                row[k] = k as i64 * above + prev[k - 1];
            }
            rows.push(row);
        }
        rows
    })
}

// ============================================================================
// Overflow Thresholds
// ============================================================================
//
// Each closed form below is exact, so its threshold is simply the largest
// `n` whose true value fits an i64; past it the call must fail. All six
// bounds are verified against exact arithmetic in the tests.

/// `s(n, 1) = ±(n-1)!` fits while `n - 1 <= 20`.
const S1_MAX_K1: i64 = 21;

/// `s(n, n-2) = C(n,3)(3n-1)/4` fits while `n <= 92682`.
const S1_MAX_KNM2: i64 = 92682;

/// `s(n, n-3) = -C(n,2) C(n,4)` fits while `n <= 2761`.
const S1_MAX_KNM3: i64 = 2761;

/// `S(n, 2) = 2^(n-1) - 1` fits while `n <= 64` (`S(64, 2) = i64::MAX`).
const S2_MAX_K2: i64 = 64;

/// `S(n, n-2) = C(n,3)(3n-5)/4` fits while `n <= 92683`.
const S2_MAX_KNM2: i64 = 92683;

/// `S(n, n-3) = C(n,4)(n-2)(n-3)/2` fits while `n <= 2762`.
const S2_MAX_KNM3: i64 = 2762;

// ============================================================================
// Regime Dispatch
// ============================================================================

/// Evaluation regime for an untabulated `(n, k)`.
///
/// Classification is ordered; the first matching regime wins, so each
/// formula's overflow threshold lives next to the formula in the match
/// arms rather than scattered across nested conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Regime {
    /// `n` below the kind's table cutoff.
    Table,
    /// `k == 0`
    KZero,
    /// `k == 1`
    KOne,
    /// `k == 2`
    KTwo,
    /// `k == n`
    KEqualN,
    /// `k == n - 1`
    KNMinus1,
    /// `k == n - 2`
    KNMinus2,
    /// `k == n - 3`
    KNMinus3,
    /// Interior `k`: general recurrence walk.
    Recurrence,
}

fn classify(n: i64, k: i64, rows: usize) -> Regime {
    if n < rows as i64 {
        Regime::Table
    } else if k == 0 {
        Regime::KZero
    } else if k == 1 {
        Regime::KOne
    } else if k == 2 {
        Regime::KTwo
    } else if k == n {
        Regime::KEqualN
    } else if k == n - 1 {
        Regime::KNMinus1
    } else if k == n - 2 {
        Regime::KNMinus2
    } else if k == n - 3 {
        Regime::KNMinus3
    } else {
        Regime::Recurrence
    }
}

/// `⌊a * b / 4⌋` without intermediate overflow, requiring `a * b` to be
/// an exact multiple of 4 (which every caller's identity guarantees).
/// The factor of 4 is divided out of the operands before multiplying, so
/// the product never exceeds the final value.
fn product_over_4(a: i64, b: i64) -> i64 {
    debug_assert_eq!((a % 4) * (b % 4) % 4, 0);
    if a % 4 == 0 {
        (a / 4) * b
    } else if a % 2 == 0 {
        // a ≡ 2 (mod 4) forces b even
        (a / 2) * (b / 2)
    } else {
        // a odd forces b ≡ 0 (mod 4)
        a * (b / 4)
    }
}

// ============================================================================
// First Kind
// ============================================================================

/// Compute the Stirling number of the first kind `s(n, k)` exactly.
///
/// `(-1)^(n-k) s(n, k)` counts the permutations of `n` elements with
/// exactly `k` cycles.
///
/// # Errors
///
/// - [`Error::Negative`] if `n < 0`.
/// - [`Error::OutOfRange`] if `k < 0` or `k > n`.
/// - [`Error::Overflow`] if the true value exceeds the i64 range.
///
/// # Examples
///
/// ```
/// assert_eq!(combr::stirling_first_kind(5, 2), Ok(-50));
/// ```
pub fn stirling_first_kind(n: i64, k: i64) -> Result<i64> {
    const OP: &str = "stirling_first_kind";
    check_n_k(n, k)?;

    match classify(n, k, S1_ROWS) {
        Regime::Table => Ok(s1_table()[n as usize][k as usize]),
        Regime::KZero => Ok(0),
        Regime::KOne => {
            // s(n, 1) = (-1)^(n-1) (n-1)!
            if n > S1_MAX_K1 {
                return Err(Error::Overflow { op: OP, n, k });
            }
            let f = factorial(n - 1)?;
            Ok(if (n - 1) % 2 == 0 { f } else { -f })
        }
        Regime::KEqualN => Ok(1),
        Regime::KNMinus1 => {
            // s(n, n-1) = -C(n, 2)
            let c = binomial_coefficient(n, 2).map_err(|_| Error::Overflow { op: OP, n, k })?;
            Ok(-c)
        }
        Regime::KNMinus2 => {
            // s(n, n-2) = C(n, 3) (3n - 1) / 4
            if n > S1_MAX_KNM2 {
                return Err(Error::Overflow { op: OP, n, k });
            }
            Ok(product_over_4(binomial_coefficient(n, 3)?, 3 * n - 1))
        }
        Regime::KNMinus3 => {
            // s(n, n-3) = -C(n, 2) C(n, 4)
            if n > S1_MAX_KNM3 {
                return Err(Error::Overflow { op: OP, n, k });
            }
            Ok(-binomial_coefficient(n, 2)? * binomial_coefficient(n, 4)?)
        }
        Regime::KTwo | Regime::Recurrence => s1_walk(n, k),
    }
}

/// Recurrence walk for first-kind interior `k` (`2 <= k <= n - 4`).
///
/// Seeds on the diagonal at the nearest point the table or the `k = 1`
/// identity can produce, then advances `n` and `k` in lockstep applying
/// `s(n, k) = s(n-1, k-1) - (n-1) s(n-1, k)` once per step. Every term
/// on the walk shares the target's sign and is bounded by its magnitude,
/// so the first checked operation to overflow proves the true value does
/// not fit.
fn s1_walk(n: i64, k: i64) -> Result<i64> {
    const OP: &str = "stirling_first_kind";
    let reduction = (n - S1_ROWS as i64).min(k - 2) + 1;
    let mut n0 = n - reduction;
    let mut k0 = k - reduction;
    let mut sum = stirling_first_kind(n0, k0)?;
    while n0 < n {
        n0 += 1;
        k0 += 1;
        let t = checked_mul(n0 - 1, stirling_first_kind(n0 - 1, k0)?, OP, n, k)?;
        sum = checked_sub(sum, t, OP, n, k)?;
    }
    Ok(sum)
}

// ============================================================================
// Second Kind
// ============================================================================

/// Compute the Stirling number of the second kind `S(n, k)` exactly.
///
/// `S(n, k)` counts the partitions of an `n`-element set into `k`
/// non-empty subsets.
///
/// # Errors
///
/// - [`Error::Negative`] if `n < 0`.
/// - [`Error::OutOfRange`] if `k < 0` or `k > n`.
/// - [`Error::Overflow`] if the true value exceeds the i64 range.
///
/// # Examples
///
/// ```
/// assert_eq!(combr::stirling_second_kind(5, 2), Ok(15));
/// ```
pub fn stirling_second_kind(n: i64, k: i64) -> Result<i64> {
    const OP: &str = "stirling_second_kind";
    check_n_k(n, k)?;

    match classify(n, k, S2_ROWS) {
        Regime::Table => Ok(s2_table()[n as usize][k as usize]),
        Regime::KZero => Ok(0),
        Regime::KOne => Ok(1),
        Regime::KTwo => {
            // S(n, 2) = 2^(n-1) - 1
            if n > S2_MAX_K2 {
                return Err(Error::Overflow { op: OP, n, k });
            }
            Ok(((1u64 << (n - 1)) - 1) as i64)
        }
        Regime::KEqualN => Ok(1),
        Regime::KNMinus1 => {
            // S(n, n-1) = C(n, 2)
            binomial_coefficient(n, 2).map_err(|_| Error::Overflow { op: OP, n, k })
        }
        Regime::KNMinus2 => {
            // S(n, n-2) = C(n, 3) (3n - 5) / 4
            if n > S2_MAX_KNM2 {
                return Err(Error::Overflow { op: OP, n, k });
            }
            Ok(product_over_4(binomial_coefficient(n, 3)?, 3 * n - 5))
        }
        Regime::KNMinus3 => {
            // S(n, n-3) = C(n, 4) (n - 2)(n - 3) / 2
            if n > S2_MAX_KNM3 {
                return Err(Error::Overflow { op: OP, n, k });
            }
            Ok(binomial_coefficient(n, 4)? * ((n - 2) * (n - 3) / 2))
        }
        Regime::Recurrence => s2_walk(n, k),
    }
}

/// Recurrence walk for second-kind interior `k` (`3 <= k <= n - 4`).
///
/// Mirrors [`s1_walk`] with `S(n, k) = k S(n-1, k) + S(n-1, k-1)` and the
/// `k = 2` identity as the low-`k` seed. All terms are positive, so an
/// overflowing seed or step proves the target does not fit.
fn s2_walk(n: i64, k: i64) -> Result<i64> {
    const OP: &str = "stirling_second_kind";
    let reduction = (n - S2_ROWS as i64).min(k - 3) + 1;
    let mut n0 = n - reduction;
    let mut k0 = k - reduction;
    let mut sum = stirling_second_kind(n0, k0)?;
    while n0 < n {
        n0 += 1;
        k0 += 1;
        let t = checked_mul(k0, stirling_second_kind(n0 - 1, k0)?, OP, n, k)?;
        sum = checked_add(t, sum, OP, n, k)?;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overflow(op: &'static str, n: i64, k: i64) -> Error {
        Error::Overflow { op, n, k }
    }

    #[test]
    fn test_tables_satisfy_recurrences() {
        let s1 = s1_table();
        assert_eq!(s1.len(), S1_ROWS);
        for n in 1..S1_ROWS {
            assert_eq!(s1[n].len(), n + 1);
            for k in 1..=n {
                let above = if k < n { s1[n - 1][k] } else { 0 };
                assert_eq!(s1[n][k], s1[n - 1][k - 1] - (n as i64 - 1) * above);
            }
        }
        let s2 = s2_table();
        assert_eq!(s2.len(), S2_ROWS);
        for n in 1..S2_ROWS {
            for k in 1..=n {
                let above = if k < n { s2[n - 1][k] } else { 0 };
                assert_eq!(s2[n][k], k as i64 * above + s2[n - 1][k - 1]);
            }
        }
    }

    #[test]
    fn test_first_kind_small_values() {
        assert_eq!(stirling_first_kind(0, 0), Ok(1));
        assert_eq!(stirling_first_kind(1, 1), Ok(1));
        assert_eq!(stirling_first_kind(3, 0), Ok(0));
        assert_eq!(stirling_first_kind(5, 2), Ok(-50));
        assert_eq!(stirling_first_kind(9, 5), Ok(22449));
        assert_eq!(stirling_first_kind(10, 4), Ok(723680));
        assert_eq!(stirling_first_kind(20, 1), Ok(-121645100408832000));
    }

    #[test]
    fn test_first_kind_k1_boundary() {
        // s(21, 1) = +20!; s(22, 1) = -21! does not fit
        assert_eq!(stirling_first_kind(21, 1), Ok(2432902008176640000));
        assert_eq!(
            stirling_first_kind(22, 1),
            Err(overflow("stirling_first_kind", 22, 1))
        );
    }

    #[test]
    fn test_first_kind_edge_identities() {
        assert_eq!(stirling_first_kind(40, 40), Ok(1));
        assert_eq!(stirling_first_kind(40, 0), Ok(0));
        // s(n, n-1) = -C(n, 2)
        assert_eq!(stirling_first_kind(100, 99), Ok(-4950));
        assert_eq!(stirling_first_kind(1_000_000, 999_999), Ok(-499999500000));
    }

    #[test]
    fn test_first_kind_knm2_threshold() {
        assert_eq!(
            stirling_first_kind(92682, 92680),
            Ok(9223080114771128550)
        );
        assert_eq!(
            stirling_first_kind(92683, 92681),
            Err(overflow("stirling_first_kind", 92683, 92681))
        );
    }

    #[test]
    fn test_first_kind_knm3_threshold() {
        assert_eq!(
            stirling_first_kind(2761, 2758),
            Ok(-9205676356399769400)
        );
        assert_eq!(
            stirling_first_kind(2762, 2759),
            Err(overflow("stirling_first_kind", 2762, 2759))
        );
    }

    #[test]
    fn test_first_kind_walk() {
        // Interior values past the table, reached by the recurrence walk.
        assert_eq!(stirling_first_kind(21, 2), Ok(-8752948036761600000));
        assert_eq!(stirling_first_kind(25, 20), Ok(-11276842500));
        assert_eq!(stirling_first_kind(30, 26), Ok(1122686019));
    }

    #[test]
    fn test_first_kind_walk_overflow() {
        // s(21, 3) is the first entry of row 21 outside the i64 range.
        assert_eq!(
            stirling_first_kind(21, 3),
            Err(overflow("stirling_first_kind", 21, 3))
        );
        assert_eq!(
            stirling_first_kind(30, 15),
            Err(overflow("stirling_first_kind", 30, 15))
        );
    }

    #[test]
    fn test_second_kind_small_values() {
        assert_eq!(stirling_second_kind(0, 0), Ok(1));
        assert_eq!(stirling_second_kind(4, 0), Ok(0));
        assert_eq!(stirling_second_kind(5, 2), Ok(15));
        assert_eq!(stirling_second_kind(7, 3), Ok(301));
        assert_eq!(stirling_second_kind(10, 5), Ok(42525));
    }

    #[test]
    fn test_second_kind_k1_and_kn() {
        for n in 1..=80 {
            assert_eq!(stirling_second_kind(n, 1), Ok(1));
            assert_eq!(stirling_second_kind(n, n), Ok(1));
        }
    }

    #[test]
    fn test_second_kind_k2_boundary() {
        assert_eq!(stirling_second_kind(30, 2), Ok((1 << 29) - 1));
        // S(64, 2) = 2^63 - 1 = i64::MAX exactly
        assert_eq!(stirling_second_kind(64, 2), Ok(i64::MAX));
        assert_eq!(
            stirling_second_kind(65, 2),
            Err(overflow("stirling_second_kind", 65, 2))
        );
    }

    #[test]
    fn test_second_kind_edge_identities() {
        // S(n, n-1) = C(n, 2)
        assert_eq!(stirling_second_kind(100, 99), Ok(4950));
        assert_eq!(stirling_second_kind(1_000_000, 999_999), Ok(499999500000));
    }

    #[test]
    fn test_second_kind_knm2_threshold() {
        assert_eq!(
            stirling_second_kind(92683, 92681),
            Ok(9223345488487980291)
        );
        assert_eq!(
            stirling_second_kind(92684, 92682),
            Err(overflow("stirling_second_kind", 92684, 92682))
        );
    }

    #[test]
    fn test_second_kind_knm3_threshold() {
        assert_eq!(
            stirling_second_kind(2762, 2759),
            Ok(9212349555946145400)
        );
        assert_eq!(
            stirling_second_kind(2763, 2760),
            Err(overflow("stirling_second_kind", 2763, 2760))
        );
    }

    #[test]
    fn test_second_kind_walk() {
        // First untabulated row, interior k.
        assert_eq!(stirling_second_kind(26, 3), Ok(423610750290));
        assert_eq!(stirling_second_kind(30, 25), Ok(49402080000));
        assert_eq!(stirling_second_kind(33, 28), Ok(143108307496));
    }

    #[test]
    fn test_second_kind_walk_overflow() {
        // S(26, 9) is the first entry of row 26 outside the i64 range.
        assert_eq!(
            stirling_second_kind(26, 9),
            Err(overflow("stirling_second_kind", 26, 9))
        );
        assert_eq!(
            stirling_second_kind(40, 20),
            Err(overflow("stirling_second_kind", 40, 20))
        );
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            stirling_first_kind(-1, 0),
            Err(Error::Negative { arg: "n", value: -1 })
        );
        assert_eq!(
            stirling_second_kind(-2, -2),
            Err(Error::Negative { arg: "n", value: -2 })
        );
        assert_eq!(
            stirling_first_kind(4, 5),
            Err(Error::OutOfRange {
                arg: "k",
                value: 5,
                min: 0,
                max: 4,
            })
        );
        assert_eq!(
            stirling_second_kind(4, -1),
            Err(Error::OutOfRange {
                arg: "k",
                value: -1,
                min: 0,
                max: 4,
            })
        );
    }

    #[test]
    fn test_product_over_4() {
        assert_eq!(product_over_4(8, 5), 10);
        assert_eq!(product_over_4(6, 10), 15);
        assert_eq!(product_over_4(5, 8), 10);
        assert_eq!(product_over_4(3, 4), 3);
        // Near the i64 boundary: no intermediate overflow.
        let a = binomial_coefficient(92682, 3).unwrap();
        assert_eq!(product_over_4(a, 3 * 92682 - 1), 9223080114771128550);
    }
}
