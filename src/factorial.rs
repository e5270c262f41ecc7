//! Exact and approximate factorial lookup
//!
//! Both forms are O(1) table lookups. The exact table stops at 20! (the
//! largest factorial an i64 holds); the double table stops at 170! (the
//! largest factorial a finite f64 holds), beyond which the approximate
//! form saturates to positive infinity.

use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Exact factorials 0!..20!. 21! exceeds `i64::MAX`.
const FACTORIALS: [i64; 21] = [
    1,
    1,
    2,
    6,
    24,
    120,
    720,
    5040,
    40320,
    362880,
    3628800,
    39916800,
    479001600,
    6227020800,
    87178291200,
    1307674368000,
    20922789888000,
    355687428096000,
    6402373705728000,
    121645100408832000,
    2432902008176640000,
];

/// Largest `n` with an exact i64 factorial.
const MAX_EXACT: i64 = 20;

/// Largest `n` with a finite f64 factorial; 171! > `f64::MAX`.
const MAX_DOUBLE: i64 = 170;

/// Double approximations of 0!..170!, built once on first use.
fn factorials_f64() -> &'static [f64; 171] {
    static TABLE: OnceLock<[f64; 171]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [1.0; 171];
        for n in 1..table.len() {
            table[n] = table[n - 1] * n as f64;
        }
        table
    })
}

/// Compute `n!` exactly.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `n < 0` or `n > 20` (21! does not fit an i64).
///
/// # Examples
///
/// ```
/// assert_eq!(combr::factorial(20), Ok(2432902008176640000));
/// ```
pub fn factorial(n: i64) -> Result<i64> {
    if !(0..=MAX_EXACT).contains(&n) {
        return Err(Error::OutOfRange {
            arg: "n",
            value: n,
            min: 0,
            max: MAX_EXACT,
        });
    }
    Ok(FACTORIALS[n as usize])
}

/// Compute `n!` as a double approximation.
///
/// Returns positive infinity for `n > 170`: saturation is the meaningful
/// answer there, not an error condition.
///
/// # Errors
///
/// [`Error::Negative`] if `n < 0`.
pub fn factorial_approx(n: i64) -> Result<f64> {
    if n < 0 {
        return Err(Error::Negative { arg: "n", value: n });
    }
    if n > MAX_DOUBLE {
        return Ok(f64::INFINITY);
    }
    Ok(factorials_f64()[n as usize])
}
