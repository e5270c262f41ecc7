//! # combr
//!
//! **Exact combinatorics over fixed-width integers with principled
//! overflow detection.**
//!
//! combr computes binomial coefficients, factorials, and Stirling numbers
//! of both kinds as exact i64 values, failing precisely when the true
//! mathematical result does not fit - never after wrapping through a
//! garbage intermediate. Log-domain and double-approximation companions
//! cover the inputs the exact domain cannot.
//!
//! ## Why combr?
//!
//! - **Exact or failed, never wrong**: tiered algorithms pick identities
//!   that keep intermediates representable while the result fits, and
//!   detect overflow at the first operation that would wrap
//! - **Overflow-tolerant companions**: `log_binomial_coefficient` is
//!   finite for every valid input; `factorial_approx` saturates to `+∞`
//!   past the double range instead of erroring
//! - **Pure functions**: no mutable state; lookup tables are built once
//!   and only read afterwards, so unrestricted concurrent use is safe
//!
//! ## Quick Start
//!
//! ```rust
//! use combr::{binomial_coefficient, log_binomial_coefficient, stirling_second_kind};
//!
//! assert_eq!(binomial_coefficient(66, 33), Ok(7219428434016265740));
//! assert!(binomial_coefficient(68, 34).is_err()); // true value > i64::MAX
//! assert!(log_binomial_coefficient(68, 34).unwrap().is_finite());
//! assert_eq!(stirling_second_kind(5, 2), Ok(15));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod arith;
mod binomial;
mod factorial;
mod gamma;
mod stirling;

pub mod error;

pub use crate::binomial::{binomial_coefficient, log_binomial_coefficient};
pub use crate::error::{Error, Result};
pub use crate::factorial::{factorial, factorial_approx};
pub use crate::stirling::{stirling_first_kind, stirling_second_kind};
