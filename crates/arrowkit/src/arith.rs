//! Arithmetic helpers.
//!
//! `add`, `subtract`, `multiply` and `square` are generic over the `std::ops`
//! traits so they work on every numeric primitive. Operations that can
//! produce fractions or fail (`divide`, `power`) work on `f64`.

use std::fmt;
use std::ops::{Add, Mul, Rem, Sub};

use serde::{Deserialize, Serialize};

use crate::UtilError;

/// Exponent used by [`power`] when none is given.
pub const DEFAULT_EXPONENT: i32 = 2;

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

pub fn subtract<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// Divides `a` by `b`.
///
/// # Errors
///
/// Returns [`UtilError::DivisionByZero`] when `b` is zero (either sign),
/// instead of producing an infinity or NaN.
///
/// # Examples
///
/// ```
/// use arrowkit::{divide, UtilError};
///
/// assert_eq!(divide(8.0, 2.0), Ok(4.0));
/// assert_eq!(divide(8.0, 0.0), Err(UtilError::DivisionByZero { dividend: 8.0 }));
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64, UtilError> {
    if b == 0.0 {
        tracing::debug!(dividend = a, "rejected division by zero");
        return Err(UtilError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

pub fn square<T: Mul<Output = T> + Copy>(n: T) -> T {
    n * n
}

/// Raises `base` to `exponent`, defaulting to [`DEFAULT_EXPONENT`].
///
/// ```
/// use arrowkit::power;
///
/// assert_eq!(power(3.0, Some(4)), 81.0);
/// assert_eq!(power(5.0, None), 25.0);
/// ```
pub fn power(base: f64, exponent: Option<i32>) -> f64 {
    base.powi(exponent.unwrap_or(DEFAULT_EXPONENT))
}

/// Returns a function that multiplies its argument by `m`.
///
/// ```
/// use arrowkit::multiplier;
///
/// let double = multiplier(2);
/// assert_eq!(double(10), 20);
/// ```
pub fn multiplier<T>(m: T) -> impl Fn(T) -> T
where
    T: Mul<Output = T> + Copy,
{
    move |n| n * m
}

/// Whether an integer is even or odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
        }
    }
}

pub fn parity<T>(n: T) -> Parity
where
    T: Rem<Output = T> + PartialEq + From<u8>,
{
    if n % T::from(2) == T::from(0) {
        Parity::Even
    } else {
        Parity::Odd
    }
}

pub fn is_positive<T: PartialOrd + Default>(n: T) -> bool {
    n > T::default()
}

/// Computes `n!` with checked multiplication.
///
/// `factorial(0)` and `factorial(1)` are both 1.
///
/// # Errors
///
/// Returns [`UtilError::Overflow`] when the result does not fit in a `u128`
/// (any `n` above 34).
pub fn factorial(n: u64) -> Result<u128, UtilError> {
    (2..=u128::from(n))
        .try_fold(1u128, u128::checked_mul)
        .ok_or_else(|| {
            tracing::debug!(input = n, "factorial overflowed u128");
            UtilError::Overflow {
                operation: "factorial",
                input: i128::from(n),
            }
        })
}
