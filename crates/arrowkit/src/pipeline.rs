//! Immutable value pipelines.
//!
//! Every step borrows the current [`Pipeline`] and returns a new one, so an
//! intermediate stage can be branched from any number of times.
//!
//! ```
//! use arrowkit::pipeline;
//!
//! let result = pipeline(5).double().increment().double().get();
//! assert_eq!(result, 22);
//! ```

use std::ops::{Add, Mul};

use crate::UtilError;

/// A wrapped value with chainable transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pipeline<T> {
    value: T,
}

impl<T> Pipeline<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Applies an arbitrary transform, producing a new pipeline.
    pub fn map<U, F>(&self, f: F) -> Pipeline<U>
    where
        T: Clone,
        F: FnOnce(T) -> U,
    {
        Pipeline::new(f(self.value.clone()))
    }

    /// Returns the wrapped value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.clone()
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Applies a fallible transform, producing a new pipeline or the error.
    ///
    /// # Errors
    ///
    /// Returns whatever `f` returns.
    pub fn try_map<U, E, F>(&self, f: F) -> Result<Pipeline<U>, E>
    where
        T: Clone,
        F: FnOnce(T) -> Result<U, E>,
    {
        f(self.value.clone()).map(Pipeline::new)
    }
}

/// Steps built on `T`'s own `*` and `+`. Integer overflow behaves as it does
/// for those operators; `Pipeline<i64>` also has checked steps.
impl<T> Pipeline<T>
where
    T: Add<Output = T> + Mul<Output = T> + From<u8> + Clone,
{
    pub fn double(&self) -> Self {
        self.map(|v| v * T::from(2))
    }

    pub fn increment(&self) -> Self {
        self.map(|v| v + T::from(1))
    }
}

impl Pipeline<i64> {
    /// Like [`Pipeline::double`], reporting overflow instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::Overflow`] when the doubled value leaves `i64`.
    pub fn checked_double(&self) -> Result<Self, UtilError> {
        self.try_map(|v| {
            v.checked_mul(2).ok_or(UtilError::Overflow {
                operation: "double",
                input: i128::from(v),
            })
        })
    }

    /// Like [`Pipeline::increment`], reporting overflow instead of wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::Overflow`] at `i64::MAX`.
    pub fn checked_increment(&self) -> Result<Self, UtilError> {
        self.try_map(|v| {
            v.checked_add(1).ok_or(UtilError::Overflow {
                operation: "increment",
                input: i128::from(v),
            })
        })
    }
}

/// Starts a pipeline from `value`.
pub fn pipeline<T>(value: T) -> Pipeline<T> {
    Pipeline::new(value)
}
