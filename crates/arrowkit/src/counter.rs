//! Counter state owned by a single value.
//!
//! The count lives in a `Cell<i64>` private to [`Counter`]. `Counter` is
//! neither `Clone` nor `Sync`, so the two mutators are the only way to
//! change it. Both are checked: stepping past `i64::MAX` or `i64::MIN`
//! leaves the count unchanged and reports [`UtilError::Overflow`].

use std::cell::Cell;

use crate::UtilError;

/// A counter exposing increment and decrement over one private cell.
#[derive(Debug, Default)]
pub struct Counter {
    count: Cell<i64>,
}

impl Counter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(initial: i64) -> Self {
        Self {
            count: Cell::new(initial),
        }
    }

    /// Adds one and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::Overflow`] when the count is already `i64::MAX`.
    pub fn increment(&self) -> Result<i64, UtilError> {
        self.step("increment", 1)
    }

    /// Subtracts one and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`UtilError::Overflow`] when the count is already `i64::MIN`.
    pub fn decrement(&self) -> Result<i64, UtilError> {
        self.step("decrement", -1)
    }

    pub fn get(&self) -> i64 {
        self.count.get()
    }

    fn step(&self, operation: &'static str, delta: i64) -> Result<i64, UtilError> {
        let current = self.count.get();
        let Some(next) = current.checked_add(delta) else {
            tracing::debug!(count = current, operation, "counter step overflowed");
            return Err(UtilError::Overflow {
                operation,
                input: i128::from(current),
            });
        };
        self.count.set(next);
        tracing::trace!(count = next, operation, "counter stepped");
        Ok(next)
    }
}

/// Creates a fresh, independent [`Counter`] at zero.
///
/// ```
/// use arrowkit::memoized_counter;
///
/// let counter = memoized_counter();
/// assert_eq!(counter.increment(), Ok(1));
/// assert_eq!(counter.decrement(), Ok(0));
/// ```
pub fn memoized_counter() -> Counter {
    Counter::new()
}

/// Closure form of the same idea: each call adds `amount` to a captured sum
/// and returns the running total.
///
/// A call that would overflow returns [`UtilError::Overflow`] and leaves the
/// sum as it was.
pub fn make_accumulator(initial: i64) -> impl FnMut(i64) -> Result<i64, UtilError> {
    let mut sum = initial;
    move |amount| {
        sum = sum.checked_add(amount).ok_or(UtilError::Overflow {
            operation: "accumulate",
            input: i128::from(sum),
        })?;
        Ok(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_then_decrement() {
        let counter = memoized_counter();
        assert_eq!(counter.increment(), Ok(1));
        assert_eq!(counter.increment(), Ok(2));
        assert_eq!(counter.decrement(), Ok(1));
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn decrement_goes_negative() {
        let counter = Counter::new();
        assert_eq!(counter.decrement(), Ok(-1));
        assert_eq!(counter.decrement(), Ok(-2));
    }

    #[test]
    fn instances_are_independent() {
        let a = memoized_counter();
        let b = memoized_counter();

        a.increment().unwrap();
        a.increment().unwrap();
        b.decrement().unwrap();

        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), -1);
    }

    #[test]
    fn starting_at_offsets_the_count() {
        let counter = Counter::starting_at(10);
        assert_eq!(counter.increment(), Ok(11));
    }

    #[test]
    fn increment_at_max_overflows_without_changing_count() {
        let counter = Counter::starting_at(i64::MAX);
        assert_eq!(
            counter.increment(),
            Err(UtilError::Overflow {
                operation: "increment",
                input: i128::from(i64::MAX),
            })
        );
        assert_eq!(counter.get(), i64::MAX);
        assert_eq!(counter.decrement(), Ok(i64::MAX - 1));
    }

    #[test]
    fn decrement_at_min_overflows_without_changing_count() {
        let counter = Counter::starting_at(i64::MIN);
        assert_eq!(
            counter.decrement(),
            Err(UtilError::Overflow {
                operation: "decrement",
                input: i128::from(i64::MIN),
            })
        );
        assert_eq!(counter.get(), i64::MIN);
    }

    #[test]
    fn accumulator_keeps_running_total() {
        let mut acc = make_accumulator(100);
        assert_eq!(acc(10), Ok(110));
        assert_eq!(acc(-20), Ok(90));

        let mut other = make_accumulator(0);
        assert_eq!(other(1), Ok(1));
        assert_eq!(acc(0), Ok(90));
    }

    #[test]
    fn accumulator_overflow_keeps_previous_sum() {
        let mut acc = make_accumulator(i64::MAX - 1);
        assert!(matches!(acc(2), Err(UtilError::Overflow { .. })));
        assert_eq!(acc(1), Ok(i64::MAX));
    }
}
