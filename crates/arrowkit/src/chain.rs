//! Filter → map → fold chains.

use crate::UtilError;

/// Folds a sequence using its first element as the initial accumulator.
///
/// # Errors
///
/// Returns [`UtilError::EmptyReduce`] when the sequence is empty.
pub fn reduce_seedless<T, I, F>(items: I, reducer: F) -> Result<T, UtilError>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    items.into_iter().reduce(reducer).ok_or_else(|| {
        tracing::debug!("seedless reduce over empty sequence");
        UtilError::EmptyReduce
    })
}

/// Keeps the elements matching `predicate`, maps them, then folds.
///
/// With `Some(seed)` the fold starts from the seed and never fails. With
/// `None` the first mapped element seeds the fold, so an empty
/// filtered/mapped sequence is an error.
///
/// # Errors
///
/// Returns [`UtilError::EmptyReduce`] when `seed` is `None` and no element
/// survives the filter.
///
/// # Examples
///
/// ```
/// use arrowkit::map_filter_reduce;
///
/// let total = map_filter_reduce(&[1, 2, 3, 4, 5], |x| *x > 2, |x| x * 2, |a, b| a + b, Some(0));
/// assert_eq!(total, Ok(24));
/// ```
pub fn map_filter_reduce<T, U, P, M, R>(
    items: &[T],
    predicate: P,
    mapper: M,
    reducer: R,
    seed: Option<U>,
) -> Result<U, UtilError>
where
    P: Fn(&T) -> bool,
    M: Fn(&T) -> U,
    R: FnMut(U, U) -> U,
{
    let mapped = items.iter().filter(|&item| predicate(item)).map(mapper);
    match seed {
        Some(seed) => Ok(mapped.fold(seed, reducer)),
        None => reduce_seedless(mapped, reducer),
    }
}
