//! # arrowkit: pure higher-order function utilities
//!
//! A small library of independent, composable operations:
//!
//! - Arithmetic ([`add`], [`divide`], [`power`], [`factorial`], ...)
//! - Composition and currying ([`compose`], [`curry3`], [`add_three`])
//! - Closure-owned state ([`Counter`], [`memoized_counter`], [`make_accumulator`])
//! - Sequence utilities ([`frequency_count`], [`unique`], [`sort_by_field`])
//! - Fold chains ([`map_filter_reduce`], [`reduce_seedless`])
//! - Immutable pipelines ([`Pipeline`], [`pipeline`])
//! - Named records ([`User`], [`PartialUser`], [`Profile`])
//! - One-shot deferred callbacks ([`schedule_once`])
//!
//! Nothing here mutates its arguments. The only mutable state is the cell
//! inside a [`Counter`], reachable through its own methods.
//!
//! # Errors
//!
//! Fallible operations return [`UtilError`]:
//!
//! - [`UtilError::DivisionByZero`] from [`divide`]
//! - [`UtilError::EmptyReduce`] from seedless folds over empty input
//! - [`UtilError::Overflow`] from [`factorial`], [`Counter`] steps, the
//!   accumulator and the checked [`Pipeline`] steps
//!
//! # Example
//!
//! ```
//! use arrowkit::{compose, map_filter_reduce, unique};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//! assert_eq!(compose(double, add_one)(5), 12);
//!
//! assert_eq!(unique(&[1, 1, 2, 3, 3, 4]), vec![1, 2, 3, 4]);
//!
//! let total = map_filter_reduce(&[1, 2, 3, 4, 5], |x| *x > 2, |x| x * 2, |a, b| a + b, Some(0));
//! assert_eq!(total, Ok(24));
//! ```

mod arith;
mod chain;
mod collections;
mod compose;
mod counter;
mod deferred;
mod error;
mod pipeline;
mod records;
mod text;

pub use arith::{
    DEFAULT_EXPONENT, Parity, add, divide, factorial, is_positive, multiplier, multiply, parity,
    power, square, subtract,
};
pub use chain::{map_filter_reduce, reduce_seedless};
pub use collections::{
    find_first, find_max, frequency_count, matrix_sum, sort_by_field, sort_by_field_with,
    sum_array, unique,
};
pub use compose::{Curried, add_three, compose, curry3, operate};
pub use counter::{Counter, make_accumulator, memoized_counter};
pub use deferred::{FETCHED, fetch_data, schedule_once};
pub use error::UtilError;
pub use pipeline::{Pipeline, pipeline};
pub use records::{
    Address, PartialUser, Profile, UNKNOWN, User, city_of, create_user, display_user,
};
pub use text::{DEFAULT_GUEST, count_vowels, greet, reverse, to_upper};
