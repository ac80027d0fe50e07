//! Function composition and currying.

use std::ops::Add;
use std::rc::Rc;

/// Composes two functions: the result applies `g` first, then `f`.
///
/// ```
/// use arrowkit::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let combined = compose(double, add_one);
/// assert_eq!(combined(5), 12);
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// A single-argument function returned from a partial application.
pub type Curried<A, R> = Box<dyn Fn(A) -> R>;

/// Curries a three-argument function into nested single-argument functions.
///
/// Each partial application is an `Fn`, so it can be applied any number of
/// times. Arguments captured by an outer layer are cloned into each inner
/// call.
///
/// ```
/// use arrowkit::curry3;
///
/// let volume = curry3(|l: u32, w: u32, h: u32| l * w * h);
/// let base = volume(2)(3);
/// assert_eq!(base(4), 24);
/// assert_eq!(base(5), 30);
/// ```
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Curried<B, Curried<C, R>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
    F: Fn(A, B, C) -> R + 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Curried<B, Curried<C, R>> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| -> Curried<C, R> {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c: C| f(a.clone(), b.clone(), c))
        })
    }
}

/// Curried three-way sum: `add_three(a)(b)(c) == a + b + c`.
///
/// This is [`curry3`] applied to `|a, b, c| a + b + c`. Each partial
/// application can be called again with different remaining arguments.
///
/// # Examples
///
/// ```
/// use arrowkit::{add_three, curry3};
///
/// assert_eq!(add_three(2)(3)(4), 9);
///
/// let from_ten = add_three(10);
/// assert_eq!(from_ten(1)(1), 12);
/// assert_eq!(from_ten(5)(5), 20);
///
/// let sum3 = curry3(|a: i32, b: i32, c: i32| a + b + c);
/// assert_eq!(sum3(2)(3)(4), add_three(2)(3)(4));
/// ```
pub fn add_three<T>(a: T) -> Curried<T, Curried<T, T>>
where
    T: Add<Output = T> + Clone + 'static,
{
    curry3(|a: T, b: T, c: T| a + b + c)(a)
}

/// Applies a binary callback to two operands.
pub fn operate<T, R, F>(a: T, b: T, operation: F) -> R
where
    F: FnOnce(T, T) -> R,
{
    operation(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_applies_right_to_left() {
        let add2 = |x: i32| x + 2;
        let times3 = |x: i32| x * 3;

        assert_eq!(compose(times3, add2)(4), 18);
        assert_eq!(compose(add2, times3)(4), 14);
    }

    #[test]
    fn compose_changes_types() {
        let len = |s: String| s.len();
        let shout = |s: &str| s.to_uppercase();
        assert_eq!(compose(len, shout)("arrow"), 5);
    }

    #[test]
    fn add_three_sums() {
        assert_eq!(add_three(2)(3)(4), 9);
    }

    #[test]
    fn partial_applications_are_reusable() {
        let from_two = add_three(2);
        let from_two_three = from_two(3);

        assert_eq!(from_two_three(4), 9);
        assert_eq!(from_two_three(10), 15);
        assert_eq!(from_two(0)(0), 2);
    }

    #[test]
    fn curry3_keeps_argument_order() {
        let join = curry3(|a: String, b: String, c: String| format!("{a}-{b}-{c}"));
        assert_eq!(
            join("x".to_string())("y".to_string())("z".to_string()),
            "x-y-z"
        );
    }

    #[test]
    fn operate_passes_operands_in_order() {
        assert_eq!(operate(5, 3, |x, y| x + y), 8);
        assert_eq!(operate(5, 3, |x, y| x * y), 15);
        assert_eq!(operate(5, 3, |x, y| x - y), 2);
    }
}
