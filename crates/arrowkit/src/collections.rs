//! Sequence utilities.
//!
//! All functions borrow their input and return new collections.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::iter::Sum;
use std::ops::Add;

use crate::UtilError;
use crate::chain::reduce_seedless;

/// Counts occurrences of each distinct element.
///
/// Keys compare with `Eq`, so strings are case-sensitive. An empty input
/// yields an empty map.
///
/// ```
/// use arrowkit::frequency_count;
///
/// let freq = frequency_count(&["js", "python", "js", "c++"]);
/// assert_eq!(freq["js"], 2);
/// assert_eq!(freq["c++"], 1);
/// ```
pub fn frequency_count<K>(items: &[K]) -> HashMap<K, usize>
where
    K: Eq + Hash + Clone,
{
    items.iter().fold(HashMap::new(), |mut acc, item| {
        *acc.entry(item.clone()).or_insert(0) += 1;
        acc
    })
}

/// Removes duplicates, keeping the first occurrence of each element.
pub fn unique<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Sorts ascending by the key that `field` extracts.
///
/// The sort is stable: elements with equal keys keep their input order.
/// Keys that do not compare equal to themselves (such as NaN) sort after
/// every other key, in input order.
///
/// ```
/// use arrowkit::sort_by_field;
///
/// let items = [("Book", 100), ("Pen", 20), ("Bag", 300)];
/// let sorted = sort_by_field(&items, |item| item.1);
/// assert_eq!(sorted, vec![("Pen", 20), ("Book", 100), ("Bag", 300)]);
/// ```
pub fn sort_by_field<T, K, F>(items: &[T], field: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    sort_by_field_with(items, field, unordered_last)
}

/// Total order over `PartialOrd` keys: unordered keys go last and tie with
/// each other.
fn unordered_last<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    match (is_ordered(a), is_ordered(b)) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

fn is_ordered<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_some()
}

/// Like [`sort_by_field`], with an explicit comparator over the keys.
pub fn sort_by_field_with<T, K, F, C>(items: &[T], field: F, comparator: C) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| comparator(&field(a), &field(b)));
    sorted
}

/// Sums a sequence, starting from zero. Empty input sums to zero.
pub fn sum_array<T>(items: &[T]) -> T
where
    T: Sum<T> + Copy,
{
    items.iter().copied().sum()
}

/// Largest element, or `None` for an empty sequence.
pub fn find_max<T>(items: &[T]) -> Option<T>
where
    T: PartialOrd + Copy,
{
    items.iter().copied().reduce(|max, x| if x > max { x } else { max })
}

/// Flattens the rows and sums them without a seed.
///
/// # Errors
///
/// Returns [`UtilError::EmptyReduce`] when the matrix holds no elements.
pub fn matrix_sum<T, R>(rows: &[R]) -> Result<T, UtilError>
where
    T: Add<Output = T> + Clone,
    R: AsRef<[T]>,
{
    let flat: Vec<T> = rows
        .iter()
        .flat_map(|row| row.as_ref().iter().cloned())
        .collect();
    reduce_seedless(flat, |a, b| a + b)
}

/// First element matching `predicate`.
pub fn find_first<T, P>(items: &[T], predicate: P) -> Option<&T>
where
    P: Fn(&T) -> bool,
{
    items.iter().find(|&item| predicate(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        price: f64,
    }

    fn item(name: &'static str, price: f64) -> Item {
        Item { name, price }
    }

    #[test]
    fn frequency_of_words() {
        let freq = frequency_count(&["js", "python", "js", "c++"]);

        assert_eq!(freq.len(), 3);
        assert_eq!(freq["js"], 2);
        assert_eq!(freq["python"], 1);
        assert_eq!(freq["c++"], 1);
    }

    #[test]
    fn frequency_of_empty_input_is_empty() {
        let freq = frequency_count::<String>(&[]);
        assert!(freq.is_empty());
    }

    #[test]
    fn frequency_is_case_sensitive() {
        let freq = frequency_count(&["JS", "js", "Js"]);
        assert_eq!(freq.len(), 3);
        assert!(freq.values().all(|&count| count == 1));
    }

    #[test]
    fn unique_preserves_first_seen_order() {
        assert_eq!(unique(&[1, 1, 2, 3, 3, 4]), vec![1, 2, 3, 4]);
        assert_eq!(unique(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert!(unique::<i32>(&[]).is_empty());
    }

    #[test]
    fn unique_leaves_input_untouched() {
        let input = vec!["b", "a", "b"];
        let out = unique(&input);
        assert_eq!(out, vec!["b", "a"]);
        assert_eq!(input, vec!["b", "a", "b"]);
    }

    #[test]
    fn sort_by_price() {
        let items = [item("Book", 100.0), item("Pen", 20.0), item("Bag", 300.0)];
        let sorted = sort_by_field(&items, |i| i.price);

        let names: Vec<_> = sorted.iter().map(|i| i.name).collect();
        assert_eq!(names, ["Pen", "Book", "Bag"]);
        assert_eq!(items[0].name, "Book");
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let items = [
            item("first", 50.0),
            item("cheap", 10.0),
            item("second", 50.0),
            item("third", 50.0),
        ];
        let sorted = sort_by_field(&items, |i| i.price);

        let names: Vec<_> = sorted.iter().map(|i| i.name).collect();
        assert_eq!(names, ["cheap", "first", "second", "third"]);
    }

    #[test]
    fn nan_keys_sort_last_in_input_order() {
        let items = [
            item("two", 2.0),
            item("nan-a", f64::NAN),
            item("one", 1.0),
            item("nan-b", f64::NAN),
            item("zero", 0.0),
        ];
        let sorted = sort_by_field(&items, |i| i.price);

        let names: Vec<_> = sorted.iter().map(|i| i.name).collect();
        assert_eq!(names, ["zero", "one", "two", "nan-a", "nan-b"]);
    }

    #[test]
    fn sort_with_descending_comparator() {
        let data = [5, 1, 8, 3];
        let sorted = sort_by_field_with(&data, |x| *x, |a, b| b.cmp(a));
        assert_eq!(sorted, vec![8, 5, 3, 1]);
    }

    #[test]
    fn sum_and_max() {
        assert_eq!(sum_array(&[1, 2, 3, 4]), 10);
        assert_eq!(sum_array::<i32>(&[]), 0);
        assert_eq!(find_max(&[3, 7, 2]), Some(7));
        assert_eq!(find_max::<i32>(&[]), None);
    }

    #[test]
    fn matrix_sum_flattens() {
        assert_eq!(matrix_sum(&[vec![1, 2], vec![3, 4]]), Ok(10));
        assert_eq!(matrix_sum(&[vec![], vec![5]]), Ok(5));
    }

    #[test]
    fn matrix_sum_of_nothing_is_empty_reduce() {
        let empty: [Vec<i32>; 2] = [vec![], vec![]];
        assert_eq!(matrix_sum(&empty), Err(UtilError::EmptyReduce));
    }

    #[test]
    fn find_first_match() {
        let students = [("Ali", 85), ("Saira", 92), ("Akhtar", 78)];
        assert_eq!(
            find_first(&students, |s| s.0 == "Saira"),
            Some(&("Saira", 92))
        );
        assert_eq!(find_first(&students, |s| s.1 > 95), None);
    }
}
