//! Assertion functions for collection outputs.
//!
//! Every function accepts any [`RecordSource`], so the same helper works on a
//! `Collection`, a `Vec`, a slice, or an optional sequence.

use crate::collection::RecordSource;
use crate::record::Record;
use crate::value::FieldValue;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// Assert that two sequences are equal in order and content.
///
/// # Panics
///
/// Panics if the sequences differ in length or content.
///
/// # Example
///
/// ```
/// use recordkit::Collection;
/// use recordkit::testing::assert_collections_equal;
///
/// let actual = Collection::new(vec![1, 2, 3]);
/// assert_collections_equal(&actual, &vec![1, 2, 3]);
/// ```
pub fn assert_collections_equal<T, A, E>(actual: &A, expected: &E)
where
    T: Debug + PartialEq,
    A: RecordSource<T> + ?Sized,
    E: RecordSource<T> + ?Sized,
{
    let (actual, expected) = (actual.records(), expected.records());
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two sequences hold the same elements with the same
/// multiplicities, ignoring order.
///
/// # Panics
///
/// Panics if the sequences differ in content (ignoring order).
///
/// # Example
///
/// ```
/// use recordkit::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&vec![3, 1, 1, 2], &vec![1, 2, 1, 3]);
/// ```
pub fn assert_collections_unordered_equal<T, A, E>(actual: &A, expected: &E)
where
    T: Debug + Eq + Hash,
    A: RecordSource<T> + ?Sized,
    E: RecordSource<T> + ?Sized,
{
    let (actual, expected) = (actual.records(), expected.records());
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
        let mut m: HashMap<&T, usize> = HashMap::new();
        for item in items {
            *m.entry(item).or_default() += 1;
        }
        m
    }
    let (actual_counts, expected_counts) = (counts(actual), counts(expected));

    if actual_counts != expected_counts {
        let missing: Vec<_> = expected_counts
            .iter()
            .filter(|(k, n)| actual_counts.get(*k) != Some(n))
            .map(|(k, _)| *k)
            .collect();
        let extra: Vec<_> = actual_counts
            .iter()
            .filter(|(k, n)| expected_counts.get(*k) != Some(n))
            .map(|(k, _)| *k)
            .collect();
        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Assert that two groupings have the same keys and, per key, the same
/// records in the same order.
///
/// # Panics
///
/// Panics on a missing or extra key, or on any difference within a group.
///
/// # Example
///
/// ```
/// use recordkit::Collection;
/// use recordkit::testing::assert_groups_equal;
/// use std::collections::HashMap;
///
/// let groups = Collection::new(vec![1, 2, 3, 4]).group_by(|n: &i32| n % 2);
/// assert_groups_equal(&groups, &HashMap::from([(0, vec![2, 4]), (1, vec![1, 3])]));
/// ```
pub fn assert_groups_equal<K, T, S1, S2>(actual: &HashMap<K, Vec<T>, S1>, expected: &HashMap<K, Vec<T>, S2>)
where
    K: Debug + Eq + Hash,
    T: Debug + PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    for key in actual.keys() {
        assert!(expected.contains_key(key), "Unexpected group key: {key:?}");
    }
    for (key, expected_group) in expected {
        let Some(actual_group) = actual.get(key) else {
            panic!("Missing group key: {key:?}");
        };
        assert_eq!(
            actual_group, expected_group,
            "Group mismatch for key {key:?}:\n  Expected: {expected_group:?}\n  Actual: {actual_group:?}"
        );
    }
}

/// Assert that the values of `field`, read from every record in order, equal
/// `expected`.
///
/// # Panics
///
/// Panics if the plucked values differ.
///
/// # Example
///
/// ```
/// use recordkit::testing::{assert_field_values, sample_opportunities};
///
/// assert_field_values(&sample_opportunities(), "Name", ["Acme Renewal", "Globex Expansion", "Initech Pilot", "Umbrella Upsell"]);
/// ```
pub fn assert_field_values<T, S, I, V>(records: &S, field: &str, expected: I)
where
    T: Record,
    S: RecordSource<T> + ?Sized,
    I: IntoIterator<Item = V>,
    V: Into<FieldValue>,
{
    let actual: Vec<FieldValue> = records.records().iter().map(|r| r.get(field)).collect();
    let expected: Vec<FieldValue> = expected.into_iter().map(Into::into).collect();
    assert_eq!(actual, expected, "Field {field:?} mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}");
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use recordkit::testing::assert_all;
///
/// assert_all(&vec![2, 4, 6, 8], |x| x % 2 == 0);
/// ```
pub fn assert_all<T, S>(collection: &S, predicate: impl Fn(&T) -> bool)
where
    T: Debug,
    S: RecordSource<T> + ?Sized,
{
    let collection = collection.records();
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that no element satisfies `predicate`.
///
/// # Panics
///
/// Panics if any element satisfies the predicate.
///
/// # Example
///
/// ```
/// use recordkit::testing::assert_none;
///
/// assert_none(&vec![1, 3, 5, 7], |x| x % 2 == 0);
/// ```
pub fn assert_none<T, S>(collection: &S, predicate: impl Fn(&T) -> bool)
where
    T: Debug,
    S: RecordSource<T> + ?Sized,
{
    let collection = collection.records();
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_equal_counts_multiplicities() {
        assert_collections_unordered_equal(&vec![2, 1, 1], &vec![1, 2, 1]);
        assert_collections_unordered_equal(&Vec::<i32>::new(), &None::<Vec<i32>>);
    }

    #[test]
    #[should_panic(expected = "Collection content mismatch")]
    fn unordered_equal_rejects_shifted_multiplicities() {
        assert_collections_unordered_equal(&vec![1, 1, 2], &vec![1, 2, 2]);
    }
}
