//! Folding and iteration: [`Collection::reduce`], [`Collection::for_each`],
//! plus the null-safe emptiness checks.

use crate::collection::{Collection, RecordSource};

/// Left fold over `source`; `reducer` receives `(acc, record, index)`.
/// An empty source returns `initial` untouched.
pub fn reduce<T, S, A, F>(source: &S, initial: A, mut reducer: F) -> A
where
    S: RecordSource<T> + ?Sized,
    F: FnMut(A, &T, usize) -> A,
{
    source
        .records()
        .iter()
        .enumerate()
        .fold(initial, |acc, (i, r)| reducer(acc, r, i))
}

/// Call `action` with every record and its index, in order.
pub fn for_each<T, S, F>(source: &S, mut action: F)
where
    S: RecordSource<T> + ?Sized,
    F: FnMut(&T, usize),
{
    for (i, r) in source.records().iter().enumerate() {
        action(r, i);
    }
}

/// `true` when `source` is absent or has no records.
pub fn is_empty<T, S: RecordSource<T> + ?Sized>(source: &S) -> bool {
    source.records().is_empty()
}

/// `true` when `source` is present and has at least one record.
pub fn is_not_empty<T, S: RecordSource<T> + ?Sized>(source: &S) -> bool {
    !is_empty(source)
}

impl<T> Collection<T> {
    /// Left fold; `reducer` receives `(acc, record, index)`.
    ///
    /// # Example
    /// ```
    /// use recordkit::*;
    ///
    /// let total = Collection::new(vec![5, 7, 9]).reduce(0, |acc, x, _| acc + x);
    /// assert_eq!(total, 21);
    /// ```
    pub fn reduce<A, F>(&self, initial: A, reducer: F) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        reduce(self, initial, reducer)
    }

    /// Call `action` for every record in order and continue the chain.
    #[must_use]
    pub fn for_each<F>(self, action: F) -> Self
    where
        F: FnMut(&T, usize),
    {
        for_each(&self, action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_sees_indices() {
        let weighted = reduce(&vec![10, 20, 30], 0, |acc, x: &i32, i| acc + x * i as i32);
        assert_eq!(weighted, 80);
    }

    #[test]
    fn reduce_on_empty_returns_initial() {
        let none: Option<Vec<i32>> = None;
        assert_eq!(reduce(&none, "seed", |_, _, _| "changed"), "seed");
        assert_eq!(Collection::<i32>::empty().reduce(7, |a, b, _| a + b), 7);
    }

    #[test]
    fn for_each_visits_in_order_and_chains() {
        let mut seen = Vec::new();
        let c = Collection::new(vec!['a', 'b']).for_each(|c, i| seen.push((i, *c)));
        assert_eq!(seen, vec![(0, 'a'), (1, 'b')]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn emptiness_is_null_safe() {
        let none: Option<Vec<u8>> = None;
        assert!(is_empty(&none));
        assert!(!is_not_empty(&none));
        assert!(is_not_empty(&Some(vec![1u8])));
        assert!(is_empty(&Vec::<u8>::new()));
    }
}
