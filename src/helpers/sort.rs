//! Stable sorting by [`Comparator`].

use crate::collection::Collection;
use crate::ordering::{Comparator, FieldComparator, SortDirection};
use crate::record::Record;

/// Sort `records` in place. Equal records keep their relative order.
pub fn sort<T, C: Comparator<T>>(records: &mut [T], comparator: C) {
    records.sort_by(|a, b| comparator.compare(a, b));
}

/// Sort `records` in place by one field.
pub fn sort_by_field<T: Record>(records: &mut [T], field: &str, direction: SortDirection) {
    sort(records, FieldComparator::new(field, direction));
}

impl<T> Collection<T> {
    /// Stable sort by `comparator`.
    ///
    /// # Example
    /// ```
    /// use recordkit::*;
    ///
    /// let words = Collection::new(vec!["ccc", "a", "bb", "d"])
    ///     .sort(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// assert_eq!(words.into_vec(), vec!["a", "d", "bb", "ccc"]);
    /// ```
    #[must_use]
    pub fn sort<C: Comparator<T>>(mut self, comparator: C) -> Self {
        sort(&mut self.items, comparator);
        self
    }
}

impl<T: Record> Collection<T> {
    /// Stable sort by the value of `field`.
    #[must_use]
    pub fn sort_by_field(self, field: &str, direction: SortDirection) -> Self {
        self.sort(FieldComparator::new(field, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DynRecord;
    use crate::value::FieldValue;

    #[test]
    fn ties_keep_input_order() {
        let rows = Collection::new(vec![
            DynRecord::new("Task").with("Name", "x").with("Priority", 2),
            DynRecord::new("Task").with("Name", "y").with("Priority", 1),
            DynRecord::new("Task").with("Name", "z").with("Priority", 2),
        ]);
        let sorted = rows.sort_by_field("Priority", SortDirection::Descending);
        assert_eq!(sorted.pluck("Name"), vec![
            FieldValue::from("x"),
            FieldValue::from("z"),
            FieldValue::from("y"),
        ]);
    }

    #[test]
    fn free_sort_works_on_slices() {
        let mut v = vec![3, 1, 2];
        sort(&mut v, |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(v, vec![1, 2, 3]);
    }
}
