//! Free-function forms of the [`Collection`](crate::Collection) operations.
//!
//! Each function borrows any [`RecordSource`](crate::RecordSource), so it works
//! on slices, vectors and absent (`None`) sequences without building a
//! collection first. Operations producing a sequence clone the records they
//! keep; `sort` works in place on a mutable slice.
//!
//! ```
//! use recordkit::ops;
//! use recordkit::{DynRecord, FieldKey};
//!
//! let maybe: Option<Vec<DynRecord>> = None;
//! assert!(ops::is_empty(&maybe));
//! assert!(ops::group_by(&maybe, FieldKey::new("StageName")).is_empty());
//! ```

pub use crate::cast::cast;
pub use crate::helpers::convert::wrap;
pub use crate::helpers::filter::{filter, filter_changed, find};
pub use crate::helpers::fold::{for_each, is_empty, is_not_empty, reduce};
pub use crate::helpers::keyed::{group_by, group_values_by, map_by, map_by_unique, map_values_by, pluck, unique_values};
pub use crate::helpers::sort::{sort, sort_by_field};

use crate::collection::RecordSource;
use crate::replicate::{replicate_into, CloneSpec, Replicate};

/// Records of `source` followed by `count` replicas of `prototype`.
pub fn fill<T, S>(source: &S, count: usize, prototype: &T, spec: Option<CloneSpec>) -> Vec<T>
where
    T: Replicate + Clone,
    S: RecordSource<T> + ?Sized,
{
    let mut out = source.records().to_vec();
    replicate_into(&mut out, count, prototype, &spec.unwrap_or_default());
    out
}
