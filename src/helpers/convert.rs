//! Type-changing transformations: [`Collection::wrap`] and
//! [`Collection::cast_into`].

use crate::cast::cast;
use crate::collection::{Collection, RecordSource};
use crate::wrap::WrapperFactory;
use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One wrapper per record of `source`, in order. Records are cloned into
/// their wrappers.
pub fn wrap<T, S, W>(source: &S, factory: W) -> Vec<W::Wrapper>
where
    T: Clone,
    S: RecordSource<T> + ?Sized,
    W: WrapperFactory<T>,
{
    source.records().iter().cloned().map(|r| factory.wrap(r)).collect()
}

impl<T> Collection<T> {
    /// Wrap every record, producing a collection of wrappers. Each wrapper
    /// takes ownership of its record.
    #[must_use]
    pub fn wrap<W: WrapperFactory<T>>(self, factory: W) -> Collection<W::Wrapper> {
        self.map(|r| factory.wrap(r))
    }

    /// Deep-convert every record into `D` through their serialized form.
    ///
    /// # Errors
    /// [`CollectionError::Conversion`](crate::CollectionError::Conversion) on
    /// the first record whose shape does not fit `D`.
    pub fn cast_into<D>(self) -> Result<Collection<D>>
    where
        T: Serialize,
        D: DeserializeOwned + Default,
    {
        self.items.iter().map(|r| cast(Some(r))).collect()
    }
}
