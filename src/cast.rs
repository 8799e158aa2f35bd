//! Deep conversion between structurally compatible types.
//!
//! A result container built generically (say a `HashMap<String, Vec<DynRecord>>`)
//! sometimes needs to become a nominally different but structurally identical
//! type owned by calling code. [`cast`] performs that conversion through
//! `serde_json::Value`: every field is checked, nothing is reinterpreted in
//! place, and the cost is proportional to the size of the data.

use crate::error::CollectionError;
use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Convert `source` into `D`.
///
/// An absent source yields `D::default()`.
///
/// # Errors
/// [`CollectionError::Conversion`] when the shapes are not compatible.
///
/// # Example
/// ```
/// use recordkit::cast;
/// use serde::{Deserialize, Serialize};
/// use std::collections::HashMap;
///
/// #[derive(Serialize)]
/// struct Tally { open: u32, closed: u32 }
///
/// #[derive(Deserialize, Default, Debug, PartialEq)]
/// struct Summary { open: u64, closed: u64 }
///
/// # fn main() -> anyhow::Result<()> {
/// let summary: Summary = cast(Some(&Tally { open: 2, closed: 1 }))?;
/// assert_eq!(summary, Summary { open: 2, closed: 1 });
///
/// let empty: HashMap<String, u64> = cast::<Tally, _>(None)?;
/// assert!(empty.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn cast<S, D>(source: Option<&S>) -> Result<D>
where
    S: Serialize + ?Sized,
    D: DeserializeOwned + Default,
{
    let Some(source) = source else {
        return Ok(D::default());
    };
    let value = serde_json::to_value(source).map_err(|e| conversion_error::<D>(&e))?;
    serde_json::from_value(value).map_err(|e| conversion_error::<D>(&e).into())
}

fn conversion_error<D>(e: &serde_json::Error) -> CollectionError {
    let target = std::any::type_name::<D>();
    tracing::debug!(target_type = target, error = %e, "cast failed");
    CollectionError::conversion(format!("cannot convert into {target}: {e}"))
}
