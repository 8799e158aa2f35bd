//! Wrapping records in adapters.
//!
//! A [`WrapperFactory`] turns each record into a wrapper that owns it and
//! exposes derived behavior on top of it. The factory receives the record by
//! value and hands it to the wrapper untouched.
//!
//! ```
//! use recordkit::*;
//!
//! struct Deal {
//!     inner: DynRecord,
//! }
//!
//! impl Deal {
//!     fn is_large(&self) -> bool {
//!         self.inner.get("Amount").as_f64().is_some_and(|a| a >= 10_000.0)
//!     }
//! }
//!
//! let deals = Collection::new(vec![
//!     DynRecord::new("Opportunity").with("Amount", 25_000),
//!     DynRecord::new("Opportunity").with("Amount", 50),
//! ])
//! .wrap(|inner| Deal { inner });
//!
//! assert_eq!(deals.iter().filter(|d| d.is_large()).count(), 1);
//! ```

/// Produces one wrapper per record.
pub trait WrapperFactory<T> {
    type Wrapper;

    fn wrap(&self, record: T) -> Self::Wrapper;
}

impl<T, W, F> WrapperFactory<T> for F
where
    F: Fn(T) -> W,
{
    type Wrapper = W;

    fn wrap(&self, record: T) -> W {
        self(record)
    }
}

/// Wrappers that can hand back the record they were built from.
pub trait Wrapped<T> {
    fn inner(&self) -> &T;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper(String);

    impl Wrapped<String> for Upper {
        fn inner(&self) -> &String {
            &self.0
        }
    }

    #[test]
    fn closure_factory_keeps_source_record() {
        let factory = Upper;
        let w = factory.wrap("abc".to_string());
        assert_eq!(w.inner(), "abc");
    }
}
