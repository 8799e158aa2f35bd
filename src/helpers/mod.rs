pub(crate) mod convert;
pub(crate) mod fill;
pub(crate) mod filter;
pub(crate) mod fold;
pub(crate) mod keyed;
pub(crate) mod sort;
