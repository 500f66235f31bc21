//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod inference;
pub(crate) mod list;
pub(crate) mod training;
