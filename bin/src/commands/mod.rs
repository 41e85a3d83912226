//! CLI command implementations.

pub(crate) mod blocks;
pub(crate) mod members;
