//! Ingestion orchestration for blockfeed.
//!
//! This crate sequences the pipeline: category discovery across the
//! configured provider sources, then per-block membership pagination,
//! with batching, pacing and per-unit failure isolation.
//!
//! - [`RecorderConfig`] / [`ProviderUrls`] - explicit run configuration
//! - [`run_discovery`] / [`record_grouped`] / [`record_keyed`] - blocks
//! - [`run_members`] / [`record_block_members`] - memberships
//! - [`RunSummary`] - per-run unit counts
//!
//! Execution is strictly sequential: one fetch in flight, suspension
//! only at the network call and the pacing sleep.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blockfeed/blockfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod discovery;
mod members;
mod summary;

pub use config::{ProviderUrls, RecorderConfig};
pub use discovery::{record_grouped, record_keyed, run_discovery};
pub use members::{record_block_members, run_members};
pub use summary::RunSummary;

#[cfg(test)]
mod testing;
