//! Core types for the blockfeed classification ingestion pipeline.
//!
//! This crate provides the fundamental data structures used throughout
//! blockfeed:
//!
//! - [`Block`] - A named classification group (industry / concept / area)
//! - [`BlockMember`] - One stock's membership in a block
//! - [`BlockKind`] - The kind of classification a block belongs to
//! - [`ids`] - Canonical identity derivation for blocks, stocks and members

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blockfeed/blockfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod block;
mod error;
pub mod ids;
mod member;

pub use block::{Block, BlockKind, BlockKindParseError};
pub use error::{BlockfeedError, Result};
pub use member::BlockMember;
