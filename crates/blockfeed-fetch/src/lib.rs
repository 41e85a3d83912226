//! HTTP client and request pacing for blockfeed.
//!
//! This crate owns everything between the recorder and the provider:
//!
//! - [`url`] - Provider endpoint construction
//! - [`FetchClient`] - Pooled HTTP client with encoding override
//! - [`TextFetcher`] - Trait seam for driving the recorder with mocks
//! - [`Pacer`] - Fixed delay between page fetches
//!
//! No retry or backoff lives here; the pipeline treats transient fetch
//! failures as skippable units and an external wrapper may add retries.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blockfeed/blockfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod fetcher;
mod pace;
pub mod url;

pub use client::{ClientConfig, FetchClient, FetchError};
pub use fetcher::TextFetcher;
pub use pace::Pacer;

pub use encoding_rs::{Encoding, GBK};
