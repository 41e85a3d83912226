//! Payload decoding and shape extraction for blockfeed.
//!
//! The quote provider's responses are only loosely JSON: category trees
//! arrive as JavaScript object/array literals, keyed category maps arrive
//! as a JSON object buried inside a non-JSON page body, and membership
//! pages arrive as relaxed array literals. This crate turns those bodies
//! into typed records:
//!
//! - [`decode_relaxed`] / [`decode_embedded`] - raw text to a JSON tree
//! - [`parse_grouped_blocks`] / [`parse_keyed_blocks`] - category shapes
//! - [`parse_stock_page`] - one membership page
//!
//! All failures are recoverable values ([`ParseError`], [`ShapeError`])
//! carrying a bounded excerpt of the offending payload; the caller decides
//! whether to skip or abort.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blockfeed/blockfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod category;
mod decode;
mod members;

pub use category::{ShapeError, parse_grouped_blocks, parse_keyed_blocks};
pub use decode::{ParseError, decode_embedded, decode_relaxed, extract_object};
pub use members::{StockRow, is_no_data, parse_stock_page};
