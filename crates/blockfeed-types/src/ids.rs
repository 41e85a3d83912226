//! Canonical identity derivation.
//!
//! Every function here is pure and deterministic: identical inputs always
//! yield identical ids. That property is what makes the pipeline's
//! full-refresh upserts safe — re-recording an unchanged upstream can only
//! overwrite, never duplicate.

/// Derives the canonical block id: `block_{exchange}_{code}`.
#[must_use]
pub fn block_id(exchange: &str, code: &str) -> String {
    format!("block_{exchange}_{code}")
}

/// Maps a six-digit China stock code to its venue prefix.
///
/// Leading `6` or `9` is Shanghai, `4` or `8` is Beijing, everything
/// else (`0`, `2`, `3`, ...) is Shenzhen.
#[must_use]
pub fn stock_venue(code: &str) -> &'static str {
    match code.as_bytes().first() {
        Some(b'6' | b'9') => "sh",
        Some(b'4' | b'8') => "bj",
        _ => "sz",
    }
}

/// Derives the exchange-qualified canonical stock id: `stock_{venue}_{code}`.
#[must_use]
pub fn stock_id(code: &str) -> String {
    format!("stock_{}_{}", stock_venue(code), code)
}

/// Derives the membership id: `{block_id}_{stock_id}`.
///
/// Unique per (block, stock) pair, so a re-fetch overwrites the previous
/// observation rather than appending a new one.
#[must_use]
pub fn member_id(block_id: &str, stock_id: &str) -> String {
    format!("{block_id}_{stock_id}")
}
