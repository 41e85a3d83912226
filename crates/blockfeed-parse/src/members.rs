//! Membership page decoding.

use serde::Deserialize;
use serde_json::Value;

use crate::category::ShapeError;

/// One flat record from a membership page.
///
/// Pages carry many more fields (prices, volumes, turnover); only the
/// stock identity survives into membership records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StockRow {
    /// Provider-native stock code.
    pub code: String,
    /// Stock display name.
    pub name: String,
}

/// Returns true if a page body is the provider's "no data" sentinel.
///
/// The membership endpoint answers `null` (bare, not JSON-wrapped) once
/// the page number runs past the block's data; a blank body is treated
/// the same way. Checked on the raw text before any decoding.
#[must_use]
pub fn is_no_data(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed == "null"
}

/// Decodes one membership page into stock rows.
///
/// # Errors
///
/// Returns [`ShapeError`] if the tree is not an array of records with
/// `code` and `name` fields.
pub fn parse_stock_page(root: &Value) -> Result<Vec<StockRow>, ShapeError> {
    serde_json::from_value(root.clone()).map_err(|e| ShapeError {
        path: "$".to_string(),
        message: format!("expected an array of stock records: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_relaxed;
    use serde_json::json;

    #[test]
    fn test_no_data_sentinel() {
        assert!(is_no_data("null"));
        assert!(is_no_data("  null\n"));
        assert!(is_no_data(""));
        assert!(!is_no_data("[]"));
        assert!(!is_no_data("[{\"code\":\"600100\"}]"));
    }

    #[test]
    fn test_parse_stock_page() {
        let root = json!([
            {"symbol": "sh600100", "code": "600100", "name": "同方股份", "trade": "4.50"},
            {"symbol": "sz000977", "code": "000977", "name": "浪潮信息", "trade": "35.10"},
        ]);
        let rows = parse_stock_page(&root).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "600100");
        assert_eq!(rows[1].name, "浪潮信息");
    }

    #[test]
    fn test_parse_relaxed_page_body() {
        // The endpoint emits object literals, not strict JSON.
        let root = decode_relaxed("[{code: '600100', name: '同方股份', trade: 4.5}]").unwrap();
        let rows = parse_stock_page(&root).unwrap();
        assert_eq!(rows[0].code, "600100");
    }

    #[test]
    fn test_parse_wrong_shape() {
        assert!(parse_stock_page(&json!({"code": "600100"})).is_err());
        assert!(parse_stock_page(&json!([{"symbol": "sh600100"}])).is_err());
    }
}
