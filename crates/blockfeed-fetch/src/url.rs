//! Provider endpoint construction.

/// Grouped (hierarchical) category tree endpoint.
pub const GROUPED_NODES_URL: &str =
    "http://vip.stock.finance.sina.com.cn/quotes_service/api/json_v2.php/Market_Center.getHQNodes";

/// Keyed industry category endpoint. GBK-encoded page body.
pub const KEYED_INDUSTRY_URL: &str = "http://vip.stock.finance.sina.com.cn/q/view/newSinaHy.php";

/// Keyed concept category endpoint. GBK-encoded page body.
pub const KEYED_CONCEPT_URL: &str =
    "http://money.finance.sina.com.cn/q/view/newFLJK.php?param=class";

/// Keyed area category endpoint. GBK-encoded page body.
pub const KEYED_AREA_URL: &str = "http://money.finance.sina.com.cn/q/view/newFLJK.php?param=area";

/// Membership listing endpoint base.
pub const MEMBER_PAGE_BASE_URL: &str =
    "http://vip.stock.finance.sina.com.cn/quotes_service/api/json_v2.php/Market_Center.getHQNodeData";

/// Builds the URL for one page of a block's membership listing.
///
/// Pages are 1-indexed. The fixed `sort`/`asc`/`symbol`/`_s_r_a` query
/// parameters match what the provider's own frontend sends; the endpoint
/// rejects bare requests.
///
/// # Example
///
/// ```
/// use blockfeed_fetch::url::member_page_url;
///
/// let url = member_page_url(blockfeed_fetch::url::MEMBER_PAGE_BASE_URL, 1, 5000, "new_dzxx");
/// assert!(url.ends_with("page=1&num=5000&sort=symbol&asc=1&node=new_dzxx&symbol=&_s_r_a=page"));
/// ```
#[must_use]
pub fn member_page_url(base: &str, page: u32, page_size: u32, node: &str) -> String {
    format!("{base}?page={page}&num={page_size}&sort=symbol&asc=1&node={node}&symbol=&_s_r_a=page")
}
