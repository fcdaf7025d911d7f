//! Page category constants.
//!
//! Every routed page declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a001_customer--list"`) and a
//! `data-page-category` with one of the constants below.

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";
