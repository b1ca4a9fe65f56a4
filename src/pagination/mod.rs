//! Pagination module
//!
//! Confluence collection endpoints share a single pagination pattern:
//! offset (`start`) and page-size (`limit`) query parameters on requests,
//! with `size`/`limit` progress fields in each response body. This module
//! builds the request parameters and decides continuation; it performs
//! no I/O of its own, so every function here is testable on plain JSON.

mod offset;

pub use offset::{next_cursor, parse_records, OffsetPager};
