//! Offset pagination for Confluence collection endpoints

use crate::error::{Error, Result};
use crate::resources::Resource;
use crate::types::{JsonValue, StringMap};

/// Offset-based pagination for collection endpoints
///
/// Builds the query parameters for each page request. Continuation is
/// decided separately by [`next_cursor`] from response bodies, so the
/// pager itself holds no request state.
#[derive(Debug, Clone)]
pub struct OffsetPager {
    /// Number of records per page
    pub page_size: u64,
    /// Sub-resources to expand in responses
    pub expand: Vec<String>,
}

impl OffsetPager {
    /// Create a new pager with the given page size
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size,
            expand: Vec::new(),
        }
    }

    /// Create a pager for a resource, carrying its expansion list
    pub fn for_resource(resource: &Resource, page_size: u64) -> Self {
        Self::new(page_size).with_expand(resource.expand.iter().copied())
    }

    /// Set the expansion list
    #[must_use]
    pub fn with_expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = expand.into_iter().map(Into::into).collect();
        self
    }

    /// Build the query parameters for one page request
    ///
    /// `start` is omitted on the first request (absent cursor). `expand`
    /// is always sent, as the empty string when no expansions are
    /// configured.
    pub fn request_params(&self, cursor: Option<u64>) -> StringMap {
        let mut params = StringMap::new();
        params.insert("limit".to_string(), self.page_size.to_string());
        if let Some(start) = cursor {
            params.insert("start".to_string(), start.to_string());
        }
        params.insert("expand".to_string(), self.expand.join(","));
        params
    }
}

/// Extract the rows of one response page, in server order
///
/// The `results` member must be present and an array; anything else is a
/// malformed response. Rows pass through unfiltered.
pub fn parse_records(body: &JsonValue) -> Result<Vec<JsonValue>> {
    let results = body
        .get("results")
        .ok_or_else(|| Error::malformed("missing 'results' in response body"))?;
    let rows = results
        .as_array()
        .ok_or_else(|| Error::malformed("'results' is not an array"))?;
    Ok(rows.clone())
}

/// Compute the cursor for the next page from a response body
///
/// The body's `size` and `limit` fields drive continuation: a page
/// smaller than the limit is the last one. An absent previous cursor
/// counts as 1, so the second page starts at `1 + limit`, matching the
/// offset sequence Confluence clients conventionally produce.
pub fn next_cursor(body: &JsonValue, previous: Option<u64>) -> Result<Option<u64>> {
    let size = read_count(body, "size")?;
    let limit = read_count(body, "limit")?;

    if size < limit {
        return Ok(None);
    }

    Ok(Some(previous.unwrap_or(1) + limit))
}

fn read_count(body: &JsonValue, field: &str) -> Result<u64> {
    body.get(field).and_then(JsonValue::as_u64).ok_or_else(|| {
        Error::malformed(format!("missing or non-integer '{field}' in response body"))
    })
}
