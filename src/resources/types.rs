//! Resource descriptor types

use crate::schema::Schema;
use crate::types::JsonValue;

/// Content sub-kind served by the shared `/content` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Page,
    Blogpost,
}

impl ContentType {
    /// The value sent as the `type` query filter and stamped onto rows
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Page => "page",
            ContentType::Blogpost => "blogpost",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extractable collection exposed by the API
///
/// Descriptors are plain data values. The built-in descriptors live in
/// this module's `descriptors` submodule; nothing stops a host from
/// declaring its own.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Logical stream name
    pub name: &'static str,

    /// Request path relative to the API base URL
    pub path: &'static str,

    /// Primary key field(s)
    pub primary_keys: &'static [&'static str],

    /// Sub-resources to expand in responses
    pub expand: &'static [&'static str],

    /// Content sub-kind filter (pages and blogposts only)
    pub content_type: Option<ContentType>,

    /// Declared row schema
    pub schema: Schema,
}

impl Resource {
    /// Stamp the content discriminator onto a row
    ///
    /// The raw payload does not reliably echo the requested sub-kind, so
    /// content rows always get the descriptor's value. Rows of resources
    /// without a discriminator pass through untouched.
    pub fn post_process(&self, row: &mut JsonValue) {
        if let Some(content_type) = self.content_type {
            if let Some(object) = row.as_object_mut() {
                object.insert(
                    "type".to_string(),
                    JsonValue::String(content_type.as_str().to_string()),
                );
            }
        }
    }
}
