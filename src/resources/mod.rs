//! Resource descriptors for the Confluence Cloud REST API
//!
//! Each extractable collection is described by a [`Resource`] value:
//! name, request path, primary keys, expansions, optional content
//! sub-kind, and the declared row schema. The registry functions below
//! expose the five built-in collections in sync order.

mod descriptors;
mod types;

pub use descriptors::{blogposts, groups, pages, spaces, themes};
pub use types::{ContentType, Resource};

/// All built-in resources, in sync order
pub fn all() -> Vec<Resource> {
    vec![groups(), spaces(), themes(), pages(), blogposts()]
}

/// Look up a built-in resource by stream name
pub fn by_name(name: &str) -> Option<Resource> {
    all().into_iter().find(|resource| resource.name == name)
}
