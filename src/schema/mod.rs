//! Declared stream schemas
//!
//! Provides the building blocks for declaring JSON schemas by hand:
//!
//! - **Typed Properties**: string, integer, boolean, timestamp
//! - **Nesting**: objects with ordered nested properties
//! - **Arrays**: homogeneous item schemas
//! - **Documents**: draft-07 schema documents with ordered properties
//!
//! Schemas declare the shape rows are expected to have; they are never
//! used to validate or reject rows.

mod types;

pub use types::{JsonType, Property, Schema};
