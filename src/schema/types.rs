//! Schema types

use indexmap::IndexMap;
use serde::Serialize;

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Integer,
    Boolean,
    Object,
    Array,
}

/// JSON Schema property definition
///
/// Properties are declared by hand per stream, not inferred. Nothing is
/// marked required: rows missing a declared field are tolerated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Property type
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Format hint (e.g., "date-time")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Nested properties (for objects), in declaration order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Property>>,

    /// Array items schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Property>>,
}

impl Property {
    /// Create a new property with the given type
    pub fn new(json_type: JsonType) -> Self {
        Self {
            json_type,
            format: None,
            properties: None,
            items: None,
        }
    }

    /// Create a string property
    pub fn string() -> Self {
        Self::new(JsonType::String)
    }

    /// Create an integer property
    pub fn integer() -> Self {
        Self::new(JsonType::Integer)
    }

    /// Create a boolean property
    pub fn boolean() -> Self {
        Self::new(JsonType::Boolean)
    }

    /// Create a timestamp property (string with the `date-time` format)
    pub fn timestamp() -> Self {
        Self::string().with_format("date-time")
    }

    /// Create an object property with nested properties
    pub fn object<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Property)>,
    {
        Self {
            json_type: JsonType::Object,
            format: None,
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, property)| (name.into(), property))
                    .collect(),
            ),
            items: None,
        }
    }

    /// Create an array property with a homogeneous item schema
    pub fn array(items: Property) -> Self {
        Self {
            json_type: JsonType::Array,
            format: None,
            properties: None,
            items: Some(Box::new(items)),
        }
    }

    /// Set format hint
    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }
}

/// Full JSON Schema document for one stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    /// Schema version
    #[serde(rename = "$schema")]
    pub schema: String,

    /// Schema type (always "object" at the top level)
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Top-level properties, in declaration order
    pub properties: IndexMap<String, Property>,

    /// Allow additional properties
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

impl Schema {
    /// Create a schema document from ordered properties
    pub fn new<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Property)>,
    {
        Self {
            schema: "http://json-schema.org/draft-07/schema#".to_string(),
            json_type: JsonType::Object,
            properties: properties
                .into_iter()
                .map(|(name, property)| (name.into(), property))
                .collect(),
            additional_properties: true,
        }
    }

    /// Get a property
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
