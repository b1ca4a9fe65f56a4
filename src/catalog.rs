//! Stream discovery
//!
//! Builds the catalog of streams this source exposes. Discovery is pure
//! over the built-in resource registry and never touches the network.

use crate::resources;
use crate::types::{JsonValue, SyncMode};
use serde::{Deserialize, Serialize};

/// Discovered catalog (available streams)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Available streams
    pub streams: Vec<CatalogStream>,
}

/// Stream in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStream {
    /// Stream name
    pub name: String,

    /// JSON schema for the stream
    #[serde(default)]
    pub json_schema: JsonValue,

    /// Supported sync modes
    #[serde(default)]
    pub supported_sync_modes: Vec<SyncMode>,

    /// Source-defined primary key
    #[serde(default)]
    pub source_defined_primary_key: Option<Vec<Vec<String>>>,
}

/// Discover the streams this source exposes
pub fn discover() -> Catalog {
    let streams = resources::all()
        .iter()
        .map(|resource| CatalogStream {
            name: resource.name.to_string(),
            json_schema: resource.schema.to_json(),
            supported_sync_modes: vec![SyncMode::FullRefresh],
            source_defined_primary_key: Some(
                resource
                    .primary_keys
                    .iter()
                    .map(|key| vec![(*key).to_string()])
                    .collect(),
            ),
        })
        .collect();

    Catalog { streams }
}
