//! Sync engine module
//!
//! Main extraction loop and stream orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SyncEngine` - Drives paginated extraction for each resource
//! - `Message` - Schema and record output messages
//! - `SyncStats` - Accounting for records, pages, and streams
//! - `CheckResult` - Outcome of a connection check

mod types;

pub use types::{CheckResult, Message, SyncStats};

use crate::config::ConnectorConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{next_cursor, parse_records, OffsetPager};
use crate::resources::{self, Resource};
use std::time::Instant;
use tracing::{debug, info};

/// Sync engine for orchestrating data extraction
///
/// Every stream is synced as a full refresh: the schema message goes out
/// first, then one record message per row, page by page, until the offset
/// cursor runs out.
pub struct SyncEngine {
    /// HTTP client
    client: HttpClient,
    /// Page size for paginated requests
    page_size: u64,
    /// Statistics
    stats: SyncStats,
}

impl SyncEngine {
    /// Create a new sync engine from a connector configuration
    ///
    /// Validates the configuration and builds an HTTP client with the
    /// default timeout and retry policy.
    pub fn new(config: &ConnectorConfig) -> Result<Self> {
        config.validate()?;
        let http_config = HttpClientConfig::new(&config.base_url);
        let client = HttpClient::new(http_config, &config.email, &config.api_token)?;
        Ok(Self {
            client,
            page_size: config.page_size,
            stats: SyncStats::default(),
        })
    }

    /// Create a sync engine from an existing HTTP client
    pub fn with_client(client: HttpClient, page_size: u64) -> Self {
        Self {
            client,
            page_size,
            stats: SyncStats::default(),
        }
    }

    /// Get statistics
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Reset statistics
    pub fn reset_stats(&mut self) {
        self.stats = SyncStats::default();
    }

    /// Sync a single resource
    ///
    /// Returns the schema message followed by every record, in the order
    /// the API returned them. Content resources get a `type` filter on the
    /// request and a `type` stamp on each row.
    pub async fn sync_stream(&mut self, resource: &Resource) -> Result<Vec<Message>> {
        let start = Instant::now();
        let mut messages = Vec::new();

        messages.push(Message::schema(
            resource.name,
            resource.schema.to_json(),
            resource
                .primary_keys
                .iter()
                .map(|key| (*key).to_string())
                .collect(),
        ));

        let pager = OffsetPager::for_resource(resource, self.page_size);
        let mut cursor = None;
        let mut page_count = 0;
        let mut record_count = 0;

        loop {
            let mut params = pager.request_params(cursor);
            if let Some(content_type) = resource.content_type {
                params.insert("type".to_string(), content_type.as_str().to_string());
            }

            let body = self.client.get_json(resource.path, &params).await?;
            let rows = parse_records(&body)?;

            page_count += 1;
            record_count += rows.len();
            self.stats.add_page();
            self.stats.add_records(rows.len());

            debug!(
                "Page {page_count}: fetched {} records from {}",
                rows.len(),
                resource.name
            );

            for mut row in rows {
                resource.post_process(&mut row);
                messages.push(Message::record(resource.name, row));
            }

            cursor = next_cursor(&body, cursor)?;
            if cursor.is_none() {
                break;
            }
        }

        self.stats.add_stream();
        #[allow(clippy::cast_possible_truncation)]
        self.stats.set_duration(start.elapsed().as_millis() as u64);

        info!(
            "Completed sync for {}: {record_count} records in {page_count} pages",
            resource.name
        );

        Ok(messages)
    }

    /// Sync every known resource, in registry order
    pub async fn sync_all(&mut self) -> Result<Vec<Message>> {
        let mut messages = Vec::new();
        for resource in resources::all() {
            messages.extend(self.sync_stream(&resource).await?);
        }
        Ok(messages)
    }

    /// Sync only the named streams
    ///
    /// All names are resolved before any request goes out, so an unknown
    /// stream fails the whole call without partial output.
    pub async fn sync_selected(&mut self, names: &[&str]) -> Result<Vec<Message>> {
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let resource =
                resources::by_name(name).ok_or_else(|| Error::stream_not_found(*name))?;
            selected.push(resource);
        }

        let mut messages = Vec::new();
        for resource in &selected {
            messages.extend(self.sync_stream(resource).await?);
        }
        Ok(messages)
    }

    /// Test connectivity and credentials with a minimal request
    ///
    /// Fetches a single space and reports authentication failures in a
    /// human-readable message instead of an error.
    pub async fn check(&self) -> CheckResult {
        let params = OffsetPager::new(1).request_params(None);
        match self.client.get_json("/space", &params).await {
            Ok(body) if body.get("results").is_some() => CheckResult::success(),
            Ok(_) => CheckResult::failure("response from /space is missing 'results'"),
            Err(Error::HttpStatus {
                status: status @ (401 | 403),
                ..
            }) => CheckResult::failure(format!("authentication failed with status {status}")),
            Err(e) => CheckResult::failure(e.to_string()),
        }
    }
}
