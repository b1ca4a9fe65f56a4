//! HTTP client module
//!
//! Provides the authenticated client used for all Confluence requests.
//!
//! # Features
//!
//! - **Automatic Retries**: 429/5xx and transport errors retry with
//!   capped exponential backoff
//! - **Authentication**: Basic-auth header installed as a sensitive
//!   default header
//! - **JSON Decoding**: response bodies parsed into `serde_json::Value`

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
