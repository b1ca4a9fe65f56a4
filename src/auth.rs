//! Authentication for the Confluence Cloud REST API
//!
//! Confluence Cloud accepts HTTP Basic authentication built from an
//! Atlassian account email and an API token.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Build the `Authorization` header value for Basic authentication
///
/// Encodes `email:api_token` with the standard (padded) base64 alphabet
/// and prefixes the result with `Basic `.
pub fn basic_auth_header(email: &str, api_token: &str) -> String {
    let credentials = STANDARD.encode(format!("{email}:{api_token}"));
    format!("Basic {credentials}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        assert_eq!(
            basic_auth_header("a@b.com", "tok"),
            "Basic YUBiLmNvbTp0b2s="
        );
    }

    #[test]
    fn test_header_decodes_to_credentials() {
        let header = basic_auth_header("user@example.com", "s3cr3t");
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(
            String::from_utf8(decoded).unwrap(),
            "user@example.com:s3cr3t"
        );
    }

    #[test]
    fn test_empty_token_still_encodes() {
        let header = basic_auth_header("user@example.com", "");
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "user@example.com:");
    }
}
