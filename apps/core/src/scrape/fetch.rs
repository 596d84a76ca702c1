//! HTTP fetching.
//!
//! Thin wrapper around a shared `reqwest` client: fetches pages and images,
//! and classifies payloads (HTML vs PDF) by content type or magic bytes.

use reqwest::Client;
use tracing::info;

use crate::error::{AppError, Result};

/// A fetched HTTP payload with enough metadata to classify it.
#[derive(Debug, Clone)]
pub struct FetchedPayload {
    /// The URL that was requested.
    pub url: String,
    /// Raw response body.
    pub body: Vec<u8>,
    /// `Content-Type` header, when the server sent one.
    pub content_type: Option<String>,
}

impl FetchedPayload {
    /// True when the payload looks like a PDF, by header or magic bytes.
    pub fn is_pdf(&self) -> bool {
        if let Some(ct) = &self.content_type {
            if ct.contains("application/pdf") {
                return true;
            }
        }
        infer::get(&self.body)
            .map(|kind| kind.mime_type() == "application/pdf")
            .unwrap_or(false)
    }

    /// Body decoded as (lossy) UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP fetcher shared across requests.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch a URL, propagating non-2xx statuses as errors.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPayload> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status().map_err(|e| {
            AppError::Fetch(format!("Request to {} failed: {}", url, e))
        })?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.bytes().await?.to_vec();
        info!("Fetched {} bytes from {}", body.len(), url);

        Ok(FetchedPayload {
            url: url.to_string(),
            body,
            content_type,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_detection_by_content_type() {
        let payload = FetchedPayload {
            url: "http://example.com/doc".to_string(),
            body: b"whatever".to_vec(),
            content_type: Some("application/pdf".to_string()),
        };
        assert!(payload.is_pdf());
    }

    #[test]
    fn test_pdf_detection_by_magic_bytes() {
        let payload = FetchedPayload {
            url: "http://example.com/doc".to_string(),
            body: b"%PDF-1.7 rest of file".to_vec(),
            content_type: Some("application/octet-stream".to_string()),
        };
        assert!(payload.is_pdf());
    }

    #[test]
    fn test_html_is_not_pdf() {
        let payload = FetchedPayload {
            url: "http://example.com/".to_string(),
            body: b"<html><body>hi</body></html>".to_vec(),
            content_type: Some("text/html; charset=utf-8".to_string()),
        };
        assert!(!payload.is_pdf());
    }
}
