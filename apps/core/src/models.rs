use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata describing the source of a scraped document.
///
/// HTML sources fill `title` and `url`; PDF sources fill the Info-dictionary
/// fields and `page_count`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document or page title, empty when unavailable.
    #[serde(default)]
    pub title: String,
    /// Source URL for web documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// PDF author, when present in the Info dictionary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// PDF subject, when present in the Info dictionary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// PDF producer, when present in the Info dictionary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    /// Number of pages for PDF documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    /// When the document was fetched, for web documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

/// An image referenced by (and downloaded from) a scraped web page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Local path the image was saved to.
    pub path: String,
    /// File name component of `path`.
    pub filename: String,
    /// File extension inferred from the URL or the response content type.
    pub extension: String,
    /// Fully resolved URL the image was downloaded from.
    pub original_url: String,
    /// Alt text carried on the `<img>` element, empty when absent.
    pub alt_text: String,
}

/// Per-page slice of an extracted document.
///
/// HTML documents are represented as a single synthetic page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    pub page_num: usize,
    pub text: String,
    pub images: Vec<ImageInfo>,
}

/// Normalized output of the document fetcher: plain text plus metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapedDocument {
    /// Full extracted text of the document.
    pub text: String,
    /// Images downloaded from the document (HTML only).
    pub images: Vec<ImageInfo>,
    /// Source metadata.
    pub metadata: DocumentMetadata,
    /// Per-page breakdown of the extracted text.
    pub pages: Vec<PageContent>,
}

impl ScrapedDocument {
    /// True when no usable text was extracted.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
