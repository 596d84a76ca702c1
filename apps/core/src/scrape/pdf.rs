//! PDF text and metadata extraction.
//!
//! Text comes from `pdf-extract`; document metadata (title, author, page
//! count, ...) is read from the Info dictionary via `lopdf`. Image
//! extraction from PDFs is not supported.

use lopdf::{Dictionary, Document, Object};
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::models::{DocumentMetadata, PageContent, ScrapedDocument};

/// Extract text and metadata from an in-memory PDF.
pub fn extract_from_bytes(data: &[u8]) -> Result<ScrapedDocument> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::Extraction(format!("Failed to extract PDF text: {}", e)))?;
    let text = clean_extracted_text(&text);
    info!("Extracted {} characters of text from PDF", text.len());

    // Metadata is best-effort: a broken Info dictionary should not fail
    // the extraction.
    let metadata = match read_metadata(data) {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Could not read PDF metadata: {}", e);
            DocumentMetadata::default()
        }
    };

    let pages = vec![PageContent {
        page_num: 1,
        text: text.clone(),
        images: vec![],
    }];

    Ok(ScrapedDocument {
        text,
        images: vec![],
        metadata,
        pages,
    })
}

fn read_metadata(data: &[u8]) -> Result<DocumentMetadata> {
    let doc = Document::load_mem(data)?;
    let page_count = doc.get_pages().len();

    let mut metadata = DocumentMetadata {
        page_count: Some(page_count),
        ..Default::default()
    };

    if let Some(info) = info_dictionary(&doc) {
        metadata.title = info_string(&doc, info, b"Title").unwrap_or_default();
        metadata.author = info_string(&doc, info, b"Author");
        metadata.subject = info_string(&doc, info, b"Subject");
        metadata.producer = info_string(&doc, info, b"Producer");
    }

    Ok(metadata)
}

/// Resolve the trailer's Info entry to its dictionary, if any.
fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    let object = match info {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    object.as_dict().ok()
}

/// Read one text field from the Info dictionary.
fn info_string(doc: &Document, info: &Dictionary, key: &[u8]) -> Option<String> {
    let object = match info.get(key).ok()? {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    let bytes = object.as_str().ok()?;
    let value = String::from_utf8_lossy(bytes).trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Clean up extracted text: trim lines and drop empty ones.
pub fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_extracted_text() {
        let dirty = "  Line 1  \n\n  Line 2  \n   \n  Line 3  ";
        assert_eq!(clean_extracted_text(dirty), "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn test_invalid_pdf_is_an_extraction_error() {
        let result = extract_from_bytes(b"not a pdf at all");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
