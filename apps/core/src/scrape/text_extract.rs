//! Text extraction for local files.
//! Supports: TXT, MD, CSV, JSON, PDF, DOCX

use std::path::Path;

use tracing::info;

use super::pdf;
use crate::error::{AppError, Result};
use crate::models::{PageContent, ScrapedDocument};

/// Extract a document from binary file data based on file extension.
pub fn extract_from_file(file_name: &str, file_data: &[u8]) -> Result<ScrapedDocument> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    info!("Extracting text from file: {} (type: {})", file_name, extension);

    match extension.as_str() {
        // Plain text formats - direct UTF-8 conversion
        "txt" | "md" | "csv" | "json" => {
            let text = String::from_utf8(file_data.to_vec())
                .map_err(|e| AppError::Extraction(format!("Invalid UTF-8 content: {}", e)))?;
            Ok(plain_document(text))
        }

        "pdf" => pdf::extract_from_bytes(file_data),

        "docx" | "doc" => extract_docx(file_data).map(plain_document),

        _ => Err(AppError::Extraction(format!(
            "Unsupported file extension: {}",
            extension
        ))),
    }
}

/// Wrap raw text in the single-page document shape.
fn plain_document(text: String) -> ScrapedDocument {
    ScrapedDocument {
        pages: vec![PageContent {
            page_num: 1,
            text: text.clone(),
            images: vec![],
        }],
        text,
        ..Default::default()
    }
}

/// Extract paragraph text from a DOCX file.
fn extract_docx(file_data: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(file_data)
        .map_err(|e| AppError::Extraction(format!("Failed to extract DOCX text: {}", e)))?;

    let mut text_parts: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let para_text: String = para
                .children
                .iter()
                .filter_map(|pc| {
                    if let docx_rs::ParagraphChild::Run(run) = pc {
                        Some(
                            run.children
                                .iter()
                                .filter_map(|rc| {
                                    if let docx_rs::RunChild::Text(t) = rc {
                                        Some(t.text.clone())
                                    } else {
                                        None
                                    }
                                })
                                .collect::<Vec<_>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect::<Vec<_>>()
                .join("");

            if !para_text.trim().is_empty() {
                text_parts.push(para_text);
            }
        }
    }

    let text = pdf::clean_extracted_text(&text_parts.join("\n"));
    info!("DOCX extraction successful: {} characters", text.len());
    Ok(text)
}
