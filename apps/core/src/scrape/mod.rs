//! # Scraper Module
//!
//! Retrieves a web page or a local file (PDF, DOCX, plain text) and
//! normalizes it to plain text plus metadata.
//!
//! ## Components
//! - `fetch`: HTTP client wrapper and payload classification
//! - `html`: HTML text/image extraction
//! - `pdf`: PDF text and Info-dictionary metadata extraction
//! - `text_extract`: extension-based dispatch for local files

pub mod fetch;
pub mod html;
pub mod pdf;
pub mod text_extract;

use std::path::Path;

use tokio::fs;
use tracing::{info, warn};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{DocumentMetadata, ImageInfo, PageContent, ScrapedDocument};
use fetch::Fetcher;

/// Image extensions we trust from a URL path; anything else is sniffed
/// from the response content type.
const KNOWN_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Main scraper: dispatches URLs and file paths to the right extractor.
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    fetcher: Fetcher,
}

impl Scraper {
    pub fn new() -> Self {
        Self {
            fetcher: Fetcher::new(),
        }
    }

    /// Run the full extraction for a source: an `http(s)://` URL or a path
    /// to a local file. When `images_dir` is given, images referenced by a
    /// web page are downloaded into it.
    pub async fn run(&self, source: &str, images_dir: Option<&Path>) -> Result<ScrapedDocument> {
        if source.starts_with("http://") || source.starts_with("https://") {
            self.scrape_url(source, images_dir).await
        } else {
            self.scrape_file(Path::new(source)).await
        }
    }

    /// Fetch and extract a URL. PDF payloads are detected and routed to the
    /// PDF extractor; everything else is treated as HTML.
    pub async fn scrape_url(
        &self,
        url: &str,
        images_dir: Option<&Path>,
    ) -> Result<ScrapedDocument> {
        info!("Processing URL: {}", url);
        let payload = self.fetcher.fetch(url).await?;

        if payload.is_pdf() {
            info!("Detected PDF payload at {}", payload.url);
            let mut doc = pdf::extract_from_bytes(&payload.body)?;
            doc.metadata.url = Some(url.to_string());
            doc.metadata.fetched_at = Some(chrono::Utc::now());
            return Ok(doc);
        }

        let base_url = Url::parse(url)?;
        let extraction = html::extract(&payload.body_text(), &base_url);

        let images = match images_dir {
            Some(dir) => self.download_images(&extraction.images, dir).await,
            None => vec![],
        };

        info!(
            "Extracted {} images and {} characters of text",
            images.len(),
            extraction.text.len()
        );

        Ok(ScrapedDocument {
            pages: vec![PageContent {
                page_num: 1,
                text: extraction.text.clone(),
                images: images.clone(),
            }],
            text: extraction.text,
            images,
            metadata: DocumentMetadata {
                title: extraction.title,
                url: Some(url.to_string()),
                fetched_at: Some(chrono::Utc::now()),
                ..Default::default()
            },
        })
    }

    /// Extract a local file through the extension-based dispatch.
    pub async fn scrape_file(&self, path: &Path) -> Result<ScrapedDocument> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::Validation(format!("Invalid file path: {}", path.display())))?
            .to_string();
        let data = fs::read(path).await?;
        text_extract::extract_from_file(&file_name, &data)
    }

    /// Download page images into `dir`. Individual failures are logged and
    /// skipped so one broken image never fails the scrape.
    async fn download_images(&self, refs: &[html::ImageRef], dir: &Path) -> Vec<ImageInfo> {
        if refs.is_empty() {
            return vec![];
        }
        if let Err(e) = fs::create_dir_all(dir).await {
            warn!("Could not create images directory {}: {}", dir.display(), e);
            return vec![];
        }

        let mut images = Vec::new();
        for (index, image_ref) in refs.iter().enumerate() {
            match self.download_image(image_ref, dir, index).await {
                Ok(info) => images.push(info),
                Err(e) => warn!("Error downloading image {}: {}", image_ref.url, e),
            }
        }
        images
    }

    async fn download_image(
        &self,
        image_ref: &html::ImageRef,
        dir: &Path,
        index: usize,
    ) -> Result<ImageInfo> {
        let payload = self.fetcher.fetch(&image_ref.url).await?;
        let extension = image_extension(&image_ref.url, payload.content_type.as_deref());

        let filename = format!("img{}.{}", index, extension);
        let path = dir.join(&filename);
        fs::write(&path, &payload.body).await?;

        Ok(ImageInfo {
            path: path.to_string_lossy().into_owned(),
            filename,
            extension,
            original_url: image_ref.url.clone(),
            alt_text: image_ref.alt_text.clone(),
        })
    }
}

/// Infer an image file extension from its URL, falling back to the response
/// content type, then to `"unknown"`.
fn image_extension(url: &str, content_type: Option<&str>) -> String {
    let from_url = url
        .rsplit('.')
        .next()
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    if KNOWN_IMAGE_EXTENSIONS.contains(&from_url.as_str()) {
        return from_url;
    }

    if let Some(ct) = content_type {
        for ext in ["jpeg", "jpg", "png", "gif", "webp", "svg"] {
            if ct.contains(ext) {
                return if ext == "jpeg" { "jpg".to_string() } else { ext.to_string() };
            }
        }
    }

    "unknown".to_string()
}
