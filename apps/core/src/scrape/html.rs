//! HTML content extraction.
//!
//! Parses a fetched page, strips script and style content, normalizes the
//! visible text and collects image references for downloading.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

// Static selectors compiled once. expect() is acceptable here: a failure
// means the literal selector itself is wrong, which is unrecoverable.
static NOISE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script, style").expect("Invalid selector: script/style"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("Invalid selector: title"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("Invalid selector: img"));

/// An `<img>` reference found in a page, with its `src` resolved against
/// the page URL.
#[derive(Debug, Clone)]
pub struct ImageRef {
    pub url: String,
    pub alt_text: String,
}

/// Result of extracting a single HTML page.
#[derive(Debug, Clone)]
pub struct HtmlExtraction {
    pub title: String,
    pub text: String,
    pub images: Vec<ImageRef>,
}

/// Extract title, visible text and image references from an HTML document.
pub fn extract(html: &str, base_url: &Url) -> HtmlExtraction {
    let mut document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let images = document
        .select(&IMG_SELECTOR)
        .filter_map(|el| {
            let src = el.value().attr("src")?;
            if src.is_empty() {
                return None;
            }
            let resolved = base_url.join(src).ok()?;
            Some(ImageRef {
                url: resolved.to_string(),
                alt_text: el.value().attr("alt").unwrap_or_default().to_string(),
            })
        })
        .collect();

    // Detach script/style subtrees so their text does not leak into the
    // extracted content.
    let noise_ids: Vec<_> = document.select(&NOISE_SELECTOR).map(|el| el.id()).collect();
    for id in noise_ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }

    let raw_text = document
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join("\n");

    HtmlExtraction {
        title,
        text: normalize_text(&raw_text),
        images,
    }
}

/// Normalize extracted text: trim lines, break on double-space runs, drop
/// empty chunks and join with newlines.
fn normalize_text(text: &str) -> String {
    text.lines()
        .flat_map(|line| line.trim().split("  "))
        .map(|chunk| chunk.trim())
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/articles/page.html").unwrap()
    }

    #[test]
    fn test_basic_extraction() {
        let html = "<html><head><title>Health Info</title></head>\
                    <body><h1>Heading</h1><p>Some body text.</p></body></html>";
        let result = extract(html, &base());
        assert_eq!(result.title, "Health Info");
        assert!(result.text.contains("Heading"));
        assert!(result.text.contains("Some body text."));
    }

    #[test]
    fn test_script_and_style_stripped() {
        let html = "<html><body><p>visible</p>\
                    <script>var hidden = 'secret';</script>\
                    <style>.x { color: red; }</style></body></html>";
        let result = extract(html, &base());
        assert!(result.text.contains("visible"));
        assert!(!result.text.contains("secret"));
        assert!(!result.text.contains("color"));
    }

    #[test]
    fn test_image_refs_resolved_against_base() {
        let html = r#"<html><body>
            <img src="/img/chart.png" alt="Risk chart">
            <img src="photo.jpg">
            <img src="https://cdn.example.org/pic.gif" alt="">
            <img src="" alt="skipped">
        </body></html>"#;
        let result = extract(html, &base());
        assert_eq!(result.images.len(), 3);
        assert_eq!(result.images[0].url, "https://example.com/img/chart.png");
        assert_eq!(result.images[0].alt_text, "Risk chart");
        assert_eq!(result.images[1].url, "https://example.com/articles/photo.jpg");
        assert_eq!(result.images[2].url, "https://cdn.example.org/pic.gif");
    }

    #[test]
    fn test_text_normalization() {
        let html = "<html><body><p>  spaced   out  </p><p></p><p>next</p></body></html>";
        let result = extract(html, &base());
        assert!(!result.text.contains("  "));
        assert!(result.text.contains("next"));
    }

    #[test]
    fn test_missing_title() {
        let html = "<html><body><p>no title</p></body></html>";
        let result = extract(html, &base());
        assert_eq!(result.title, "");
    }
}
