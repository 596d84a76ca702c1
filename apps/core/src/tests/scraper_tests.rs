#![cfg(test)]

use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::AppError;
use crate::scrape::Scraper;

const ARTICLE_HTML: &str = r#"<html>
<head><title>Flu Shots</title><style>body { color: black; }</style></head>
<body>
<script>trackVisit();</script>
<h1>Should you get a flu shot?</h1>
<p>About 8% of people catch the flu each season.</p>
<img src="/static/chart.png" alt="Infection chart">
</body>
</html>"#;

async fn mock_article_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .set_body_string(ARTICLE_HTML),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/static/chart.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "image/png")
                .set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn scrape_url_extracts_text_and_metadata() {
    let server = mock_article_server().await;
    let url = format!("{}/article", server.uri());

    let doc = Scraper::new().run(&url, None).await.unwrap();

    assert_eq!(doc.metadata.title, "Flu Shots");
    assert_eq!(doc.metadata.url.as_deref(), Some(url.as_str()));
    assert!(doc.text.contains("flu shot"));
    assert!(doc.text.contains("8% of people"));
    // Script and style content must not leak.
    assert!(!doc.text.contains("trackVisit"));
    assert!(!doc.text.contains("color"));
    // No images dir given, so nothing was downloaded.
    assert!(doc.images.is_empty());
    assert_eq!(doc.pages.len(), 1);
}

#[tokio::test]
async fn scrape_url_downloads_images() {
    let server = mock_article_server().await;
    let url = format!("{}/article", server.uri());
    let dir = tempdir().unwrap();
    let images_dir = dir.path().join("images");

    let doc = Scraper::new().run(&url, Some(&images_dir)).await.unwrap();

    assert_eq!(doc.images.len(), 1);
    let image = &doc.images[0];
    assert_eq!(image.filename, "img0.png");
    assert_eq!(image.extension, "png");
    assert_eq!(image.alt_text, "Infection chart");
    assert!(image.original_url.ends_with("/static/chart.png"));
    assert!(std::path::Path::new(&image.path).exists());
}

#[tokio::test]
async fn broken_image_does_not_fail_the_scrape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string(r#"<html><body><p>text</p><img src="/missing.png"></body></html>"#),
        )
        .mount(&server)
        .await;

    let url = format!("{}/page", server.uri());
    let dir = tempdir().unwrap();
    let doc = Scraper::new()
        .run(&url, Some(&dir.path().join("images")))
        .await
        .unwrap();

    assert!(doc.text.contains("text"));
    assert!(doc.images.is_empty());
}

#[tokio::test]
async fn http_error_status_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/gone", server.uri());
    let result = Scraper::new().run(&url, None).await;
    assert!(matches!(result, Err(AppError::Fetch(_))));
}

#[tokio::test]
async fn pdf_content_type_routes_to_pdf_extractor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/doc.pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/pdf")
                .set_body_bytes(b"definitely not a pdf".to_vec()),
        )
        .mount(&server)
        .await;

    let url = format!("{}/doc.pdf", server.uri());
    let result = Scraper::new().run(&url, None).await;
    // Routed to the PDF extractor, which rejects the bogus payload.
    assert!(matches!(result, Err(AppError::Extraction(_))));
}

#[tokio::test]
async fn scrape_local_text_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("note.txt");
    std::fs::write(&file, "Take 2 in 10 seriously.").unwrap();

    let doc = Scraper::new()
        .run(file.to_str().unwrap(), None)
        .await
        .unwrap();
    assert_eq!(doc.text, "Take 2 in 10 seriously.");
}
