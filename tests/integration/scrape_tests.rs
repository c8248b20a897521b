//! End-to-end scrape tests
//!
//! These tests use wiremock to serve a product page and its images, then run
//! the full scrape pipeline against a temporary output directory.

use std::fs;
use tempfile::TempDir;
use toko_scout::config::{Config, DEFAULT_USER_AGENT};
use toko_scout::product::{build_http_client, fetch_bytes};
use toko_scout::{scrape_product, ScrapeError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
const JPEG_BYTES: &[u8] = &[0xff, 0xd8, 0xff, 0xe0, 4, 5, 6];

fn product_page(image_host: &str) -> String {
    format!(
        r#"<html><head><title>Kopi</title></head><body>
        <h1 data-testid="lblPDPDetailProductName"> Kopi Arabika Gayo 250g </h1>
        <div data-testid="lblPDPDetailProductPrice">Rp<span>85.000</span></div>
        <div data-testid="lblPDPDescriptionProduk">
            Biji kopi pilihan.<br>Roasting medium.
        </div>
        <img src="/images/front.png">
        <img alt="lazy placeholder">
        <img src="{}/cdn/back">
        <img src="/images/missing.webp">
        </body></html>"#,
        image_host
    )
}

#[tokio::test]
async fn test_full_scrape_writes_text_and_images() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/shop/kopi-gayo"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(product_page(&base_url))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/front.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_BYTES.to_vec()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/cdn/back"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES.to_vec()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/images/missing.webp"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp.path().join("downloads");

    let report = scrape_product(
        &Config::default(),
        &format!("{}/shop/kopi-gayo", base_url),
        &out_dir,
    )
    .await
    .expect("Scrape failed");

    assert_eq!(report.product.title, "Kopi Arabika Gayo 250g");
    assert_eq!(report.product.price, "Rp85.000");
    assert_eq!(
        report.product.description,
        "Biji kopi pilihan. Roasting medium."
    );

    let text = fs::read_to_string(out_dir.join("product.txt")).expect("Missing product.txt");
    assert_eq!(
        text,
        "title: Kopi Arabika Gayo 250g\nprice: Rp85.000\ndescription: Biji kopi pilihan. Roasting medium.\n"
    );
    assert_eq!(report.text_path, out_dir.join("product.txt"));

    // The 404 image is skipped; numbering follows <img> position on the page
    let names: Vec<&str> = report
        .images
        .iter()
        .map(|asset| asset.local_filename.as_str())
        .collect();
    assert_eq!(names, vec!["image_1.png", "image_3.jpg"]);

    assert_eq!(fs::read(out_dir.join("image_1.png")).unwrap(), PNG_BYTES);
    assert_eq!(fs::read(out_dir.join("image_3.jpg")).unwrap(), JPEG_BYTES);
    assert!(!out_dir.join("image_4.webp").exists());
    assert_eq!(
        report.images[1].source_url,
        format!("{}/cdn/back", base_url)
    );
}

#[tokio::test]
async fn test_missing_fields_are_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>Produk tidak ditemukan</p></body></html>"),
        )
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let report = scrape_product(&Config::default(), &format!("{}/", mock_server.uri()), temp.path())
        .await
        .expect("Scrape failed");

    assert_eq!(report.product.title, "");
    assert!(report.images.is_empty());
    let text = fs::read_to_string(temp.path().join("product.txt")).unwrap();
    assert_eq!(text, "title: \nprice: \ndescription: \n");
}

#[tokio::test]
async fn test_page_error_aborts_scrape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("downloads");
    let result = scrape_product(
        &Config::default(),
        &format!("{}/gone", mock_server.uri()),
        &out_dir,
    )
    .await;

    assert!(matches!(result, Err(ScrapeError::Status { status: 500, .. })));
    assert!(!out_dir.exists());
}

#[tokio::test]
async fn test_unreachable_image_is_skipped() {
    // Reserve a port, then release it so nothing is listening there
    let closed_port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let mock_server = MockServer::start().await;
    let page = format!(
        r#"<img src="http://127.0.0.1:{}/offline.png"><img src="/online.gif">"#,
        closed_port
    );

    Mock::given(method("GET"))
        .and(path("/p"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/online.gif"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let report = scrape_product(
        &Config::default(),
        &format!("{}/p", mock_server.uri()),
        temp.path(),
    )
    .await
    .expect("Scrape failed");

    assert_eq!(report.images.len(), 1);
    assert_eq!(report.images[0].local_filename, "image_2.gif");
    assert!(!temp.path().join("image_1.png").exists());

    // The skipped image failed at the transport level, not with a status code
    let client = build_http_client(&Config::default().http).unwrap();
    let offline = url::Url::parse(&format!("http://127.0.0.1:{}/offline.png", closed_port)).unwrap();
    assert!(matches!(
        fetch_bytes(&client, &offline).await,
        Err(ScrapeError::Http { .. })
    ));
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let temp = TempDir::new().unwrap();
    let result = scrape_product(&Config::default(), "not a url", temp.path()).await;
    assert!(matches!(result, Err(ScrapeError::UrlParse(_))));
}

#[tokio::test]
async fn test_configured_headers_and_output_names() {
    let mock_server = MockServer::start().await;

    let mut config = Config::default();
    config.http.user_agent = "TestAgent/2.0".to_string();
    config
        .http
        .headers
        .insert("Accept-Language".to_string(), "id-ID".to_string());
    config.scrape.product_file = "fields.txt".to_string();
    config.scrape.default_image_extension = ".bin".to_string();

    Mock::given(method("GET"))
        .and(path("/p"))
        .and(header("user-agent", "TestAgent/2.0"))
        .and(header("accept-language", "id-ID"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"<img src="/raw">"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/raw"))
        .and(header("user-agent", "TestAgent/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8, 8, 9]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let temp = TempDir::new().unwrap();
    let report = scrape_product(&config, &format!("{}/p", mock_server.uri()), temp.path())
        .await
        .expect("Scrape failed");

    assert!(temp.path().join("fields.txt").exists());
    assert_eq!(report.images.len(), 1);
    assert_eq!(report.images[0].local_filename, "image_1.bin");
    assert_eq!(report.images[0].bytes, vec![7u8, 8, 9]);
}
