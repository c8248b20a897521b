//! Product page scraper
//!
//! This module contains the scraping pipeline, including:
//! - HTTP fetching with a static header set
//! - Field and image extraction from the page markup
//! - Writing the text dump and downloaded images to disk

mod extractor;
mod fetcher;
mod persister;

pub use extractor::{
    collect_image_sources, extract_product, parse_document, parse_product_page, ImageSource,
    ParsedProductPage, ProductSelectors,
};
pub use fetcher::{build_http_client, fetch_bytes, fetch_page, FetchedPage};
pub use persister::{download_images, format_product_text, image_filename, write_product_text};

use crate::config::Config;
use crate::ScrapeError;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// The three text fields scraped from a product page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapedProduct {
    pub title: String,
    pub price: String,
    pub description: String,
}

impl ScrapedProduct {
    /// Fields as `(key, value)` pairs in output order
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("title", self.title.as_str()),
            ("price", self.price.as_str()),
            ("description", self.description.as_str()),
        ]
    }
}

/// An image downloaded from the page
#[derive(Debug, Clone)]
pub struct ImageAsset {
    /// Absolute URL the image was fetched from
    pub source_url: String,

    /// File name inside the output directory
    pub local_filename: String,

    /// Raw image content as served
    pub bytes: Vec<u8>,
}

/// Outcome of a scrape run
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub product: ScrapedProduct,
    pub text_path: PathBuf,
    pub images: Vec<ImageAsset>,
}

/// Runs a complete scrape of one product page
///
/// This is the main entry point of the scraper. It will:
/// 1. Fetch the page with the configured headers
/// 2. Extract the title, price and description
/// 3. Create the output directory and write the fields to the product text file
/// 4. Download every image on the page, skipping failures
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `url` - The product page URL
/// * `out_dir` - Directory receiving the text file and images
///
/// # Returns
///
/// * `Ok(ScrapeReport)` - The extracted fields and saved images
/// * `Err(ScrapeError)` - The page could not be fetched or results not written
pub async fn scrape_product(
    config: &Config,
    url: &str,
    out_dir: &Path,
) -> Result<ScrapeReport, ScrapeError> {
    let page_url = Url::parse(url)?;
    let selectors = ProductSelectors::from_config(&config.selectors)?;
    let client = build_http_client(&config.http)?;

    tracing::info!("Fetching product page: {}", page_url);
    let page = fetch_page(&client, &page_url).await?;

    // Relative sources resolve against the requested URL, not the post-redirect one
    let parsed = parse_product_page(&page.body, &page_url, &selectors);
    tracing::info!(
        "Extracted product fields (title: {} chars, {} image tags with a source)",
        parsed.product.title.len(),
        parsed.images.len()
    );

    fs::create_dir_all(out_dir)?;
    let text_path = write_product_text(out_dir, &config.scrape.product_file, &parsed.product)?;
    tracing::info!("Saved text fields to {}", text_path.display());

    let images = download_images(
        &client,
        out_dir,
        &parsed.images,
        &config.scrape.default_image_extension,
    )
    .await?;
    tracing::info!(
        "Downloaded {} of {} images to {}",
        images.len(),
        parsed.images.len(),
        out_dir.display()
    );

    Ok(ScrapeReport {
        product: parsed.product,
        text_path,
        images,
    })
}
