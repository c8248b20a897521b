//! Writes scrape results to the output directory
//!
//! Both writers overwrite existing files, so re-running a scrape into the
//! same directory replaces the previous results.

use crate::product::extractor::ImageSource;
use crate::product::fetcher::fetch_bytes;
use crate::product::{ImageAsset, ScrapedProduct};
use crate::ScrapeError;
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Writes the product fields as `key: value` lines
///
/// # Arguments
///
/// * `dir` - Output directory (must exist)
/// * `file_name` - Name of the text file inside `dir`
/// * `product` - The extracted fields
///
/// # Returns
///
/// The path of the written file
pub fn write_product_text(
    dir: &Path,
    file_name: &str,
    product: &ScrapedProduct,
) -> std::io::Result<PathBuf> {
    let path = dir.join(file_name);
    fs::write(&path, format_product_text(product))?;
    Ok(path)
}

/// Formats the product fields in title, price, description order
pub fn format_product_text(product: &ScrapedProduct) -> String {
    product
        .fields()
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key, value))
        .collect()
}

/// Local file name for the image with the given ordinal
///
/// The extension comes from the last segment of the URL path; `default_ext`
/// is used when that segment has none.
pub fn image_filename(ordinal: usize, url: &Url, default_ext: &str) -> String {
    let ext = path_extension(url.path()).unwrap_or(default_ext);
    format!("image_{}{}", ordinal, ext)
}

/// Extension (with the dot) of the last path segment
///
/// Leading dots of the segment don't start an extension, so `/.hidden` has none.
fn path_extension(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let dot = segment.rfind('.')?;
    if segment[..dot].chars().all(|c| c == '.') {
        return None;
    }
    Some(&segment[dot..])
}

/// Downloads every image source into `dir`, one request at a time
///
/// A failed fetch skips that image only. Failing to write a fetched image
/// aborts the run.
pub async fn download_images(
    client: &Client,
    dir: &Path,
    sources: &[ImageSource],
    default_ext: &str,
) -> Result<Vec<ImageAsset>, ScrapeError> {
    let mut assets = Vec::with_capacity(sources.len());

    for source in sources {
        let bytes = match fetch_bytes(client, &source.url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Skipping image {}: {}", source.ordinal, e);
                continue;
            }
        };

        let local_filename = image_filename(source.ordinal, &source.url, default_ext);
        fs::write(dir.join(&local_filename), &bytes)?;
        tracing::debug!(
            "Saved {} ({} bytes) from {}",
            local_filename,
            bytes.len(),
            source.url
        );

        assets.push(ImageAsset {
            source_url: source.url.to_string(),
            local_filename,
            bytes,
        });
    }

    Ok(assets)
}
