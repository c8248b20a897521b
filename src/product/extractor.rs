//! HTML extraction for product pages
//!
//! This module pulls two things out of a parsed product page:
//! - The title, price and description text, via configurable CSS selectors
//! - Every `<img>` source, resolved against the page URL

use crate::config::{check_selector, SelectorConfig};
use crate::product::ScrapedProduct;
use crate::ConfigError;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Compiled selectors for the three product fields
#[derive(Debug, Clone)]
pub struct ProductSelectors {
    title: Selector,
    price: Selector,
    description: Selector,
}

impl ProductSelectors {
    /// Compiles the configured selectors
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            title: check_selector("title", &config.title)?,
            price: check_selector("price", &config.price)?,
            description: check_selector("description", &config.description)?,
        })
    }
}

/// An image reference found on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    /// 1-based position among all `<img>` tags of the page
    pub ordinal: usize,

    /// Absolute image URL
    pub url: Url,
}

/// Everything a scrape run needs from the page markup
#[derive(Debug, Clone)]
pub struct ParsedProductPage {
    pub product: ScrapedProduct,
    pub images: Vec<ImageSource>,
}

/// Parses product page markup once and extracts the fields and image sources
///
/// # Example
///
/// ```no_run
/// use toko_scout::config::SelectorConfig;
/// use toko_scout::product::{parse_product_page, ProductSelectors};
/// use url::Url;
///
/// let selectors = ProductSelectors::from_config(&SelectorConfig::default()).unwrap();
/// let html = r#"<h1 data-testid="lblPDPDetailProductName">Kopi</h1><img src="/a.png">"#;
/// let page_url = Url::parse("https://www.tokopedia.com/shop/kopi").unwrap();
/// let parsed = parse_product_page(html, &page_url, &selectors);
/// assert_eq!(parsed.product.title, "Kopi");
/// ```
pub fn parse_product_page(html: &str, page_url: &Url, selectors: &ProductSelectors) -> ParsedProductPage {
    let document = parse_document(html);

    ParsedProductPage {
        product: extract_product(&document, selectors),
        images: collect_image_sources(&document, page_url),
    }
}

/// Parses a full document with scripting disabled
///
/// With scripting on, `<noscript>` content stays raw text and the `<img>`
/// tags of lazy-loading pages inside it would be invisible to selectors.
pub fn parse_document(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    html5ever::parse_document(Html::new_document(), opts).one(html)
}

/// Extracts the product fields; absent elements yield empty strings
pub fn extract_product(document: &Html, selectors: &ProductSelectors) -> ScrapedProduct {
    ScrapedProduct {
        title: select_text(document, &selectors.title, ""),
        price: select_text(document, &selectors.price, ""),
        description: select_text(document, &selectors.description, " "),
    }
}

/// Text of the first element matching `selector`, or an empty string
fn select_text(document: &Html, selector: &Selector, separator: &str) -> String {
    document
        .select(selector)
        .next()
        .map(|element| element_text(element, separator))
        .unwrap_or_default()
}

/// Joins the trimmed, non-empty text nodes under `element`
fn element_text(element: ElementRef<'_>, separator: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Collects every `<img src>` on the page as an absolute URL
///
/// Ordinals count all `<img>` tags, so a tag without `src` still consumes a
/// number. Empty and unresolvable sources are skipped.
pub fn collect_image_sources(document: &Html, page_url: &Url) -> Vec<ImageSource> {
    let Ok(img_selector) = Selector::parse("img") else {
        return Vec::new();
    };

    document
        .select(&img_selector)
        .enumerate()
        .filter_map(|(index, element)| {
            let src = element.value().attr("src")?.trim();
            if src.is_empty() {
                return None;
            }

            match page_url.join(src) {
                Ok(url) => Some(ImageSource {
                    ordinal: index + 1,
                    url,
                }),
                Err(e) => {
                    tracing::debug!("Skipping unresolvable image source '{}': {}", src, e);
                    None
                }
            }
        })
        .collect()
}
