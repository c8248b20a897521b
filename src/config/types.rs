use serde::Deserialize;
use std::collections::BTreeMap;

/// Desktop browser user agent so the store serves its normal product page
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Main configuration structure for Toko-Scout
///
/// Every section is optional; missing keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub scrape: ScrapeConfig,
    pub selectors: SelectorConfig,
    pub icons: IconConfig,
}

/// Static request settings shared by every request of a scrape run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Additional static headers
    pub headers: BTreeMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
            headers: BTreeMap::new(),
        }
    }
}

/// Where and how scrape results are written
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// Directory receiving the text dump and images
    #[serde(rename = "output-dir")]
    pub output_dir: String,

    /// File name of the `key: value` text dump inside the output directory
    #[serde(rename = "product-file")]
    pub product_file: String,

    /// Extension used when an image URL path has none
    #[serde(rename = "default-image-extension")]
    pub default_image_extension: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            output_dir: "downloads".to_string(),
            product_file: "product.txt".to_string(),
            default_image_extension: ".jpg".to_string(),
        }
    }
}

/// CSS selectors for the three extracted fields
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub title: String,
    pub price: String,
    pub description: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: "h1[data-testid='lblPDPDetailProductName']".to_string(),
            price: "div[data-testid='lblPDPDetailProductPrice']".to_string(),
            description: "div[data-testid='lblPDPDescriptionProduk']".to_string(),
        }
    }
}

/// Icon generator settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Extension asset folder the icons are written to
    #[serde(rename = "output-dir")]
    pub output_dir: String,

    /// Square pixel sizes to generate
    pub sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            output_dir: "chrome-extension/icons".to_string(),
            sizes: vec![16, 48, 128],
        }
    }
}
