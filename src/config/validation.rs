use crate::config::types::{Config, HttpConfig, IconConfig, ScrapeConfig, SelectorConfig};
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use scraper::Selector;

/// Largest icon edge accepted, in pixels
const MAX_ICON_SIZE: u32 = 1024;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_scrape_config(&config.scrape)?;
    validate_selector_config(&config.selectors)?;
    validate_icon_config(&config.icons)?;
    Ok(())
}

/// Validates static request settings
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    for (name, value) in &config.headers {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(format!("invalid header name '{}'", name)))?;
        HeaderValue::from_str(value).map_err(|_| {
            ConfigError::InvalidHeader(format!("invalid value for header '{}'", name))
        })?;
    }

    Ok(())
}

/// Validates output locations
fn validate_scrape_config(config: &ScrapeConfig) -> Result<(), ConfigError> {
    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "output_dir cannot be empty".to_string(),
        ));
    }

    if config.product_file.is_empty()
        || config.product_file.contains('/')
        || config.product_file.contains('\\')
    {
        return Err(ConfigError::Validation(format!(
            "product_file must be a plain file name, got '{}'",
            config.product_file
        )));
    }

    let ext = &config.default_image_extension;
    if ext.len() < 2 || !ext.starts_with('.') || ext.contains('/') {
        return Err(ConfigError::Validation(format!(
            "default_image_extension must look like '.jpg', got '{}'",
            ext
        )));
    }

    Ok(())
}

/// Checks that every selector parses
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    check_selector("title", &config.title)?;
    check_selector("price", &config.price)?;
    check_selector("description", &config.description)?;
    Ok(())
}

/// Parses a single selector, naming the field on failure
pub(crate) fn check_selector(field: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        field,
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Validates icon generator settings
fn validate_icon_config(config: &IconConfig) -> Result<(), ConfigError> {
    if config.output_dir.is_empty() {
        return Err(ConfigError::Validation(
            "icons output_dir cannot be empty".to_string(),
        ));
    }

    if config.sizes.is_empty() {
        return Err(ConfigError::Validation(
            "icons sizes must list at least one size".to_string(),
        ));
    }

    for &size in &config.sizes {
        if size == 0 || size > MAX_ICON_SIZE {
            return Err(ConfigError::Validation(format!(
                "icon size must be between 1 and {}, got {}",
                MAX_ICON_SIZE, size
            )));
        }
    }

    Ok(())
}
