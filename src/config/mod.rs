//! Configuration module for Toko-Scout
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file, [`Config::default`] is used.
//!
//! # Example
//!
//! ```no_run
//! use toko_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("toko-scout.toml")).unwrap();
//! println!("Images go to: {}", config.scrape.output_dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, HttpConfig, IconConfig, ScrapeConfig, SelectorConfig, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
pub(crate) use validation::check_selector;
