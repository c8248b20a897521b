//! Toko-Scout main entry point
//!
//! This is the command-line interface for the product scraper and the
//! extension icon generator.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toko_scout::config::{load_config_or_default, Config};
use toko_scout::icons::{generate_icons, IconFormat};
use toko_scout::product::scrape_product;
use tracing_subscriber::EnvFilter;

/// Toko-Scout: product page scraper and extension icon generator
#[derive(Parser, Debug)]
#[command(name = "toko-scout")]
#[command(version)]
#[command(about = "Scrape a product page or generate extension icons", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape one product page: save its text fields and download its images
    Scrape {
        /// Product page URL
        url: String,

        /// Directory to store downloads (overrides the configured one)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Generate the extension icons at the configured sizes
    Icons {
        /// Directory to write icons to (overrides the configured one)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Write SVG markup instead of PNG images
        #[arg(long)]
        svg: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Default configuration is invalid".to_string(),
    })?;

    match cli.command {
        Command::Scrape { url, output } => handle_scrape(&config, &url, output).await,
        Command::Icons { output, svg } => handle_icons(&config, output, svg),
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("toko_scout=info,warn"),
            1 => EnvFilter::new("toko_scout=debug,info"),
            2 => EnvFilter::new("toko_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the scrape command and prints the extracted fields
async fn handle_scrape(config: &Config, url: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    let out_dir = output.unwrap_or_else(|| PathBuf::from(&config.scrape.output_dir));

    let report = scrape_product(config, url, &out_dir)
        .await
        .with_context(|| format!("Failed to scrape {}", url))?;

    println!("Scraped fields:");
    for (key, value) in report.product.fields() {
        println!("{}: {}", key, value);
    }

    Ok(())
}

/// Handles the icons command
fn handle_icons(config: &Config, output: Option<PathBuf>, svg: bool) -> anyhow::Result<()> {
    let out_dir = output.unwrap_or_else(|| PathBuf::from(&config.icons.output_dir));
    let format = if svg {
        IconFormat::Svg
    } else {
        IconFormat::preferred()
    };

    let paths = generate_icons(&out_dir, &config.icons.sizes, format)
        .with_context(|| format!("Failed to generate icons in {}", out_dir.display()))?;

    println!("✓ {} icons written to {}", paths.len(), out_dir.display());

    Ok(())
}
