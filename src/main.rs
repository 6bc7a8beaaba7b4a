//! Portfolio Assets: Fetch, Categorize, and Export Cloudinary Gallery Metadata
//!
//! This application manages a photography portfolio hosted on Cloudinary: it
//! lists the stored assets through the management API, assigns each one a
//! portfolio category, synthesizes derived-image URLs per transformation
//! preset, persists the metadata document the site consumes, and stamps out
//! the static gallery pages.
//!
//! ## Design Overview
//! - **Fetching**: Pages through the resource listing API via the `fetch` module.
//! - **Cataloging**: Categorizes and URL-enriches assets via the `catalog` module.
//! - **Exporting**: Writes the JSON documents and HTML pages via the `export` module.
//! - **Uploading**: Pushes the local photo archive via the `upload` module.
//!
//! ## Dependencies
//! - **`reqwest`**: For HTTP requests against the management and upload APIs.
//! - **`tokio`**: For the asynchronous runtime driving the network calls.
//! - **`log` and `env_logger`**: For structured logging instead of `println!`.
//! - **`clap`**: For parsing command-line arguments to configure the application.
//! - **`dotenv`**: For loading environment variables from a `.env` file.
//! - **`chrono`**: Handles the generation timestamps in the metadata document.
//! - **`serde` / `serde_json`**: Serializes and deserializes every JSON document.
//!
//! ## Usage
//! 1. Configure the account using either a `.env` file or command-line
//!    arguments:
//!    ```env
//!    CLOUDINARY_CLOUD_NAME=your_cloud_name
//!    CLOUDINARY_API_KEY=your_api_key
//!    CLOUDINARY_API_SECRET=your_api_secret
//!    ```
//! 2. Run a subcommand:
//!    ```sh
//!    cargo run -- metadata --folder Praveen-PortfolioPics
//!    cargo run -- pages
//!    cargo run -- upload --source-dir public/Photos/portfolio
//!    ```
//! 3. Logs are controlled by the `RUST_LOG` environment variable:
//!    ```sh
//!    export RUST_LOG=info
//!    cargo run -- metadata
//!    ```
//!
//! Exit code is 0 on success and 1 on any unhandled failure.

use anyhow::Result as AnyhowResult;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use log::info;
use portfolio_assets::catalog::build_document;
use portfolio_assets::config::CloudConfig;
use portfolio_assets::export::{
    generate_category_pages, read_metadata, rewrite_html, verify_outputs, write_metadata,
};
use portfolio_assets::fetch::{
    fetch_usage, list_assets, list_assets_with_fallback, list_root_folders, list_subfolders,
};
use portfolio_assets::upload::upload_all;
use std::path::PathBuf;

/// Command-line arguments for the portfolio assets application.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Cloudinary cloud (account) name.
    #[clap(long, env = "CLOUDINARY_CLOUD_NAME", default_value = "")]
    cloud_name: String,

    /// Cloudinary API key.
    #[clap(long, env = "CLOUDINARY_API_KEY", default_value = "")]
    api_key: String,

    /// Cloudinary API secret.
    #[clap(long, env = "CLOUDINARY_API_SECRET", default_value = "")]
    api_secret: String,

    /// Base URL of the management API.
    #[clap(
        long,
        env = "CLOUDINARY_API_BASE",
        default_value = "https://api.cloudinary.com"
    )]
    api_base: String,

    /// Base URL of the delivery CDN.
    #[clap(
        long,
        env = "CLOUDINARY_DELIVERY_BASE",
        default_value = "https://res.cloudinary.com"
    )]
    delivery_base: String,

    #[clap(subcommand)]
    command: Command,
}

/// One subcommand per pipeline stage.
#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the remote listing and write the metadata documents.
    Metadata {
        /// Remote folder holding the portfolio.
        #[clap(long, default_value = "Praveen-PortfolioPics")]
        folder: String,
        /// Directory receiving the JSON documents.
        #[clap(long, default_value = "public/data")]
        output_dir: PathBuf,
    },
    /// Render one static gallery page per category from the metadata.
    Pages {
        /// Path of the full metadata document.
        #[clap(long, default_value = "public/data/cloudinary-images.json")]
        metadata: PathBuf,
        /// Site directory receiving the pages.
        #[clap(long, default_value = "public")]
        output_dir: PathBuf,
    },
    /// Upload the local photo archive, one category directory at a time.
    Upload {
        /// Root directory holding one subdirectory per category.
        #[clap(long, default_value = "public/Photos/portfolio")]
        source_dir: PathBuf,
    },
    /// Print the remote folder tree with per-folder image counts.
    Folders,
    /// Validate credentials and report account usage.
    Check,
    /// Verify the persisted metadata and pages against their invariants.
    Verify {
        /// Path of the full metadata document.
        #[clap(long, default_value = "public/data/cloudinary-images.json")]
        metadata: PathBuf,
        /// Directory holding the generated pages.
        #[clap(long, default_value = "public")]
        pages_dir: PathBuf,
    },
    /// Rewrite local image references in HTML files to delivery URLs.
    Rewrite {
        /// HTML files to rewrite in place (a `.backup` copy is kept).
        #[clap(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Dispatches the selected subcommand over the shared configuration.
///
/// Builds the `CloudConfig` once from arguments and environment, validates
/// credentials before any network-bound subcommand, and runs the requested
/// stage to completion. Any failure aborts with a non-zero exit code.
#[tokio::main]
async fn main() -> AnyhowResult<()> {
    env_logger::init();
    dotenv().ok();

    let args = Args::parse();
    let config = CloudConfig::new(
        args.cloud_name,
        args.api_key,
        args.api_secret,
        args.api_base,
        args.delivery_base,
    );

    match args.command {
        Command::Metadata { folder, output_dir } => {
            config.validate()?;
            info!("Generating metadata for folder: {}", folder);
            let records = list_assets_with_fallback(&config, &folder).await?;
            info!("Fetched {} asset record(s)", records.len());

            let document = build_document(&config, &folder, records);
            let (full_path, simplified_path) = write_metadata(&document, &output_dir)?;

            println!("Metadata saved: {}", full_path.display());
            println!("Simplified version saved: {}", simplified_path.display());
            println!("\nTotal images: {}", document.total_images);
            println!("By category:");
            for (label, count) in &document.categories {
                println!("  {:<16} {} images", label, count);
            }
        }
        Command::Pages {
            metadata,
            output_dir,
        } => {
            let document = read_metadata(&metadata)?;
            let generated = generate_category_pages(&document, &output_dir)?;
            for (filename, count) in &generated {
                println!("Generated {} ({} images)", filename, count);
            }
            println!("\nGenerated {} category page(s)", generated.len());
        }
        Command::Upload { source_dir } => {
            config.validate()?;
            let summary = upload_all(&config, &source_dir).await?;
            println!(
                "Upload complete: {} uploaded, {} failed, {} folder(s) skipped",
                summary.uploaded, summary.failed, summary.skipped_dirs
            );
            if summary.failed > 0 {
                anyhow::bail!("{} upload(s) failed", summary.failed);
            }
        }
        Command::Folders => {
            config.validate()?;
            let roots = list_root_folders(&config).await?;
            if roots.is_empty() {
                println!("No folders found");
            }
            for root in roots {
                println!("{}/", root.name);
                let subfolders = list_subfolders(&config, &root.name).await?;
                for sub in subfolders {
                    let images = list_assets(&config, &sub.path).await?;
                    println!("  └─ {}/ ({} images)", sub.name, images.len());
                }
            }
        }
        Command::Check => {
            config.validate()?;
            let usage = fetch_usage(&config).await?;
            println!("Connection successful");
            println!("Plan: {}", usage.plan.unwrap_or_else(|| "Free".to_string()));
            if let Some(resources) = usage.resources {
                println!("Resources: {} files", resources);
            }
            if let Some(storage) = usage.storage {
                println!("Storage used: {:.2} MB", storage.usage / 1024.0 / 1024.0);
            }
            if let Some(bandwidth) = usage.bandwidth {
                println!("Bandwidth used: {:.2} MB", bandwidth.usage / 1024.0 / 1024.0);
            }
        }
        Command::Verify { metadata, pages_dir } => {
            let report = verify_outputs(&metadata, &pages_dir)?;
            for check in &report.checks {
                let mark = if check.passed { "ok " } else { "FAIL" };
                println!("[{}] {:<20} {}", mark, check.name, check.detail);
            }
            if !report.passed() {
                anyhow::bail!("Verification failed");
            }
            println!("\nAll checks passed");
        }
        Command::Rewrite { files } => {
            if config.cloud_name.trim().is_empty() {
                anyhow::bail!("Missing credential value: CLOUDINARY_CLOUD_NAME");
            }
            let mut total = 0;
            for file in &files {
                total += rewrite_html(file, &config)?;
            }
            println!("Rewrote {} image reference(s) in {} file(s)", total, files.len());
        }
    }

    Ok(())
}
