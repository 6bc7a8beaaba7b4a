use crate::catalog::Category;
use crate::config::CloudConfig;
use crate::utils::sign_request;
use anyhow::{Context, Result as AnyhowResult};
use chrono::Utc;
use log::{error, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Local subdirectory per category, under the upload source directory.
/// The directory names carry the spellings the photo archive actually uses.
const CATEGORY_DIRS: &[(Category, &str)] = &[
    (Category::Documentary, "documentry"),
    (Category::Portraits, "potraits"),
    (Category::Product, "product"),
    (Category::Macro, "macro"),
    (Category::Street, "street"),
    (Category::Interior, "interior"),
    (Category::Jewels, "jelws"),
];

/// Fixed pause between successive uploads, to stay under the remote rate
/// limit. Not a scheduling mechanism, just a constant sleep.
const UPLOAD_DELAY: Duration = Duration::from_millis(100);

/// Totals reported after a bulk upload run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadSummary {
    /// Files uploaded successfully.
    pub uploaded: usize,
    /// Files whose upload failed.
    pub failed: usize,
    /// Category directories not present locally.
    pub skipped_dirs: usize,
}

/// Uploads every local portfolio image, one category directory at a time.
///
/// For each entry of the category table, reads
/// `{source_dir}/{subdirectory}`, filters image files by extension, and
/// uploads them sequentially with a fixed delay between calls. A missing
/// directory is skipped with a warning; an individual upload failure is
/// logged and counted rather than aborting the run. All uploads are
/// awaited sequentially; there is no internal parallelism.
///
/// # Arguments
///
/// * `config` - Account credentials and endpoint bases.
/// * `source_dir` - Root directory holding one subdirectory per category.
///
/// # Returns
///
/// * `Ok(UploadSummary)` - Uploaded/failed/skipped totals.
/// * `Err(anyhow::Error)` - A directory listing failed.
pub async fn upload_all(config: &CloudConfig, source_dir: &Path) -> AnyhowResult<UploadSummary> {
    let client = Client::new();
    let mut summary = UploadSummary::default();

    for (category, subdir) in CATEGORY_DIRS {
        let dir = source_dir.join(subdir);
        if !dir.is_dir() {
            warn!("Folder not found, skipping: {}", dir.display());
            summary.skipped_dirs += 1;
            continue;
        }

        let mut files = image_files(&dir)
            .context(format!("Failed to read directory: {}", dir.display()))?;
        files.sort();
        info!("Uploading {} ({} images)", category, files.len());

        for file in files {
            match upload_image(&client, config, &file, *category).await {
                Ok(()) => {
                    info!("Uploaded {}", file.display());
                    summary.uploaded += 1;
                }
                Err(e) => {
                    error!("Failed to upload {}: {:#}", file.display(), e);
                    summary.failed += 1;
                }
            }
            tokio::time::sleep(UPLOAD_DELAY).await;
        }
    }

    info!(
        "Upload complete: {} uploaded, {} failed, {} folder(s) skipped",
        summary.uploaded, summary.failed, summary.skipped_dirs
    );
    Ok(summary)
}

/// Uploads a single image file as a signed multipart request.
///
/// The signed parameters place the file under `portfolio/{category}` and
/// keep the local filename as the identifier.
async fn upload_image(
    client: &Client,
    config: &CloudConfig,
    file: &Path,
    category: Category,
) -> AnyhowResult<()> {
    let bytes = tokio::fs::read(file)
        .await
        .context("Failed to read image file")?;
    let filename = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("upload")
        .to_string();

    let timestamp = Utc::now().timestamp().to_string();
    let folder = format!("portfolio/{}", category);
    let signed_params = [
        ("folder", folder.clone()),
        ("timestamp", timestamp.clone()),
        ("unique_filename", "false".to_string()),
        ("use_filename", "true".to_string()),
    ];
    let signature = sign_request(&signed_params, &config.api_secret);

    let form = Form::new()
        .part("file", Part::bytes(bytes).file_name(filename))
        .text("api_key", config.api_key.clone())
        .text("timestamp", timestamp)
        .text("signature", signature)
        .text("folder", folder)
        .text("use_filename", "true")
        .text("unique_filename", "false");

    let url = format!("{}/image/upload", config.api_root());
    client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .context("Upload request failed")?
        .error_for_status()
        .context("Upload rejected")?;
    Ok(())
}

/// Lists the image files directly inside a directory.
///
/// Only regular files with a known image extension are returned;
/// subdirectories are not traversed.
fn image_files(dir: &Path) -> AnyhowResult<Vec<std::path::PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            matches!(
                ext.to_lowercase().as_str(),
                "jpg" | "jpeg" | "png" | "gif" | "webp"
            )
        })
        .unwrap_or(false)
}
