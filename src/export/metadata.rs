use crate::catalog::{simplify, MetadataDocument};
use anyhow::{Context, Result as AnyhowResult};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the full metadata document.
pub const METADATA_FILE: &str = "cloudinary-images.json";
/// File name of the simplified variant.
pub const SIMPLIFIED_FILE: &str = "cloudinary-urls-simple.json";

/// Persists the metadata document and its simplified variant.
///
/// The output directory is created if missing, then both files are written
/// as whole-file overwrites: no merge with prior output, no backup, no
/// temp-and-rename step. A failed write is fatal and surfaces to the
/// caller with the path in context.
///
/// # Arguments
///
/// * `document` - The assembled metadata document.
/// * `output_dir` - Directory receiving both JSON files.
///
/// # Returns
///
/// * `Ok((PathBuf, PathBuf))` - Paths of the full and simplified files.
/// * `Err(anyhow::Error)` - Directory creation, serialization, or a write failed.
pub fn write_metadata(
    document: &MetadataDocument,
    output_dir: &Path,
) -> AnyhowResult<(PathBuf, PathBuf)> {
    fs::create_dir_all(output_dir)
        .context(format!("Failed to create output directory: {}", output_dir.display()))?;

    let full_path = output_dir.join(METADATA_FILE);
    let full_json = serde_json::to_string_pretty(document)
        .context("Failed to serialize metadata document")?;
    fs::write(&full_path, full_json)
        .context(format!("Failed to write metadata: {}", full_path.display()))?;
    info!("Metadata saved: {}", full_path.display());

    let simplified_path = output_dir.join(SIMPLIFIED_FILE);
    let simplified_json = serde_json::to_string_pretty(&simplify(document))
        .context("Failed to serialize simplified metadata")?;
    fs::write(&simplified_path, simplified_json).context(format!(
        "Failed to write simplified metadata: {}",
        simplified_path.display()
    ))?;
    info!("Simplified version saved: {}", simplified_path.display());

    Ok((full_path, simplified_path))
}

/// Loads a previously persisted metadata document.
///
/// # Arguments
///
/// * `path` - Path of the full metadata file.
pub fn read_metadata(path: &Path) -> AnyhowResult<MetadataDocument> {
    let raw = fs::read_to_string(path)
        .context(format!("Failed to read metadata: {}", path.display()))?;
    let document: MetadataDocument = serde_json::from_str(&raw)
        .context(format!("Failed to parse metadata: {}", path.display()))?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_document;
    use crate::config::test_config;
    use crate::fetch::AssetRecord;

    fn record(public_id: &str) -> AssetRecord {
        AssetRecord {
            public_id: public_id.to_string(),
            format: "jpg".to_string(),
            bytes: 2048,
            width: 1920,
            height: 1280,
            created_at: "2023-07-22T06:11:21Z".to_string(),
            secure_url: String::new(),
            asset_folder: None,
        }
    }

    /// Tests the write-then-read round trip, including directory creation.
    #[test]
    fn test_write_and_read_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("public").join("data");
        let config = test_config("https://api.cloudinary.com");
        let document = build_document(
            &config,
            "Shoots",
            vec![record("Shoots/Street/a"), record("Shoots/Macro/b")],
        );

        let (full_path, simplified_path) = write_metadata(&document, &output_dir).unwrap();
        assert!(full_path.exists());
        assert!(simplified_path.exists());

        let reread = read_metadata(&full_path).unwrap();
        assert_eq!(reread.total_images, 2);
        assert_eq!(reread.categories["street"], 1);
        assert_eq!(reread.images[1].category.as_str(), "street");
    }

    /// Tests that a zero-asset document persists as well-formed JSON.
    #[test]
    fn test_write_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config("https://api.cloudinary.com");
        let document = build_document(&config, "Shoots", Vec::new());

        let (full_path, _) = write_metadata(&document, dir.path()).unwrap();
        let raw = fs::read_to_string(&full_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["totalImages"], 0);
        assert!(value["categories"].as_object().unwrap().is_empty());
        assert!(value["images"].as_array().unwrap().is_empty());
    }

    /// Tests that a second run overwrites prior output in full.
    #[test]
    fn test_write_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config("https://api.cloudinary.com");

        let first = build_document(&config, "Shoots", vec![record("Shoots/Street/a")]);
        write_metadata(&first, dir.path()).unwrap();

        let second = build_document(&config, "Shoots", Vec::new());
        let (full_path, _) = write_metadata(&second, dir.path()).unwrap();

        let reread = read_metadata(&full_path).unwrap();
        assert_eq!(reread.total_images, 0);
    }
}
