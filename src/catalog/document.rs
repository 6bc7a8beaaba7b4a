use super::categorize::categorize;
use super::types::{CategorizedAsset, MetadataDocument, SimplifiedAsset};
use super::urls::{preset_table, synthesize_urls};
use crate::config::CloudConfig;
use crate::fetch::AssetRecord;
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;

/// Sanitizes an identifier into a stable lookup key.
///
/// Path separators, hyphens, and whitespace are all replaced by
/// underscores, so the result never contains a path separator and is safe
/// as an element id or object key. Already-sanitized input passes through
/// unchanged.
pub fn derive_id(public_id: &str) -> String {
    public_id
        .chars()
        .map(|c| {
            if c == '/' || c == '-' || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Returns the last path segment of an identifier.
pub fn filename_of(public_id: &str) -> &str {
    public_id.rsplit('/').next().unwrap_or(public_id)
}

/// Categorizes and enriches one fetched record.
fn build_asset(config: &CloudConfig, record: AssetRecord) -> CategorizedAsset {
    let delivery_root = config.delivery_root();
    let category = categorize(&record.public_id);
    let size_kb = (record.bytes as f64 / 1024.0).round() as u64;

    CategorizedAsset {
        derived_id: derive_id(&record.public_id),
        filename: filename_of(&record.public_id).to_string(),
        category,
        format: record.format,
        width: record.width,
        height: record.height,
        size_bytes: record.bytes,
        size_kb,
        created_at: record.created_at,
        urls: synthesize_urls(&delivery_root, &record.public_id),
        original: record.secure_url,
        public_id: record.public_id,
    }
}

/// Assembles the metadata document from a fetched record list.
///
/// Every record is categorized and URL-enriched, per-category counts are
/// aggregated, and the sequence is sorted by (category label ascending,
/// then filename ascending). A run with zero records still yields a
/// well-formed document with a zero total and an empty category map.
///
/// # Arguments
///
/// * `config` - Account configuration, for the delivery root and cloud name.
/// * `source_folder` - The folder the listing ran against.
/// * `records` - The flat record list, in listing order.
pub fn build_document(
    config: &CloudConfig,
    source_folder: &str,
    records: Vec<AssetRecord>,
) -> MetadataDocument {
    let mut categories: BTreeMap<String, usize> = BTreeMap::new();
    let mut images: Vec<CategorizedAsset> = records
        .into_iter()
        .map(|record| build_asset(config, record))
        .collect();

    for image in &images {
        *categories.entry(image.category.to_string()).or_insert(0) += 1;
    }

    images.sort_by(|a, b| {
        a.category
            .as_str()
            .cmp(b.category.as_str())
            .then_with(|| a.filename.cmp(&b.filename))
    });

    MetadataDocument {
        generated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        cloud_name: config.cloud_name.clone(),
        source_folder: source_folder.to_string(),
        total_images: images.len(),
        transformations: preset_table(),
        categories,
        images,
    }
}

/// Derives the simplified asset list from a full document.
///
/// Keeps the two URLs the static pages actually embed plus the original,
/// dropping dimensions and timestamps.
pub fn simplify(document: &MetadataDocument) -> Vec<SimplifiedAsset> {
    document
        .images
        .iter()
        .map(|image| SimplifiedAsset {
            id: image.derived_id.clone(),
            public_id: image.public_id.clone(),
            category: image.category,
            thumbnail: image.urls.get("thumbnail").cloned().unwrap_or_default(),
            gallery: image.urls.get("gallery").cloned().unwrap_or_default(),
            original: image.original.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    fn record(public_id: &str, bytes: u64) -> AssetRecord {
        AssetRecord {
            public_id: public_id.to_string(),
            format: "jpg".to_string(),
            bytes,
            width: 1920,
            height: 1280,
            created_at: "2023-07-22T06:11:21Z".to_string(),
            secure_url: format!(
                "https://res.cloudinary.com/demo/image/upload/{}.jpg",
                public_id
            ),
            asset_folder: None,
        }
    }

    /// Tests that derived ids contain no path separators.
    #[test]
    fn test_derive_id_strips_separators() {
        let id = derive_id("Praveen-PortfolioPics/Documentary/EOL01550 v2");
        assert!(!id.contains('/'));
        assert!(!id.contains('-'));
        assert!(!id.contains(' '));
        assert_eq!(id, "Praveen_PortfolioPics_Documentary_EOL01550_v2");
        // Sanitization is idempotent.
        assert_eq!(derive_id(&id), id);
    }

    /// Tests the (category, filename) sort invariant on unsorted input.
    #[test]
    fn test_build_document_sorted() {
        let config = test_config("https://api.cloudinary.com");
        let records = vec![
            record("Shoots/Street/b_photo", 2048),
            record("Shoots/Documentary/z_photo", 2048),
            record("Shoots/Street/a_photo", 2048),
            record("Shoots/Documentary/a_photo", 2048),
        ];
        let document = build_document(&config, "Shoots", records);

        for pair in document.images.windows(2) {
            let left = (pair[0].category.as_str(), pair[0].filename.as_str());
            let right = (pair[1].category.as_str(), pair[1].filename.as_str());
            assert!(left <= right, "{:?} should not precede {:?}", right, left);
        }
        assert_eq!(document.images[0].filename, "a_photo");
        assert_eq!(document.images[0].category.as_str(), "documentary");
    }

    /// Tests that the aggregate counts equal the per-label entry counts.
    #[test]
    fn test_build_document_counts_consistent() {
        let config = test_config("https://api.cloudinary.com");
        let records = vec![
            record("Shoots/Street/a", 1024),
            record("Shoots/Street/b", 1024),
            record("Shoots/Macro/c", 1024),
        ];
        let document = build_document(&config, "Shoots", records);

        assert_eq!(document.total_images, 3);
        for (label, count) in &document.categories {
            let actual = document
                .images
                .iter()
                .filter(|image| image.category.as_str() == label)
                .count();
            assert_eq!(actual, *count, "count mismatch for {}", label);
        }
        assert_eq!(document.categories["street"], 2);
        assert_eq!(document.categories["macro"], 1);
    }

    /// Tests that zero records still yield a well-formed document.
    #[test]
    fn test_build_document_empty() {
        let config = test_config("https://api.cloudinary.com");
        let document = build_document(&config, "Shoots", Vec::new());

        assert_eq!(document.total_images, 0);
        assert!(document.categories.is_empty());
        assert!(document.images.is_empty());
        assert_eq!(document.transformations.len(), 8);
    }

    /// Tests kilobyte rounding and URL enrichment on a built asset.
    #[test]
    fn test_build_document_enrichment() {
        let config = test_config("https://api.cloudinary.com");
        let document = build_document(&config, "Shoots", vec![record("Shoots/Macro/leaf", 1536)]);
        let asset = &document.images[0];

        assert_eq!(asset.size_kb, 2); // 1536 bytes rounds up
        assert_eq!(asset.filename, "leaf");
        assert_eq!(asset.urls.len(), 8);
        assert!(asset.urls["gallery"].ends_with("/Shoots/Macro/leaf"));
    }

    /// Tests the simplified projection.
    #[test]
    fn test_simplify() {
        let config = test_config("https://api.cloudinary.com");
        let document = build_document(&config, "Shoots", vec![record("Shoots/Street/a", 1024)]);
        let simplified = simplify(&document);

        assert_eq!(simplified.len(), 1);
        assert_eq!(simplified[0].id, "Shoots_Street_a");
        assert_eq!(simplified[0].gallery, document.images[0].urls["gallery"]);
    }
}
