use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Portfolio category assigned to every asset.
///
/// A closed set of labels; `Uncategorized` is the fallback when no
/// categorization rule matches. The label is the lowercase serialized form
/// used in the metadata document and in page filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Documentary,
    Interior,
    Jewels,
    Macro,
    Portraits,
    Product,
    Street,
    Uncategorized,
}

impl Category {
    /// The lowercase label, as persisted in the metadata document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Documentary => "documentary",
            Category::Interior => "interior",
            Category::Jewels => "jewels",
            Category::Macro => "macro",
            Category::Portraits => "portraits",
            Category::Product => "product",
            Category::Street => "street",
            Category::Uncategorized => "uncategorized",
        }
    }

    /// Human-readable heading used on gallery pages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Documentary => "Documentary Photography",
            Category::Interior => "Interior Photography",
            Category::Jewels => "Jewelry Photography",
            Category::Macro => "Macro Photography",
            Category::Portraits => "Portrait Photography",
            Category::Product => "Product Photography",
            Category::Street => "Street Photography",
            Category::Uncategorized => "Photography Collection",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One categorized and URL-enriched asset, as persisted in the full
/// metadata document.
///
/// Field names serialize in the camelCase form the site's browser-side
/// loader expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorizedAsset {
    /// Identifier with path separators replaced by underscores, used as a
    /// stable lookup key.
    #[serde(rename = "id")]
    pub derived_id: String,
    /// The asset's slash-segmented identifier as stored remotely.
    #[serde(rename = "publicId")]
    pub public_id: String,
    /// Category label assigned exactly once at build time.
    pub category: Category,
    /// Last path segment of the identifier.
    pub filename: String,
    /// Short format string, e.g. "jpg".
    pub format: String,
    /// Pixel width, 0 if unknown.
    pub width: u32,
    /// Pixel height, 0 if unknown.
    pub height: u32,
    /// Size in bytes.
    #[serde(rename = "size")]
    pub size_bytes: u64,
    /// Size in kilobytes, rounded.
    #[serde(rename = "sizeKB")]
    pub size_kb: u64,
    /// Creation timestamp as reported by the listing API.
    #[serde(rename = "created")]
    pub created_at: String,
    /// Derived-image URL per preset name; key set equals the preset table's.
    pub urls: BTreeMap<String, String>,
    /// Canonical URL of the original upload.
    pub original: String,
}

/// The persisted metadata artifact consumed by the page templater and the
/// browser-side loader.
///
/// `images` is sorted by (category ascending, then filename ascending);
/// consumers rely on that ordering for stable page layout.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetadataDocument {
    /// Generation timestamp, ISO-8601.
    pub generated: String,
    /// Source account identifier.
    #[serde(rename = "cloudName")]
    pub cloud_name: String,
    /// Folder the listing ran against.
    #[serde(rename = "sourceFolder")]
    pub source_folder: String,
    /// Number of assets in `images`.
    #[serde(rename = "totalImages")]
    pub total_images: usize,
    /// Preset name to transformation-parameter string.
    pub transformations: BTreeMap<String, String>,
    /// Category label to asset count.
    pub categories: BTreeMap<String, usize>,
    /// The ordered asset sequence.
    pub images: Vec<CategorizedAsset>,
}

/// Reduced per-asset record persisted as the simplified variant.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimplifiedAsset {
    /// Sanitized lookup key, same as the full record's `id`.
    pub id: String,
    /// The asset's slash-segmented identifier.
    #[serde(rename = "publicId")]
    pub public_id: String,
    /// Category label.
    pub category: Category,
    /// Thumbnail preset URL.
    pub thumbnail: String,
    /// Gallery preset URL.
    pub gallery: String,
    /// Canonical URL of the original upload.
    pub original: String,
}
