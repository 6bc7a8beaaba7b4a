use serde::Deserialize;
use std::fmt::Debug;

/// Represents one stored image asset as returned by the resource listing API.
///
/// This struct captures the fields the pipeline consumes from a resource
/// record. Dimensions default to 0 when the API omits them, and the asset
/// folder is only present on accounts using dynamic folder mode.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRecord {
    /// Unique slash-segmented identifier, e.g.
    /// "Praveen-PortfolioPics/Documentary/EOL01550_ki1e13".
    pub public_id: String,
    /// Short format string, e.g. "jpg".
    #[serde(default)]
    pub format: String,
    /// Size in bytes.
    #[serde(default)]
    pub bytes: u64,
    /// Pixel width, 0 if unknown.
    #[serde(default)]
    pub width: u32,
    /// Pixel height, 0 if unknown.
    #[serde(default)]
    pub height: u32,
    /// Creation timestamp as an ISO-8601 string.
    #[serde(default)]
    pub created_at: String,
    /// Canonical HTTPS delivery URL of the original upload.
    #[serde(default)]
    pub secure_url: String,
    /// Dynamic-mode asset folder, when the account reports one.
    #[serde(default)]
    pub asset_folder: Option<String>,
}

/// One page of a cursor-paginated resource listing.
///
/// The continuation cursor is absent on the final page.
#[derive(Debug, Deserialize)]
pub struct ResourcePage {
    /// Records in this page, in receipt order.
    #[serde(default)]
    pub resources: Vec<AssetRecord>,
    /// Cursor for the next page, if more records exist.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One page of a bulk search-by-expression response.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    /// Total number of matches across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// Records in this page, in receipt order.
    #[serde(default)]
    pub resources: Vec<AssetRecord>,
    /// Cursor for the next page, if more records exist.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A folder entry from the root-folder or subfolder listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Folder {
    /// Folder name without the parent path, e.g. "Documentary".
    pub name: String,
    /// Full slash-separated path, e.g. "Praveen-PortfolioPics/Documentary".
    #[serde(default)]
    pub path: String,
}

/// Response of the folder listing endpoints.
#[derive(Debug, Deserialize)]
pub struct FolderList {
    /// Folders at the requested level.
    #[serde(default)]
    pub folders: Vec<Folder>,
}

/// A single metered quantity in the account usage report.
#[derive(Debug, Deserialize)]
pub struct UsageMetric {
    /// Amount used, in the unit native to the metric (bytes for storage).
    #[serde(default)]
    pub usage: f64,
}

/// Account usage report, used to validate credentials.
///
/// Every section is optional; the endpoint's shape varies by plan.
#[derive(Debug, Deserialize)]
pub struct UsageReport {
    /// Plan name, e.g. "Free".
    #[serde(default)]
    pub plan: Option<String>,
    /// Number of stored resources.
    #[serde(default)]
    pub resources: Option<u64>,
    /// Storage consumption.
    #[serde(default)]
    pub storage: Option<UsageMetric>,
    /// Bandwidth consumption.
    #[serde(default)]
    pub bandwidth: Option<UsageMetric>,
}
