use super::types::{AssetRecord, Folder, FolderList, ResourcePage, SearchPage, UsageReport};
use crate::config::CloudConfig;
use anyhow::{Context, Result as AnyhowResult};
use log::{info, warn};
use reqwest::Client;
use serde_json::json;

/// Page size requested from the listing and search endpoints.
const PAGE_SIZE: usize = 500;

/// Lists every image asset under a path prefix, following the page cursor.
///
/// This function requests one page at a time (bounded at 500 records),
/// appends the records in receipt order, and repeats while the response
/// carries a continuation cursor. Each invocation starts a fresh cursor; a
/// listing is never resumed mid-page. Any single page request failing aborts
/// the whole listing with no retry and no partial result.
///
/// # Arguments
///
/// * `config` - Account credentials and endpoint bases.
/// * `prefix` - Path prefix to list under (e.g. "Praveen-PortfolioPics").
///
/// # Returns
///
/// * `Ok(Vec<AssetRecord>)` - All records under the prefix, concatenated in page order.
/// * `Err(anyhow::Error)` - A page request or response decode failed.
///
/// # Examples
///
/// ```rust,no_run
/// use portfolio_assets::config::CloudConfig;
/// use portfolio_assets::fetch::list_assets;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = CloudConfig::new(
///         "demo".into(),
///         "key".into(),
///         "secret".into(),
///         "https://api.cloudinary.com".into(),
///         "https://res.cloudinary.com".into(),
///     );
///     let assets = list_assets(&config, "Praveen-PortfolioPics").await?;
///     println!("Listed {} assets", assets.len());
///     Ok(())
/// }
/// ```
pub async fn list_assets(config: &CloudConfig, prefix: &str) -> AnyhowResult<Vec<AssetRecord>> {
    let client = Client::new();
    let url = format!("{}/resources/image/upload", config.api_root());
    let mut all_records = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let mut query: Vec<(&str, String)> = vec![
            ("type", "upload".to_string()),
            ("prefix", prefix.to_string()),
            ("max_results", PAGE_SIZE.to_string()),
        ];
        if let Some(ref c) = cursor {
            query.push(("next_cursor", c.clone()));
        }

        let page: ResourcePage = get_json(&client, config, &url, &query)
            .await
            .context(format!("Failed to list resources under prefix: {}", prefix))?;

        info!(
            "Listed {} resource(s) under {} (total: {})",
            page.resources.len(),
            prefix,
            all_records.len() + page.resources.len()
        );
        all_records.extend(page.resources);

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(all_records)
}

/// Lists assets for a folder, trying candidate spellings in order.
///
/// Folder names in the remote store do not always match the spelling the
/// caller has on hand, so this function builds an explicit ordered list of
/// retrieval strategies: a prefix listing per candidate spelling, then a
/// bulk search by folder expression. Strategies run in order and the first
/// one yielding a non-empty listing wins; a strategy that errors is logged
/// and skipped. Exhausting every strategy is an error.
///
/// # Arguments
///
/// * `config` - Account credentials and endpoint bases.
/// * `folder` - Folder name as provided by the caller.
///
/// # Returns
///
/// * `Ok(Vec<AssetRecord>)` - Records from the first non-empty strategy.
/// * `Err(anyhow::Error)` - Every strategy returned no records.
pub async fn list_assets_with_fallback(
    config: &CloudConfig,
    folder: &str,
) -> AnyhowResult<Vec<AssetRecord>> {
    for candidate in spelling_candidates(folder) {
        info!("Trying folder spelling: {}", candidate);
        match list_assets(config, &candidate).await {
            Ok(records) if !records.is_empty() => {
                info!("Found {} asset(s) under {}", records.len(), candidate);
                return Ok(records);
            }
            Ok(_) => info!("No assets under {}", candidate),
            Err(e) => warn!("Listing {} failed: {:#}", candidate, e),
        }
    }

    info!("Prefix listing found nothing, trying search expression");
    let expression = format!("folder:{}/*", folder);
    match search_assets(config, &expression).await {
        Ok(records) if !records.is_empty() => {
            info!("Search found {} asset(s)", records.len());
            Ok(records)
        }
        Ok(_) => Err(anyhow::anyhow!(
            "No assets found for folder {} in any spelling variant",
            folder
        )),
        Err(e) => Err(e.context(format!("Search fallback failed for folder: {}", folder))),
    }
}

/// Searches assets by expression, following the page cursor.
///
/// Issues the bulk search endpoint with a fixed page size and concatenates
/// pages in receipt order, the same cursor protocol as [`list_assets`].
///
/// # Arguments
///
/// * `config` - Account credentials and endpoint bases.
/// * `expression` - Search expression, e.g. "folder:Praveen-PortfolioPics/*".
///
/// # Returns
///
/// * `Ok(Vec<AssetRecord>)` - All matching records.
/// * `Err(anyhow::Error)` - A search request or decode failed.
pub async fn search_assets(
    config: &CloudConfig,
    expression: &str,
) -> AnyhowResult<Vec<AssetRecord>> {
    let client = Client::new();
    let url = format!("{}/resources/search", config.api_root());
    let mut all_records = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let mut body = json!({
            "expression": expression,
            "max_results": PAGE_SIZE,
        });
        if let Some(ref c) = cursor {
            body["next_cursor"] = json!(c);
        }

        let resp = client
            .post(&url)
            .basic_auth(&config.api_key, Some(&config.api_secret))
            .json(&body)
            .send()
            .await
            .context(format!("Failed to search resources: {}", expression))?
            .error_for_status()
            .context(format!("Search rejected for expression: {}", expression))?;

        let page: SearchPage = resp
            .json()
            .await
            .context("Failed to parse search response")?;

        info!(
            "Search page returned {} of {} record(s)",
            page.resources.len(),
            page.total_count
        );
        all_records.extend(page.resources);

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(all_records)
}

/// Lists the account's root folders.
pub async fn list_root_folders(config: &CloudConfig) -> AnyhowResult<Vec<Folder>> {
    let client = Client::new();
    let url = format!("{}/folders", config.api_root());
    let list: FolderList = get_json(&client, config, &url, &[])
        .await
        .context("Failed to list root folders")?;
    Ok(list.folders)
}

/// Lists the immediate subfolders of a folder path.
pub async fn list_subfolders(config: &CloudConfig, path: &str) -> AnyhowResult<Vec<Folder>> {
    let client = Client::new();
    let url = format!("{}/folders/{}", config.api_root(), path);
    let list: FolderList = get_json(&client, config, &url, &[])
        .await
        .context(format!("Failed to list subfolders of: {}", path))?;
    Ok(list.folders)
}

/// Fetches the account usage report.
///
/// The cheapest authenticated call the management API offers, used to verify
/// credentials before a bulk operation and to report plan and consumption
/// figures.
pub async fn fetch_usage(config: &CloudConfig) -> AnyhowResult<UsageReport> {
    let client = Client::new();
    let url = format!("{}/usage", config.api_root());
    get_json(&client, config, &url, &[])
        .await
        .context("Failed to fetch account usage")
}

/// Issues an authenticated GET and decodes the JSON response.
///
/// # Arguments
///
/// * `client` - Shared HTTP client.
/// * `config` - Account credentials.
/// * `url` - Full endpoint URL.
/// * `query` - Query parameters, possibly empty.
async fn get_json<T: serde::de::DeserializeOwned>(
    client: &Client,
    config: &CloudConfig,
    url: &str,
    query: &[(&str, String)],
) -> AnyhowResult<T> {
    let resp = client
        .get(url)
        .query(query)
        .basic_auth(&config.api_key, Some(&config.api_secret))
        .send()
        .await
        .context(format!("Request failed: {}", url))?
        .error_for_status()
        .context(format!("Request rejected: {}", url))?;
    let value = resp
        .json::<T>()
        .await
        .context(format!("Failed to parse response from: {}", url))?;
    Ok(value)
}

/// Builds the ordered candidate spellings for a folder name.
///
/// The order is: the name as given, the all-lowercase form, and the
/// lowercase form with each hyphen-separated word capitalized. Duplicates
/// are removed while preserving order.
fn spelling_candidates(folder: &str) -> Vec<String> {
    let lower = folder.to_lowercase();
    let title = lower
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join("-");

    let mut candidates = Vec::new();
    for candidate in [folder.to_string(), lower, title] {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
