//! # Fetching Portfolio Assets from the Management API
//!
//! This module provides read-only access to a Cloudinary-style management API
//! (e.g., "https://api.cloudinary.com"). It pages through the resource
//! listing for a path prefix via the continuation cursor protocol, falls
//! back across candidate folder spellings and a bulk search expression when
//! a listing comes up empty, and exposes the folder and account-usage
//! endpoints consumed by the reporting subcommands.
//!
//! ## Usage
//!
//! The primary entry point is `list_assets_with_fallback`, which takes the
//! account configuration and a folder name and returns the flat record list.
//!
//! ## Submodules
//!
//! - **lister**: Contains the paginated listing, search, folder, and usage calls.
//! - **types**: Defines the typed records for each API response shape.

mod lister;
mod types;

pub use lister::{
    fetch_usage, list_assets, list_assets_with_fallback, list_root_folders, list_subfolders,
    search_assets,
};
pub use types::{AssetRecord, Folder, FolderList, ResourcePage, SearchPage, UsageMetric, UsageReport};
