//! # Categorizing and Enriching Fetched Assets
//!
//! This module is the pure middle of the pipeline: it assigns each fetched
//! asset exactly one category label, synthesizes one derived-image URL per
//! transformation preset, and assembles the sorted metadata document that
//! the export stage persists. Nothing in here performs I/O.
//!
//! ## Usage
//!
//! The main entry point is [`build_document`], which takes the account
//! configuration, the source folder name, and the fetched record list.
//!
//! ## Submodules
//!
//! - **categorize**: The ordered categorization rules.
//! - **urls**: The preset table and URL synthesis.
//! - **document**: Document assembly, sorting, and the simplified variant.
//! - **types**: The category label set and persisted record shapes.

mod categorize;
mod document;
mod types;
mod urls;

pub use categorize::categorize;
pub use document::{build_document, derive_id, filename_of, simplify};
pub use types::{CategorizedAsset, Category, MetadataDocument, SimplifiedAsset};
pub use urls::{preset_table, synthesize_urls, DEFAULT_TRANSFORM};
