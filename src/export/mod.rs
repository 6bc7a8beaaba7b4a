//! Tools for persisting the catalog and stamping out the static site.
//!
//! This module holds the side-effecting tail of the pipeline: writing the
//! metadata document (full and simplified) as whole-file JSON overwrites,
//! rendering one static gallery page per category with lazy-load markup,
//! verifying the persisted outputs against the invariants consumers rely
//! on, and rewriting legacy HTML image references to delivery URLs.
//!
//! ## Usage
//!
//! The main entry points are [`write_metadata`] after a listing run and
//! [`generate_category_pages`] over a persisted document.
//!
//! ## Submodules
//!
//! - **metadata**: JSON document writer and reader.
//! - **pages**: Category page templater and lazy loader asset.
//! - **verify**: Consistency checks over the persisted outputs.
//! - **rewrite**: In-place HTML reference rewriting with backups.

mod metadata;
mod pages;
mod rewrite;
mod verify;

pub use metadata::{read_metadata, write_metadata, METADATA_FILE, SIMPLIFIED_FILE};
pub use pages::generate_category_pages;
pub use rewrite::rewrite_html;
pub use verify::{verify_outputs, Check, VerifyReport};
