//! # Bulk Upload of Local Portfolio Images
//!
//! This module uploads the local photo archive to the media store, one
//! category directory at a time, with a fixed delay between requests to
//! stay under the remote rate limit. Requests are signed with the account
//! secret; individual failures are counted and reported rather than
//! aborting the run.
//!
//! ## Usage
//!
//! The entry point is [`upload_all`], which takes the account
//! configuration and the source directory.
//!
//! ## Submodules
//!
//! - **uploader**: Contains the directory walk and signed multipart upload.

mod uploader;

pub use uploader::{upload_all, UploadSummary};
