//! Portfolio Assets Library
//!
//! This library provides functionality to fetch, categorize, and export
//! Cloudinary-hosted portfolio images, from the remote listing API down to
//! the static gallery pages served by the site.
//!

pub mod catalog;
pub mod config;
pub mod export;
pub mod fetch;
pub mod upload;
pub mod utils;
