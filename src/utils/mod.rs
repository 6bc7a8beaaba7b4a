//! # Utility Functions for the Portfolio Pipeline
//!
//! This module provides general utility functions used throughout the
//! application, currently the upload request signing helper.
//!
//! ## Submodules
//!
//! - **signature**: Contains the SHA-256 request signature calculation.

mod signature;

pub use signature::sign_request;
