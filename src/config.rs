//! # Cloudinary Account Configuration
//!
//! This module defines the configuration struct carrying the Cloudinary
//! account credentials and endpoint bases. The struct is constructed once at
//! the program entry point (from command-line arguments or environment
//! variables) and passed explicitly into the lister and uploader; library
//! functions never read credentials from ambient global state.

use anyhow::Result as AnyhowResult;

/// Credentials and endpoints for one Cloudinary account.
///
/// All remote operations in this crate take a reference to a `CloudConfig`.
/// The two base URLs default to the public Cloudinary endpoints and exist as
/// fields so tests can point the client at a local server.
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// Cloud (account) name, e.g. "praveenk-portfolio".
    pub cloud_name: String,
    /// API key for the account.
    pub api_key: String,
    /// API secret for the account, used for basic auth and upload signing.
    pub api_secret: String,
    /// Base URL of the management API (default "https://api.cloudinary.com").
    pub api_base: String,
    /// Base URL of the image delivery CDN (default "https://res.cloudinary.com").
    pub delivery_base: String,
}

impl CloudConfig {
    /// Builds a configuration after normalizing the endpoint bases.
    pub fn new(
        cloud_name: String,
        api_key: String,
        api_secret: String,
        api_base: String,
        delivery_base: String,
    ) -> Self {
        CloudConfig {
            cloud_name,
            api_key,
            api_secret,
            api_base: trim_trailing_slash(&api_base),
            delivery_base: trim_trailing_slash(&delivery_base),
        }
    }

    /// Checks that all credential values are present.
    ///
    /// Called before any network request so a missing credential surfaces as
    /// a configuration error rather than an authentication failure deep in a
    /// request.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All three credential values are non-empty.
    /// * `Err(anyhow::Error)` - Names the first missing value.
    pub fn validate(&self) -> AnyhowResult<()> {
        ensure_present(&self.cloud_name, "CLOUDINARY_CLOUD_NAME")?;
        ensure_present(&self.api_key, "CLOUDINARY_API_KEY")?;
        ensure_present(&self.api_secret, "CLOUDINARY_API_SECRET")?;
        Ok(())
    }

    /// Returns the management API root for this account, e.g.
    /// "https://api.cloudinary.com/v1_1/praveenk-portfolio".
    pub fn api_root(&self) -> String {
        format!("{}/v1_1/{}", self.api_base, self.cloud_name)
    }

    /// Returns the delivery root for this account, e.g.
    /// "https://res.cloudinary.com/praveenk-portfolio/image/upload".
    pub fn delivery_root(&self) -> String {
        format!("{}/{}/image/upload", self.delivery_base, self.cloud_name)
    }
}

fn ensure_present(value: &str, name: &str) -> AnyhowResult<()> {
    if value.trim().is_empty() {
        anyhow::bail!("Missing credential value: {}", name);
    }
    Ok(())
}

fn trim_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Builds a config suitable for tests against a mock server.
///
/// Not used by the binary; exposed so integration-style tests in other
/// modules can construct a config without repeating the field list.
pub fn test_config(api_base: &str) -> CloudConfig {
    CloudConfig::new(
        "demo".to_string(),
        "key".to_string(),
        "secret".to_string(),
        api_base.to_string(),
        "https://res.cloudinary.com".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that a fully populated configuration validates.
    #[test]
    fn test_validate_complete_config() {
        let config = test_config("https://api.cloudinary.com");
        assert!(config.validate().is_ok());
    }

    /// Tests that each missing credential is rejected before any request.
    #[test]
    fn test_validate_missing_credentials() {
        let mut config = test_config("https://api.cloudinary.com");
        config.api_secret = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("CLOUDINARY_API_SECRET"));

        let mut config = test_config("https://api.cloudinary.com");
        config.cloud_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    /// Tests endpoint root construction and slash normalization.
    #[test]
    fn test_endpoint_roots() {
        let config = CloudConfig::new(
            "demo".to_string(),
            "key".to_string(),
            "secret".to_string(),
            "https://api.cloudinary.com/".to_string(),
            "https://res.cloudinary.com/".to_string(),
        );
        assert_eq!(config.api_root(), "https://api.cloudinary.com/v1_1/demo");
        assert_eq!(
            config.delivery_root(),
            "https://res.cloudinary.com/demo/image/upload"
        );
    }
}
