use crate::catalog::DEFAULT_TRANSFORM;
use crate::config::CloudConfig;
use anyhow::{Context, Result as AnyhowResult};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Local photo directory prefixes mapped to their remote folder paths.
/// Most specific first; the bare "Photos/" entry is the catch-all.
const PATH_MAPPINGS: &[(&str, &str)] = &[
    ("Photos/portfolio/documentry/", "portfolio/documentary/"),
    ("Photos/portfolio/potraits/", "portfolio/portraits/"),
    ("Photos/portfolio/product/", "portfolio/product/"),
    ("Photos/portfolio/macro/", "portfolio/macro/"),
    ("Photos/portfolio/street/", "portfolio/street/"),
    ("Photos/portfolio/interior/", "portfolio/interior/"),
    ("Photos/portfolio/jelws/", "portfolio/jewels/"),
    ("Photos/", "portfolio/featured/"),
];

static IMG_SRC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(<img[^>]*src=["'])Photos/([^"']+)(["'])"#).expect("valid pattern"));

static IMAGE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp)$").expect("valid pattern"));

/// Rewrites local image references in an HTML file to delivery URLs.
///
/// The original file is copied to `{path}.backup` first, then every
/// `<img src="Photos/...">` reference is replaced with a delivery URL:
/// the local prefix is mapped through the folder table, the file extension
/// is stripped, and the default transformation is applied. The file is
/// rewritten in place.
///
/// # Arguments
///
/// * `path` - The HTML file to rewrite.
/// * `config` - Account configuration, for the delivery root.
///
/// # Returns
///
/// * `Ok(usize)` - Number of image references rewritten.
/// * `Err(anyhow::Error)` - Reading, backing up, or writing the file failed.
pub fn rewrite_html(path: &Path, config: &CloudConfig) -> AnyhowResult<usize> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read HTML file: {}", path.display()))?;

    let backup_path = backup_path_for(path);
    fs::write(&backup_path, &content)
        .context(format!("Failed to write backup: {}", backup_path.display()))?;

    let delivery_root = config.delivery_root();
    let mut replaced = 0usize;
    let updated = IMG_SRC.replace_all(&content, |caps: &regex::Captures| {
        replaced += 1;
        let url = delivery_url(&delivery_root, &caps[2]);
        format!("{}{}{}", &caps[1], url, &caps[3])
    });

    fs::write(path, updated.as_bytes())
        .context(format!("Failed to write HTML file: {}", path.display()))?;
    info!("Rewrote {} image reference(s) in {}", replaced, path.display());
    Ok(replaced)
}

/// Builds the delivery URL for one local image path (without the leading
/// "Photos/").
fn delivery_url(delivery_root: &str, local_path: &str) -> String {
    let full_local = format!("Photos/{}", local_path);
    let mut remote_path = full_local.clone();
    for (local, remote) in PATH_MAPPINGS {
        if full_local.starts_with(local) {
            remote_path = full_local.replacen(local, remote, 1);
            break;
        }
    }
    let remote_path = IMAGE_EXTENSION.replace(&remote_path, "");
    format!("{}/{}/{}", delivery_root, DEFAULT_TRANSFORM, remote_path)
}

fn backup_path_for(path: &Path) -> PathBuf {
    PathBuf::from(format!("{}.backup", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    /// Tests the prefix mapping, extension strip, and transform insertion.
    #[test]
    fn test_delivery_url() {
        let url = delivery_url(
            "https://res.cloudinary.com/demo/image/upload",
            "portfolio/street/shot1.JPG",
        );
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/c_limit,w_800,q_auto,f_auto/portfolio/street/shot1"
        );
    }

    /// Tests the catch-all mapping for images outside the portfolio tree.
    #[test]
    fn test_delivery_url_catch_all() {
        let url = delivery_url(
            "https://res.cloudinary.com/demo/image/upload",
            "banner.png",
        );
        assert!(url.ends_with("/portfolio/featured/banner"));
    }

    /// Tests in-place rewriting with a backup of the original.
    #[test]
    fn test_rewrite_html_with_backup() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        let original = concat!(
            "<html><body>\n",
            "<img class=\"hero\" src=\"Photos/portfolio/street/shot1.jpg\" alt=\"street\">\n",
            "<img src='Photos/portfolio/jelws/ring.png'>\n",
            "<img src=\"css/icon.svg\">\n",
            "</body></html>\n"
        );
        fs::write(&page, original).unwrap();

        let config = test_config("https://api.cloudinary.com");
        let replaced = rewrite_html(&page, &config).unwrap();

        assert_eq!(replaced, 2);
        let backup = fs::read_to_string(dir.path().join("index.html.backup")).unwrap();
        assert_eq!(backup, original);

        let updated = fs::read_to_string(&page).unwrap();
        assert!(updated.contains(
            "src=\"https://res.cloudinary.com/demo/image/upload/c_limit,w_800,q_auto,f_auto/portfolio/street/shot1\""
        ));
        assert!(updated.contains("portfolio/jewels/ring"));
        assert!(!updated.contains("src=\"Photos/"));
        // Non-photo assets are untouched.
        assert!(updated.contains("src=\"css/icon.svg\""));
    }
}
