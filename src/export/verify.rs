use super::metadata::read_metadata;
use anyhow::Result as AnyhowResult;
use std::fs;
use std::path::Path;

/// Outcome of one verification check.
#[derive(Debug)]
pub struct Check {
    /// Short name of the check.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable detail for the report.
    pub detail: String,
}

/// Full verification report over the persisted outputs.
#[derive(Debug)]
pub struct VerifyReport {
    /// Individual checks, in execution order.
    pub checks: Vec<Check>,
}

impl VerifyReport {
    /// True when every check passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }
}

/// Verifies the persisted metadata document and generated pages.
///
/// Re-reads the document and checks the invariants consumers rely on:
/// the recorded total matches the sequence length, the per-label counts
/// match the aggregate map, the sequence is sorted by (category, filename),
/// and each category's page exists with one lazy-loaded image per asset.
///
/// # Arguments
///
/// * `metadata_path` - Path of the full metadata file.
/// * `pages_dir` - Directory holding the generated category pages.
///
/// # Returns
///
/// * `Ok(VerifyReport)` - The report; inspect [`VerifyReport::passed`].
/// * `Err(anyhow::Error)` - The metadata file could not be read or parsed.
pub fn verify_outputs(metadata_path: &Path, pages_dir: &Path) -> AnyhowResult<VerifyReport> {
    let document = read_metadata(metadata_path)?;
    let mut checks = Vec::new();

    let total_matches = document.total_images == document.images.len();
    checks.push(Check {
        name: "total-images".to_string(),
        passed: total_matches,
        detail: format!(
            "recorded {} / actual {}",
            document.total_images,
            document.images.len()
        ),
    });

    let mut counts_consistent = true;
    for (label, count) in &document.categories {
        let actual = document
            .images
            .iter()
            .filter(|image| image.category.as_str() == label)
            .count();
        if actual != *count {
            counts_consistent = false;
        }
    }
    let labelled: usize = document.categories.values().sum();
    counts_consistent &= labelled == document.images.len();
    checks.push(Check {
        name: "category-counts".to_string(),
        passed: counts_consistent,
        detail: format!("{} label(s), {} image(s)", document.categories.len(), labelled),
    });

    let sorted = document.images.windows(2).all(|pair| {
        (pair[0].category.as_str(), pair[0].filename.as_str())
            <= (pair[1].category.as_str(), pair[1].filename.as_str())
    });
    checks.push(Check {
        name: "sort-order".to_string(),
        passed: sorted,
        detail: "category then filename, ascending".to_string(),
    });

    for (label, count) in &document.categories {
        let page_path = pages_dir.join(format!("{}.html", label));
        match fs::read_to_string(&page_path) {
            Ok(html) => {
                let lazy_images = html.matches("data-src=").count();
                checks.push(Check {
                    name: format!("page-{}", label),
                    passed: lazy_images == *count,
                    detail: format!("{} lazy image(s), expected {}", lazy_images, count),
                });
            }
            Err(_) => checks.push(Check {
                name: format!("page-{}", label),
                passed: false,
                detail: format!("missing: {}", page_path.display()),
            }),
        }
    }

    Ok(VerifyReport { checks })
}
