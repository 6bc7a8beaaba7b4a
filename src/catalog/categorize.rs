use super::types::Category;
use once_cell::sync::Lazy;
use regex::Regex;

/// Folder-name spellings observed in the remote store, mapped to their
/// category. The store accumulated misspelled folders over the years
/// ("Potraits", "Jelws"), so each known spelling is listed explicitly.
const FOLDER_TABLE: &[(&str, Category)] = &[
    ("documentary", Category::Documentary),
    ("documentry", Category::Documentary),
    ("interior", Category::Interior),
    ("jewellery", Category::Jewels),
    ("jewels", Category::Jewels),
    ("jelws", Category::Jewels),
    ("macro", Category::Macro),
    ("portraits", Category::Portraits),
    ("potraits", Category::Portraits),
    ("product", Category::Product),
    ("street", Category::Street),
];

/// Matches filenames that begin with a run of digits and an underscore,
/// the naming convention of the product catalog shoots.
static PRODUCT_SERIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+_").expect("valid pattern"));

/// Assigns a category to an asset identifier.
///
/// A pure total function: the same identifier always yields the same label.
/// Rules are evaluated in order and the first match wins:
///
/// 1. If the identifier's second path segment is a known folder spelling,
///    that folder's category wins.
/// 2. Otherwise, case-insensitive substring rules over the whole identifier
///    (shoot prefixes like "EOL" and "DSC00", and subject keywords).
/// 3. Otherwise, [`Category::Uncategorized`].
///
/// # Arguments
///
/// * `public_id` - The slash-segmented asset identifier.
///
/// # Returns
///
/// The matched category label.
///
/// # Examples
///
/// ```rust
/// use portfolio_assets::catalog::{categorize, Category};
///
/// let category = categorize("Praveen-PortfolioPics/Documentary/EOL01550_ki1e13");
/// assert_eq!(category, Category::Documentary);
/// ```
pub fn categorize(public_id: &str) -> Category {
    if let Some(category) = folder_category(public_id) {
        return category;
    }

    let id = public_id.to_lowercase();
    if id.contains("eol") {
        return Category::Documentary;
    }
    if id.contains("dsc00") || id.contains("portrait") {
        return Category::Portraits;
    }
    if id.contains("untitled_hdr") || id.contains("interior") {
        return Category::Interior;
    }
    if id.contains("jewel") || id.contains("watch") {
        return Category::Jewels;
    }
    if id.contains("product") || PRODUCT_SERIAL.is_match(filename_segment(&id)) {
        return Category::Product;
    }

    Category::Uncategorized
}

/// Looks up the identifier's second path segment in the folder table.
///
/// Only identifiers with at least root/subfolder/file depth carry a
/// category-bearing folder segment.
fn folder_category(public_id: &str) -> Option<Category> {
    let segments: Vec<&str> = public_id.split('/').collect();
    if segments.len() < 3 {
        return None;
    }
    let subfolder = segments[1].to_lowercase();
    FOLDER_TABLE
        .iter()
        .find(|(name, _)| *name == subfolder)
        .map(|(_, category)| *category)
}

fn filename_segment(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the documentary folder segment mapping.
    #[test]
    fn test_categorize_documentary_folder() {
        assert_eq!(
            categorize("Praveen-PortfolioPics/Documentary/EOL01550_ki1e13"),
            Category::Documentary
        );
    }

    /// Tests that every known folder spelling maps to its category.
    #[test]
    fn test_categorize_folder_spellings() {
        assert_eq!(
            categorize("Praveen-PortfolioPics/Potraits/DSC00412"),
            Category::Portraits
        );
        assert_eq!(
            categorize("Praveen-PortfolioPics/Jelws/ring_05"),
            Category::Jewels
        );
        assert_eq!(
            categorize("Praveen-PortfolioPics/Documentry/scene_2"),
            Category::Documentary
        );
        assert_eq!(
            categorize("Praveen-PortfolioPics/Street/DSC01077"),
            Category::Street
        );
    }

    /// Tests that the folder segment wins over filename substrings.
    #[test]
    fn test_folder_beats_filename() {
        assert_eq!(
            categorize("Praveen-PortfolioPics/Macro/portrait_closeup"),
            Category::Macro
        );
    }

    /// Tests the filename substring tier for assets outside the folder layout.
    #[test]
    fn test_categorize_by_filename() {
        assert_eq!(categorize("EOL01550_ki1e13"), Category::Documentary);
        assert_eq!(categorize("DSC00871_edit"), Category::Portraits);
        assert_eq!(categorize("Untitled_HDR2"), Category::Interior);
        assert_eq!(categorize("gold_watch_05"), Category::Jewels);
        assert_eq!(categorize("misc/341_bottle"), Category::Product);
    }

    /// Tests the fallback label.
    #[test]
    fn test_categorize_fallback() {
        assert_eq!(categorize("random_shot"), Category::Uncategorized);
        assert_eq!(categorize("a/b"), Category::Uncategorized);
    }

    /// Tests that repeated calls return the same label.
    #[test]
    fn test_categorize_is_pure() {
        let id = "Praveen-PortfolioPics/Street/DSC01077";
        assert_eq!(categorize(id), categorize(id));
    }
}
