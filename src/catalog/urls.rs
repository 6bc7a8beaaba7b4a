use std::collections::BTreeMap;

/// The fixed transformation presets used across the site.
///
/// Every asset gets one derived-image URL per preset. The `placeholder`
/// preset is the tiny blurred image swapped out by the lazy loader.
const PRESETS: &[(&str, &str)] = &[
    ("thumbnail", "c_fill,w_400,h_400,g_auto,q_auto,f_auto"),
    ("small", "c_limit,w_400,q_auto,f_auto"),
    ("medium", "c_limit,w_800,q_auto,f_auto"),
    ("large", "c_limit,w_1200,q_auto,f_auto"),
    ("xlarge", "c_limit,w_2000,q_auto:best,f_auto"),
    ("gallery", "c_limit,w_600,q_auto:good,f_auto"),
    ("hero", "c_fill,w_1920,h_1080,g_auto,q_auto,f_auto"),
    ("placeholder", "c_limit,w_50,q_auto,e_blur:1000"),
];

/// Default transformation applied when rewriting plain `<img>` references.
pub const DEFAULT_TRANSFORM: &str = "c_limit,w_800,q_auto,f_auto";

/// Returns the preset table as a name-to-transform map.
pub fn preset_table() -> BTreeMap<String, String> {
    PRESETS
        .iter()
        .map(|(name, transform)| (name.to_string(), transform.to_string()))
        .collect()
}

/// Produces one derived-image URL per preset for an asset.
///
/// Pure string interpolation: `{delivery_root}/{transform}/{public_id}` for
/// each preset. The output map's key set always equals the preset table's
/// key set.
///
/// # Arguments
///
/// * `delivery_root` - The account delivery root, e.g.
///   "https://res.cloudinary.com/demo/image/upload".
/// * `public_id` - The asset identifier.
///
/// # Returns
///
/// Preset name mapped to its fully-qualified URL.
pub fn synthesize_urls(delivery_root: &str, public_id: &str) -> BTreeMap<String, String> {
    PRESETS
        .iter()
        .map(|(name, transform)| {
            (
                name.to_string(),
                format!("{}/{}/{}", delivery_root, transform, public_id),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "https://res.cloudinary.com/demo/image/upload";

    /// Tests that the output key set equals the preset table's key set.
    #[test]
    fn test_synthesize_urls_key_set() {
        let urls = synthesize_urls(ROOT, "Praveen-PortfolioPics/Street/DSC01077");
        let presets = preset_table();
        assert_eq!(
            urls.keys().collect::<Vec<_>>(),
            presets.keys().collect::<Vec<_>>()
        );
        assert_eq!(urls.len(), 8);
    }

    /// Tests the interpolated URL shape.
    #[test]
    fn test_synthesize_urls_shape() {
        let urls = synthesize_urls(ROOT, "Shoots/Macro/leaf_01");
        assert_eq!(
            urls["placeholder"],
            "https://res.cloudinary.com/demo/image/upload/c_limit,w_50,q_auto,e_blur:1000/Shoots/Macro/leaf_01"
        );
        assert_eq!(
            urls["thumbnail"],
            "https://res.cloudinary.com/demo/image/upload/c_fill,w_400,h_400,g_auto,q_auto,f_auto/Shoots/Macro/leaf_01"
        );
    }

    /// Tests determinism across repeated calls.
    #[test]
    fn test_synthesize_urls_deterministic() {
        let a = synthesize_urls(ROOT, "x/y/z");
        let b = synthesize_urls(ROOT, "x/y/z");
        assert_eq!(a, b);
    }
}
