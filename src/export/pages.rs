use crate::catalog::{CategorizedAsset, MetadataDocument};
use anyhow::{Context, Result as AnyhowResult};
use log::info;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Browser-side lazy loader emitted alongside the pages.
///
/// Observes every `img[data-src]` and swaps the blurred placeholder for the
/// full image once the element nears the viewport; browsers without
/// IntersectionObserver load everything immediately.
const LAZY_LOADER_JS: &str = r#"(function () {
  'use strict';

  function loadImage(img) {
    var fullSrc = img.getAttribute('data-src');
    if (!fullSrc) return;
    var preload = new Image();
    preload.onload = function () {
      img.src = fullSrc;
      img.classList.add('loaded');
      img.classList.remove('loading');
    };
    preload.onerror = function () {
      img.classList.add('error');
      img.classList.remove('loading');
    };
    img.classList.add('loading');
    preload.src = fullSrc;
  }

  function observeAll() {
    var images = document.querySelectorAll('img[data-src]');
    if (!('IntersectionObserver' in window)) {
      images.forEach(loadImage);
      return;
    }
    var observer = new IntersectionObserver(function (entries, obs) {
      entries.forEach(function (entry) {
        if (entry.isIntersecting) {
          loadImage(entry.target);
          obs.unobserve(entry.target);
        }
      });
    }, { root: null, rootMargin: '50px', threshold: 0.01 });
    images.forEach(function (img) { observer.observe(img); });
  }

  window.LazyLoader = { observeAll: observeAll, loadImage: loadImage };

  if (document.readyState === 'loading') {
    document.addEventListener('DOMContentLoaded', observeAll);
  } else {
    observeAll();
  }
})();
"#;

/// Renders each category in the document to a static gallery page.
///
/// One HTML file per category present in the document, written to
/// `{output_dir}/{label}.html`, plus the lazy loader script at
/// `{output_dir}/js/lazy-loader.js`. Existing files are overwritten.
///
/// # Arguments
///
/// * `document` - The persisted metadata document.
/// * `output_dir` - Site directory receiving the pages.
///
/// # Returns
///
/// * `Ok(Vec<(String, usize)>)` - Page file name and image count per category.
/// * `Err(anyhow::Error)` - Directory creation or a write failed.
pub fn generate_category_pages(
    document: &MetadataDocument,
    output_dir: &Path,
) -> AnyhowResult<Vec<(String, usize)>> {
    fs::create_dir_all(output_dir).context(format!(
        "Failed to create pages directory: {}",
        output_dir.display()
    ))?;

    let by_category = group_by_category(document);
    let labels: Vec<&str> = by_category.keys().copied().collect();
    let mut generated = Vec::new();

    for (label, images) in &by_category {
        let display_name = images[0].category.display_name();
        let html = category_page_html(label, display_name, &labels, images);
        let filename = format!("{}.html", label);
        let page_path = output_dir.join(&filename);
        fs::write(&page_path, html)
            .context(format!("Failed to write page: {}", page_path.display()))?;
        info!("Generated {} ({} images)", filename, images.len());
        generated.push((filename, images.len()));
    }

    let js_dir = output_dir.join("js");
    fs::create_dir_all(&js_dir)
        .context(format!("Failed to create script directory: {}", js_dir.display()))?;
    let loader_path = js_dir.join("lazy-loader.js");
    fs::write(&loader_path, LAZY_LOADER_JS)
        .context(format!("Failed to write loader: {}", loader_path.display()))?;

    Ok(generated)
}

/// Groups the document's sorted image sequence by category label.
///
/// The per-category order is inherited from the document's (category,
/// filename) sort.
fn group_by_category(document: &MetadataDocument) -> BTreeMap<&str, Vec<&CategorizedAsset>> {
    let mut by_category: BTreeMap<&str, Vec<&CategorizedAsset>> = BTreeMap::new();
    for image in &document.images {
        by_category.entry(image.category.as_str()).or_default().push(image);
    }
    by_category
}

/// Renders one category gallery page.
fn category_page_html(
    label: &str,
    display_name: &str,
    labels: &[&str],
    images: &[&CategorizedAsset],
) -> String {
    let nav_items = labels
        .iter()
        .map(|other| {
            let class = if *other == label { " class=\"active\"" } else { "" };
            format!(
                "            <li{}><a href=\"{}.html\">{}</a></li>",
                class,
                other,
                capitalize(other)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let gallery_items = images
        .iter()
        .map(|image| {
            format!(
                r#"        <div class="col-md-6 col-lg-3 item">
          <a href="{large}" class="item-wrap" data-fancybox="gallery">
            <span class="icon-search2"></span>
            <img
              src="{placeholder}"
              data-src="{gallery}"
              alt="{display_name} - {filename}"
              class="img-fluid placeholder">
          </a>
        </div>"#,
                large = image.urls["large"],
                placeholder = image.urls["placeholder"],
                gallery = image.urls["gallery"],
                display_name = display_name,
                filename = image.filename,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>{display_name} - Photography Portfolio</title>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
  <meta name="description" content="{display_name} - Professional photography portfolio featuring {count} images">
  <link rel="stylesheet" href="css/bootstrap.min.css">
  <link rel="stylesheet" href="css/style.css">
  <link rel="stylesheet" href="css/lazy-loading.css">
</head>
<body>
  <div class="site-wrap">
    <header class="site-navbar py-3" role="banner">
      <div class="container-fluid">
        <div class="row align-items-center">
          <div class="col-6 col-xl-2">
            <h1 class="mb-0"><a href="index.html" class="text-white h2 mb-0">Home</a></h1>
          </div>
          <nav class="site-navigation" role="navigation">
            <ul class="site-menu">
{nav_items}
            </ul>
          </nav>
        </div>
      </div>
    </header>

    <div class="site-section">
      <div class="container-fluid">
        <div class="row justify-content-center mb-5">
          <div class="col-md-7 text-center">
            <h2 class="site-section-heading text-center">{display_name}</h2>
            <p class="lead">{count} Professional Photos</p>
          </div>
        </div>

        <div class="row" id="gallery">
{gallery_items}
        </div>
      </div>
    </div>
  </div>

  <script src="js/lazy-loader.js"></script>
  <script>
    window.LazyLoader.observeAll();
  </script>
</body>
</html>
"#,
        display_name = display_name,
        count = images.len(),
        nav_items = nav_items,
        gallery_items = gallery_items,
    )
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_document;
    use crate::config::test_config;
    use crate::fetch::AssetRecord;

    fn record(public_id: &str) -> AssetRecord {
        AssetRecord {
            public_id: public_id.to_string(),
            format: "jpg".to_string(),
            bytes: 2048,
            width: 1920,
            height: 1280,
            created_at: "2023-07-22T06:11:21Z".to_string(),
            secure_url: String::new(),
            asset_folder: None,
        }
    }

    /// Tests one page per category plus the loader script.
    #[test]
    fn test_generate_pages_per_category() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config("https://api.cloudinary.com");
        let document = build_document(
            &config,
            "Shoots",
            vec![
                record("Shoots/Street/a"),
                record("Shoots/Street/b"),
                record("Shoots/Macro/c"),
            ],
        );

        let generated = generate_category_pages(&document, dir.path()).unwrap();

        assert_eq!(
            generated,
            vec![("macro.html".to_string(), 1), ("street.html".to_string(), 2)]
        );
        assert!(dir.path().join("street.html").exists());
        assert!(dir.path().join("macro.html").exists());
        assert!(dir.path().join("js").join("lazy-loader.js").exists());
    }

    /// Tests the lazy-load markup: one data-src per image, placeholder as src.
    #[test]
    fn test_page_markup() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config("https://api.cloudinary.com");
        let document = build_document(
            &config,
            "Shoots",
            vec![record("Shoots/Street/a"), record("Shoots/Street/b")],
        );

        generate_category_pages(&document, dir.path()).unwrap();
        let html = fs::read_to_string(dir.path().join("street.html")).unwrap();

        assert_eq!(html.matches("data-src=").count(), 2);
        assert!(html.contains("c_limit,w_50,q_auto,e_blur:1000/Shoots/Street/a"));
        assert!(html.contains("c_limit,w_600,q_auto:good,f_auto/Shoots/Street/a"));
        assert!(html.contains("2 Professional Photos"));
        assert!(html.contains("Street Photography"));
    }

    /// Tests that an empty document yields no pages but still succeeds.
    #[test]
    fn test_generate_pages_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config("https://api.cloudinary.com");
        let document = build_document(&config, "Shoots", Vec::new());

        let generated = generate_category_pages(&document, dir.path()).unwrap();
        assert!(generated.is_empty());
        assert!(dir.path().join("js").join("lazy-loader.js").exists());
    }
}
