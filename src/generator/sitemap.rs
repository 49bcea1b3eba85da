//! Sitemap generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/about/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    route::Route,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use std::fs;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Write `sitemap.xml` for `routes` if enabled and `[base] url` is set.
///
/// Returns whether a file was written.
pub fn build_sitemap(config: &SiteConfig, routes: &[Route]) -> Result<bool> {
    let Some(base_url) = config.base.url.as_deref() else {
        return Ok(false);
    };
    if !config.build.sitemap.enable {
        return Ok(false);
    }

    let sitemap = Sitemap::from_routes(base_url, routes);
    sitemap.write(config)?;
    Ok(true)
}

struct Sitemap {
    /// Absolute page URLs
    urls: Vec<String>,
}

impl Sitemap {
    fn from_routes(base_url: &str, routes: &[Route]) -> Self {
        let base_url = base_url.trim_end_matches('/');
        let urls = routes
            .iter()
            .map(|route| match route.path() {
                "/" => format!("{base_url}/"),
                path => format!("{base_url}{path}/"),
            })
            .collect();
        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 64);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for loc in &self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(loc)));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.sitemap_path();
        let xml = self.into_xml();
        let xml = minify(MinifyType::Xml(xml.as_bytes()), config);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sitemap_path, &*xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("build"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
