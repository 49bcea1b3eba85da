//! Minification for generated HTML and XML.
//!
//! Both kinds pass through untouched when `[build] minify = false`.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// Content type for minification.
pub enum MinifyType<'a> {
    Html(&'a [u8]),
    Xml(&'a [u8]),
}

/// Minify content based on type and config.
///
/// Returns `Cow::Borrowed` if minify is disabled.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    match (config.build.minify, content) {
        (false, MinifyType::Html(bytes) | MinifyType::Xml(bytes)) => Cow::Borrowed(bytes),
        (true, MinifyType::Html(html)) => Cow::Owned(minify_html_inner(html)),
        (true, MinifyType::Xml(xml)) => Cow::Owned(minify_xml_inner(xml)),
    }
}

/// Pages carry their stylesheet inline, so CSS is minified too.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    minify_html::minify(html, &cfg)
}

/// Drop indentation and blank lines.
fn minify_xml_inner(xml: &[u8]) -> Vec<u8> {
    String::from_utf8_lossy(xml)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>()
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_minify(enabled: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = enabled;
        config
    }

    #[test]
    fn test_minify_html() {
        let html = b"<html>\n  <head>\n  <style>body { color : red ; }</style>\n  </head>\n  <body>\n    <p>Hello World</p>\n  </body>\n</html>";
        let minified = minify(MinifyType::Html(html), &config_with_minify(true));
        let result = String::from_utf8_lossy(&minified);

        assert!(!result.contains("\n  "));
        assert!(result.contains("<p>Hello World</p>"));
        assert!(minified.len() < html.len());
    }

    #[test]
    fn test_minify_disabled_borrows() {
        let html = b"<html>\n  <body>\n  </body>\n</html>";
        let result = minify(MinifyType::Html(html), &config_with_minify(false));
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(&*result, html);

        let xml = b"<root>\n  <item/>\n</root>";
        let result = minify(MinifyType::Xml(xml), &config_with_minify(false));
        assert_eq!(&*result, xml);
    }

    #[test]
    fn test_minify_xml() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">

  <url>
    <loc>https://example.com/</loc>
  </url>
</urlset>"#;
        let result = minify(MinifyType::Xml(xml), &config_with_minify(true));

        assert_eq!(
            &*result,
            br#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>https://example.com/</loc></url></urlset>"#
        );
    }

    #[test]
    fn test_minify_xml_keeps_inner_spaces() {
        let xml = b"  <tag>  content  </tag>  ";
        let result = minify(MinifyType::Xml(xml), &config_with_minify(true));
        assert_eq!(&*result, b"<tag>  content  </tag>");
    }
}
