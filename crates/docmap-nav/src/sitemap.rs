//! Sitemap and redirect file rendering.
//!
//! Both files are produced from a built [`Navigation`]: the sitemap lists
//! every page in document order, the redirects file lists every alias.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::navigation::Navigation;

/// Sitemap XML namespace.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Builds absolute page URLs for the exported site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteUrls {
    base_url: String,
    trailing_slash: bool,
}

impl SiteUrls {
    /// Create a URL builder.
    ///
    /// `base_url` is the scheme and host (plus any mount prefix); a trailing
    /// slash on it is ignored.
    #[must_use]
    pub fn new(base_url: &str, trailing_slash: bool) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            trailing_slash,
        }
    }

    /// Absolute URL of a page path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_end_matches('/');
        if self.trailing_slash {
            format!("{}{path}/", self.base_url)
        } else if path.is_empty() {
            format!("{}/", self.base_url)
        } else {
            format!("{}{path}", self.base_url)
        }
    }
}

/// Render a `<urlset>` sitemap of every page.
///
/// # Errors
///
/// Returns an error only if writing to the in-memory buffer fails.
pub fn render_sitemap(nav: &Navigation, urls: &SiteUrls) -> io::Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;
    for entry in nav.entries() {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer.write_event(Event::Start(BytesStart::new("loc")))?;
        writer.write_event(Event::Text(BytesText::new(&urls.url(&entry.path))))?;
        writer.write_event(Event::End(BytesEnd::new("loc")))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    xml.push('\n');
    Ok(xml)
}

/// Render alias redirects as `from to 301` lines.
///
/// Targets carry the same trailing-slash convention as exported pages;
/// sources are emitted as authored.
#[must_use]
pub fn render_redirects(nav: &Navigation, trailing_slash: bool) -> String {
    let urls = SiteUrls::new("", trailing_slash);
    nav.redirects()
        .iter()
        .map(|redirect| format!("{} {} 301\n", redirect.from, urls.url(&redirect.to)))
        .collect()
}
