//! Page abstraction the renderer writes into.
//!
//! A page is a set of regions addressed by element id, plus a list of
//! banners at the top of the body. [`PageDocument`] is the in-memory
//! implementation backed by an HTML shell with `<!-- region:ID -->` markers.

use std::collections::BTreeMap;

use htmlescape::encode_minimal as escape;

/// The page shell served by the site.
pub const DEFAULT_SHELL: &str = include_str!("../../site/static/index.html");

const MARKER_OPEN: &str = "<!-- region:";
const MARKER_CLOSE: &str = " -->";

/// A page whose regions can be replaced.
pub trait Page {
    /// Whether the page has a region with this id.
    fn has_region(&self, id: &str) -> bool;

    /// Replace a region's contents with escaped text. No-op for a missing region.
    fn set_text(&mut self, id: &str, text: &str);

    /// Replace a region's contents with markup. No-op for a missing region.
    fn set_html(&mut self, id: &str, html: String);

    /// Whether a banner with this class is already on the page.
    fn has_banner(&self, class: &str) -> bool;

    /// Insert a banner at the top of the page body.
    fn insert_banner(&mut self, class: &str, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Banner {
    class: String,
    text: String,
}

/// In-memory page built from an HTML shell.
#[derive(Debug, Clone)]
pub struct PageDocument {
    shell: String,
    regions: BTreeMap<String, String>,
    banners: Vec<Banner>,
}

impl PageDocument {
    /// Build a page from a shell, declaring one region per marker.
    #[must_use]
    pub fn from_shell(shell: impl Into<String>) -> Self {
        let shell = shell.into();
        let regions = markers(&shell)
            .map(|id| (id.to_string(), String::new()))
            .collect();

        Self {
            shell,
            regions,
            banners: Vec::new(),
        }
    }

    /// Current markup of a region.
    #[must_use]
    pub fn region(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    /// Ids of all declared regions, sorted.
    pub fn region_ids(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Number of banners on the page.
    #[must_use]
    pub fn banner_count(&self) -> usize {
        self.banners.len()
    }

    /// Produce the final HTML: markers replaced by region contents, banners
    /// inserted right after the opening `<body>` tag.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.shell.len() * 2);
        let mut rest = self.shell.as_str();

        while let Some((before, after_open)) = rest.split_once(MARKER_OPEN) {
            let Some((id, after)) = after_open.split_once(MARKER_CLOSE) else {
                break;
            };

            out.push_str(before);
            out.push_str(self.region(id.trim()).unwrap_or_default());
            rest = after;
        }
        out.push_str(rest);

        if self.banners.is_empty() {
            return out;
        }

        let banners: String = self
            .banners
            .iter()
            .map(|banner| {
                format!(
                    "\n<div class=\"{}\">{}</div>",
                    escape(&banner.class),
                    escape(&banner.text)
                )
            })
            .collect();

        match body_content_start(&out) {
            Some(index) => out.insert_str(index, &banners),
            None => out.insert_str(0, banners.trim_start()),
        }
        out
    }
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::from_shell(DEFAULT_SHELL)
    }
}

impl Page for PageDocument {
    fn has_region(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(region) = self.regions.get_mut(id) {
            *region = escape(text);
        }
    }

    fn set_html(&mut self, id: &str, html: String) {
        if let Some(region) = self.regions.get_mut(id) {
            *region = html;
        }
    }

    fn has_banner(&self, class: &str) -> bool {
        self.banners.iter().any(|banner| banner.class == class)
    }

    fn insert_banner(&mut self, class: &str, text: &str) {
        self.banners.insert(
            0,
            Banner {
                class: class.to_string(),
                text: text.to_string(),
            },
        );
    }
}

/// Region ids named by markers in `shell`, in document order.
fn markers(shell: &str) -> impl Iterator<Item = &str> {
    shell.split(MARKER_OPEN).skip(1).filter_map(|chunk| {
        chunk
            .split_once(MARKER_CLOSE)
            .map(|(id, _)| id.trim())
            .filter(|id| !id.is_empty())
    })
}

/// Byte offset just past the opening `<body ...>` tag.
fn body_content_start(html: &str) -> Option<usize> {
    let open = html.find("<body")?;
    let close = html.get(open..)?.find('>')?;
    Some(open + close + 1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SHELL: &str = "<html><body class=\"home\">\n<h1 id=\"title\"><!-- region:title --></h1>\n<ul id=\"items\"><!-- region:items --></ul>\n</body></html>";

    #[test]
    fn test_regions_from_markers() {
        let page = PageDocument::from_shell(SHELL);
        assert_eq!(page.region_ids().collect::<Vec<_>>(), vec!["items", "title"]);
        assert!(page.has_region("title"));
        assert!(!page.has_region("missing"));
    }

    #[test]
    fn test_default_shell_declares_every_region() {
        let page = PageDocument::default();
        for id in [
            "hero-title",
            "hero-subtitle",
            "primary-cta",
            "secondary-cta",
            "hero-stats",
            "delivery-slot",
            "delivery-items",
            "delivery-cta",
            "category-grid",
            "product-grid",
            "service-grid",
            "testimonial-grid",
            "year",
        ] {
            assert!(page.has_region(id), "missing region {id}");
        }
    }

    #[test]
    fn test_set_text_escapes_and_missing_region_is_noop() {
        let mut page = PageDocument::from_shell(SHELL);
        page.set_text("title", "Fish & Chips");
        page.set_text("missing", "ignored");

        assert_eq!(page.region("title"), Some("Fish &amp; Chips"));
        assert_eq!(page.region("missing"), None);
    }

    #[test]
    fn test_render_fills_markers_and_inserts_banners_after_body() {
        let mut page = PageDocument::from_shell(SHELL);
        page.set_text("title", "Hello");
        page.set_html("items", "<li>one</li>".to_string());
        page.insert_banner("status-banner", "Offline");

        let html = page.render();
        assert_eq!(
            html,
            "<html><body class=\"home\">\n<div class=\"status-banner\">Offline</div>\n<h1 id=\"title\">Hello</h1>\n<ul id=\"items\"><li>one</li></ul>\n</body></html>"
        );
    }

    #[test]
    fn test_render_without_body_prepends_banner() {
        let mut page = PageDocument::from_shell("<p><!-- region:x --></p>");
        page.insert_banner("status-banner", "Offline");

        assert_eq!(
            page.render(),
            "<div class=\"status-banner\">Offline</div><p></p>"
        );
    }

    #[test]
    fn test_has_banner() {
        let mut page = PageDocument::from_shell(SHELL);
        assert!(!page.has_banner("status-banner"));
        page.insert_banner("status-banner", "Offline");
        assert!(page.has_banner("status-banner"));
        assert_eq!(page.banner_count(), 1);
    }
}
