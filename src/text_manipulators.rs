use scraper::{ElementRef, Selector};

use crate::error::SelectorError;

/// Visible text of `node`, with every text fragment trimmed and the
/// non-empty ones glued together.
pub fn extract_text(node: ElementRef) -> String {
    node.text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<String>()
}

/// Root-relative hrefs get the site's base URL in front; anything else is
/// returned as is.
pub fn get_absolute_link(base_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

pub fn parse_selector(css: &'static str) -> Result<Selector, SelectorError> {
    Selector::parse(css).map_err(|e| SelectorError {
        css,
        message: e.to_string(),
    })
}
