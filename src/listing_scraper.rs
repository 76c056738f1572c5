use indexmap::IndexMap;
use log::{debug, info};
use scraper::Html;

use crate::{
    config::ScrapingConfig,
    error::{ListingError, SelectorError},
    monitored_lines::MonitoredLineSet,
    requests::PageSource,
    text_manipulators::{extract_text, get_absolute_link, parse_selector},
};

/// Line name -> absolute detail page URL, in listing order.
pub type TroubledLineLinks = IndexMap<String, String>;

const LINE_TABLE_SELECTOR: &str = ".elmTblLstLine";
const LINK_SELECTOR: &str = "a";

/// Downloads the area status page and returns the monitored lines it lists
/// as disrupted.
pub async fn fetch_troubled_lines(
    source: &impl PageSource,
    config: &ScrapingConfig,
    monitored: &MonitoredLineSet,
) -> Result<TroubledLineLinks, ListingError> {
    info!("Fetching latest service status from {}", config.listing_url);
    let html = source
        .fetch_page(&config.listing_url, config.listing_timeout)
        .await?;
    info!("Listing page downloaded, parsing");
    let links = parse_listing(&html, &config.base_url, monitored)?;
    Ok(links)
}

/// A page without the line table means nothing is disrupted, not an error.
pub fn parse_listing(
    html: &str,
    base_url: &str,
    monitored: &MonitoredLineSet,
) -> Result<TroubledLineLinks, SelectorError> {
    let table_selector = parse_selector(LINE_TABLE_SELECTOR)?;
    let link_selector = parse_selector(LINK_SELECTOR)?;
    let document = Html::parse_document(html);

    let mut links = TroubledLineLinks::new();
    let Some(table) = document.select(&table_selector).next() else {
        debug!("No {LINE_TABLE_SELECTOR} table on the listing page");
        return Ok(links);
    };

    for link in table.select(&link_selector) {
        let line_name = extract_text(link);
        let href = link.value().attr("href").unwrap_or("");
        if line_name.is_empty() || href.is_empty() {
            continue;
        }
        if !monitored.contains(&line_name) {
            debug!("Skipping unmonitored line {line_name}");
            continue;
        }
        // Duplicates keep their first position but take the latest href.
        links.insert(line_name, get_absolute_link(base_url, href));
    }
    Ok(links)
}
