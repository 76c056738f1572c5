mod config;
mod detail_scraper;
mod error;
mod listing_scraper;
mod monitored_lines;
mod pipeline;
mod ratelimit;
mod report;
mod requests;
mod retry;
mod scraping_context;
mod text_manipulators;

pub use config::{BASE_URL, ScrapingConfig, TARGET_URL};
pub use detail_scraper::{
    DEFAULT_STATUS, PLACEHOLDER_DETAIL, ParsedDetail, enrich_line, fetch_line_report,
    parse_detail, placeholder,
};
pub use error::{DetailError, FetchError, ListingError, SelectorError};
pub use listing_scraper::{TroubledLineLinks, fetch_troubled_lines, parse_listing};
pub use monitored_lines::{MonitoredLineSet, TOKYO_LINES};
pub use pipeline::{run, run_at, scrape_transit_issues};
pub use ratelimit::Pacer;
pub use report::{LineReport, RunReport, RunStatus, assemble_report, format_update_time};
pub use requests::{PageSource, RequestClient};
pub use retry::attempt;
pub use scraping_context::ScrapingContext;
