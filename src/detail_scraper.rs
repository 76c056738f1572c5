use log::{debug, info, warn};
use scraper::Html;

use crate::{
    config::ScrapingConfig,
    error::{DetailError, FetchError, SelectorError},
    report::LineReport,
    requests::PageSource,
    retry,
    text_manipulators::{extract_text, parse_selector},
};

/// Shown when the page has no status label, and in placeholder reports.
pub const DEFAULT_STATUS: &str = "運転状況";
pub const PLACEHOLDER_DETAIL: &str = "詳細情報の取得に失敗しました。";

const CONTENTS_BODY_SELECTOR: &str = "#contents-body";
const PARAGRAPH_SELECTOR: &str = "p";
const STATUS_LABEL_SELECTOR: &str = ".labelStatus";

/// Paragraphs containing these are page chrome, not incident text.
const BOILERPLATE_MARKERS: [&str; 2] = ["路線を登録", "迂回ルート"];
const MIN_DETAIL_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDetail {
    pub status: String,
    pub detail: String,
}

/// Fetches one line's detail page, retrying timeouts, and pulls out its
/// status label and incident text.
pub async fn fetch_line_report(
    source: &impl PageSource,
    config: &ScrapingConfig,
    line: &str,
    url: &str,
) -> Result<LineReport, DetailError> {
    let html = retry::attempt(
        config.max_attempts,
        config.retry_backoff,
        FetchError::is_transient,
        |_| source.fetch_page(url, config.detail_timeout),
    )
    .await
    .map_err(|source| DetailError::FetchFailed {
        line: line.to_string(),
        source,
    })?;

    let parsed = match parse_detail(&html) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            return Err(DetailError::DetailNotFound {
                line: line.to_string(),
            });
        }
        Err(e) => {
            debug!("{e}");
            return Err(DetailError::DetailNotFound {
                line: line.to_string(),
            });
        }
    };

    Ok(LineReport {
        line: line.to_string(),
        status: parsed.status,
        detail: parsed.detail,
        url: url.to_string(),
    })
}

/// Returns `None` when the page has no contents body or no paragraph in it
/// reads like an incident description.
pub fn parse_detail(html: &str) -> Result<Option<ParsedDetail>, SelectorError> {
    let contents_selector = parse_selector(CONTENTS_BODY_SELECTOR)?;
    let paragraph_selector = parse_selector(PARAGRAPH_SELECTOR)?;
    let status_selector = parse_selector(STATUS_LABEL_SELECTOR)?;
    let document = Html::parse_document(html);

    let Some(contents_body) = document.select(&contents_selector).next() else {
        return Ok(None);
    };
    let Some(detail) = contents_body
        .select(&paragraph_selector)
        .map(extract_text)
        .find(|text| is_incident_text(text))
    else {
        return Ok(None);
    };

    let status = document
        .select(&status_selector)
        .next()
        .map(extract_text)
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| DEFAULT_STATUS.to_string());

    Ok(Some(ParsedDetail { status, detail }))
}

fn is_incident_text(text: &str) -> bool {
    text.chars().count() > MIN_DETAIL_CHARS
        && !BOILERPLATE_MARKERS
            .iter()
            .any(|marker| text.contains(marker))
}

/// Stands in for a line whose detail could not be retrieved.
pub fn placeholder(line: &str, url: &str) -> LineReport {
    LineReport {
        line: line.to_string(),
        status: DEFAULT_STATUS.to_string(),
        detail: PLACEHOLDER_DETAIL.to_string(),
        url: url.to_string(),
    }
}

/// Never fails: a line that can't be enriched still gets a placeholder.
pub async fn enrich_line(
    source: &impl PageSource,
    config: &ScrapingConfig,
    line: &str,
    url: &str,
) -> LineReport {
    match fetch_line_report(source, config, line, url).await {
        Ok(report) => {
            info!("Fetched detail for {line}");
            report
        }
        Err(e) => {
            warn!("{e}");
            placeholder(line, url)
        }
    }
}
