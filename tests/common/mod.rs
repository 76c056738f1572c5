#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    time::Duration,
};

use diainfo_watch::{FetchError, MonitoredLineSet, PageSource, ScrapingConfig, ScrapingContext};
use reqwest::StatusCode;
use tokio::time::Instant;

pub const LISTING_URL: &str = "https://transit.yahoo.co.jp/diainfo/area/4";
pub const INCIDENT: &str = "Signal failure causing delays of up to 20 minutes near Shinjuku.";

#[derive(Clone)]
pub enum Scripted {
    Page(String),
    Timeout,
    Refused,
    Status(u16),
}

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub url: String,
    pub timeout: Duration,
    pub started: Instant,
    pub finished: Instant,
}

/// Serves canned responses per URL. The last response for a URL repeats.
#[derive(Default)]
pub struct FakeSite {
    responses: RefCell<HashMap<String, VecDeque<Scripted>>>,
    latency: Duration,
    pub requests: RefCell<Vec<SeenRequest>>,
}

impl FakeSite {
    pub fn serve(self, url: &str, responses: impl IntoIterator<Item = Scripted>) -> Self {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), responses.into_iter().collect());
        self
    }

    /// Every fetch takes this long before answering.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn requests_to(&self, url: &str) -> Vec<SeenRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.url == url)
            .cloned()
            .collect()
    }
}

impl PageSource for FakeSite {
    async fn fetch_page(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let started = Instant::now();
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.requests.borrow_mut().push(SeenRequest {
            url: url.to_string(),
            timeout,
            started,
            finished: Instant::now(),
        });

        let next = {
            let mut responses = self.responses.borrow_mut();
            match responses.get_mut(url) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };
        match next.unwrap_or(Scripted::Status(404)) {
            Scripted::Page(html) => Ok(html),
            Scripted::Timeout => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
            Scripted::Refused => Err(FetchError::Request {
                url: url.to_string(),
                source: Box::new(std::io::Error::from(std::io::ErrorKind::ConnectionRefused)),
            }),
            Scripted::Status(code) => Err(FetchError::Status {
                url: url.to_string(),
                status: StatusCode::from_u16(code).unwrap(),
            }),
        }
    }
}

pub fn fast_config() -> ScrapingConfig {
    ScrapingConfig::default()
        .with_retry_backoff(Duration::ZERO)
        .with_pacing(Duration::ZERO)
}

pub fn context(site: FakeSite, lines: &[&str]) -> ScrapingContext<FakeSite> {
    context_with(fast_config(), site, lines)
}

pub fn context_with(
    config: ScrapingConfig,
    site: FakeSite,
    lines: &[&str],
) -> ScrapingContext<FakeSite> {
    ScrapingContext::with_source(
        config,
        MonitoredLineSet::from_names(lines.iter().copied()),
        site,
    )
}

pub fn listing_page(links: &[(&str, &str)]) -> Scripted {
    let rows: String = links
        .iter()
        .map(|(name, href)| {
            format!(r#"<tr><td><a href="{href}">{name}</a></td><td>列車遅延</td></tr>"#)
        })
        .collect();
    Scripted::Page(format!(
        r#"<html><body><table class="elmTblLstLine"><tbody>{rows}</tbody></table></body></html>"#
    ))
}

pub fn detail_page(status: &str, paragraphs: &[&str]) -> Scripted {
    let paragraphs: String = paragraphs.iter().map(|p| format!("<p>{p}</p>")).collect();
    Scripted::Page(format!(
        r#"<html><body>
            <div id="mdServiceStatus"><dl><dt><span class="labelStatus">{status}</span></dt></dl></div>
            <div id="contents-body">{paragraphs}</div>
        </body></html>"#
    ))
}
