use chrono::{DateTime, Utc};
use log::{error, info};

use crate::{
    detail_scraper::enrich_line,
    error::ListingError,
    listing_scraper::fetch_troubled_lines,
    report::{LineReport, RunReport, assemble_report},
    requests::PageSource,
    scraping_context::ScrapingContext,
};

/// Scrapes the listing, then every disrupted monitored line in turn. Only a
/// listing failure is an error; each listed line yields exactly one report.
pub async fn scrape_transit_issues<S: PageSource>(
    ctx: &ScrapingContext<S>,
) -> Result<Vec<LineReport>, ListingError> {
    let troubled_line_links =
        fetch_troubled_lines(&ctx.source, &ctx.config, &ctx.monitored_lines).await?;

    if troubled_line_links.is_empty() {
        info!("No monitored line is reporting service issues");
        return Ok(vec![]);
    }

    info!(
        "{} monitored line(s) reporting service issues:",
        troubled_line_links.len()
    );
    for line in troubled_line_links.keys() {
        info!("  - {line}");
    }

    let mut reports = Vec::with_capacity(troubled_line_links.len());
    for (i, (line, url)) in troubled_line_links.iter().enumerate() {
        if i > 0 {
            ctx.pacer.pause().await;
        }
        info!("Fetching detail for {line}");
        reports.push(enrich_line(&ctx.source, &ctx.config, line, url).await);
    }
    Ok(reports)
}

/// One full run, stamped with `now`.
pub async fn run_at<S: PageSource>(
    ctx: &ScrapingContext<S>,
    now: DateTime<Utc>,
) -> Result<RunReport, ListingError> {
    let issues = match scrape_transit_issues(ctx).await {
        Ok(issues) => issues,
        Err(e) => {
            error!("Failed to retrieve service status: {e}");
            return Err(e);
        }
    };
    Ok(assemble_report(
        issues,
        &ctx.config.listing_url,
        ctx.monitored_lines.len(),
        now,
    ))
}

pub async fn run<S: PageSource>(ctx: &ScrapingContext<S>) -> Result<RunReport, ListingError> {
    run_at(ctx, Utc::now()).await
}
