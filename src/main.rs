use std::process::ExitCode;

use diainfo_watch::{RunStatus, ScrapingContext, run};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let ctx = match ScrapingContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Failed to set up the HTTP session: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    // The pipeline logs listing failures itself.
    let Ok(report) = run(&ctx).await else {
        return ExitCode::FAILURE;
    };

    match report.status {
        RunStatus::AllClear => info!(
            "All clear across {} monitored lines",
            report.monitored_lines_count
        ),
        RunStatus::IssuesFound => info!("{} issue(s) found", report.issue_count),
    }

    match report.to_json() {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to render the report: {e}");
            ExitCode::FAILURE
        }
    }
}
