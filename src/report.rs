use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const JST_OFFSET_SECS: i32 = 9 * 3600;
const UPDATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What we know about one disrupted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub line: String,
    pub status: String,
    pub detail: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    IssuesFound,
    AllClear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub update_time: String,
    pub data_source: String,
    pub monitored_lines_count: usize,
    pub issue_count: usize,
    pub status: RunStatus,
    pub issues: Vec<LineReport>,
}

/// Builds the final document. `now` is rendered in Japan Standard Time
/// whatever the host's zone.
pub fn assemble_report(
    issues: Vec<LineReport>,
    data_source: &str,
    monitored_lines_count: usize,
    now: DateTime<Utc>,
) -> RunReport {
    let status = if issues.is_empty() {
        RunStatus::AllClear
    } else {
        RunStatus::IssuesFound
    };
    RunReport {
        update_time: format_update_time(now),
        data_source: data_source.to_string(),
        monitored_lines_count,
        issue_count: issues.len(),
        status,
        issues,
    }
}

pub fn format_update_time(now: DateTime<Utc>) -> String {
    let jst = FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid offset");
    now.with_timezone(&jst).format(UPDATE_TIME_FORMAT).to_string()
}

impl RunReport {
    /// Pretty JSON with four-space indentation; non-ASCII text stays as is.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
