//! timestamp_tool: convert between Unix, ISO 8601, and human-readable time

use super::{parse_args, ToolOutput};
use crate::error::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum InputFormat {
    #[default]
    Auto,
    Unix,
    Iso,
    Human,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum OutputFormat {
    #[default]
    All,
    Unix,
    Iso,
    Human,
}

#[derive(Debug, Deserialize)]
struct TimestampArgs {
    input: String,
    #[serde(default)]
    input_format: InputFormat,
    #[serde(default)]
    output_format: OutputFormat,
}

/// Date-only and date-time layouts accepted as "human" input.
const HUMAN_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%d %B %Y %H:%M:%S"];
const HUMAN_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%d %B %Y", "%m/%d/%Y"];

pub fn run(args: &Value) -> Result<ToolOutput> {
    let args: TimestampArgs = parse_args(args)?;
    let input = args.input.trim();

    let parsed = match args.input_format {
        InputFormat::Auto => parse_unix(input)
            .or_else(|| parse_iso(input))
            .or_else(|| parse_human(input)),
        InputFormat::Unix => parse_unix(input),
        InputFormat::Iso => parse_iso(input),
        InputFormat::Human => parse_human(input),
    };

    let Some(dt) = parsed else {
        return Ok(ToolOutput::failure(format!(
            "❌ Error parsing timestamp\n\n\
             **Input:** `{input}`\n\n\
             **Try formats:**\n\
             - Unix: `1672531200`\n\
             - ISO: `2023-01-01T00:00:00Z`\n\
             - Human: `January 1, 2023` or `2023-01-01`"
        )));
    };

    let unix = dt.timestamp();
    let iso = dt.to_rfc3339();
    let human = dt.format("%B %d, %Y, %I:%M:%S %p UTC").to_string();
    let relative = relative_time(dt, Utc::now());

    let text = match args.output_format {
        OutputFormat::All => format!(
            "## 🕐 Timestamp Conversion\n\n\
             **Input:** `{input}`\n\
             **Parsed as:** {}\n\n\
             **Conversions:**\n\
             • **Unix timestamp:** `{unix}`\n\
             • **ISO 8601:** `{iso}`\n\
             • **Human readable:** {human}\n\
             • **Relative time:** {relative}",
            dt.format("%Y-%m-%d %H:%M:%S UTC"),
        ),
        OutputFormat::Unix => format!("Unix timestamp: `{unix}`"),
        OutputFormat::Iso => format!("ISO 8601: `{iso}`"),
        OutputFormat::Human => format!("Human readable: {human}"),
    };

    Ok(ToolOutput::success(text))
}

fn parse_unix(input: &str) -> Option<DateTime<Utc>> {
    let seconds: f64 = input.parse().ok()?;
    DateTime::from_timestamp(seconds as i64, 0)
}

fn parse_iso(input: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_human(input: &str) -> Option<DateTime<Utc>> {
    for fmt in HUMAN_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(naive.and_utc());
        }
    }
    for fmt in HUMAN_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}

/// Coarse relative phrasing ("3 hours ago", "in 2 days").
fn relative_time(dt: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - dt).num_seconds();

    if seconds < 0 {
        let seconds = -seconds;
        if seconds < 60 {
            "in a few seconds".to_string()
        } else if seconds < 3600 {
            plural("in", seconds / 60, "minute")
        } else if seconds < 86_400 {
            plural("in", seconds / 3600, "hour")
        } else {
            plural("in", seconds / 86_400, "day")
        }
    } else if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        plural_ago(seconds / 60, "minute")
    } else if seconds < 86_400 {
        plural_ago(seconds / 3600, "hour")
    } else if seconds < 2_592_000 {
        plural_ago(seconds / 86_400, "day")
    } else {
        plural_ago(seconds / 2_592_000, "month")
    }
}

fn plural(prefix: &str, n: i64, unit: &str) -> String {
    format!("{prefix} {n} {unit}{}", if n == 1 { "" } else { "s" })
}

fn plural_ago(n: i64, unit: &str) -> String {
    format!("{n} {unit}{} ago", if n == 1 { "" } else { "s" })
}
