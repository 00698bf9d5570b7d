//! jwt_decoder: inspect JWT header and payload without verification

use super::{parse_args, ToolOutput};
use crate::error::Result;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct JwtArgs {
    token: String,
}

pub fn run(args: &Value) -> Result<ToolOutput> {
    let args: JwtArgs = parse_args(args)?;
    let token = args.token.trim();

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        let preview: String = token.chars().take(50).collect();
        let ellipsis = if token.chars().count() > 50 { "..." } else { "" };
        return Ok(ToolOutput::failure(format!(
            "❌ Invalid JWT format\n\n\
             Expected 3 parts separated by dots, got {}\n\n\
             **JWT structure:** header.payload.signature\n\
             **Your token:** {preview}{ellipsis}",
            parts.len()
        )));
    }

    let header = decode_part(parts[0]);
    let payload = decode_part(parts[1]);
    let signature = if parts[2].chars().count() > 20 {
        format!("{}...", parts[2].chars().take(20).collect::<String>())
    } else {
        parts[2].to_string()
    };

    let mut text = String::from("## 🔐 JWT Decoded\n\n");
    text.push_str("### Header\n```json\n");
    text.push_str(&serde_json::to_string_pretty(&header).unwrap_or_default());
    text.push_str("\n```\n\n### Payload\n```json\n");
    text.push_str(&serde_json::to_string_pretty(&payload).unwrap_or_default());
    text.push_str("\n```\n\n");

    if let Some(exp) = payload.get("exp").and_then(Value::as_i64) {
        if let Some(exp_time) = DateTime::from_timestamp(exp, 0) {
            text.push_str(&describe_expiry(exp_time, Utc::now()));
            text.push('\n');
        }
    }

    text.push_str(&format!("\n### Signature (preview)\n`{signature}`\n"));
    text.push_str("\n⚠️ **Note:** Signature not cryptographically verified");

    Ok(ToolOutput::success(text))
}

/// Decode one base64url segment into JSON; failures turn into an error
/// marker object rather than aborting the whole inspection.
fn decode_part(part: &str) -> Value {
    URL_SAFE_NO_PAD
        .decode(part.trim_end_matches('='))
        .ok()
        .and_then(|bytes| serde_json::from_slice(&bytes).ok())
        .unwrap_or_else(|| serde_json::json!({ "_error": "Could not decode" }))
}

fn describe_expiry(exp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if exp < now {
        let diff = now - exp;
        if diff.num_days() > 0 {
            format!("⚠️ **Token expired** {} days ago", diff.num_days())
        } else {
            format!("⚠️ **Token expired** {} hours ago", diff.num_hours())
        }
    } else {
        let diff = exp - now;
        if diff.num_days() > 0 {
            format!("✅ **Token valid** for {} more days", diff.num_days())
        } else {
            format!("✅ **Token valid** for {} more hours", diff.num_hours())
        }
    }
}
