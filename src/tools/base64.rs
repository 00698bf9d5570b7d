//! base64_tool: bidirectional Base64 conversion with URL-safe support

use super::{parse_args, ToolOutput};
use crate::error::Result;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Operation {
    Encode,
    Decode,
}

#[derive(Debug, Deserialize)]
struct Base64Args {
    operation: Operation,
    input: String,
    #[serde(default)]
    url_safe: bool,
}

pub fn run(args: &Value) -> Result<ToolOutput> {
    let args: Base64Args = parse_args(args)?;

    match args.operation {
        Operation::Encode => {
            let encoded = if args.url_safe {
                URL_SAFE_NO_PAD.encode(args.input.as_bytes())
            } else {
                STANDARD.encode(args.input.as_bytes())
            };
            Ok(ToolOutput::success(format!(
                "✅ Encoded to Base64 ({} chars → {} chars)\n\n```\n{}\n```",
                args.input.chars().count(),
                encoded.len(),
                encoded
            )))
        }
        Operation::Decode => {
            // Pasted Base64 often arrives wrapped or padded with whitespace.
            let input: String = args
                .input
                .chars()
                .filter(|c| !c.is_ascii_whitespace())
                .collect();
            let decoded = if args.url_safe {
                // Tolerate padded input.
                URL_SAFE_NO_PAD.decode(input.trim_end_matches('='))
            } else {
                STANDARD.decode(input.as_bytes())
            };
            let decoded = decoded
                .map_err(|e| e.to_string())
                .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()));
            match decoded {
                Ok(text) => Ok(ToolOutput::success(format!(
                    "✅ Decoded from Base64 ({} chars → {} chars)\n\n```\n{}\n```",
                    args.input.len(),
                    text.chars().count(),
                    text
                ))),
                Err(e) => Ok(ToolOutput::failure(format!(
                    "❌ Failed to decode Base64\n\n\
                     **Error:** {e}\n\n\
                     **Troubleshooting:**\n\
                     - Ensure input is valid Base64\n\
                     - Check if URL-safe option should be enabled\n\
                     - Check that the input is complete and correctly padded"
                ))),
            }
        }
    }
}
