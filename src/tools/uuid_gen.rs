//! uuid_generator: batches of v1 or v4 UUIDs

use super::{parse_args, ToolOutput};
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write as _;
use uuid::Uuid;

const MAX_COUNT: usize = 50;

#[derive(Debug, Clone, Copy, Deserialize, Default)]
enum Version {
    #[serde(rename = "v1")]
    V1,
    #[default]
    #[serde(rename = "v4")]
    V4,
}

#[derive(Debug, Deserialize)]
struct UuidArgs {
    #[serde(default = "default_count")]
    count: usize,
    #[serde(default)]
    version: Version,
    #[serde(default = "default_hyphens")]
    hyphens: bool,
}

fn default_count() -> usize {
    1
}

fn default_hyphens() -> bool {
    true
}

pub fn run(args: &Value) -> Result<ToolOutput> {
    let args: UuidArgs = parse_args(args)?;
    let count = args.count.clamp(1, MAX_COUNT);

    let mut text = format!(
        "Generated {count} UUID{}:\n",
        match args.version {
            Version::V1 => "v1",
            Version::V4 => "v4",
        }
    );
    for i in 1..=count {
        let uid = match args.version {
            Version::V1 => {
                // v1 wants a node id; a random one avoids leaking hardware
                // addresses.
                let b = *Uuid::new_v4().as_bytes();
                Uuid::now_v1(&[b[0], b[1], b[2], b[3], b[4], b[5]])
            }
            Version::V4 => Uuid::new_v4(),
        };
        let rendered = if args.hyphens {
            uid.hyphenated().to_string()
        } else {
            uid.simple().to_string()
        };
        let _ = write!(text, "\n{i}. `{rendered}`");
    }

    Ok(ToolOutput::success(text))
}
