//! Tool registry and dispatch
//!
//! Every utility is registered in a static table mapping tool name to a
//! typed handler. There is no runtime discovery or registration: the
//! registry is a constant built into the binary.

pub mod base64;
pub mod color;
pub mod hash;
pub mod json_format;
pub mod jwt;
pub mod sql_format;
pub mod timestamp;
pub mod uuid_gen;

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Result of one tool invocation.
///
/// Tool-level failures (bad Base64, invalid JSON, malformed JWT) are
/// reported in-band with `success = false`; the text is always present so
/// the caller has something to display.
#[derive(Debug, Serialize)]
pub struct ToolOutput {
    pub success: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ToolOutput {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
            warnings: Vec::new(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

/// One registry entry.
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn(&Value) -> Result<ToolOutput>,
}

/// The static tool registry.
pub static TOOLS: &[ToolInfo] = &[
    ToolInfo {
        name: "base64_tool",
        description: "Encode or decode Base64 strings with optional URL-safe formatting",
        run: base64::run,
    },
    ToolInfo {
        name: "color_converter",
        description: "Convert between color formats (HEX, RGB, HSL, CSS names)",
        run: color::run,
    },
    ToolInfo {
        name: "hash_generator",
        description: "Generate cryptographic hashes (MD5, SHA1, SHA256, SHA512)",
        run: hash::run,
    },
    ToolInfo {
        name: "json_formatter",
        description: "Format and validate JSON with pretty printing, optional key sorting",
        run: json_format::run,
    },
    ToolInfo {
        name: "jwt_decoder",
        description: "Decode and inspect JWT tokens without verifying signature",
        run: jwt::run,
    },
    ToolInfo {
        name: "sql_formatter",
        description: "Format SQL queries with proper indentation and keyword casing",
        run: sql_format::run,
    },
    ToolInfo {
        name: "timestamp_tool",
        description: "Convert between timestamp formats (Unix, ISO 8601, human-readable)",
        run: timestamp::run,
    },
    ToolInfo {
        name: "uuid_generator",
        description: "Generate UUIDs (version 1 or 4) with formatting options",
        run: uuid_gen::run,
    },
];

/// Look a tool up by name.
pub fn find(name: &str) -> Option<&'static ToolInfo> {
    TOOLS.iter().find(|tool| tool.name == name)
}

/// Run a tool by name.
///
/// Handler errors degrade to in-band failure outputs; only an unknown tool
/// name is an `Err`.
pub fn dispatch(name: &str, args: &Value) -> Result<ToolOutput> {
    let tool = find(name).ok_or_else(|| Error::UnknownTool {
        name: name.to_string(),
    })?;
    debug!(tool = tool.name, "dispatching");
    Ok(match (tool.run)(args) {
        Ok(output) => output,
        Err(e) => ToolOutput::failure(format!("❌ Error: {e}")),
    })
}

/// Deserialize a tool's JSON arguments into its typed argument struct.
pub(crate) fn parse_args<T: DeserializeOwned>(args: &Value) -> Result<T> {
    serde_json::from_value(args.clone()).map_err(|e| Error::InvalidArguments {
        message: e.to_string(),
    })
}
