//! json_formatter: validate, prettify, and optionally sort JSON

use super::{parse_args, ToolOutput};
use crate::error::{Error, Result};
use serde::Deserialize;
use serde::Serialize as _;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

#[derive(Debug, Deserialize)]
struct JsonArgs {
    json_string: String,
    #[serde(default = "default_indent")]
    indent: usize,
    #[serde(default)]
    sort_keys: bool,
}

fn default_indent() -> usize {
    2
}

pub fn run(args: &Value) -> Result<ToolOutput> {
    let args: JsonArgs = parse_args(args)?;

    let mut data: Value = match serde_json::from_str(&args.json_string) {
        Ok(data) => data,
        Err(e) => {
            let caret = " ".repeat(e.column().saturating_sub(1)) + "^";
            return Ok(ToolOutput::failure(format!(
                "❌ Invalid JSON\n\n\
                 **Error:** {e}\n\
                 **Location:** Line {}, Column {}\n\n\
                 ```\n{}\n{caret}\n```",
                e.line(),
                e.column(),
                args.json_string
            )));
        }
    };

    if args.sort_keys {
        sort_value(&mut data);
    }

    let formatted = pretty_print(&data, args.indent)?;

    let summary = match &data {
        Value::Object(map) => format!("{} keys", map.len()),
        Value::Array(arr) => format!("{} items", arr.len()),
        _ => "scalar value".to_string(),
    };

    Ok(ToolOutput::success(format!(
        "✅ Valid JSON ({summary})\n\n```json\n{formatted}\n```"
    )))
}

/// Pretty-print with a configurable indent width; 0 means compact.
fn pretty_print(data: &Value, indent: usize) -> Result<String> {
    if indent == 0 {
        return serde_json::to_string(data).map_err(|e| Error::InvalidArguments {
            message: e.to_string(),
        });
    }
    let indent_str = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent_str.as_bytes());
    let mut ser = Serializer::with_formatter(Vec::new(), formatter);
    data.serialize(&mut ser).map_err(|e| Error::InvalidArguments {
        message: e.to_string(),
    })?;
    String::from_utf8(ser.into_inner()).map_err(|e| Error::InvalidArguments {
        message: e.to_string(),
    })
}

/// Recursively sort object keys alphabetically.
fn sort_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, v) in entries.iter_mut() {
                sort_value(v);
            }
            *map = entries.into_iter().collect();
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                sort_value(v);
            }
        }
        _ => {}
    }
}
