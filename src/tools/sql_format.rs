//! sql_formatter tool
//!
//! Thin wrapper over the SQL engine. The contract with the hosting layer:
//! on success, the formatted SQL plus an echo of the effective config; on
//! any failure, the original input unchanged plus a diagnostic. The
//! handler never surfaces a formatting fault to the dispatcher.

use super::{parse_args, ToolOutput};
use crate::error::Result;
use crate::sql::{format_sql, Dialect, FormatConfig, KeywordCase};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct SqlFormatterArgs {
    sql: String,
    #[serde(default)]
    dialect: Dialect,
    #[serde(default = "default_indent")]
    indent_width: usize,
    #[serde(default)]
    keyword_case: KeywordCase,
}

fn default_indent() -> usize {
    2
}

pub fn run(args: &Value) -> Result<ToolOutput> {
    let args: SqlFormatterArgs = parse_args(args)?;
    let config = FormatConfig {
        indent_width: args.indent_width,
        keyword_case: args.keyword_case,
        dialect: args.dialect,
    };

    match format_sql(&args.sql, &config) {
        Ok(report) => {
            let text = format!(
                "✅ SQL Formatted\n\n\
                 **Dialect:** {}\n\
                 **Indent:** {} spaces\n\
                 **Keyword case:** {}\n\n\
                 ```sql\n{}```",
                config.dialect.as_str(),
                config.indent_width,
                case_name(config.keyword_case),
                report.text
            );
            Ok(ToolOutput::success(text).with_warnings(report.warnings))
        }
        Err(e) => {
            // Degrade to "original text with a warning", never a fault.
            let text = format!("```sql\n{}\n```\n\n⚠️ Could not format. Error: {e}", args.sql);
            Ok(ToolOutput::failure(text))
        }
    }
}

fn case_name(case: KeywordCase) -> &'static str {
    match case {
        KeywordCase::Upper => "upper",
        KeywordCase::Lower => "lower",
        KeywordCase::Preserve => "preserve",
    }
}
