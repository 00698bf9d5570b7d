//! devkit - a toolbox of developer text utilities built around a lexical
//! SQL formatter
//!
//! The core is the SQL reformatting engine in [`sql`]; the sibling
//! utilities (Base64, hashing, UUIDs, JSON, JWT, timestamps, colors) live
//! behind the static tool registry in [`tools`].

pub mod error;
pub mod sql;
pub mod tools;

pub use error::{Error, Result};
pub use sql::{format_sql, Dialect, FormatConfig, FormatReport, KeywordCase};

/// Format SQL with the default configuration and return the formatted text.
pub fn format(input: &str) -> Result<String> {
    format_sql(input, &FormatConfig::default()).map(|report| report.text)
}

/// Check if SQL is already formatted under the given configuration.
pub fn check(input: &str, config: &FormatConfig) -> Result<bool> {
    let report = format_sql(input, config)?;
    Ok(report.text == input)
}
