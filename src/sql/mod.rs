//! SQL reformatting engine
//!
//! The pipeline is text -> lexer -> clause classifier -> layout engine,
//! with keyword casing applied during rendering. The engine is lexical
//! only: it never builds an AST and never validates statement shape, it
//! just knows enough about quoting, comments, and parenthesis nesting to
//! reformat layout and casing without touching literal or comment content.

pub mod classify;
pub mod keywords;
pub mod layout;
pub mod lexer;
pub mod rules;

use crate::error::{offset_to_line_col, Error, Result};
use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

pub use rules::KeywordCase;

/// Inputs larger than this are rejected rather than formatted.
pub const MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Parenthesis nesting deeper than this is rejected rather than tracked.
pub const MAX_PAREN_DEPTH: usize = 128;

/// SQL dialect tag. Informational only: it is echoed back to the caller
/// and affects nothing structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Generic,
    Mysql,
    Postgresql,
    Sqlite,
    Tsql,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::Mysql => "mysql",
            Dialect::Postgresql => "postgresql",
            Dialect::Sqlite => "sqlite",
            Dialect::Tsql => "tsql",
        }
    }
}

/// Immutable per-call formatting configuration.
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Spaces per indentation level, 1..=8.
    pub indent_width: usize,
    pub keyword_case: KeywordCase,
    pub dialect: Dialect,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            keyword_case: KeywordCase::Upper,
            dialect: Dialect::Generic,
        }
    }
}

/// Formatted output plus non-fatal diagnostics.
#[derive(Debug)]
pub struct FormatReport {
    pub text: String,
    pub warnings: Vec<String>,
}

/// Format a SQL string.
///
/// Empty input and resource-guard violations are the only errors; lexical
/// anomalies (unterminated literals or block comments) degrade to warnings
/// and formatting proceeds best-effort.
pub fn format_sql(input: &str, config: &FormatConfig) -> Result<FormatReport> {
    let source = input.trim();
    if source.is_empty() {
        return Err(Error::EmptyInput);
    }
    if source.len() > MAX_INPUT_BYTES {
        return Err(Error::LimitExceeded {
            message: format!(
                "input is {} bytes, larger than the {} byte maximum",
                source.len(),
                MAX_INPUT_BYTES
            ),
        });
    }
    if !(1..=8).contains(&config.indent_width) {
        return Err(Error::InvalidArguments {
            message: format!("indent_width must be 1..=8, got {}", config.indent_width),
        });
    }

    let lexed = lexer::tokenize(source)?;
    debug!(tokens = lexed.tokens.len(), "tokenized");

    let mut tokens = lexed.tokens;
    classify::classify(&mut tokens);
    let text = layout::render(&tokens, config);

    let warnings = lexed
        .warnings
        .iter()
        .map(|w| describe_warning(source, w))
        .collect();

    Ok(FormatReport { text, warnings })
}

fn describe_warning(source: &str, warning: &lexer::LexWarning) -> String {
    match warning {
        lexer::LexWarning::UnterminatedString { start } => {
            let (line, col) = offset_to_line_col(source, *start);
            format!(
                "unterminated string literal starting at line {}, column {} (treated as running to end of input)",
                line, col
            )
        }
        lexer::LexWarning::UnterminatedComment { start } => {
            let (line, col) = offset_to_line_col(source, *start);
            format!(
                "unterminated block comment starting at line {}, column {} (treated as running to end of input)",
                line, col
            )
        }
    }
}
