//! Keyword casing policy
//!
//! Applied at render time and strictly token-local: only tokens classified
//! as keywords are ever rewritten, so identifiers, string contents, and
//! comments keep their source casing under every policy.

use clap::ValueEnum;
use serde::Deserialize;
use std::borrow::Cow;

/// Casing applied to keyword tokens when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCase {
    #[default]
    Upper,
    Lower,
    Preserve,
}

/// Render a keyword token's text under the given policy.
pub fn format_keyword(text: &str, case: KeywordCase) -> Cow<'_, str> {
    match case {
        KeywordCase::Upper => Cow::Owned(text.to_ascii_uppercase()),
        KeywordCase::Lower => Cow::Owned(text.to_ascii_lowercase()),
        KeywordCase::Preserve => Cow::Borrowed(text),
    }
}
