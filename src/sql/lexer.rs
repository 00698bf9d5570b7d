//! SQL tokenization
//!
//! Breaks SQL input into a lossless token sequence: concatenating every
//! token's `text` in order reproduces the input exactly. Later stages only
//! ever rewrite tokens classified as keywords, which is what keeps string
//! literals and comments safe from case or layout rewriting.

use super::classify::ClauseBoundary;
use super::MAX_PAREN_DEPTH;
use crate::error::{Error, Result};

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Identifier,
    StringLiteral,
    NumberLiteral,
    Comment,
    Punctuation,
    Whitespace,
}

/// Smallest classified unit of source text.
///
/// `text` borrows the exact source substring and is never altered for
/// non-keyword kinds. `paren_depth` is the parenthesis nesting depth at the
/// token; an opening paren carries the depth it sits at, a closing paren the
/// depth it returns to.
#[derive(Debug, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
    pub paren_depth: usize,
    /// Filled in by the clause classifier.
    pub boundary: ClauseBoundary,
    /// Canonical spelling of the multi-word phrase this token belongs to.
    pub phrase: Option<&'static str>,
    /// True for the second token of a two-word phrase.
    pub phrase_tail: bool,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, text: &'a str, span: Span, paren_depth: usize) -> Self {
        Self {
            kind,
            text,
            span,
            paren_depth,
            boundary: ClauseBoundary::None,
            phrase: None,
            phrase_tail: false,
        }
    }
}

/// Non-fatal anomalies noticed while lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexWarning {
    /// A quote opened at `start` was never closed; the literal runs to
    /// end of input.
    UnterminatedString { start: usize },
    /// A `/*` opened at `start` was never closed.
    UnterminatedComment { start: usize },
}

/// Result of tokenization: the token sequence plus any warnings.
#[derive(Debug)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub warnings: Vec<LexWarning>,
}

/// Tokenize SQL input.
///
/// Total over its input: unrecognized characters become single-character
/// punctuation tokens. The only failure mode is the parenthesis nesting
/// guard.
pub fn tokenize(input: &str) -> Result<Lexed<'_>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut warnings = Vec::new();
    let mut depth: usize = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let c = bytes[pos];

        if c.is_ascii_whitespace() {
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            tokens.push(Token::new(
                TokenKind::Whitespace,
                &input[start..pos],
                Span { start, end: pos },
                depth,
            ));
            continue;
        }

        if c == b'\'' || c == b'"' {
            pos = scan_string(bytes, pos, c);
            if pos > bytes.len() {
                pos = bytes.len();
                warnings.push(LexWarning::UnterminatedString { start });
            }
            tokens.push(Token::new(
                TokenKind::StringLiteral,
                &input[start..pos],
                Span { start, end: pos },
                depth,
            ));
            continue;
        }

        if c == b'-' && bytes.get(pos + 1) == Some(&b'-') {
            while pos < bytes.len() && bytes[pos] != b'\n' {
                pos += 1;
            }
            tokens.push(Token::new(
                TokenKind::Comment,
                &input[start..pos],
                Span { start, end: pos },
                depth,
            ));
            continue;
        }

        if c == b'/' && bytes.get(pos + 1) == Some(&b'*') {
            // Non-nesting: runs through the first `*/` or end of input.
            match find_subslice(&bytes[pos + 2..], b"*/") {
                Some(off) => pos += 2 + off + 2,
                None => {
                    pos = bytes.len();
                    warnings.push(LexWarning::UnterminatedComment { start });
                }
            }
            tokens.push(Token::new(
                TokenKind::Comment,
                &input[start..pos],
                Span { start, end: pos },
                depth,
            ));
            continue;
        }

        if c.is_ascii_digit() {
            while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
                pos += 1;
            }
            tokens.push(Token::new(
                TokenKind::NumberLiteral,
                &input[start..pos],
                Span { start, end: pos },
                depth,
            ));
            continue;
        }

        if c.is_ascii_alphabetic() || c == b'_' {
            while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
                pos += 1;
            }
            // Tentative: the classifier promotes matches to Keyword.
            tokens.push(Token::new(
                TokenKind::Identifier,
                &input[start..pos],
                Span { start, end: pos },
                depth,
            ));
            continue;
        }

        // Everything else is a single punctuation token, multibyte
        // characters included.
        let ch_len = utf8_len(c);
        pos = (start + ch_len).min(bytes.len());
        let token_depth = match c {
            b'(' => {
                let d = depth;
                depth += 1;
                if depth > MAX_PAREN_DEPTH {
                    return Err(Error::LimitExceeded {
                        message: format!(
                            "parenthesis nesting exceeds the supported depth of {}",
                            MAX_PAREN_DEPTH
                        ),
                    });
                }
                d
            }
            b')' => {
                depth = depth.saturating_sub(1);
                depth
            }
            _ => depth,
        };
        tokens.push(Token::new(
            TokenKind::Punctuation,
            &input[start..pos],
            Span { start, end: pos },
            token_depth,
        ));
    }

    Ok(Lexed { tokens, warnings })
}

/// Scan a quoted literal starting at `start` (which holds the quote byte).
///
/// Returns the position one past the closing quote, or `len + 1` when the
/// literal is unterminated. A doubled quote (`''`) is consumed as a literal
/// quote, not a terminator.
fn scan_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut pos = start + 1;
    while pos < bytes.len() {
        if bytes[pos] == quote {
            if bytes.get(pos + 1) == Some(&quote) {
                pos += 2;
                continue;
            }
            return pos + 1;
        }
        pos += 1;
    }
    bytes.len() + 1
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Length in bytes of the UTF-8 sequence starting with `first`.
fn utf8_len(first: u8) -> usize {
    match first {
        b if b < 0x80 => 1,
        b if b >= 0xF0 => 4,
        b if b >= 0xE0 => 3,
        _ => 2,
    }
}
