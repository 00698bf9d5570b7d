//! Layout engine
//!
//! Partitions the classified token sequence into logical lines and renders
//! them with configured indentation. Rendering is a pure function of the
//! token sequence (whitespace tokens contribute only a spacing boundary),
//! which is what makes formatting idempotent.

use super::classify::ClauseBoundary;
use super::lexer::{Token, TokenKind};
use super::rules::format_keyword;
use super::FormatConfig;

/// A piece of a logical line: a token index plus whether a whitespace
/// boundary preceded it in the source.
struct Piece {
    index: usize,
    space_before: bool,
}

struct Line {
    depth: usize,
    pieces: Vec<Piece>,
}

/// Render classified tokens back to text.
pub fn render(tokens: &[Token<'_>], config: &FormatConfig) -> String {
    let lines = split_lines(tokens);
    let mut out = String::new();

    for line in &lines {
        if line.pieces.is_empty() {
            continue;
        }
        let indent = config.indent_width * line.depth;
        for _ in 0..indent {
            out.push(' ');
        }
        let mut prev: Option<&Token<'_>> = None;
        for piece in &line.pieces {
            let token = &tokens[piece.index];
            if let Some(prev) = prev {
                if piece.space_before && !suppress_space(prev, token) {
                    out.push(' ');
                }
            }
            match token.kind {
                TokenKind::Keyword => out.push_str(&format_keyword(token.text, config.keyword_case)),
                // String literals and comments are emitted byte for byte.
                _ => out.push_str(token.text),
            }
            prev = Some(token);
        }
        out.push('\n');
    }

    out
}

/// No space before `,` `)` `;`, none after `(`.
fn suppress_space(prev: &Token<'_>, next: &Token<'_>) -> bool {
    matches!(next.text, "," | ")" | ";") || prev.text == "("
}

/// Partition tokens into logical lines.
///
/// Each major clause start, join start, and logical connective begins a new
/// line. A major clause line holds only the clause keyword (and its phrase
/// tail); its body starts a continuation line one level deeper. Join lines
/// keep their body. A list-separator comma trails on the current line and
/// breaks after itself, so a trailing comma that bumps into a clause
/// keyword stays put while the clause wins the new line.
fn split_lines(tokens: &[Token<'_>]) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut cur = Line {
        depth: 0,
        pieces: Vec::new(),
    };
    // Depth for the line a pending break will open.
    let mut next_depth = 0;
    let mut space_pending = false;
    let mut break_pending = false;
    // The current line is a major clause head whose body must move to a
    // continuation line.
    let mut head_open = false;

    for (index, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Whitespace {
            space_pending = true;
            continue;
        }

        match token.boundary {
            ClauseBoundary::MajorClauseStart | ClauseBoundary::JoinStart => {
                flush(&mut lines, &mut cur, token.paren_depth);
                head_open = token.boundary == ClauseBoundary::MajorClauseStart;
                break_pending = false;
            }
            ClauseBoundary::LogicalConnective => {
                flush(&mut lines, &mut cur, 1 + token.paren_depth);
                head_open = false;
                break_pending = false;
            }
            _ => {
                if token.phrase_tail {
                    // Stays with its phrase head wherever that landed.
                } else if break_pending {
                    flush(&mut lines, &mut cur, next_depth);
                    break_pending = false;
                } else if head_open {
                    // First body token after a clause keyword.
                    flush(&mut lines, &mut cur, 1 + token.paren_depth);
                    head_open = false;
                }
            }
        }

        cur.pieces.push(Piece {
            index,
            space_before: space_pending,
        });
        space_pending = false;

        if token.boundary == ClauseBoundary::ListSeparator {
            break_pending = true;
            next_depth = 1 + token.paren_depth;
        } else if token.kind == TokenKind::Comment && token.text.starts_with("--") {
            // Anything after a line comment on the same rendered line would
            // be swallowed by it.
            break_pending = true;
            next_depth = cur.depth;
        }
    }

    if !cur.pieces.is_empty() {
        lines.push(cur);
    }
    lines
}

fn flush(lines: &mut Vec<Line>, cur: &mut Line, depth: usize) {
    if !cur.pieces.is_empty() {
        lines.push(std::mem::replace(
            cur,
            Line {
                depth,
                pieces: Vec::new(),
            },
        ));
    } else {
        // Empty logical lines collapse to none.
        cur.depth = depth;
    }
}
