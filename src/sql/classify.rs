//! Clause classification
//!
//! Walks the token sequence once, left to right, promoting identifiers to
//! keywords and tagging clause-boundary and connective tokens. Never
//! validates statement shape: "WHERE before SELECT" is classified and
//! formatted, not rejected.

use super::keywords;
use super::lexer::{Token, TokenKind};

/// Classification state attached to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClauseBoundary {
    #[default]
    None,
    /// SELECT / FROM / WHERE / GROUP BY / HAVING / ORDER BY / LIMIT /
    /// UNION / UNION ALL
    MajorClauseStart,
    /// JOIN and its two-word variants
    JoinStart,
    /// AND / OR
    LogicalConnective,
    /// Top-level comma: delimits clause-body items, not function arguments
    ListSeparator,
}

/// Classify tokens in place.
///
/// One token of lookahead across whitespace merges two-word phrases, with
/// longest match winning: "UNION ALL" beats a bare "UNION" whenever the next
/// word is "ALL".
pub fn classify(tokens: &mut [Token<'_>]) {
    // Paren depths of the clause starts currently in scope, innermost last.
    // A comma is a list separator only at the depth of the nearest
    // enclosing clause start.
    let mut clause_depths: Vec<usize> = vec![0];

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::Identifier => {
                let Some(canonical) = keywords::lookup(tokens[i].text) else {
                    i += 1;
                    continue;
                };

                // Phrase lookahead: the next word across whitespace only.
                // A comment in between blocks the merge.
                let next = next_word(tokens, i);
                let phrase = next.and_then(|j| keywords::lookup_phrase(tokens[i].text, tokens[j].text));

                if let (Some(j), Some(canonical_phrase)) = (next, phrase) {
                    tokens[i].kind = TokenKind::Keyword;
                    tokens[i].phrase = Some(canonical_phrase);
                    tokens[i].boundary = boundary_for(canonical_phrase);
                    tokens[j].kind = TokenKind::Keyword;
                    tokens[j].phrase = Some(canonical_phrase);
                    tokens[j].phrase_tail = true;
                    note_clause(&mut clause_depths, &tokens[i]);
                    i = j + 1;
                    continue;
                }

                tokens[i].kind = TokenKind::Keyword;
                tokens[i].boundary = boundary_for(canonical);
                note_clause(&mut clause_depths, &tokens[i]);
            }
            TokenKind::Punctuation if tokens[i].text == "," => {
                let depth = tokens[i].paren_depth;
                // Scopes deeper than this comma have closed for good.
                while clause_depths.last().is_some_and(|d| *d > depth) {
                    clause_depths.pop();
                }
                if clause_depths.last() == Some(&depth) {
                    tokens[i].boundary = ClauseBoundary::ListSeparator;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

/// Index of the next identifier separated from `i` by whitespace only.
fn next_word(tokens: &[Token<'_>], i: usize) -> Option<usize> {
    let mut j = i + 1;
    while j < tokens.len() && tokens[j].kind == TokenKind::Whitespace {
        j += 1;
    }
    (j < tokens.len() && tokens[j].kind == TokenKind::Identifier).then_some(j)
}

fn boundary_for(canonical: &str) -> ClauseBoundary {
    if keywords::MAJOR_CLAUSE_STARTS.contains(&canonical) {
        ClauseBoundary::MajorClauseStart
    } else if keywords::JOIN_STARTS.contains(&canonical) {
        ClauseBoundary::JoinStart
    } else if keywords::CONNECTIVES.contains(&canonical) {
        ClauseBoundary::LogicalConnective
    } else {
        ClauseBoundary::None
    }
}

/// Record the paren depth of a clause start so comma classification can
/// find its nearest enclosing clause.
fn note_clause(clause_depths: &mut Vec<usize>, token: &Token<'_>) {
    if !matches!(
        token.boundary,
        ClauseBoundary::MajorClauseStart | ClauseBoundary::JoinStart
    ) {
        return;
    }
    let depth = token.paren_depth;
    while clause_depths.last().is_some_and(|d| *d >= depth) {
        clause_depths.pop();
    }
    clause_depths.push(depth);
}
