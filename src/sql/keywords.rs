//! Static SQL keyword and phrase tables
//!
//! Built once into the binary; the classifier promotes identifiers to
//! keywords by looking them up here. No runtime mutation.

/// Single-word keywords, upper-case canonical spelling.
///
/// Must stay sorted: lookup is a binary search.
pub const KEYWORDS: &[&str] = &[
    "ADD",
    "ALL",
    "ALTER",
    "AND",
    "AS",
    "BETWEEN",
    "BY",
    "CASE",
    "COLUMN",
    "CREATE",
    "CROSS",
    "DELETE",
    "DISTINCT",
    "DROP",
    "ELSE",
    "END",
    "FOREIGN",
    "FROM",
    "FULL",
    "GROUP",
    "HAVING",
    "IN",
    "INNER",
    "INSERT",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "LEFT",
    "LIKE",
    "LIMIT",
    "NATURAL",
    "NOT",
    "NULL",
    "OFFSET",
    "ON",
    "OR",
    "ORDER",
    "OUTER",
    "PRIMARY",
    "RECURSIVE",
    "REFERENCES",
    "RIGHT",
    "SELECT",
    "SET",
    "TABLE",
    "THEN",
    "UNION",
    "UPDATE",
    "USING",
    "VALUES",
    "WHEN",
    "WHERE",
    "WITH",
];

/// Two-word keyword phrases: (first word, second word, canonical spelling).
pub const PHRASES: &[(&str, &str, &str)] = &[
    ("CROSS", "JOIN", "CROSS JOIN"),
    ("FULL", "JOIN", "FULL JOIN"),
    ("GROUP", "BY", "GROUP BY"),
    ("INNER", "JOIN", "INNER JOIN"),
    ("LEFT", "JOIN", "LEFT JOIN"),
    ("ORDER", "BY", "ORDER BY"),
    ("RIGHT", "JOIN", "RIGHT JOIN"),
    ("UNION", "ALL", "UNION ALL"),
];

/// Keywords and phrases that open a major clause and reset indentation.
pub const MAJOR_CLAUSE_STARTS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "GROUP BY", "HAVING", "ORDER BY", "LIMIT", "UNION", "UNION ALL",
];

/// Keywords and phrases that open a join line.
pub const JOIN_STARTS: &[&str] = &[
    "JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "INNER JOIN",
    "FULL JOIN",
    "CROSS JOIN",
];

/// Logical connectives that continue a clause body on a new line.
pub const CONNECTIVES: &[&str] = &["AND", "OR"];

/// Look up a word (case-insensitive) in the keyword table.
pub fn lookup(word: &str) -> Option<&'static str> {
    let upper = word.to_ascii_uppercase();
    KEYWORDS
        .binary_search(&upper.as_str())
        .ok()
        .map(|i| KEYWORDS[i])
}

/// Look up a two-word phrase (case-insensitive); returns the canonical spelling.
pub fn lookup_phrase(first: &str, second: &str) -> Option<&'static str> {
    let first = first.to_ascii_uppercase();
    let second = second.to_ascii_uppercase();
    PHRASES
        .iter()
        .find(|(a, b, _)| *a == first && *b == second)
        .map(|(_, _, canonical)| *canonical)
}
