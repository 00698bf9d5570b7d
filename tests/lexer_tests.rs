//! Lexer tests for devkit
//!
//! Tests for the lossless SQL tokenization layer.

use devkit::sql::lexer::{tokenize, LexWarning, TokenKind};
use devkit::Error;

/// Concatenating every token's text must reproduce the input exactly.
fn assert_lossless(input: &str) {
    let lexed = tokenize(input).expect("should tokenize");
    let rebuilt: String = lexed.tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, input, "tokenization must be lossless");
}

mod losslessness {
    use super::*;

    #[test]
    fn simple_statement() {
        assert_lossless("select a, b from t where a = 1");
    }

    #[test]
    fn strings_comments_and_parens() {
        assert_lossless("SELECT 'it''s', \"col\" -- trailing\nFROM (SELECT 1) /* x */ x;");
    }

    #[test]
    fn unrecognized_characters() {
        assert_lossless("select @var, #odd, é from t");
    }

    #[test]
    fn unterminated_string_still_lossless() {
        assert_lossless("select 'never closed from t");
    }
}

mod strings {
    use super::*;

    #[test]
    fn single_quoted_literal_is_one_token() {
        let lexed = tokenize("'hello world'").expect("should tokenize");
        assert_eq!(lexed.tokens.len(), 1);
        assert_eq!(lexed.tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(lexed.tokens[0].text, "'hello world'");
    }

    #[test]
    fn doubled_quote_is_an_escape_not_a_terminator() {
        let lexed = tokenize("'it''s' rest").expect("should tokenize");
        assert_eq!(lexed.tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(lexed.tokens[0].text, "'it''s'");
    }

    #[test]
    fn double_quoted_identifier_lexes_as_literal() {
        let lexed = tokenize("\"from\"").expect("should tokenize");
        assert_eq!(lexed.tokens[0].kind, TokenKind::StringLiteral);
    }

    #[test]
    fn unterminated_string_runs_to_end_with_warning() {
        let lexed = tokenize("select 'oops").expect("should tokenize");
        let last = lexed.tokens.last().expect("tokens");
        assert_eq!(last.kind, TokenKind::StringLiteral);
        assert_eq!(last.text, "'oops");
        assert_eq!(lexed.warnings, vec![LexWarning::UnterminatedString { start: 7 }]);
    }

    #[test]
    fn keyword_inside_string_is_not_a_keyword_token() {
        let lexed = tokenize("'SELECT'").expect("should tokenize");
        assert_eq!(lexed.tokens[0].kind, TokenKind::StringLiteral);
    }
}

mod comments {
    use super::*;

    #[test]
    fn line_comment_runs_to_end_of_line() {
        let lexed = tokenize("a -- comment here\nb").expect("should tokenize");
        let comment = lexed
            .tokens
            .iter()
            .find(|t| t.kind == TokenKind::Comment)
            .expect("comment token");
        assert_eq!(comment.text, "-- comment here");
    }

    #[test]
    fn block_comment_is_one_token() {
        let lexed = tokenize("a /* b\nc */ d").expect("should tokenize");
        let comment = lexed
            .tokens
            .iter()
            .find(|t| t.kind == TokenKind::Comment)
            .expect("comment token");
        assert_eq!(comment.text, "/* b\nc */");
    }

    #[test]
    fn unterminated_block_comment_warns() {
        let lexed = tokenize("a /* no end").expect("should tokenize");
        assert_eq!(
            lexed.warnings,
            vec![LexWarning::UnterminatedComment { start: 2 }]
        );
    }

    #[test]
    fn block_comments_do_not_nest() {
        let lexed = tokenize("/* a /* b */ c").expect("should tokenize");
        assert_eq!(lexed.tokens[0].text, "/* a /* b */");
    }
}

mod structure {
    use super::*;

    #[test]
    fn whitespace_run_collapses_to_one_token() {
        let lexed = tokenize("a  \t\n  b").expect("should tokenize");
        let kinds: Vec<TokenKind> = lexed.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Identifier
            ]
        );
    }

    #[test]
    fn numbers_including_decimals() {
        let lexed = tokenize("3.14 42").expect("should tokenize");
        assert_eq!(lexed.tokens[0].kind, TokenKind::NumberLiteral);
        assert_eq!(lexed.tokens[0].text, "3.14");
        assert_eq!(lexed.tokens[2].text, "42");
    }

    #[test]
    fn paren_depth_is_recorded() {
        let lexed = tokenize("a(b(c))").expect("should tokenize");
        let depth_of = |text: &str| {
            lexed
                .tokens
                .iter()
                .find(|t| t.text == text)
                .map(|t| t.paren_depth)
                .expect("token")
        };
        assert_eq!(depth_of("a"), 0);
        assert_eq!(depth_of("b"), 1);
        assert_eq!(depth_of("c"), 2);
    }

    #[test]
    fn spans_cover_the_source() {
        let input = "select x";
        let lexed = tokenize(input).expect("should tokenize");
        assert_eq!(lexed.tokens.first().map(|t| t.span.start), Some(0));
        assert_eq!(lexed.tokens.last().map(|t| t.span.end), Some(input.len()));
    }

    #[test]
    fn unrecognized_character_becomes_single_punctuation() {
        let lexed = tokenize("@").expect("should tokenize");
        assert_eq!(lexed.tokens[0].kind, TokenKind::Punctuation);
        assert_eq!(lexed.tokens[0].text, "@");
    }
}

mod limits {
    use super::*;

    #[test]
    fn pathological_nesting_is_rejected() {
        let input = "(".repeat(200);
        let result = tokenize(&input);
        assert!(matches!(result, Err(Error::LimitExceeded { .. })));
    }

    #[test]
    fn deep_but_allowed_nesting_passes() {
        let input = format!("{}{}", "(".repeat(100), ")".repeat(100));
        assert!(tokenize(&input).is_ok());
    }

    #[test]
    fn stray_closing_parens_do_not_underflow() {
        let lexed = tokenize("))a").expect("should tokenize");
        assert!(lexed.tokens.iter().all(|t| t.paren_depth == 0));
    }
}
