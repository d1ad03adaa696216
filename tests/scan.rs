use clox::{Scanner, Token, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tokens(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}

fn summary(source: &str) -> Vec<(TokenKind, &str, usize)> {
    Scanner::new(source)
        .map(|t| (t.kind, t.lexeme, t.line()))
        .collect()
}

#[test]
fn small_program() {
    use TokenKind::*;

    let source = r#"
class Point {
  init(x) { this.x = x; } // store it
}

fun show(p) {
  if (p.x >= 1.25 and !nil) print "big";
  else return p.x != -3;
}
"#;

    assert_eq!(
        summary(source),
        vec![
            (Class, "class", 2),
            (Identifier, "Point", 2),
            (LeftBrace, "{", 2),
            (Identifier, "init", 3),
            (LeftParen, "(", 3),
            (Identifier, "x", 3),
            (RightParen, ")", 3),
            (LeftBrace, "{", 3),
            (This, "this", 3),
            (Dot, ".", 3),
            (Identifier, "x", 3),
            (Equal, "=", 3),
            (Identifier, "x", 3),
            (Semicolon, ";", 3),
            (RightBrace, "}", 3),
            (RightBrace, "}", 4),
            (Fun, "fun", 6),
            (Identifier, "show", 6),
            (LeftParen, "(", 6),
            (Identifier, "p", 6),
            (RightParen, ")", 6),
            (LeftBrace, "{", 6),
            (If, "if", 7),
            (LeftParen, "(", 7),
            (Identifier, "p", 7),
            (Dot, ".", 7),
            (Identifier, "x", 7),
            (GreaterEqual, ">=", 7),
            (Number, "1.25", 7),
            (And, "and", 7),
            (Bang, "!", 7),
            (Nil, "nil", 7),
            (RightParen, ")", 7),
            (Print, "print", 7),
            (String, "\"big\"", 7),
            (Semicolon, ";", 7),
            (Else, "else", 8),
            (Return, "return", 8),
            (Identifier, "p", 8),
            (Dot, ".", 8),
            (Identifier, "x", 8),
            (BangEqual, "!=", 8),
            (Minus, "-", 8),
            (Number, "3", 8),
            (Semicolon, ";", 8),
            (RightBrace, "}", 9),
            (Eof, "", 10),
        ]
    );
}

#[test]
fn all_keywords() {
    let source = "and class else false for fun if nil or print return super this true var while";
    let toks = tokens(source);
    assert_eq!(toks.len(), 17);
    assert!(toks[..16].iter().all(|t| t.kind.is_keyword()));
    assert!(toks[16].is_eof());
}

#[test]
fn member_access_on_number() {
    assert_eq!(
        summary("3.abs"),
        vec![
            (TokenKind::Number, "3", 1),
            (TokenKind::Dot, ".", 1),
            (TokenKind::Identifier, "abs", 1),
            (TokenKind::Eof, "", 1),
        ]
    );
}

#[test]
fn unterminated_string_leaves_cursor_at_end() {
    let mut scanner = Scanner::new("x = \"never\nclosed");
    scanner.scan_token();
    scanner.scan_token();
    let error = scanner.scan_token();
    assert_eq!(error.kind, TokenKind::Error);
    assert_eq!(error.lexeme, "Unterminated string.");
    assert_eq!(error.span.end(), 17);
    assert!(!scanner.is_exhausted());

    let eof = scanner.scan_token();
    assert!(eof.is_eof());
    assert_eq!(eof.line(), 2);
    assert!(scanner.is_exhausted());
}

#[test]
fn exhausted_only_after_eof() {
    let mut scanner = Scanner::new("x");
    assert_eq!(scanner.scan_token().kind, TokenKind::Identifier);
    assert!(!scanner.is_exhausted());

    assert!(scanner.scan_token().is_eof());
    assert!(scanner.is_exhausted());
    assert!(scanner.scan_token().is_eof());
    assert!(scanner.is_exhausted());
}

#[test]
fn iterator_stops_after_eof_from_scan_token() {
    let mut scanner = Scanner::new("x");
    scanner.scan_token();
    assert!(scanner.scan_token().is_eof());
    assert_eq!(scanner.next(), None);
}

#[test]
fn lexemes_borrow_the_source() {
    let source = String::from("alpha 42");
    let toks = tokens(&source);
    let base = source.as_ptr() as usize;
    for token in &toks {
        assert_eq!(token.lexeme.as_ptr() as usize, base + token.span.start());
        assert_eq!(token.lexeme.len(), token.span.range.len());
    }
}

proptest! {
    #[test]
    fn scanning_terminates_with_one_eof(source in "[ -~\t\n]{0,200}") {
        let toks = tokens(&source);
        // every non-terminal token consumes at least one byte
        prop_assert!(toks.len() <= source.len() + 1);
        prop_assert!(toks.last().is_some_and(|t| t.is_eof()));
        prop_assert_eq!(toks.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn spans_are_ordered_and_disjoint(source in "[ -~\t\n]{0,200}") {
        let toks = tokens(&source);
        for pair in toks.windows(2) {
            prop_assert!(pair[0].span.range.end <= pair[1].span.range.start);
            prop_assert!(pair[0].line() <= pair[1].line());
        }
        for token in toks.iter().filter(|t| !t.is_error()) {
            prop_assert_eq!(token.lexeme, &source[token.span.range.clone()]);
        }
    }

    #[test]
    fn eof_is_idempotent(source in "[ -~\t\n]{0,100}") {
        let mut scanner = Scanner::new(&source);
        let first = loop {
            let token = scanner.scan_token();
            if token.is_eof() {
                break token;
            }
        };

        prop_assert!(first.span.range.is_empty());
        prop_assert_eq!(first.line(), scanner.line());
        for _ in 0..3 {
            prop_assert_eq!(scanner.scan_token(), first.clone());
        }
    }

    #[test]
    fn identifiers_never_match_keyword_prefixes(ident in "[a-z_][a-z0-9_]{0,8}") {
        let toks = tokens(&ident);
        prop_assert_eq!(toks.len(), 2);
        let expected = TokenKind::keyword(&ident).unwrap_or(TokenKind::Identifier);
        prop_assert_eq!(toks[0].kind, expected);
        prop_assert_eq!(toks[0].lexeme, ident.as_str());
    }
}
