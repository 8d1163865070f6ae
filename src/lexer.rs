use crate::token::Token;

/// A scanned token together with the total length it consumed from the
/// requested offset, leading spaces included
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// The token found at the requested offset
    pub token: Token,
    /// Characters consumed, counted from the requested offset
    pub len: usize,
}

impl Scan {
    fn new(token: Token, len: usize) -> Scan {
        Scan { token, len }
    }
}

/// Check if `c` can appear as the first character of an identifier
fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_alphabetic()
}

/// Check if `c` can appear inside an identifier
fn is_identifier_part(c: char) -> bool {
    c == '_' || c == '$' || c.is_ascii_alphanumeric()
}

/// Scan the token starting at `offset` in `src`.
///
/// Scanning never consumes input by itself: the caller advances its own
/// cursor by [`Scan::len`] once it decides to keep the token, so probing
/// the same offset repeatedly for lookahead is cheap and stateless. Only
/// ASCII spaces are skipped, and their count is folded into the returned
/// length so a single addition moves the cursor past both the whitespace
/// and the token.
pub fn scan_token(src: &[char], offset: usize) -> Scan {
    let mut pos = offset;
    while pos < src.len() && src[pos] == ' ' {
        pos += 1;
    }
    if pos >= src.len() {
        return Scan::new(Token::End, pos - offset);
    }

    let skipped = pos - offset;
    match src[pos] {
        '+' => Scan::new(Token::Plus, skipped + 1),
        '-' => Scan::new(Token::Minus, skipped + 1),
        '*' => Scan::new(Token::Star, skipped + 1),
        '/' => Scan::new(Token::Slash, skipped + 1),
        '(' => Scan::new(Token::LParen, skipped + 1),
        ')' => Scan::new(Token::RParen, skipped + 1),
        ',' => Scan::new(Token::Comma, skipped + 1),
        '"' => {
            // No escape sequences: the literal runs to the next plain quote
            let mut end = pos + 1;
            while end < src.len() && src[end] != '"' {
                end += 1;
            }
            if end >= src.len() {
                return Scan::new(Token::Invalid, 0);
            }
            let text: String = src[pos + 1..end].iter().collect();
            Scan::new(Token::Str(text), skipped + end - pos + 1)
        }
        c if is_identifier_start(c) => {
            let mut end = pos + 1;
            while end < src.len() && is_identifier_part(src[end]) {
                end += 1;
            }
            let name: String = src[pos..end].iter().collect();
            Scan::new(Token::Identifier(name), skipped + end - pos)
        }
        _ => match scan_number(src, pos) {
            Some(digits) => {
                let text: String = src[pos..pos + digits].iter().collect();
                match text.parse::<f64>() {
                    Ok(number) => Scan::new(Token::Number(number), skipped + digits),
                    Err(_) => Scan::new(Token::Invalid, 0),
                }
            }
            None => Scan::new(Token::Invalid, 0),
        },
    }
}

/// Scan a decimal float literal at `pos`, returning how many characters it
/// spans.
///
/// The accepted shapes are `1.5`, `0.5`, `12`, `0` and `.5`, tried in that
/// order. Ordering matters: a trailing dot is never consumed (`12.` scans
/// as `12`) and a leading zero stops after the zero unless a fraction
/// follows (`05` scans as `0`).
fn scan_number(src: &[char], pos: usize) -> Option<usize> {
    let digit = |i: usize| i < src.len() && src[i].is_ascii_digit();

    let start = pos;
    let mut pos = pos;
    // The sign prefix is kept for completeness; in an expression a leading
    // `-` is scanned as its own token before this rule is ever consulted
    if pos < src.len() && src[pos] == '-' {
        pos += 1;
    }

    if digit(pos) {
        if src[pos] == '0' {
            pos += 1;
            if pos < src.len() && src[pos] == '.' && digit(pos + 1) {
                pos += 1;
                while digit(pos) {
                    pos += 1;
                }
            }
        } else {
            while digit(pos) {
                pos += 1;
            }
            if pos < src.len() && src[pos] == '.' && digit(pos + 1) {
                pos += 1;
                while digit(pos) {
                    pos += 1;
                }
            }
        }
    } else if pos < src.len() && src[pos] == '.' && digit(pos + 1) {
        pos += 1;
        while digit(pos) {
            pos += 1;
        }
    } else {
        return None;
    }

    Some(pos - start)
}

#[cfg(test)]
mod tests {
    use super::{scan_token, Scan};
    use crate::token::Token;
    use test_case::test_case;

    fn scan(input: &str, offset: usize) -> (Token, usize) {
        let src: Vec<char> = input.chars().collect();
        let Scan { token, len } = scan_token(&src, offset);
        (token, len)
    }

    #[test_case("+" => (Token::Plus, 1) ; "plus")]
    #[test_case("-" => (Token::Minus, 1) ; "minus")]
    #[test_case("*" => (Token::Star, 1) ; "star")]
    #[test_case("/" => (Token::Slash, 1) ; "slash")]
    #[test_case("(" => (Token::LParen, 1) ; "left paren")]
    #[test_case(")" => (Token::RParen, 1) ; "right paren")]
    #[test_case("," => (Token::Comma, 1) ; "comma")]
    #[test_case("   +" => (Token::Plus, 4) ; "length includes skipped spaces")]
    fn punctuation(input: &str) -> (Token, usize) {
        scan(input, 0)
    }

    #[test_case("12" => (Token::Number(12.0), 2) ; "integer")]
    #[test_case("0" => (Token::Number(0.0), 1) ; "zero")]
    #[test_case("0.5" => (Token::Number(0.5), 3) ; "zero with fraction")]
    #[test_case(".5" => (Token::Number(0.5), 2) ; "missing leading zero")]
    #[test_case("12.75" => (Token::Number(12.75), 5) ; "full decimal")]
    #[test_case("12." => (Token::Number(12.0), 2) ; "trailing dot is not consumed")]
    #[test_case("05" => (Token::Number(0.0), 1) ; "leading zero stops after the zero")]
    #[test_case("  1.5" => (Token::Number(1.5), 5) ; "number after spaces")]
    #[test_case("3x" => (Token::Number(3.0), 1) ; "number stops at identifier")]
    fn numbers(input: &str) -> (Token, usize) {
        scan(input, 0)
    }

    #[test_case("abc" => (Token::Identifier("abc".into()), 3) ; "plain name")]
    #[test_case("_a1" => (Token::Identifier("_a1".into()), 3) ; "underscore start")]
    #[test_case("$x" => (Token::Identifier("$x".into()), 2) ; "dollar start")]
    #[test_case("a$9_b" => (Token::Identifier("a$9_b".into()), 5) ; "mixed body")]
    #[test_case("a+b" => (Token::Identifier("a".into()), 1) ; "name stops at operator")]
    fn identifiers(input: &str) -> (Token, usize) {
        scan(input, 0)
    }

    #[test_case("\"ab\"" => (Token::Str("ab".into()), 4) ; "simple literal")]
    #[test_case("\"\"" => (Token::Str("".into()), 2) ; "empty literal")]
    #[test_case("  \"a b\"" => (Token::Str("a b".into()), 7) ; "spaces inside and before")]
    #[test_case("\"ab" => (Token::Invalid, 0) ; "unterminated literal")]
    fn strings(input: &str) -> (Token, usize) {
        scan(input, 0)
    }

    #[test_case("?" ; "question mark")]
    #[test_case("." ; "lone dot")]
    #[test_case("@x" ; "at sign")]
    fn invalid(input: &str) {
        assert_eq!(scan(input, 0).0, Token::Invalid);
    }

    #[test]
    fn end_of_input() {
        assert_eq!(scan("", 0), (Token::End, 0));
        assert_eq!(scan("   ", 0), (Token::End, 3));
        assert_eq!(scan("1", 5), (Token::End, 0));
    }

    #[test]
    fn probing_does_not_consume() {
        let src: Vec<char> = "1+2".chars().collect();
        assert_eq!(scan_token(&src, 1).token, Token::Plus);
        assert_eq!(scan_token(&src, 1).token, Token::Plus);
        assert_eq!(scan_token(&src, 0).token, Token::Number(1.0));
    }
}
