//! Lexical tokenizer: splits a raw pattern string into atomic token spans.
//!
//! Tokenization is purely lexical — `(` is a token whether or not the group
//! it opens is ever closed. Grouping semantics belong to the structural
//! explainer. The one invariant that matters here: concatenating the text of
//! every token, in order, reproduces the input exactly.

/// One atomic span of a pattern.
///
/// Borrows from the pattern it was produced from; `start`/`end` are byte
/// offsets into that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split `pattern` into tokens, left to right, one pass.
///
/// - `\` plus the following character is a single token; a trailing `\` is
///   a one-character token.
/// - `[...]` is one token including both brackets. `\`-pairs inside are
///   atomic, so an escaped `]` does not close the class. A class with no
///   closing `]` spans to end of input.
/// - `{...}` is one token up to and including the next `}`, or to end of
///   input if there is none.
/// - `(`, `)`, `^`, `$`, `.`, `*`, `+`, `?`, `|` are one-character tokens.
/// - Anything else is a one-character literal token.
pub fn tokenize(pattern: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(ch) = pattern[pos..].chars().next() {
        let start = pos;
        let end = match ch {
            '\\' => escape_end(pattern, pos),
            '[' => class_end(pattern, pos),
            '{' => braces_end(pattern, pos),
            _ => pos + ch.len_utf8(),
        };
        tokens.push(Token {
            text: &pattern[start..end],
            start,
            end,
        });
        pos = end;
    }

    tokens
}

/// End of an escape token starting at `pos` (which holds `\`).
fn escape_end(pattern: &str, pos: usize) -> usize {
    match pattern[pos + 1..].chars().next() {
        Some(next) => pos + 1 + next.len_utf8(),
        None => pos + 1,
    }
}

/// End of a character-class token starting at `pos` (which holds `[`).
///
/// Returns the offset just past the closing `]`, or `pattern.len()` for an
/// unterminated class.
fn class_end(pattern: &str, pos: usize) -> usize {
    let mut i = pos + 1;
    while let Some(ch) = pattern[i..].chars().next() {
        if ch == '\\'
            && let Some(next) = pattern[i + 1..].chars().next()
        {
            i += 1 + next.len_utf8();
            continue;
        }
        if ch == ']' {
            return i + 1;
        }
        i += ch.len_utf8();
    }
    pattern.len()
}

/// End of a curly-quantifier token starting at `pos` (which holds `{`).
///
/// No nested braces are expected; scans to the first `}` or end of input.
fn braces_end(pattern: &str, pos: usize) -> usize {
    match pattern[pos + 1..].find('}') {
        Some(off) => pos + 1 + off + 1,
        None => pattern.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(pattern: &str) -> Vec<&str> {
        tokenize(pattern).into_iter().map(|t| t.text).collect()
    }

    fn round_trips(pattern: &str) {
        let joined: String = texts(pattern).concat();
        assert_eq!(joined, pattern, "tokens must round-trip for {pattern:?}");
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_singles_and_literals() {
        assert_eq!(texts("^ab$"), vec!["^", "a", "b", "$"]);
        assert_eq!(texts("a.*b+?|"), vec!["a", ".", "*", "b", "+", "?", "|"]);
    }

    #[test]
    fn test_escape_pair_is_one_token() {
        assert_eq!(texts(r"\d+"), vec![r"\d", "+"]);
        assert_eq!(texts(r"a\.b"), vec!["a", r"\.", "b"]);
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(texts(r"ab\"), vec!["a", "b", r"\"]);
    }

    #[test]
    fn test_class_is_one_token() {
        assert_eq!(texts("[abc]+"), vec!["[abc]", "+"]);
        assert_eq!(texts("x[0-9]y"), vec!["x", "[0-9]", "y"]);
    }

    #[test]
    fn test_escaped_bracket_does_not_close_class() {
        assert_eq!(texts(r"[a\]b]c"), vec![r"[a\]b]", "c"]);
    }

    #[test]
    fn test_unterminated_class_spans_to_end() {
        assert_eq!(texts("[abc"), vec!["[abc"]);
        assert_eq!(texts(r"[a\"), vec![r"[a\"]);
    }

    #[test]
    fn test_braces() {
        assert_eq!(texts("a{2,5}"), vec!["a", "{2,5}"]);
        assert_eq!(texts("a{2"), vec!["a", "{2"]);
    }

    #[test]
    fn test_parens_are_single_tokens() {
        assert_eq!(texts("(?:ab)"), vec!["(", "?", ":", "a", "b", ")"]);
    }

    #[test]
    fn test_offsets_cover_input() {
        let pattern = r"^\d{4}-[A-Z]+$";
        let tokens = tokenize(pattern);
        let mut expect = 0;
        for t in &tokens {
            assert_eq!(t.start, expect);
            assert_eq!(&pattern[t.start..t.end], t.text);
            expect = t.end;
        }
        assert_eq!(expect, pattern.len());
    }

    #[test]
    fn test_non_ascii_literals() {
        round_trips("ціна€\\п");
        assert_eq!(texts("п€"), vec!["п", "€"]);
    }

    #[test]
    fn test_round_trip_assorted() {
        for p in [
            r"^https?:\/\/[\w.-]+\.[A-Za-z]{2,}(\/\S*)?$",
            r"^\+380\s?\d{2}\s?\d{3}\s?\d{2}\s?\d{2}$",
            r"(?=.*\d)(?=.*[A-Z]).{8,}",
            "[abc",
            "a{",
            r"\",
            "((()",
        ] {
            round_trips(p);
        }
    }
}
