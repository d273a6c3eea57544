//! The construct walker: pattern in, ordered explanation lines out.

use crate::classify::{Repeat, escape_meaning};

use super::scanner::Scanner;

/// Characters that carry regex meaning somewhere, reported specially when
/// they show up as plain literals (an unmatched `)` or a stray `}`).
const SPECIAL_CHARS: &str = "^$.*+?()[]{}|\\";

/// Explain the structure of `pattern`, one line per construct.
///
/// An empty pattern yields a fixed single line. All other inputs get a
/// two-line preamble followed by the per-construct lines in source order.
pub fn explain(pattern: &str) -> String {
    if pattern.is_empty() {
        return "Empty pattern — nothing to explain.".to_string();
    }

    let mut explainer = Explainer {
        scanner: Scanner::new(pattern),
        lines: Vec::new(),
    };
    explainer.preamble(pattern);
    explainer.walk();
    explainer.lines.join("\n")
}

struct Explainer<'a> {
    scanner: Scanner<'a>,
    lines: Vec<String>,
}

impl Explainer<'_> {
    fn preamble(&mut self, pattern: &str) {
        self.lines.push(format!("Pattern: /{pattern}/"));
        self.lines.push(
            "Overview: a regex is a sequence of literals, groups, character classes and \
             quantifiers that together decide which strings are accepted."
                .to_string(),
        );
        self.lines.push(String::new());
    }

    fn walk(&mut self) {
        while let Some(ch) = self.scanner.peek() {
            match ch {
                '\\' => self.escape(),
                '^' => {
                    self.push("^ — start of the line.");
                    self.scanner.bump();
                }
                '$' => {
                    self.push("$ — end of the line.");
                    self.scanner.bump();
                }
                '.' => {
                    self.push(". — any character (except newline).");
                    self.scanner.bump();
                }
                '[' => self.char_class(),
                '(' => self.group(),
                '{' => self.curly_quantifier(),
                '?' => {
                    self.push("? — 0 or 1 repetition of the preceding element (optional).");
                    self.scanner.bump();
                }
                '+' => {
                    self.push("+ — 1 or more repetitions of the preceding element.");
                    self.scanner.bump();
                }
                '*' => {
                    self.push("* — 0 or more repetitions of the preceding element.");
                    self.scanner.bump();
                }
                '|' => {
                    self.push("| — alternation (either the left side or the right).");
                    self.scanner.bump();
                }
                _ => {
                    self.literal(ch);
                    self.scanner.bump();
                }
            }
        }
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn escape(&mut self) {
        self.scanner.bump(); // consume '\'
        let Some(ch) = self.scanner.peek() else {
            self.push("\\ — a trailing backslash with nothing to escape.");
            return;
        };
        match escape_meaning(ch) {
            Some(meaning) => self.push(format!("\\{ch} — {meaning}.")),
            None => self.push(format!(
                "\\{ch} — escaped character '{ch}' or a special sequence (depends on context)."
            )),
        }
        self.scanner.bump();
    }

    fn char_class(&mut self) {
        let start = self.scanner.pos();
        self.scanner.bump(); // consume '['
        let mut content = String::new();
        let mut closed = false;

        while let Some(ch) = self.scanner.peek() {
            if ch == '\\'
                && let Some(next) = self.scanner.peek_at(1)
            {
                content.push('\\');
                content.push(next);
                self.scanner.bump();
                self.scanner.bump();
                continue;
            }
            self.scanner.bump();
            if ch == ']' {
                closed = true;
                break;
            }
            content.push(ch);
        }

        let full = self.scanner.slice_from(start);
        if !closed {
            self.push(format!(
                "{full} — unterminated character class (missing closing ']')."
            ));
            return;
        }

        let (negated, body) = match content.strip_prefix('^') {
            Some(rest) => (true, rest),
            None => (false, content.as_str()),
        };
        let membership = if negated {
            "characters NOT in the set"
        } else {
            "characters from the set"
        };
        if body.is_empty() {
            self.push(format!(
                "{full} — character class, {membership}: (empty class — usually an error)."
            ));
        } else {
            self.push(format!("{full} — character class, {membership}: {body}"));
        }
    }

    fn group(&mut self) {
        let start = self.scanner.pos();
        self.scanner.bump(); // consume '('

        if self.scanner.peek() == Some('?') {
            self.special_group(start);
            return;
        }

        // Plain capturing group: echo the unescaped inner content.
        let mut content = String::new();
        let mut depth = 1usize;
        let mut closed = false;

        while let Some(ch) = self.scanner.peek() {
            if ch == '\\'
                && let Some(next) = self.scanner.peek_at(1)
            {
                content.push('\\');
                content.push(next);
                self.scanner.bump();
                self.scanner.bump();
                continue;
            }
            self.scanner.bump();
            match ch {
                '(' => {
                    depth += 1;
                    content.push(ch);
                }
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        closed = true;
                        break;
                    }
                    content.push(ch);
                }
                _ => content.push(ch),
            }
        }

        let full = self.scanner.slice_from(start);
        if closed {
            self.push(format!(
                "{full} — group / subexpression. Group content: \"{content}\"."
            ));
        } else {
            self.push(format!(
                "{full} — unterminated group (missing closing ')'). Content so far: \"{content}\"."
            ));
        }
    }

    /// Classify and report a `(?...)` group. The cursor sits on the `?`.
    fn special_group(&mut self, start: usize) {
        let kind = match (self.scanner.peek_at(1), self.scanner.peek_at(2)) {
            (Some(':'), _) => Some(
                "non-capturing group (?:...) — groups the expression without creating a \
                 captured subexpression",
            ),
            (Some('='), _) => {
                Some("positive lookahead (?=...) — what must follow, without joining the match")
            }
            (Some('!'), _) => Some("negative lookahead (?!...) — what must NOT follow"),
            (Some('<'), Some('=')) => {
                Some("positive lookbehind (?<=...) — what must precede the match position")
            }
            (Some('<'), Some('!')) => {
                Some("negative lookbehind (?<!...) — what must NOT precede the match position")
            }
            _ => None,
        };

        let mut depth = 1usize;
        let mut closed = false;
        while let Some(ch) = self.scanner.peek() {
            if ch == '\\' && self.scanner.peek_at(1).is_some() {
                self.scanner.bump();
                self.scanner.bump();
                continue;
            }
            self.scanner.bump();
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        closed = true;
                        break;
                    }
                }
                _ => {}
            }
        }

        let full = self.scanner.slice_from(start);
        let line = match (kind, closed) {
            (Some(desc), true) => format!("{full} — {desc}."),
            (Some(desc), false) => {
                format!("{full} — {desc}; unterminated (missing closing ')').")
            }
            (None, true) => format!(
                "{full} — special group (starts with '(?'); exact meaning depends on the syntax."
            ),
            (None, false) => format!(
                "{full} — special group (starts with '(?'); unterminated (missing closing ')')."
            ),
        };
        self.lines.push(line);
    }

    fn curly_quantifier(&mut self) {
        let start = self.scanner.pos();
        self.scanner.bump(); // consume '{'
        let mut interior = String::new();
        let mut closed = false;

        while let Some(ch) = self.scanner.bump() {
            if ch == '}' {
                closed = true;
                break;
            }
            interior.push(ch);
        }

        let full = self.scanner.slice_from(start);
        if !closed {
            self.push(format!(
                "{full} — unterminated curly-brace quantifier (missing closing '}}')."
            ));
            return;
        }

        match Repeat::parse(&interior) {
            Some(Repeat::Exactly(n)) => self.push(format!(
                "{full} — exactly {n} repetitions of the preceding element."
            )),
            Some(Repeat::AtLeast(n)) => self.push(format!(
                "{full} — at least {n} repetitions of the preceding element."
            )),
            Some(Repeat::Between(m, n)) => self.push(format!(
                "{full} — between {m} and {n} repetitions of the preceding element."
            )),
            None => self.push(format!(
                "{full} — curly-brace quantifier, format is not {{m}} or {{m,n}}."
            )),
        }
    }

    fn literal(&mut self, ch: char) {
        if SPECIAL_CHARS.contains(ch) {
            self.push(format!(
                "{ch} — special character treated as a literal here (check context and escaping)."
            ));
        } else {
            self.push(format!("{ch} — ordinary character '{ch}'."));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(pattern: &str) -> Vec<String> {
        explain(pattern).lines().map(str::to_string).collect()
    }

    /// Explanation lines after the two-line preamble and its blank separator.
    fn body(pattern: &str) -> Vec<String> {
        lines(pattern).into_iter().skip(3).collect()
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(explain(""), "Empty pattern — nothing to explain.");
    }

    #[test]
    fn test_preamble_echoes_pattern() {
        let all = lines(r"\d");
        assert_eq!(all[0], r"Pattern: /\d/");
        assert!(all[1].starts_with("Overview:"));
        assert_eq!(all[2], "");
    }

    #[test]
    fn test_known_escape() {
        let body = body(r"\d");
        assert_eq!(body, vec![r"\d — any digit (0–9)."]);
    }

    #[test]
    fn test_unknown_escape() {
        let body = body(r"\q");
        assert!(body[0].contains("escaped character 'q'"), "{body:?}");
    }

    #[test]
    fn test_trailing_backslash() {
        let body = body(r"a\");
        assert!(body[1].contains("trailing backslash"), "{body:?}");
    }

    #[test]
    fn test_anchors_and_dot() {
        let body = body("^.$");
        assert!(body[0].contains("start of the line"));
        assert!(body[1].contains("any character"));
        assert!(body[2].contains("end of the line"));
    }

    #[test]
    fn test_class_negation_strips_marker() {
        let body = body("[^abc]");
        assert_eq!(body.len(), 1);
        assert!(body[0].contains("NOT in the set: abc"), "{body:?}");
        assert!(!body[0].contains("^abc"), "{body:?}");
    }

    #[test]
    fn test_empty_class() {
        let body = body("[]");
        assert!(body[0].contains("empty class"), "{body:?}");
    }

    #[test]
    fn test_unterminated_class_is_flagged_not_fatal() {
        let body = body("[abc");
        assert_eq!(body.len(), 1);
        assert!(body[0].contains("unterminated character class"), "{body:?}");
    }

    #[test]
    fn test_escaped_bracket_stays_in_class() {
        let body = body(r"[a\]b]");
        assert!(body[0].contains(r"characters from the set: a\]b"), "{body:?}");
    }

    #[test]
    fn test_plain_group_echoes_content() {
        let body = body("(abc)");
        assert!(body[0].contains("Group content: \"abc\""), "{body:?}");
    }

    #[test]
    fn test_nested_group_spans_whole_outer() {
        let body = body("(a(b)c)");
        assert_eq!(body.len(), 1);
        assert!(body[0].starts_with("(a(b)c) —"), "{body:?}");
        assert!(body[0].contains("\"a(b)c\""), "{body:?}");
    }

    #[test]
    fn test_special_groups() {
        assert!(body("(?:ab)")[0].contains("non-capturing group"));
        assert!(body("(?=ab)")[0].contains("positive lookahead"));
        assert!(body("(?!ab)")[0].contains("negative lookahead"));
        assert!(body("(?<=ab)")[0].contains("positive lookbehind"));
        assert!(body("(?<!ab)")[0].contains("negative lookbehind"));
        assert!(body("(?Pab)")[0].contains("special group"));
    }

    #[test]
    fn test_unterminated_group() {
        let b1 = body("(abc");
        assert!(b1[0].contains("unterminated group"), "{b1:?}");
        let b2 = body("(?=abc");
        assert!(b2[0].contains("unterminated"), "{b2:?}");
    }

    #[test]
    fn test_curly_forms() {
        assert!(body("a{3}")[1].contains("exactly 3"));
        assert!(body("a{3,}")[1].contains("at least 3"));
        assert!(body("a{2,5}")[1].contains("between 2 and 5"));
        assert!(body("a{x}")[1].contains("format is not"));
    }

    #[test]
    fn test_unterminated_curly() {
        let body = body("a{3");
        assert!(body[1].contains("unterminated curly-brace"), "{body:?}");
    }

    #[test]
    fn test_simple_quantifiers_and_alternation() {
        let body = body("a?|b+");
        assert!(body[1].contains("0 or 1 repetition"));
        assert!(body[2].contains("alternation"));
        assert!(body[4].contains("1 or more"));
    }

    #[test]
    fn test_stray_special_literal() {
        let body = body("a)b");
        assert!(body[1].contains("treated as a literal"), "{body:?}");
    }

    #[test]
    fn test_line_order_matches_source_order() {
        let body = body(r"^\d{2}$");
        assert!(body[0].starts_with("^"));
        assert!(body[1].starts_with(r"\d"));
        assert!(body[2].starts_with("{2}"));
        assert!(body[3].starts_with("$"));
    }
}
