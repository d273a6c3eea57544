//! Pattern synthesis from example strings.
//!
//! The inverse entry point: instead of explaining a pattern, take literal
//! sample lines and generalize them into one. Independent of the rest of
//! the pipeline — callers usually feed the produced pattern back through
//! analysis so the user sees the same explanations.

use itertools::{Itertools, MinMaxResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters replaced by their escaped form when a sample string is
/// embedded into a pattern literally. Includes `-` so that literals stay
/// inert if a caller drops them into a character class.
const METACHARS: &str = "\\.*+?^${}()|[]-";

/// Outcome of a synthesis call. `pattern` is absent when the input had no
/// usable example lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    pub pattern: Option<String>,
    pub explanation: String,
}

/// Build a pattern from example text, one sample per line.
///
/// Lines are trimmed; blank lines are dropped. One remaining line goes
/// through shape detection, several lines through prefix/suffix/core
/// generalization.
pub fn synthesize(text: &str) -> Synthesis {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    match lines.as_slice() {
        [] => Synthesis {
            pattern: None,
            explanation: "No non-empty example lines found. Add at least one sample string."
                .to_string(),
        },
        [line] => single_line(line),
        _ => multi_line(&lines),
    }
}

/// Escape every regex metacharacter in `text`.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if METACHARS.contains(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Ordered shape detectors for a single sample line.
fn single_line(line: &str) -> Synthesis {
    static ALL_DIGITS: Lazy<Regex> = Lazy::new(|| detector(r"^\d+$"));
    static ALL_LETTERS: Lazy<Regex> = Lazy::new(|| detector(r"^[A-Za-z]+$"));
    static DATE_LIKE: Lazy<Regex> = Lazy::new(|| detector(r"^\d{2,4}[-/.]\d{1,2}[-/.]\d{1,2}$"));
    static EMAIL_LIKE: Lazy<Regex> = Lazy::new(|| detector(r"^[\w.-]+@[\w.-]+\.[A-Za-z]{2,}$"));

    let count = line.chars().count();

    if ALL_DIGITS.is_match(line) {
        let pattern = format!(r"^\d{{{count}}}$");
        return found(line, &format!("a string of {count} digits"), pattern);
    }
    if ALL_LETTERS.is_match(line) {
        let pattern = format!(r"^[A-Za-z]{{{count}}}$");
        return found(line, &format!("a string of {count} Latin letters"), pattern);
    }
    if DATE_LIKE.is_match(line) {
        return found(
            line,
            "a date (the order could be YYYY-MM-DD or DD/MM/YYYY)",
            r"^\d{2,4}[-/.]\d{1,2}[-/.]\d{1,2}$".to_string(),
        );
    }
    if EMAIL_LIKE.is_match(line) {
        return found(
            line,
            "an email address",
            r"^[\w.-]+@[\w.-]+\.[A-Za-z]{2,}$".to_string(),
        );
    }

    let pattern = format!("^{}$", escape_literal(line));
    Synthesis {
        explanation: format!(
            "Input line: \"{line}\"\nNo familiar shape recognized — built a literal regex \
             that matches the line exactly.\nRegex: /{pattern}/"
        ),
        pattern: Some(pattern),
    }
}

fn detector(source: &str) -> Regex {
    Regex::new(source).expect("shape detector must compile")
}

fn found(line: &str, what: &str, pattern: String) -> Synthesis {
    Synthesis {
        explanation: format!(
            "Input line: \"{line}\"\nRecognized: {what}.\nRegex: /{pattern}/"
        ),
        pattern: Some(pattern),
    }
}

/// Generalize several sample lines: longest common prefix, longest common
/// suffix (never overlapping the prefix), and a generalized core between
/// them.
fn multi_line(lines: &[&str]) -> Synthesis {
    let char_lines: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
    let min_len = char_lines.iter().map(Vec::len).min().unwrap_or(0);

    let mut prefix_len = 0;
    for i in 0..min_len {
        let ch = char_lines[0][i];
        if char_lines.iter().all(|l| l[i] == ch) {
            prefix_len += 1;
        } else {
            break;
        }
    }

    let mut suffix_len = 0;
    for i in 0..min_len - prefix_len {
        let ch = char_lines[0][char_lines[0].len() - 1 - i];
        if char_lines.iter().all(|l| l[l.len() - 1 - i] == ch) {
            suffix_len += 1;
        } else {
            break;
        }
    }

    let prefix: String = char_lines[0][..prefix_len].iter().collect();
    let suffix: String = char_lines[0][char_lines[0].len() - suffix_len..].iter().collect();
    let middles: Vec<String> = char_lines
        .iter()
        .map(|l| l[prefix_len..l.len() - suffix_len].iter().collect())
        .collect();

    let pattern = format!(
        "^{}{}{}$",
        escape_literal(&prefix),
        core_pattern(&middles),
        escape_literal(&suffix)
    );

    let samples = lines.iter().map(|l| format!("  • {l}")).join("\n");
    Synthesis {
        explanation: format!(
            "Examples:\n{samples}\n\nAlgorithm:\n- Common prefix: \"{prefix}\"\n\
             - Common suffix: \"{suffix}\"\n- The middle part is generalized by character \
             type.\n\nGenerated regex:\n/{pattern}/"
        ),
        pattern: Some(pattern),
    }
}

/// Generalize the middle segments: a digit class, a letter class, or an
/// alternation of the distinct escaped literals.
fn core_pattern(parts: &[String]) -> String {
    if parts.is_empty() {
        return String::new();
    }

    let lengths = parts.iter().map(|p| p.chars().count());
    let (min, max) = match lengths.minmax() {
        MinMaxResult::NoElements => return String::new(),
        MinMaxResult::OneElement(n) => (n, n),
        MinMaxResult::MinMax(a, b) => (a, b),
    };

    if parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) {
        return if min == max {
            format!(r"\d{{{min}}}")
        } else {
            format!(r"\d{{{min},{max}}}")
        };
    }
    if parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_alphabetic())) {
        return if min == max {
            format!("[A-Za-z]{{{min}}}")
        } else {
            format!("[A-Za-z]{{{min},{max}}}")
        };
    }

    let alternatives: Vec<String> = parts.iter().map(|p| escape_literal(p)).unique().collect();
    if let [only] = alternatives.as_slice() {
        only.clone()
    } else {
        format!("(?:{})", alternatives.iter().join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_of(text: &str) -> String {
        synthesize(text).pattern.expect("synthesis should produce a pattern")
    }

    fn assert_all_match(pattern: &str, lines: &[&str]) {
        let re = Regex::new(pattern).expect("generated pattern should compile");
        for line in lines {
            assert!(re.is_match(line), "{pattern} should match {line:?}");
        }
    }

    #[test]
    fn test_no_usable_lines() {
        let result = synthesize("  \n\n   \n");
        assert!(result.pattern.is_none());
        assert!(result.explanation.contains("Add at least one"));
    }

    #[test]
    fn test_user_id_examples() {
        let text = "user-01\nuser-12\nuser-99";
        let pattern = pattern_of(text);
        assert_eq!(pattern, r"^user\-\d{2}$");
        assert_all_match(&pattern, &["user-01", "user-12", "user-99"]);

        let explanation = synthesize(text).explanation;
        assert!(explanation.contains("Common prefix: \"user-\""));
        assert!(explanation.contains("Common suffix: \"\""));
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(pattern_of("12345"), r"^\d{5}$");
    }

    #[test]
    fn test_single_letters() {
        assert_eq!(pattern_of("Hello"), "^[A-Za-z]{5}$");
    }

    #[test]
    fn test_single_date_like() {
        let pattern = pattern_of("2023-12-01");
        assert_eq!(pattern, r"^\d{2,4}[-/.]\d{1,2}[-/.]\d{1,2}$");
        assert_all_match(&pattern, &["2023-12-01", "31/12/2025"]);
    }

    #[test]
    fn test_single_email_like() {
        assert_eq!(pattern_of("user@example.com"), r"^[\w.-]+@[\w.-]+\.[A-Za-z]{2,}$");
    }

    #[test]
    fn test_single_fallback_escapes_literal() {
        let pattern = pattern_of("a.b*c");
        assert_eq!(pattern, r"^a\.b\*c$");
        assert_all_match(&pattern, &["a.b*c"]);
    }

    #[test]
    fn test_digit_core_with_varying_width() {
        let pattern = pattern_of("INV-1\nINV-923");
        assert_eq!(pattern, r"^INV\-\d{1,3}$");
        assert_all_match(&pattern, &["INV-1", "INV-923"]);
    }

    #[test]
    fn test_shared_leading_digit_joins_the_prefix() {
        // The prefix is char-wise greedy, so the shared '1' leaves the
        // middles as "" and "23" and the core becomes an alternation.
        let pattern = pattern_of("INV-1\nINV-123");
        assert_eq!(pattern, r"^INV\-1(?:|23)$");
        assert_all_match(&pattern, &["INV-1", "INV-123"]);
    }

    #[test]
    fn test_letter_core() {
        let pattern = pattern_of("id-ab\nid-zz");
        assert_eq!(pattern, "^id\\-[A-Za-z]{2}$");
    }

    #[test]
    fn test_mixed_core_builds_alternation() {
        let pattern = pattern_of("get-x1\nget-y2\nget-x1");
        // Distinct escaped middles only, in first-seen order.
        assert_eq!(pattern, "^get\\-(?:x1|y2)$");
        assert_all_match(&pattern, &["get-x1", "get-y2"]);
    }

    #[test]
    fn test_identical_lines_collapse_to_literal() {
        let pattern = pattern_of("same\nsame\nsame");
        assert_eq!(pattern, "^same$");
    }

    #[test]
    fn test_suffix_never_overlaps_prefix() {
        // "aaa" vs "aaaa": prefix eats the shorter line entirely.
        let pattern = pattern_of("aaa\naaaa");
        assert_all_match(&pattern, &["aaa", "aaaa"]);
    }

    #[test]
    fn test_common_suffix_detected() {
        let pattern = pattern_of("01-end\n99-end");
        assert_eq!(pattern, r"^\d{2}\-end$");
        assert_all_match(&pattern, &["01-end", "99-end"]);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(pattern_of("user-01\r\nuser-12\r\n"), r"^user\-\d{2}$");
    }
}
