//! Token classification: pure token-text → category mapping plus the
//! per-token description dictionary.
//!
//! Categories are derived on demand, never stored — the same token text
//! always classifies the same way.

use itertools::Itertools;
use phf::{Map, phf_map};

use crate::token::tokenize;

/// Syntactic category of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Anchor,
    Quantifier,
    GroupDelimiter,
    CharacterClass,
    Alternation,
    Escape,
    Literal,
}

/// Classify one token by its text alone.
///
/// Checked in order: anchors, quantifiers (`*` `+` `?` and brace-delimited
/// text), group delimiters, bracket-delimited classes, alternation, escapes,
/// everything else literal.
pub fn classify_token(text: &str) -> TokenCategory {
    match text {
        "^" | "$" => TokenCategory::Anchor,
        "*" | "+" | "?" => TokenCategory::Quantifier,
        _ if is_delimited(text, '{', '}') => TokenCategory::Quantifier,
        "(" | ")" => TokenCategory::GroupDelimiter,
        _ if is_delimited(text, '[', ']') => TokenCategory::CharacterClass,
        "|" => TokenCategory::Alternation,
        _ if text.starts_with('\\') => TokenCategory::Escape,
        _ => TokenCategory::Literal,
    }
}

fn is_delimited(text: &str, open: char, close: char) -> bool {
    text.len() >= 2 && text.starts_with(open) && text.ends_with(close)
}

/// Per-category token counts over a whole pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenStats {
    pub anchors: usize,
    pub quantifiers: usize,
    pub group_delimiters: usize,
    pub character_classes: usize,
    pub alternations: usize,
    pub escapes: usize,
    pub literals: usize,
}

impl TokenStats {
    /// Tokenize `pattern` and count each category.
    pub fn of_pattern(pattern: &str) -> Self {
        let mut stats = Self::default();
        for token in tokenize(pattern) {
            match classify_token(token.text) {
                TokenCategory::Anchor => stats.anchors += 1,
                TokenCategory::Quantifier => stats.quantifiers += 1,
                TokenCategory::GroupDelimiter => stats.group_delimiters += 1,
                TokenCategory::CharacterClass => stats.character_classes += 1,
                TokenCategory::Alternation => stats.alternations += 1,
                TokenCategory::Escape => stats.escapes += 1,
                TokenCategory::Literal => stats.literals += 1,
            }
        }
        stats
    }

    /// One-line human summary of the counts.
    pub fn summary(&self) -> String {
        let counts = [
            (self.anchors, "anchor", "anchors"),
            (self.quantifiers, "quantifier", "quantifiers"),
            (self.group_delimiters, "group delimiter", "group delimiters"),
            (
                self.character_classes,
                "character class",
                "character classes",
            ),
            (self.alternations, "alternation", "alternations"),
            (self.escapes, "escape", "escapes"),
            (self.literals, "literal", "literals"),
        ];
        let body = counts
            .iter()
            .map(|&(n, one, many)| format!("{} {}", n, if n == 1 { one } else { many }))
            .join(", ");
        format!("Structure: {body}.")
    }
}

/// Repetition counts parsed from a curly-quantifier interior.
///
/// Accepted grammar: `digits`, `digits ","`, `digits "," digits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Exactly(u32),
    AtLeast(u32),
    Between(u32, u32),
}

impl Repeat {
    /// Parse the text between `{` and `}`. Returns `None` for anything that
    /// does not fit the grammar, including empty digits and overflow.
    pub fn parse(interior: &str) -> Option<Self> {
        match interior.split_once(',') {
            None => Some(Repeat::Exactly(parse_count(interior)?)),
            Some((min, "")) => Some(Repeat::AtLeast(parse_count(min)?)),
            Some((min, max)) => Some(Repeat::Between(parse_count(min)?, parse_count(max)?)),
        }
    }
}

fn parse_count(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Canonical meanings of the common two-character escape sequences, keyed by
/// the character after the backslash.
static ESCAPE_MEANINGS: Map<char, &'static str> = phf_map! {
    'd' => "any digit (0–9)",
    'D' => "any character except a digit",
    'w' => "a word character: letter, digit or underscore",
    'W' => "any character except a word character",
    's' => "a whitespace character (space, tab, newline)",
    'S' => "any character except whitespace",
    't' => "a tab character",
    'n' => "a newline character",
    'r' => "a carriage return",
    'b' => "a word boundary",
    'B' => "a position that is not a word boundary",
};

/// Look up the canonical meaning of `\<ch>`, if it has one.
pub fn escape_meaning(ch: char) -> Option<&'static str> {
    ESCAPE_MEANINGS.get(&ch).copied()
}

/// Describe a single token for the token table.
pub fn describe_token(text: &str) -> String {
    if let Some(rest) = text.strip_prefix('\\')
        && let Some(ch) = rest.chars().next()
    {
        return match escape_meaning(ch) {
            Some(meaning) => format!("{text} — {meaning}."),
            None => format!("{text} — escaped character '{ch}'."),
        };
    }

    if is_delimited(text, '[', ']') {
        return if text.as_bytes()[1] == b'^' {
            format!("{text} — character class matching anything NOT in the listed set.")
        } else {
            format!("{text} — character class: one character from the listed set.")
        };
    }

    if is_delimited(text, '{', '}') {
        let interior = &text[1..text.len() - 1];
        return match Repeat::parse(interior) {
            Some(Repeat::Exactly(n)) => {
                format!("{text} — exactly {n} repetitions of the preceding element.")
            }
            Some(Repeat::AtLeast(n)) => {
                format!("{text} — at least {n} repetitions of the preceding element.")
            }
            Some(Repeat::Between(m, n)) => {
                format!("{text} — between {m} and {n} repetitions of the preceding element.")
            }
            None => format!("{text} — curly-brace quantifier (non-standard format)."),
        };
    }

    match text {
        "(" => "( — start of a group / subexpression.".to_string(),
        ")" => ") — end of a group / subexpression.".to_string(),
        "^" => "^ — start of the line.".to_string(),
        "$" => "$ — end of the line.".to_string(),
        "." => ". — any character (usually except newline).".to_string(),
        "*" => "* — 0 or more repetitions of the preceding element.".to_string(),
        "+" => "+ — 1 or more repetitions of the preceding element.".to_string(),
        "?" => "? — 0 or 1 repetition of the preceding element (optional).".to_string(),
        "|" => "| — alternation (either the left side or the right).".to_string(),
        "\\" => "\\ — a lone backslash, normally used to escape the next character.".to_string(),
        _ => format!("{text} — ordinary character '{text}'."),
    }
}

/// Tokenize `pattern` and pair every token with its description.
pub fn token_descriptions(pattern: &str) -> Vec<(String, String)> {
    tokenize(pattern)
        .into_iter()
        .map(|t| (t.text.to_string(), describe_token(t.text)))
        .collect()
}
