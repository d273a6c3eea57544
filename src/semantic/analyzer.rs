//! The semantic analysis pipeline.
//!
//! Order matters and is fixed: oracle check, delimiter strip, country phone
//! table, generic rule table, statistics summary, label and example
//! resolution. A pattern that fails the oracle never reaches the heuristics.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::classify::TokenStats;
use crate::oracle::SyntaxOracle;

use super::phone::match_phone;
use super::rules::match_rule;

/// Result of one semantic analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Stable identifier: a rule id, `phone-<country>`, `empty`, `invalid`
    /// or `unknown`.
    pub type_id: String,
    /// Display label (country flag + name for phone rules).
    pub label: String,
    /// Human description; includes the structural summary for analyzable
    /// patterns.
    pub description: String,
    /// A sample value drawn from the matched rule's pool, if any.
    pub example: Option<String>,
    /// Coarse fixed scalar, not a probability.
    pub confidence: f32,
    /// One-line token-category statistics.
    pub structural_summary: String,
}

const CONFIDENCE_UNKNOWN: f32 = 0.1;
const CONFIDENCE_MATCHED: f32 = 0.85;

/// Analyze `pattern` against the rule tables.
///
/// The oracle supplies the syntax check; `rng` supplies the example pick,
/// so callers who need reproducible output can pass a seeded source.
pub fn analyze<O, R>(pattern: &str, oracle: &O, rng: &mut R) -> Analysis
where
    O: SyntaxOracle + ?Sized,
    R: Rng + ?Sized,
{
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return Analysis {
            type_id: "empty".to_string(),
            label: "Type: empty".to_string(),
            description: "Empty pattern — nothing to analyze.".to_string(),
            example: None,
            confidence: 0.0,
            structural_summary: String::new(),
        };
    }

    if let Err(message) = oracle.compile(trimmed) {
        return Analysis {
            type_id: "invalid".to_string(),
            label: "Type: syntax error".to_string(),
            description: format!("The pattern does not compile under the host engine: {message}"),
            example: None,
            confidence: 0.0,
            structural_summary: String::new(),
        };
    }

    let core = strip_delimiters(trimmed);
    let summary = TokenStats::of_pattern(core).summary();

    // Phone rules look at a normalized copy with doubled backslashes
    // collapsed, so patterns pasted from string literals still match.
    let collapsed = core.replace("\\\\", "\\");
    if let Some(rule) = match_phone(&collapsed) {
        return Analysis {
            type_id: rule.type_id(),
            label: rule.label(),
            description: format!("{}\n\n{summary}", rule.description()),
            example: pick(rule.examples, rng),
            confidence: CONFIDENCE_MATCHED,
            structural_summary: summary,
        };
    }

    if let Some(rule) = match_rule(core) {
        return Analysis {
            type_id: rule.id.to_string(),
            label: rule.label.to_string(),
            description: format!("{}\n\n{summary}", rule.description),
            example: pick(rule.examples, rng),
            confidence: CONFIDENCE_MATCHED,
            structural_summary: summary,
        };
    }

    Analysis {
        type_id: "unknown".to_string(),
        label: "Type: unknown / generic".to_string(),
        description: format!(
            "Could not confidently recognize the data category. This may be a specialized \
             or very generic regex.\n\n{summary}"
        ),
        example: Some(
            "Depends on the concrete pattern — try testing the regex in your own environment."
                .to_string(),
        ),
        confidence: CONFIDENCE_UNKNOWN,
        structural_summary: summary,
    }
}

/// Strip an enclosing `/.../flags` notation, if present.
fn strip_delimiters(pattern: &str) -> &str {
    if let Some(rest) = pattern.strip_prefix('/')
        && let Some(idx) = rest.rfind('/')
        && idx > 0
        && rest[idx + 1..].chars().all(|c| "dgimsuvxy".contains(c))
    {
        return &rest[..idx];
    }
    pattern
}

fn pick<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> Option<String> {
    pool.choose(rng).map(|s| s.to_string())
}
