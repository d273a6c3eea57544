//! Explain regular expressions: structure, likely meaning, example values —
//! and build a pattern back from example strings.
//!
//! Four entry points, all pure and independently re-entrant:
//! [`tokenize`], [`explain_structure`], [`analyze_semantics`] and
//! [`synthesize_pattern`]. The only non-pure seam is the
//! [`SyntaxOracle`] used to validate patterns before semantic analysis;
//! [`analyze_semantics_with`] lets callers supply their own oracle and
//! randomness source.
//!
//! # Example
//!
//! ```rust
//! use rexplain::{analyze_semantics, explain_structure, synthesize_pattern, tokenize};
//!
//! let analysis = analyze_semantics(r"^\d{4}-\d{2}-\d{2}$");
//! assert_eq!(analysis.type_id, "date-ymd");
//!
//! let explanation = explain_structure("[^abc]");
//! assert!(explanation.contains("NOT in the set: abc"));
//!
//! let tokens = tokenize(r"^\d+$");
//! assert_eq!(tokens.len(), 4);
//!
//! let synthesis = synthesize_pattern("user-01\nuser-12\nuser-99");
//! assert_eq!(synthesis.pattern.as_deref(), Some(r"^user\-\d{2}$"));
//! ```

pub mod classify;
pub mod explain;
pub mod oracle;
pub mod semantic;
pub mod synth;
pub mod token;


pub use classify::{
    TokenCategory, TokenStats, classify_token, describe_token, token_descriptions,
};
pub use explain::structure::explain as explain_structure;
pub use oracle::{HostOracle, SyntaxOracle};
pub use semantic::{Analysis, PHONE_RULES, PhoneRule, RULES, SemanticRule};
pub use synth::{Synthesis, synthesize as synthesize_pattern};
pub use token::{Token, tokenize};

/// Analyze `pattern` with the default oracle and thread-local randomness.
pub fn analyze_semantics(pattern: &str) -> Analysis {
    semantic::analyze(pattern, &HostOracle, &mut rand::thread_rng())
}

/// Analyze `pattern` with an explicit oracle and randomness source.
///
/// Tests and embedders use this to get reproducible example values (seeded
/// rng) or a different regex dialect (custom oracle).
pub fn analyze_semantics_with<O, R>(pattern: &str, oracle: &O, rng: &mut R) -> Analysis
where
    O: SyntaxOracle + ?Sized,
    R: rand::Rng + ?Sized,
{
    semantic::analyze(pattern, oracle, rng)
}
