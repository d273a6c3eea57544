//! The host syntax oracle — the core's only non-pure dependency.
//!
//! Semantic analysis fails closed on patterns the host engine cannot
//! compile, so the check is a seam the embedding application can replace
//! (e.g. with a different regex dialect).

use regex::Regex;

/// Compile-check a pattern under the host regex engine.
pub trait SyntaxOracle {
    /// `Ok` if the pattern compiles, otherwise the first error message.
    fn compile(&self, pattern: &str) -> Result<(), String>;
}

/// Default oracle backed by the `regex` crate.
///
/// Note that the `regex` dialect has no lookaround: patterns using
/// `(?=...)` and friends are reported as syntax errors here even though
/// other engines accept them.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostOracle;

impl SyntaxOracle for HostOracle {
    fn compile(&self, pattern: &str) -> Result<(), String> {
        match Regex::new(pattern) {
            Ok(_) => Ok(()),
            Err(err) => Err(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pattern() {
        assert!(HostOracle.compile(r"^\d{4}-\d{2}-\d{2}$").is_ok());
    }

    #[test]
    fn test_broken_pattern_reports_message() {
        let err = HostOracle.compile("(unclosed").unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn test_lookahead_rejected_by_default_dialect() {
        assert!(HostOracle.compile(r"(?=.*\d).{8,}").is_err());
    }
}
