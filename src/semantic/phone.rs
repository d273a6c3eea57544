//! Country-specific phone number rules.
//!
//! A fixed, ordered table checked before every generic rule. Detection runs
//! against the pattern source with doubled backslashes collapsed, so both
//! `\+380…` and `\\+380…` spellings are seen the same way. The `+<code>`
//! substring check also covers the escaped `\+<code>` form.

use once_cell::sync::Lazy;
use regex::Regex;

/// One country entry. `country` is the native-script name; the rendered
/// label combines flag, name and calling code.
pub struct PhoneRule {
    pub key: &'static str,
    pub country: &'static str,
    pub flag: &'static str,
    pub calling_code: &'static str,
    detector: &'static str,
    pub format: &'static str,
    pub examples: &'static [&'static str],
}

impl PhoneRule {
    pub fn type_id(&self) -> String {
        format!("phone-{}", self.key)
    }

    pub fn label(&self) -> String {
        format!("{} {} ({})", self.flag, self.country, self.calling_code)
    }

    pub fn description(&self) -> String {
        format!(
            "Describes a phone number for {}: country code {}, usually written as {}.",
            self.country, self.calling_code, self.format
        )
    }
}

/// Ordered country table; first match wins. The US entry sits last because
/// its calling code is the least distinctive.
pub static PHONE_RULES: &[PhoneRule] = &[
    PhoneRule {
        key: "ua",
        country: "Україна",
        flag: "\u{1F1FA}\u{1F1E6}",
        calling_code: "+380",
        detector: r"\+380|380\\d\{9\}",
        format: "+380 XX XXX XX XX",
        examples: &["+380501234567", "+380671112233", "+380931234567"],
    },
    PhoneRule {
        key: "de",
        country: "Deutschland",
        flag: "\u{1F1E9}\u{1F1EA}",
        calling_code: "+49",
        detector: r"\+49",
        format: "+49 15X XXXXXXXX",
        examples: &["+4915112345678", "+4917612345678", "+493012345678"],
    },
    PhoneRule {
        key: "fr",
        country: "France",
        flag: "\u{1F1EB}\u{1F1F7}",
        calling_code: "+33",
        detector: r"\+33",
        format: "+33 X XX XX XX XX",
        examples: &["+33612345678", "+33142685300", "+33723456789"],
    },
    PhoneRule {
        key: "pl",
        country: "Polska",
        flag: "\u{1F1F5}\u{1F1F1}",
        calling_code: "+48",
        detector: r"\+48",
        format: "+48 XXX XXX XXX",
        examples: &["+48501234567", "+48601123456", "+48721234567"],
    },
    PhoneRule {
        key: "gb",
        country: "United Kingdom",
        flag: "\u{1F1EC}\u{1F1E7}",
        calling_code: "+44",
        detector: r"\+44",
        format: "+44 XXXX XXXXXX",
        examples: &["+442071838750", "+447911123456", "+441632960961"],
    },
    PhoneRule {
        key: "us",
        country: "United States",
        flag: "\u{1F1FA}\u{1F1F8}",
        calling_code: "+1",
        detector: r"\+1[\s().\[\-]|\+1\\d",
        format: "+1 (XXX) XXX-XXXX",
        examples: &["+12025550123", "+14155552671", "+13105551234"],
    },
];

static DETECTORS: Lazy<Vec<Regex>> = Lazy::new(|| {
    PHONE_RULES
        .iter()
        .map(|rule| Regex::new(rule.detector).expect("phone detector must compile"))
        .collect()
});

/// First country rule whose detector matches the normalized pattern text.
pub fn match_phone(normalized: &str) -> Option<&'static PhoneRule> {
    PHONE_RULES
        .iter()
        .zip(DETECTORS.iter())
        .find(|(_, detector)| detector.is_match(normalized))
        .map(|(rule, _)| rule)
}
