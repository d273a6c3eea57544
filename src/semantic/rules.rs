//! The generic semantic rule table.
//!
//! Every rule is a heuristic over the pattern's *source text*, not its
//! matching behavior — classification is best-effort shape recognition.
//! The table is static, read-only and strictly ordered: the first rule
//! whose predicate fires wins, and reordering entries changes results.

use once_cell::sync::Lazy;
use regex::Regex;

/// One entry in the ordered rule table.
pub struct SemanticRule {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    predicate: fn(&str) -> bool,
}

impl SemanticRule {
    pub fn matches(&self, pattern: &str) -> bool {
        (self.predicate)(pattern)
    }
}

/// Ordered rule table; evaluated after the country phone table.
pub static RULES: &[SemanticRule] = &[
    SemanticRule {
        id: "url",
        label: "URL / web address",
        description: "Describes a URL (web link): usually a protocol (http or https), \
                      a domain, a TLD zone, and sometimes a path or query parameters.",
        examples: &[
            "https://example.com",
            "http://my-site.org/path/to/page",
            "https://sub.domain.ua/docs?id=42",
        ],
        predicate: is_url,
    },
    SemanticRule {
        id: "email",
        label: "Email address",
        description: "Describes an email address: a local part (mailbox name), \
                      the '@' sign, and a domain.",
        examples: &[
            "user@example.com",
            "student.2025@university.ua",
            "dev-team+regex@my-company.org",
        ],
        predicate: is_email,
    },
    SemanticRule {
        id: "ipv4",
        label: "IPv4 address",
        description: "Describes an IPv4 address: four blocks of numbers from 0 to 255 \
                      separated by dots.",
        examples: &["192.168.0.1", "10.0.0.42", "8.8.8.8"],
        predicate: is_ipv4,
    },
    SemanticRule {
        id: "ipv6",
        label: "IPv6 address",
        description: "Describes an IPv6 address: a sequence of hexadecimal groups \
                      separated by colons.",
        examples: &[
            "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
            "fe80::1",
            "2a00:1450:4009:80b::200e",
        ],
        predicate: is_ipv6,
    },
    SemanticRule {
        id: "hex-color",
        label: "HEX color",
        description: "Describes a HEX color as used in CSS: #RRGGBB or #RGB.",
        examples: &["#ff00ff", "#1e293b", "#09f", "#22c55e"],
        predicate: is_hex_color,
    },
    SemanticRule {
        id: "phone",
        label: "Phone number (international)",
        description: "Describes an international phone number, usually with a leading \
                      '+' and 10–15 digits.",
        examples: &["+12025550123", "+442071838750", "+4915112345678"],
        predicate: is_phone,
    },
    SemanticRule {
        id: "date-ymd",
        label: "Date (YYYY-MM-DD)",
        description: "Describes a date in YYYY-MM-DD order (year-month-day).",
        examples: &["2025-12-12", "2023-01-01", "1999-07-24"],
        predicate: is_date_ymd,
    },
    SemanticRule {
        id: "date-dmy",
        label: "Date (DD/MM/YYYY)",
        description: "Describes a date in DD/MM/YYYY or DD.MM.YYYY order (day-month-year).",
        examples: &["31.12.2025", "01/01/2023", "24-07-1999"],
        predicate: is_date_dmy,
    },
    SemanticRule {
        id: "time",
        label: "Time (HH:MM)",
        description: "Describes a time as HH:MM or HH:MM:SS (hours and minutes, \
                      sometimes seconds).",
        examples: &["09:30", "23:59:59", "14:05"],
        predicate: is_time,
    },
    SemanticRule {
        id: "uuid-v4",
        label: "UUID v4",
        description: "Describes a version-4 UUID: a universally unique identifier in \
                      the 8-4-4-4-12 hexadecimal layout.",
        examples: &[
            "550e8400-e29b-41d4-a716-446655440000",
            "f47ac10b-58cc-4372-a567-0e02b2c3d479",
            "6ba7b810-9dad-41d1-8ab4-00c04fd430c8",
        ],
        predicate: is_uuid_v4,
    },
    SemanticRule {
        id: "integer",
        label: "Integer",
        description: "Describes a whole number (integer), possibly with an optional \
                      '+' or '-' sign.",
        examples: &["0", "42", "-13", "+2025"],
        predicate: is_integer,
    },
    SemanticRule {
        id: "float",
        label: "Floating-point number",
        description: "Describes a real number with a decimal point, e.g. 3.14 or 0.001.",
        examples: &["3.14", "0.001", "-2.71828"],
        predicate: is_float,
    },
    SemanticRule {
        id: "username",
        label: "Username / slug",
        description: "Describes a username or nickname built from Latin letters, digits, \
                      '_' or '-'.",
        examples: &["nastia_dev", "regex_master-01", "user123"],
        predicate: is_username,
    },
    SemanticRule {
        id: "credit-card",
        label: "Payment card number",
        description: "Describes a payment card number (often 16 digits, sometimes with \
                      spaces or hyphens between groups of four).",
        examples: &[
            "4111 1111 1111 1111",
            "5500-0000-0000-0004",
            "4000000000000002",
        ],
        predicate: is_credit_card,
    },
];

/// First rule in table order whose predicate matches `pattern`.
pub fn match_rule(pattern: &str) -> Option<&'static SemanticRule> {
    RULES.iter().find(|rule| rule.matches(pattern))
}

fn compiled(source: &str) -> Regex {
    Regex::new(source).expect("rule predicate must compile")
}

// A digit atom as it appears in pattern text: `\d` or `[0-9]`.
const DIGIT_ATOM: &str = r"(?:\\d|\[0-9\])";
// A separator atom: a possibly escaped `-`, `/` or `.`, or a small class.
const SEP_ATOM: &str = r"(?:\\?[-/.]|\[[^\]]+\])";

fn is_url(p: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| compiled(r"https?\??:(?:\\?/){2}|^\^?https?\b"));
    RE.is_match(p)
}

fn is_email(p: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| compiled(r"@.*\."));
    RE.is_match(p)
}

fn is_ipv4(p: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        compiled(&format!(
            r"25\[0-5\]|2\[0-4\]|(?:\d{{1,3}}\\\.){{3}}\d{{1,3}}|(?:{DIGIT_ATOM}\{{1,3\}}\\\.){{3}}"
        ))
    });
    p.contains('.') && RE.is_match(p)
}

fn is_ipv6(p: &str) -> bool {
    static LITERAL: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)[0-9a-f]{1,4}:[0-9a-f]{1,4}"));
    let lower = p.to_ascii_lowercase();
    lower.contains(":[0-9a-f") || (p.contains(':') && lower.contains("0-9a-f")) || LITERAL.is_match(p)
}

fn is_hex_color(p: &str) -> bool {
    static FULL: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)^\^?#?\\?[0-9a-f]{3,6}\$?$"));
    (p.contains('#') && p.to_ascii_lowercase().contains("a-f")) || FULL.is_match(p)
}

fn is_phone(p: &str) -> bool {
    // A plus sign (escaped, or unescaped at the start) followed somewhere by
    // a long digit run: either a {8..15} repetition or 10+ literal digits.
    static PLUS: Lazy<Regex> = Lazy::new(|| compiled(r"\\\+|^\^?\+"));
    static RUN: Lazy<Regex> =
        Lazy::new(|| compiled(r"\{(?:[89]|1[0-5])(?:,(?:[89]|1[0-5]))?\}|\d{10,15}"));
    PLUS.is_match(p) && RUN.is_match(p)
}

fn is_date_ymd(p: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        compiled(&format!(
            r"{DIGIT_ATOM}\{{4\}}{SEP_ATOM}{DIGIT_ATOM}\{{2\}}{SEP_ATOM}{DIGIT_ATOM}\{{2\}}"
        ))
    });
    RE.is_match(p)
}

fn is_date_dmy(p: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        compiled(&format!(
            r"{DIGIT_ATOM}\{{2\}}{SEP_ATOM}{DIGIT_ATOM}\{{2\}}{SEP_ATOM}{DIGIT_ATOM}\{{4\}}"
        ))
    });
    RE.is_match(p)
}

fn is_time(p: &str) -> bool {
    static RE: Lazy<Regex> =
        Lazy::new(|| compiled(&format!(r"{DIGIT_ATOM}\{{2\}}:{DIGIT_ATOM}\{{2\}}|:\(?\[0-5")));
    RE.is_match(p)
}

fn is_uuid_v4(p: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        compiled(r"(?i)\{8\}\\?-.*\{4\}\\?-.*\{12\}|[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-")
    });
    RE.is_match(p)
}

fn is_integer(p: &str) -> bool {
    // Whole pattern is a digit atom with an optional sign and a bare
    // quantifier, or a literal signed number. Brace quantifiers are left to
    // the later rules (a 16-digit repetition is a card number, not an int).
    static RE: Lazy<Regex> = Lazy::new(|| {
        compiled(&format!(
            r"^\^?(?:\[[+-]{{1,2}}\]\??|\\[+-]\??|[+-]\??)?{DIGIT_ATOM}[+*]?\$?$"
        ))
    });
    static LITERAL: Lazy<Regex> = Lazy::new(|| compiled(r"^\^?[-+]?\d+\$?$"));
    RE.is_match(p) || LITERAL.is_match(p)
}

fn is_float(p: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        compiled(&format!(
            r"{DIGIT_ATOM}(?:[+*?]|\{{[^}}]*\}})?\\\.{DIGIT_ATOM}"
        ))
    });
    RE.is_match(p)
}

fn is_username(p: &str) -> bool {
    // Either the pattern talks about users by name, or the whole pattern is
    // one word-ish class (containing '_' or '-') under a single quantifier.
    static USER_WORD: Lazy<Regex> = Lazy::new(|| compiled(r"(?i)user(?:name)?|login|nick"));
    static WORDISH: Lazy<Regex> = Lazy::new(|| compiled(r"\\w|\[[^\]]*a-z"));
    static SLUG: Lazy<Regex> = Lazy::new(|| {
        compiled(r"^\^?\[[^\]]*[_-][^\]]*\](?:\{\d+(?:,\d+)?\}|[+*])\$?$")
    });
    (USER_WORD.is_match(p) && WORDISH.is_match(p)) || SLUG.is_match(p)
}

fn is_credit_card(p: &str) -> bool {
    static RE: Lazy<Regex> = Lazy::new(|| {
        compiled(
            r"\\d\{16\}|\[0-9\]\{16\}|\\d\{4\}\[[-\s][^\]]*\]\??\)?\{3\}|(?:\d{4}[-\s]?){3}\d{4}",
        )
    });
    RE.is_match(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(pattern: &str) -> Option<&'static str> {
        match_rule(pattern).map(|r| r.id)
    }

    #[test]
    fn test_url() {
        assert_eq!(id_of(r"^https?:\/\/[\w.-]+\.[A-Za-z]{2,}(\/\S*)?$"), Some("url"));
        assert_eq!(id_of(r"^https://example\.com"), Some("url"));
    }

    #[test]
    fn test_email() {
        assert_eq!(id_of(r"^[\w.-]+@[\w.-]+\.[A-Za-z]{2,}$"), Some("email"));
    }

    #[test]
    fn test_ipv4() {
        assert_eq!(id_of(r"^(25[0-5]|2[0-4]\d|[01]?\d\d?)(\.(25[0-5]|2[0-4]\d|[01]?\d\d?)){3}$"), Some("ipv4"));
        assert_eq!(id_of(r"^192\.168\.0\.1$"), Some("ipv4"));
    }

    #[test]
    fn test_ipv6() {
        assert_eq!(id_of(r"^([0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$"), Some("ipv6"));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(id_of(r"^#[0-9A-Fa-f]{6}$"), Some("hex-color"));
        assert_eq!(id_of(r"^#09f$"), Some("hex-color"));
    }

    #[test]
    fn test_generic_phone() {
        assert_eq!(id_of(r"^\+\d{10,15}$"), Some("phone"));
        assert_eq!(id_of(r"^\+[0-9]{12}$"), Some("phone"));
    }

    #[test]
    fn test_dates_and_time() {
        assert_eq!(id_of(r"^\d{4}-\d{2}-\d{2}$"), Some("date-ymd"));
        assert_eq!(id_of(r"^\d{2}\.\d{2}\.\d{4}$"), Some("date-dmy"));
        assert_eq!(id_of(r"^\d{2}[./-]\d{2}[./-]\d{4}$"), Some("date-dmy"));
        assert_eq!(id_of(r"^\d{2}:\d{2}(:\d{2})?$"), Some("time"));
    }

    #[test]
    fn test_uuid() {
        assert_eq!(
            id_of(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"),
            Some("uuid-v4")
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(id_of(r"^\d+$"), Some("integer"));
        assert_eq!(id_of(r"^[+-]?\d+$"), Some("integer"));
        assert_eq!(id_of(r"^-42$"), Some("integer"));
        assert_eq!(id_of(r"^\d+\.\d+$"), Some("float"));
        assert_eq!(id_of(r"^[0-9]+\.[0-9]{1,4}$"), Some("float"));
    }

    #[test]
    fn test_username_slug() {
        assert_eq!(id_of(r"^[a-zA-Z0-9_-]{3,16}$"), Some("username"));
    }

    #[test]
    fn test_credit_card() {
        assert_eq!(id_of(r"^\d{16}$"), Some("credit-card"));
        assert_eq!(id_of(r"^(\d{4}[- ]?){3}\d{4}$"), Some("credit-card"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(id_of(r"^[abc]{2}z$"), None);
        assert_eq!(id_of(r"foo(bar)*"), None);
    }

    #[test]
    fn test_order_dates_before_time() {
        // A datetime-ish pattern has both a date core and a time core; the
        // earlier date rule must win.
        assert_eq!(id_of(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$"), Some("date-ymd"));
    }
}
