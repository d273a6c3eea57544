//! Heuristic semantic classification of regex patterns.
//!
//! Maps a validated pattern to a likely domain type (URL, email,
//! phone-by-country, date, UUID, …) by inspecting the pattern's source
//! text against two static, ordered rule tables. Country phone rules are
//! always checked first; among generic rules the first match wins.
//!
//! Classification is shape recognition over source text, never a proof
//! about the pattern's match behavior.

pub mod analyzer;
pub mod phone;
pub mod rules;

pub use analyzer::{Analysis, analyze};
pub use phone::{PHONE_RULES, PhoneRule};
pub use rules::{RULES, SemanticRule};
