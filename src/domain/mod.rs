//! Domain models and business logic for privacy-sensitive pattern matching.
//!
//! This module contains the detectors for regulated Dutch personal data:
//! phone numbers, email addresses, BSN numbers, postcodes and IBANs, plus
//! configurable regex and keyword detectors for organisation-specific terms.

pub mod bsn;
pub mod custom;
pub mod email;
pub mod iban;
pub mod keyword;
pub mod phone;
pub mod postcode;

pub use bsn::BsnMatcher;
pub use custom::RegexMatcher;
pub use email::EmailMatcher;
pub use iban::IbanMatcher;
pub use keyword::KeywordMatcher;
pub use phone::PhoneNumberMatcher;
pub use postcode::PostcodeMatcher;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// A category of regulated data.
///
/// Serialized as its lowercase name (`"phone"`, `"bsn"`, or the custom name),
/// which is also the key used in privacy markers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Phone,
    Email,
    Bsn,
    Postcode,
    Iban,
    /// Operator-defined category (custom regex or keyword list)
    Custom(String),
}

impl Category {
    /// Built-in categories in canonical scan order.
    pub const BUILTIN: [Category; 5] = [
        Category::Phone,
        Category::Email,
        Category::Bsn,
        Category::Postcode,
        Category::Iban,
    ];

    pub fn name(&self) -> &str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Bsn => "bsn",
            Self::Postcode => "postcode",
            Self::Iban => "iban",
            Self::Custom(name) => name,
        }
    }

    /// Audit placeholder for this category, e.g. `[PRIVACY_FILTERED_PHONE]`.
    pub fn placeholder(&self) -> String {
        format!("[PRIVACY_FILTERED_{}]", self.name().to_uppercase())
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.as_str() {
            "phone" => Self::Phone,
            "email" => Self::Email,
            "bsn" => Self::Bsn,
            "postcode" => Self::Postcode,
            "iban" => Self::Iban,
            _ => Self::Custom(name),
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(name) => name,
            other => other.name().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for pattern matching strategies.
///
/// Matchers hold only compiled, immutable state so a single instance can be
/// shared across threads and scans.
pub trait PatternMatcher: Send + Sync {
    /// Category reported for every span this matcher finds.
    fn category(&self) -> &Category;

    fn pattern(&self) -> &Regex;

    /// Byte ranges of all non-overlapping matches, in order of appearance.
    fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.pattern()
            .find_iter(text)
            .map(|m| m.range())
            .collect()
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.find_spans(text)
            .into_iter()
            .map(|span| &text[span])
            .collect()
    }

    fn is_match(&self, text: &str) -> bool {
        !self.find_spans(text).is_empty()
    }
}
