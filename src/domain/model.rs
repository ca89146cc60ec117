use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::NumerologyError;

/// Report language. Every lookup takes one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    #[serde(rename = "hi")]
    #[cfg_attr(feature = "cli", value(name = "hi"))]
    Hindi,
    #[default]
    #[serde(rename = "en")]
    #[cfg_attr(feature = "cli", value(name = "en"))]
    English,
}

impl Language {
    /// Picks Hindi for any `hi*` locale tag (`hi`, `hi-IN`, `hi_IN.UTF-8`), English otherwise.
    pub fn from_locale(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("hi") {
            Language::Hindi
        } else {
            Language::English
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
        }
    }
}

impl FromStr for Language {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hi" => Ok(Language::Hindi),
            "en" => Ok(Language::English),
            other => Err(NumerologyError::InvalidConfigValueError {
                field: "language".to_string(),
                value: other.to_string(),
                reason: "Supported languages: hi, en".to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A static string in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPair {
    pub hi: &'static str,
    pub en: &'static str,
}

impl TextPair {
    pub const fn new(hi: &'static str, en: &'static str) -> Self {
        Self { hi, en }
    }

    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Hindi => self.hi,
            Language::English => self.en,
        }
    }
}

/// Output of digit reduction: 0, 1-9, or a master number (11, 22, 33).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReducedNumber(u32);

impl ReducedNumber {
    pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

    /// Wraps a value that is already reduced. Callers outside `core::reduction`
    /// should go through `reduce`.
    pub(crate) const fn from_reduced(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_master(self) -> bool {
        Self::MASTER_NUMBERS.contains(&self.0)
    }
}

impl fmt::Display for ReducedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied input for one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub name: String,
    pub date_of_birth: String,
    pub partner_name: Option<String>,
    pub partner_dob: Option<String>,
}

impl RawInput {
    pub fn new(name: impl Into<String>, date_of_birth: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date_of_birth: date_of_birth.into(),
            partner_name: None,
            partner_dob: None,
        }
    }

    pub fn with_partner(
        mut self,
        partner_name: impl Into<String>,
        partner_dob: impl Into<String>,
    ) -> Self {
        self.partner_name = Some(partner_name.into());
        self.partner_dob = Some(partner_dob.into());
        self
    }

    /// Partner name and date, only when both are non-blank.
    pub fn partner(&self) -> Option<(&str, &str)> {
        let name = self.partner_name.as_deref().map(str::trim)?;
        let dob = self.partner_dob.as_deref().map(str::trim)?;
        if name.is_empty() || dob.is_empty() {
            return None;
        }
        Some((name, dob))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberReading {
    pub number: ReducedNumber,
    pub title: String,
    pub description: String,
}

impl NumberReading {
    pub fn new(number: ReducedNumber, interpretation: Interpretation) -> Self {
        Self {
            number,
            title: interpretation.title,
            description: interpretation.description,
        }
    }
}

/// Letter digits 1-9 that a name never produces, ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KarmicLessons(Vec<u8>);

impl KarmicLessons {
    const NONE: TextPair = TextPair::new("कोई नहीं", "None");

    pub fn new(missing: Vec<u8>) -> Self {
        Self(missing)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `"4, 5, 6"`, or the explicit none marker when nothing is missing.
    pub fn describe(&self, lang: Language) -> String {
        if self.0.is_empty() {
            return Self::NONE.get(lang).to_string();
        }
        join_digits(&self.0)
    }
}

/// Lo Shu digits split into present and missing, both in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoShuGrid {
    pub present: Vec<u8>,
    pub missing: Vec<u8>,
}

impl LoShuGrid {
    /// Row-major reading order of the 3×3 magic square.
    pub const ORDER: [u8; 9] = [4, 9, 2, 3, 5, 7, 8, 1, 6];

    pub fn is_present(&self, digit: u8) -> bool {
        self.present.contains(&digit)
    }

    /// The grid as three rows of `(digit, present)`.
    pub fn rows(&self) -> [[(u8, bool); 3]; 3] {
        let mut rows = [[(0u8, false); 3]; 3];
        for (i, digit) in Self::ORDER.iter().enumerate() {
            rows[i / 3][i % 3] = (*digit, self.is_present(*digit));
        }
        rows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityCategory {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Low,
}

impl CompatibilityCategory {
    pub fn label(self) -> &'static str {
        match self {
            CompatibilityCategory::VeryHigh => "Very High",
            CompatibilityCategory::High => "High",
            CompatibilityCategory::Medium => "Medium",
            CompatibilityCategory::Low => "Low",
        }
    }
}

impl fmt::Display for CompatibilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub category: CompatibilityCategory,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub partner_name: String,
    pub partner_life_path: ReducedNumber,
    pub result: CompatibilityResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub lo_shu_summary: String,
    pub career: String,
    pub money: String,
    pub relationships: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    pub date_of_birth: String,
    pub language: Language,
    /// Unreduced digit sum of the date, shown as `sum → life path`.
    pub date_digit_sum: u32,
    pub life_path: NumberReading,
    pub soul_urge: NumberReading,
    pub expression: NumberReading,
    pub karmic_lessons: KarmicLessons,
    /// Localized digit list, or the none marker when no lesson is missing.
    pub karmic_lessons_text: String,
    pub lo_shu: LoShuGrid,
    pub advice: Advice,
    pub disclaimer: String,
    pub compatibility: Option<CompatibilityReport>,
}

/// Shareable summary of a report, numbered `NUM-NNNNNN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub serial: String,
    pub name: String,
    pub life_path: ReducedNumber,
    pub soul_urge: ReducedNumber,
    pub expression: ReducedNumber,
    pub karmic_lessons: String,
    pub issued_on: chrono::NaiveDate,
}

pub fn join_digits(digits: &[u8]) -> String {
    digits
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_locale() {
        assert_eq!(Language::from_locale("hi-IN"), Language::Hindi);
        assert_eq!(Language::from_locale("hi_IN.UTF-8"), Language::Hindi);
        assert_eq!(Language::from_locale("en-US"), Language::English);
        assert_eq!(Language::from_locale(""), Language::English);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("HI".parse::<Language>().unwrap(), Language::Hindi);
        assert_eq!(" en ".parse::<Language>().unwrap(), Language::English);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_partner_requires_both_fields() {
        let input = RawInput::new("Asha", "1990-01-01");
        assert_eq!(input.partner(), None);

        let input = RawInput::new("Asha", "1990-01-01").with_partner("Ravi", "  ");
        assert_eq!(input.partner(), None);

        let input = RawInput::new("Asha", "1990-01-01").with_partner(" Ravi ", "1988-03-14");
        assert_eq!(input.partner(), Some(("Ravi", "1988-03-14")));
    }

    #[test]
    fn test_karmic_lessons_none_marker() {
        let none = KarmicLessons::new(vec![]);
        assert_eq!(none.describe(Language::English), "None");
        assert_eq!(none.describe(Language::Hindi), "कोई नहीं");

        let some = KarmicLessons::new(vec![4, 7]);
        assert_eq!(some.describe(Language::Hindi), "4, 7");
    }

    #[test]
    fn test_lo_shu_rows_follow_square_layout() {
        let grid = LoShuGrid {
            present: vec![9, 1],
            missing: vec![4, 2, 3, 5, 7, 8, 6],
        };
        let rows = grid.rows();
        assert_eq!(rows[0], [(4, false), (9, true), (2, false)]);
        assert_eq!(rows[1], [(3, false), (5, false), (7, false)]);
        assert_eq!(rows[2], [(8, false), (1, true), (6, false)]);
    }

    #[test]
    fn test_compatibility_category_serializes_as_label() {
        for category in [
            CompatibilityCategory::VeryHigh,
            CompatibilityCategory::High,
            CompatibilityCategory::Medium,
            CompatibilityCategory::Low,
        ] {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            let back: CompatibilityCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_master_number_flag() {
        assert!(ReducedNumber::from_reduced(22).is_master());
        assert!(!ReducedNumber::from_reduced(4).is_master());
    }
}
