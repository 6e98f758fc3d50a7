use crate::domain::model::StrengthTier;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const MIN_STRONG_LENGTH: usize = 8;

static LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").unwrap());
static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());
static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static SPECIAL_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@$!%*?&]").unwrap());

/// Which of the five strength checks a password passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub meets_length: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl StrengthReport {
    pub fn evaluate(password: &str) -> Self {
        Self {
            meets_length: password.chars().count() >= MIN_STRONG_LENGTH,
            has_lowercase: LOWERCASE_REGEX.is_match(password),
            has_uppercase: UPPERCASE_REGEX.is_match(password),
            has_digit: DIGIT_REGEX.is_match(password),
            has_special: SPECIAL_CHAR_REGEX.is_match(password),
        }
    }

    pub fn score(&self) -> u8 {
        [
            self.meets_length,
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_special,
        ]
        .into_iter()
        .map(u8::from)
        .sum()
    }

    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_score(self.score())
    }
}

pub fn score(password: &str) -> u8 {
    StrengthReport::evaluate(password).score()
}

pub fn strength(password: &str) -> StrengthTier {
    StrengthReport::evaluate(password).tier()
}
