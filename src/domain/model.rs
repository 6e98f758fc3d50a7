use crate::utils::error::PageError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The inputs of the contact form, in the order they are validated on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Age,
    Country,
    Terms,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
        FieldId::Phone,
        FieldId::Age,
        FieldId::Country,
        FieldId::Terms,
    ];

    /// Element id / form name of the input.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirmPassword",
            FieldId::Phone => "phone",
            FieldId::Age => "age",
            FieldId::Country => "country",
            FieldId::Terms => "terms",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::ConfirmPassword => "Confirm Password",
            FieldId::Phone => "Phone Number",
            FieldId::Age => "Age",
            FieldId::Country => "Country",
            FieldId::Terms => "Terms and Conditions",
        }
    }

    /// Id of the element that receives this field's error text.
    pub fn error_slot(self) -> String {
        format!("{}-error", self.key())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldId {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| PageError::UnknownFieldError {
                name: s.to_string(),
            })
    }
}

/// What a non-empty value has to look like.
#[derive(Debug, Clone)]
pub enum FieldPattern {
    Regex(Regex),
    /// Every regex must match somewhere in the value.
    AllOf(Vec<Regex>),
}

impl FieldPattern {
    pub fn is_match(&self, value: &str) -> bool {
        match self {
            FieldPattern::Regex(re) => re.is_match(value),
            FieldPattern::AllOf(all) => all.iter().all(|re| re.is_match(value)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationRule {
    pub label: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<FieldPattern>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub message: Option<&'static str>,
}

impl ValidationRule {
    pub fn has_range(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthTier {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthTier::Weak,
            3 => StrengthTier::Fair,
            4 => StrengthTier::Good,
            _ => StrengthTier::Strong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Fair => "fair",
            StrengthTier::Good => "good",
            StrengthTier::Strong => "strong",
        }
    }

    /// Class list of the strength indicator element.
    pub fn css_class(self) -> String {
        format!("password-strength {}", self.as_str())
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How numeric fields turn text into an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericParsing {
    /// Optional sign followed by decimal digits, nothing else.
    #[default]
    Strict,
    /// Browser `parseInt` behaviour: longest numeric prefix wins.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}
