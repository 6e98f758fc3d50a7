//! The contact form's rule table.
//!
//! Each [`FieldId`] resolves to exactly one static [`ValidationRule`] through a
//! `match`, so a field without a rule cannot exist.

use crate::domain::model::{FieldId, FieldPattern, ValidationRule};
use once_cell::sync::Lazy;
use regex::Regex;

fn regex(pattern: &str) -> Regex {
    // Patterns are compile-time literals covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

static FULL_NAME: Lazy<ValidationRule> = Lazy::new(|| ValidationRule {
    label: FieldId::FullName.label(),
    required: true,
    min_length: Some(2),
    pattern: Some(FieldPattern::Regex(regex(r"^[a-zA-Z\s]+$"))),
    message: Some("Name must be at least 2 characters and contain only letters and spaces"),
    ..Default::default()
});

static EMAIL: Lazy<ValidationRule> = Lazy::new(|| ValidationRule {
    label: FieldId::Email.label(),
    required: true,
    pattern: Some(FieldPattern::Regex(regex(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))),
    message: Some("Please enter a valid email address"),
    ..Default::default()
});

// No look-around in `regex`: one class per requirement, plus the leading
// character check the single-pattern form performs.
static PASSWORD: Lazy<ValidationRule> = Lazy::new(|| ValidationRule {
    label: FieldId::Password.label(),
    required: true,
    min_length: Some(8),
    pattern: Some(FieldPattern::AllOf(vec![
        regex(r"[a-z]"),
        regex(r"[A-Z]"),
        regex(r"[0-9]"),
        regex(r"[@$!%*?&]"),
        regex(r"^[A-Za-z0-9@$!%*?&]"),
    ])),
    message: Some(
        "Password must be at least 8 characters with uppercase, lowercase, number, and special character",
    ),
    ..Default::default()
});

static CONFIRM_PASSWORD: Lazy<ValidationRule> = Lazy::new(|| ValidationRule {
    label: FieldId::ConfirmPassword.label(),
    required: true,
    message: Some("Please confirm your password"),
    ..Default::default()
});

static PHONE: Lazy<ValidationRule> = Lazy::new(|| ValidationRule {
    label: FieldId::Phone.label(),
    pattern: Some(FieldPattern::Regex(regex(r"^\+?[1-9][0-9]{0,15}$"))),
    message: Some("Please enter a valid phone number"),
    ..Default::default()
});

static AGE: Lazy<ValidationRule> = Lazy::new(|| ValidationRule {
    label: FieldId::Age.label(),
    min: Some(1),
    max: Some(120),
    message: Some("Age must be between 1 and 120"),
    ..Default::default()
});

static COUNTRY: Lazy<ValidationRule> = Lazy::new(|| ValidationRule {
    label: FieldId::Country.label(),
    message: Some("Please select a country"),
    ..Default::default()
});

static TERMS: Lazy<ValidationRule> = Lazy::new(|| ValidationRule {
    label: FieldId::Terms.label(),
    required: true,
    message: Some("You must agree to the terms and conditions"),
    ..Default::default()
});

impl FieldId {
    pub fn rule(self) -> &'static ValidationRule {
        match self {
            FieldId::FullName => &FULL_NAME,
            FieldId::Email => &EMAIL,
            FieldId::Password => &PASSWORD,
            FieldId::ConfirmPassword => &CONFIRM_PASSWORD,
            FieldId::Phone => &PHONE,
            FieldId::Age => &AGE,
            FieldId::Country => &COUNTRY,
            FieldId::Terms => &TERMS,
        }
    }
}

/// All rules in table order.
pub fn rule_table() -> impl Iterator<Item = (FieldId, &'static ValidationRule)> {
    FieldId::ALL.into_iter().map(|field| (field, field.rule()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_compiles_and_is_labelled() {
        for (field, rule) in rule_table() {
            assert_eq!(rule.label, field.label());
        }
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<FieldId> = rule_table()
            .filter(|(_, rule)| rule.required)
            .map(|(field, _)| field)
            .collect();
        assert_eq!(
            required,
            vec![
                FieldId::FullName,
                FieldId::Email,
                FieldId::Password,
                FieldId::ConfirmPassword,
                FieldId::Terms
            ]
        );
    }

    #[test]
    fn test_password_pattern_requires_every_class() {
        let pattern = FieldId::Password.rule().pattern.as_ref().unwrap();
        assert!(pattern.is_match("Abcdef1!"));
        assert!(!pattern.is_match("abcdef1!"));
        assert!(!pattern.is_match("ABCDEF1!"));
        assert!(!pattern.is_match("Abcdefg!"));
        assert!(!pattern.is_match("Abcdef12"));
        // leading character outside the allowed set
        assert!(!pattern.is_match(" Abcdef1!"));
        assert!(!pattern.is_match("#Abcdef1!"));
        // only the first character is constrained
        assert!(pattern.is_match("Abcdef1!#"));
    }

    #[test]
    fn test_phone_pattern() {
        let pattern = FieldId::Phone.rule().pattern.as_ref().unwrap();
        assert!(pattern.is_match("+14155550123"));
        assert!(pattern.is_match("7"));
        assert!(!pattern.is_match("0123"));
        assert!(!pattern.is_match("+1 415 555"));
        assert!(!pattern.is_match("12345678901234567"));
    }
}
