use crate::core::validator::FieldValidator;
use crate::domain::model::{FieldId, StatusKind, ValidationResult};
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully! Thank you for your message.";
pub const SUBMIT_ERROR_MESSAGE: &str = "Please fix the errors above before submitting.";

/// Value a checked checkbox reports.
pub const CHECKED_VALUE: &str = "on";

/// Current contents of every form input. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormInput {
    values: BTreeMap<FieldId, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Checkboxes carry their value only while checked.
    pub fn set_checked(&mut self, field: FieldId, checked: bool) {
        if checked {
            self.set(field, CHECKED_VALUE);
        } else {
            self.values.remove(&field);
        }
    }

    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Builds input from `key=value` pairs such as `email=a@b.co`.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            input.set(key.trim().parse()?, value);
        }
        Ok(input)
    }

    /// Reads a flat `key = "value"` TOML table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> = toml::from_str(content)?;
        let mut input = Self::new();
        for (key, value) in raw {
            input.set(key.parse()?, value);
        }
        Ok(input)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub field: FieldId,
    #[serde(flatten)]
    pub result: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormStatusMessage {
    pub kind: StatusKind,
    pub message: &'static str,
}

/// Outcome of validating the whole form at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub fields: Vec<FieldOutcome>,
    pub passwords_match: bool,
    pub status: FormStatusMessage,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.status.kind == StatusKind::Success
    }

    pub fn result(&self, field: FieldId) -> Option<&ValidationResult> {
        self.fields
            .iter()
            .find(|outcome| outcome.field == field)
            .map(|outcome| &outcome.result)
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldOutcome> {
        self.fields.iter().filter(|outcome| !outcome.result.valid)
    }
}

/// Result of the live check on the confirmation input.
pub fn confirmation_result(password: &str, confirmation: &str) -> ValidationResult {
    if !confirmation.is_empty() && password != confirmation {
        ValidationResult::fail(PASSWORD_MISMATCH_MESSAGE)
    } else {
        ValidationResult::pass()
    }
}

impl FieldValidator {
    pub fn validate_field(&self, input: &FormInput, field: FieldId) -> ValidationResult {
        self.validate(input.get(field), field.rule())
    }

    /// Validates every field, then checks that both password inputs agree.
    pub fn validate_form(&self, input: &FormInput) -> FormReport {
        let mut fields: Vec<FieldOutcome> = FieldId::ALL
            .into_iter()
            .map(|field| FieldOutcome {
                field,
                result: self.validate_field(input, field),
            })
            .collect();

        let passwords_match =
            input.get(FieldId::Password) == input.get(FieldId::ConfirmPassword);
        if !passwords_match {
            if let Some(outcome) = fields
                .iter_mut()
                .find(|outcome| outcome.field == FieldId::ConfirmPassword)
            {
                outcome.result = ValidationResult::fail(PASSWORD_MISMATCH_MESSAGE);
            }
        }

        let all_valid = fields.iter().all(|outcome| outcome.result.valid);
        let status = if all_valid {
            FormStatusMessage {
                kind: StatusKind::Success,
                message: SUBMIT_SUCCESS_MESSAGE,
            }
        } else {
            FormStatusMessage {
                kind: StatusKind::Error,
                message: SUBMIT_ERROR_MESSAGE,
            }
        };

        tracing::debug!(
            valid = all_valid,
            errors = fields.iter().filter(|o| !o.result.valid).count(),
            "Form validated"
        );

        FormReport {
            fields,
            passwords_match,
            status,
        }
    }
}

pub fn validate_form(input: &FormInput) -> FormReport {
    FieldValidator::default().validate_form(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_input() -> FormInput {
        FormInput::new()
            .with(FieldId::FullName, "Ada Lovelace")
            .with(FieldId::Email, "ada@example.com")
            .with(FieldId::Password, "Abc123!@")
            .with(FieldId::ConfirmPassword, "Abc123!@")
            .with(FieldId::Age, "36")
            .with(FieldId::Terms, CHECKED_VALUE)
    }

    #[test]
    fn test_complete_form_is_valid() {
        let report = validate_form(&complete_input());
        assert!(report.is_valid());
        assert!(report.passwords_match);
        assert_eq!(report.status.message, SUBMIT_SUCCESS_MESSAGE);
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn test_mismatch_overrides_confirmation_result() {
        let input = complete_input().with(FieldId::ConfirmPassword, "different");
        let report = validate_form(&input);
        assert!(!report.is_valid());
        assert!(!report.passwords_match);
        assert_eq!(
            report.result(FieldId::ConfirmPassword).unwrap().message(),
            Some(PASSWORD_MISMATCH_MESSAGE)
        );
        assert!(report.result(FieldId::Password).unwrap().is_valid());
        assert_eq!(report.status.message, SUBMIT_ERROR_MESSAGE);
    }

    #[test]
    fn test_mismatch_reported_even_when_confirmation_is_empty() {
        let mut input = complete_input();
        input.set(FieldId::ConfirmPassword, "");
        let report = validate_form(&input);
        assert_eq!(
            report.result(FieldId::ConfirmPassword).unwrap().message(),
            Some(PASSWORD_MISMATCH_MESSAGE)
        );
    }

    #[test]
    fn test_unchecked_terms_fail() {
        let mut input = complete_input();
        input.set_checked(FieldId::Terms, false);
        let report = validate_form(&input);
        assert_eq!(
            report.result(FieldId::Terms).unwrap().message(),
            Some("Terms and Conditions is required")
        );
    }

    #[test]
    fn test_empty_form_lists_every_required_field() {
        let report = validate_form(&FormInput::new());
        let failing: Vec<FieldId> = report.errors().map(|o| o.field).collect();
        assert_eq!(
            failing,
            vec![
                FieldId::FullName,
                FieldId::Email,
                FieldId::Password,
                FieldId::ConfirmPassword,
                FieldId::Terms
            ]
        );
        // both passwords are empty, so they match
        assert!(report.passwords_match);
    }

    #[test]
    fn test_confirmation_result() {
        assert!(confirmation_result("Abc123!@", "").is_valid());
        assert!(confirmation_result("Abc123!@", "Abc123!@").is_valid());
        assert_eq!(
            confirmation_result("Abc123!@", "Abc").message(),
            Some(PASSWORD_MISMATCH_MESSAGE)
        );
    }

    #[test]
    fn test_from_pairs() {
        let input = FormInput::from_pairs(["email=a@b.co", "fullName=Ada Lovelace", "phone"]).unwrap();
        assert_eq!(input.get(FieldId::Email), "a@b.co");
        assert_eq!(input.get(FieldId::FullName), "Ada Lovelace");
        assert_eq!(input.get(FieldId::Phone), "");
        assert!(FormInput::from_pairs(["nickname=ada"]).is_err());
    }

    #[test]
    fn test_from_toml_str() {
        let input = FormInput::from_toml_str(
            r#"
fullName = "Ada Lovelace"
email = "ada@example.com"
terms = "on"
"#,
        )
        .unwrap();
        assert_eq!(input.get(FieldId::Terms), CHECKED_VALUE);
        assert!(FormInput::from_toml_str("nickname = \"ada\"").is_err());
    }

    #[test]
    fn test_report_is_idempotent() {
        let input = complete_input().with(FieldId::Age, "150");
        assert_eq!(validate_form(&input), validate_form(&input));
    }
}
