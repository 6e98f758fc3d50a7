use crate::domain::model::{FieldId, StatusKind, StrengthTier};
use crate::domain::ports::FormView;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_SUCCESS_DISPLAY_SECONDS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    /// Whether the input carries the `error` class.
    pub error: bool,
    /// Text of the `<key>-error` slot.
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusElement {
    pub kind: StatusKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

impl StatusElement {
    /// `form-status <kind>`
    pub fn css_class(&self) -> String {
        format!("form-status {}", self.kind.as_str())
    }
}

/// In-memory stand-in for the form's DOM: error classes, error slots, the
/// strength indicator and the status line.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessForm {
    fields: BTreeMap<FieldId, FieldState>,
    strength: Option<StrengthTier>,
    status: Option<StatusElement>,
    #[serde(skip)]
    success_display: Duration,
    resets: usize,
}

impl Default for HeadlessForm {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_SUCCESS_DISPLAY_SECONDS))
    }
}

impl HeadlessForm {
    pub fn new(success_display: Duration) -> Self {
        let fields = FieldId::ALL
            .into_iter()
            .map(|field| {
                (
                    field,
                    FieldState {
                        error: false,
                        message: String::new(),
                    },
                )
            })
            .collect();

        Self {
            fields,
            strength: None,
            status: None,
            success_display,
            resets: 0,
        }
    }

    pub fn field(&self, field: FieldId) -> &FieldState {
        // every FieldId is inserted in `new`
        &self.fields[&field]
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.field(field).error
    }

    pub fn error_message(&self, field: FieldId) -> &str {
        &self.field(field).message
    }

    pub fn strength(&self) -> Option<StrengthTier> {
        self.strength
    }

    pub fn strength_class(&self) -> String {
        self.strength
            .map(StrengthTier::css_class)
            .unwrap_or_else(|| "password-strength".to_string())
    }

    pub fn status(&self) -> Option<&StatusElement> {
        self.status.as_ref()
    }

    /// Success messages hide themselves after the display period; errors stay.
    pub fn status_visible_at(&self, now: DateTime<Utc>) -> bool {
        match &self.status {
            None => false,
            Some(status) => match status.kind {
                StatusKind::Error => true,
                StatusKind::Success => now - status.shown_at < self.success_display,
            },
        }
    }

    pub fn show_status_at(&mut self, kind: StatusKind, message: &str, at: DateTime<Utc>) {
        self.status = Some(StatusElement {
            kind,
            message: message.to_string(),
            shown_at: at,
        });
    }

    pub fn reset_count(&self) -> usize {
        self.resets
    }
}

impl FormView for HeadlessForm {
    fn show_field_error(&mut self, field: FieldId, message: &str) {
        if let Some(state) = self.fields.get_mut(&field) {
            state.error = true;
            state.message = message.to_string();
        }
    }

    fn clear_field_error(&mut self, field: FieldId) {
        if let Some(state) = self.fields.get_mut(&field) {
            state.error = false;
            state.message.clear();
        }
    }

    fn clear_all_field_errors(&mut self) {
        for state in self.fields.values_mut() {
            state.error = false;
            state.message.clear();
        }
    }

    fn show_status(&mut self, kind: StatusKind, message: &str) {
        self.show_status_at(kind, message, Utc::now());
    }

    fn set_password_strength(&mut self, tier: StrengthTier) {
        self.strength = Some(tier);
    }

    fn reset(&mut self) {
        self.strength = None;
        self.resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::{validate_form, FormInput, SUBMIT_ERROR_MESSAGE};
    use crate::core::render::{render_field, render_report};
    use crate::core::validate;

    #[test]
    fn test_render_field_sets_and_clears_error() {
        let mut view = HeadlessForm::default();

        let result = validate("ab", FieldId::Email.rule());
        render_field(&mut view, FieldId::Email, &result);
        assert!(view.has_error(FieldId::Email));
        assert_eq!(view.error_message(FieldId::Email), "Please enter a valid email address");

        let result = validate("a@b.co", FieldId::Email.rule());
        render_field(&mut view, FieldId::Email, &result);
        assert!(!view.has_error(FieldId::Email));
        assert_eq!(view.error_message(FieldId::Email), "");
    }

    #[test]
    fn test_render_invalid_report_keeps_errors() {
        let mut view = HeadlessForm::default();
        let report = validate_form(&FormInput::new());
        render_report(&mut view, &report);

        assert!(view.has_error(FieldId::FullName));
        assert!(!view.has_error(FieldId::Phone));
        let status = view.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, SUBMIT_ERROR_MESSAGE);
        assert_eq!(status.css_class(), "form-status error");
        assert_eq!(view.reset_count(), 0);
    }

    #[test]
    fn test_success_status_hides_after_display_period() {
        let mut view = HeadlessForm::default();
        let shown = Utc::now();
        view.show_status_at(StatusKind::Success, "ok", shown);

        assert!(view.status_visible_at(shown + Duration::seconds(4)));
        assert!(!view.status_visible_at(shown + Duration::seconds(5)));

        view.show_status_at(StatusKind::Error, "bad", shown);
        assert!(view.status_visible_at(shown + Duration::hours(1)));
    }

    #[test]
    fn test_strength_class() {
        let mut view = HeadlessForm::default();
        assert_eq!(view.strength_class(), "password-strength");
        view.set_password_strength(StrengthTier::Good);
        assert_eq!(view.strength_class(), "password-strength good");
    }
}
