//! The contact form as the page wires it: live validation on input and blur,
//! strength feedback for the password, and the submit pass.

use crate::adapters::HeadlessForm;
use crate::core::form::{confirmation_result, FormInput, FormReport};
use crate::core::render::{render_field, render_report};
use crate::core::strength;
use crate::core::validator::FieldValidator;
use crate::domain::model::{FieldId, ValidationResult};
use crate::domain::ports::FormView;

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    validator: FieldValidator,
    input: FormInput,
    view: HeadlessForm,
}

impl ContactForm {
    pub fn new(validator: FieldValidator, view: HeadlessForm) -> Self {
        Self {
            validator,
            input: FormInput::new(),
            view,
        }
    }

    pub fn input_values(&self) -> &FormInput {
        &self.input
    }

    pub fn view(&self) -> &HeadlessForm {
        &self.view
    }

    /// The user typed into `field`.
    pub fn input(&mut self, field: FieldId, value: &str) -> ValidationResult {
        self.input.set(field, value);
        self.revalidate(field)
    }

    /// Checkbox toggled.
    pub fn set_checked(&mut self, field: FieldId, checked: bool) -> ValidationResult {
        self.input.set_checked(field, checked);
        self.revalidate(field)
    }

    /// `field` lost focus.
    pub fn blur(&mut self, field: FieldId) -> ValidationResult {
        let result = self.validator.validate_field(&self.input, field);
        render_field(&mut self.view, field, &result);
        result
    }

    fn revalidate(&mut self, field: FieldId) -> ValidationResult {
        let mut result = self.validator.validate_field(&self.input, field);

        match field {
            FieldId::Password => {
                let tier = strength::strength(self.input.get(FieldId::Password));
                self.view.set_password_strength(tier);
            }
            FieldId::ConfirmPassword if result.valid => {
                result = confirmation_result(
                    self.input.get(FieldId::Password),
                    self.input.get(FieldId::ConfirmPassword),
                );
            }
            _ => {}
        }

        render_field(&mut self.view, field, &result);
        result
    }

    pub fn submit(&mut self) -> FormReport {
        let report = self.validator.validate_form(&self.input);
        render_report(&mut self.view, &report);

        if report.is_valid() {
            self.input.clear();
            tracing::info!("Form submitted successfully");
        } else {
            tracing::info!(
                "Form validation failed: {}",
                report
                    .errors()
                    .map(|outcome| outcome.field.key())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        report
    }
}
