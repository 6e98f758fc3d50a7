use crate::core::form::FormReport;
use crate::domain::model::{FieldId, ValidationResult};
use crate::domain::ports::FormView;

/// Applies one field's result: error class and slot text, or neither.
pub fn render_field<V: FormView + ?Sized>(view: &mut V, field: FieldId, result: &ValidationResult) {
    match result.message() {
        Some(message) if !result.valid => view.show_field_error(field, message),
        _ => view.clear_field_error(field),
    }
}

/// Applies a submit pass: every field, then the aggregate status.
///
/// A valid report also resets the form and wipes every error, mirroring what the
/// page does after a successful submission.
pub fn render_report<V: FormView + ?Sized>(view: &mut V, report: &FormReport) {
    for outcome in &report.fields {
        render_field(view, outcome.field, &outcome.result);
    }

    view.show_status(report.status.kind, report.status.message);

    if report.is_valid() {
        view.reset();
        view.clear_all_field_errors();
    }
}
