use crate::domain::model::{FieldId, StatusKind, StrengthTier};
use crate::utils::error::Result;

/// Key-value storage for user preferences (the browser's `localStorage`).
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Everything the validator is allowed to touch on the page.
pub trait FormView {
    fn show_field_error(&mut self, field: FieldId, message: &str);
    fn clear_field_error(&mut self, field: FieldId);
    fn clear_all_field_errors(&mut self);
    fn show_status(&mut self, kind: StatusKind, message: &str);
    fn set_password_strength(&mut self, tier: StrengthTier);
    fn reset(&mut self);
}
