pub mod form;
pub mod render;
pub mod rules;
pub mod strength;
pub mod validator;

pub use crate::domain::model::{FieldId, StrengthTier, ValidationResult, ValidationRule};
pub use crate::domain::ports::{FormView, PreferenceStore};
pub use crate::utils::error::Result;
pub use form::{validate_form, FormInput, FormReport};
pub use validator::{validate, FieldValidator};
