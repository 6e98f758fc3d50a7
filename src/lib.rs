pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod widgets;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FilePreferenceStore, HeadlessForm, MemoryPreferenceStore};
pub use app::{Page, PageEvent, PageSnapshot};
pub use config::{session_config::SessionScript, toml_config::PageConfig};
pub use crate::core::{
    strength::{strength, StrengthReport},
    validate, validate_form, FieldValidator, FormInput, FormReport,
};
pub use domain::model::{FieldId, NumericParsing, StrengthTier, ValidationResult, ValidationRule};
pub use utils::error::{PageError, Result};
