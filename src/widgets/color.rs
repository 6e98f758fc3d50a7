use crate::utils::error::{PageError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const DEFAULT_COLOR: &str = "#000000";

static HEX_COLOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPreview {
    pub background: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorPicker {
    value: String,
    preview: ColorPreview,
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self {
            value: DEFAULT_COLOR.to_string(),
            preview: ColorPreview {
                background: None,
                text: String::new(),
            },
        }
    }
}

impl ColorPicker {
    pub fn new(initial: &str) -> Result<Self> {
        check_color(initial)?;
        Ok(Self {
            value: initial.to_string(),
            ..Self::default()
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn preview(&self) -> &ColorPreview {
        &self.preview
    }

    /// Live preview while the picker is being dragged.
    pub fn input(&mut self, color: &str) -> Result<()> {
        check_color(color)?;
        self.value = color.to_string();
        self.preview.background = Some(self.value.clone());
        self.preview.text = format!("Preview: {}", self.value.to_uppercase());
        Ok(())
    }

    /// Applies the picker's current value.
    pub fn apply(&mut self) {
        self.preview.background = Some(self.value.clone());
        self.preview.text = format!("Color: {}", self.value.to_uppercase());
        tracing::info!("Color applied: {}", self.value);
    }
}

fn check_color(color: &str) -> Result<()> {
    if HEX_COLOR_REGEX.is_match(color) {
        Ok(())
    } else {
        Err(PageError::InvalidColorError {
            value: color.to_string(),
        })
    }
}
