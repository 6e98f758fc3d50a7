use crate::adapters::view::DEFAULT_SUCCESS_DISPLAY_SECONDS;
use crate::domain::model::NumericParsing;
use crate::utils::error::{PageError, Result};
use crate::utils::validation::Validate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Page layout and behaviour, loaded from TOML. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub page: PageInfo,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub tabs: TabsConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub mouse: MouseConfig,
    #[serde(default)]
    pub color: ColorConfig,
    #[serde(default)]
    pub faq: FaqConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    pub title: String,
}

impl Default for PageInfo {
    fn default() -> Self {
        Self {
            title: "Interactive Web Page".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Preference file; preferences live in memory when absent.
    pub storage_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    pub links: Vec<String>,
    pub contents: Vec<String>,
    pub initial: Option<usize>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        let ids: Vec<String> = ["home", "features", "contact", "faq"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self {
            links: ids.clone(),
            contents: ids,
            initial: Some(0),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormConfig {
    pub numeric_parsing: Option<NumericParsing>,
    pub success_display_seconds: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MouseConfig {
    pub area_left: Option<f64>,
    pub area_top: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorConfig {
    pub initial: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqConfig {
    pub questions: Vec<String>,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            questions: vec![
                "What does this page demonstrate?".to_string(),
                "Is my form data sent anywhere?".to_string(),
                "How is my theme remembered?".to_string(),
            ],
        }
    }
}

impl PageConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PageError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Check that every value is usable.
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("page.title", &self.page.title)?;

        if let Some(path) = &self.theme.storage_path {
            crate::utils::validation::validate_path("theme.storage_path", path)?;
        }

        crate::utils::validation::validate_unique_ids("tabs.links", &self.tabs.links)?;
        crate::utils::validation::validate_unique_ids("tabs.contents", &self.tabs.contents)?;
        if let Some(initial) = self.tabs.initial {
            crate::utils::validation::validate_index("tabs.initial", initial, self.tabs.links.len())?;
        }

        crate::utils::validation::validate_range(
            "form.success_display_seconds",
            self.success_display_seconds(),
            0,
            3600,
        )?;

        for (i, question) in self.faq.questions.iter().enumerate() {
            crate::utils::validation::validate_non_empty_string(
                &format!("faq.questions[{}]", i),
                question,
            )?;
        }

        Ok(())
    }

    pub fn numeric_parsing(&self) -> NumericParsing {
        self.form.numeric_parsing.unwrap_or_default()
    }

    pub fn success_display_seconds(&self) -> i64 {
        self.form
            .success_display_seconds
            .unwrap_or(DEFAULT_SUCCESS_DISPLAY_SECONDS)
    }
}

impl Validate for PageConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// Replace `${VAR}` references with environment values. Unset variables stay as written.
pub fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_REGEX
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}
