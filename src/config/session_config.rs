use crate::app::events::PageEvent;
use crate::config::toml_config::substitute_env_vars;
use crate::utils::error::{PageError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A scripted sequence of page events, replayed in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionScript {
    pub session: SessionInfo,
    #[serde(default)]
    pub events: Vec<PageEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub name: String,
    pub description: Option<String>,
    /// Keep replaying after an event is rejected.
    #[serde(default)]
    pub continue_on_error: bool,
}

impl SessionScript {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PageError::ConfigError {
            message: format!("Session parsing error: {}", e),
        })
    }
}

impl Validate for SessionScript {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("session.name", &self.session.name)?;

        if self.events.is_empty() {
            return Err(PageError::MissingConfigError {
                field: "events".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldId;

    #[test]
    fn test_parse_session() {
        let script = SessionScript::from_toml_str(
            r#"
[session]
name = "signup"
continue_on_error = true

[[events]]
type = "toggle_theme"

[[events]]
type = "input"
field = "email"
value = "ada@example.com"

[[events]]
type = "check"
field = "terms"
checked = true

[[events]]
type = "mouse_move"
x = 12.5
y = 40.0
"#,
        )
        .unwrap();

        assert_eq!(script.session.name, "signup");
        assert!(script.session.continue_on_error);
        assert_eq!(script.events.len(), 4);
        assert_eq!(
            script.events[2],
            PageEvent::Check {
                field: FieldId::Terms,
                checked: true
            }
        );
        assert!(script.validate().is_ok());
    }

    #[test]
    fn test_session_without_events_is_invalid() {
        let script = SessionScript::from_toml_str("[session]\nname = \"empty\"\n").unwrap();
        assert!(matches!(
            script.validate(),
            Err(PageError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = SessionScript::from_toml_str(
            r#"
[session]
name = "bad"

[[events]]
type = "input"
field = "nickname"
value = "ada"
"#,
        );
        assert!(result.is_err());
    }
}
