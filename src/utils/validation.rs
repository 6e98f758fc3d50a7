use crate::utils::error::{PageError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_index(field_name: &str, index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(PageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: index.to_string(),
            reason: format!("Index must be below {}", len),
        });
    }
    Ok(())
}

pub fn validate_unique_ids(field_name: &str, ids: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        validate_non_empty_string(field_name, id)?;
        if !seen.insert(id.as_str()) {
            return Err(PageError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.clone(),
                reason: "Duplicate id".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("theme.storage_path", "./prefs.toml").is_ok());
        assert!(validate_path("theme.storage_path", "").is_err());
        assert!(validate_path("theme.storage_path", "a\0b").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("form.success_display_seconds", 5, 0, 3600).is_ok());
        assert!(validate_range("form.success_display_seconds", -1, 0, 3600).is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        let ids = vec!["home".to_string(), "about".to_string()];
        assert!(validate_unique_ids("tabs.contents", &ids).is_ok());

        let dup = vec!["home".to_string(), "home".to_string()];
        assert!(validate_unique_ids("tabs.contents", &dup).is_err());

        let blank = vec![" ".to_string()];
        assert!(validate_unique_ids("tabs.contents", &blank).is_err());
    }

    #[test]
    fn test_validate_index() {
        assert!(validate_index("tabs.initial", 0, 3).is_ok());
        assert!(validate_index("tabs.initial", 3, 3).is_err());
    }
}
