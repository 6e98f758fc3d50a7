use crate::domain::model::{NumericParsing, ValidationResult, ValidationRule};

/// Validates single field values against their rules.
///
/// Pure: the same value and rule always give the same result, and nothing on
/// the page is touched. See [`crate::core::render`] for applying results.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator {
    parsing: NumericParsing,
}

impl FieldValidator {
    pub fn new(parsing: NumericParsing) -> Self {
        Self { parsing }
    }

    pub fn parsing(&self) -> NumericParsing {
        self.parsing
    }

    pub fn validate(&self, raw: &str, rule: &ValidationRule) -> ValidationResult {
        let value = raw.trim();
        let label = rule.label;

        if rule.required && value.is_empty() {
            return ValidationResult::fail(format!("{} is required", label));
        }

        if value.is_empty() {
            return ValidationResult::pass();
        }

        if let Some(min_length) = rule.min_length {
            if value.chars().count() < min_length {
                return ValidationResult::fail(rule.message.map(str::to_string).unwrap_or_else(
                    || format!("{} must be at least {} characters", label, min_length),
                ));
            }
        }

        if let Some(pattern) = &rule.pattern {
            if !pattern.is_match(value) {
                return ValidationResult::fail(
                    rule.message
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("{} format is invalid", label)),
                );
            }
        }

        if rule.has_range() {
            let Some(number) = parse_integer(value, self.parsing) else {
                return ValidationResult::fail(format!("{} must be a number", label));
            };
            if let Some(min) = rule.min {
                if number < min {
                    return ValidationResult::fail(
                        rule.message
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("{} must be at least {}", label, min)),
                    );
                }
            }
            if let Some(max) = rule.max {
                if number > max {
                    return ValidationResult::fail(
                        rule.message
                            .map(str::to_string)
                            .unwrap_or_else(|| format!("{} must be at most {}", label, max)),
                    );
                }
            }
        }

        ValidationResult::pass()
    }
}

/// Validates with strict numeric parsing.
pub fn validate(value: &str, rule: &ValidationRule) -> ValidationResult {
    FieldValidator::default().validate(value, rule)
}

/// Parses an integer, saturating at the `i64` bounds.
pub fn parse_integer(value: &str, parsing: NumericParsing) -> Option<i64> {
    match parsing {
        NumericParsing::Strict => {
            let (negative, digits) = split_sign(value);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Some(accumulate(digits, 10, negative))
        }
        NumericParsing::Lenient => {
            let (negative, rest) = split_sign(value.trim_start());
            let (radix, rest) = match rest.get(..2) {
                Some("0x") | Some("0X") => (16, &rest[2..]),
                _ => (10, rest),
            };
            let end = rest
                .char_indices()
                .find(|(_, c)| !c.is_digit(radix))
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            if end == 0 {
                return None;
            }
            Some(accumulate(&rest[..end], radix, negative))
        }
    }
}

fn split_sign(value: &str) -> (bool, &str) {
    if let Some(rest) = value.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = value.strip_prefix('+') {
        (false, rest)
    } else {
        (false, value)
    }
}

fn accumulate(digits: &str, radix: u32, negative: bool) -> i64 {
    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(d))
        });
    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldId;

    #[test]
    fn test_required_empty_fails_with_required_message() {
        for field in FieldId::ALL {
            let rule = field.rule();
            if !rule.required {
                continue;
            }
            let result = validate("", rule);
            assert!(!result.is_valid());
            assert_eq!(
                result.message(),
                Some(format!("{} is required", field.label()).as_str())
            );
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let result = validate("   ", FieldId::Email.rule());
        assert_eq!(result.message(), Some("Email is required"));
        assert!(validate("  \t ", FieldId::Phone.rule()).is_valid());
    }

    #[test]
    fn test_optional_empty_passes() {
        for field in FieldId::ALL {
            let rule = field.rule();
            if rule.required {
                continue;
            }
            assert_eq!(validate("", rule), ValidationResult::pass());
        }
    }

    #[test]
    fn test_email_pattern() {
        let rule = FieldId::Email.rule();
        let result = validate("ab", rule);
        assert!(!result.is_valid());
        assert_eq!(result.message(), Some("Please enter a valid email address"));
        assert!(validate("a@b.co", rule).is_valid());
        assert!(!validate("a@b", rule).is_valid());
        assert!(!validate("a b@c.de", rule).is_valid());
    }

    #[test]
    fn test_min_length_runs_before_pattern() {
        let result = validate("J", FieldId::FullName.rule());
        assert_eq!(
            result.message(),
            Some("Name must be at least 2 characters and contain only letters and spaces")
        );
    }

    #[test]
    fn test_default_messages_without_custom_message() {
        let rule = ValidationRule {
            label: "Nickname",
            min_length: Some(3),
            ..Default::default()
        };
        assert_eq!(
            validate("ab", &rule).message(),
            Some("Nickname must be at least 3 characters")
        );

        let rule = ValidationRule {
            label: "Score",
            min: Some(10),
            max: Some(20),
            ..Default::default()
        };
        assert_eq!(validate("5", &rule).message(), Some("Score must be at least 10"));
        assert_eq!(validate("25", &rule).message(), Some("Score must be at most 20"));
    }

    #[test]
    fn test_age_range() {
        let rule = FieldId::Age.rule();
        let too_old = validate("150", rule);
        assert!(!too_old.is_valid());
        assert_eq!(too_old.message(), Some("Age must be between 1 and 120"));
        assert!(!validate("0", rule).is_valid());
        assert!(validate("45", rule).is_valid());
        assert!(validate("1", rule).is_valid());
        assert!(validate("120", rule).is_valid());
    }

    #[test]
    fn test_non_numeric_age_uses_number_message() {
        let result = validate("forty", FieldId::Age.rule());
        assert_eq!(result.message(), Some("Age must be a number"));
    }

    #[test]
    fn test_strict_and_lenient_parsing_differ_on_trailing_text() {
        let rule = FieldId::Age.rule();
        let strict = FieldValidator::new(NumericParsing::Strict);
        let lenient = FieldValidator::new(NumericParsing::Lenient);

        assert_eq!(strict.validate("45 years", rule).message(), Some("Age must be a number"));
        assert!(lenient.validate("45 years", rule).is_valid());
        assert!(lenient.validate("0x1A", rule).is_valid());
        assert!(!lenient.validate("years 45", rule).is_valid());
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42", NumericParsing::Strict), Some(42));
        assert_eq!(parse_integer("-7", NumericParsing::Strict), Some(-7));
        assert_eq!(parse_integer("+7", NumericParsing::Strict), Some(7));
        assert_eq!(parse_integer("4.5", NumericParsing::Strict), None);
        assert_eq!(parse_integer("-", NumericParsing::Strict), None);
        assert_eq!(parse_integer("4.5", NumericParsing::Lenient), Some(4));
        assert_eq!(parse_integer("  -12px", NumericParsing::Lenient), Some(-12));
        assert_eq!(parse_integer("0xff", NumericParsing::Lenient), Some(255));
        assert_eq!(parse_integer("0x", NumericParsing::Lenient), None);
    }

    #[test]
    fn test_huge_numbers_saturate_into_range_failure() {
        let result = validate("99999999999999999999999", FieldId::Age.rule());
        assert_eq!(result.message(), Some("Age must be between 1 and 120"));
        assert_eq!(
            parse_integer("-99999999999999999999999", NumericParsing::Strict),
            Some(-i64::MAX)
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        for field in FieldId::ALL {
            for value in ["", "ab", "a@b.co", "Ab1!aaaa", "150", "+123"] {
                assert_eq!(
                    validate(value, field.rule()),
                    validate(value, field.rule())
                );
            }
        }
    }
}
