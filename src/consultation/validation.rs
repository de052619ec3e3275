use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::field::FieldId;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9\s\-\(\)]{10,}$").unwrap());

/// Inline error shown under a field. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    MissingValue { label: String },
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid mobile number")]
    InvalidMobile,
}

/// Label text with the required marker stripped, or "This field" when there is none.
pub fn display_label(raw: &str) -> String {
    let label = raw.replace('*', "");
    let label = label.trim();
    if label.is_empty() {
        "This field".to_string()
    } else {
        label.to_string()
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_mobile(value: &str) -> bool {
    MOBILE_RE.is_match(value)
}

/// Required check, then the format rule for the field when it has a value.
pub fn check_field(field: FieldId, value: &str) -> Result<(), ValidationError> {
    if field.required() && value.trim().is_empty() {
        return Err(ValidationError::MissingValue {
            label: display_label(field.label()),
        });
    }

    if value.is_empty() {
        return Ok(());
    }

    match field {
        FieldId::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FieldId::Mobile if !is_valid_mobile(value) => Err(ValidationError::InvalidMobile),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@.com@"));
    }

    #[test]
    fn mobile_shapes() {
        assert!(is_valid_mobile("+1 (555) 123-4567"));
        assert!(is_valid_mobile("5551234567"));
        assert!(!is_valid_mobile("12345"));
        assert!(!is_valid_mobile("555-CALL-NOW"));
        assert!(!is_valid_mobile("++15551234567"));
        assert!(!is_valid_mobile("٠١٢٣٤٥٦٧٨٩"));
        assert!(!is_valid_mobile("５５５１２３４５６７"));
    }

    #[test]
    fn label_strips_marker() {
        assert_eq!(display_label("Full Name *"), "Full Name");
        assert_eq!(display_label(" * "), "This field");
        assert_eq!(display_label(""), "This field");
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let err = check_field(FieldId::FullName, "   ").unwrap_err();
        assert_eq!(err.to_string(), "Full Name is required");
    }

    #[test]
    fn format_rules_skip_empty_optional_values() {
        assert_eq!(check_field(FieldId::Message, ""), Ok(()));
        assert_eq!(check_field(FieldId::Email, "nope"), Err(ValidationError::InvalidEmail));
        assert_eq!(check_field(FieldId::Mobile, "12345"), Err(ValidationError::InvalidMobile));
    }
}
