//! Reusable field rules. Screens compose these into per-form validators that
//! return a [`FieldErrors`] map; the generic form modal never hard-codes them.

use crate::shared::form::{FieldDescriptor, FieldErrors};
use crate::shared::record::{is_blank, text_field, Record};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Latin letters including accented ones, spaces and hyphens.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s-]+$").expect("name pattern is valid")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value.trim())
}

/// One "is required" entry per required descriptor whose value is blank.
pub fn validate_required(draft: &Record, fields: &[FieldDescriptor]) -> FieldErrors {
    fields
        .iter()
        .filter(|f| f.required && is_blank(draft, &f.name))
        .map(|f| (f.name.clone(), format!("{} is required", f.label)))
        .collect()
}

/// Character-class check for the given name fields; blank values are skipped
/// (presence is the required rule's job).
pub fn validate_names(draft: &Record, name_fields: &[(&str, &str)], errors: &mut FieldErrors) {
    for (field, label) in name_fields {
        if errors.contains_key(*field) || is_blank(draft, field) {
            continue;
        }
        if !is_valid_name(&text_field(draft, field)) {
            errors.insert(
                field.to_string(),
                format!("{} may only contain letters, spaces and hyphens", label),
            );
        }
    }
}

pub fn validate_email_field(draft: &Record, field: &str, errors: &mut FieldErrors) {
    if errors.contains_key(field) || is_blank(draft, field) {
        return;
    }
    if !is_valid_email(&text_field(draft, field)) {
        errors.insert(field.to_string(), "Enter a valid email address".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("amy@school.org"));
        assert!(is_valid_email(" amy.pond@mail.co.uk "));
        assert!(!is_valid_email("amy@school"));
        assert!(!is_valid_email("amy school@x.org"));
        assert!(!is_valid_email("@school.org"));
    }

    #[test]
    fn test_name_pattern_allows_accents_and_hyphens() {
        assert!(is_valid_name("Zoë"));
        assert!(is_valid_name("Jean-Luc"));
        assert!(is_valid_name("María José"));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("O'Brien"));
    }

    #[test]
    fn test_required_and_format_rules_do_not_stack() {
        let fields = vec![
            FieldDescriptor::text("firstName", "First name").required(),
            FieldDescriptor::email("email", "Email").required(),
            FieldDescriptor::text("nickname", "Nickname"),
        ];
        let draft = json!({"firstName": "", "email": "nope", "nickname": ""});
        let draft = draft.as_object().unwrap();

        let mut errors = validate_required(draft, &fields);
        validate_names(draft, &[("firstName", "First name")], &mut errors);
        validate_email_field(draft, "email", &mut errors);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["firstName"], "First name is required");
        assert_eq!(errors["email"], "Enter a valid email address");
    }
}
