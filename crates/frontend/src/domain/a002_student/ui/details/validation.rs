use chrono::NaiveDate;

use crate::shared::date_utils::{age_on, parse_iso_date};
use crate::shared::form::{FieldDescriptor, FieldErrors};
use crate::shared::record::{is_blank, text_field, Record};
use crate::shared::validation::{validate_email_field, validate_names, validate_required};

pub const MIN_AGE: i32 = 5;
pub const MAX_AGE: i32 = 25;

/// Collects every violation; submission is allowed only when the map is empty.
pub fn validate_student(draft: &Record, fields: &[FieldDescriptor], today: NaiveDate) -> FieldErrors {
    let mut errors = validate_required(draft, fields);
    validate_names(
        draft,
        &[("firstName", "First Name"), ("lastName", "Last Name")],
        &mut errors,
    );
    validate_email_field(draft, "email", &mut errors);

    if !errors.contains_key("dateOfBirth") && !is_blank(draft, "dateOfBirth") {
        match parse_iso_date(&text_field(draft, "dateOfBirth")) {
            None => {
                errors.insert("dateOfBirth".into(), "Enter a valid date".into());
            }
            Some(birth) => {
                let age = age_on(birth, today);
                if !(MIN_AGE..=MAX_AGE).contains(&age) {
                    errors.insert(
                        "dateOfBirth".into(),
                        format!("Student must be between {} and {} years old", MIN_AGE, MAX_AGE),
                    );
                }
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_student::ui::details::student_fields;
    use contracts::domain::a001_classroom::aggregate::ClassroomOption;
    use serde_json::{json, Value};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn fields() -> Vec<FieldDescriptor> {
        student_fields(&[ClassroomOption {
            id: "c1".into(),
            name: "5A".into(),
        }])
    }

    fn draft_with_dob(dob: &str) -> Record {
        let v: Value = json!({
            "firstName": "Amy",
            "lastName": "Pond-Williams",
            "email": "amy@school.org",
            "dateOfBirth": dob,
            "classroomId": "c1",
        });
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_valid_student_passes() {
        assert!(validate_student(&draft_with_dob("2014-01-10"), &fields(), today()).is_empty());
    }

    #[test]
    fn test_age_four_is_blocked() {
        let errors = validate_student(&draft_with_dob("2022-01-01"), &fields(), today());
        assert!(errors.contains_key("dateOfBirth"));
    }

    #[test]
    fn test_age_twenty_five_is_allowed() {
        // turned 25 yesterday
        let errors = validate_student(&draft_with_dob("2001-10-15"), &fields(), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_age_twenty_six_is_blocked() {
        let errors = validate_student(&draft_with_dob("2000-10-16"), &fields(), today());
        assert_eq!(
            errors.get("dateOfBirth").map(String::as_str),
            Some("Student must be between 5 and 25 years old")
        );
    }

    #[test]
    fn test_birthday_not_yet_reached_counts_one_year_less() {
        // would be 26 on 2026-10-17
        let errors = validate_student(&draft_with_dob("2000-10-17"), &fields(), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_all_violations_are_collected() {
        let mut draft = draft_with_dob("2022-01-01");
        draft.insert("firstName".into(), json!("Amy3"));
        draft.insert("email".into(), json!("amy@school"));
        draft.remove("classroomId");

        let errors = validate_student(&draft, &fields(), today());
        let keys: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["classroomId", "dateOfBirth", "email", "firstName"]);
        assert_eq!(errors["classroomId"], "Classroom is required");
    }

    #[test]
    fn test_unparsable_date() {
        let errors = validate_student(&draft_with_dob("16/10/2012"), &fields(), today());
        assert_eq!(errors["dateOfBirth"], "Enter a valid date");
    }
}
