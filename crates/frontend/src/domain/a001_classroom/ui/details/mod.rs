//! Classroom form: field schema, validation and payload mapping.
//! Rendering is the generic `FormModal`.

use contracts::domain::a001_classroom::aggregate::{Classroom, ClassroomDto};
use serde_json::Value;

use crate::shared::form::{FieldDescriptor, FieldErrors};
use crate::shared::record::{is_blank, optional_text, text_field, Record};
use crate::shared::validation::validate_required;

pub const MAX_CAPACITY: u64 = 100;

pub fn classroom_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("name", "Name").required(),
        FieldDescriptor::text("grade", "Grade"),
        FieldDescriptor::number("capacity", "Capacity"),
        FieldDescriptor::text("room", "Room"),
    ]
}

pub fn classroom_initial_record(classroom: &Classroom) -> Record {
    let mut record = Record::new();
    record.insert("name".into(), Value::String(classroom.name.clone()));
    if let Some(grade) = &classroom.grade {
        record.insert("grade".into(), Value::String(grade.clone()));
    }
    if let Some(capacity) = classroom.capacity {
        record.insert("capacity".into(), Value::from(capacity));
    }
    if let Some(room) = &classroom.room {
        record.insert("room".into(), Value::String(room.clone()));
    }
    record
}

fn capacity_of(draft: &Record) -> Option<u64> {
    match draft.get("capacity") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn validate_classroom(draft: &Record) -> FieldErrors {
    let mut errors = validate_required(draft, &classroom_fields());
    if !is_blank(draft, "capacity") {
        match capacity_of(draft) {
            Some(c) if (1..=MAX_CAPACITY).contains(&c) => {}
            _ => {
                errors.insert(
                    "capacity".into(),
                    format!("Capacity must be a whole number between 1 and {}", MAX_CAPACITY),
                );
            }
        }
    }
    errors
}

pub fn build_classroom_dto(draft: &Record) -> ClassroomDto {
    ClassroomDto {
        name: text_field(draft, "name").trim().to_string(),
        grade: optional_text(draft, "grade"),
        capacity: capacity_of(draft).and_then(|c| u32::try_from(c).ok()),
        room: optional_text(draft, "room"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(v: Value) -> Record {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn test_name_is_required() {
        let errors = validate_classroom(&draft(json!({"name": "  "})));
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(validate_classroom(&draft(json!({"name": "5A", "capacity": 30}))).is_empty());
        assert!(validate_classroom(&draft(json!({"name": "5A", "capacity": null}))).is_empty());
        assert!(validate_classroom(&draft(json!({"name": "5A", "capacity": 0}))).contains_key("capacity"));
        assert!(validate_classroom(&draft(json!({"name": "5A", "capacity": "abc"}))).contains_key("capacity"));
    }

    #[test]
    fn test_dto_from_draft() {
        let dto = build_classroom_dto(&draft(json!({
            "name": " 5A ", "grade": "", "capacity": 28, "room": "B-12"
        })));
        assert_eq!(dto.name, "5A");
        assert_eq!(dto.grade, None);
        assert_eq!(dto.capacity, Some(28));
        assert_eq!(dto.room.as_deref(), Some("B-12"));
    }

    #[test]
    fn test_initial_record_round_trips_into_dto() {
        let classroom = Classroom {
            id: "c1".into(),
            name: "7B".into(),
            grade: Some("7".into()),
            capacity: Some(25),
            room: None,
        };
        let dto = build_classroom_dto(&classroom_initial_record(&classroom));
        assert_eq!(dto.name, "7B");
        assert_eq!(dto.grade.as_deref(), Some("7"));
        assert_eq!(dto.capacity, Some(25));
    }
}
