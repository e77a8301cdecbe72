use contracts::domain::a001_classroom::aggregate::ClassroomOption;
use contracts::domain::a002_student::aggregate::{Student, StudentDto};
use contracts::domain::a003_parent::aggregate::ParentDto;
use serde_json::Value;

use crate::shared::form::{FieldDescriptor, SelectOption};
use crate::shared::record::{optional_text, text_field, Record};

pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// Form schema; the classroom select is built from the options fetched on open.
pub fn student_fields(classrooms: &[ClassroomOption]) -> Vec<FieldDescriptor> {
    let classroom_options = classrooms
        .iter()
        .map(|c| SelectOption::new(c.id.clone(), c.name.clone()))
        .collect();
    let gender_options = GENDERS.iter().map(|g| SelectOption::new(*g, *g)).collect();

    vec![
        FieldDescriptor::text("firstName", "First Name").required(),
        FieldDescriptor::text("lastName", "Last Name").required(),
        FieldDescriptor::email("email", "Email").required(),
        FieldDescriptor::date("dateOfBirth", "Date of Birth").required(),
        FieldDescriptor::select("gender", "Gender", gender_options),
        FieldDescriptor::tel("phone", "Phone"),
        FieldDescriptor::textarea("address", "Address"),
        FieldDescriptor::select("classroomId", "Classroom", classroom_options).required(),
    ]
}

fn put(record: &mut Record, key: &str, value: &str) {
    record.insert(key.to_string(), Value::String(value.to_string()));
}

/// Draft seed for the edit form. Parents are edited separately.
pub fn student_initial_record(student: &Student) -> Record {
    let mut record = Record::new();
    put(&mut record, "firstName", &student.first_name);
    put(&mut record, "lastName", &student.last_name);
    put(&mut record, "email", &student.email);
    // date inputs only accept YYYY-MM-DD
    let dob = student.date_of_birth.split('T').next().unwrap_or_default();
    put(&mut record, "dateOfBirth", dob);
    for (key, value) in [
        ("gender", &student.gender),
        ("phone", &student.phone),
        ("address", &student.address),
    ] {
        if let Some(v) = value {
            put(&mut record, key, v);
        }
    }
    if let Some(classroom) = &student.classroom {
        put(&mut record, "classroomId", &classroom.id);
    }
    record
}

pub fn build_student_dto(draft: &Record, parents: Vec<ParentDto>) -> StudentDto {
    StudentDto {
        first_name: text_field(draft, "firstName").trim().to_string(),
        last_name: text_field(draft, "lastName").trim().to_string(),
        email: text_field(draft, "email").trim().to_string(),
        date_of_birth: text_field(draft, "dateOfBirth").trim().to_string(),
        gender: optional_text(draft, "gender"),
        phone: optional_text(draft, "phone"),
        address: optional_text(draft, "address"),
        classroom_id: optional_text(draft, "classroomId"),
        parents,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::validate_schema;
    use contracts::domain::a003_parent::aggregate::Parent;

    fn sample_student() -> Student {
        Student {
            id: "s1".into(),
            first_name: "Amy".into(),
            last_name: "Pond".into(),
            email: "amy@school.org".into(),
            date_of_birth: "2012-04-01T00:00:00.000Z".into(),
            gender: Some("Female".into()),
            phone: None,
            address: None,
            classroom: Some(ClassroomOption {
                id: "c1".into(),
                name: "5A".into(),
            }),
            parents: vec![Parent {
                id: "p1".into(),
                first_name: "Rory".into(),
                last_name: "Williams".into(),
                email: "rory@mail.org".into(),
                phone: None,
                relationship: Some("Father".into()),
            }],
        }
    }

    #[test]
    fn test_schema_is_valid_once_classrooms_are_loaded() {
        let classrooms = vec![ClassroomOption {
            id: "c1".into(),
            name: "5A".into(),
        }];
        assert!(validate_schema(&student_fields(&classrooms)).is_ok());
        assert!(validate_schema(&student_fields(&[])).is_err());
    }

    #[test]
    fn test_initial_record_uses_classroom_id_and_plain_date() {
        let record = student_initial_record(&sample_student());
        assert_eq!(text_field(&record, "classroomId"), "c1");
        assert_eq!(text_field(&record, "dateOfBirth"), "2012-04-01");
        assert!(!record.contains_key("phone"));
        assert!(!record.contains_key("parents"));
    }

    #[test]
    fn test_dto_embeds_parents_verbatim() {
        let student = sample_student();
        let parents: Vec<ParentDto> = student.parents.iter().cloned().map(ParentDto::from).collect();
        let dto = build_student_dto(&student_initial_record(&student), parents.clone());
        assert_eq!(dto.first_name, "Amy");
        assert_eq!(dto.classroom_id.as_deref(), Some("c1"));
        assert_eq!(dto.phone, None);
        assert_eq!(dto.parents, parents);
    }
}
