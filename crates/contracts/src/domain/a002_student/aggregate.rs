use serde::{Deserialize, Serialize};

use crate::domain::a001_classroom::aggregate::ClassroomOption;
use crate::domain::a003_parent::aggregate::{Parent, ParentDto};

/// Student as returned by `/api/students`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// ISO date, `YYYY-MM-DD`
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Populated classroom reference (`{id, name}`), when the API expands it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom: Option<ClassroomOption>,
    #[serde(default)]
    pub parents: Vec<Parent>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classroom_id: Option<String>,
    #[serde(default)]
    pub parents: Vec<ParentDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parents_are_sent_without_id() {
        let dto = StudentDto {
            first_name: "Amy".into(),
            last_name: "Pond".into(),
            email: "amy@school.org".into(),
            date_of_birth: "2012-04-01".into(),
            parents: vec![
                ParentDto {
                    id: Some("p1".into()),
                    first_name: "Rory".into(),
                    last_name: "Williams".into(),
                    email: "rory@mail.org".into(),
                    ..Default::default()
                },
                ParentDto {
                    first_name: "Brian".into(),
                    last_name: "Williams".into(),
                    email: "brian@mail.org".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["firstName"], "Amy");
        assert_eq!(json["parents"][0]["id"], "p1");
        assert!(json["parents"][1].get("id").is_none());
        assert!(json.get("classroomId").is_none());
    }

    #[test]
    fn test_student_deserializes_with_expanded_classroom() {
        let json = r#"{
            "id": "s1",
            "firstName": "Amy",
            "lastName": "Pond",
            "email": "amy@school.org",
            "dateOfBirth": "2012-04-01",
            "classroom": {"id": "c1", "name": "5B"}
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.classroom.unwrap().name, "5B");
        assert!(student.parents.is_empty());
    }
}
