use contracts::domain::a002_student::aggregate::{Student, StudentDto};

use crate::shared::api_utils::ApiClient;

const STUDENTS_PATH: &str = "/api/students";

pub async fn fetch_students(client: &ApiClient) -> Result<Vec<Student>, String> {
    client.get_json(STUDENTS_PATH).await
}

pub async fn create_student(client: &ApiClient, dto: &StudentDto) -> Result<Student, String> {
    client.post_json(STUDENTS_PATH, dto).await
}

pub async fn update_student(client: &ApiClient, id: &str, dto: &StudentDto) -> Result<Student, String> {
    client.put_json(&format!("{}/{}", STUDENTS_PATH, id), dto).await
}

pub async fn delete_student(client: &ApiClient, id: &str) -> Result<(), String> {
    client.delete(&format!("{}/{}", STUDENTS_PATH, id)).await
}
