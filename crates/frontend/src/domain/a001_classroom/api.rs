use contracts::domain::a001_classroom::aggregate::{Classroom, ClassroomDto, ClassroomOption};

use crate::shared::api_utils::ApiClient;

const CLASSROOMS_PATH: &str = "/api/classrooms";

pub async fn fetch_classrooms(client: &ApiClient) -> Result<Vec<Classroom>, String> {
    client.get_json(CLASSROOMS_PATH).await
}

/// `{id, name}` pairs for select controls
pub async fn fetch_classroom_options(client: &ApiClient) -> Result<Vec<ClassroomOption>, String> {
    let classrooms = fetch_classrooms(client).await?;
    Ok(classrooms.iter().map(ClassroomOption::from).collect())
}

pub async fn create_classroom(client: &ApiClient, dto: &ClassroomDto) -> Result<Classroom, String> {
    client.post_json(CLASSROOMS_PATH, dto).await
}

pub async fn update_classroom(
    client: &ApiClient,
    id: &str,
    dto: &ClassroomDto,
) -> Result<Classroom, String> {
    client
        .put_json(&format!("{}/{}", CLASSROOMS_PATH, id), dto)
        .await
}

pub async fn delete_classroom(client: &ApiClient, id: &str) -> Result<(), String> {
    client.delete(&format!("{}/{}", CLASSROOMS_PATH, id)).await
}
