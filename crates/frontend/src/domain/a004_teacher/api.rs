use contracts::domain::a004_teacher::aggregate::Teacher;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_teachers(client: &ApiClient) -> Result<Vec<Teacher>, String> {
    client.get_json("/api/teachers").await
}
