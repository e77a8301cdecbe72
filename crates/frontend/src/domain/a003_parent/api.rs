use contracts::domain::a003_parent::aggregate::Parent;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_parents(client: &ApiClient) -> Result<Vec<Parent>, String> {
    client.get_json("/api/parents").await
}
