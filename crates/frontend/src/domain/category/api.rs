use contracts::domain::category::Category;

use crate::shared::api::{ApiClient, ApiError};

/// All categories, ordered by name on the server.
pub async fn list(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get_json("/api/categories").await
}
