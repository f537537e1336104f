use contracts::domain::volunteer::VolunteerPost;
use serde::Serialize;

use crate::shared::api::{ApiClient, ApiError};

/// Open volunteer positions only; expired and closed posts are filtered
/// server-side.
pub async fn list_active(api: &ApiClient) -> Result<Vec<VolunteerPost>, ApiError> {
    #[derive(Serialize)]
    struct Query {
        active: bool,
    }
    api.get_json_query("/api/volunteer-posts", &Query { active: true })
        .await
}
