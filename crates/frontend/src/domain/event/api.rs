use contracts::domain::event::Event;
use serde::Serialize;

use crate::shared::api::{ApiClient, ApiError};

/// Future events only, ordered by date on the server.
pub async fn list_upcoming(api: &ApiClient) -> Result<Vec<Event>, ApiError> {
    #[derive(Serialize)]
    struct Query {
        upcoming: bool,
    }
    api.get_json_query("/api/events", &Query { upcoming: true })
        .await
}
