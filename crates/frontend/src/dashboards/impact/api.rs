use contracts::dashboards::stats::Stats;

use crate::shared::api::{ApiClient, ApiError};

/// Platform-wide aggregates for the dashboard and the home page counters.
pub async fn stats(api: &ApiClient) -> Result<Stats, ApiError> {
    api.get_json("/api/stats").await
}
