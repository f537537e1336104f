use contracts::domain::map::MapNgo;
use contracts::domain::ngo::Ngo;
use contracts::shared::paging::{NgoPage, SearchResults};
use serde::Serialize;

use crate::shared::api::{ApiClient, ApiError};

/// Filter bag for the organization list. Only non-empty fields are
/// serialized, so the wire carries exactly the active filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NgoFilter {
    pub page: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "is_false")]
    pub verified: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Default for NgoFilter {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            category: String::new(),
            state: String::new(),
            verified: false,
        }
    }
}

/// One page of organizations matching the filter.
pub async fn list(api: &ApiClient, filter: &NgoFilter) -> Result<NgoPage, ApiError> {
    api.get_json_query("/api/ngos", filter).await
}

/// Single organization by id.
pub async fn get(api: &ApiClient, id: i64) -> Result<Ngo, ApiError> {
    api.get_json(&format!("/api/ngos/{}", id)).await
}

/// Reduced projection of every geocoded organization for the map.
pub async fn map_data(api: &ApiClient) -> Result<Vec<MapNgo>, ApiError> {
    api.get_json("/api/ngos/map").await
}

/// Free-text search across name, mission, description and DARPAN id.
pub async fn search(api: &ApiClient, query: &str) -> Result<Vec<Ngo>, ApiError> {
    #[derive(Serialize)]
    struct SearchQuery<'a> {
        q: &'a str,
    }
    let results: SearchResults = api
        .get_json_query("/api/search", &SearchQuery { q: query })
        .await?;
    Ok(results.results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_serializes_page_only() {
        let qs = serde_qs::to_string(&NgoFilter::default()).unwrap();
        assert_eq!(qs, "page=1");
    }

    #[test]
    fn active_filters_are_all_present() {
        let filter = NgoFilter {
            page: 3,
            search: "water".into(),
            category: "environment".into(),
            state: "Kerala".into(),
            verified: true,
        };
        let qs = serde_qs::to_string(&filter).unwrap();
        assert_eq!(
            qs,
            "page=3&search=water&category=environment&state=Kerala&verified=true"
        );
    }

    #[test]
    fn empty_fields_are_omitted() {
        let filter = NgoFilter {
            page: 2,
            search: String::new(),
            category: "health".into(),
            state: String::new(),
            verified: false,
        };
        let qs = serde_qs::to_string(&filter).unwrap();
        assert_eq!(qs, "page=2&category=health");
    }
}
