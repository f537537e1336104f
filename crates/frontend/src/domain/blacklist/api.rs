use contracts::shared::paging::NgoPage;
use serde::Serialize;

use crate::shared::api::{ApiClient, ApiError};

/// Filter bag for the blacklist register. Same envelope as the main list
/// endpoint, restricted server-side to blacklisted organizations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlacklistFilter {
    pub page: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub blacklisted_by: String,
}

impl Default for BlacklistFilter {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            state: String::new(),
            blacklisted_by: String::new(),
        }
    }
}

pub async fn list(api: &ApiClient, filter: &BlacklistFilter) -> Result<NgoPage, ApiError> {
    api.get_json_query("/api/blacklisted", filter).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_serializes_page_only() {
        let qs = serde_qs::to_string(&BlacklistFilter::default()).unwrap();
        assert_eq!(qs, "page=1");
    }

    #[test]
    fn authority_filter_reaches_the_wire() {
        let filter = BlacklistFilter {
            page: 1,
            search: String::new(),
            state: "Bihar".into(),
            blacklisted_by: "MHA".into(),
        };
        let qs = serde_qs::to_string(&filter).unwrap();
        assert_eq!(qs, "page=1&state=Bihar&blacklisted_by=MHA");
    }
}
