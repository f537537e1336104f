use serde::{Deserialize, Serialize};

use crate::domain::ngo::Ngo;

/// Paged list envelope returned by `GET /api/ngos` and `GET /api/blacklisted`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgoPage {
    pub ngos: Vec<Ngo>,
    /// Total matching rows across all pages.
    pub total: i64,
    /// Total number of pages at the server's fixed page size.
    pub pages: i64,
}

/// Envelope returned by `GET /api/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<Ngo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_list_envelope() {
        let json = r#"{
            "ngos": [
                {"id": 1, "name": "A", "verified": false, "blacklisted": false, "transparency_score": 40}
            ],
            "total": 37,
            "pages": 4
        }"#;
        let page: NgoPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.ngos.len(), 1);
        assert_eq!(page.total, 37);
        assert_eq!(page.pages, 4);
    }

    #[test]
    fn deserializes_empty_search() {
        let results: SearchResults = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(results.results.is_empty());
    }
}
