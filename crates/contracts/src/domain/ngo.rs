use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::blacklist::BlacklistInfo;
use super::category::Category;

/// Full organization record as returned by `GET /api/ngos/{id}` and inside
/// list envelopes. All fields are server-owned; the client never mutates
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ngo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub registration_no: Option<String>,
    /// Government-issued registration identifier, displayed as an opaque
    /// string.
    #[serde(default)]
    pub darpan_id: Option<String>,
    #[serde(default)]
    pub mission: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i32>,

    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub registered_with: Option<String>,
    #[serde(default)]
    pub registration_date: Option<NaiveDate>,
    #[serde(default)]
    pub act_name: Option<String>,
    #[serde(default)]
    pub type_of_ngo: Option<String>,

    pub verified: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub blacklisted: bool,
    /// Precomputed 0-100 integer supplied by the backend.
    pub transparency_score: i32,

    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub office_bearers: Vec<OfficeBearer>,
    #[serde(default)]
    pub blacklist_info: Option<BlacklistInfo>,

    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

fn default_active() -> bool {
    true
}

impl Ngo {
    /// "City, State" line for cards and contact blocks; `None` when neither
    /// part is known.
    pub fn location_line(&self) -> Option<String> {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            (Some(city), None) => Some(city.to_string()),
            (None, Some(state)) => Some(state.to_string()),
            (None, None) => None,
        }
    }

    /// Transparency score clamped to 0..=100, usable directly as a bar
    /// width percentage.
    pub fn transparency_percent(&self) -> u8 {
        self.transparency_score.clamp(0, 100) as u8
    }

    /// Whether the detail page has any registration metadata to show.
    pub fn has_registration_details(&self) -> bool {
        self.registration_no.is_some()
            || self.darpan_id.is_some()
            || self.registered_with.is_some()
            || self.registration_date.is_some()
            || self.act_name.is_some()
            || self.type_of_ngo.is_some()
    }
}

/// Named officer of an organization. Always scoped to one NGO, no
/// independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeBearer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub designation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(city: Option<&str>, state: Option<&str>, score: i32) -> Ngo {
        Ngo {
            id: 1,
            name: "Test".into(),
            registration_no: None,
            darpan_id: None,
            mission: None,
            description: None,
            founded_year: None,
            email: None,
            phone: None,
            website: None,
            address: None,
            city: city.map(Into::into),
            state: state.map(Into::into),
            district: None,
            country: None,
            latitude: None,
            longitude: None,
            registered_with: None,
            registration_date: None,
            act_name: None,
            type_of_ngo: None,
            verified: false,
            active: true,
            blacklisted: false,
            transparency_score: score,
            categories: Vec::new(),
            office_bearers: Vec::new(),
            blacklist_info: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn location_line_joins_present_parts() {
        assert_eq!(
            minimal(Some("Pune"), Some("Maharashtra"), 0).location_line(),
            Some("Pune, Maharashtra".to_string())
        );
        assert_eq!(
            minimal(Some("Pune"), None, 0).location_line(),
            Some("Pune".to_string())
        );
        assert_eq!(
            minimal(None, Some("Kerala"), 0).location_line(),
            Some("Kerala".to_string())
        );
        assert_eq!(minimal(None, None, 0).location_line(), None);
    }

    #[test]
    fn transparency_percent_is_clamped() {
        assert_eq!(minimal(None, None, 72).transparency_percent(), 72);
        assert_eq!(minimal(None, None, 150).transparency_percent(), 100);
        assert_eq!(minimal(None, None, -5).transparency_percent(), 0);
    }

    #[test]
    fn deserializes_full_backend_payload() {
        let json = r#"{
            "id": 42,
            "name": "Hope Foundation",
            "registration_no": "U80301MH2013NPL123456",
            "darpan_id": "MH/2013/0061234",
            "mission": "Education for all",
            "description": "Runs schools in rural Maharashtra",
            "founded_year": 2013,
            "email": "info@hope.org",
            "phone": "+91-9812345678",
            "website": "https://hope.org",
            "address": "12 MG Road",
            "city": "Pune",
            "state": "Maharashtra",
            "district": "Pune",
            "country": "India",
            "latitude": 18.5204,
            "longitude": 73.8567,
            "registered_with": "Registrar of Companies",
            "registration_date": "2013-05-21",
            "act_name": "COMPANIES ACT, 2013",
            "type_of_ngo": "Section 8 Company",
            "verified": true,
            "active": true,
            "blacklisted": false,
            "transparency_score": 87,
            "categories": [
                {"id": 1, "name": "Education", "slug": "education", "icon": "📚", "description": null}
            ],
            "office_bearers": [
                {"id": 7, "name": "A. Sharma", "designation": "Chairman"}
            ],
            "blacklist_info": null,
            "created_at": "2024-01-01T12:00:00.123456",
            "updated_at": "2024-06-01T08:30:00"
        }"#;

        let ngo: Ngo = serde_json::from_str(json).unwrap();
        assert_eq!(ngo.id, 42);
        assert!(ngo.verified);
        assert_eq!(ngo.categories.len(), 1);
        assert_eq!(ngo.categories[0].slug, "education");
        assert_eq!(ngo.office_bearers[0].designation.as_deref(), Some("Chairman"));
        assert_eq!(
            ngo.registration_date,
            NaiveDate::from_ymd_opt(2013, 5, 21)
        );
        assert!(ngo.has_registration_details());
        assert!(ngo.blacklist_info.is_none());
    }

    #[test]
    fn deserializes_blacklisted_payload() {
        let json = r#"{
            "id": 9,
            "name": "Shady Org",
            "verified": false,
            "blacklisted": true,
            "transparency_score": 10,
            "blacklist_info": {
                "id": 3,
                "ngo_id": 9,
                "blacklisted_by": "Ministry of Home Affairs",
                "blacklist_date": "2023-11-02",
                "reason": "FCRA violations",
                "wef_date": "2023-12-01",
                "last_updated": "2024-02-15"
            }
        }"#;

        let ngo: Ngo = serde_json::from_str(json).unwrap();
        assert!(ngo.blacklisted);
        assert!(!ngo.has_registration_details());
        let info = ngo.blacklist_info.as_ref().expect("blacklist record");
        assert_eq!(info.blacklisted_by.as_deref(), Some("Ministry of Home Affairs"));
        assert_eq!(info.wef_date, NaiveDate::from_ymd_opt(2023, 12, 1));
    }
}
