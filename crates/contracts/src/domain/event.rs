use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Event or campaign organized by an NGO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub ngo_id: i64,
    pub ngo_name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub event_date: NaiveDateTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub registration_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": 2,
            "ngo_id": 42,
            "ngo_name": "Hope Foundation",
            "title": "Blood donation camp",
            "description": null,
            "event_date": "2025-09-14T10:30:00",
            "location": "Pune",
            "registration_link": "https://hope.org/camp"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(
            event.event_date,
            NaiveDate::from_ymd_opt(2025, 9, 14)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
        assert!(event.description.is_none());
        assert!(event.registration_link.is_some());
    }
}
