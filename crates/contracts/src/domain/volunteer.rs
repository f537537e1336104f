use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Volunteer opening published by an organization. `ngo_name` is
/// denormalized by the backend so cards render without a second fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerPost {
    pub id: i64,
    pub ngo_id: i64,
    pub ngo_name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": 5,
            "ngo_id": 42,
            "ngo_name": "Hope Foundation",
            "title": "Weekend teacher",
            "description": "Teach maths to grade 5",
            "requirements": "B.Ed preferred",
            "location": "Pune",
            "deadline": "2025-10-01",
            "active": true
        }"#;
        let post: VolunteerPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.ngo_name, "Hope Foundation");
        assert_eq!(post.deadline, NaiveDate::from_ymd_opt(2025, 10, 1));
        assert!(post.active);
    }
}
