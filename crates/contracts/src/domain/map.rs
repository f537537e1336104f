use serde::{Deserialize, Serialize};

/// Reduced organization projection served by `GET /api/ngos/map` for
/// geographic rendering. The backend only emits rows with known
/// coordinates, so `lat`/`lng` are non-optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNgo {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    pub verified: bool,
    pub blacklisted: bool,
    /// Category names only, not full objects.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl MapNgo {
    /// "City, State" popup line, skipping missing parts.
    pub fn location_line(&self) -> Option<String> {
        match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_map_payload() {
        let json = r#"[{
            "id": 42,
            "name": "Hope Foundation",
            "lat": 18.5204,
            "lng": 73.8567,
            "city": "Pune",
            "state": "Maharashtra",
            "verified": true,
            "blacklisted": false,
            "categories": ["Education", "Health"]
        }]"#;
        let ngos: Vec<MapNgo> = serde_json::from_str(json).unwrap();
        assert_eq!(ngos.len(), 1);
        assert_eq!(ngos[0].categories, vec!["Education", "Health"]);
        assert_eq!(
            ngos[0].location_line(),
            Some("Pune, Maharashtra".to_string())
        );
    }
}
