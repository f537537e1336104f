use serde::{Deserialize, Serialize};

/// One bucket of a frequency breakdown (per category or per state).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: i64,
}

/// Aggregate platform statistics served by `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_ngos: i64,
    pub verified_ngos: i64,
    pub blacklisted_ngos: i64,
    pub total_volunteers: i64,
    pub upcoming_events: i64,
    #[serde(default)]
    pub categories: Vec<NameCount>,
    #[serde(default)]
    pub states: Vec<NameCount>,
}

impl Stats {
    /// First `n` state buckets, in the order the backend returned them.
    pub fn top_states(&self, n: usize) -> &[NameCount] {
        &self.states[..self.states.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_stats_payload() {
        let json = r#"{
            "total_ngos": 150,
            "verified_ngos": 90,
            "blacklisted_ngos": 5,
            "total_volunteers": 40,
            "upcoming_events": 12,
            "categories": [
                {"name": "Education", "count": 30},
                {"name": "Health", "count": 20}
            ],
            "states": [
                {"name": "Maharashtra", "count": 45},
                {"name": "Kerala", "count": 12}
            ]
        }"#;
        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_ngos, 150);
        assert_eq!(stats.categories[0].count, 30);
        assert_eq!(stats.states.len(), 2);
    }

    #[test]
    fn top_states_never_overruns() {
        let stats = Stats {
            total_ngos: 0,
            verified_ngos: 0,
            blacklisted_ngos: 0,
            total_volunteers: 0,
            upcoming_events: 0,
            categories: Vec::new(),
            states: vec![
                NameCount { name: "A".into(), count: 3 },
                NameCount { name: "B".into(), count: 2 },
            ],
        };
        assert_eq!(stats.top_states(10).len(), 2);
        assert_eq!(stats.top_states(1)[0].name, "A");
        assert!(stats.top_states(0).is_empty());
    }
}
