use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Regulatory action record attached to a blacklisted organization.
///
/// Invariant: present on an [`Ngo`](super::ngo::Ngo) only when its
/// `blacklisted` flag is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlacklistInfo {
    pub id: i64,
    pub ngo_id: i64,
    /// Authority that issued the blacklisting.
    #[serde(default)]
    pub blacklisted_by: Option<String>,
    #[serde(default)]
    pub blacklist_date: Option<NaiveDate>,
    #[serde(default)]
    pub reason: Option<String>,
    /// "With effect from" date.
    #[serde(default)]
    pub wef_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
}
