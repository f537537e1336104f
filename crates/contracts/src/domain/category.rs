use serde::{Deserialize, Serialize};

/// Thematic area an organization works in. `slug` is the URL-safe key used
/// by the list endpoint's `category` filter; `icon` is a display glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
