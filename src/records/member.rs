use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Household member. Listed ascending by creation time; documents that
/// predate the timestamp field sort first (treated as time zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Wire shape for member responses; the owner id stays server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberView {
    pub id: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Member> for MemberView {
    fn from(m: &Member) -> Self {
        MemberView {
            id: m.id.clone(),
            name: m.name.clone(),
            created_at: m.created_at,
        }
    }
}
