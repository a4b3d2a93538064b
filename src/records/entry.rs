//! The four transactional record kinds: salaries, expenses, investments,
//! activities. All share the `{id, userId, amount, year, month, date}` core
//! plus kind-specific fields. Created once, deleted by owner, never updated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salary {
    pub id: String,
    pub user_id: String,
    /// Defaults to the caller's email when absent from the request.
    pub person: String,
    pub amount: f64,
    pub date: String,
    pub month: i64,
    pub year: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub paid_by: String,
    pub date: String,
    pub month: i64,
    pub year: i64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub owner: String,
    pub date: String,
    pub month: i64,
    pub year: i64,
    pub return_percent: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub person: String,
    pub date: String,
    pub month: i64,
    pub year: i64,
    #[serde(default)]
    pub notes: String,
}
