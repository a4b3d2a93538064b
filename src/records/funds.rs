use serde::{Deserialize, Serialize};

/// One savings goal: emergency or vacation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fund {
    pub enabled: bool,
    pub target: f64,
    pub current: f64,
}

impl Default for Fund {
    fn default() -> Self {
        Fund {
            enabled: false,
            target: 0.0,
            current: 0.0,
        }
    }
}

/// Stored funds settings. One document per user; `id` equals the owner id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundsDoc {
    pub id: String,
    #[serde(default)]
    pub emergency: Fund,
    #[serde(default)]
    pub vacation: Fund,
}

impl FundsDoc {
    pub fn default_for(uid: &str) -> Self {
        FundsDoc {
            id: uid.to_string(),
            emergency: Fund::default(),
            vacation: Fund::default(),
        }
    }
}

/// Wire shape for funds responses: the two sub-records only.
#[derive(Debug, Clone, Serialize)]
pub struct FundsView {
    pub emergency: Fund,
    pub vacation: Fund,
}

impl From<&FundsDoc> for FundsView {
    fn from(doc: &FundsDoc) -> Self {
        FundsView {
            emergency: doc.emergency.clone(),
            vacation: doc.vacation.clone(),
        }
    }
}
