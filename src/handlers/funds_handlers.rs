//! Savings funds settings: one document per user, id equal to the owner id.
//!
//! Reads default without creating anything. Writes are partial merges: a fund
//! present in the body is overwritten whole, a fund absent from the body
//! keeps its stored value; the merged document replaces the stored one.

use crate::app_state::AppState;
use crate::auth::AuthUser;
use crate::coerce::{f64_or_zero, truthy};
use crate::error::ApiError;
use crate::records::{Fund, FundsDoc, FundsView};
use axum::extract::State;
use axum::{Extension, Json};
use serde_json::Value;

pub async fn get_funds_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<FundsView>, ApiError> {
    let doc = state
        .funds
        .find_by_id(&user.uid)
        .unwrap_or_else(|| FundsDoc::default_for(&user.uid));
    Ok(Json(FundsView::from(&doc)))
}

pub async fn put_funds_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<Json<FundsView>, ApiError> {
    let existing = state
        .funds
        .find_by_id(&user.uid)
        .unwrap_or_else(|| FundsDoc::default_for(&user.uid));

    let merged = FundsDoc {
        id: user.uid.clone(),
        emergency: merge_fund(body.get("emergency"), existing.emergency),
        vacation: merge_fund(body.get("vacation"), existing.vacation),
    };

    state.funds.upsert(merged.clone())?;
    Ok(Json(FundsView::from(&merged)))
}

fn merge_fund(patch: Option<&Value>, existing: Fund) -> Fund {
    match patch {
        Some(v) if truthy(Some(v)) => Fund {
            enabled: truthy(v.get("enabled")),
            target: f64_or_zero(v.get("target")),
            current: f64_or_zero(v.get("current")),
        },
        _ => existing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fund_keeps_existing_value() {
        let existing = Fund {
            enabled: true,
            target: 5000.0,
            current: 1200.0,
        };
        let merged = merge_fund(None, existing.clone());
        assert_eq!(merged, existing);
    }

    #[test]
    fn present_fund_is_overwritten_whole() {
        let existing = Fund {
            enabled: true,
            target: 5000.0,
            current: 1200.0,
        };
        // no `current` key in the patch: the fund is replaced, not patched
        let merged = merge_fund(
            Some(&json!({"enabled": false, "target": "800"})),
            existing,
        );
        assert_eq!(
            merged,
            Fund {
                enabled: false,
                target: 800.0,
                current: 0.0,
            }
        );
    }

    #[test]
    fn malformed_fund_fields_coerce_to_defaults() {
        let merged = merge_fund(
            Some(&json!({"enabled": "yes", "target": "much", "current": null})),
            Fund::default(),
        );
        assert!(merged.enabled);
        assert_eq!(merged.target, 0.0);
        assert_eq!(merged.current, 0.0);
    }
}
