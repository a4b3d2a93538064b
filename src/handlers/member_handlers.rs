//! Household member list: create, list (ordered by creation time), delete.

use crate::app_state::AppState;
use crate::auth::AuthUser;
use crate::coerce::opt_string;
use crate::error::ApiError;
use crate::records::{Member, MemberView};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

pub async fn list_members_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<MemberView>>, ApiError> {
    let mut members = state.members.list_owned(&user.uid);
    // pre-timestamp documents sort as time zero
    members.sort_by_key(|m| m.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH));
    Ok(Json(members.iter().map(MemberView::from).collect()))
}

pub async fn create_member_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<Json<MemberView>, ApiError> {
    let name = opt_string(&body, "name").trim().to_string();
    if name.is_empty() {
        return Err(ApiError::InvalidArgument("Name is required".to_string()));
    }

    let doc = Member {
        id: Uuid::new_v4().to_string(),
        user_id: user.uid.clone(),
        name,
        created_at: Some(Utc::now()),
    };
    state.members.insert(doc.clone())?;
    Ok(Json(MemberView::from(&doc)))
}

pub async fn delete_member_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.members.delete_owned(&user.uid, &id)?;
    Ok(Json(json!({ "success": true })))
}
