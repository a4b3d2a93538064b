//! Create and delete for the four transactional collections.
//!
//! Create coerces the loose request body field-by-field, stamps the verified
//! caller as owner, persists, and echoes the stored record back. There is no
//! update: records are created once and deleted by their owner.

use crate::app_state::AppState;
use crate::auth::AuthUser;
use crate::coerce::{
    opt_f64, opt_string, require_f64, require_i64, require_string, string_or_caller,
};
use crate::db::CollectionDb;
use crate::error::ApiError;
use crate::records::{Activity, Expense, Investment, Owned, Salary};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use uuid::Uuid;

pub async fn create_salary_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<Json<Salary>, ApiError> {
    let doc = Salary {
        id: Uuid::new_v4().to_string(),
        user_id: user.uid.clone(),
        person: string_or_caller(&body, "person", user.email.as_deref()),
        amount: require_f64(&body, "amount")?,
        date: require_string(&body, "date")?,
        month: require_i64(&body, "month")?,
        year: require_i64(&body, "year")?,
    };
    state.salaries.insert(doc.clone())?;
    Ok(Json(doc))
}

pub async fn create_expense_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<Json<Expense>, ApiError> {
    let doc = Expense {
        id: Uuid::new_v4().to_string(),
        user_id: user.uid.clone(),
        title: require_string(&body, "title")?,
        amount: require_f64(&body, "amount")?,
        category: require_string(&body, "category")?,
        paid_by: string_or_caller(&body, "paidBy", user.email.as_deref()),
        date: require_string(&body, "date")?,
        month: require_i64(&body, "month")?,
        year: require_i64(&body, "year")?,
        notes: opt_string(&body, "notes"),
    };
    state.expenses.insert(doc.clone())?;
    Ok(Json(doc))
}

pub async fn create_investment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<Json<Investment>, ApiError> {
    let doc = Investment {
        id: Uuid::new_v4().to_string(),
        user_id: user.uid.clone(),
        kind: require_string(&body, "type")?,
        amount: require_f64(&body, "amount")?,
        owner: string_or_caller(&body, "owner", user.email.as_deref()),
        date: require_string(&body, "date")?,
        month: require_i64(&body, "month")?,
        year: require_i64(&body, "year")?,
        return_percent: opt_f64(&body, "returnPercent")?,
        notes: opt_string(&body, "notes"),
    };
    state.investments.insert(doc.clone())?;
    Ok(Json(doc))
}

pub async fn create_activity_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<Value>,
) -> Result<Json<Activity>, ApiError> {
    let doc = Activity {
        id: Uuid::new_v4().to_string(),
        user_id: user.uid.clone(),
        title: require_string(&body, "title")?,
        amount: require_f64(&body, "amount")?,
        kind: require_string(&body, "type")?,
        person: string_or_caller(&body, "person", user.email.as_deref()),
        date: require_string(&body, "date")?,
        month: require_i64(&body, "month")?,
        year: require_i64(&body, "year")?,
        notes: opt_string(&body, "notes"),
    };
    state.activities.insert(doc.clone())?;
    Ok(Json(doc))
}

pub async fn delete_salary_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    delete_entry(&state.salaries, &user.uid, &id)
}

pub async fn delete_expense_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    delete_entry(&state.expenses, &user.uid, &id)
}

pub async fn delete_investment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    delete_entry(&state.investments, &user.uid, &id)
}

pub async fn delete_activity_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    delete_entry(&state.activities, &user.uid, &id)
}

fn delete_entry<T>(db: &CollectionDb<T>, uid: &str, id: &str) -> Result<Json<Value>, ApiError>
where
    T: Serialize + DeserializeOwned + Clone + Owned,
{
    db.delete_owned(uid, id)?;
    Ok(Json(json!({ "success": true })))
}
