//! Year and year+month aggregation across the four transactional
//! collections. The four owner-scoped queries are fanned out concurrently
//! and joined before responding; there are no partial results.

use crate::app_state::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::records::{Activity, Expense, Investment, Salary};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AggregateResponse {
    pub salaries: Vec<Salary>,
    pub expenses: Vec<Expense>,
    pub investments: Vec<Investment>,
    pub activities: Vec<Activity>,
}

/// GET /api/data/year/{year}
///
/// The literal `year` segment takes precedence over the `{year}/{month}`
/// captures in the router, so "year" is never parsed as a year value.
pub async fn aggregate_by_year_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(year): Path<String>,
) -> Result<Json<AggregateResponse>, ApiError> {
    let year = year
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidArgument("Invalid year".to_string()))?;
    Ok(Json(aggregate(&state, &user.uid, year, None).await))
}

/// GET /api/data/{year}/{month}
pub async fn aggregate_by_month_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((year, month)): Path<(String, String)>,
) -> Result<Json<AggregateResponse>, ApiError> {
    let (Ok(year), Ok(month)) = (year.parse::<i64>(), month.parse::<i64>()) else {
        return Err(ApiError::InvalidArgument(
            "Invalid year or month".to_string(),
        ));
    };
    Ok(Json(aggregate(&state, &user.uid, year, Some(month)).await))
}

async fn aggregate(
    state: &AppState,
    uid: &str,
    year: i64,
    month: Option<i64>,
) -> AggregateResponse {
    let (salaries, expenses, investments, activities) = tokio::join!(
        async { state.salaries.list_window(uid, year, month) },
        async { state.expenses.list_window(uid, year, month) },
        async { state.investments.list_window(uid, year, month) },
        async { state.activities.list_window(uid, year, month) },
    );

    AggregateResponse {
        salaries,
        expenses,
        investments,
        activities,
    }
}
