use crate::app_state::AppState;
use crate::auth::require_auth;
use crate::handlers::{
    aggregate_by_month_handler, aggregate_by_year_handler, create_activity_handler,
    create_expense_handler, create_investment_handler, create_member_handler,
    create_salary_handler, delete_activity_handler, delete_expense_handler,
    delete_investment_handler, delete_member_handler, delete_salary_handler,
    get_funds_handler, list_members_handler, put_funds_handler,
};
use axum::Router;
use axum::middleware;
use axum::routing::{delete, get, post};

/// Builds the full application router. Every /api route goes through the
/// auth middleware; the router matches the literal `year` segment before the
/// `{year}/{month}` captures, so /api/data/year/2027 always aggregates by
/// year.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/data/year/{year}", get(aggregate_by_year_handler))
        .route("/data/{year}/{month}", get(aggregate_by_month_handler))
        .route("/salaries", post(create_salary_handler))
        .route("/salaries/{id}", delete(delete_salary_handler))
        .route("/expenses", post(create_expense_handler))
        .route("/expenses/{id}", delete(delete_expense_handler))
        .route("/investments", post(create_investment_handler))
        .route("/investments/{id}", delete(delete_investment_handler))
        .route("/activities", post(create_activity_handler))
        .route("/activities/{id}", delete(delete_activity_handler))
        .route(
            "/members",
            get(list_members_handler).post(create_member_handler),
        )
        .route("/members/{id}", delete(delete_member_handler))
        .route("/funds", get(get_funds_handler).put(put_funds_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .with_state(state)
}

async fn root() -> String {
    "ok".to_string()
}
