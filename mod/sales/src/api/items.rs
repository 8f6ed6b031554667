use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::service::items::{NthMostQuery, TotalItemsQuery};

use super::{ApiError, AppState, ok_json};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/total_items", get(total_items))
        .route("/nth_most_total_item", get(nth_most_total_item))
}

async fn total_items(
    State(svc): State<AppState>,
    Query(query): Query<TotalItemsQuery>,
) -> Result<Json<u64>, ApiError> {
    ok_json(svc.total_items(&query))
}

async fn nth_most_total_item(
    State(svc): State<AppState>,
    Query(query): Query<NthMostQuery>,
) -> Result<Json<String>, ApiError> {
    ok_json(svc.nth_most_total_item(&query))
}
